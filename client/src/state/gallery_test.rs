use std::collections::HashSet;

use super::*;

const CATEGORIES: [ProjectCategory; 3] =
    [ProjectCategory::Neda, ProjectCategory::DustControl, ProjectCategory::RoadHardness];

fn ids(records: &[ProjectRecord]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_ids_are_unique() {
    let unique: HashSet<_> = PROJECTS.iter().map(|r| r.id).collect();
    assert_eq!(unique.len(), PROJECTS.len());
}

#[test]
fn catalog_has_every_category() {
    for category in CATEGORIES {
        assert!(PROJECTS.iter().any(|r| r.category == category), "{category} missing");
    }
}

#[test]
fn chips_are_in_display_order() {
    let labels: Vec<_> = CategoryFilter::CHIPS.iter().map(|c| c.label()).collect();
    assert_eq!(labels, ["All", "NEDA", "Dust Control", "Road Hardness"]);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn default_selection_shows_everything() {
    let gallery = GalleryFilterState::default();
    assert_eq!(gallery.selected, CategoryFilter::All);
    assert_eq!(gallery.visible_projects(), PROJECTS.to_vec());
}

#[test]
fn each_category_shows_only_its_records_in_order() {
    for category in CATEGORIES {
        let mut gallery = GalleryFilterState::default();
        gallery.set_category(CategoryFilter::Only(category));
        let visible = gallery.visible_projects();

        assert!(!visible.is_empty());
        assert!(visible.iter().all(|r| r.category == category));

        let expected: Vec<_> = PROJECTS.iter().filter(|r| r.category == category).map(|r| r.id).collect();
        assert_eq!(ids(&visible), expected);
    }
}

#[test]
fn dust_control_subset_matches_catalog() {
    let mut gallery = GalleryFilterState::default();
    gallery.set_category(CategoryFilter::Only(ProjectCategory::DustControl));
    assert_eq!(ids(&gallery.visible_projects()), [7, 8, 9]);
}

#[test]
fn all_restores_full_list_after_other_selection() {
    let mut gallery = GalleryFilterState::default();
    gallery.set_category(CategoryFilter::Only(ProjectCategory::RoadHardness));
    assert_eq!(gallery.visible_projects().len(), 1);

    gallery.set_category(CategoryFilter::All);
    assert_eq!(ids(&gallery.visible_projects()), ids(PROJECTS));
}

#[test]
fn set_category_is_idempotent() {
    let mut gallery = GalleryFilterState::default();
    gallery.set_category(CategoryFilter::Only(ProjectCategory::Neda));
    let once = gallery.visible_projects();
    gallery.set_category(CategoryFilter::Only(ProjectCategory::Neda));
    assert_eq!(gallery.visible_projects(), once);
}

#[test]
fn custom_record_list_is_respected() {
    static RECORDS: &[ProjectRecord] = &[
        project(30, "C", "X", ProjectCategory::RoadHardness, "/c.jpg"),
        project(10, "A", "X", ProjectCategory::Neda, "/a.jpg"),
        project(20, "B", "X", ProjectCategory::RoadHardness, "/b.jpg"),
    ];
    let mut gallery = GalleryFilterState::new(RECORDS);
    gallery.set_category(CategoryFilter::Only(ProjectCategory::RoadHardness));
    assert_eq!(ids(&gallery.visible_projects()), [30, 20]);
}
