//! Project portfolio records and the category filter over them.
//!
//! DESIGN
//! ======
//! The catalog is a build-time `static` slice; the filter state holds only
//! the selected chip. Visible projects are derived on every read so there is
//! no cached subset to drift from the selection.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::fmt;

/// Service category a case study belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    Neda,
    DustControl,
    RoadHardness,
}

impl ProjectCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Neda => "NEDA",
            Self::DustControl => "Dust Control",
            Self::RoadHardness => "Road Hardness",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter chip selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Chip order in the filter bar.
    pub const CHIPS: [Self; 4] = [
        Self::All,
        Self::Only(ProjectCategory::Neda),
        Self::Only(ProjectCategory::DustControl),
        Self::Only(ProjectCategory::RoadHardness),
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

/// A completed client project shown in the portfolio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u32,
    pub client: &'static str,
    pub location: &'static str,
    pub category: ProjectCategory,
    pub image_ref: &'static str,
}

const fn project(
    id: u32,
    client: &'static str,
    location: &'static str,
    category: ProjectCategory,
    image_ref: &'static str,
) -> ProjectRecord {
    ProjectRecord { id, client, location, category, image_ref }
}

/// Portfolio in display order.
pub static PROJECTS: &[ProjectRecord] = &[
    project(1, "PT Adijaya Karya Nusantara", "Indonesia", ProjectCategory::Neda, "/pt-akm-1.jpg"),
    project(2, "PT Vale Soroako", "South Sulawesi", ProjectCategory::Neda, "/pt-vale-1.jpg"),
    project(3, "Tirta Bara Laksana", "Yogyakarta", ProjectCategory::Neda, "/tirta-bara-laksana-1.jpg"),
    project(4, "PT Semen Baturaja", "South Sumatra", ProjectCategory::Neda, "/semen-baturaja-1.jpg"),
    project(5, "PT Semen Tuban", "East Java", ProjectCategory::Neda, "/semen-tuban-1.jpg"),
    project(6, "PT Unichem Indonesia", "Nusa Tenggara", ProjectCategory::Neda, "/pt-unichem-1.jpg"),
    project(7, "PT Semen Tuban", "East Java", ProjectCategory::DustControl, "/semen-tuban-2.jpg"),
    project(8, "PT Semen Tonasa", "South Sulawesi", ProjectCategory::DustControl, "/pt-tonasa-1.jpg"),
    project(9, "Festival Dragon Boat", "Riau", ProjectCategory::DustControl, "/dragon-fly-boat-1.jpg"),
    project(10, "Festival Dragon Boat", "Riau", ProjectCategory::RoadHardness, "/dragon-fly-boat-2.jpg"),
];

/// Gallery selection over a fixed record list.
#[derive(Clone, Copy, Debug)]
pub struct GalleryFilterState {
    pub selected: CategoryFilter,
    records: &'static [ProjectRecord],
}

impl Default for GalleryFilterState {
    fn default() -> Self {
        Self::new(PROJECTS)
    }
}

impl GalleryFilterState {
    #[must_use]
    pub fn new(records: &'static [ProjectRecord]) -> Self {
        Self { selected: CategoryFilter::All, records }
    }

    pub fn set_category(&mut self, filter: CategoryFilter) {
        self.selected = filter;
    }

    /// Records matching the selection, in catalog order.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<ProjectRecord> {
        self.records
            .iter()
            .filter(|record| self.selected.matches(record.category))
            .copied()
            .collect()
    }
}
