use super::*;

// =============================================================
// Top of page
// =============================================================

#[test]
fn home_at_top_is_transparent_light_bar() {
    let style = nav_style(SiteRoute::Home, false);
    assert_eq!(style.shape, NavShape::Bar);
    assert!(style.transparent);
    assert_eq!(style.text, Tone::Light);
    assert_eq!(style.link_hover, LinkHover::Light);
    assert_eq!(style.menu_icon, Tone::Light);
    assert!(style.show_support);
}

#[test]
fn light_pages_at_top_use_dark_text() {
    for route in [SiteRoute::Projects, SiteRoute::Contact, SiteRoute::Services] {
        let style = nav_style(route, false);
        assert!(!style.transparent, "{route:?}");
        assert_eq!(style.text, Tone::Dark);
        assert_eq!(style.link_hover, LinkHover::Brand);
        assert_eq!(style.menu_icon, Tone::Dark);
    }
}

#[test]
fn fleet_and_unknown_pages_count_as_dark_hero() {
    for route in [SiteRoute::Fleet, SiteRoute::Other] {
        let style = nav_style(route, false);
        assert!(style.transparent, "{route:?}");
        assert_eq!(style.text, Tone::Light);
        assert_eq!(style.link_hover, LinkHover::Brand);
        assert_eq!(style.menu_icon, Tone::Dark);
    }
}

// =============================================================
// Scrolled
// =============================================================

#[test]
fn scrolled_bar_is_opaque_pill_everywhere() {
    for route in SiteRoute::PAGES.into_iter().chain([SiteRoute::Other]) {
        let style = nav_style(route, true);
        assert_eq!(style.shape, NavShape::Pill, "{route:?}");
        assert!(!style.transparent);
        assert_eq!(style.text, Tone::Dark);
        assert_eq!(style.link_hover, LinkHover::Pill);
        assert!(!style.show_support);
    }
}

#[test]
fn menu_icon_ignores_scroll() {
    assert_eq!(nav_style(SiteRoute::Neda, true).menu_icon, Tone::Light);
    assert_eq!(nav_style(SiteRoute::Contact, true).menu_icon, Tone::Dark);
}

// =============================================================
// Class helpers
// =============================================================

#[test]
fn class_helpers_follow_transparency() {
    let hero = nav_style(SiteRoute::Home, false);
    assert_eq!(hero.header_class(), "navbar navbar--bar");
    assert!(hero.brand_class().contains("--inverted"));
    assert!(hero.cta_class().contains("--light"));

    let pill = nav_style(SiteRoute::Home, true);
    assert_eq!(pill.header_class(), "navbar navbar--pill");
    assert_eq!(pill.brand_class(), "navbar__brand");
    assert_eq!(pill.cta_class(), "navbar__cta");
}

#[test]
fn derivation_is_pure() {
    assert_eq!(nav_style(SiteRoute::Projects, false), nav_style(SiteRoute::Projects, false));
}
