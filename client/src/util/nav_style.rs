//! Navigation bar presentation derived from `(route, is_scrolled)`.
//!
//! DESIGN
//! ======
//! All per-route colour and shape switching lives in [`nav_style`] so the
//! `Navbar` view only binds class names. Hero pages get a transparent bar
//! with light text until the visitor scrolls; every scrolled bar becomes the
//! floating pill.

#[cfg(test)]
#[path = "nav_style_test.rs"]
mod nav_style_test;

use crate::util::routes::SiteRoute;

/// Foreground tone for text and icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Light,
    Dark,
}

impl Tone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "tone--light",
            Self::Dark => "tone--dark",
        }
    }
}

/// Header outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavShape {
    /// Full-width bar flush with the top edge.
    Bar,
    /// Floating, blurred, rounded pill.
    Pill,
}

/// Hover treatment for desktop links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkHover {
    /// Brand text over a faint wash, used on the pill.
    Pill,
    /// White text over a translucent wash, used over dark heroes.
    Light,
    /// Brand text over a slate wash, used over light pages.
    Brand,
}

impl LinkHover {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Pill => "navbar__link--hover-pill",
            Self::Light => "navbar__link--hover-light",
            Self::Brand => "navbar__link--hover-brand",
        }
    }
}

/// Everything the bar needs to render for one `(route, scroll)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavStyle {
    pub shape: NavShape,
    pub transparent: bool,
    pub text: Tone,
    pub link_hover: LinkHover,
    pub menu_icon: Tone,
    pub show_support: bool,
}

impl NavStyle {
    #[must_use]
    pub fn header_class(&self) -> &'static str {
        match self.shape {
            NavShape::Bar => "navbar navbar--bar",
            NavShape::Pill => "navbar navbar--pill",
        }
    }

    /// Logo and call-to-action invert over a transparent bar.
    #[must_use]
    pub fn brand_class(&self) -> &'static str {
        if self.transparent {
            "navbar__brand navbar__brand--inverted"
        } else {
            "navbar__brand"
        }
    }

    #[must_use]
    pub fn cta_class(&self) -> &'static str {
        if self.transparent {
            "navbar__cta navbar__cta--light"
        } else {
            "navbar__cta"
        }
    }
}

#[must_use]
pub fn nav_style(route: SiteRoute, is_scrolled: bool) -> NavStyle {
    let transparent = !is_scrolled && route.has_dark_hero();
    let home_or_neda = matches!(route, SiteRoute::Home | SiteRoute::Neda);

    let link_hover = if is_scrolled {
        LinkHover::Pill
    } else if home_or_neda {
        LinkHover::Light
    } else {
        LinkHover::Brand
    };

    NavStyle {
        shape: if is_scrolled { NavShape::Pill } else { NavShape::Bar },
        transparent,
        text: if transparent { Tone::Light } else { Tone::Dark },
        link_hover,
        menu_icon: if home_or_neda { Tone::Light } else { Tone::Dark },
        show_support: !is_scrolled,
    }
}
