//! Site navigation bar with scroll-reactive styling and a mobile overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` outside the route outlet. Owns its `NavState`;
//! presentation comes from `util::nav_style` keyed by the current pathname.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::nav::NavState;
use crate::util::browser;
use crate::util::nav_style::nav_style;
use crate::util::routes::{NAV_LINKS, SiteRoute};

/// Support line shown next to the call to action at the top of the page.
const SUPPORT_PHONE: &str = "+62 882 005 779 991";

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let location = use_location();

    let route = Memo::new(move |_| SiteRoute::from_path(&location.pathname.get()));
    let style = Memo::new(move |_| nav_style(route.get(), nav.with(|n| n.is_scrolled)));
    let mobile_open = Memo::new(move |_| nav.with(|n| n.mobile_open));

    // Pick up a restored scroll position before the first scroll event.
    Effect::new(move || nav.update(|n| n.on_scroll(browser::scroll_y())));

    let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| {
        nav.update(|n| n.on_scroll(browser::scroll_y()));
    });
    on_cleanup(move || {
        scroll_handle.remove();
        browser::set_scroll_locked(false);
    });

    Effect::new(move || browser::set_scroll_locked(mobile_open.get()));

    let close_mobile = move |_: leptos::ev::MouseEvent| nav.update(NavState::close_mobile);

    view! {
        <div class="navbar-frame">
            <header class=move || style.get().header_class()>
                <A href="/" attr:class=move || style.get().brand_class()>
                    <img class="navbar__logo" src="/logo.svg" alt="Menara Merah Putih Logo"/>
                    <span class="navbar__wordmark">"Menara Merah Putih" <span>"."</span></span>
                </A>

                <nav class="navbar__links">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(label, target)| {
                            view! {
                                <A
                                    href=target.path()
                                    attr:class=move || {
                                        let s = style.get();
                                        format!("navbar__link {} {}", s.text.class(), s.link_hover.class())
                                    }
                                >
                                    {label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="navbar__actions">
                    <Show when=move || style.get().show_support>
                        <div class=move || format!("navbar__support {}", style.get().text.class())>
                            <span>"WhatsApp Support"</span>
                            <span class="navbar__support-phone">{SUPPORT_PHONE}</span>
                        </div>
                    </Show>
                    <A href=SiteRoute::Contact.path() attr:class=move || style.get().cta_class()>
                        "Get Quote"
                    </A>
                </div>

                <button
                    class="navbar__menu-toggle"
                    aria-label="Toggle menu"
                    aria-expanded=move || mobile_open.get().to_string()
                    on:click=move |_| nav.update(NavState::toggle_mobile)
                >
                    <span class=move || {
                        if mobile_open.get() {
                            "navbar__menu-icon navbar__menu-icon--close tone--dark".to_owned()
                        } else {
                            format!("navbar__menu-icon {}", style.get().menu_icon.class())
                        }
                    }></span>
                </button>
            </header>
        </div>

        <Show when=move || mobile_open.get()>
            <div class="mobile-menu">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, target)| {
                        view! {
                            <A href=target.path() attr:class="mobile-menu__link" on:click=close_mobile>
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
                <A href=SiteRoute::Contact.path() attr:class="mobile-menu__cta" on:click=close_mobile>
                    "Call Dispatch"
                </A>
            </div>
        </Show>
    }
}
