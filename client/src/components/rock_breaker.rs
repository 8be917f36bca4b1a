//! Clickable rock on the 404 page: inject, wait, path cleared.

use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::rock_break::{BREAK_DELAY_MS, RockBreaker, RockPhase};
use crate::util::browser;
use crate::util::routes::SiteRoute;
use crate::util::timer::MountGuard;

#[component]
pub fn RockBreakGame() -> impl IntoView {
    let rock = RwSignal::new(RockBreaker::default());
    let guard = StoredValue::new(MountGuard::new());
    let phase = move || rock.with(|r| r.phase);

    let on_click = move |_: leptos::ev::MouseEvent| {
        let mut armed = false;
        rock.update(|r| armed = r.click(browser::now_ms()));
        if armed {
            guard.with_value(|g| {
                g.after(Duration::from_millis(BREAK_DELAY_MS), move || rock.update(RockBreaker::complete));
            });
        }
    };

    view! {
        <div
            class="rock"
            class:rock--intact=move || phase() == RockPhase::Intact
            class:rock--broken=move || phase() == RockPhase::Broken
            on:click=on_click
        >
            {move || match phase() {
                RockPhase::Intact => view! {
                    <div class="rock__prompt">
                        <p class="rock__title">"Inject NEDA Agent"</p>
                        <p class="rock__hint">"Click to break rock"</p>
                    </div>
                }
                .into_any(),
                RockPhase::Injecting => view! {
                    <div class="rock__progress">
                        <div class="rock__readout">
                            <span>"Expanding..."</span>
                            <span>"18,000 PSI"</span>
                        </div>
                        <div class="rock__bar">
                            <div
                                class="rock__bar-fill"
                                style=format!("animation-duration:{BREAK_DELAY_MS}ms")
                            ></div>
                        </div>
                        <p class="rock__hint">"Generating micro-cracks..."</p>
                    </div>
                }
                .into_any(),
                RockPhase::Broken => view! {
                    <div class="rock__cleared">
                        <p class="rock__title">"Path Cleared!"</p>
                        <A href=SiteRoute::Neda.path() attr:class="rock__link">
                            "View NEDA Tech Specs"
                        </A>
                    </div>
                    <div class="rock__crack rock__crack--a"></div>
                    <div class="rock__crack rock__crack--b"></div>
                }
                .into_any(),
            }}
        </div>
    }
}
