//! Side-by-side comparison of traditional blasting and NEDA.
//!
//! Hovering a row in either column highlights that row in both.

use leptos::prelude::*;

use crate::state::comparison::{ComparisonHover, METRICS};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Traditional,
    Neda,
}

#[component]
pub fn TechComparison() -> impl IntoView {
    let hover = RwSignal::new(ComparisonHover::default());

    let column = move |side: Side| {
        METRICS
            .iter()
            .enumerate()
            .map(|(row, metric)| {
                let value = match side {
                    Side::Traditional => metric.traditional,
                    Side::Neda => metric.neda,
                };
                view! {
                    <div
                        class="comparison__row"
                        class:comparison__row--danger={side == Side::Traditional}
                        class:comparison__row--safe={side == Side::Neda}
                        class:comparison__row--active=move || hover.with(|h| h.is_highlighted(row))
                        on:mouseenter=move |_| hover.update(|h| h.enter(row))
                        on:mouseleave=move |_| hover.update(ComparisonHover::leave)
                    >
                        <span class="comparison__label">{metric.label}</span>
                        <span class="comparison__value">{value}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="comparison">
            <section class="comparison__column comparison__column--traditional">
                <h3 class="comparison__heading">"Traditional Blasting"</h3>
                {column(Side::Traditional)}
            </section>
            <section class="comparison__column comparison__column--neda">
                <h3 class="comparison__heading">"NEDA Technology"</h3>
                <span class="comparison__subheading">"Non-Explosive Demolition Agent"</span>
                {column(Side::Neda)}
            </section>
        </div>
    }
}
