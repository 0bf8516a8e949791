//! Strip of partner brand marks.

use leptos::prelude::*;

/// Partner brand names with the glyph shown next to each.
pub const PARTNERS: [(&str, &str); 7] = [
    ("Toyota", "○"),
    ("Mercedes", "☆"),
    ("BMW", "⬡"),
    ("Audi", "◉"),
    ("Volkswagen", "△"),
    ("Hyundai", "ϟ"),
    ("Kia", "◆"),
];

#[component]
pub fn PartnersSection() -> impl IntoView {
    view! {
        <section class="partners">
            {PARTNERS
                .into_iter()
                .map(|(name, glyph)| {
                    view! {
                        <div class="partners__item">
                            <span class="partners__icon" aria-hidden="true">{glyph}</span>
                            <span class="partners__name">{format!("{name}™")}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
