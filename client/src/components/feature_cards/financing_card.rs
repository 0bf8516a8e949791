//! "Financing" card advertising the featured vehicle's credit offer.

#[cfg(test)]
#[path = "financing_card_test.rs"]
mod financing_card_test;

use leads::catalog::FEATURED;
use leads::format::{format_integer, format_rub};
use leads::{ApplicationDialog, FinancingType, LoanTerm, Seed, Vehicle};
use leptos::prelude::*;

/// Advertised monthly payment for the featured offer, in roubles.
pub const ADVERTISED_MONTHLY_PAYMENT: u64 = 114_833;

/// `"3.0L Автомат · 6 890 000 ₽"`: engine and gearbox, then price.
pub fn offer_subtitle(vehicle: &Vehicle) -> String {
    let engine_and_gearbox = vehicle.specs.split(", ").take(2).collect::<Vec<_>>().join(" ");
    format!("{engine_and_gearbox} · {}", format_rub(vehicle.price))
}

/// `"60 месяцев · Платёж 114 833 ₽/мес"`.
pub fn term_summary(term: LoanTerm, monthly_payment: u64) -> String {
    format!("{} · Платёж {} ₽/мес", term.label(), format_integer(monthly_payment))
}

/// Credit offer card. The call-to-action opens the dialog seeded with the
/// featured vehicle.
#[component]
pub fn FinancingCard() -> impl IntoView {
    let dialog = expect_context::<RwSignal<ApplicationDialog>>();
    let vehicle = FEATURED;

    view! {
        <div class="feature-card">
            <div class="feature-card__icon" aria-hidden="true">"▭"</div>
            <h3 class="feature-card__title">"Финансирование"</h3>
            <p class="feature-card__text">
                "Кредит, лизинг или рассрочка от ведущих банков на выгодных условиях"
            </p>
            <a href="#" class="feature-card__more">"Подробнее ↗"</a>

            <div class="feature-card__panel">
                <div class="offer-row">
                    <span class="avatar">
                        <span class="avatar__fallback">{vehicle.initials()}</span>
                    </span>
                    <div>
                        <p class="offer-row__title">{vehicle.name}</p>
                        <p class="offer-row__subtitle">{offer_subtitle(vehicle)}</p>
                    </div>
                </div>

                <div class="offer-field">
                    <span class="offer-field__label">"Тип финансирования"</span>
                    <div class="offer-field__value">{FinancingType::Credit.label()}</div>
                    <p class="offer-field__hint">"Одобрение за 30 минут, без первого взноса."</p>
                </div>

                <div class="offer-row offer-row--dashed">
                    <span class="offer-row__icon" aria-hidden="true">"▦"</span>
                    <div>
                        <p class="offer-row__title">"Срок кредита"</p>
                        <p class="offer-row__subtitle">
                            {term_summary(LoanTerm::default(), ADVERTISED_MONTHLY_PAYMENT)}
                        </p>
                    </div>
                </div>

                <button
                    class="btn btn--primary btn--block"
                    on:click=move |_| dialog.update(|d| d.open(Some(Seed::from(vehicle))))
                >
                    "Оформить кредит"
                </button>
            </div>
        </div>
    }
}
