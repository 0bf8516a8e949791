//! "Search and selection" card listing catalog vehicles.

use leads::catalog::VEHICLES;
use leads::{ApplicationDialog, Seed, Vehicle};
use leptos::prelude::*;

/// Vehicle list card. Picking a row opens the dialog seeded with that vehicle.
#[component]
pub fn VehicleSearchCard() -> impl IntoView {
    let dialog = expect_context::<RwSignal<ApplicationDialog>>();

    view! {
        <div class="feature-card">
            <div class="feature-card__icon" aria-hidden="true">"⌕"</div>
            <h3 class="feature-card__title">"Поиск и подбор"</h3>
            <p class="feature-card__text">
                "Тысячи автомобилей от официальных дилеров с удобными фильтрами поиска"
            </p>
            <a href="#" class="feature-card__more">"Подробнее ↗"</a>

            <div class="feature-card__panel">
                {VEHICLES
                    .iter()
                    .map(|vehicle| view! { <VehicleRow vehicle dialog/> })
                    .collect::<Vec<_>>()}
                <button class="btn btn--ghost feature-card__show-more">"+ Показать ещё"</button>
            </div>
        </div>
    }
}

#[component]
fn VehicleRow(vehicle: &'static Vehicle, dialog: RwSignal<ApplicationDialog>) -> impl IntoView {
    let on_pick = move |_| dialog.update(|d| d.open(Some(Seed::from(vehicle))));

    view! {
        <button class="vehicle-row" on:click=on_pick title="Оставить заявку на этот автомобиль">
            <span class="avatar avatar--square">
                {match vehicle.image {
                    Some(src) => view! { <img class="avatar__image" src=src alt=vehicle.name/> }.into_any(),
                    None => view! { <span class="avatar__fallback">{vehicle.initials()}</span> }.into_any(),
                }}
            </span>
            <span class="vehicle-row__info">
                <span class="vehicle-row__name">{vehicle.name}</span>
                <span class="vehicle-row__specs">{vehicle.specs}</span>
            </span>
            <span class="vehicle-row__price">{vehicle.price_label()}</span>
        </button>
    }
}
