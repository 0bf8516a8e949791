//! Landing page: header, hero, partner strip, feature cards and the
//! application dialog.
//!
//! The page owns the dialog state. Every call-to-action on the page opens the
//! same dialog, optionally seeded with a vehicle.

use leads::ApplicationDialog;
use leptos::prelude::*;

use crate::components::application_modal::ApplicationModal;
use crate::components::feature_cards::financing_card::FinancingCard;
use crate::components::feature_cards::vehicle_search_card::VehicleSearchCard;
use crate::components::header::Header;
use crate::components::partners_section::PartnersSection;

#[component]
pub fn LandingPage() -> impl IntoView {
    let dialog = RwSignal::new(ApplicationDialog::default());
    provide_context(dialog);

    view! {
        <div class="landing">
            <Header/>

            <main class="landing__main">
                <section class="hero">
                    <h1 class="hero__title">"Автомобиль вашей мечты на выгодных условиях"</h1>
                    <p class="hero__lead">
                        "Подбор, проверка и финансирование автомобиля в одном месте."
                    </p>
                </section>

                <PartnersSection/>

                <section class="feature-grid">
                    <VehicleSearchCard/>
                    <FinancingCard/>
                </section>
            </main>

            <ApplicationModal dialog/>
        </div>
    }
}
