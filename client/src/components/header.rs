//! Site header: logo, navigation and the "pick a car" call to action.

use leads::ApplicationDialog;
use leptos::prelude::*;

/// Navigation entries. `true` marks entries with a dropdown caret.
const NAV_LINKS: [(&str, bool); 5] = [
    ("Каталог авто", false),
    ("Финансирование", true),
    ("Как купить", false),
    ("О нас", false),
    ("Контакты", false),
];

/// Header bar. The call-to-action opens the application dialog without a vehicle.
#[component]
pub fn Header() -> impl IntoView {
    let dialog = expect_context::<RwSignal<ApplicationDialog>>();

    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <Logo/>
                <span class="site-header__name">"АвтоПлатформа" <sup>"™"</sup></span>
            </div>

            <nav class="site-header__nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, has_menu)| {
                        view! {
                            <a href="#" class="site-header__link">
                                {label}
                                {has_menu
                                    .then(|| view! { <span class="site-header__caret" aria-hidden="true">"▾"</span> })}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <button class="btn btn--outline site-header__cta" on:click=move |_| dialog.update(|d| d.open(None))>
                "Подобрать авто"
            </button>
        </header>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
            <path
                d="M5 11L7 6H17L19 11M5 11V18H19V11M5 11H19M7 18H8M16 18H17"
                stroke="#8B5CF6"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            />
            <circle cx="8" cy="18" r="1.5" fill="#8B5CF6"/>
            <circle cx="16" cy="18" r="1.5" fill="#8B5CF6"/>
        </svg>
    }
}
