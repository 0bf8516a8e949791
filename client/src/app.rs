//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::pages::landing::LandingPage;
use crate::state::toasts::ToastState;
use crate::util::config::{ClientConfig, ENDPOINT_META_NAME};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The endpoint URL is written into a `<meta>` tag so the hydrated client
/// picks up the host's configuration at runtime.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let endpoint = config.endpoint_url().unwrap_or_default().to_owned();
    provide_context(config);
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=ENDPOINT_META_NAME content=endpoint/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the client configuration and the toast queue to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_document);
    provide_context(config);

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/autolead.css"/>
        <Title text="АвтоПлатформа — автомобили в кредит и лизинг"/>

        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
        <Toaster toasts/>
    }
}
