//! Toast stack rendered in the bottom-right corner of the page.

use leads::NoticeLevel;
use leptos::prelude::*;

use crate::state::toasts::ToastState;

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Error => "toast toast--error",
        NoticeLevel::Info => "toast toast--info",
    }
}

#[component]
pub fn Toaster(toasts: RwSignal<ToastState>) -> impl IntoView {
    view! {
        <ol class="toaster" aria-live="polite">
            <For each=move || toasts.with(ToastState::visible) key=|toast| toast.id let:toast>
                <li class=level_class(toast.notice.level) role="status">
                    <div class="toast__body">
                        <p class="toast__message">{toast.notice.message.clone()}</p>
                        {toast
                            .notice
                            .options
                            .description
                            .clone()
                            .map(|description| view! { <p class="toast__description">{description}</p> })}
                    </div>
                    <button
                        class="toast__close"
                        aria-label="Закрыть"
                        on:click=move |_| {
                            toasts.update(|t| {
                                t.dismiss(toast.id);
                            });
                        }
                    >
                        "×"
                    </button>
                </li>
            </For>
        </ol>
    }
}
