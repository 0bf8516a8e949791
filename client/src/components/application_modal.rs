//! Lead-capture dialog: contact details, vehicle, financing parameters.
//!
//! The dialog state (`leads::ApplicationDialog`) is owned by the landing page
//! and passed in as a signal. Inputs apply typed field updates; submitting
//! moves the dialog into its busy phase, runs the workflow on the browser
//! event loop and settles the dialog with the outcome.

#[cfg(test)]
#[path = "application_modal_test.rs"]
mod application_modal_test;

use leads::application::Field;
use leads::{ApplicationDialog, FieldUpdate, FinancingType, LoanTerm};
use leptos::prelude::*;

use crate::state::toasts::ToastState;
use crate::util::config::ClientConfig;

/// Label of the submit button for the current busy state.
pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Отправка..." } else { "Отправить заявку" }
}

/// Text shown in the input bound to `field`.
pub fn input_text(dialog: &ApplicationDialog, field: Field) -> String {
    dialog.form().value(field).to_string()
}

/// Application dialog, rendered while the dialog is open.
#[component]
pub fn ApplicationModal(dialog: RwSignal<ApplicationDialog>) -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let submitting = move || dialog.with(ApplicationDialog::is_submitting);
    let cancel = move || {
        dialog.update(|d| {
            d.cancel();
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(begun) = dialog.try_update(ApplicationDialog::begin_submit) else {
            return;
        };
        let application = match begun {
            Ok(application) => application,
            Err(e) => {
                log::debug!("submit ignored: {e}");
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let endpoint = config.endpoint().cloned();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::submit_application(endpoint.as_ref(), toasts, &application).await;
                dialog.update(|d| d.settle(&outcome));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (application, &config, toasts);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            cancel();
        }
    };

    view! {
        <Show when=move || dialog.with(ApplicationDialog::is_open)>
            <div class="dialog-backdrop" on:click=move |_| cancel()>
                <div
                    class="dialog dialog--application"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <h2 class="dialog__title">"Оставить заявку"</h2>
                    <p class="dialog__description">
                        "Заполните форму, и наш менеджер свяжется с вами в течение 15 минут"
                    </p>

                    <form class="dialog__form" on:submit=on_submit.clone()>
                        <fieldset class="dialog__section">
                            <TextInput dialog field=Field::Name label="Ваше имя *" placeholder="Иван Петров" required=true/>
                            <TextInput
                                dialog
                                field=Field::Phone
                                label="Телефон *"
                                input_type="tel"
                                placeholder="+7 (999) 123-45-67"
                                required=true
                            />
                            <TextInput
                                dialog
                                field=Field::Email
                                label="Email *"
                                input_type="email"
                                placeholder="ivan@example.com"
                                required=true
                            />
                        </fieldset>

                        <fieldset class="dialog__section">
                            <TextInput dialog field=Field::CarName label="Автомобиль *" placeholder="BMW X5 2022" required=true/>
                            <TextInput
                                dialog
                                field=Field::CarPrice
                                label="Цена автомобиля (₽) *"
                                input_type="number"
                                placeholder="3000000"
                                required=true
                            />
                        </fieldset>

                        <fieldset class="dialog__section">
                            <label class="dialog__label">
                                "Тип финансирования"
                                <select
                                    class="dialog__input"
                                    on:change=move |ev| apply_input(dialog, Field::FinancingType, event_target_value(&ev))
                                >
                                    {FinancingType::ALL
                                        .into_iter()
                                        .map(|kind| {
                                            view! {
                                                <option
                                                    value=kind.as_str()
                                                    selected=move || dialog.with(|d| d.form().financing_type == kind)
                                                >
                                                    {kind.label()}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>

                            <div class="dialog__row">
                                <TextInput
                                    dialog
                                    field=Field::InitialPayment
                                    label="Первый взнос (₽)"
                                    input_type="number"
                                    placeholder="0"
                                />
                                <label class="dialog__label">
                                    "Срок (мес.)"
                                    <select
                                        class="dialog__input"
                                        on:change=move |ev| apply_input(dialog, Field::LoanTerm, event_target_value(&ev))
                                    >
                                        {LoanTerm::ALL
                                            .into_iter()
                                            .map(|term| {
                                                view! {
                                                    <option
                                                        value=term.months().to_string()
                                                        selected=move || dialog.with(|d| d.form().loan_term == term)
                                                    >
                                                        {term.label()}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                            </div>

                            <TextInput
                                dialog
                                field=Field::City
                                label="Город доставки"
                                placeholder="Москва, Санкт-Петербург..."
                            />

                            <label class="dialog__label">
                                "Комментарий"
                                <textarea
                                    class="dialog__textarea"
                                    rows="3"
                                    placeholder="Укажите пожелания..."
                                    prop:value=move || dialog.with(|d| input_text(d, Field::Comment))
                                    on:input=move |ev| apply_input(dialog, Field::Comment, event_target_value(&ev))
                                ></textarea>
                            </label>
                        </fieldset>

                        <div class="dialog__actions">
                            <button
                                type="button"
                                class="btn btn--outline"
                                disabled=move || !dialog.with(ApplicationDialog::can_cancel)
                                on:click=move |_| cancel()
                            >
                                "Отмена"
                            </button>
                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled=move || !dialog.with(ApplicationDialog::can_submit)
                            >
                                <Show when=submitting>
                                    <span class="spinner" aria-hidden="true"></span>
                                </Show>
                                {move || submit_label(submitting())}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Labelled `<input>` bound to one application field.
#[component]
fn TextInput(
    dialog: RwSignal<ApplicationDialog>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let min = (input_type == "number").then_some("0");

    view! {
        <label class="dialog__label">
            {label}
            <input
                class="dialog__input"
                id=field.key()
                type=input_type
                placeholder=placeholder
                required=required
                min=min
                prop:value=move || dialog.with(|d| input_text(d, field))
                on:input=move |ev| apply_input(dialog, field, event_target_value(&ev))
            />
        </label>
    }
}

/// Parse raw control input and apply it to the dialog.
fn apply_input(dialog: RwSignal<ApplicationDialog>, field: Field, raw: String) {
    match FieldUpdate::parse(field.key(), raw) {
        Ok(update) => dialog.update(|d| d.update(update)),
        Err(e) => log::warn!("ignoring input: {e}"),
    }
}
