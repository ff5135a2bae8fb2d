use std::{future::Future, time::Duration};

use leptos::{either::Either, prelude::*, task::spawn_local};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::endpoints::settle;
use super::toast::use_toaster;
use crate::forms::{Field, FormFields, FormState, SubmitPhase};
use crate::submit::SubmitOutcome;

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-md border bg-white/80 transition-colors duration-300 focus:outline-none focus:ring-2";

/// Labelled input or textarea with its inline error and aria wiring.
#[component]
pub fn TextField(
    form: &'static str,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] inputmode: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let input_id = format!("{form}-{}", field.id());
    let error_id = field.error_id(form);
    let described_by = {
        let error_id = error_id.clone();
        move || error.get().map(|_| error_id.clone())
    };
    let class = move || {
        if error.get().is_some() {
            format!("{INPUT_CLASS} border-red-500 focus:ring-red-500")
        } else {
            format!("{INPUT_CLASS} border-gray-300 focus:ring-purple-500")
        }
    };
    let invalid = move || error.get().is_some().to_string();

    view! {
        <div class="space-y-2">
            <label for=input_id.clone() class="block text-sm font-medium text-gray-800">
                {label}
            </label>
            {if multiline {
                Either::Left(
                    view! {
                        <textarea
                            id=input_id
                            class=move || format!("{} min-h-[120px] resize-y", class())
                            placeholder=placeholder
                            required=required
                            disabled=move || disabled.get()
                            aria-invalid=invalid
                            aria-describedby=described_by
                            prop:value=move || value.get()
                            on:input=move |ev| on_input.run(event_target_value(&ev))
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            id=input_id
                            type=input_type
                            inputmode=inputmode
                            class=class
                            placeholder=placeholder
                            required=required
                            disabled=move || disabled.get()
                            aria-invalid=invalid
                            aria-describedby=described_by
                            prop:value=move || value.get()
                            on:input=move |ev| on_input.run(event_target_value(&ev))
                        />
                    },
                )
            }}
            {move || {
                error
                    .get()
                    .map(|msg| {
                        view! {
                            <p id=error_id.clone() class="text-sm text-red-600" role="alert">
                                {msg}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

/// Submit button whose label follows the submission phase.
#[component]
pub fn SubmitButton(
    #[prop(into)] phase: Signal<SubmitPhase>,
    idle: &'static str,
    sending: &'static str,
    sent: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            disabled=move || phase.get() != SubmitPhase::Idle
            aria-busy=move || (phase.get() == SubmitPhase::Submitting).to_string()
            class=format!(
                "inline-flex items-center justify-center gap-2 px-6 py-2 rounded-md font-medium text-white bg-purple-600 hover:bg-purple-700 disabled:opacity-60 disabled:cursor-not-allowed transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:ring-offset-2 {class}",
            )
        >
            {move || match phase.get() {
                SubmitPhase::Idle => idle,
                SubmitPhase::Submitting => sending,
                SubmitPhase::Success => sent,
            }}
        </button>
    }
}

/// Wires a form's state to its server function.
///
/// The returned closure validates and sends the form, toasts the outcome, and
/// after a success clears the form once `reset_delay` has passed. `on_reset`
/// runs right after that clearing.
pub fn use_form_submit<T, F, Fut>(
    state: RwSignal<FormState<T>>,
    send: F,
    reset_delay: Duration,
    on_reset: impl Fn() + Clone + Send + Sync + 'static,
) -> impl Fn() + Clone + Send + Sync + 'static
where
    T: FormFields + Send + Sync + 'static,
    F: Fn(T) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<SubmitOutcome, ServerFnError>> + 'static,
{
    let toaster = use_toaster();
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| {
            state.update(FormState::reset);
            on_reset();
        },
        reset_delay.as_millis() as f64,
    );

    move || {
        let Some(payload) = state.try_update(FormState::submit).flatten() else {
            return;
        };
        let send = send.clone();
        let start = start.clone();
        spawn_local(async move {
            let res = settle(send(payload).await);
            let accepted = res.is_ok();
            if let Some(notice) = state.try_update(|s| s.complete(res)) {
                toaster.notify(notice);
            }
            if accepted {
                start(());
            }
        });
    }
}

/// Value, inline error and input handler for one field of `state`.
pub fn bind<T>(
    state: RwSignal<FormState<T>>,
    field: Field,
    get: fn(&T) -> &String,
    set: fn(&mut T, String),
) -> (Signal<String>, Signal<Option<String>>, Callback<String>)
where
    T: FormFields + Send + Sync + 'static,
{
    let value = Signal::derive(move || state.with(|s| get(&s.data).clone()));
    let error = Signal::derive(move || state.with(|s| s.errors.message(field)));
    let on_input = Callback::new(move |v: String| state.update(|s| s.edit(field, |d| set(d, v))));
    (value, error, on_input)
}

pub fn busy<T>(state: RwSignal<FormState<T>>) -> Signal<bool>
where
    T: FormFields + Send + Sync + 'static,
{
    Signal::derive(move || state.with(FormState::is_busy))
}

pub fn phase<T>(state: RwSignal<FormState<T>>) -> Signal<SubmitPhase>
where
    T: FormFields + Send + Sync + 'static,
{
    Signal::derive(move || state.with(|s| s.phase))
}
