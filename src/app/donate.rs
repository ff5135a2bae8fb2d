use leptos::{ev, prelude::*};

use super::endpoints::submit_donation;
use super::fields::{bind, busy, phase, use_form_submit, SubmitButton, TextField};
use super::modal::Modal;
use crate::forms::{
    DonationForm, Field, FormState, PaymentMethod, PRESET_AMOUNTS, SUCCESS_RESET_DELAY,
};

const FORM: &str = "don";

/// Shared open/closed flag of the single donation dialog.
#[derive(Debug, Clone, Copy)]
pub struct DonateTrigger(RwSignal<bool>);

impl DonateTrigger {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    pub fn open(&self) {
        self.0.set(true);
    }

    pub fn close(&self) {
        self.0.set(false);
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }
}

impl Default for DonateTrigger {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FloatingDonateButton() -> impl IntoView {
    let donate = expect_context::<DonateTrigger>();

    view! {
        <div class="fixed bottom-6 right-6 z-40 sm:bottom-8 sm:right-8">
            <button
                class="relative group rounded-full p-[2px] bg-gradient-to-r from-purple-500 via-blue-500 to-purple-500 shadow-xl hover:scale-105 active:scale-95 transition-transform duration-200 focus:outline-none focus-visible:ring-2 focus-visible:ring-purple-400 focus-visible:ring-offset-2"
                aria-label="Faire un don à notre église"
                aria-haspopup="dialog"
                on:click=move |_| donate.open()
            >
                <span class="flex items-center gap-3 rounded-full bg-purple-700/90 backdrop-blur-xl px-4 py-3 sm:px-5 sm:py-4 text-white font-semibold">
                    <span class="group-hover:animate-pulse" aria-hidden="true">"♥"</span>
                    <span class="hidden sm:inline">"Faire un don"</span>
                </span>
            </button>
        </div>
    }
}

#[component]
pub fn DonationModal() -> impl IntoView {
    let donate = expect_context::<DonateTrigger>();
    let state = RwSignal::new(FormState::<DonationForm>::default());
    let submit = use_form_submit(state, submit_donation, SUCCESS_RESET_DELAY, move || {
        donate.close()
    });

    let (name, name_err, on_name) = bind(state, Field::Name, |d| &d.name, |d, v| d.name = v);
    let (email, email_err, on_email) = bind(state, Field::Email, |d| &d.email, |d, v| d.email = v);
    let (phone, phone_err, on_phone) = bind(state, Field::Phone, |d| &d.phone, |d, v| d.phone = v);
    let (message, message_err, on_message) =
        bind(state, Field::Message, |d| &d.message, |d, v| d.message = v);
    let (custom, amount_err, on_custom) = bind(
        state,
        Field::Amount,
        |d| &d.custom_amount,
        |d, v| d.set_custom_amount(v),
    );
    let disabled = busy(state);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let presets = move || {
        PRESET_AMOUNTS
            .into_iter()
            .map(|amount| {
                let pressed = move || state.with(|s| s.data.preset == Some(amount));
                view! {
                    <button
                        type="button"
                        class=move || {
                            if pressed() {
                                "px-3 py-2 rounded-md border font-semibold transition-colors bg-purple-600 text-white border-purple-600"
                            } else {
                                "px-3 py-2 rounded-md border font-semibold transition-colors bg-white text-gray-800 border-gray-300 hover:border-purple-500"
                            }
                        }
                        aria-pressed=move || pressed().to_string()
                        disabled=move || disabled.get()
                        on:click=move |_| {
                            state.update(|s| s.edit(Field::Amount, |d| d.select_preset(amount)))
                        }
                    >
                        {format!("{amount} €")}
                    </button>
                }
            })
            .collect_view()
    };

    let methods = move || {
        PaymentMethod::ALL
            .into_iter()
            .map(|method| {
                view! {
                    <label
                        for=method.input_id(FORM)
                        class="flex items-center gap-2 px-3 py-2 rounded-md border border-gray-300 cursor-pointer hover:border-purple-500 has-[:checked]:border-purple-600 has-[:checked]:bg-purple-50"
                    >
                        <input
                            id=method.input_id(FORM)
                            type="radio"
                            name=format!("{FORM}-method")
                            value=method.id()
                            class="accent-purple-600"
                            prop:checked=move || state.with(|s| s.data.method == method)
                            disabled=move || disabled.get()
                            on:change=move |_| state.update(|s| s.data.method = method)
                        />
                        <span class="text-sm">{method.to_string()}</span>
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <Modal
            open=Signal::derive(move || donate.is_open())
            on_close=move |_| donate.close()
            labelled_by="donation-title"
            described_by="donation-description"
        >
            <div class="relative w-full max-w-xl max-h-[90vh] overflow-y-auto bg-white rounded-2xl shadow-2xl p-6 sm:p-8">
                <button
                    type="button"
                    class="absolute top-3 right-3 p-2 rounded-md text-gray-500 hover:text-gray-900 hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-purple-500"
                    aria-label="Fermer le formulaire de don"
                    on:click=move |_| donate.close()
                >
                    "✕"
                </button>
                <h2 id="donation-title" class="text-2xl font-bold text-gray-900 mb-2">
                    "Soutenir la construction"
                </h2>
                <p id="donation-description" class="text-gray-600 mb-6">
                    "Choisissez un montant et un moyen de paiement. Nous vous recontacterons pour finaliser votre don."
                </p>
                <form class="space-y-5" novalidate=true on:submit=on_submit.clone()>
                    <fieldset class="space-y-3">
                        <legend class="block text-sm font-medium text-gray-800 mb-2">"Montant"</legend>
                        <div class="grid grid-cols-3 sm:grid-cols-5 gap-2" role="group" aria-label="Montants suggérés">
                            {presets()}
                        </div>
                        <TextField
                            form=FORM
                            field=Field::Amount
                            label="Autre montant (min. 5 €)"
                            inputmode="numeric"
                            placeholder="Montant en €"
                            value=custom
                            error=amount_err
                            disabled=disabled
                            on_input=on_custom
                        />
                    </fieldset>
                    <fieldset>
                        <legend class="block text-sm font-medium text-gray-800 mb-2">"Moyen de paiement"</legend>
                        <div class="grid grid-cols-2 gap-2">{methods()}</div>
                    </fieldset>
                    <TextField
                        form=FORM
                        field=Field::Name
                        label="Nom *"
                        placeholder="Votre nom complet"
                        required=true
                        value=name
                        error=name_err
                        disabled=disabled
                        on_input=on_name
                    />
                    <TextField
                        form=FORM
                        field=Field::Email
                        label="Email *"
                        input_type="email"
                        placeholder="votre.email@exemple.com"
                        required=true
                        value=email
                        error=email_err
                        disabled=disabled
                        on_input=on_email
                    />
                    <TextField
                        form=FORM
                        field=Field::Phone
                        label="Téléphone *"
                        input_type="tel"
                        placeholder="034 00 000 00"
                        required=true
                        value=phone
                        error=phone_err
                        disabled=disabled
                        on_input=on_phone
                    />
                    <TextField
                        form=FORM
                        field=Field::Message
                        label="Message (optionnel)"
                        placeholder="Un mot pour la communauté..."
                        multiline=true
                        value=message
                        error=message_err
                        disabled=disabled
                        on_input=on_message
                    />
                    <SubmitButton
                        phase=phase(state)
                        idle="Confirmer mon don"
                        sending="Envoi..."
                        sent="Merci !"
                        class="w-full"
                    />
                </form>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_trigger_starts_closed_and_toggles() {
        Owner::new().with(|| {
            let donate = DonateTrigger::default();
            assert!(!donate.is_open());
            donate.open();
            assert!(donate.is_open());
            donate.close();
            assert!(!donate.is_open());
        });
    }
}
