use leptos::{ev, prelude::*};

use super::endpoints::submit_contact;
use super::fields::{bind, busy, phase, use_form_submit, SubmitButton, TextField};
use crate::content::CONTACTS;
use crate::forms::{ContactForm as ContactData, Field, FormState, SUCCESS_RESET_DELAY};
use crate::nav::Section;

const FORM: &str = "contact";

#[component]
pub fn ContactForm() -> impl IntoView {
    let state = RwSignal::new(FormState::<ContactData>::default());
    let submit = use_form_submit(state, submit_contact, SUCCESS_RESET_DELAY, || ());

    let (name, name_err, on_name) = bind(state, Field::Name, |d| &d.name, |d, v| d.name = v);
    let (email, email_err, on_email) = bind(state, Field::Email, |d| &d.email, |d, v| d.email = v);
    let (phone, phone_err, on_phone) = bind(state, Field::Phone, |d| &d.phone, |d, v| d.phone = v);
    let (message, message_err, on_message) =
        bind(state, Field::Message, |d| &d.message, |d, v| d.message = v);
    let disabled = busy(state);

    let on_submit = {
        let submit = submit.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            submit();
        }
    };
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
            ev.prevent_default();
            submit();
        }
    };

    view! {
        <section id=Section::Contact.id() class="w-full" aria-labelledby="contact-title">
            <div class="bg-white/5 backdrop-blur-md border border-white/10 rounded-lg p-4 sm:p-6 lg:p-8 space-y-4 sm:space-y-6">
                <div class="text-center space-y-2">
                    <h2 id="contact-title" class="text-2xl sm:text-3xl font-bold">"Contactez-nous"</h2>
                    <p class="text-gray-600">
                        "N'hésitez pas à nous contacter pour toute question ou demande"
                    </p>
                </div>

                <div aria-labelledby="contact-info-heading">
                    <h3 id="contact-info-heading" class="sr-only">"Informations de contact"</h3>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6">
                        {CONTACTS
                            .iter()
                            .map(|c| {
                                view! {
                                    <div class="flex items-center gap-3 p-4 rounded-lg bg-white/5 border border-white/10 hover:bg-white/10 transition-all duration-300">
                                        <div class="flex-1 min-w-0">
                                            <p class="text-sm font-medium">{c.label.clone()}</p>
                                            <a
                                                href=c.tel_href()
                                                class="text-sm text-gray-600 hover:text-purple-700 transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-purple-500 rounded-sm"
                                                aria-label=format!("Appeler {} au {}", c.label, c.number)
                                            >
                                                {c.number.clone()}
                                            </a>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="space-y-4 sm:space-y-6">
                    <h3 class="text-xl font-semibold">"Envoyez-nous un message"</h3>
                    <form class="space-y-4" novalidate=true on:submit=on_submit on:keydown=on_keydown>
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
                            label="Téléphone (optionnel)"
                            input_type="tel"
                            placeholder="034 00 000 00"
                            value=phone
                            error=phone_err
                            disabled=disabled
                            on_input=on_phone
                        />
                        <TextField
                            form=FORM
                            field=Field::Message
                            label="Message *"
                            placeholder="Écrivez votre message ici..."
                            multiline=true
                            required=true
                            value=message
                            error=message_err
                            disabled=disabled
                            on_input=on_message
                        />
                        <div class="flex justify-center sm:justify-start">
                            <SubmitButton
                                phase=phase(state)
                                idle="Envoyer"
                                sending="Envoi..."
                                sent="Envoyé !"
                                class="w-full sm:w-auto min-w-[140px] hover:scale-105"
                            />
                        </div>
                        <p class="text-xs text-gray-500">
                            "* Champs obligatoires. Appuyez sur Ctrl+Entrée pour envoyer rapidement."
                        </p>
                    </form>
                </div>
            </div>
        </section>
    }
}
