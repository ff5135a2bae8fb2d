use leptos::{ev, prelude::*};

use super::dom::scroll_to_section;
use super::endpoints::subscribe_newsletter;
use super::fields::{bind, busy, phase, use_form_submit, SubmitButton, TextField};
use crate::content::{copyright_year, CONTACTS, SOCIAL_LINKS};
use crate::forms::{Field, FormState, NewsletterForm, NEWSLETTER_RESET_DELAY};
use crate::nav::Section;

const HEADING_CLASS: &str = "text-xl font-semibold text-white";

#[component]
pub fn Footer() -> impl IntoView {
    let year = copyright_year(env!("BUILD_TIME"));

    view! {
        <footer class="relative overflow-hidden bg-gradient-to-br from-slate-900 via-purple-950 to-slate-900 text-gray-300">
            <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12 mb-12">
                    <div class="space-y-4">
                        <h3 class="text-2xl font-bold text-white">"FPVM Franco-Malagasy"</h3>
                        <p class="leading-relaxed">
                            "Teny Fiainana Analamahitsy. Une communauté de foi franco-malgache qui grandit ensemble dans la Parole."
                        </p>
                        <div class="p-4 rounded-lg bg-white/5 border border-white/10">
                            <p class="text-purple-300 font-medium text-sm mb-2">"Notre verset"</p>
                            <p class="text-sm italic">
                                "\"Au commencement était la Parole, et la Parole était avec Dieu, et la Parole était Dieu.\""
                            </p>
                        </div>
                    </div>

                    <div class="space-y-6">
                        <h4 class=HEADING_CLASS>"Liens rapides"</h4>
                        <nav class="flex flex-col items-start space-y-3" aria-label="Liens rapides">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            class="hover:text-purple-300 hover:translate-x-1 transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-purple-400 rounded-sm"
                                            on:click=move |_| scroll_to_section(section)
                                        >
                                            {section.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>

                    <div class="space-y-6">
                        <h4 class=HEADING_CLASS>"Contact"</h4>
                        <ul class="space-y-3">
                            {CONTACTS
                                .iter()
                                .map(|c| {
                                    view! {
                                        <li>
                                            <p class="text-sm text-gray-400">{c.label.clone()}</p>
                                            <a href=c.tel_href() class="hover:text-purple-300 transition-colors">
                                                {c.number.clone()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="text-sm">
                            <p>"Analamahitsy, Antananarivo"</p>
                            <p>"Cultes : dimanche matin, en malgache et en français"</p>
                        </div>
                    </div>

                    <div class="space-y-6">
                        <h4 class=HEADING_CLASS>"Restons en contact"</h4>
                        <p class="text-sm">
                            "Inscrivez-vous à notre lettre d'information pour suivre la vie de l'église et l'avancée des travaux."
                        </p>
                        <Newsletter />
                        <ul class="flex gap-3" aria-label="Réseaux sociaux">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.href.clone()
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=link.aria_label()
                                                class="inline-flex px-3 py-2 rounded-lg text-sm bg-white/10 border border-white/20 hover:text-purple-300 hover:bg-white/20 transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-purple-400"
                                            >
                                                {link.name.clone()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-white/10 pt-8 flex flex-col sm:flex-row justify-between gap-4 text-sm text-gray-400">
                    <p>{format!("© {year} FPVM Franco-Malagasy Teny Fiainana Analamahitsy. Tous droits réservés.")}</p>
                    <p>"Fait avec ♥ pour la communauté"</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    let state = RwSignal::new(FormState::<NewsletterForm>::default());
    let submit = use_form_submit(state, subscribe_newsletter, NEWSLETTER_RESET_DELAY, || ());
    let (email, email_err, on_email) = bind(state, Field::Email, |d| &d.email, |d, v| d.email = v);

    view! {
        <form
            class="space-y-3"
            novalidate=true
            on:submit=move |ev: ev::SubmitEvent| {
                ev.prevent_default();
                submit();
            }
        >
            <TextField
                form="newsletter"
                field=Field::Email
                label="Votre email"
                input_type="email"
                placeholder="votre.email@exemple.com"
                required=true
                value=email
                error=email_err
                disabled=busy(state)
                on_input=on_email
            />
            <SubmitButton
                phase=phase(state)
                idle="S'inscrire"
                sending="Inscription..."
                sent="Inscrit !"
                class="w-full"
            />
        </form>
    }
}
