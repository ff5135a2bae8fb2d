use leptos::prelude::*;

use super::image::LazyImage;
use super::modal::Modal;
use crate::nav::Section;

const PASTOR_PHOTO: &str = "https://slelguoygbfzlpylpxfs.supabase.co/storage/v1/object/public/document-uploads/1756214400117-g3kayx38ydd.jpg";
const PASTOR_NAME: &str = "Pasteur Iraka Rasamivelona Andrianjaka RAMAROMANOMPO Luther";

const ACTIVITIES: [&str; 5] = [
    "Services en malgache",
    "Services en français",
    "Mpampianatra (Catéchisme)",
    "Dinika (Étude biblique)",
    "Asam-pifohazana (Réveil)",
];

const CARD_CLASS: &str = "backdrop-blur-md bg-white/5 border border-white/20 rounded-lg px-4 sm:px-6 lg:px-8 py-6 space-y-4 sm:space-y-6 transition-all duration-300 hover:-translate-y-1 hover:shadow-lg group";

#[component]
pub fn ChurchPresentation() -> impl IntoView {
    let photo_open = RwSignal::new(false);

    view! {
        <section id=Section::Presentation.id() class="py-16 sm:py-24" aria-labelledby="presentation-title">
            <div class="text-center mb-12">
                <h2 id="presentation-title" class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-4">
                    "Notre Église"
                </h2>
                <p class="text-base md:text-lg text-gray-600 max-w-2xl mx-auto">
                    "Découvrez notre histoire, nos activités et notre communauté de foi"
                </p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 lg:gap-8">
                <article class=CARD_CLASS>
                    <h3 class="text-xl sm:text-2xl font-semibold mb-3">"Notre Histoire"</h3>
                    <div class="space-y-3 text-base md:text-lg leading-relaxed">
                        <p>
                            "Fondée en " <strong>"2018"</strong>
                            ", notre église a commencé son ministère avec seulement 10 familles unies par la foi et la vision commune de servir Dieu."
                        </p>
                        <p>
                            "En " <strong>"2023"</strong> ", nous avons rejoint officiellement la paroisse "
                            <strong>"FPVM"</strong>
                            " (Fiangonana Protestanta eto Madagasikara), marquant une étape importante de notre développement spirituel."
                        </p>
                        <p>
                            "Aujourd'hui, notre communauté a grandi pour accueillir près de "
                            <strong>"300 membres"</strong>
                            ", témoignant de la grâce de Dieu et de l'engagement de chacun."
                        </p>
                    </div>
                    <h4 class="text-lg sm:text-xl font-semibold mb-3">"Nos Activités"</h4>
                    <ul class="space-y-2" role="list">
                        {ACTIVITIES
                            .into_iter()
                            .map(|a| {
                                view! {
                                    <li class="flex items-center gap-3 text-sm sm:text-base">
                                        <span class="h-2 w-2 rounded-full bg-purple-600 flex-shrink-0" aria-hidden="true"></span>
                                        {a}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </article>

                <article class=CARD_CLASS>
                    <h3 class="text-xl sm:text-2xl font-semibold mb-3">"Notre Pasteur"</h3>
                    <button
                        class="relative block w-full h-48 sm:h-64 rounded-lg overflow-hidden focus:outline-none focus:ring-2 focus:ring-purple-500 focus:ring-offset-2"
                        aria-label="Agrandir la photo du pasteur"
                        on:click=move |_| photo_open.set(true)
                    >
                        <LazyImage
                            src=PASTOR_PHOTO
                            alt=PASTOR_NAME
                            class="w-full h-full object-contain object-center rounded-lg group-hover:scale-105"
                            failed_text="Photo non disponible"
                        />
                    </button>
                    <div class="space-y-3">
                        <h4 class="text-lg sm:text-xl font-semibold">{PASTOR_NAME}</h4>
                        <p class="text-sm sm:text-base text-gray-600">"Ordonné en " <strong>"2021"</strong></p>
                        <blockquote class="text-base md:text-lg leading-relaxed italic border-l-4 border-purple-600 pl-4">
                            "\"Servir Dieu et Sa communauté est un privilège que je porte chaque jour avec humilité et reconnaissance. Ensemble, nous grandissons dans la foi et l'amour fraternel.\""
                        </blockquote>
                    </div>
                </article>
            </div>

            <Modal
                open=photo_open
                on_close=move |_| photo_open.set(false)
                labelled_by="modal-title"
            >
                <div class="relative max-w-2xl max-h-[90vh] bg-white rounded-lg overflow-hidden">
                    <button
                        class="absolute top-2 right-2 z-10 p-2 rounded-md bg-black/20 hover:bg-black/40 text-white"
                        aria-label="Fermer la photo agrandie"
                        on:click=move |_| photo_open.set(false)
                    >
                        "✕"
                    </button>
                    <img
                        src=PASTOR_PHOTO
                        alt=format!("{PASTOR_NAME} - Photo agrandie")
                        class="w-full h-full object-contain object-center"
                    />
                    <div class="absolute bottom-0 inset-x-0 bg-gradient-to-t from-black/70 to-transparent p-4">
                        <h3 id="modal-title" class="text-lg font-semibold text-white">{PASTOR_NAME}</h3>
                        <p class="text-sm text-white/90">"Ordonné en 2021"</p>
                    </div>
                </div>
            </Modal>
        </section>
    }
}
