use leptos::prelude::*;

use super::donate::DonateTrigger;
use super::image::LazyImage;
use crate::nav::Section;

const SITE_IMAGE: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600&h=400&fit=crop&crop=center";

const STAT_CLASS: &str = "text-center p-6 bg-white/60 backdrop-blur-sm rounded-2xl border border-white/20 hover:bg-white/80 transition-all duration-300 hover:scale-105";
const FEATURE_CLASS: &str = "flex items-start gap-4 p-4 bg-white/40 backdrop-blur-sm rounded-xl border border-white/10 hover:bg-white/60 transition-all duration-300";

#[component]
pub fn ConstructionSection() -> impl IntoView {
    let donate = expect_context::<DonateTrigger>();

    view! {
        <section
            id=Section::Construction.id()
            class="relative py-24 sm:py-32"
            aria-labelledby="construction-title"
        >
            <div class="absolute inset-0 bg-gradient-to-br from-blue-50/50 via-purple-50/30 to-indigo-50/50 rounded-3xl"></div>
            <div class="relative max-w-6xl mx-auto px-6 sm:px-8 lg:px-12">
                <div class="text-center mb-16 sm:mb-20">
                    <h2 id="construction-title" class="text-4xl sm:text-5xl lg:text-6xl font-bold text-gray-900 mb-6">
                        "Notre Projet de"
                        <span class="block bg-gradient-to-r from-blue-600 via-purple-600 to-indigo-600 bg-clip-text text-transparent">
                            "Construction"
                        </span>
                    </h2>
                    <p class="text-xl sm:text-2xl text-gray-600 max-w-3xl mx-auto leading-relaxed">
                        "Aidez-nous à construire un sanctuaire moderne où la communauté peut se rassembler dans la foi et l'amour"
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16 items-center">
                    <div class="relative bg-white/80 backdrop-blur-sm border border-white/20 rounded-2xl p-1.5 shadow-2xl h-80 sm:h-96">
                        <LazyImage
                            src=SITE_IMAGE
                            alt="Projet de construction de l'église"
                            class="w-full h-full object-cover rounded-xl"
                            width=600
                            height=400
                        />
                    </div>

                    <div class="space-y-8">
                        <div class="grid grid-cols-2 gap-6">
                            <div class=STAT_CLASS>
                                <p class="text-3xl sm:text-4xl font-bold text-blue-600 mb-2">"75%"</p>
                                <p class="text-gray-600 font-medium">"Complété"</p>
                            </div>
                            <div class=STAT_CLASS>
                                <p class="text-3xl sm:text-4xl font-bold text-purple-600 mb-2">"€250K"</p>
                                <p class="text-gray-600 font-medium">"Objectif"</p>
                            </div>
                        </div>

                        <div class="space-y-4">
                            <div class=FEATURE_CLASS>
                                <div>
                                    <h3 class="font-semibold text-gray-900 mb-1">"Capacité 500 personnes"</h3>
                                    <p class="text-gray-600 text-sm">
                                        "Un espace moderne pour accueillir toute notre communauté"
                                    </p>
                                </div>
                            </div>
                            <div class=FEATURE_CLASS>
                                <div>
                                    <h3 class="font-semibold text-gray-900 mb-1">"Centre communautaire"</h3>
                                    <p class="text-gray-600 text-sm">
                                        "Espaces dédiés aux activités familiales et jeunesse"
                                    </p>
                                </div>
                            </div>
                        </div>

                        <button
                            class="w-full sm:w-auto inline-flex items-center justify-center gap-3 px-8 py-4 bg-gradient-to-r from-blue-600 via-purple-600 to-indigo-600 text-white font-semibold rounded-2xl hover:shadow-2xl transition-all duration-300 hover:scale-105 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:ring-offset-2"
                            aria-haspopup="dialog"
                            on:click=move |_| donate.open()
                        >
                            "Faire un don →"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
