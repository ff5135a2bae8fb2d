use leptos::prelude::*;

use super::dom::scroll_to_section;
use super::donate::DonateTrigger;
use crate::nav::Section;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=2000&q=80";

#[component]
pub fn HeroSection() -> impl IntoView {
    let donate = expect_context::<DonateTrigger>();

    view! {
        <section id=Section::Accueil.id() class="relative h-[32rem] sm:h-[40rem] lg:h-screen w-full overflow-hidden">
            <div
                class="absolute inset-0 bg-cover bg-center bg-no-repeat"
                style=format!("background-image: url('{HERO_IMAGE}')")
                role="img"
                aria-label="Église avec architecture moderne et lumière naturelle"
            ></div>
            <div class="absolute inset-0 bg-black/20"></div>
            <div class="absolute inset-0 flex items-center justify-center p-4 sm:p-8">
                <div class="max-w-4xl mx-auto text-center backdrop-blur-md bg-white/5 border border-white/20 rounded-xl p-8 sm:p-12 lg:p-16 space-y-4 sm:space-y-6">
                    <h1 class="text-3xl sm:text-5xl lg:text-6xl font-bold text-white leading-tight">
                        "Bienvenue à la FPVM Franco-Malagasy Teny Fiainana Analamahitsy"
                    </h1>
                    <p class="text-lg sm:text-xl text-white/90 max-w-2xl mx-auto">
                        "Nouvelle Église Protestante de Madagascar – Fiangonana Protestante Vaovao eto Madagasikara"
                    </p>
                    <div class="text-white/80 italic space-y-2 max-w-3xl mx-auto border-t border-white/20 pt-4">
                        <p class="text-base sm:text-lg">
                            "\"Tamin'ny voalohany ny Teny, ary ny Teny tao amin'Andriamanitra, ary ny Teny dia Andriamanitra\""
                        </p>
                        <p class="text-base sm:text-lg">
                            "\"Au commencement était la Parole, et la Parole était avec Dieu, et la Parole était Dieu.\""
                        </p>
                        <p class="text-sm text-white/70 not-italic">"Jaona 1:1"</p>
                    </div>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center pt-4">
                        <button
                            class="w-full sm:w-auto px-6 py-3 rounded-md font-medium bg-purple-700 hover:bg-purple-700/90 text-white border border-white/30 hover:scale-105 transition-all duration-300 focus-visible:ring-2 focus-visible:ring-white/50"
                            aria-label="Découvrir notre église et nos services"
                            on:click=move |_| scroll_to_section(Section::Presentation)
                        >
                            "Découvrir notre église"
                        </button>
                        <button
                            class="w-full sm:w-auto px-6 py-3 rounded-md font-medium bg-[#8B5CF6] hover:bg-[#8B5CF6]/90 text-white hover:scale-105 transition-all duration-300 focus-visible:ring-2 focus-visible:ring-white/50"
                            aria-label="Faire un don pour soutenir notre projet de construction"
                            aria-haspopup="dialog"
                            on:click=move |_| donate.open()
                        >
                            "Faire un don"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
