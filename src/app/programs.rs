use leptos::prelude::*;

use super::image::LazyImage;
use crate::content::{Program, PROGRAMS};
use crate::nav::Section;

#[component]
pub fn ProgramsThreeCards() -> impl IntoView {
    view! {
        <section id=Section::Programmes.id() class="py-16 sm:py-24" aria-labelledby="programmes-title">
            <div class="text-center mb-12">
                <h2 id="programmes-title" class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-4">
                    "Nos Programmes Spirituels"
                </h2>
                <p class="text-lg lg:text-xl text-gray-600 max-w-2xl mx-auto">
                    "Découvrez nos différents programmes d'enseignement et de formation spirituelle adaptés à tous les âges et niveaux."
                </p>
            </div>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 lg:gap-8">
                {PROGRAMS
                    .iter()
                    .cloned()
                    .map(|program| view! { <ProgramCard program=program /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// One program with its "En savoir +" accordion. Each card expands on its own.
#[component]
fn ProgramCard(program: Program) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let details_id = format!("{}-details", program.id);
    let Program { title, description, schedule, image, verse, details, .. } = program;

    view! {
        <article class="bg-white/80 backdrop-blur-md border border-white/20 rounded-lg p-4 sm:p-6 transition-all duration-300 hover:shadow-lg hover:bg-white/90">
            <div class="relative w-full h-40 sm:h-48 mb-4 rounded-lg overflow-hidden">
                <LazyImage
                    src=image
                    alt=format!("{title} - Programme spirituel")
                    class="w-full h-full object-cover hover:scale-105"
                />
            </div>
            <div class="space-y-4">
                <div>
                    <h3 class="text-lg lg:text-xl font-bold mb-2">{title}</h3>
                    <p class="text-md lg:text-lg text-gray-600 mb-3">{description}</p>
                    <span class="text-sm font-medium text-purple-700 bg-purple-600/10 px-3 py-1 rounded-full inline-block">
                        {schedule}
                    </span>
                </div>
                {verse
                    .map(|v| {
                        view! {
                            <blockquote class="border-l-4 border-purple-600 pl-4 italic text-sm text-gray-600">
                                {v}
                            </blockquote>
                        }
                    })}
                <button
                    class="w-full flex items-center justify-between px-3 py-2 text-sm rounded-md border border-gray-300 hover:bg-gray-50 transition-colors focus:outline-none focus:ring-2 focus:ring-purple-500"
                    aria-expanded=move || expanded.get().to_string()
                    aria-controls=details_id.clone()
                    on:click=move |_| expanded.update(|e| *e = !*e)
                >
                    "En savoir +"
                    <span
                        class=move || {
                            if expanded.get() {
                                "transition-transform duration-200 rotate-180"
                            } else {
                                "transition-transform duration-200"
                            }
                        }
                        aria-hidden="true"
                    >
                        "▾"
                    </span>
                </button>
                <div
                    id=details_id
                    class=move || {
                        if expanded.get() {
                            "overflow-hidden transition-all duration-300 max-h-96 opacity-100"
                        } else {
                            "overflow-hidden transition-all duration-300 max-h-0 opacity-0"
                        }
                    }
                    aria-hidden=move || (!expanded.get()).to_string()
                >
                    <dl class="pt-4 border-t border-gray-200 space-y-3">
                        {details
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <div class="flex flex-col sm:flex-row sm:justify-between">
                                        <dt class="text-sm font-medium">{d.label} ":"</dt>
                                        <dd class="text-sm text-gray-600 sm:text-right sm:max-w-[60%]">{d.value}</dd>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        </article>
    }
}
