use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::dom::{scroll_to_section, scroll_y, section_bounds};
use crate::nav::{NavState, Section};

#[component]
pub fn Navigation() -> impl IntoView {
    let nav = RwSignal::new(NavState::default());

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let y = scroll_y();
        let bounds = section_bounds();
        nav.update(|n| n.on_scroll(y, bounds));
    });

    // deep links like /#galerie
    Effect::new(move |_| {
        let hash = window().location().hash().unwrap_or_default();
        if let Some(section) = Section::from_id(hash.trim_start_matches('#')) {
            scroll_to_section(section);
        }
    });

    let go = move |section: Section| {
        scroll_to_section(section);
        nav.update(NavState::close_menu);
    };

    let link_class = move |section: Section, mobile: bool| {
        let base = if mobile {
            "block w-full text-left px-4 py-3 rounded-lg text-base font-medium"
        } else {
            "px-4 py-2 rounded-lg text-sm font-medium"
        };
        let state = if nav.with(|n| n.active == section) {
            "text-purple-700 bg-purple-600/10 shadow-sm"
        } else {
            "text-gray-800 hover:text-purple-700 hover:bg-white/10"
        };
        format!("{base} {state} transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-purple-500")
    };

    let links = move |mobile: bool| {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button
                        class=move || link_class(section, mobile)
                        aria-current=move || {
                            nav.with(|n| n.active == section).then_some("page")
                        }
                        on:click=move |_| go(section)
                    >
                        {section.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if nav.with(|n| n.scrolled) {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 bg-white/80 backdrop-blur-lg border-b border-white/20 shadow-lg"
            } else {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 bg-transparent"
            }
        }>
            <nav
                class="container mx-auto px-4 sm:px-6 lg:px-8"
                role="navigation"
                aria-label="Navigation principale"
            >
                <div class="flex items-center justify-between h-16 lg:h-20">
                    <button
                        class="text-xl lg:text-2xl font-bold text-purple-700 tracking-tight focus:outline-none focus:ring-2 focus:ring-purple-500 rounded-sm"
                        aria-label="Retourner à l'accueil"
                        on:click=move |_| go(Section::Accueil)
                    >
                        "FPVM Franco-Malagasy"
                    </button>
                    <div class="hidden md:flex items-baseline space-x-1">{links(false)}</div>
                    <button
                        class="md:hidden inline-flex items-center justify-center p-2 rounded-lg text-gray-800 hover:text-purple-700 focus:outline-none focus:ring-2 focus:ring-purple-500"
                        aria-controls="mobile-menu"
                        aria-expanded=move || nav.with(|n| n.menu_open).to_string()
                        aria-label=move || {
                            if nav.with(|n| n.menu_open) { "Fermer le menu" } else { "Ouvrir le menu" }
                        }
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.with(|n| n.menu_open) { "✕" } else { "☰" }}
                    </button>
                </div>
                <div
                    id="mobile-menu"
                    class=move || {
                        if nav.with(|n| n.menu_open) {
                            "md:hidden overflow-hidden transition-all duration-300 max-h-96 opacity-100"
                        } else {
                            "md:hidden overflow-hidden transition-all duration-300 max-h-0 opacity-0"
                        }
                    }
                >
                    <div class="px-2 pt-2 pb-3 space-y-1 bg-white/90 backdrop-blur-lg border border-white/20 rounded-lg mt-2 shadow-lg">
                        {links(true)}
                    </div>
                </div>
            </nav>
        </header>
    }
}
