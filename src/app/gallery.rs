use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::image::LazyImage;
use super::modal::Modal;
use crate::content::GALLERY;
use crate::gallery::{Direction, GalleryState};
use crate::nav::Section;

const CONTROL_CLASS: &str = "p-2 rounded-md bg-black/20 hover:bg-black/40 text-white border border-white/20 focus:outline-none focus:ring-2 focus:ring-white/50";

#[component]
pub fn GalleryGrid() -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::new(GALLERY.len()));

    // Escape and Tab are handled by the modal
    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if !gallery.with_untracked(GalleryState::is_open) {
            return;
        }
        match ev.key().as_str() {
            "ArrowLeft" => gallery.update(|g| g.navigate(Direction::Prev)),
            "ArrowRight" => gallery.update(|g| g.navigate(Direction::Next)),
            _ => {}
        }
    });

    let open = Signal::derive(move || gallery.with(GalleryState::is_open));
    let close = move || gallery.update(GalleryState::close);
    let current = move || {
        gallery
            .with(GalleryState::selected)
            .and_then(|i| GALLERY.get(i).cloned())
    };
    let several = move || gallery.with(|g| g.visible() > 1);

    view! {
        <section id=Section::Galerie.id() class="py-16 sm:py-20 lg:py-24" aria-labelledby="galerie-title">
            <div class="text-center mb-12">
                <h2 id="galerie-title" class="text-3xl sm:text-4xl lg:text-5xl font-bold mb-4">
                    "Galerie"
                </h2>
                <p class="text-lg text-gray-600 max-w-2xl mx-auto">
                    "Découvrez les moments forts de notre communauté à travers nos activités et événements"
                </p>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-2 sm:gap-4 mb-8">
                <For
                    each=move || 0..gallery.with(GalleryState::visible)
                    key=|i| *i
                    children=move |i| {
                        let image = GALLERY[i].clone();
                        view! {
                            <div
                                class="group overflow-hidden rounded-lg bg-white/60 backdrop-blur-sm border border-white/20 hover:bg-white/80 transition-all duration-300 cursor-pointer focus:outline-none focus:ring-2 focus:ring-purple-500"
                                role="button"
                                tabindex="0"
                                aria-label=format!("Ouvrir l'image: {}", image.alt)
                                on:click=move |_| gallery.update(|g| g.open(i))
                                on:keydown=move |ev| {
                                    if ev.key() == "Enter" || ev.key() == " " {
                                        ev.prevent_default();
                                        gallery.update(|g| g.open(i));
                                    }
                                }
                            >
                                <div class="relative overflow-hidden h-48 sm:h-64 lg:h-80">
                                    <LazyImage
                                        src=image.src.clone()
                                        alt=image.alt.clone()
                                        class="w-full h-full object-cover group-hover:scale-105"
                                        width=image.width_or_default()
                                        height=image.height_or_default()
                                    />
                                    <div class="absolute inset-0 bg-black/0 group-hover:bg-black/20 transition-all duration-300"></div>
                                </div>
                                {image
                                    .caption
                                    .map(|c| {
                                        view! {
                                            <div class="p-3 sm:p-4">
                                                <p class="text-sm font-medium leading-tight">{c}</p>
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || gallery.with(GalleryState::has_more)>
                <div class="text-center">
                    <button
                        class="px-6 py-3 rounded-md border border-white/20 bg-white/60 backdrop-blur-sm hover:bg-white/80 font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-purple-500"
                        on:click=move |_| gallery.update(GalleryState::load_more)
                    >
                        "Charger plus d'images"
                    </button>
                </div>
            </Show>

            <Modal
                open=open
                on_close=move |_| close()
                labelled_by="lightbox-title"
                described_by="lightbox-description"
                backdrop_class="bg-black/90 backdrop-blur-sm"
            >
                <div class="absolute top-4 right-4 z-10">
                    <button class=CONTROL_CLASS aria-label="Fermer la galerie" on:click=move |_| close()>
                        "✕"
                    </button>
                </div>
                <Show when=several>
                    <button
                        class=format!("absolute left-4 top-1/2 -translate-y-1/2 z-10 {CONTROL_CLASS}")
                        aria-label="Image précédente"
                        on:click=move |_| gallery.update(|g| g.navigate(Direction::Prev))
                    >
                        "‹"
                    </button>
                    <button
                        class=format!("absolute right-4 top-1/2 -translate-y-1/2 z-10 {CONTROL_CLASS}")
                        aria-label="Image suivante"
                        on:click=move |_| gallery.update(|g| g.navigate(Direction::Next))
                    >
                        "›"
                    </button>
                </Show>
                {move || {
                    current()
                        .map(|image| {
                            view! {
                                <div class="max-w-6xl max-h-full flex flex-col items-center">
                                    <img
                                        id="lightbox-image"
                                        src=image.src
                                        alt=image.alt.clone()
                                        class="max-w-full max-h-[80vh] object-contain rounded-lg"
                                    />
                                    {image
                                        .caption
                                        .map(|c| {
                                            view! {
                                                <div class="mt-4 p-4 bg-black/20 backdrop-blur-sm rounded-lg border border-white/20 max-w-2xl">
                                                    <p id="lightbox-description" class="text-white text-center font-medium">
                                                        {c}
                                                    </p>
                                                </div>
                                            }
                                        })}
                                    <Show when=several>
                                        <div class="mt-4 px-3 py-1 bg-black/20 backdrop-blur-sm rounded-full border border-white/20">
                                            <span class="text-white text-sm font-medium">
                                                {move || gallery.with(GalleryState::counter)}
                                            </span>
                                        </div>
                                    </Show>
                                </div>
                                <h2 id="lightbox-title" class="sr-only">
                                    {format!("Galerie d'images - {}", image.alt)}
                                </h2>
                            }
                        })
                }}
            </Modal>
        </section>
    }
}
