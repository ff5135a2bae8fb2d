use leptos::{html, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Loading,
    Loaded,
    Failed,
}

/// `<img>` with a pulsing skeleton until it loads and a placeholder if it fails.
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
    #[prop(default = "Image non disponible")] failed_text: &'static str,
) -> impl IntoView {
    let status = RwSignal::new(ImageStatus::Loading);
    let img_ref = NodeRef::<html::Img>::new();

    // server-rendered images can finish loading before hydration attaches on:load
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if img.complete() && img.natural_width() > 0 {
                status.set(ImageStatus::Loaded);
            }
        }
    });

    view! {
        <Show when=move || status.get() == ImageStatus::Loading>
            <div class="absolute inset-0 bg-gray-200 animate-pulse rounded-lg" aria-hidden="true"></div>
        </Show>
        <Show when=move || status.get() == ImageStatus::Failed>
            <div class="absolute inset-0 bg-gray-200 rounded-lg flex items-center justify-center">
                <p class="text-sm text-gray-500">{failed_text}</p>
            </div>
        </Show>
        <img
            node_ref=img_ref
            src=src
            alt=alt
            loading="lazy"
            width=width.map(|w| w.to_string())
            height=height.map(|h| h.to_string())
            class=move || {
                let visibility = if status.get() == ImageStatus::Loaded {
                    "opacity-100"
                } else {
                    "opacity-0"
                };
                format!("transition-opacity duration-300 {visibility} {class}")
            }
            on:load=move |_| status.set(ImageStatus::Loaded)
            on:error=move |_| status.set(ImageStatus::Failed)
        />
    }
}
