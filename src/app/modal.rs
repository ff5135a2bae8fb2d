use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener};
use web_sys::HtmlElement;

use super::dom::{active_element, focus, focus_first, lock_body_scroll, trap_tab};
use crate::focus::{DialogFocus, FocusReturn};

/// Full-screen dialog overlay.
///
/// While `open` is true the page behind is not scrollable, Escape and a click
/// on the backdrop call `on_close`, and Tab stays inside the dialog. When it
/// closes, focus goes back to whatever was focused before it opened.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    labelled_by: &'static str,
    #[prop(optional)] described_by: Option<&'static str>,
    #[prop(default = "bg-black/70 backdrop-blur-sm")] backdrop_class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let dialog_ref = NodeRef::<html::Div>::new();
    let focus_return = StoredValue::new_local(FocusReturn::<HtmlElement>::default());

    Effect::watch(
        move || open.get(),
        move |is_open, was_open, _| {
            let was_open = was_open.copied().unwrap_or(false);
            let step = focus_return
                .try_update_value(|f| f.on_toggle(was_open, *is_open, active_element));
            match step {
                Some(DialogFocus::Enter) => {
                    lock_body_scroll(true);
                    request_animation_frame(move || {
                        if let Some(dialog) = dialog_ref.get_untracked() {
                            focus_first(&dialog);
                        }
                    });
                }
                Some(DialogFocus::Leave(previous)) => {
                    lock_body_scroll(false);
                    if let Some(el) = previous {
                        focus(&el);
                    }
                }
                _ => {}
            }
        },
        false,
    );

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if !open.get_untracked() {
            return;
        }
        if ev.key() == "Escape" {
            on_close.run(());
            return;
        }
        if let Some(dialog) = dialog_ref.get_untracked() {
            trap_tab(&dialog, &ev);
        }
    });

    view! {
        <Show when=move || open.get()>
            <div
                node_ref=dialog_ref
                class=format!(
                    "fixed inset-0 z-50 flex items-center justify-center p-4 {backdrop_class}",
                )
                role="dialog"
                aria-modal="true"
                aria-labelledby=labelled_by
                aria-describedby=described_by
                on:click=move |ev| {
                    if ev.target() == ev.current_target() {
                        on_close.run(());
                    }
                }
            >
                {children()}
            </div>
        </Show>
    }
}
