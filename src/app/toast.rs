use std::time::Duration;

use leptos::prelude::*;

use crate::notice::{Notice, Severity};

const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Page-wide notification sink. Fire-and-forget: toasts dismiss themselves.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        log::debug!("toast {id}: {}", notice.title);
        self.toasts.update(|t| t.push((id, notice)));

        let this = *self;
        set_timeout(move || this.dismiss(id), TOAST_DURATION);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| t.retain(|(i, _)| *i != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div
            class="fixed top-20 right-4 z-[60] flex flex-col gap-3 w-[calc(100%-2rem)] max-w-sm"
            aria-live="polite"
        >
            <For
                each=move || toaster.toasts.get()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    let (border, title_class) = match notice.severity {
                        Severity::Success => ("border-green-500", "text-green-700"),
                        Severity::Error => ("border-red-500", "text-red-700"),
                    };
                    let role = match notice.severity {
                        Severity::Success => "status",
                        Severity::Error => "alert",
                    };
                    view! {
                        <div
                            class=format!(
                                "bg-white/95 backdrop-blur-md shadow-lg rounded-lg border-l-4 p-4 {border}",
                            )
                            role=role
                        >
                            <div class="flex items-start justify-between gap-3">
                                <div>
                                    <p class=format!("font-semibold {title_class}")>{notice.title}</p>
                                    {notice
                                        .description
                                        .map(|d| view! { <p class="text-sm text-gray-600 mt-1">{d}</p> })}
                                </div>
                                <button
                                    class="text-gray-400 hover:text-gray-700"
                                    aria-label="Fermer la notification"
                                    on:click=move |_| toaster.dismiss(id)
                                >
                                    "✕"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        Owner::new().with(|| {
            let toaster = Toaster::default();
            toaster.toasts.update(|t| {
                t.push((0, Notice::success("a", "x")));
                t.push((1, Notice::error("b", "y")));
            });
            toaster.dismiss(0);
            let left: Vec<u64> = toaster.toasts.get_untracked().iter().map(|(id, _)| *id).collect();
            assert_eq!(left, vec![1]);
        });
    }
}
