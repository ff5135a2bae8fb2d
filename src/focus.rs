//! Keyboard focus bookkeeping for modal dialogs.

/// CSS selector for the elements a dialog's Tab trap cycles through.
pub const FOCUSABLE: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Where Tab should land when it would otherwise leave the dialog.
///
/// `current` is the position of the focused element among `count` focusables.
/// Returns `None` when the browser's own Tab order should be left alone.
pub fn wrap_tab(current: Option<usize>, count: usize, shift: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match (current, shift) {
        (Some(0), true) => Some(last),
        (Some(i), false) if i == last => Some(0),
        // focus escaped the dialog
        (None, true) => Some(last),
        (None, false) => Some(0),
        _ => None,
    }
}

/// Remembers the element focused before a dialog opened.
#[derive(Debug, Clone)]
pub struct FocusReturn<F> {
    previous: Option<F>,
}

impl<F> Default for FocusReturn<F> {
    fn default() -> Self {
        Self { previous: None }
    }
}

impl<F> FocusReturn<F> {
    pub fn remember(&mut self, focused: Option<F>) {
        self.previous = focused;
    }

    /// Hands back the element to refocus; subsequent calls return `None`.
    pub fn restore(&mut self) -> Option<F> {
        self.previous.take()
    }
}

/// Focus work a dialog owes after its open flag changes.
#[derive(Debug, PartialEq, Eq)]
pub enum DialogFocus<F> {
    /// Just opened: move focus inside.
    Enter,
    /// Just closed: refocus this element, if one was remembered.
    Leave(Option<F>),
    Unchanged,
}

impl<F> FocusReturn<F> {
    /// Remembers `focused()` on open and hands it back on close.
    pub fn on_toggle(
        &mut self,
        was_open: bool,
        is_open: bool,
        focused: impl FnOnce() -> Option<F>,
    ) -> DialogFocus<F> {
        match (was_open, is_open) {
            (false, true) => {
                self.remember(focused());
                DialogFocus::Enter
            }
            (true, false) => DialogFocus::Leave(self.restore()),
            _ => DialogFocus::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryState;

    #[test]
    fn test_tab_wraps_last_to_first() {
        assert_eq!(wrap_tab(Some(2), 3, false), Some(0));
        assert_eq!(wrap_tab(Some(1), 3, false), None);
    }

    #[test]
    fn test_shift_tab_wraps_first_to_last() {
        assert_eq!(wrap_tab(Some(0), 3, true), Some(2));
        assert_eq!(wrap_tab(Some(2), 3, true), None);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(wrap_tab(Some(0), 1, false), Some(0));
        assert_eq!(wrap_tab(Some(0), 1, true), Some(0));
        assert_eq!(wrap_tab(None, 0, false), None);
        assert_eq!(wrap_tab(None, 4, false), Some(0));
        assert_eq!(wrap_tab(None, 4, true), Some(3));
    }

    #[test]
    fn test_lightbox_close_restores_focus() {
        let mut gallery = GalleryState::new(8);
        let mut focus = FocusReturn::default();

        gallery.open(3);
        assert_eq!(
            focus.on_toggle(false, gallery.is_open(), || Some("image-card-3")),
            DialogFocus::Enter
        );
        gallery.navigate(crate::gallery::Direction::Next);
        gallery.close();
        assert_eq!(
            focus.on_toggle(true, gallery.is_open(), || Some("lightbox-next")),
            DialogFocus::Leave(Some("image-card-3"))
        );
    }

    #[test]
    fn test_toggle_without_change_keeps_focus() {
        let mut focus = FocusReturn::default();
        assert_eq!(focus.on_toggle(false, true, || Some(1)), DialogFocus::Enter);
        // re-render while open must not overwrite the remembered element
        assert_eq!(focus.on_toggle(true, true, || Some(2)), DialogFocus::Unchanged);
        assert_eq!(focus.on_toggle(true, false, || Some(3)), DialogFocus::Leave(Some(1)));
        assert_eq!(focus.on_toggle(false, false, || Some(4)), DialogFocus::Unchanged);
    }

    #[test]
    fn test_close_with_nothing_focused_before() {
        let mut focus = FocusReturn::<&str>::default();
        assert_eq!(focus.on_toggle(false, true, || None), DialogFocus::Enter);
        assert_eq!(focus.on_toggle(true, false, || Some("x")), DialogFocus::Leave(None));
    }
}
