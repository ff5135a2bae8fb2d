pub const INITIAL_VISIBLE: usize = 6;
pub const PAGE_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Reveal count of the grid and the index open in the lightbox, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryState {
    total: usize,
    visible: usize,
    selected: Option<usize>,
}

impl GalleryState {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            visible: INITIAL_VISIBLE.min(total),
            selected: None,
        }
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.total
    }

    pub fn load_more(&mut self) {
        self.visible = (self.visible + PAGE_SIZE).min(self.total);
    }

    pub fn open(&mut self, index: usize) {
        if index < self.visible {
            self.selected = Some(index);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Steps through the visible images only, wrapping at either end.
    pub fn navigate(&mut self, direction: Direction) {
        let Some(i) = self.selected else {
            return;
        };
        let n = self.visible;
        self.selected = Some(match direction {
            Direction::Next => (i + 1) % n,
            Direction::Prev if i == 0 => n - 1,
            Direction::Prev => i - 1,
        });
    }

    /// "3 / 6" style counter for the open image.
    pub fn counter(&self) -> Option<String> {
        self.selected.map(|i| format!("{} / {}", i + 1, self.visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_visible_clamped() {
        assert_eq!(GalleryState::new(8).visible(), 6);
        assert_eq!(GalleryState::new(3).visible(), 3);
        assert!(!GalleryState::new(3).has_more());
    }

    #[test]
    fn test_load_more_bounded_and_idempotent() {
        let mut g = GalleryState::new(8);
        assert!(g.has_more());
        g.load_more();
        assert_eq!(g.visible(), 8);
        assert!(!g.has_more());
        g.load_more();
        g.load_more();
        assert_eq!(g.visible(), 8);

        let mut g = GalleryState::new(20);
        for _ in 0..10 {
            g.load_more();
            assert!(g.visible() <= 20);
        }
        assert_eq!(g.visible(), 20);
    }

    #[test]
    fn test_next_wraps_over_visible() {
        let mut g = GalleryState::new(8);
        g.open(4);
        for _ in 0..g.visible() {
            g.navigate(Direction::Next);
        }
        assert_eq!(g.selected(), Some(4));

        g.open(5);
        g.navigate(Direction::Next);
        // wraps at 6 visible, not at 8 total
        assert_eq!(g.selected(), Some(0));
    }

    #[test]
    fn test_prev_wraps_to_last_visible() {
        let mut g = GalleryState::new(8);
        g.open(0);
        g.navigate(Direction::Prev);
        assert_eq!(g.selected(), Some(5));
        g.navigate(Direction::Prev);
        assert_eq!(g.selected(), Some(4));
        assert_eq!(g.counter(), Some("5 / 6".to_string()));
    }

    #[test]
    fn test_open_close() {
        let mut g = GalleryState::new(8);
        g.open(7);
        // not revealed yet
        assert!(!g.is_open());
        g.open(2);
        assert!(g.is_open());
        g.close();
        assert_eq!(g.selected(), None);
        g.navigate(Direction::Next);
        assert_eq!(g.selected(), None);
        assert_eq!(g.counter(), None);
    }
}
