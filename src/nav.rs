/// Distance from the viewport top that a section must straddle to be active.
pub const ACTIVE_OFFSET: f64 = 100.0;
/// Scroll distance after which the header gets its solid background.
pub const SCROLLED_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Accueil,
    Presentation,
    Programmes,
    Construction,
    Galerie,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Accueil,
        Section::Presentation,
        Section::Programmes,
        Section::Construction,
        Section::Galerie,
        Section::Contact,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Accueil => "accueil",
            Section::Presentation => "presentation",
            Section::Programmes => "programmes",
            Section::Construction => "construction",
            Section::Galerie => "galerie",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Accueil => "Accueil",
            Section::Presentation => "Présentation",
            Section::Programmes => "Programmes",
            Section::Construction => "Construction",
            Section::Galerie => "Galerie",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Vertical extent of a rendered section, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn straddles(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

/// First section, in declared order, whose box straddles `offset`.
pub fn active_section<I>(bounds: I, offset: f64) -> Option<Section>
where
    I: IntoIterator<Item = (Section, Option<Bounds>)>,
{
    bounds
        .into_iter()
        .find(|(_, b)| b.is_some_and(|b| b.straddles(offset)))
        .map(|(s, _)| s)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active: Section::Accueil,
            menu_open: false,
            scrolled: false,
        }
    }
}

impl NavState {
    /// Keeps the previous active section when nothing straddles the offset.
    pub fn on_scroll<I>(&mut self, scroll_y: f64, bounds: I)
    where
        I: IntoIterator<Item = (Section, Option<Bounds>)>,
    {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        if let Some(s) = active_section(bounds, ACTIVE_OFFSET) {
            self.active = s;
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(tops: [f64; 6]) -> Vec<(Section, Option<Bounds>)> {
        Section::ALL
            .into_iter()
            .zip(tops)
            .map(|(s, top)| {
                (
                    s,
                    Some(Bounds {
                        top,
                        bottom: top + 500.0,
                    }),
                )
            })
            .collect()
    }

    #[test]
    fn test_ids_round_trip() {
        for s in Section::ALL {
            assert_eq!(Section::from_id(s.id()), Some(s));
        }
        assert_eq!(Section::from_id("gallery"), None);
    }

    #[test]
    fn test_active_section_straddles_offset() {
        let bounds = layout([-900.0, -450.0, 50.0, 550.0, 1050.0, 1550.0]);
        assert_eq!(
            active_section(bounds, ACTIVE_OFFSET),
            Some(Section::Programmes)
        );
    }

    #[test]
    fn test_first_match_in_declared_order_wins() {
        // overlapping boxes: both Presentation and Programmes straddle
        let bounds = vec![
            (Section::Accueil, None),
            (Section::Presentation, Some(Bounds { top: 0.0, bottom: 200.0 })),
            (Section::Programmes, Some(Bounds { top: 90.0, bottom: 600.0 })),
        ];
        assert_eq!(
            active_section(bounds, ACTIVE_OFFSET),
            Some(Section::Presentation)
        );
    }

    #[test]
    fn test_scroll_keeps_previous_when_nothing_matches() {
        let mut nav = NavState::default();
        nav.on_scroll(1200.0, layout([-1000.0, -500.0, 0.0, 500.0, 1000.0, 1500.0]));
        assert_eq!(nav.active, Section::Programmes);
        assert!(nav.scrolled);

        // gap between sections
        let gap = vec![(
            Section::Contact,
            Some(Bounds {
                top: 150.0,
                bottom: 400.0,
            }),
        )];
        nav.on_scroll(1300.0, gap);
        assert_eq!(nav.active, Section::Programmes);

        nav.on_scroll(10.0, Vec::new());
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_select_closes_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);
        nav.close_menu();
        assert!(!nav.menu_open);
    }
}
