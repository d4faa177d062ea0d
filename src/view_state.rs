use std::fmt;

/// Vertical offset (in CSS pixels) past which the navbar switches to its
/// compact "scrolled" style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// The in-page anchors the navigation bar can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Nav order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn href(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::Projects => "#projects",
            Section::Skills => "#skills",
            Section::Contact => "#contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// What the page does with a contact form submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Default action cancelled. Nothing is sent and the page stays put.
    Suppressed,
}

/// Transient UI state of the portfolio page.
///
/// Lives for as long as the page is mounted and starts from
/// [`ViewState::default`] on every load. Clicks change the active section
/// and the mobile menu, scroll measurements change `scrolled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_section: Section,
    pub mobile_menu_open: bool,
    pub scrolled: bool,
}

impl ViewState {
    /// Highlights `section` and closes the mobile menu.
    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// The contact form is a placeholder. A submit is always cancelled and
    /// leaves the navigation state alone.
    pub fn contact_submit(&self) -> SubmitOutcome {
        SubmitOutcome::Suppressed
    }

    /// Whether recording `offset` would flip the `scrolled` flag.
    pub fn scroll_changes(&self, offset: f64) -> bool {
        self.scrolled != is_past_threshold(offset)
    }

    /// Records the latest vertical offset. Returns `true` if `scrolled` changed.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        if !self.scroll_changes(offset) {
            return false;
        }
        self.scrolled = !self.scrolled;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ViewState::default();
        assert_eq!(state.active_section, Section::Home);
        assert!(!state.mobile_menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn test_last_clicked_section_wins() {
        let clicks = [
            vec![Section::Projects],
            vec![Section::Skills, Section::Home],
            vec![
                Section::Contact,
                Section::Contact,
                Section::Projects,
                Section::Skills,
            ],
            Section::ALL.iter().rev().copied().collect::<Vec<_>>(),
        ];
        for sequence in clicks {
            let mut state = ViewState::default();
            for section in &sequence {
                state.toggle_mobile_menu();
                state.select_section(*section);
                assert_eq!(state.active_section, *section);
                assert!(!state.mobile_menu_open, "menu should close on nav click");
            }
            assert_eq!(Some(&state.active_section), sequence.last());
        }
    }

    #[test]
    fn test_select_section_keeps_scrolled() {
        let mut state = ViewState::default();
        state.observe_scroll(300.0);
        state.select_section(Section::Contact);
        assert!(state.scrolled);
    }

    #[test]
    fn test_menu_toggle_parity() {
        for start_open in [false, true] {
            for n in 0..7 {
                let mut state = ViewState {
                    mobile_menu_open: start_open,
                    ..Default::default()
                };
                for _ in 0..n {
                    state.toggle_mobile_menu();
                }
                let expected = if n % 2 == 0 { start_open } else { !start_open };
                assert_eq!(state.mobile_menu_open, expected, "after {n} toggles");
            }
        }
    }

    #[test]
    fn test_toggle_leaves_section_alone() {
        let mut state = ViewState::default();
        state.select_section(Section::Skills);
        state.toggle_mobile_menu();
        assert_eq!(state.active_section, Section::Skills);
    }

    #[test]
    fn test_scroll_threshold() {
        let cases = [
            (0.0, false),
            (49.0, false),
            (50.0, false),
            (51.0, true),
            (1000.0, true),
        ];
        for (offset, expected) in cases {
            let mut state = ViewState::default();
            state.observe_scroll(offset);
            assert_eq!(state.scrolled, expected, "offset {offset}");

            // same answer regardless of where we came from
            let mut state = ViewState {
                scrolled: true,
                ..Default::default()
            };
            state.observe_scroll(offset);
            assert_eq!(state.scrolled, expected, "offset {offset} from scrolled");
        }
    }

    #[test]
    fn test_scroll_reports_changes_only() {
        let mut state = ViewState::default();
        assert!(!state.observe_scroll(10.0));
        assert!(state.observe_scroll(51.0));
        assert!(!state.observe_scroll(600.0));
        assert!(state.observe_scroll(50.0));
        assert!(!state.observe_scroll(0.0));
    }

    #[test]
    fn test_scroll_tracks_last_offset() {
        let mut state = ViewState::default();
        for offset in [0.0, 1000.0, 49.0, 51.0, 50.0, 51.0] {
            state.observe_scroll(offset);
        }
        assert!(state.scrolled);
    }

    #[test]
    fn test_contact_submit_leaves_state_alone() {
        let mut states = vec![ViewState::default()];
        let mut state = ViewState::default();
        state.select_section(Section::Contact);
        state.observe_scroll(800.0);
        states.push(state);
        state.toggle_mobile_menu();
        states.push(state);

        for before in states {
            let mut after = before;
            for _ in 0..3 {
                assert_eq!(after.contact_submit(), SubmitOutcome::Suppressed);
            }
            assert_eq!(after, before);
            // still behaves normally afterwards
            after.select_section(Section::Home);
            assert_eq!(after.active_section, Section::Home);
        }
    }

    #[test]
    fn test_section_anchors() {
        for section in Section::ALL {
            assert_eq!(section.href(), format!("#{}", section.id()));
            assert_eq!(section.to_string(), section.id());
        }
        assert_eq!(Section::Skills.label(), "Skills");
    }
}
