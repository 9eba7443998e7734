#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Closed,
    Open,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Closed => SidebarState::Open,
            SidebarState::Open => SidebarState::Closed,
        }
    }

    pub fn closed(self) -> Self {
        SidebarState::Closed
    }

    pub fn is_open(self) -> bool {
        self == SidebarState::Open
    }

    pub fn view(self) -> SidebarView {
        if self.is_open() {
            SidebarView {
                sidebar_class: "sidebar open",
                backdrop_class: "backdrop show",
                toggle_class: "menu-toggle active",
                aria_hidden: "false",
                aria_expanded: "true",
            }
        } else {
            SidebarView {
                sidebar_class: "sidebar",
                backdrop_class: "backdrop",
                toggle_class: "menu-toggle",
                aria_hidden: "true",
                aria_expanded: "false",
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarView {
    pub sidebar_class: &'static str,
    pub backdrop_class: &'static str,
    pub toggle_class: &'static str,
    pub aria_hidden: &'static str,
    pub aria_expanded: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(view: SidebarView) {
        let open = view.sidebar_class.split(' ').any(|c| c == "open");
        assert_eq!(view.backdrop_class.split(' ').any(|c| c == "show"), open);
        assert_eq!(view.toggle_class.split(' ').any(|c| c == "active"), open);
        assert_eq!(view.aria_hidden, if open { "false" } else { "true" });
        assert_eq!(view.aria_expanded, if open { "true" } else { "false" });
    }

    #[test]
    fn test_starts_closed() {
        let state = SidebarState::default();
        assert_eq!(state, SidebarState::Closed);
        assert!(!state.is_open());
        assert_eq!(state.view().aria_hidden, "true");
    }

    #[test]
    fn test_toggle_sequence_keeps_projection_consistent() {
        let mut state = SidebarState::default();
        for i in 1..=9 {
            state = state.toggled();
            assert_eq!(state.is_open(), i % 2 == 1);
            assert_consistent(state.view());
        }
    }

    #[test]
    fn test_close_from_open() {
        let state = SidebarState::Open.closed();
        assert_eq!(state, SidebarState::Closed);
        assert_consistent(state.view());
    }

    #[test]
    fn test_close_is_idempotent() {
        let once = SidebarState::Open.closed();
        let twice = once.closed();
        assert_eq!(once, twice);
        assert_eq!(once.view(), twice.view());
        assert_eq!(SidebarState::Closed.closed(), SidebarState::Closed);
    }

    #[test]
    fn test_open_view() {
        let view = SidebarState::Open.view();
        assert_eq!(view.sidebar_class, "sidebar open");
        assert_eq!(view.backdrop_class, "backdrop show");
        assert_eq!(view.toggle_class, "menu-toggle active");
        assert_consistent(view);
    }
}
