#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewAction {
    PauseAndRewind,
}

// Every enter and leave bumps the generation
#[derive(Debug, Default)]
pub struct HoverPreview {
    visible: bool,
    generation: u64,
}

impl HoverPreview {
    pub fn enter(&mut self) -> PlayTicket {
        self.generation += 1;
        self.visible = true;
        PlayTicket(self.generation)
    }

    pub fn leave(&mut self) -> PreviewAction {
        self.generation += 1;
        self.visible = false;
        PreviewAction::PauseAndRewind
    }

    pub fn is_current(&self, ticket: PlayTicket) -> bool {
        self.visible && ticket.0 == self.generation
    }

    /// A play that resolves late is only stopped when no hover is in progress.
    pub fn should_stop(&self, ticket: PlayTicket) -> bool {
        !self.is_current(ticket) && !self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transition: opacity 0.3s ease;",
            if self.is_visible() { "1" } else { "0" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_hovered() {
        let preview = HoverPreview::default();
        assert!(!preview.is_visible());
        assert_eq!(preview.style(), "opacity: 0; transition: opacity 0.3s ease;");
    }

    #[test]
    fn test_enter_leave_cycles() {
        let mut preview = HoverPreview::default();
        for _ in 0..25 {
            let ticket = preview.enter();
            assert!(preview.is_visible());
            assert!(preview.is_current(ticket));
            assert!(!preview.should_stop(ticket));
            assert_eq!(preview.style(), "opacity: 1; transition: opacity 0.3s ease;");

            assert_eq!(preview.leave(), PreviewAction::PauseAndRewind);
            assert!(!preview.is_visible());
            assert!(!preview.is_current(ticket));
        }
    }

    #[test]
    fn test_leave_always_rewinds() {
        let mut preview = HoverPreview::default();
        assert_eq!(preview.leave(), PreviewAction::PauseAndRewind);
        assert_eq!(preview.leave(), PreviewAction::PauseAndRewind);
        preview.enter();
        assert_eq!(preview.leave(), PreviewAction::PauseAndRewind);
        assert_eq!(preview.style(), "opacity: 0; transition: opacity 0.3s ease;");
    }

    #[test]
    fn test_play_resolving_after_leave_is_stopped() {
        let mut preview = HoverPreview::default();
        let ticket = preview.enter();
        preview.leave();
        assert!(!preview.is_current(ticket));
        assert!(preview.should_stop(ticket));
    }

    #[test]
    fn test_late_play_does_not_stop_newer_hover() {
        let mut preview = HoverPreview::default();
        let first = preview.enter();
        preview.leave();
        let second = preview.enter();

        // First play resolves while the second hover is active
        assert!(!preview.is_current(first));
        assert!(!preview.should_stop(first));
        assert!(preview.is_visible());
        assert!(preview.is_current(second));
        assert_ne!(first, second);

        preview.leave();
        assert!(preview.should_stop(first));
        assert!(preview.should_stop(second));
    }
}
