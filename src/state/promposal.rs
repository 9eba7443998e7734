use crate::config::{ACCEPT_MESSAGE, DECLINE_MESSAGE, EVASION_SPAN, PROMPT_MESSAGE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Accepted,
    Declined,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EvasionOffset {
    pub x: i32,
    pub y: i32,
}

impl EvasionOffset {
    /// Maps two uniform samples in `[0, 1)` onto offsets in `[-100, 99]`.
    /// Out-of-range or non-finite samples are clamped so the offset never
    /// leaves `[-100, 100]`.
    pub fn from_samples(sample_x: f64, sample_y: f64) -> Self {
        Self {
            x: axis(sample_x),
            y: axis(sample_y),
        }
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

fn axis(sample: f64) -> i32 {
    let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
    let half = EVASION_SPAN / 2;
    ((sample * f64::from(EVASION_SPAN)).floor() as i32 - half).min(half)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PromposalState {
    answer: Option<Answer>,
    offset: EvasionOffset,
}

impl PromposalState {
    pub fn accept(&mut self) {
        self.answer = Some(Answer::Accepted);
    }

    pub fn decline(&mut self) {
        if self.answer != Some(Answer::Accepted) {
            self.answer = Some(Answer::Declined);
        }
    }

    pub fn evade(&mut self, sample_x: f64, sample_y: f64) {
        if self.buttons_visible() {
            self.offset = EvasionOffset::from_samples(sample_x, sample_y);
        }
    }

    pub fn answer(&self) -> Option<Answer> {
        self.answer
    }

    pub fn offset(&self) -> EvasionOffset {
        self.offset
    }

    pub fn message(&self) -> &'static str {
        match self.answer {
            None => PROMPT_MESSAGE,
            Some(Answer::Accepted) => ACCEPT_MESSAGE,
            Some(Answer::Declined) => DECLINE_MESSAGE,
        }
    }

    pub fn buttons_visible(&self) -> bool {
        self.answer != Some(Answer::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_prompt() {
        let state = PromposalState::default();
        assert_eq!(state.message(), PROMPT_MESSAGE);
        assert!(state.buttons_visible());
        assert_eq!(state.offset(), EvasionOffset::default());
    }

    #[test]
    fn test_accept_after_hover_and_decline() {
        let mut state = PromposalState::default();
        state.evade(0.9, 0.1);
        state.decline();
        state.evade(0.3, 0.7);
        state.accept();

        assert_eq!(state.answer(), Some(Answer::Accepted));
        assert_eq!(state.message(), ACCEPT_MESSAGE);
        assert!(!state.buttons_visible());
    }

    #[test]
    fn test_accept_is_permanent() {
        let mut state = PromposalState::default();
        state.accept();
        state.decline();
        assert_eq!(state.message(), ACCEPT_MESSAGE);
        assert!(!state.buttons_visible());
    }

    #[test]
    fn test_decline_keeps_buttons() {
        let mut state = PromposalState::default();
        state.decline();
        assert_eq!(state.message(), DECLINE_MESSAGE);
        assert!(state.buttons_visible());

        state.evade(0.0, 0.75);
        assert_eq!(state.offset(), EvasionOffset { x: -100, y: 50 });
        state.decline();
        assert_eq!(state.message(), DECLINE_MESSAGE);
    }

    #[test]
    fn test_offset_bounds() {
        let samples = [0.0, 0.004, 0.25, 0.5, 0.505, 0.75, 0.999, 0.999_999_999];
        for &sx in &samples {
            for &sy in &samples {
                let offset = EvasionOffset::from_samples(sx, sy);
                assert!(offset.x.abs() <= 100, "x out of range for {sx}");
                assert!(offset.y.abs() <= 100, "y out of range for {sy}");
            }
        }
        assert_eq!(EvasionOffset::from_samples(0.0, 0.0), EvasionOffset { x: -100, y: -100 });
        assert_eq!(EvasionOffset::from_samples(0.5, 0.999_999), EvasionOffset { x: 0, y: 99 });
    }

    #[test]
    fn test_offset_clamps_bad_samples() {
        let offset = EvasionOffset::from_samples(f64::NAN, 7.5);
        assert_eq!(offset, EvasionOffset { x: -100, y: 100 });
        let offset = EvasionOffset::from_samples(-3.0, f64::INFINITY);
        assert_eq!(offset, EvasionOffset { x: -100, y: -100 });
    }

    #[test]
    fn test_transform() {
        let offset = EvasionOffset { x: -42, y: 17 };
        assert_eq!(offset.transform(), "translate(-42px, 17px)");
    }
}
