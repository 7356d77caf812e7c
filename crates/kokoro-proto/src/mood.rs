//! Mood buttons and the single-selection state behind them.

use crate::error::MoodError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Numb,
}

impl Mood {
    /// Button order.
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Angry, Mood::Numb];

    /// Lowercase identifier, as the user would say it.
    pub fn name(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Numb => "numb",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Numb => "Numb",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "😊",
            Self::Sad => "😢",
            Self::Angry => "😠",
            Self::Numb => "😐",
        }
    }

    /// Canonical emotion label understood by the prediction service.
    pub fn emotion(self) -> &'static str {
        match self {
            Self::Happy => "joy",
            Self::Sad => "sadness",
            Self::Angry => "anger",
            Self::Numb => "neutral",
        }
    }

    /// `"<emoji> <label>"` as shown in the mood display field.
    pub fn display(self) -> String {
        format!("{} {}", self.emoji(), self.label())
    }

    /// Text sent to the prediction service for this mood.
    pub fn prompt(self) -> String {
        format!("I am feeling {}", self.emotion())
    }
}

/// Holds at most one selected mood.
#[derive(Debug, Clone, Default)]
pub struct MoodSelector {
    selected: Option<Mood>,
}

impl MoodSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `mood`, replacing any previous selection. Returns the display
    /// string for the mood field.
    pub fn select(&mut self, mood: Mood) -> String {
        self.selected = Some(mood);
        mood.display()
    }

    pub fn selected(&self) -> Option<Mood> {
        self.selected
    }

    pub fn is_selected(&self, mood: Mood) -> bool {
        self.selected == Some(mood)
    }

    /// The selected mood and its prompt, ready to hand to the orchestrator.
    pub fn submit(&self) -> Result<(Mood, String), MoodError> {
        let mood = self.selected.ok_or(MoodError::NothingSelected)?;
        Ok((mood, mood.prompt()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_previous() {
        let mut selector = MoodSelector::new();
        selector.select(Mood::Happy);
        selector.select(Mood::Angry);

        let marked: Vec<Mood> = Mood::ALL
            .into_iter()
            .filter(|m| selector.is_selected(*m))
            .collect();
        assert_eq!(marked, vec![Mood::Angry]);
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut selector = MoodSelector::new();
        let first = selector.select(Mood::Sad);
        let second = selector.select(Mood::Sad);
        assert_eq!(first, second);
        assert_eq!(selector.selected(), Some(Mood::Sad));
    }

    #[test]
    fn test_display_string() {
        assert_eq!(Mood::Happy.display(), "😊 Happy");
        assert_eq!(Mood::Numb.display(), "😐 Numb");
    }

    #[test]
    fn test_submit_without_selection_fails() {
        let selector = MoodSelector::new();
        assert_eq!(selector.submit(), Err(MoodError::NothingSelected));
    }

    #[test]
    fn test_submit_uses_canonical_emotion() {
        let mut selector = MoodSelector::new();
        let expected = [
            (Mood::Happy, "I am feeling joy"),
            (Mood::Sad, "I am feeling sadness"),
            (Mood::Angry, "I am feeling anger"),
            (Mood::Numb, "I am feeling neutral"),
        ];
        for (mood, prompt) in expected {
            selector.select(mood);
            assert_eq!(selector.submit(), Ok((mood, prompt.to_string())));
        }
    }
}
