use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The closed set of moods the dashboard understands.
///
/// Parsing is case-insensitive (`"happy"`, `"HAPPY"` and `"Happy"` are all
/// [`MoodLabel::Happy`]). Anything the classifier reports that is not one of
/// these collapses to [`MoodLabel::Neutral`], see [`MoodLabel::from_sentiment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum MoodLabel {
    Happy,
    Sad,
    Angry,
    Anxious,
    Neutral,
}

impl MoodLabel {
    pub fn emoji(self) -> &'static str {
        match self {
            MoodLabel::Happy => "😊",
            MoodLabel::Sad => "😔",
            MoodLabel::Angry => "😠",
            MoodLabel::Anxious => "😨",
            MoodLabel::Neutral => "😐",
        }
    }

    /// `😊 Happy`
    pub fn badge(self) -> String {
        format!("{} {}", self.emoji(), self.as_ref())
    }

    /// Maps a raw sentiment label to a mood.
    ///
    /// Only `POSITIVE`, `NEGATIVE` and `NEUTRAL` are recognized. The classifier
    /// can therefore never produce `Angry` or `Anxious`; those only come from the
    /// user correcting a detection.
    pub fn from_sentiment(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("POSITIVE") {
            MoodLabel::Happy
        } else if label.eq_ignore_ascii_case("NEGATIVE") {
            MoodLabel::Sad
        } else {
            MoodLabel::Neutral
        }
    }

    /// Comma separated list of every label, for help and error messages.
    pub fn names() -> String {
        MoodLabel::iter()
            .map(|m| m.as_ref().to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
