//! Mood lookup tables: background color, relaxation tip and trend weight.

use crate::mood::MoodLabel;
use std::str::FromStr;

/// Tip used when a mood name is not one we know.
pub const DEFAULT_TIP: &str = "Take a moment to pause and breathe. You're doing great.";

/// Weight used when a mood name is not one we know (same as Neutral).
pub const DEFAULT_WEIGHT: u8 = 3;

/// Everything the advisor knows about a single mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodAdvice {
    pub mood: MoodLabel,
    pub color: &'static str,
    pub tip: &'static str,
    pub weight: u8,
}

pub struct MoodAdvisor;

impl MoodAdvisor {
    pub fn color_for(mood: MoodLabel) -> &'static str {
        match mood {
            MoodLabel::Happy => "#FFF9C4",
            MoodLabel::Sad => "#E1F5FE",
            MoodLabel::Angry => "#FFCDD2",
            MoodLabel::Anxious => "#D1C4E9",
            MoodLabel::Neutral => "#F5F5F5",
        }
    }

    pub fn tip_for(mood: MoodLabel) -> &'static str {
        match mood {
            MoodLabel::Happy => {
                "Keep up the good energy! Maybe take a walk or write down what you're grateful for."
            }
            MoodLabel::Sad => {
                "Try a breathing exercise or listen to calming music. You're not alone."
            }
            MoodLabel::Neutral => "How about a short journaling session to reflect on your day?",
            MoodLabel::Angry => "Take a moment to pause. Deep breathing or a walk might help.",
            MoodLabel::Anxious => {
                "Try grounding techniques like naming 5 things you see around you."
            }
        }
    }

    /// Integer projection used to plot mood over time.
    pub fn trend_weight(mood: MoodLabel) -> u8 {
        match mood {
            MoodLabel::Happy => 5,
            MoodLabel::Neutral => 3,
            MoodLabel::Sad => 2,
            MoodLabel::Anxious => 2,
            MoodLabel::Angry => 1,
        }
    }

    pub fn advise(mood: MoodLabel) -> MoodAdvice {
        MoodAdvice {
            mood,
            color: Self::color_for(mood),
            tip: Self::tip_for(mood),
            weight: Self::trend_weight(mood),
        }
    }

    /// Like [`color_for`](Self::color_for) but from a free-form name.
    /// Unknown names get the Neutral color.
    pub fn color_for_name(name: &str) -> &'static str {
        Self::parse(name)
            .map(Self::color_for)
            .unwrap_or_else(|| Self::color_for(MoodLabel::Neutral))
    }

    /// Unknown names get [`DEFAULT_TIP`].
    pub fn tip_for_name(name: &str) -> &'static str {
        Self::parse(name).map(Self::tip_for).unwrap_or(DEFAULT_TIP)
    }

    /// Unknown names get [`DEFAULT_WEIGHT`].
    pub fn trend_weight_for_name(name: &str) -> u8 {
        Self::parse(name)
            .map(Self::trend_weight)
            .unwrap_or(DEFAULT_WEIGHT)
    }

    fn parse(name: &str) -> Option<MoodLabel> {
        MoodLabel::from_str(name.trim()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn trend_weights_match_table() {
        assert_eq!(MoodAdvisor::trend_weight(MoodLabel::Happy), 5);
        assert_eq!(MoodAdvisor::trend_weight(MoodLabel::Neutral), 3);
        assert_eq!(MoodAdvisor::trend_weight(MoodLabel::Sad), 2);
        assert_eq!(MoodAdvisor::trend_weight(MoodLabel::Anxious), 2);
        assert_eq!(MoodAdvisor::trend_weight(MoodLabel::Angry), 1);
    }

    #[test]
    fn every_mood_has_its_own_color_and_tip() {
        let colors: Vec<_> = MoodLabel::iter().map(MoodAdvisor::color_for).collect();
        let tips: Vec<_> = MoodLabel::iter().map(MoodAdvisor::tip_for).collect();
        for (i, c) in colors.iter().enumerate() {
            assert!(c.starts_with('#') && c.len() == 7);
            assert!(!colors[i + 1..].contains(c));
        }
        assert!(tips.iter().all(|t| *t != DEFAULT_TIP));
    }

    #[test]
    fn unknown_names_fall_back_to_defaults() {
        assert_eq!(MoodAdvisor::color_for_name("Mixed"), "#F5F5F5");
        assert_eq!(MoodAdvisor::tip_for_name("Mixed"), DEFAULT_TIP);
        assert_eq!(MoodAdvisor::trend_weight_for_name("Mixed"), 3);
    }

    #[test]
    fn known_names_use_the_table() {
        assert_eq!(MoodAdvisor::color_for_name("happy"), "#FFF9C4");
        assert_eq!(
            MoodAdvisor::tip_for_name(" Angry "),
            MoodAdvisor::tip_for(MoodLabel::Angry)
        );
        assert_eq!(MoodAdvisor::trend_weight_for_name("angry"), 1);
    }

    #[test]
    fn advise_bundles_the_lookups() {
        let advice = MoodAdvisor::advise(MoodLabel::Anxious);
        assert_eq!(advice.color, "#D1C4E9");
        assert_eq!(advice.weight, 2);
        assert!(advice.tip.contains("grounding"));
    }
}
