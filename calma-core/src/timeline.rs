use crate::advisor::MoodAdvisor;
use crate::mood::MoodLabel;
use chrono::{Local, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodEntry {
    pub mood: MoodLabel,
    pub at: NaiveDateTime,
}

impl MoodEntry {
    /// `YYYY-MM-DD HH:MM`
    pub fn timestamp(&self) -> String {
        self.at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// A point of the mood-over-time plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub at: NaiveDateTime,
    pub weight: u8,
}

impl TrendPoint {
    pub fn timestamp(&self) -> String {
        self.at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Self-reported moods in the order they were logged.
#[derive(Debug, Default)]
pub struct MoodTimeline {
    entries: Vec<MoodEntry>,
}

impl MoodTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, mood: MoodLabel) -> MoodEntry {
        self.record_at(mood, Local::now().naive_local())
    }

    /// Records `mood` at `at`, truncated to the minute.
    pub fn record_at(&mut self, mood: MoodLabel, at: NaiveDateTime) -> MoodEntry {
        let at = truncate_to_minute(at);
        let entry = MoodEntry { mood, at };
        self.entries.push(entry);
        entry
    }

    /// The plotted series. An empty timeline yields an empty series.
    pub fn series(&self) -> Vec<TrendPoint> {
        self.entries
            .iter()
            .map(|e| TrendPoint {
                at: e.at,
                weight: MoodAdvisor::trend_weight(e.mood),
            })
            .collect()
    }

    pub fn all(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn truncate_to_minute(at: NaiveDateTime) -> NaiveDateTime {
    at.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::at;

    #[test]
    fn series_follows_record_order() {
        let mut timeline = MoodTimeline::new();
        timeline.record(MoodLabel::Happy);
        timeline.record(MoodLabel::Sad);
        timeline.record(MoodLabel::Neutral);

        let weights: Vec<u8> = timeline.series().iter().map(|p| p.weight).collect();
        assert_eq!(weights, [5, 2, 3]);
    }

    #[test]
    fn series_length_matches_records() {
        let mut timeline = MoodTimeline::new();
        for mood in [
            MoodLabel::Angry,
            MoodLabel::Anxious,
            MoodLabel::Angry,
            MoodLabel::Happy,
        ] {
            timeline.record(mood);
        }
        let weights: Vec<u8> = timeline.series().iter().map(|p| p.weight).collect();
        assert_eq!(weights, [1, 2, 1, 5]);
        assert_eq!(timeline.len(), 4);
    }

    #[test]
    fn series_does_not_mutate() {
        let mut timeline = MoodTimeline::new();
        timeline.record(MoodLabel::Sad);
        assert_eq!(timeline.series(), timeline.series());
        assert_eq!(timeline.len(), 1);
    }

    #[test]
    fn empty_timeline_has_empty_series() {
        assert!(MoodTimeline::new().series().is_empty());
    }

    #[test]
    fn records_at_minute_resolution() {
        let mut timeline = MoodTimeline::new();
        let when = at(2025, 8, 15, 18, 42).with_second(37).unwrap();
        let entry = timeline.record_at(MoodLabel::Happy, when);
        assert_eq!(entry.at, at(2025, 8, 15, 18, 42));
        assert_eq!(entry.timestamp(), "2025-08-15 18:42");
        assert_eq!(timeline.series()[0].timestamp(), "2025-08-15 18:42");
    }
}
