//! Relaxation toolkit: the breathing exercise plan and static media links.
//!
//! The breathing plan only describes the steps; pacing them in wall-clock time
//! is up to the front-end.

use std::time::Duration;
use strum_macros::{AsRefStr, Display, EnumIter};

pub const BREATHING_CYCLES: u32 = 3;
pub const DEFAULT_PHASE_SECS: u64 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr, Display)]
pub enum BreathingPhase {
    Inhale,
    Hold,
    Exhale,
}

impl BreathingPhase {
    pub fn emoji(self) -> &'static str {
        match self {
            BreathingPhase::Inhale => "🫁",
            BreathingPhase::Hold => "✋",
            BreathingPhase::Exhale => "💨",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingStep {
    /// 1-based.
    pub cycle: u32,
    pub phase: BreathingPhase,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingExercise {
    cycles: u32,
    phase_duration: Duration,
}

impl Default for BreathingExercise {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_PHASE_SECS))
    }
}

impl BreathingExercise {
    pub fn new(phase_duration: Duration) -> Self {
        Self {
            cycles: BREATHING_CYCLES,
            phase_duration,
        }
    }

    pub fn steps(&self) -> impl Iterator<Item = BreathingStep> + '_ {
        use strum::IntoEnumIterator;
        (1..=self.cycles).flat_map(move |cycle| {
            BreathingPhase::iter().map(move |phase| BreathingStep {
                cycle,
                phase,
                duration: self.phase_duration,
            })
        })
    }

    pub fn total_duration(&self) -> Duration {
        self.steps().map(|s| s.duration).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaLink {
    pub title: &'static str,
    pub url: &'static str,
}

pub const RELAXATION_MEDIA: &[MediaLink] = &[
    MediaLink {
        title: "Calming Sounds",
        url: "https://www.youtube.com/watch?v=2OEL4P1Rz04",
    },
    MediaLink {
        title: "Guided Meditation",
        url: "https://www.youtube.com/watch?v=inpok4MKVLM",
    },
];
