//! The composition root: one [`Dashboard`] per user session.
//!
//! Every user event goes through a method here, runs to completion, and leaves
//! the session's stores as the single source of truth for what gets rendered.

use crate::advisor::{MoodAdvice, MoodAdvisor};
use crate::capability::{CapabilityError, ClassificationCapability, GenerationCapability};
use crate::classifier::{MoodClassifier, MoodReading};
use crate::conversation::{ChatEntry, ConversationLog, Role};
use crate::generator::ResponseGenerator;
use crate::journal::{JournalEntry, JournalStore, JournalTag};
use crate::mood::MoodLabel;
use crate::relaxation::BreathingExercise;
use crate::timeline::{MoodEntry, MoodTimeline, TrendPoint};
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// How many entries the journal history view shows.
pub const JOURNAL_HISTORY_LEN: usize = 5;

/// Everything one user has produced during a session. Nothing here outlives it.
#[derive(Debug, Default)]
pub struct Session {
    pub conversation: ConversationLog,
    pub timeline: MoodTimeline,
    pub journal: JournalStore,
}

impl Session {
    pub fn last_journal_time(&self) -> Option<NaiveDateTime> {
        self.journal.last_journal_time()
    }
}

/// Outcome of submitting a chat message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub reply: String,
    /// Shared by the user's message and the reply.
    pub at: NaiveDateTime,
    /// Mood detected from the user's message, not from the reply.
    pub reading: MoodReading,
    pub advice: MoodAdvice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WellnessSummary {
    pub journal_entries: usize,
    pub mood_logs: usize,
    pub trend: Vec<TrendPoint>,
    pub last_journal_time: Option<NaiveDateTime>,
}

pub struct Dashboard {
    classifier: MoodClassifier,
    generator: ResponseGenerator,
    breathing: BreathingExercise,
    session: Session,
}

impl Dashboard {
    pub fn new(
        generation: Arc<dyn GenerationCapability>,
        classification: Arc<dyn ClassificationCapability>,
    ) -> Self {
        Self {
            classifier: MoodClassifier::new(classification),
            generator: ResponseGenerator::new(generation),
            breathing: BreathingExercise::default(),
            session: Session::default(),
        }
    }

    pub fn with_breath_phase(mut self, phase: Duration) -> Self {
        self.breathing = BreathingExercise::new(phase);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Generates a reply to `text` and detects the mood of `text` itself.
    ///
    /// Both capability calls happen before anything is stored, so a failure
    /// leaves the transcript untouched.
    pub fn submit_message(&mut self, text: &str) -> Result<ChatReply, CapabilityError> {
        let reply = self.generator.generate(text)?;
        let reading = self.classifier.classify(text)?;
        let advice = MoodAdvisor::advise(reading.mood);

        let at = Local::now().naive_local();
        self.session.conversation.append_at(Role::User, text, at);
        self.session
            .conversation
            .append_at(Role::Assistant, &reply, at);
        debug!(mood = %reading.mood, "chat message handled");

        Ok(ChatReply {
            reply,
            at,
            reading,
            advice,
        })
    }

    /// The user says the detected mood was wrong. Returns advice for the
    /// corrected mood; nothing is stored.
    pub fn correct_mood(&self, mood: MoodLabel) -> MoodAdvice {
        MoodAdvisor::advise(mood)
    }

    pub fn clear_chat(&mut self) {
        self.session.conversation.clear();
        debug!("chat cleared");
    }

    pub fn transcript(&self) -> &[ChatEntry] {
        self.session.conversation.all()
    }

    pub fn log_mood(&mut self, mood: MoodLabel) -> MoodEntry {
        let entry = self.session.timeline.record(mood);
        debug!(%mood, "mood logged");
        entry
    }

    pub fn mood_series(&self) -> Vec<TrendPoint> {
        self.session.timeline.series()
    }

    pub fn save_journal(&mut self, text: &str, tag: JournalTag) -> JournalEntry {
        let entry = self.session.journal.append(text, tag);
        debug!(%tag, "journal entry saved");
        entry
    }

    pub fn save_gratitude(&mut self, text: &str) -> JournalEntry {
        self.save_journal(&format!("Gratitude: {text}"), JournalTag::Gratitude)
    }

    pub fn journal_history(&self) -> Vec<JournalEntry> {
        self.session.journal.recent(JOURNAL_HISTORY_LEN)
    }

    /// Whether to nudge the user to write again.
    pub fn journal_reminder(&self, now: NaiveDateTime) -> bool {
        self.session.journal.is_stale(now)
    }

    pub fn breathing(&self) -> BreathingExercise {
        self.breathing
    }

    /// Accepts a free-hand drawing. It is acknowledged but never kept.
    pub fn express(&self, sketch: &str) -> Option<&'static str> {
        if sketch.trim().is_empty() {
            None
        } else {
            Some("Your drawing is saved in memory. Feel free to clear and start again!")
        }
    }

    pub fn summary(&self) -> WellnessSummary {
        WellnessSummary {
            journal_entries: self.session.journal.len(),
            mood_logs: self.session.timeline.len(),
            trend: self.session.timeline.series(),
            last_journal_time: self.session.last_journal_time(),
        }
    }
}
