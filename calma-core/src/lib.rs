pub mod advisor;
pub mod capability;
pub mod classifier;
pub mod config;
pub mod conversation;
pub mod dashboard;
pub mod generator;
pub mod journal;
pub mod mood;
pub mod relaxation;
pub mod render;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use advisor::{MoodAdvice, MoodAdvisor};
pub use capability::{CapabilityError, ClassificationCapability, GenerationCapability, RawSentiment};
pub use classifier::{MoodClassifier, MoodReading};
pub use config::Config;
pub use conversation::{ChatEntry, ConversationLog, Role};
pub use dashboard::{ChatReply, Dashboard, Session, WellnessSummary};
pub use generator::ResponseGenerator;
pub use journal::{JournalEntry, JournalStore, JournalTag};
pub use mood::MoodLabel;
pub use relaxation::{BreathingExercise, BreathingPhase, BreathingStep, MediaLink, RELAXATION_MEDIA};
pub use timeline::{MoodEntry, MoodTimeline, TrendPoint};
