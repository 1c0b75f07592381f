//! Pure Markdown rendering helpers for the dashboard views.
//!
//! Chat line:     `**User (14:03):** I feel great today`
//! Journal line:  `- *2025-08-15 21:00* **[Gratitude]**: grateful for my friends`
//! Trend row:     `2025-08-15 21:00 █████ 5`

use crate::classifier::MoodReading;
use crate::conversation::ChatEntry;
use crate::dashboard::WellnessSummary;
use crate::journal::JournalEntry;
use crate::timeline::TrendPoint;

/// Shown instead of an empty plot.
pub const NO_MOOD_DATA: &str = "No mood data yet. Log your mood to see trends!";
pub const JOURNAL_REMINDER: &str =
    "⏰ It's been a while since your last journal entry. Want to reflect today?";

/// `**Assistant (14:03):** ...`
pub fn format_chat_line(entry: &ChatEntry) -> String {
    format!(
        "**{} ({}):** {}",
        entry.role.as_ref(),
        entry.timestamp(),
        entry.text
    )
}

/// `🧠 **Detected Mood:** 😊 Happy (0.90)`
pub fn format_detection(reading: &MoodReading) -> String {
    format!(
        "🧠 **Detected Mood:** {} ({:.2})",
        reading.mood.badge(),
        reading.confidence
    )
}

pub fn format_tip(tip: &str, updated: bool) -> String {
    if updated {
        format!("🌿 **Updated Tip:** {tip}")
    } else {
        format!("🌿 **Tip:** {tip}")
    }
}

pub fn format_journal_line(entry: &JournalEntry) -> String {
    format!(
        "- *{}* **[{}]**: {}",
        entry.timestamp(),
        entry.tag.as_ref(),
        entry.text
    )
}

/// One row of the text plot: a bar as long as the trend weight.
pub fn format_trend_row(point: &TrendPoint) -> String {
    format!(
        "{} {} {}",
        point.timestamp(),
        "█".repeat(point.weight as usize),
        point.weight
    )
}

/// The whole plot, or the "no data" placeholder.
pub fn format_trend(series: &[TrendPoint]) -> String {
    if series.is_empty() {
        return NO_MOOD_DATA.to_string();
    }
    series
        .iter()
        .map(format_trend_row)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_summary(summary: &WellnessSummary) -> String {
    let mut md = format!(
        "## 📈 Wellness Summary\n\n**Total Journal Entries:** {}\n\n**Total Mood Logs:** {}\n",
        summary.journal_entries, summary.mood_logs
    );
    if let Some(last) = summary.last_journal_time {
        md.push_str(&format!(
            "\n**Last Journal Entry:** {}\n",
            last.format("%Y-%m-%d %H:%M")
        ));
    }
    md
}
