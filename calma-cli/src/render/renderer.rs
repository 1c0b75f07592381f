use super::theme::{Calm, color_from_hex};
use calma_core::{
    ChatEntry, ChatReply, JournalEntry, JournalTag, MoodAdvice, MoodLabel, RELAXATION_MEDIA,
    TrendPoint, WellnessSummary, render,
};
use std::io::{self, Write};
use strum::IntoEnumIterator;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: Calm::skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(Calm::MUTED));
        } else {
            println!("{message}");
        }
    }

    pub fn print_success(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(Calm::SAGE));
        } else {
            println!("{message}");
        }
    }

    pub fn print_error(&self, message: &str) {
        if self.opts.use_color {
            eprintln!("{}", message.with(Calm::ROSE));
        } else {
            eprintln!("{message}");
        }
    }

    pub fn print_prompt(&self) {
        print!("> ");
        io::stdout().flush().ok();
    }

    pub fn print_welcome(&self) {
        self.print_md("# 🌿 Mental Health Companion\n");
        self.print_info("Type a message to talk, or /help to see everything you can do.");
    }

    pub fn print_help(&self) {
        self.print_md(crate::command::HELP);
        let moods = MoodLabel::names();
        let tags = JournalTag::iter()
            .map(|t| t.as_ref().to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(", ");
        self.print_info(&format!("Moods: {moods}"));
        self.print_info(&format!("Journal tags: {tags}"));
    }

    pub fn print_chat_line(&self, entry: &ChatEntry) {
        self.print_md(&render::format_chat_line(entry));
    }

    pub fn print_transcript(&self, entries: &[ChatEntry]) {
        if entries.is_empty() {
            self.print_info("No messages yet.");
            return;
        }
        for entry in entries {
            self.print_chat_line(entry);
        }
    }

    /// Reply, detected mood (in the mood's color) and tip.
    pub fn print_reply(&self, reply: &ChatReply) {
        let time = reply.at.format("%H:%M");
        self.print_md(&format!("**Assistant ({time}):** {}", reply.reply));
        self.print_badge(&render::format_detection(&reply.reading), reply.advice.color);
        self.print_md(&render::format_tip(reply.advice.tip, false));
        self.print_info("Not quite right? Tell me with /correct <mood>.");
    }

    pub fn print_correction(&self, advice: &MoodAdvice) {
        self.print_badge(
            &format!("Thanks, noted: {}", advice.mood.badge()),
            advice.color,
        );
        self.print_md(&render::format_tip(advice.tip, true));
    }

    pub fn print_trend(&self, series: &[TrendPoint]) {
        if series.is_empty() {
            self.print_info(render::NO_MOOD_DATA);
            return;
        }
        self.print_md("## Mood Trend Over Time\n");
        for point in series {
            let row = render::format_trend_row(point);
            if self.opts.use_color {
                println!("{}", row.with(Calm::LAVENDER));
            } else {
                println!("{row}");
            }
        }
    }

    pub fn print_journal_history(&self, entries: &[JournalEntry]) {
        if entries.is_empty() {
            self.print_info("Your journal is empty.");
            return;
        }
        let lines: Vec<String> = entries.iter().map(render::format_journal_line).collect();
        self.print_md(&format!("## 🗂️ Journal History\n{}", lines.join("\n")));
    }

    pub fn print_summary(&self, summary: &WellnessSummary) {
        self.print_md(&render::format_summary(summary));
        self.print_trend(&summary.trend);
    }

    pub fn print_media(&self) {
        let lines: Vec<String> = RELAXATION_MEDIA
            .iter()
            .map(|m| format!("- **{}**: {}", m.title, m.url))
            .collect();
        self.print_md(&format!("## 🎧 Relaxation Media\n{}", lines.join("\n")));
    }

    fn print_badge(&self, text: &str, color_token: &str) {
        let color = color_from_hex(color_token).unwrap_or(Color::White);
        if self.opts.use_color {
            println!("{}", text.with(color));
        } else {
            println!("{text}");
        }
    }
}
