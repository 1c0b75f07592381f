use crate::command::{Command, parse_command};
use crate::editor_utils::{create_editor_buffer, resolve_editor};
use crate::render::Renderer;
use anyhow::Result;
use calma_core::{Dashboard, JournalTag, render::JOURNAL_REMINDER};
use chrono::Local;
use std::io::BufRead;
use std::thread;
use tracing::debug;

pub enum Flow {
    Continue,
    Quit,
}

/// Reads commands line by line and routes them to one session's dashboard.
pub struct Repl {
    dashboard: Dashboard,
    renderer: Renderer,
    editor: Option<String>,
}

impl Repl {
    pub fn new(dashboard: Dashboard, renderer: Renderer, editor: Option<String>) -> Self {
        Self {
            dashboard,
            renderer,
            editor,
        }
    }

    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.renderer.print_welcome();
        self.renderer.print_prompt();
        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(command) => match self.dispatch(command) {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => self.renderer.print_error(&format!("{e:#}")),
                },
                Err(e) => self.renderer.print_info(&e.to_string()),
            }
            self.renderer.print_prompt();
        }
        self.renderer.print_success("Take care of yourself 💖");
        Ok(())
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "dispatching");
        match command {
            Command::Empty => {}
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => self.renderer.print_help(),
            Command::Chat(text) => self.chat(&text),
            Command::Transcript => self.renderer.print_transcript(self.dashboard.transcript()),
            Command::Clear => {
                self.dashboard.clear_chat();
                self.renderer.print_info("🧹 Chat cleared.");
            }
            Command::Correct(mood) => {
                let advice = self.dashboard.correct_mood(mood);
                self.renderer.print_correction(&advice);
            }
            Command::Mood(mood) => {
                self.dashboard.log_mood(mood);
                self.renderer
                    .print_success(&format!("Mood logged: {}", mood.badge()));
                self.renderer.print_trend(&self.dashboard.mood_series());
            }
            Command::Trend => self.renderer.print_trend(&self.dashboard.mood_series()),
            Command::Journal { tag, text } => self.journal(tag, text)?,
            Command::Gratitude(text) => {
                self.dashboard.save_gratitude(&text);
                self.renderer.print_success("Gratitude saved 💛");
            }
            Command::History => self.history(),
            Command::Breathe => self.breathe(),
            Command::Media => self.renderer.print_media(),
            Command::Draw(sketch) => match self.dashboard.express(&sketch) {
                Some(ack) => self.renderer.print_success(ack),
                None => self.renderer.print_info("Nothing to save yet. Try /draw <sketch>."),
            },
            Command::Summary => self.renderer.print_summary(&self.dashboard.summary()),
        }
        Ok(Flow::Continue)
    }

    /// Capability failures are shown and the session stays as it was.
    fn chat(&mut self, text: &str) {
        let now = Local::now().format("%H:%M");
        self.renderer.print_md(&format!("**User ({now}):** {text}"));
        match self.dashboard.submit_message(text) {
            Ok(reply) => self.renderer.print_reply(&reply),
            Err(e) => self
                .renderer
                .print_error(&format!("Your companion could not answer right now: {e}")),
        }
    }

    fn journal(&mut self, tag: JournalTag, text: Option<String>) -> Result<()> {
        let text = match text {
            Some(text) => text,
            None => {
                let editor = resolve_editor(self.editor.as_deref());
                let input = create_editor_buffer(&editor)?;
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    self.renderer
                        .print_info("No entry to save, because no text was received.");
                    return Ok(());
                }
                trimmed.to_string()
            }
        };
        self.dashboard.save_journal(&text, tag);
        self.renderer
            .print_success(&format!("Journal entry saved under '{tag}' 💾"));
        Ok(())
    }

    fn history(&self) {
        if self.dashboard.journal_reminder(Local::now().naive_local()) {
            self.renderer.print_info(JOURNAL_REMINDER);
        }
        self.renderer
            .print_journal_history(&self.dashboard.journal_history());
    }

    /// Paces the exercise in wall-clock time. Blocks this session only.
    fn breathe(&self) {
        self.renderer.print_md("🌬️ Breathe in... hold... breathe out...");
        for step in self.dashboard.breathing().steps() {
            let line = match step.phase {
                calma_core::BreathingPhase::Inhale => {
                    format!("Cycle {}: {} {}", step.cycle, step.phase, step.phase.emoji())
                }
                _ => format!("{} {}", step.phase, step.phase.emoji()),
            };
            self.renderer.print_md(&line);
            thread::sleep(step.duration);
        }
        self.renderer.print_success("Feeling calmer? You did great 💖");
    }
}
