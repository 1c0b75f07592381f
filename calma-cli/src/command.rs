use calma_core::{JournalTag, MoodLabel};
use std::str::FromStr;
use thiserror::Error;

/// One line of REPL input, parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Chat(String),
    Clear,
    Transcript,
    Mood(MoodLabel),
    Correct(MoodLabel),
    Trend,
    /// `text` is `None` when the entry should be written in the editor.
    Journal {
        tag: JournalTag,
        text: Option<String>,
    },
    Gratitude(String),
    History,
    Breathe,
    Media,
    Draw(String),
    Summary,
    Help,
    Quit,
    Empty,
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '/{0}'. Type /help to see what you can do.")]
    Unknown(String),
    #[error("/{0} needs a mood: {moods}", moods = MoodLabel::names())]
    MissingMood(String),
    #[error("'{0}' is not a mood I know. Try one of: {moods}", moods = MoodLabel::names())]
    UnknownMood(String),
}

pub const HELP: &str = "\
## Commands

| command | what it does |
|:-|:-|
| *any text* | talk to your companion |
| `/chat` | show the conversation |
| `/clear` | clear the conversation |
| `/mood <mood>` | log how you feel right now |
| `/correct <mood>` | fix the mood detected from your last message |
| `/trend` | plot your mood over time |
| `/journal [tag] [text]` | save a journal entry (opens your editor without text) |
| `/gratitude <text>` | save something you are grateful for |
| `/history` | show your latest journal entries |
| `/breathe` | guided breathing exercise |
| `/media` | calming sounds and guided meditation |
| `/draw <sketch>` | express yourself |
| `/summary` | wellness summary |
| `/quit` | leave |
";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Empty);
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Chat(line.to_string()));
    };

    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };
    let name = name.to_ascii_lowercase();

    let command = match name.as_str() {
        "chat" => Command::Transcript,
        "clear" => Command::Clear,
        "mood" => Command::Mood(parse_mood(&name, args)?),
        "correct" => Command::Correct(parse_mood(&name, args)?),
        "trend" => Command::Trend,
        "journal" => parse_journal(args),
        "gratitude" => Command::Gratitude(args.to_string()),
        "history" => Command::History,
        "breathe" => Command::Breathe,
        "media" => Command::Media,
        "draw" => Command::Draw(args.to_string()),
        "summary" => Command::Summary,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(name)),
    };
    Ok(command)
}

fn parse_mood(command: &str, args: &str) -> Result<MoodLabel, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingMood(command.to_string()));
    }
    MoodLabel::from_str(args).map_err(|_| CommandError::UnknownMood(args.to_string()))
}

/// `/journal [tag] [text]`. Without a known tag the entry is a Reflection.
fn parse_journal(args: &str) -> Command {
    let (first, rest) = match args.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim()),
        None => (args, ""),
    };
    let (tag, text) = match JournalTag::from_str(first) {
        Ok(tag) => (tag, rest),
        Err(_) => (JournalTag::Reflection, args),
    };
    let text = if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    };
    Command::Journal { tag, text }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_chat() {
        assert_eq!(
            parse_command("  I feel great today "),
            Ok(Command::Chat("I feel great today".to_string()))
        );
        assert_eq!(parse_command("   "), Ok(Command::Empty));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse_command("/clear"), Ok(Command::Clear));
        assert_eq!(parse_command("/CHAT"), Ok(Command::Transcript));
        assert_eq!(parse_command("/trend"), Ok(Command::Trend));
        assert_eq!(parse_command("/exit"), Ok(Command::Quit));
        assert_eq!(parse_command("/breathe"), Ok(Command::Breathe));
    }

    #[test]
    fn mood_commands_take_a_label() {
        assert_eq!(
            parse_command("/mood anxious"),
            Ok(Command::Mood(MoodLabel::Anxious))
        );
        assert_eq!(
            parse_command("/correct Angry"),
            Ok(Command::Correct(MoodLabel::Angry))
        );
    }

    #[test]
    fn mood_commands_reject_unknown_or_missing_labels() {
        assert_eq!(
            parse_command("/mood mixed"),
            Err(CommandError::UnknownMood("mixed".to_string()))
        );
        assert_eq!(
            parse_command("/mood"),
            Err(CommandError::MissingMood("mood".to_string()))
        );
    }

    #[test]
    fn journal_with_tag_and_text() {
        assert_eq!(
            parse_command("/journal goals run a 10k"),
            Ok(Command::Journal {
                tag: JournalTag::Goals,
                text: Some("run a 10k".to_string())
            })
        );
    }

    #[test]
    fn journal_without_tag_is_reflection() {
        assert_eq!(
            parse_command("/journal quiet evening"),
            Ok(Command::Journal {
                tag: JournalTag::Reflection,
                text: Some("quiet evening".to_string())
            })
        );
    }

    #[test]
    fn journal_without_text_opens_editor() {
        assert_eq!(
            parse_command("/journal stress"),
            Ok(Command::Journal {
                tag: JournalTag::Stress,
                text: None
            })
        );
        assert_eq!(
            parse_command("/journal"),
            Ok(Command::Journal {
                tag: JournalTag::Reflection,
                text: None
            })
        );
    }

    #[test]
    fn gratitude_and_draw_keep_their_text() {
        assert_eq!(
            parse_command("/gratitude my friends"),
            Ok(Command::Gratitude("my friends".to_string()))
        );
        assert_eq!(parse_command("/gratitude"), Ok(Command::Gratitude(String::new())));
        assert_eq!(parse_command("/draw ~o~"), Ok(Command::Draw("~o~".to_string())));
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert_eq!(
            parse_command("/dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
