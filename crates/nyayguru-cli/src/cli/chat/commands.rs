//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and provide in-chat controls for category and
//! language switching, transcript reset, and exit.

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Switch category; bare `/category` lists the options.
    Category(Option<String>),
    /// Switch language; bare `/language` lists the options.
    Language(Option<String>),
    /// Reset the transcript to a fresh welcome message.
    Clear,
    /// Exit the chat session.
    Quit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts
        .get(1)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/category" | "/cat" => Some(ChatCommand::Category(arg)),
        "/language" | "/lang" => Some(ChatCommand::Language(arg)),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/quit" | "/exit" | "/q" => Some(ChatCommand::Quit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!(
        "  {}  {}",
        style("/category [name]").cyan(),
        "Switch legal category, or list the options"
    );
    println!(
        "  {}  {}",
        style("/language [name]").cyan(),
        "Switch response language, or list the options"
    );
    println!(
        "  {}           {}",
        style("/clear").cyan(),
        "Start the conversation over"
    );
    println!(
        "  {}            {}",
        style("/quit").cyan(),
        "End the chat session"
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_non_command_is_none() {
        assert_eq!(parse("What is bail?"), None);
        assert_eq!(parse("  plain text  "), None);
    }

    #[test]
    fn test_parse_category_with_and_without_arg() {
        assert_eq!(
            parse("/category Civil Law"),
            Some(ChatCommand::Category(Some("Civil Law".to_string())))
        );
        assert_eq!(parse("/category"), Some(ChatCommand::Category(None)));
        assert_eq!(parse("/cat  "), Some(ChatCommand::Category(None)));
    }

    #[test]
    fn test_parse_language_alias() {
        assert_eq!(
            parse("/lang Hindi"),
            Some(ChatCommand::Language(Some("Hindi".to_string())))
        );
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(parse("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse("/q"), Some(ChatCommand::Quit));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(
            parse("/remember this"),
            Some(ChatCommand::Unknown("/remember".to_string()))
        );
    }
}
