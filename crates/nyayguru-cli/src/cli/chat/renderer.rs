//! Styled terminal rendering of transcript messages.

use console::style;

use nyayguru_types::message::{ChatMessage, MessageKind, Sender};

/// Render one transcript message.
///
/// Loading placeholders are never rendered; the chat loop shows a spinner
/// while a send is pending.
pub fn render(message: &ChatMessage) {
    match message.kind {
        MessageKind::Loading => {}
        MessageKind::Welcome => {
            println!();
            println!("  {}", style(&message.text).cyan());
            println!(
                "  {}",
                style("Type /help for commands, /quit to leave.").dim()
            );
            println!();
        }
        MessageKind::Info => {
            println!("  {} {}", style("i").blue().bold(), style(&message.text).dim());
        }
        MessageKind::Error => {
            println!("  {} {}", style("✗").red().bold(), style(&message.text).red());
        }
        MessageKind::Normal => match message.sender {
            Sender::User => {
                println!("  {} {}", style("you:").green().bold(), message.text);
            }
            Sender::Bot => render_answer(message),
        },
    }
}

fn render_answer(message: &ChatMessage) {
    println!();
    println!("  {}", style("NyayGuru:").cyan().bold());
    for line in message.text.lines() {
        println!("  {line}");
    }

    if !message.sources.is_empty() {
        println!();
        println!("  {}", style("Sources:").bold());
        for source in &message.sources {
            println!(
                "  {} {} {}",
                style("•").cyan(),
                source.title,
                style(&source.url).dim().underlined()
            );
        }
    }

    if !message.suggested_questions.is_empty() {
        println!();
        println!("  {}", style("You could also ask:").bold());
        for question in &message.suggested_questions {
            println!("  {} {}", style("?").yellow(), question);
        }
    }
    println!();
}
