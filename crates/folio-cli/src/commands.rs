use folio_core::portfolio::{self, featured_projects};

/// Result of processing a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Start a fresh session.
    NewSession,
    /// Quit the application.
    Quit,
    /// Not a command - treat as chat input.
    NotACommand,
}

pub fn handle_command(input: &str) -> CommandResult {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return CommandResult::NotACommand;
    }

    let cmd = trimmed.split_whitespace().next().unwrap_or(trimmed);

    match cmd {
        "/help" | "/h" => show_help(),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        // Turns cannot be deleted, so clearing means a new session.
        "/new" | "/clear" => CommandResult::NewSession,
        "/projects" => CommandResult::Message(format_projects()),
        "/about" => CommandResult::Message(format_about()),
        "/version" => CommandResult::Message(format!("Folio CLI v{}", env!("CARGO_PKG_VERSION"))),
        _ => CommandResult::Message(format!("Unknown command: {cmd}. Type /help for commands.")),
    }
}

fn show_help() -> CommandResult {
    let help_text = "\
╭─ Folio Commands ───────────────────────────────────────────────╮

  CHAT
    <text>                    Ask the assistant a question
    /new, /clear              Start a fresh session

  PORTFOLIO
    /projects                 List featured projects
    /about                    About the portfolio owner

  OTHER
    /help, /h                 Show this help message
    /version                  Show version information
    /exit, /quit, /q          Quit the application

╰────────────────────────────────────────────────────────────────╯";

    CommandResult::Message(help_text.into())
}

pub fn format_projects() -> String {
    featured_projects()
        .iter()
        .map(|p| {
            format!(
                "[{}] {}\n    {}\n    tags: {}",
                p.id,
                p.title,
                p.description,
                p.tags.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_about() -> String {
    format!(
        "{}\n\nTech stack: {}\nContact: {}",
        portfolio::ABOUT,
        portfolio::TECH_STACK.join(", "),
        portfolio::CONTACT_EMAIL
    )
}
