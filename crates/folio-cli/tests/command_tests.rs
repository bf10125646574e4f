use folio_cli::commands::{format_about, format_projects, handle_command, CommandResult};
use folio_cli::Theme;

// ========================================================================
// Command Parsing Tests (commands.rs)
// ========================================================================

#[test]
fn test_help_command() {
    let result = handle_command("/help");
    match result {
        CommandResult::Message(msg) => {
            assert!(msg.contains("Folio Commands"));
            assert!(msg.contains("/projects"));
            assert!(msg.contains("/new"));
        }
        other => panic!("expected help message, got {other:?}"),
    }
}

#[test]
fn test_help_command_short_alias() {
    assert!(matches!(handle_command("/h"), CommandResult::Message(_)));
}

#[test]
fn test_quit_aliases() {
    for cmd in ["/exit", "/quit", "/q"] {
        assert_eq!(handle_command(cmd), CommandResult::Quit, "{cmd}");
    }
}

#[test]
fn test_new_and_clear_start_fresh_session() {
    assert_eq!(handle_command("/new"), CommandResult::NewSession);
    assert_eq!(handle_command("/clear"), CommandResult::NewSession);
}

#[test]
fn test_command_with_surrounding_whitespace() {
    assert_eq!(handle_command("  /quit  "), CommandResult::Quit);
}

#[test]
fn test_plain_text_is_not_a_command() {
    assert_eq!(
        handle_command("What is your tech stack?"),
        CommandResult::NotACommand
    );
    assert_eq!(handle_command(""), CommandResult::NotACommand);
}

#[test]
fn test_unknown_command() {
    match handle_command("/teleport now") {
        CommandResult::Message(msg) => {
            assert!(msg.contains("Unknown command: /teleport"));
            assert!(msg.contains("/help"));
        }
        other => panic!("expected error message, got {other:?}"),
    }
}

#[test]
fn test_version_command() {
    match handle_command("/version") {
        CommandResult::Message(msg) => assert!(msg.starts_with("Folio CLI v")),
        other => panic!("expected version message, got {other:?}"),
    }
}

#[test]
fn test_projects_command_lists_every_project() {
    let listing = format_projects();
    assert!(listing.contains("[1] AI Chatbot Orchestrator"));
    assert!(listing.contains("[2] 3D E-Commerce Visualizer"));
    assert!(listing.contains("[3] FinTech Dashboard"));
    assert!(listing.contains("tags: D3.js, TypeScript, Tailwind"));
    assert_eq!(handle_command("/projects"), CommandResult::Message(listing));
}

#[test]
fn test_about_command_includes_contact() {
    let about = format_about();
    assert!(about.contains("professionally known as Michael"));
    assert!(about.contains("michael.dev@example.com"));
    assert!(about.contains("Three.js / R3F"));
}

// ========================================================================
// Theme Tests (theme.rs)
// ========================================================================

#[test]
fn test_theme_by_name_falls_back_to_neon() {
    assert_eq!(Theme::by_name("mono").name, "mono");
    assert_eq!(Theme::by_name("nope").name, "neon");
    assert_eq!(Theme::all_names(), &["neon", "mono"]);
}
