use anyhow::Result;
use clap::Parser;
use folio_core::constants::defaults;
use folio_core::Settings;

mod app;
mod commands;
mod theme;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - portfolio assistant chat")]
#[command(version)]
struct Cli {
    /// Send a single question and print the reply
    #[arg(short, long)]
    prompt: Option<String>,

    /// Gemini model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Give up on a model call after this many seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Color theme (neon, mono)
    #[arg(long)]
    theme: Option<String>,
}

fn init_logging(to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    if to_file {
        // Keep log lines off the alternate screen
        let dir = Settings::config_dir();
        std::fs::create_dir_all(&dir)?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(defaults::LOG_FILE))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.prompt.is_none())?;

    let mut settings = Settings::load();

    if let Some(ref model) = cli.model {
        settings.llm.model = model.clone();
    }
    if let Some(secs) = cli.timeout {
        settings.llm.request_timeout_secs = Some(secs);
    }
    if let Some(ref theme) = cli.theme {
        if !theme::Theme::all_names().contains(&theme.as_str()) {
            tracing::warn!(%theme, "unknown theme, falling back to neon");
        }
        settings.ui.theme = theme.clone();
    }

    if let Some(prompt) = cli.prompt {
        app::run_single_prompt(&settings, &prompt).await?;
    } else {
        let theme_name = settings.ui.theme.clone();
        app::run_tui(settings, &theme_name).await?;
    }

    Ok(())
}
