//! Chat window preview
//!
//! Renders a transcript to HTML on stdout, or serves it over HTTP.

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use chat_window::config::{AppConfig, Cli, Command};
use chat_window::message::{Message, Transcript};
use chat_window::render::{displayed_messages, render_chat_window, render_page};
use chat_window::server;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED); logs go to stderr so `render` output stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli).context("failed to load configuration")?;

    let transcript = match &config.transcript.path {
        Some(path) => Transcript::load(path)
            .with_context(|| format!("failed to load transcript {}", path.display()))?,
        None => demo_transcript()?,
    };

    info!(
        name: "transcript.loaded",
        messages = transcript.len(),
        source = %config
            .transcript
            .path
            .as_ref()
            .map_or_else(|| "demo".to_string(), |p| p.display().to_string()),
        "Transcript loaded"
    );

    match cli.command.unwrap_or(Command::Serve) {
        Command::Render { loading, page } => {
            let html = if page {
                render_page(&config.page.title, &transcript, loading, &config.view)
            } else {
                let messages = displayed_messages(&transcript, &config.view);
                render_chat_window(&messages, loading, &config.view)
            };
            println!("{html}");
        }
        Command::Serve => server::serve(config, transcript).await?,
    }

    Ok(())
}

/// Conversation shown when no transcript file is configured.
fn demo_transcript() -> chat_window::Result<Transcript> {
    let mut transcript = Transcript::with_system_prompt("You are a helpful assistant.");
    transcript.push(Message::user("What does this window show?"))?;
    transcript.push(Message::assistant(
        "Every message of the conversation in order, and a loading indicator while a reply is pending.",
    ))?;
    transcript.push(Message::user("Can I point it at my own transcript?"))?;
    transcript.push(Message::assistant(
        "Yes: pass --transcript with a JSON array of {role, content} objects.",
    ))?;
    Ok(transcript)
}
