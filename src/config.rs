//! Layered configuration.
//!
//! Priority, lowest to highest: built-in defaults, YAML config file,
//! `CHAT_WINDOW_*` environment variables, command-line flags.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "chat-window.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// JSON transcript to render
    #[arg(short, long, env = "TRANSCRIPT_FILE")]
    pub transcript: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Text shown by the loading indicator
    #[arg(long)]
    pub loading_label: Option<String>,

    /// Also render system messages
    #[arg(long)]
    pub show_system: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the rendered chat window to stdout
    Render {
        /// Render the loading indicator after the messages
        #[arg(long)]
        loading: bool,
        /// Wrap the window in a full HTML page
        #[arg(long)]
        page: bool,
    },
    /// Serve a live preview over HTTP
    Serve,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub view: ViewOptions,
    pub page: PageConfig,
    #[serde(default)]
    pub transcript: TranscriptConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Presentation options for the chat window.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ViewOptions {
    /// Text of the loading indicator.
    pub loading_label: String,
    /// Render an avatar next to each bubble.
    pub show_avatars: bool,
    /// Leave system prompts out of the rendered list.
    ///
    /// Applied by the host before handing messages to the window.
    pub hide_system_messages: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            loading_label: "...".to_string(),
            show_avatars: true,
            hide_system_messages: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    pub title: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TranscriptConfig {
    pub path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::from_cli(&Cli::parse())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::from_cli(&cli)
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let defaults = ViewOptions::default();

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("view.loading_label", defaults.loading_label)?
            .set_default("view.show_avatars", defaults.show_avatars)?
            .set_default("view.hide_system_messages", defaults.hide_system_messages)?
            .set_default("page.title", "Chat")?;

        match &cli.config {
            Some(path) => {
                builder = builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Yaml));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml));
            }
            None => {}
        }

        // E.g. CHAT_WINDOW_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("CHAT_WINDOW")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(label) = &cli.loading_label {
            builder = builder.set_override("view.loading_label", label.as_str())?;
        }
        if cli.show_system {
            builder = builder.set_override("view.hide_system_messages", false)?;
        }
        if let Some(path) = &cli.transcript {
            builder = builder.set_override("transcript.path", path.to_string_lossy().as_ref())?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Socket address string for the preview server.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
