//! Chat window rendering
//!
//! A Leptos SSR view of a chat conversation: an ordered list of message
//! bubbles followed by an optional loading indicator.
//!
//! # Modules
//!
//! - [`message`]: shared message record and transcript
//! - [`ui`]: Leptos components, [`ui::chat::ChatWindow`] at the core
//! - [`render`]: component-to-HTML entry points
//! - [`server`]: axum preview host
//! - [`config`]: layered configuration

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod message;
pub mod render;
pub mod server;
pub mod ui;

pub use error::{Error, Result};
pub use message::{Message, MessageId, MessageRole, Transcript};
