//! UI components.
//!
//! Leptos components rendered on the server, following ShadCN-UI design
//! principles.
//!
//! - [`chat`]: chat window, message bubble and page layout
//! - [`components`]: reusable building blocks

pub mod chat;
pub mod components;
