//! Chat-specific UI components.
//!
//! [`ChatWindow`] is the core view: a pure function from a message list and
//! a loading flag to a rendered list. [`MessageBubble`] renders a single
//! message, [`ChatPage`] wraps the window with a header for full-page use.

mod chat_window;
mod header;
mod loading_indicator;
mod message_bubble;
mod page;

pub use chat_window::ChatWindow;
pub use header::ChatHeader;
pub use loading_indicator::LoadingIndicator;
pub use message_bubble::MessageBubble;
pub use page::ChatPage;
