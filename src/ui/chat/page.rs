//! Chat page layout.

use leptos::prelude::*;

use super::{ChatHeader, ChatWindow};
use crate::config::ViewOptions;
use crate::message::Message;

/// Header plus chat window, as served by the preview host.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ChatPage title="Assistant" messages=messages loading=false />
/// }
/// ```
#[component]
pub fn ChatPage(
    /// Title displayed in the header.
    #[prop(into, default = "Chat".to_string())]
    title: String,
    /// Messages to display.
    messages: Vec<Message>,
    /// Whether a reply is pending.
    #[prop(default = false)]
    loading: bool,
    /// Presentation options.
    #[prop(optional)]
    options: ViewOptions,
) -> impl IntoView {
    let message_count = messages.len();

    view! {
        <div class="chat-shell flex flex-col h-[calc(100vh-6rem)] bg-panel border border-panelBorder rounded-2xl overflow-hidden">
            <ChatHeader title=title message_count=message_count loading=loading />

            <div id="chat-window" class="flex-1 overflow-hidden">
                <ChatWindow messages=messages loading=loading options=options />
            </div>
        </div>
    }
}
