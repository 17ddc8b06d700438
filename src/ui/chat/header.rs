//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::{Badge, BadgeVariant};

/// Chat header with title, message count and status.
#[component]
pub fn ChatHeader(
    /// Title displayed in the header.
    #[prop(into, default = "Chat".to_string())]
    title: String,
    /// Number of messages currently shown.
    #[prop(default = 0)]
    message_count: usize,
    /// Whether a reply is pending.
    #[prop(default = false)]
    loading: bool,
) -> impl IntoView {
    let (variant, status) = if loading {
        (BadgeVariant::Pending, "Thinking")
    } else {
        (BadgeVariant::Secondary, "Ready")
    };
    let count = match message_count {
        1 => "1 message".to_string(),
        n => format!("{n} messages"),
    };

    view! {
        <header class="chat-header flex items-center justify-between px-4 py-3 border-b border-panelBorder bg-panel/50 backdrop-blur-sm">
            <div class="flex items-baseline gap-3">
                <h2 class="font-semibold text-lg">{title}</h2>
                <span class="text-xs text-textMuted">{count}</span>
            </div>

            <Badge variant=variant>
                <span id="chat-status" class="text-xs">{status}</span>
            </Badge>
        </header>
    }
}
