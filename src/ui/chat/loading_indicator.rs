//! Pending-response indicator.

use leptos::prelude::*;

/// Animated dots shown while a reply is pending.
#[component]
pub fn LoadingIndicator(
    /// Visible text next to the dots.
    #[prop(into, default = "...".to_string())]
    label: String,
) -> impl IntoView {
    view! {
        <div class="loading-indicator flex items-center gap-2 px-4 py-2 text-textMuted" role="status">
            <span class="loading-dot h-2 w-2 rounded-full bg-textMuted animate-bounce"></span>
            <span class="loading-dot h-2 w-2 rounded-full bg-textMuted animate-bounce [animation-delay:150ms]"></span>
            <span class="loading-dot h-2 w-2 rounded-full bg-textMuted animate-bounce [animation-delay:300ms]"></span>
            <span class="loading-label text-sm">{label}</span>
        </div>
    }
}
