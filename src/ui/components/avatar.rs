//! Role avatar.

use leptos::prelude::*;

use crate::message::MessageRole;

/// Circular avatar showing who authored a message.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar role=MessageRole::Assistant />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Author role, selects initials and colors.
    role: MessageRole,
    /// Size class (e.g., "h-8 w-8").
    #[prop(default = "h-8 w-8")]
    size: &'static str,
) -> impl IntoView {
    let (initials, colors) = match role {
        MessageRole::User => ("You", "bg-primary text-white"),
        MessageRole::Assistant => ("AI", "bg-panel text-textPrimary"),
        MessageRole::System => ("SYS", "bg-panel text-textMuted"),
    };

    let classes = format!(
        "avatar relative flex shrink-0 items-center justify-center overflow-hidden rounded-full \
         text-xs font-medium {size} {colors}"
    );

    view! {
        <span class=classes aria-hidden="true">
            {initials}
        </span>
    }
}
