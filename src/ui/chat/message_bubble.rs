//! A single chat message.

use leptos::prelude::*;

use crate::message::{Message, MessageRole};
use crate::ui::components::Avatar;

/// Row and bubble classes per role.
fn role_classes(role: MessageRole) -> (&'static str, &'static str) {
    match role {
        MessageRole::User => ("flex-row-reverse", "bg-primary text-white"),
        MessageRole::Assistant => ("flex-row", "bg-panel text-textPrimary"),
        MessageRole::System => ("flex-row", "bg-transparent text-textMuted italic"),
    }
}

/// One message rendered as a bubble.
///
/// Produces exactly one root element carrying `data-message-id` and
/// `data-role`. Content is rendered as escaped text.
#[component]
pub fn MessageBubble(
    /// The message to display.
    message: Message,
    /// Render the author avatar.
    #[prop(default = true)]
    show_avatar: bool,
) -> impl IntoView {
    let Message {
        id,
        role,
        content,
        created_at,
    } = message;
    let (row, bubble) = role_classes(role);

    let row_classes = format!("message-bubble flex items-end gap-3 {row}");
    let bubble_classes = format!("max-w-[80%] rounded-2xl px-4 py-2 {bubble}");

    view! {
        <div class=row_classes data-message-id=id.to_string() data-role=role.as_str()>
            {show_avatar.then(|| view! { <Avatar role=role /> })}
            <div class=bubble_classes>
                <p class="message-content whitespace-pre-wrap break-words">{content}</p>
                <time class="block text-[10px] opacity-60 mt-1" datetime=created_at.to_rfc3339()>
                    {created_at.format("%H:%M").to_string()}
                </time>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_bubbles_align_right() {
        let (row, _) = role_classes(MessageRole::User);
        assert_eq!(row, "flex-row-reverse");

        let (row, _) = role_classes(MessageRole::Assistant);
        assert_eq!(row, "flex-row");
    }
}
