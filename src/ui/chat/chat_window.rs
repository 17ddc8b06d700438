//! Chat window: the scrollable message list.

use leptos::prelude::*;

use super::{LoadingIndicator, MessageBubble};
use crate::config::ViewOptions;
use crate::message::Message;
use crate::ui::components::ScrollArea;

/// Scrollable list of chat messages with an optional loading indicator.
///
/// Renders one [`MessageBubble`] per message, in order, followed by a
/// [`LoadingIndicator`] when `loading` is set. Nothing else is added to the
/// container. Bubbles are keyed by [`MessageId`](crate::message::MessageId),
/// so callers must hand in messages with unique ids; [`Transcript`] already
/// guarantees that.
///
/// The component is a pure function of its props and may be re-rendered
/// as often as the host likes.
///
/// [`Transcript`]: crate::message::Transcript
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ChatWindow messages=transcript.visible() loading=true />
/// }
/// ```
#[component]
pub fn ChatWindow(
    /// Messages, top to bottom.
    messages: Vec<Message>,
    /// Show the loading indicator after the last message.
    #[prop(default = false)]
    loading: bool,
    /// Presentation options.
    #[prop(optional)]
    options: ViewOptions,
) -> impl IntoView {
    let ViewOptions {
        loading_label,
        show_avatars,
        ..
    } = options;

    view! {
        <ScrollArea class="chat-window flex flex-col gap-4 p-4" busy=loading>
            <For
                each=move || messages.clone()
                key=|message| message.id
                children=move |message| {
                    view! { <MessageBubble message=message show_avatar=show_avatars /> }
                }
            />
            {loading.then(move || view! { <LoadingIndicator label=loading_label /> })}
        </ScrollArea>
    }
}
