//! Server-side rendering entry points.
//!
//! Both functions are deterministic: the same input always yields the same
//! HTML, so hosts may cache the output keyed on their inputs.

use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use tracing::debug;

use crate::config::ViewOptions;
use crate::message::{Message, Transcript};
use crate::ui::chat::{ChatPage, ChatWindow};

/// Minimal stylesheet so the preview reads without a CSS build step.
const PAGE_CSS: &str = "
body { margin: 0; font-family: system-ui, sans-serif; background: #0f1115; color: #e6e6e6; }
.chat-window { display: flex; flex-direction: column; gap: 1rem; padding: 1rem; overflow-y: auto; }
.message-bubble { display: flex; gap: .75rem; align-items: flex-end; }
.message-bubble.flex-row-reverse { flex-direction: row-reverse; }
.message-content { margin: 0; white-space: pre-wrap; }
.avatar { display: inline-flex; width: 2rem; height: 2rem; border-radius: 9999px; align-items: center; justify-content: center; background: #2a2d35; font-size: .7rem; }
.loading-indicator { display: flex; gap: .4rem; align-items: center; opacity: .7; }
.loading-dot { width: .5rem; height: .5rem; border-radius: 9999px; background: currentColor; }
";

/// Render the chat window alone, e.g. for an HTMX fragment swap.
///
/// `messages` is rendered as given; filtering is the caller's business.
pub fn render_chat_window(messages: &[Message], loading: bool, options: &ViewOptions) -> String {
    debug!(
        name: "render.chat_window",
        messages = messages.len(),
        loading,
        "Rendering chat window"
    );

    let messages = messages.to_vec();
    let options = options.clone();
    Owner::new().with(move || {
        view! { <ChatWindow messages=messages loading=loading options=options /> }.to_html()
    })
}

/// Messages of `transcript` that the view should display under `options`.
pub fn displayed_messages(transcript: &Transcript, options: &ViewOptions) -> Vec<Message> {
    if options.hide_system_messages {
        transcript.visible()
    } else {
        transcript.messages().to_vec()
    }
}

/// Render a complete HTML document containing the chat page.
pub fn render_page(
    title: &str,
    transcript: &Transcript,
    loading: bool,
    options: &ViewOptions,
) -> String {
    let messages = displayed_messages(transcript, options);

    debug!(
        name: "render.page",
        messages = messages.len(),
        loading,
        "Rendering chat page"
    );

    let title = title.to_string();
    let options = options.clone();
    Owner::new().with(move || {
        let page_title = title.clone();
        view! {
            <!doctype html>
            <html lang="en" class="dark">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{page_title}</title>
                    <style>{PAGE_CSS}</style>
                </head>
                <body class="min-h-screen bg-background text-textPrimary antialiased">
                    <main id="app" class="container mx-auto px-4 py-6 max-w-5xl">
                        <ChatPage title=title messages=messages loading=loading options=options />
                    </main>
                </body>
            </html>
        }
        .to_html()
    })
}
