//! Scrollable area component.

use leptos::prelude::*;

/// Scrollable live region.
///
/// Announces appended content politely and exposes `aria-busy` while
/// more content is pending.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ScrollArea class="h-[400px]" busy=true>
///         // Long content here
///     </ScrollArea>
/// }
/// ```
#[component]
pub fn ScrollArea(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Accessible name of the region.
    #[prop(default = "Chat messages")]
    label: &'static str,
    /// Whether more content is on its way.
    #[prop(default = false)]
    busy: bool,
    /// Scrollable content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "{class} relative overflow-auto scrollbar-thin scrollbar-thumb-panelBorder \
         scrollbar-track-transparent"
    );
    let busy = if busy { "true" } else { "false" };

    view! {
        <div
            class=classes
            role="log"
            aria-live="polite"
            aria-label=label
            aria-busy=busy
        >
            {children()}
        </div>
    }
}
