//! Badge component for status indicators.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Neutral badge.
    #[default]
    Secondary,
    /// Something is in progress.
    Pending,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Secondary => "bg-panel text-textPrimary border border-panelBorder",
            Self::Pending => "bg-warning text-black",
        }
    }
}

/// Small pill-shaped label.
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Secondary)]
    variant: BadgeVariant,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "badge inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
        variant.classes()
    );

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
