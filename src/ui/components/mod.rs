//! Small reusable UI building blocks, rendered via Leptos SSR.
//!
//! - [`Avatar`]: author initials next to a bubble
//! - [`Badge`]: status pill
//! - [`ScrollArea`]: scrollable live region

mod avatar;
mod badge;
mod scroll_area;

pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use scroll_area::ScrollArea;
