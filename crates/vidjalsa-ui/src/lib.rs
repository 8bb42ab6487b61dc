//! `VidJalsa` UI - Leptos-based user interface.
//!
//! This crate renders the preview, loading and output views of the
//! `VidJalsa` client on top of the logic in `vidjalsa-core`.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod router;
pub mod theme;

pub use app::{App, use_config};
pub use router::{CurrentView, Navigator, use_navigator};
