//! Top-level views, one per route.

mod loading;
mod output;
mod preview;

pub use loading::LoadingPage;
pub use output::OutputPage;
pub use preview::PreviewPage;
