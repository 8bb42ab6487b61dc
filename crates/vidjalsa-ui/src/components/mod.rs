//! Reusable UI components.

mod empty_state;
mod heading;
mod meteor_shower;
mod progress_bar;
mod video_card;

pub use empty_state::{
    EmptyState, EmptyStateIcon, EntryEmptyState, InvalidStateEmptyState, MissingStateEmptyState,
    NotFoundEmptyState,
};
pub use heading::PageHeading;
pub use meteor_shower::MeteorShower;
pub use progress_bar::ProgressBar;
pub use video_card::VideoCard;
