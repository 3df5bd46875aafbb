//! Data models for switch matrix layouts, wiring configurations and channels.
//!
//! Models are plain values with no behavior beyond parsing and display;
//! the numbering arithmetic lives in [`crate::numbering`].

pub mod channel;
pub mod layout;
pub mod wiring;

// Re-export all model types
pub use channel::{ChannelCoordinate, ChannelId};
pub use layout::Layout;
pub use wiring::WiringConfig;
