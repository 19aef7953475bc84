//! Feed state machine
//!
//! Tracks, per LED column, whether content is flowing. The front side
//! decides whether the motor may step; the back side only gates its own
//! cursor.

pub mod events;
pub mod machine;

pub use events::FeedEvent;
pub use machine::{FeedState, Side};
