//! Embassy async tasks
//!
//! The step task runs on the high-priority interrupt executor; the others
//! share the thread-mode executor and talk to it through the display
//! handles and channels.

pub mod control;
pub mod feed;
pub mod step;

pub use control::{control_task, ControlButtons};
pub use feed::feed_task;
pub use step::step_task;
