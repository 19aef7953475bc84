//! Feed state definition
//!
//! ```text
//!            DataAvailable              Exhausted
//!   Idle ─────────────────▶ Streaming ───────────▶ Underrun
//!                               ▲                      │
//!                               └──────────────────────┘
//!                                     DataAvailable
//! ```
//!
//! There is no terminal state; tearing the display down simply stops ticks.

use super::events::FeedEvent;

/// One of the two LED columns on the blade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Side {
    /// Leading column, reads at the front cursor
    Front,
    /// Trailing column, reads at the back cursor
    Back,
}

/// Feed state of one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedState {
    /// Nothing has been pushed yet
    #[default]
    Idle,
    /// Cursor advancing normally
    Streaming,
    /// Ran out of columns; cursor frozen on its last column
    Underrun,
}

impl FeedState {
    /// Check if the side is advancing normally
    pub fn is_streaming(&self) -> bool {
        matches!(self, FeedState::Streaming)
    }

    /// Check if the side is starved after having had data
    pub fn is_underrun(&self) -> bool {
        matches!(self, FeedState::Underrun)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: FeedEvent) -> Self {
        use FeedEvent::*;
        use FeedState::*;

        match (self, event) {
            (Idle, DataAvailable) => Streaming,
            (Idle, Exhausted) => Idle,

            (Streaming, DataAvailable) => Streaming,
            (Streaming, Exhausted) => Underrun,

            (Underrun, DataAvailable) => Streaming,
            (Underrun, Exhausted) => Underrun,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_data_starts_streaming() {
        assert_eq!(
            FeedState::Idle.transition(FeedEvent::DataAvailable),
            FeedState::Streaming
        );
    }

    #[test]
    fn test_idle_stays_idle_without_data() {
        assert_eq!(
            FeedState::Idle.transition(FeedEvent::Exhausted),
            FeedState::Idle
        );
    }

    #[test]
    fn test_underrun_round_trip() {
        let state = FeedState::Streaming.transition(FeedEvent::Exhausted);
        assert!(state.is_underrun());
        assert!(!state.is_streaming());

        let state = state.transition(FeedEvent::Exhausted);
        assert_eq!(state, FeedState::Underrun);

        let state = state.transition(FeedEvent::DataAvailable);
        assert!(state.is_streaming());
    }
}
