//! Events that trigger feed state transitions

/// Events observed by the tick handler for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedEvent {
    /// A column is available for this side (cursor moved or data arrived)
    DataAvailable,
    /// The side's pixel ended but no further column was available
    Exhausted,
}
