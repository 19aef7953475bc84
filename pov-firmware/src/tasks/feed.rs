//! Column producer task
//!
//! Feeds the configured pattern into the column buffer in an endless
//! loop. When the buffer is full it sleeps until the step task reports a
//! freed slot.

use defmt::*;
use pov_core::buffer::ColumnProducer;

use crate::channels::SPACE_AVAILABLE;

/// Feed task - keeps the column buffer topped up
#[embassy_executor::task]
pub async fn feed_task(mut producer: ColumnProducer<'static>, pattern: &'static [u8]) {
    if pattern.is_empty() {
        warn!("Empty pattern, nothing to display");
        return;
    }

    info!(
        "Feed task started: {} columns, {} buffer slots",
        pattern.len(),
        producer.free_slots()
    );

    for &column in pattern.iter().cycle() {
        while !producer.push(column) {
            SPACE_AVAILABLE.wait().await;
        }
    }
}
