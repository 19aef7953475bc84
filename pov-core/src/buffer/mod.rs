//! Column buffer between the content producer and the tick handler

pub mod ring;

pub use ring::{Column, ColumnBuffer, ColumnProducer, ColumnReader, DEFAULT_CAPACITY};
