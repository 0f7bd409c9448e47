// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod parsing;

pub use model::{FrequencyEntry, IntegerRecord, Mode, NumericRecord, ResultLines};
pub use parsing::{Diagnostic, InvalidReason, RecordParser};
