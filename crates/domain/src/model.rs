// crates/domain/src/model.rs
pub mod records;
pub mod report;

pub use records::{FrequencyEntry, IntegerRecord, Mode, NumericRecord};
pub use report::ResultLines;
