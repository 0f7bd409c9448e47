// crates/domain/src/analytics.rs
pub mod frequency;
pub mod radix;
pub mod sort;
pub mod statistics;

pub use frequency::FrequencyTable;
pub use radix::{to_binary, to_hex, to_radix};
pub use sort::insertion_sort;
pub use statistics::{Summary, newton_sqrt, summarize};
