pub mod helpers;
pub mod monitor;
pub mod probe;
pub mod sink;
pub mod stat;

pub use probe::{CpuQuery, Ps};
pub use sink::CsvSink;
pub use stat::CpuStat;
