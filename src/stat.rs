use chrono::{DateTime, FixedOffset, SecondsFormat};
use core::fmt;

/// One cpu usage measurement of a process, as % as reported by ps,
/// taken at a given time.
#[derive(Debug)]
pub struct CpuStat {
    pub time: DateTime<FixedOffset>,
    pub pcpu: f64,
}

impl CpuStat {
    /// Render the stat as a csv record: rfc3339 timestamp, then the
    /// percentage with one fractional digit. Percentages above 100 are
    /// legal (multi core processes) and pass through unclamped.
    pub fn to_record(&self) -> [String; 2] {
        [
            self.time.to_rfc3339_opts(SecondsFormat::Secs, true),
            format!("{:.1}", self.pcpu),
        ]
    }
}

impl fmt::Display for CpuStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_record().join(" - "))
    }
}
