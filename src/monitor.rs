use crate::probe::{self, CpuQuery, Ps};
use crate::sink::CsvSink;
use anyhow::Result;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::{thread::sleep, time::Duration};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

extern "C" fn handle_termination_signal(_: libc::c_int) {
    SHUTDOWN.store(true, Ordering::SeqCst);
}

/// One loop iteration: measure the pid, persist and echo the result.
pub fn tick<Q: CpuQuery>(query: &Q, pid: u32, sink: &mut CsvSink) -> Result<()> {
    let stat = probe::collect(query, pid)?;
    sink.append(&stat)
}

/// Sample pid every `seconds` seconds until a failure or an interrupt.
/// SIGINT/SIGTERM only raise a flag; the loop notices it at the next
/// slice of the inter-sample sleep, flushes and returns cleanly.
pub fn start(pid: u32, folder: &Path, seconds: u64) -> Result<()> {
    let mut sink = CsvSink::open(folder, pid)?;
    log::info!("writing samples for pid {pid} to {}", sink.path().display());

    unsafe {
        libc::signal(libc::SIGINT, handle_termination_signal as usize);
        libc::signal(libc::SIGTERM, handle_termination_signal as usize);
    }

    while !SHUTDOWN.load(Ordering::SeqCst) {
        if let Err(err) = tick(&Ps, pid, &mut sink) {
            let _ = sink.flush();
            return Err(err);
        }
        wait(Duration::from_secs(seconds));
    }

    log::info!("interrupt received, flushing {}", sink.path().display());
    sink.flush()
}

fn wait(period: Duration) {
    let mut remaining = period;
    while !SHUTDOWN.load(Ordering::SeqCst) && !remaining.is_zero() {
        let step = remaining.min(Duration::from_millis(100));
        sleep(step);
        remaining -= step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::fs;

    struct StubQuery;

    impl CpuQuery for StubQuery {
        fn pcpu(&self, pid: u32) -> Result<String> {
            assert_eq!(pid, 7);
            Ok("  42.3\n".to_string())
        }
    }

    #[test]
    fn test_one_tick_end_to_end() {
        let folder = std::env::temp_dir().join(format!("pscpu-tick-{}", std::process::id()));
        let _ = fs::remove_dir_all(&folder);
        fs::create_dir_all(&folder).unwrap();

        let mut sink = CsvSink::open(&folder, 7).unwrap();
        tick(&StubQuery, 7, &mut sink).unwrap();
        sink.flush().unwrap();

        let contents = fs::read_to_string(folder.join("pscpu_7.csv")).unwrap();
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows.len(), 1, "one tick should write exactly one row");

        let (timestamp, percent) = rows[0].split_once(',').unwrap();
        assert!(
            DateTime::parse_from_rfc3339(timestamp).is_ok(),
            "timestamp should be valid rfc3339: {timestamp}"
        );
        assert_eq!(percent, "42.3");

        fs::remove_dir_all(&folder).unwrap();
    }
}
