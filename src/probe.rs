use crate::stat::CpuStat;
use anyhow::{bail, Context, Result};
use chrono::Local;
use std::process::Command;

/// Source of the raw cpu percentage text for a pid. The production
/// implementation shells out to ps; tests substitute a stub.
pub trait CpuQuery {
    fn pcpu(&self, pid: u32) -> Result<String>;
}

/// Queries ps for the %cpu field of a single pid, no header.
pub struct Ps;

impl CpuQuery for Ps {
    fn pcpu(&self, pid: u32) -> Result<String> {
        let output = Command::new("/bin/ps")
            .args(["-p", &pid.to_string(), "-o", "%cpu="])
            .output()
            .with_context(|| format!("error while launching ps, are you sure PID {pid} is active?"))?;

        if !output.status.success() {
            bail!("ps exited with {}, are you sure PID {pid} is active?", output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Take one measurement for the given pid. The timestamp is recorded
/// before the query is issued, so query latency never skews it.
pub fn collect<Q: CpuQuery>(query: &Q, pid: u32) -> Result<CpuStat> {
    let time = Local::now().fixed_offset();
    let raw = query.pcpu(pid)?;
    let pcpu = parse_percent(&raw).with_context(|| format!("unexpected ps output {:?}", raw.trim()))?;

    Ok(CpuStat { time, pcpu })
}

// ps output in some locales carries a decimal comma; only the first one
// is rewritten, thousands separators are not handled.
fn parse_percent(raw: &str) -> Result<f64, std::num::ParseFloatError> {
    raw.trim().replacen(',', ".", 1).parse()
}
