use colored::Colorize;
use once_cell::sync::Lazy;

pub static FAIL: Lazy<colored::ColoredString> = Lazy::new(|| "[PSCPU]".red());
