use clap::Parser;
use clap_verbosity_flag::Verbosity;
use macros_rs::crashln;
use pscpu::helpers;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Monitor cpu usage in % of a process to a csv file")]
#[command(after_help = "Each line of the csv file will be in the format:\n\n\
    \tRFC3339_TIMESTAMP,CPU_USAGE\n\n\
    For example: 2015-01-05T14:44:05+01:00,66.6")]
struct Cli {
    #[arg(short, long, help = "pid of the process to monitor", value_parser = clap::value_parser!(u32).range(1..))]
    pid: u32,
    #[arg(short, long, default_value = ".", help = "output folder of the csv file")]
    folder: PathBuf,
    #[arg(short, long, default_value_t = 5, help = "collect stats of cpu usage every s seconds")]
    seconds: u64,
    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new().filter_level(cli.verbose.log_level_filter()).init();

    if let Err(err) = pscpu::monitor::start(cli.pid, &cli.folder, cli.seconds) {
        crashln!("{} {err:#}", *helpers::FAIL);
    }
}
