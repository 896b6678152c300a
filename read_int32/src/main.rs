use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

/// Time a sequential native-endian int32 read pass over a 40MB buffer
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let _cli = Cli::parse();

    match xdr_speed::probe() {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Probe failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
