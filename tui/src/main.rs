mod args;
mod cli;
mod files;

use args::Args;
use std::process;

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = simple_logger::init_with_level(args.log_level()) {
        eprintln!("Unable to start the logger: {}", e);
    }
    if let Err(e) = cli::run(&args) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
