use clap::Parser;
use log::{debug, LevelFilter};
use snafu::ErrorCompat;

use std::error::Error;
use std::io;

mod args;
mod explorer;

fn main() {
    let args = args::Args::parse();

    if args.verbose {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }
    debug!("args: {:?}", args);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let res = explorer::run_explorer(&args, &mut input, &mut out);
    if let Err(e) = res {
        eprintln!("An error occurred: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("caused by: {}", cause);
            source = cause.source();
        }
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}
