use clap::Parser;

use externgen::cli::{self, Cli};

fn main() {
    cli::init_tracing();

    if let Err(err) = cli::run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
