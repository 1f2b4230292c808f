//! tierspell CLI binary.

use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use tierspell::cli::args::*;
use tierspell::cli::commands::*;

fn main() {
    let args = SpellArgs::parse();

    // RUST_LOG, when set, refines the level chosen by -q/-v.
    Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
