//! Binary entry point for `fix-poetry-packages`.

use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = poetry_layout::scan::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
