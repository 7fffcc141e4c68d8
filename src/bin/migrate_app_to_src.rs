//! Binary entry point for `migrate-app-to-src`.

use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = poetry_layout::migrate::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
