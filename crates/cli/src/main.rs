//! robobench CLI entry point.

fn main() {
    if let Err(e) = robobench_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
