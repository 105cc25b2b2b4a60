//! Prints the size of each probed V4L2 structure to stdout.

use std::io;

fn main() {
    // A closed stdout is not a probe failure; report it and exit normally.
    if let Err(err) = run() {
        eprintln!("Error: {err}");
    }
}

fn run() -> v4l2_layout_probe::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    v4l2_layout_probe::write_report(&mut out)
}
