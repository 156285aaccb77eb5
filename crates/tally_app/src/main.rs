use std::io;

use tally_app::{logging, run, RunOptions};

fn main() {
    let options = RunOptions::default();
    logging::initialize(&options.logging);

    let stdout = io::stdout();
    let _ = run(&options, &mut stdout.lock());
}
