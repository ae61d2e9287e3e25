use std::io::{self, Write};
use std::time::Duration;

use flightstick_core::{InputSource, PollLoop, create_source};

pub fn run(device: &str, frames: u32, pacing: f64) {
    let mut source = match create_source(device) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let pacing = match Duration::try_from_secs_f64(pacing) {
        Ok(pacing) => pacing,
        Err(_) => {
            eprintln!("Error: pacing must be a non-negative number of seconds");
            std::process::exit(1);
        }
    };

    log::info!(
        "flying with '{}' for {frames} frame(s), {:?} between frames",
        source.name(),
        pacing
    );

    let poll = PollLoop::new().frames(frames).pacing(pacing);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = poll.run(source.as_mut(), &mut out) {
        eprintln!("Error writing output: {e}");
        std::process::exit(1);
    }
    let _ = out.flush();
}
