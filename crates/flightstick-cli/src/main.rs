//! CLI for flightstick — poll simulated input devices and print the
//! resulting attitude.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flightstick")]
#[command(about = "flightstick — poll simulated input devices and print the resulting attitude")]
#[command(version = flightstick_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll a simulated device and print one pitch/roll block per frame
    Fly {
        /// Device to poll: keyboard, gamecontroller, or null
        #[arg(long, default_value = "keyboard")]
        device: String,

        /// Number of frames to poll before exiting
        #[arg(long, default_value_t = flightstick_core::DEFAULT_FRAMES)]
        frames: u32,

        /// Seconds to pause between frames
        #[arg(long, default_value_t = 1.0)]
        pacing: f64,
    },

    /// List the devices this build can simulate
    Scan,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // A bare invocation flies the default device.
    let command = cli.command.unwrap_or_else(|| Commands::Fly {
        device: "keyboard".to_string(),
        frames: flightstick_core::DEFAULT_FRAMES,
        pacing: 1.0,
    });

    match command {
        Commands::Fly {
            device,
            frames,
            pacing,
        } => commands::fly::run(&device, frames, pacing),
        Commands::Scan => commands::scan::run(),
    }
}
