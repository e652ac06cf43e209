use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use frame_lib::logging::{self, error};
use frame_lib::sheet;
use meanie_frames::{frames, ATLAS_PREFIX};

/// Generate the spinning meanie frames as SVG, ready to paste into the sprite art.
#[derive(Parser)]
#[command(name = "meanie-frames", version, about)]
struct Cli {
    /// Save each frame to DIR/Meanie###.svg instead of printing to stdout
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match sheet::emit(cli.out_dir.as_deref(), ATLAS_PREFIX, frames()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
