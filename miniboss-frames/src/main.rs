use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use frame_lib::logging::{self, error};
use frame_lib::sheet;
use miniboss_frames::{frames, ATLAS_PREFIX};

/// Generate the chasing miniboss light frames as SVG, ready to paste over the hull art.
#[derive(Parser)]
#[command(name = "miniboss-frames", version, about)]
struct Cli {
    /// Save each frame to DIR/MiniBoss###.svg instead of printing to stdout
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
