//! CLI argument definitions.
//!
//! All `#[derive(Parser)]` types live here, keeping `main.rs` focused on
//! the run itself.

use std::path::PathBuf;

use clap::Parser;
use skysweep_core::SweepDirection;

/// Skysweep - turn two-band sky survey images into sound
#[derive(Parser, Debug)]
#[command(name = "skysweep")]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// The astronomical object name or coordinates
    pub object: String,

    /// The angular size of the field in arcminutes
    pub angsize: f64,

    /// The output WAV file
    pub outfile: PathBuf,

    /// The duration of the sound in seconds
    pub soundlen: f64,

    /// The sweep direction: left-to-right, right-to-left, top-to-bottom,
    /// bottom-to-top, clockwise, anticlockwise
    #[arg(short, long, default_value = "lr")]
    pub direction: SweepDirection,

    /// The sample rate in Hz
    #[arg(short, long, default_value_t = 44100)]
    pub samplerate: u32,

    /// The low frequency limit in Hz
    #[arg(long, default_value_t = 30.0)]
    pub lowfreq: f64,

    /// The high frequency limit in Hz
    #[arg(long, default_value_t = 2000.0)]
    pub highfreq: f64,

    /// Flip the frequency range order
    #[arg(long)]
    pub flipfreq: bool,

    /// Subtract the lowest value from each slice envelope
    #[arg(long)]
    pub minsubtract: bool,

    /// The image size in pixels the bands are resampled to
    #[arg(long, default_value_t = 1024)]
    pub imagesize: u32,

    /// Red band image file (left stereo channel)
    #[arg(long)]
    pub red: PathBuf,

    /// Blue band image file (right stereo channel); defaults to the red band
    #[arg(long)]
    pub blue: Option<PathBuf>,

    /// Skip the per-band median subtraction applied after loading
    #[arg(long)]
    pub no_median_subtract: bool,

    /// Make a picture of the band data and store it in the given file
    #[arg(long)]
    pub picture: Option<PathBuf>,

    /// Make a movie of the sweep and store it in the given file
    #[arg(long)]
    pub movie: Option<PathBuf>,

    /// Seed for the per-slice phases; defaults to a hash of the object name
    #[arg(long)]
    pub seed: Option<u32>,

    /// Play the sound when finished (requires the `playback` feature)
    #[arg(short, long)]
    pub play: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_invocation_parses() {
        let cli = Cli::try_parse_from([
            "skysweep", "M31", "30", "out.wav", "10", "--red", "red.png",
        ])
        .unwrap();
        assert_eq!(cli.object, "M31");
        assert_eq!(cli.direction, SweepDirection::LeftRight);
        assert_eq!(cli.samplerate, 44100);
        assert!(cli.blue.is_none());
    }

    #[test]
    fn test_direction_token_parses_through_clap() {
        let cli = Cli::try_parse_from([
            "skysweep", "M31", "30", "out.wav", "10", "--red", "r.png", "-d", "aclk",
        ])
        .unwrap();
        assert_eq!(cli.direction, SweepDirection::Anticlockwise);
    }

    #[test]
    fn test_bad_direction_token_is_rejected() {
        let result = Cli::try_parse_from([
            "skysweep", "M31", "30", "out.wav", "10", "--red", "r.png", "-d", "zig",
        ]);
        assert!(result.is_err());
    }
}
