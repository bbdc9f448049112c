//! Skysweep CLI - sonify two-band sky survey images.
//!
//! Loads the red/blue band pair, runs the sweep synthesis core, writes the
//! WAV, and optionally renders a picture or a sweep movie and plays the
//! result.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use skysweep_core::{
    derive_seed, AcquisitionRequest, ImageSource, SoundParams, SweepRenderer, FILE_TARGET_RANGE,
};

mod cli_args;
mod input;
#[cfg(feature = "playback")]
mod playback;
mod progress;
mod wav;

use cli_args::Cli;
use input::FileImageSource;
use progress::ConsoleProgress;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    println!(
        "{} {}",
        "Loading band data for".cyan().bold(),
        cli.object
    );
    let source = FileImageSource::new(cli.red.clone(), cli.blue.clone(), !cli.no_median_subtract);
    let request = AcquisitionRequest {
        object: cli.object.clone(),
        fov_arcmin: cli.angsize,
        pixels: cli.imagesize,
    };
    let image = source.acquire(&request)?;

    if let Some(picture_path) = &cli.picture {
        println!(
            "{} {}",
            "Writing band picture to".cyan().bold(),
            picture_path.display()
        );
        skysweep_viz::render_picture(&image, picture_path)
            .with_context(|| format!("cannot render picture '{}'", picture_path.display()))?;
    }

    let params = SoundParams {
        sample_rate: cli.samplerate,
        duration_seconds: cli.soundlen,
        freq_min_hz: cli.lowfreq,
        freq_max_hz: cli.highfreq,
        flip_freq: cli.flipfreq,
        flip_direction: false, // set by the orchestrator from the token
        min_subtract: cli.minsubtract,
    };
    let seed = cli.seed.unwrap_or_else(|| derive_seed(&cli.object));

    println!("{}", "Creating sound".cyan().bold());
    let rendered = SweepRenderer::new(&image, cli.direction, params, seed)
        .render(&mut ConsoleProgress)?;

    println!(
        "{} {}",
        "Writing sound to".cyan().bold(),
        cli.outfile.display()
    );
    let encoded = rendered.encode(FILE_TARGET_RANGE)?;
    wav::write_wav(&encoded, &cli.outfile)?;

    if let Some(movie_path) = &cli.movie {
        println!(
            "{} {}",
            "Writing sweep movie to".cyan().bold(),
            movie_path.display()
        );
        skysweep_viz::render_movie(&image, cli.direction, cli.soundlen, movie_path)
            .with_context(|| format!("cannot render movie '{}'", movie_path.display()))?;
    }

    if cli.play {
        play_rendered(&rendered)?;
    }

    println!("{}", "Finished".green().bold());
    Ok(())
}

#[cfg(feature = "playback")]
fn play_rendered(rendered: &skysweep_core::RenderedSweep) -> Result<()> {
    println!("{}", "Playing sound".cyan().bold());
    let encoded = rendered.encode(skysweep_core::PLAYBACK_TARGET_RANGE)?;
    playback::play(&encoded)
}

#[cfg(not(feature = "playback"))]
fn play_rendered(_rendered: &skysweep_core::RenderedSweep) -> Result<()> {
    anyhow::bail!("playback support is not compiled in; rebuild with --features playback")
}
