//! Skysweep visualization
//!
//! Optional side pipelines that consume the synthesis core's inputs and
//! outputs: a still false-color picture of the two survey bands, and an
//! animated movie of the sweep indicator synchronized to the sound's
//! duration. Neither feeds back into synthesis.

pub mod composite;
pub mod error;
pub mod movie;
pub mod picture;

pub use composite::{false_color, RgbBuffer};
pub use error::VizError;
pub use movie::{render_movie, MOVIE_FPS};
pub use picture::render_picture;
