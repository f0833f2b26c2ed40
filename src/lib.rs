//! Conway's game of life on a finite square grid, with periodic or finite boundaries.
//!
//! [`GridEngine`] is the whole simulation. [`view`] is a terminal front end that drives it.

pub use utils::{isqrt, Pos, PosSet};
mod utils;

pub use error::ConfigError;
mod error;

pub use world::{side_for_capacity, Boundary, Grid, ALIVE, DEAD};
pub mod world;

pub use neighbors::{count_convolution, count_direct, Strategy};
pub mod neighbors;

pub mod rules;

pub use pattern::Pattern;
mod pattern;

pub use sim::GridEngine;
mod sim;

pub use config::Settings;
pub mod config;

pub use view::View;
pub mod view;
