//! CLI command implementations
//!
//! Each submodule implements one subcommand and returns the rendered
//! output, leaving printing to `main`.

pub mod book;
pub mod implied_vol;
pub mod monte_carlo;
pub mod paths;
pub mod price;
pub mod var;
