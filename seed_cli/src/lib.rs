//! Command line front end for the `bracket_seeds` library.

pub mod commands;
pub mod config;
pub mod logging;
