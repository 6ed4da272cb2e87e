// src/lib.rs
// stdpkgs - Go standard library package index generator

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod output;
pub mod packages;

pub use error::{Result, StdpkgsError};
