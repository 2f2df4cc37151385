//! Utility functions for Food Journal Core

pub mod common;

pub use common::*;
