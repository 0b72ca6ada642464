//! Sensor Array - load numeric sensor CSV data
//!
//! Reads a CSV file, drops its header row and parses every remaining field as
//! a floating-point value.

pub mod cli;
pub mod data;
pub mod report;
pub mod stats;
