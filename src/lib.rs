//! jotcal - Terminal journal with a month calendar
//!
//! A command-line diary that keeps dated entries in a directory and shows
//! which days of a month have an entry.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JotcalError;
