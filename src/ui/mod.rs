//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! Status, warning and error messages go through this module so quiet mode
//! is honored consistently.

pub mod output;
