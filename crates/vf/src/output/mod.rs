//! Output formatting utilities for the vf CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//!
//! - [`check`] - Expression check output
//! - [`records`] - Filter result output
//! - [`helpers`] - Common formatting utilities (truncation, labels, warnings)

mod check;
pub mod helpers;
mod records;

pub use check::{format_check_json, format_check_table};
pub use records::{format_filter_json, format_filter_table, format_filter_warnings};
