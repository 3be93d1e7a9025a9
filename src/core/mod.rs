//! Core utilities for the Premier Zone client
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `filters`: search filter criteria and their query-string form
//! - `http`: default request headers

pub mod filters;
pub mod http;

// Re-export commonly used items for convenience
pub use filters::{FilterCriteria, FilterField};
pub use http::{build_header_map, parse_header_arg};
