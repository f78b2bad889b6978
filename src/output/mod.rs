//! Output formatters for duplicate scan results.
//!
//! This module provides different output formats for scan results:
//! - Text for human consumption
//! - JSON for automation and scripting
//!
//! # Example
//!
//! ```no_run
//! use dupesieve::duplicates::Grouper;
//! use dupesieve::error::ExitCode;
//! use dupesieve::output::json::JsonOutput;
//! use std::path::Path;
//!
//! let grouper = Grouper::with_defaults();
//! let (groups, summary) = grouper.group_tree(Path::new(".")).unwrap();
//!
//! // Output as JSON to stdout
//! let output = JsonOutput::new(&groups, &summary, ExitCode::Success);
//! println!("{}", output.to_json_pretty().unwrap());
//! ```

pub mod json;
pub mod text;

// Re-export main types
pub use json::JsonOutput;
pub use text::TextOutput;
