//! ZIP extraction engine with selection, overwrite policy, timestamp
//! preservation, and POSIX permission restoration.
//!
//! `unarc-zip` is the extraction building block of the unarc toolkit. It
//! drives entries of a ZIP container through an include/exclude selector, a
//! traversal-checked path resolver, and a freshness-based overwrite policy,
//! then materializes them with their recorded modification times and
//! permission modes.
//!
//! # Examples
//!
//! ```no_run
//! use unarc_zip::ExtractOptions;
//! use unarc_zip::extract_zip;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = ExtractOptions::default().with_overwrite(false);
//! let report = extract_zip("dist.zip", "/output/dir", &options)?;
//! println!("extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod config;
mod copy;
pub mod error;
pub mod extraction;
pub mod permissions;
pub mod reader;
pub mod report;
pub mod select;
pub mod test_utils;
pub mod types;

// Re-export main API types
pub use api::extract_zip;
pub use api::extract_zip_subtree;
pub use archive::Unzipper;
pub use config::ExtractOptions;
pub use config::NameEncoding;
pub use error::ExtractError;
pub use error::Result;
pub use extraction::ExtractionEngine;
pub use report::ExtractionReport;

// Re-export types module for easier access
pub use types::DestDir;
pub use types::SafePath;
