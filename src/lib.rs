pub mod boundary;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod git;
pub mod merge;
pub mod render;
pub mod ui;
pub mod warning;

pub use error::{ChangelogError, Result};
