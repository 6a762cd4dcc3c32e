//! User interface module - terminal output for the changelog run.

pub mod formatter;

pub use formatter::{
    display_error, display_preview, display_sections, display_status, display_success,
    display_warning,
};
