//! Helper functions for page rendering
//!
//! Pure functions: date formatting, reading-time estimation, HTML
//! escaping and URL building.

mod date;
mod html;
mod reading_time;
mod url;

pub use date::*;
pub use html::*;
pub use reading_time::*;
pub use url::*;
