//! Progress module containing progress bar functionality.
//!
//! - `style` - Progress bar styling options and templates
//! - `display` - Coordination of the main and per-object bars
//! - `writer` - [`ProgressWriter`], counting bytes as they reach the disk
//!
//! ```rust
//! use bucket_dl::fetcher::FetcherBuilder;
//! use bucket_dl::progress::StyleOptions;
//!
//! let fetcher = FetcherBuilder::new()
//!     .style_options(StyleOptions::hidden())
//!     .build();
//! ```

pub(crate) mod display;
pub(crate) mod style;
pub(crate) mod writer;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
pub use writer::ProgressWriter;
