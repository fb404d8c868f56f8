//! Progress bar styling and configuration options.
//!
//! Two kinds of bars are drawn while fetching: the main bar counts finished
//! objects, and one child bar per in-flight object counts bytes.
//!
//! ```rust
//! use bucket_dl::progress::{ProgressBarOpts, StyleOptions};
//!
//! // Keep the object counter, hide per-object bars.
//! let style = StyleOptions::new(ProgressBarOpts::objects(), ProgressBarOpts::hidden());
//! assert!(style.is_enabled());
//! ```

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Define the fetcher style options.
///
/// By default the main bar stays on screen when the run completes and the
/// child bars are cleared as each object finishes.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Style options for the main progress bar.
    pub(crate) main: ProgressBarOpts,
    /// Style options for the per-object progress bars.
    pub(crate) child: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            main: ProgressBarOpts::objects(),
            child: ProgressBarOpts::bytes(),
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(main: ProgressBarOpts, child: ProgressBarOpts) -> Self {
        Self { main, child }
    }

    /// Style options with every bar hidden.
    pub fn hidden() -> Self {
        Self::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden())
    }

    /// Return `false` if neither the main nor the child bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.main.enabled || self.child.enabled
    }

    /// Get a reference to the main progress bar options.
    pub fn main(&self) -> &ProgressBarOpts {
        &self.main
    }

    /// Get a reference to the child progress bar options.
    pub fn child(&self) -> &ProgressBarOpts {
        &self.child
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set, at least "filled", "current" and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Finished objects over the total.
    ///
    /// `████████████████████▌              57/112 objects (50%) eta 00:03:12`
    pub const TEMPLATE_OBJECTS: &'static str =
        "{bar:40.blue} {pos:>}/{len} objects ({percent}%) eta {eta_precise:.blue}";
    /// Bytes of a single object, prefixed by its key.
    ///
    /// `clips/a.mp4  ━━━━━━━━╾───── 21.3 MiB/40.0 MiB 8.1 MiB/s`
    pub const TEMPLATE_BYTES: &'static str =
        "{msg:30!} {bar:30.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾╴─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Options for the object counter; kept on screen once done.
    pub fn objects() -> Self {
        Self {
            template: Some(Self::TEMPLATE_OBJECTS.into()),
            progress_chars: Some(Self::CHARS_FINE.into()),
            enabled: true,
            clear: false,
        }
    }

    /// Options for a per-object byte counter; cleared once done.
    pub fn bytes() -> Self {
        Self {
            template: Some(Self::TEMPLATE_BYTES.into()),
            progress_chars: Some(Self::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to the default bar.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let mut style = match &self.template {
            Some(template) => ProgressStyle::default_bar()
                .template(template)
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
            None => ProgressStyle::default_bar(),
        };
        if let Some(progress_chars) = &self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    ///
    /// `len` is `None` when the total is unknown.
    pub fn to_progress_bar(&self, len: Option<u64>) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::with_draw_target(len, ProgressDrawTarget::hidden());
        }

        let pb = match len {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::no_length(),
        };
        pb.with_style(self.to_progress_style())
    }
}
