//! Progress bar display management and coordination.
//!
//! [`ProgressDisplay`] owns the [`MultiProgress`] the fetch workers draw into.
//! It is shared between workers; `indicatif` synchronizes the bars internally.

use crate::object::ObjectDescriptor;
use crate::progress::StyleOptions;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};

/// Progress display manager that coordinates the main and per-object bars.
pub struct ProgressDisplay {
    /// The multi-progress instance for coordinating multiple progress bars.
    multi: MultiProgress,
    /// The main progress bar, counting finished objects.
    main: ProgressBar,
    /// Style options for progress bars.
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display for `total_objects` objects.
    pub fn new(style_options: StyleOptions, total_objects: usize) -> Self {
        let multi = if style_options.is_enabled() {
            MultiProgress::new()
        } else {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        };

        let main = multi.add(
            style_options
                .main()
                .to_progress_bar(Some(total_objects as u64)),
        );
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Get the main progress bar.
    pub fn main(&self) -> &ProgressBar {
        &self.main
    }

    /// Create a child progress bar for one object, labelled with its key.
    pub fn create_child_progress(&self, object: &ObjectDescriptor) -> ProgressBar {
        let pb = self
            .multi
            .insert_before(&self.main, self.style_options.child().to_progress_bar(object.size));
        pb.set_message(object.key.clone());
        pb
    }

    /// Count one more finished object, whatever its outcome.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Finish a child progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Finish the main bar, clearing it or leaving it based on configuration.
    pub fn finish(&self) {
        if self.style_options.main().clear {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }

    /// Abandon the main bar after a fatal error, leaving it where it stopped.
    pub fn abandon(&self) {
        self.main.abandon();
    }
}
