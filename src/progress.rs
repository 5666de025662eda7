//! Progress bar display for installation runs

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display over the components of a plan
pub struct ProgressDisplay {
    component_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total component count
    pub fn new(total_components: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let component_pb = ProgressBar::new(total_components);
        component_pb.set_style(style);

        Self { component_pb }
    }

    /// Show the component currently being installed
    pub fn update_component(&self, name: &str) {
        self.component_pb.set_message(name.to_string());
    }

    /// Increment component progress
    pub fn inc(&self) {
        self.component_pb.inc(1);
    }

    /// Finish and clear the bar so the summary prints cleanly
    pub fn finish(&self) {
        self.component_pb.finish_and_clear();
    }
}
