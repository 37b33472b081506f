//! Page progress display for multi-page runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};

/// Tracks generated pages with a single progress bar
///
/// Single-page runs finish too quickly for a bar to help, so it stays hidden.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar for `pages` pages, hidden when `visible` is false or there is only one page
    pub fn new(pages: usize, visible: bool) -> Self {
        let bar = if visible && pages > 1 {
            ProgressBar::new(pages as u64)
        } else {
            ProgressBar::hidden()
        };
        bar.set_style(Self::page_style());

        Self { bar }
    }

    fn page_style() -> ProgressStyle {
        let template =
            format!("[{{elapsed_precise}}] Pages: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}");
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    /// Record one finished page
    pub fn complete_page(&self, page: usize) {
        self.bar.set_message(format!("page {page}"));
        self.bar.inc(1);
    }

    /// Pages recorded so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Whether the bar is drawn at all
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }

    /// Clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
