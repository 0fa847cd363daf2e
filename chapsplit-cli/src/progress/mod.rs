//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Progress reporter for chapter writes
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the progress bar for `total_chapters` chapter files
    pub fn init_chapters(&mut self, total_chapters: u64) {
        if self.quiet || total_chapters == 0 {
            return;
        }

        let pb = ProgressBar::new(total_chapters);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} chapters {msg}")
            .map(|style| style.progress_chars("##-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);

        self.progress_bar = Some(pb);
    }

    /// Update progress for a written chapter file
    pub fn chapter_written(&self, path: &Path) {
        if let Some(pb) = &self.progress_bar {
            let name = path.file_name().unwrap_or(path.as_os_str());
            pb.set_message(format!("Wrote: {}", name.to_string_lossy()));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Stop the bar where it is after a failed write
    pub fn abandon(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.abandon_with_message("partial split");
        }
    }
}
