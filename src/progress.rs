//! Terminal progress reporting for the grouping pipeline.
//!
//! The pipeline reports its phases through the [`ProgressCallback`] trait;
//! [`Progress`] is the indicatif-backed implementation the CLI wires in.
//! Library users can supply their own callback or none at all.

use std::sync::Mutex;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

/// Receiver for pipeline phase updates.
///
/// Phases arrive by name: `"walking"`, `"reading"`, `"grouping"`. The
/// callback may be invoked from multiple rayon workers at once during the
/// read phase, so implementations must be `Send + Sync`.
pub trait ProgressCallback: Send + Sync {
    /// A phase began; `total` is the item count, or 0 when unknown.
    fn on_phase_start(&self, phase: &str, total: usize);

    /// An item within the current phase is being processed.
    fn on_progress(&self, current: usize, path: &str);

    /// An item finished, contributing `bytes` of content.
    fn on_item_completed(&self, _bytes: u64) {}

    /// The named phase finished.
    fn on_phase_end(&self, phase: &str);

    /// Free-form status text for the active phase.
    fn on_message(&self, _message: &str) {}
}

/// Indicatif progress display.
///
/// One bar per active phase, stacked through a [`MultiProgress`]: a
/// spinner while walking, counting bars for reading and grouping. In
/// quiet mode every call is a no-op.
pub struct Progress {
    multi: MultiProgress,
    // (phase name, bar), most recent phase last
    bars: Mutex<Vec<(String, ProgressBar)>>,
    quiet: bool,
}

impl Progress {
    /// Create a reporter; `quiet` suppresses all bars.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(Vec::new()),
            quiet,
        }
    }

    fn bar_for(&self, phase: &str, total: usize) -> ProgressBar {
        if phase == "walking" {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} {msg} [{elapsed_precise}] {pos} files",
                )
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Duration::from_millis(100));
            pb.set_message("Walking directory");
            return pb;
        }

        let color = if phase == "grouping" { "green" } else { "cyan" };
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::with_template(&format!(
                "[{{elapsed_precise}}] [{{bar:40.{color}/blue}}] {{pos}}/{{len}} ({{percent}}%) {{msg}}"
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█>-"),
        );
        pb.set_message(match phase {
            "reading" => "Reading files".to_string(),
            "grouping" => "Grouping".to_string(),
            other => other.to_string(),
        });
        pb
    }
}

impl ProgressCallback for Progress {
    fn on_phase_start(&self, phase: &str, total: usize) {
        if self.quiet {
            return;
        }
        let pb = self.multi.add(self.bar_for(phase, total));
        self.bars
            .lock()
            .unwrap()
            .push((phase.to_string(), pb));
    }

    fn on_progress(&self, current: usize, path: &str) {
        if self.quiet {
            return;
        }
        if let Some((_, pb)) = self.bars.lock().unwrap().last() {
            pb.set_position(current as u64);
            pb.set_message(truncate_path(path, 30));
        }
    }

    fn on_phase_end(&self, phase: &str) {
        if self.quiet {
            return;
        }
        let mut bars = self.bars.lock().unwrap();
        if let Some(idx) = bars.iter().position(|(name, _)| name == phase) {
            let (_, pb) = bars.remove(idx);
            pb.finish_with_message(format!("{phase} complete"));
        }
    }

    fn on_message(&self, message: &str) {
        if self.quiet {
            return;
        }
        if let Some((_, pb)) = self.bars.lock().unwrap().last() {
            pb.set_message(message.to_string());
        }
    }
}

/// Shorten a path so bar messages stay on one line.
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        return path.to_string();
    }

    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if file_name.len() + 4 > max_len {
        let keep = max_len.saturating_sub(3);
        let tail: String = file_name
            .chars()
            .rev()
            .take(keep)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        return format!("...{tail}");
    }

    format!(".../{file_name}")
}
