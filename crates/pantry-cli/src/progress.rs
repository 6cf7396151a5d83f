use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::ui;

/// Per-recipe progress on stderr. Hidden when progress is disabled, so
/// callers never branch on it.
pub struct Progress {
    bar: ProgressBar,
}

fn recipe_template() -> &'static str {
    match ui::prefs().term_width {
        Some(cols) if cols >= 100 => "{prefix:.bold} {bar:40.cyan/blue} {pos}/{len} {wide_msg}",
        _ => "{prefix:.bold} {pos}/{len} {wide_msg}",
    }
}

fn visible() -> bool {
    ui::prefs().progress
}

impl Progress {
    /// Spinner for work of unknown length, such as a directory walk.
    #[must_use]
    pub fn scanning(directory: &str) -> Self {
        if !visible() {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} scanning {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(directory.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Bar over `total` recipes, labelled with what is being done to them.
    #[must_use]
    pub fn recipes(total: usize, action: &'static str) -> Self {
        if !visible() {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::with_draw_target(
            Some(u64::try_from(total).unwrap_or(u64::MAX)),
            ProgressDrawTarget::stderr(),
        );
        bar.set_style(
            ProgressStyle::with_template(recipe_template())
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_prefix(action);
        Self { bar }
    }

    /// Count one recipe as done.
    pub fn advance(&self, recipe: &str) {
        self.bar.set_message(recipe.to_string());
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
