use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(resolve(
        flags,
        std::io::stdout().is_terminal(),
        std::io::stderr().is_terminal(),
    ));
}

fn resolve(flags: &GlobalFlags, stdout_tty: bool, stderr_tty: bool) -> UiPrefs {
    let table_color = stdout_tty
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    let progress = stderr_tty && !flags.quiet;

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    UiPrefs {
        table_color,
        progress,
        term_width,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(format: OutputFormat, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet,
            verbose: false,
            project: None,
        }
    }

    #[test]
    fn quiet_disables_progress() {
        let prefs = resolve(&flags(OutputFormat::Table, true), true, true);
        assert!(!prefs.progress);
        assert!(!prefs.table_color);
    }

    #[test]
    fn progress_needs_a_terminal() {
        assert!(!resolve(&flags(OutputFormat::Json, false), true, false).progress);
        assert!(resolve(&flags(OutputFormat::Json, false), false, true).progress);
    }
}
