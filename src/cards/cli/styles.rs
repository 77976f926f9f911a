//! Styles for the cards CLI.
//!
//! Templates refer to semantic style names only (see [`names`]); the colors behind
//! them are defined once here. When stdout is not a terminal the styles are not
//! applied at all, so piped output is plain text.
use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADER: &str = "header";
    pub const RULE: &str = "rule";
    pub const ID: &str = "id";
    pub const OWNER: &str = "owner";
    pub const SUMMARY: &str = "summary";
    pub const STATE_TODO: &str = "state-todo";
    pub const STATE_IN_PROGRESS: &str = "state-in-progress";
    pub const STATE_WAITING: &str = "state-waiting";
    pub const STATE_DONE: &str = "state-done";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
}

pub static CARDS_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((154, 154, 154)));

    Theme::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::RULE, muted.clone())
        .add(names::ID, Style::new().yellow())
        .add(names::OWNER, Style::new().cyan())
        .add(names::SUMMARY, Style::new())
        .add(names::STATE_TODO, Style::new())
        .add(
            names::STATE_IN_PROGRESS,
            Style::new().color256(rgb_to_ansi256((196, 140, 0))).bold(),
        )
        .add(names::STATE_WAITING, muted.clone().italic())
        .add(names::STATE_DONE, Style::new().green())
        .add(names::INFO, muted)
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
});
