//! Terminal rendering: spinner, status lines, and the job card grid.

pub mod cards;
pub mod icons;

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::ui::icons::{CHECK, CROSS};

/// Start a spinner with a 100 ms tick. Callers are expected to
/// `finish_and_clear` it once the surrounding network call resolves; with
/// no request timeout configured, a hung request keeps it spinning.
pub fn spinner(msg: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("spinner template is a valid static string"),
    );
    bar.set_message(msg.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

pub fn print_success(msg: &str) {
    println!("{}{}", CHECK, style(msg).green());
}

pub fn print_error(msg: &str) {
    eprintln!("{}{}", CROSS, style(msg).red());
}
