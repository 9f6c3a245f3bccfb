use std::io;

use colored::Colorize;
use pattern_tour::config::{ColorMode, TourConfig};
use pattern_tour::console::Console;
use pattern_tour::tour::run_tour;

fn main() {
    let config = TourConfig::from_env().unwrap_or_else(|err| {
        eprintln!("{} {}; using defaults", "warning:".yellow(), err);
        TourConfig::default()
    });

    // Keep stderr highlights in line with the console
    if config.color != ColorMode::Auto {
        colored::control::set_override(config.colorize());
    }

    let stdout = io::stdout();
    let mut console = Console::new(stdout.lock(), config.colorize());

    // The tour has no failure path of its own; anything here is the terminal going away
    if let Err(err) = run_tour(&mut console, &config) {
        eprintln!("{} {}", "error:".red(), err);
    }
}
