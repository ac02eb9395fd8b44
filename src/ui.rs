use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

pub fn banner() {
    println!("{}", "🍽️  AI-Powered Diet Plan Generator".bold());
    println!(
        "{}",
        "The last plan you'll ever need to finally get in shape!".dimmed()
    );
    println!();
}

pub fn success(message: &str) {
    println!("{}", message.green());
}

pub fn error(message: &str) {
    eprintln!("{}", message.red());
}

/// Spinner shown while the generation call is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Render the generated plan text exactly as returned.
pub fn render_plan(text: &str) {
    println!();
    println!("{}", text);
}
