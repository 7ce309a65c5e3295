use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;

pub fn banner(title: &str) {
    let line = "═".repeat(50);
    println!();
    println!("{}", line.style(theme().dim.clone()));
    println!("{} {}", Icons::PLANE, title.style(theme().header.clone()));
    println!("{}", line.style(theme().dim.clone()));
}

pub fn section(title: &str) {
    println!();
    println!("━ {} ━", title.style(theme().header.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().error.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn info(label: &str, value: &str) {
    println!(
        "{} {}: {}",
        Icons::INFO,
        label.style(theme().dim.clone()),
        value
    );
}
