/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const SAFFRON: &str = "\x1b[38;5;208m";

/// Streak color:
/// 0 → grey
/// 1..=6 → yellow
/// 7+ → saffron (a full week)
pub fn color_for_streak(streak: u32) -> &'static str {
    match streak {
        0 => GREY,
        1..=6 => YELLOW,
        _ => SAFFRON,
    }
}

/// Done/pending marker, green or grey.
pub fn check_mark(done: bool) -> String {
    if done {
        format!("{GREEN}✔{RESET}")
    } else {
        format!("{GREY}·{RESET}")
    }
}
