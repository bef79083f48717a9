//! Formatting utilities for terminal output

use crate::game::RoundSummary;
use std::time::Duration;

/// Message shown when a round is won
pub const WIN_MESSAGE: &str = "Շնորհավոր, դուք հաղթեցիք!";

/// Message shown when a round is lost
pub const LOSE_MESSAGE: &str = "Դուք պարտուեցաք!";

const GALLOWS_TOP: [&str; 2] = ["  +---+", "  |   |"];
const GALLOWS_BASE: &str = "=========";

/// Gallows with the first `parts` figure parts drawn (capped at six)
///
/// Parts are drawn head, body, left arm, right arm, left leg, right leg.
#[must_use]
pub fn gallows(parts: u8) -> Vec<String> {
    let drawn = |n: u8, s: &'static str| if parts >= n { s } else { " " };

    let head = drawn(1, "O");
    let body = drawn(2, "|");
    let left_arm = drawn(3, "/");
    let right_arm = drawn(4, "\\");
    let left_leg = drawn(5, "/");
    let right_leg = drawn(6, "\\");

    let mut lines: Vec<String> = GALLOWS_TOP.iter().map(ToString::to_string).collect();
    lines.push(format!("  {head}   |"));
    lines.push(format!(" {left_arm}{body}{right_arm}  |"));
    lines.push(format!(" {left_leg} {right_leg}  |"));
    lines.push("      |".to_string());
    lines.push(GALLOWS_BASE.to_string());
    lines
}

/// Format elapsed time as `m:ss`
#[must_use]
pub fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Spread letters out so blanks are countable: `կ _ _ ո ւ`
#[must_use]
pub fn spaced(display: &str) -> String {
    let mut out = String::with_capacity(display.len() * 2);
    for (i, c) in display.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// End-of-round text for sharing
#[must_use]
pub fn share_text(summary: &RoundSummary) -> String {
    let emojis = if summary.won() { "🎉 🏆" } else { "😔" };
    format!(
        "Գախաղան {emojis}\n\nԲառը՝ {}\nՓորձեր՝ {}/{}\nԺամանակ՝ {}\n\n#Գախաղան #WesternArmenian",
        summary.word,
        summary.attempts_used,
        summary.max_attempts,
        format_duration(summary.elapsed),
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionStatus;
    use crate::game::GameMode;

    fn summary(status: SessionStatus) -> RoundSummary {
        RoundSummary {
            word: "կատու".to_string(),
            mode: GameMode::Practice,
            category: None,
            status,
            elapsed: Duration::from_secs(75),
            attempts_used: 2,
            max_attempts: 6,
        }
    }

    #[test]
    fn empty_gallows() {
        let art = gallows(0).join("\n");
        assert!(!art.contains('O'));
        assert!(!art.contains('/'));
        assert_eq!(gallows(0).len(), 7);
    }

    #[test]
    fn full_gallows() {
        let lines = gallows(6);
        assert_eq!(lines[2], "  O   |");
        assert_eq!(lines[3], " /|\\  |");
        assert_eq!(lines[4], " / \\  |");
        assert_eq!(gallows(9), lines);
    }

    #[test]
    fn parts_drawn_in_order() {
        let lines = gallows(3);
        assert_eq!(lines[3], " /|   |");
        assert_eq!(lines[4], "      |");
    }

    #[test]
    fn duration_format() {
        assert_eq!(format_duration(Duration::ZERO), "0:00");
        assert_eq!(format_duration(Duration::from_secs(75)), "1:15");
        assert_eq!(format_duration(Duration::from_secs(600)), "10:00");
    }

    #[test]
    fn spaced_letters() {
        assert_eq!(spaced("կ__"), "կ _ _");
        assert_eq!(spaced(""), "");
    }

    #[test]
    fn share_text_for_win() {
        let text = share_text(&summary(SessionStatus::Won));
        assert_eq!(
            text,
            "Գախաղան 🎉 🏆\n\nԲառը՝ կատու\nՓորձեր՝ 2/6\nԺամանակ՝ 1:15\n\n#Գախաղան #WesternArmenian"
        );
    }

    #[test]
    fn share_text_for_loss() {
        let text = share_text(&summary(SessionStatus::Lost));
        assert!(text.starts_with("Գախաղան 😔\n"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
