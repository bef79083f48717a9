//! Display functions for command results

use super::formatters::{
    LOSE_MESSAGE, WIN_MESSAGE, create_progress_bar, format_duration, gallows, share_text, spaced,
};
use crate::analysis::DifficultyReport;
use crate::core::{GuessKind, GuessSession};
use crate::game::{FigurePart, GuessReport, RoundSummary};
use crate::profile::{PreferenceKey, Settings, StatsSnapshot};
use crate::wordlists::WordCatalog;
use colored::Colorize;

/// Print the board: gallows, revealed word and wrong letters
pub fn print_board(session: &GuessSession) {
    println!();
    for line in gallows(session.attempts_used()) {
        println!("{}", line.bright_black());
    }
    println!(
        "\n  {}",
        spaced(&session.revealed_display()).bright_yellow().bold()
    );

    let wrong: Vec<String> = session.wrong_letters().map(String::from).collect();
    println!(
        "\n  Attempts left: {}   Wrong: {}",
        session.remaining_attempts().to_string().cyan(),
        if wrong.is_empty() {
            "-".to_string()
        } else {
            wrong.join(" ").red().to_string()
        }
    );
}

/// Print one line of feedback for a guess
pub fn print_guess_feedback(report: &GuessReport) {
    let letter = report.outcome.letter;
    match report.outcome.kind {
        GuessKind::Correct => println!("  {} {letter}", "✓".green().bold()),
        GuessKind::Wrong => {
            let part = report
                .outcome
                .figure_part
                .and_then(FigurePart::from_index)
                .map_or(String::new(), |p| format!(", {} drawn", p.label()));
            println!(
                "  {} {letter} ({} left{part})",
                "✗".red().bold(),
                report.remaining_attempts
            );
        }
        GuessKind::Repeated => println!("  {} {letter} already guessed", "•".yellow()),
        GuessKind::Ignored => {}
    }
}

/// Print the end-of-round banner and share text
pub fn print_round_summary(summary: &RoundSummary) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if summary.won() {
        println!("  {}", WIN_MESSAGE.bright_green().bold());
    } else {
        println!("  {}", LOSE_MESSAGE.bright_red().bold());
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!("  Word:     {}", summary.word.bright_yellow().bold());
    if let Some(category) = &summary.category {
        println!("  Category: {category}");
    }
    println!(
        "  Attempts: {}/{}",
        summary.attempts_used, summary.max_attempts
    );
    println!("  Time:     {}", format_duration(summary.elapsed));

    println!("\n{}", share_text(summary).dimmed());
}

/// Print statistics
pub fn print_stats(stats: &StatsSnapshot) {
    println!("\n📊 {}", "Statistics".bright_cyan().bold());
    println!("  Games played:   {}", stats.games_played);
    println!(
        "  Win rate:       {} {}",
        create_progress_bar(f64::from(stats.win_percentage), 100.0, 20).green(),
        format!("{}%", stats.win_percentage).bright_yellow()
    );
    println!("  Games won:      {}", stats.games_won);
    println!("  Current streak: {}", stats.current_streak);
    println!("  Max streak:     {}", stats.max_streak);
    println!(
        "  Best time:      {}",
        stats
            .best_time
            .map_or_else(|| "-".to_string(), format_duration)
    );
    println!(
        "  Average time:   {}",
        stats
            .average_time
            .map_or_else(|| "-".to_string(), format_duration)
    );
}

/// Print every preference
pub fn print_settings(settings: &Settings) {
    println!("\n⚙️  {}", "Settings".bright_cyan().bold());
    for key in PreferenceKey::ALL {
        let value = if settings.get(key) {
            "on".green()
        } else {
            "off".red()
        };
        println!("  {:<14} {value}", key.as_str());
    }
}

/// Print categories with word counts
pub fn print_categories(catalog: &WordCatalog) {
    println!("\n📚 {}", "Categories".bright_cyan().bold());
    for category in catalog.category_entries() {
        println!(
            "  {:<28} {:>4} words",
            category.name(),
            category.words().len()
        );
    }
    println!("  {:<28} {:>4} words", "Total", catalog.len());
}

/// Print a difficulty report
pub fn print_difficulty_report(report: &DifficultyReport) {
    println!("\n{}", "═".repeat(70));
    println!(" Difficulty Report ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Words played:   {}", report.total());
    println!(
        "  Solved:         {} {}",
        report.solved(),
        format!("({:.1}%)", report.win_rate()).green()
    );
    println!(
        "  Average wrong:  {}",
        format!("{:.2}", report.average_wrong())
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:     {:.2}s",
        report.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Wrong Guess Distribution".bright_cyan().bold());
    let distribution = report.wrong_distribution();
    let max_count = distribution.iter().copied().max().unwrap_or(1).max(1);
    for (wrong, &count) in distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {wrong} wrong: {} {count:4}", bar.green());
    }

    println!("\n📚 {}", "By Category".bright_cyan().bold());
    for summary in report.by_category() {
        let rate = summary.solved as f64 / summary.words as f64 * 100.0;
        println!(
            "  {:<28} {:>3} words  {:>5.1}% solved  {:.2} wrong",
            summary.category, summary.words, rate, summary.average_wrong
        );
    }

    let hardest = report.hardest(5);
    if !hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for word in hardest {
            let marker = if word.won { "" } else { " (lost)" };
            println!(
                "  {} ({} wrong){}",
                word.word.yellow(),
                word.wrong_guesses,
                marker.red()
            );
        }
    }
}
