//! Display functions for command results

use super::formatters::{create_progress_bar, percent, render_board, word_with_length};
use crate::commands::{CheckResult, MovesResult, SelfPlayResult};
use colored::Colorize;

/// Print the moves available on a board
pub fn print_moves_result(result: &MovesResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "AVAILABLE MOVES".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("\n{}", render_board(&result.board, &[], None));

    if !result.excluded.is_empty() {
        println!("Already played: {}", result.excluded.join(", ").bright_black());
    }

    if result.candidates.is_empty() {
        println!("{}", "No moves available".yellow().bold());
        return;
    }

    println!(
        "\n{} moves from {} patterns ({:.1} ms)\n",
        result.candidates.len().to_string().bright_yellow().bold(),
        result.patterns,
        result.duration.as_secs_f64() * 1000.0
    );

    for (i, candidate) in result.candidates.iter().enumerate() {
        let placement = candidate
            .placement(&result.board)
            .map(|(coord, letter)| format!("{letter} → {coord}"))
            .unwrap_or_default();
        println!(
            "{:>4}. {:<16} {}",
            i + 1,
            word_with_length(candidate.word()).bright_yellow(),
            placement.green()
        );

        if verbose {
            let path: Vec<String> = candidate.coords().iter().map(ToString::to_string).collect();
            println!("      {}", path.join(" → ").bright_black());
        }
    }
}

/// Print the verdict on a human move
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {}",
        result.spelled.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Ok(played) => {
            let entered = played.placement(&result.board).map(|(coord, _)| coord);
            println!("\n{}", render_board(&result.board, played.coords(), entered));
            println!(
                "{}",
                format!("✅ {} is a valid move", word_with_length(played.word()))
                    .green()
                    .bold()
            );
        }
        Err(e) => {
            println!("\n{}", render_board(&result.board, &[], None));
            println!("{}", format!("❌ {e}").red().bold());
        }
    }
}

/// Print self-play statistics
pub fn print_selfplay_result(result: &SelfPlayResult, names: [&str; 2], verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SELF-PLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let games = result.games.len();
    let filled = result.games.iter().filter(|g| g.filled).count();

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Games played:     {games}");
    println!("   Boards filled:    {filled} ({:.1}%)", percent(filled, games));
    println!(
        "   Words per game:   {}",
        format!("{:.2}", result.average_words).bright_yellow().bold()
    );
    println!("   Total words:      {}", result.total_words);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Searches/second:  {:.1}", result.calls_per_second);

    println!("\n🏆 {}", "Outcomes:".bright_cyan().bold());
    for (player, name) in names.iter().enumerate() {
        let wins = result.wins[player];
        let letters: usize = result.games.iter().map(|g| g.letters[player]).sum();
        let pct = percent(wins, games);
        println!(
            "   {} {:<8} {} {wins:4} wins ({pct:5.1}%), {letters} letters",
            player + 1,
            name,
            create_progress_bar(pct, 100.0, 30).green()
        );
    }
    println!(
        "     {:<8} {} {:4}",
        "draws",
        create_progress_bar(percent(result.draws, games), 100.0, 30).bright_black(),
        result.draws
    );

    if verbose {
        println!("\n📜 {}", "Games:".bright_cyan().bold());
        for (i, game) in result.games.iter().enumerate() {
            println!(
                "   {:>3}. {} → {} [{}:{}]",
                i + 1,
                game.seed_word.bright_yellow(),
                game.words.join(", "),
                game.letters[0],
                game.letters[1]
            );
        }
    }
}
