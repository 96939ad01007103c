//! CLI War example.
//!
//! Set `RUST_LOG=debug` to see every deal logged by the engine.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use warrs::{Backdrop, CardAsset, Game, Header, NoAssets, TableOptions, TableView};

fn main() {
    env_logger::init();

    println!("War CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default();
    let mut game = Game::new(seed);

    loop {
        print_table(&TableView::render(&game.state(), &options, &NoAssets));

        match prompt_line("[d]eal [r]eset [q]uit: ").as_str() {
            "d" | "deal" | "" => {
                let result = game.deal();
                println!(
                    "{} vs {}: {:?}",
                    result.player_card, result.opponent_card, result.outcome
                );
            }
            "r" | "reset" => {
                game.reset();
                println!("Scores reset.");
            }
            "q" | "quit" => {
                println!(
                    "Final score after {} deal(s): {}-{}. Goodbye.",
                    game.rounds_played(),
                    game.player_score(),
                    game.opponent_score()
                );
                break;
            }
            _ => println!("Unknown action."),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).unwrap_or(0) == 0 {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(view: &TableView) {
    if let Backdrop::Image(name) = &view.backdrop {
        println!("[{name}]");
    }

    match &view.header {
        Header::Logo(name) => println!("\n  [{name}]"),
        Header::Title(title) => println!("\n  {}", colorize(title, "1;33")),
    }

    println!(
        "\n  {}   {}",
        format_card(&view.player_card),
        format_card(&view.opponent_card)
    );
    println!(
        "\n  {}: {}   {}: {}\n",
        view.player_score.label,
        view.player_score.score,
        view.opponent_score.label,
        view.opponent_score.score
    );
}

fn format_card(asset: &CardAsset) -> String {
    match asset {
        CardAsset::Face(name) => colorize(&format!("[{name}]"), "32"),
        CardAsset::Back(name) => colorize(&format!("[{name}]"), "90"),
        CardAsset::Placeholder { label } => colorize(&format!("| {label} |"), "37"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
