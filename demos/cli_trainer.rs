//! CLI card-counting trainer (type 'q' to quit).
//!
//! Set `RUST_LOG=bjcount=debug` to follow the engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcount::{
    Action, Card, Game, GameEvent, GameOptions, GameState, InsuranceKind, Snapshot, Transition,
};

fn main() {
    env_logger::init();
    println!("Hi-Lo trainer (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        let snapshot = game.snapshot();
        if snapshot.balance == 0 {
            println!("You are out of money. Game over.");
            break;
        }

        let prompt = format!(
            "Bet amount (1-{}, enter for {}, 0 to quit): ",
            snapshot.balance, snapshot.last_bet
        );
        let Some(bet) = prompt_bet(&prompt, snapshot.last_bet) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if !run(&mut game, Action::PlaceBet(bet)) || !run(&mut game, Action::Deal) {
            print_message(&game.snapshot());
            continue;
        }

        if game.state() == GameState::Insurance {
            let question = match game.insurance_offer() {
                Some(InsuranceKind::EvenMoney) => "Take even money? (y/n): ",
                _ => "Dealer shows an Ace. Take insurance? (y/n): ",
            };
            let action = match prompt_line(question).as_str() {
                "y" | "yes" => Action::TakeInsurance,
                _ => Action::DeclineInsurance,
            };
            run(&mut game, action);
        }

        while game.state() == GameState::Playing {
            let snapshot = game.snapshot();
            print_table(&snapshot);
            println!("{}", format_actions(&snapshot));

            let action = match prompt_line("Action: ").as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "d" | "double" => Action::DoubleDown,
                "p" | "split" => Action::Split,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };
            run(&mut game, action);
        }

        if game.state() == GameState::Resolving {
            print_table(&game.snapshot());
            let _ = game.finish_pending();
        }

        for event in game.drain_events() {
            if let GameEvent::RoundSettled(result) = event {
                println!("Payout: {} (net {})", result.total_payout, result.net);
            }
        }

        let snapshot = game.snapshot();
        print_table(&snapshot);
        print_message(&snapshot);
        quiz(&snapshot);
    }
}

/// Dispatches `action` and reports whether it was applied.
fn run(game: &mut Game, action: Action) -> bool {
    match game.dispatch(action) {
        Ok(Transition::Applied) => true,
        Ok(Transition::Ignored(reason)) => {
            println!("{action:?} ignored: {reason}");
            false
        }
        Err(err) => {
            println!("Shoe error: {err}");
            let _ = game.new_game();
            false
        }
    }
}

fn quiz(snapshot: &Snapshot) {
    let answer = prompt_line("Running count? (enter to skip): ");
    if answer.is_empty() {
        return;
    }
    let actual = snapshot.stats.running_count;
    match answer.parse::<i32>() {
        Ok(guess) if guess == actual => println!("{}", colorize("Correct!", "32")),
        Ok(_) => println!("{}", colorize(&format!("No, it is {actual}."), "31")),
        Err(_) => println!("The running count is {actual}."),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_bet(prompt: &str, default: usize) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        if input.is_empty() {
            return Some(default);
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_message(snapshot: &Snapshot) {
    if let Some(message) = &snapshot.message {
        println!("{}", colorize(message, "33"));
    }
}

fn print_table(snapshot: &Snapshot) {
    let stats = &snapshot.stats;
    println!(
        "\nShoe: {} cards ({:.1} decks) | balance {} | won {}/{} ({}%)",
        stats.cards_remaining,
        stats.decks_remaining,
        snapshot.balance,
        stats.hands_won,
        stats.total_hands,
        stats.win_rate
    );

    let mut dealer = format_cards(&snapshot.dealer.cards);
    if snapshot.dealer.hole_hidden {
        dealer.push_str(" ??");
    }
    println!("\nDealer: {dealer} (value {})", snapshot.dealer.value);

    for (index, hand) in snapshot.hands.iter().enumerate() {
        let marker = if snapshot.active_hand == Some(index) {
            "*"
        } else {
            " "
        };
        println!(
            "{marker} Hand {}: {} | value {} | bet {}",
            index + 1,
            format_cards(&hand.cards),
            hand.value,
            hand.stake
        );
    }

    println!("Recent: {}", format_cards(&snapshot.recent_cards));
    println!();
}

fn format_actions(snapshot: &Snapshot) -> String {
    let parts = [
        format_action("hit", "h", true),
        format_action("stand", "s", true),
        format_action("double", "d", snapshot.can_double),
        format_action("split", "p", snapshot.can_split),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(none)".to_string();
    }
    cards
        .iter()
        .map(|card| {
            let text = card.to_string();
            if card.is_red() {
                colorize(&text, "31")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
