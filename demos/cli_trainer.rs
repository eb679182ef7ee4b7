//! CLI basic-strategy trainer example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtrainer::{
    Action, ActionError, Card, DealError, Hand, HandOutcome, MAX_ACTIVE_HANDS, RoundEngine,
    RoundPhase, SessionOptions, ShowdownError, Suit,
};

/// Rebuild once the shoe drops below this share of its full size.
const REBUILD_BELOW: usize = 4;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Basic strategy trainer (type 'q' to quit)");

    let Some(bankroll) = prompt_number::<f64>("Starting bankroll: ") else {
        return;
    };
    let Some(hands) = prompt_number::<u8>(&format!("Hands per round (1-{MAX_ACTIVE_HANDS}): ")) else {
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = SessionOptions::default()
        .with_bankroll(bankroll)
        .with_active_hands(hands);
    let full_shoe = usize::from(options.decks) * bjtrainer::DECK_SIZE;

    let mut engine = match RoundEngine::new(options, seed) {
        Ok(engine) => engine,
        Err(err) => {
            println!("Cannot start session: {err}");
            return;
        }
    };
    log::info!("session started with seed {seed}");

    loop {
        if engine.bankroll() <= 0.0 {
            println!("You are out of money. Game over.");
            break;
        }

        if engine.cards_remaining() < full_shoe / REBUILD_BELOW && engine.rebuild_shoe().is_ok() {
            println!("Shoe rebuilt.");
        }

        if !take_bets(&mut engine) {
            break;
        }

        match engine.deal() {
            Ok(()) => {}
            Err(DealError::EmptyShoe(_)) => {
                println!("Not enough cards to deal. Rebuilding the shoe.");
                if engine.rebuild_shoe().is_ok() && engine.deal().is_err() {
                    println!("Deal failed after rebuilding.");
                    break;
                }
            }
            Err(err) => {
                println!("Deal error: {err}");
                break;
            }
        }

        while engine.phase() == RoundPhase::PlayerTurns {
            print_table(&engine);

            println!("{}", format_actions(&engine));
            let input = prompt_line("Action: ").unwrap_or_else(|| "q".to_string());
            let action = match input.as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "d" | "double" => Action::Double,
                "p" | "split" => Action::Split,
                "u" | "surrender" => Action::Surrender,
                "q" | "quit" => {
                    print_stats(&engine);
                    return;
                }
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            match engine.submit_action(action) {
                Ok(outcome) => {
                    if outcome.correct {
                        println!("{}", colorize("Correct.", "32"));
                    } else {
                        let advice = outcome
                            .recommended
                            .map_or_else(|| "none".to_string(), |a| a.to_string());
                        println!("{}", colorize(&format!("Basic strategy says: {advice}"), "31"));
                    }
                }
                Err(ActionError::EmptyShoe(_)) => {
                    println!("Shoe is empty. Rebuilding.");
                    let _ = engine.rebuild_shoe();
                }
                Err(err) => println!("Action error: {err}"),
            }
        }

        loop {
            match engine.dealer_play() {
                Ok(drawn) => {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                    break;
                }
                Err(ShowdownError::EmptyShoe(_)) => {
                    println!("Shoe is empty. Rebuilding.");
                    if engine.rebuild_shoe().is_err() {
                        return;
                    }
                }
                Err(err) => {
                    println!("Dealer error: {err}");
                    return;
                }
            }
        }

        match engine.settle() {
            Ok(result) => {
                print_table(&engine);
                for hand in &result.hands {
                    println!(
                        "Hand {}: {} (total {} vs {}) bet {} returns {}",
                        hand.hand_index,
                        format_outcome(hand.outcome),
                        hand.player_total,
                        hand.dealer_total,
                        hand.bet,
                        hand.payout
                    );
                }
            }
            Err(err) => println!("Settle error: {err}"),
        }

        print_stats(&engine);

        if let Err(err) = engine.start_round() {
            println!("Cannot start next round: {err}");
            break;
        }
    }

    print_stats(&engine);
}

/// Prompts a bet for every seat. Returns `false` when the player quits.
fn take_bets(engine: &mut RoundEngine) -> bool {
    let seats = usize::from(engine.options().active_hands);
    for seat in 0..seats {
        loop {
            let bankroll = engine.bankroll();
            let Some(amount) = prompt_number::<f64>(&format!("Bet for hand {seat} (0-{bankroll}): ")) else {
                return false;
            };
            match engine.place_bet(seat, amount) {
                Ok(()) => break,
                Err(err) => println!("Bet error: {err}"),
            }
        }
    }
    true
}

/// Reads one trimmed, lowercased line. Returns `None` once stdin is closed.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_number<T: std::str::FromStr>(prompt: &str) -> Option<T> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<T>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(engine: &RoundEngine) {
    println!("\nCards left: {}", engine.cards_remaining());

    let dealer_view = format_cards(engine.dealer_visible_cards());
    match engine.dealer_hand() {
        Some(dealer) => println!("Dealer: {dealer_view} (total {})", dealer.total()),
        None => println!("Dealer: {dealer_view} ??"),
    }

    let in_turn = engine.active_hand().is_some();
    for (index, hand) in engine.waiting_hands().enumerate() {
        let marker = if in_turn && index == 0 { "*" } else { " " };
        println!("{marker} {}", format_hand(hand));
    }
    for hand in engine.completed_hands() {
        println!("  {}", format_hand(hand));
    }
    println!();
}

fn print_stats(engine: &RoundEngine) {
    let session = engine.session();
    let stats = engine.stats();
    println!("Bankroll: {} (net {:+})", session.bankroll(), stats.net);
    println!(
        "Hands played: {} | total bet {}",
        session.hands_played(),
        session.total_bet()
    );
    println!(
        "Strategy adherence: {} ({}/{})",
        format_optional(stats.adherence, "%"),
        session.correct_actions(),
        session.total_actions()
    );
    println!(
        "Average bet: {} | win/loss per hand: {}",
        format_optional(stats.average_bet, ""),
        format_optional(stats.net_per_hand, "")
    );
}

fn format_optional(value: Option<f64>, suffix: &str) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}{suffix}"))
}

fn format_actions(engine: &RoundEngine) -> String {
    let allowed = engine.available_actions();
    let parts: Vec<String> = [
        (Action::Hit, "h"),
        (Action::Stand, "s"),
        (Action::Double, "d"),
        (Action::Split, "p"),
        (Action::Surrender, "u"),
    ]
    .iter()
    .map(|(action, key)| {
        let text = format!("[{key}]{action}");
        if allowed.contains(action) {
            colorize(&text, "32")
        } else {
            colorize(&text, "90")
        }
    })
    .collect();
    format!("Actions: {}", parts.join(" "))
}

const fn format_outcome(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "win",
        HandOutcome::Lose => "lose",
        HandOutcome::Push => "push",
        HandOutcome::Blackjack => "blackjack",
        HandOutcome::Surrendered => "surrendered",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Hand) -> String {
    let mut flags = String::new();
    if hand.is_doubled() {
        flags.push_str(" doubled");
    }
    if hand.is_surrendered() {
        flags.push_str(" surrendered");
    }
    format!(
        "{} | total {} {:?} | bet {}{flags}",
        format_cards(hand.cards()),
        hand.total(),
        hand.state(),
        hand.bet()
    )
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
