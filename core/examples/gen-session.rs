//! Generates recorded session JSON files for the replay host.
//!
//! Usage:
//!   cargo run -p platduel-core --example gen-session -- [idle|brawl|chase] > session.json

use platduel_core::*;

fn down(at_ms: Millis, key: Key) -> InputEvent {
    InputEvent { at_ms, action: KeyAction::Down, key }
}

fn up(at_ms: Millis, key: Key) -> InputEvent {
    InputEvent { at_ms, action: KeyAction::Up, key }
}

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "idle".to_string());
    let config = default_config();

    let events: Vec<InputEvent> = match mode.as_str() {
        // Nobody touches the keyboard; the clock decides
        "idle" => Vec::new(),
        "brawl" => {
            // Both drop to the centre ledge, close in, and trade swings
            let mut events = vec![
                down(0, Key::D),
                down(0, Key::ArrowLeft),
                up(2200, Key::D),
                up(2200, Key::ArrowLeft),
            ];
            let mut t = 2300;
            while t < 9500 {
                events.push(down(t, Key::Space));
                events.push(down(t + 250, Key::Enter));
                t += 510;
            }
            events
        }
        "chase" => {
            // Player one hops around while player two chases
            let mut events = vec![down(0, Key::ArrowLeft)];
            let mut t = 0;
            while t < 9000 {
                events.push(down(t, Key::W));
                events.push(down(t + 100, Key::A));
                events.push(up(t + 700, Key::A));
                t += 1200;
            }
            events
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle', 'brawl', or 'chase'", mode);
            std::process::exit(1);
        }
    };

    let session = Session { config, events };

    // Verify by running the sim
    match run_session(&session) {
        Ok(state) => {
            eprintln!("=== Sim result ({} mode) ===", mode);
            eprintln!("Frames: {}", state.frame);
            eprintln!("Countdown: {}", state.countdown.remaining);
            eprintln!("Outcome: {:?}", state.outcome);
            eprintln!(
                "Health: P1={}, P2={}",
                state.players[0].health, state.players[1].health
            );
        }
        Err(e) => {
            eprintln!("Generated session does not replay: {e}");
            std::process::exit(1);
        }
    }

    println!("{}", serde_json::to_string_pretty(&session).unwrap());
}
