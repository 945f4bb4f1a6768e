use colored::Colorize;

use ir_core::{Ending, PlayerState, Tone};

pub fn run(score: i64, reputation: i64) -> Result<(), String> {
    let state = PlayerState {
        score,
        reputation,
        ..PlayerState::new()
    };
    let ending = Ending::classify(&state);

    let name = ending.to_string();
    let name = match ending.tone() {
        Tone::Success => name.green().bold(),
        Tone::Warning => name.yellow().bold(),
        _ => name.red().bold(),
    };
    println!("  {name}  {}", ending.title());
    println!(
        "  {}",
        format!("(score {score}, reputation {reputation}%)").dimmed()
    );

    Ok(())
}
