use std::io::{self, IsTerminal, Write};
use std::process;

use colored::Colorize;
use tracing::debug;

use ir_core::{GameError, GameSession, Presenter, Prompt, ScriptedPrompt, SessionConfig};

use crate::terminal::{SilentPresenter, TerminalConfig, TerminalPresenter, TerminalPrompt};

const INTERRUPTED: &str = "Game interrupted. Stay safe out there!";

/// Options for the `play` command, as parsed from the command line.
pub struct PlayArgs {
    pub choices: Option<Vec<usize>>,
    pub json: bool,
    pub color: bool,
    pub typewriter_ms: Option<u64>,
    pub briefing: bool,
}

pub fn run(args: PlayArgs) -> Result<(), String> {
    if !args.color {
        colored::control::set_override(false);
    }

    ctrlc::set_handler(|| {
        print_interrupted();
        process::exit(0);
    })
    .map_err(|e| format!("failed to install Ctrl+C handler: {e}"))?;

    match args.choices.as_deref() {
        Some(choices) => run_scripted(choices, &args),
        None => run_interactive(&args),
    }
}

fn run_interactive(args: &PlayArgs) -> Result<(), String> {
    let config = SessionConfig::default().with_briefing(args.briefing);
    let session = GameSession::new(config);
    debug!(briefing = args.briefing, "starting interactive run");

    // Stdout stays unlocked between writes so the Ctrl+C handler can print.
    let stdout = io::stdout();
    let terminal = TerminalConfig::default()
        .with_color(args.color)
        .with_typewriter_ms(args.typewriter_ms.unwrap_or(20))
        .with_clear_screen(stdout.is_terminal());
    let mut presenter = TerminalPresenter::new(stdout, terminal);
    let mut prompt = TerminalPrompt::new(io::stdin().lock(), io::stdout(), args.color);

    play(&session, &mut presenter, &mut prompt)
}

fn run_scripted(choices: &[usize], args: &PlayArgs) -> Result<(), String> {
    let session = GameSession::new(SessionConfig::scripted());
    let expected = session.engine().scenario_count();
    if choices.len() != expected {
        return Err(format!(
            "--choices needs exactly {expected} values, one per scenario (got {})",
            choices.len()
        ));
    }

    debug!(?choices, json = args.json, "starting scripted run");
    let mut prompt = ScriptedPrompt::new(choices.iter().copied());

    if args.json {
        let summaries = session
            .run(&mut SilentPresenter, &mut prompt)
            .map_err(|e| e.to_string())?;
        let json = serde_json::to_string_pretty(&summaries)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    let terminal = TerminalConfig::default()
        .with_color(args.color)
        .with_typewriter_ms(args.typewriter_ms.unwrap_or(0))
        .with_clear_screen(false);
    let mut presenter = TerminalPresenter::new(io::stdout(), terminal);

    play(&session, &mut presenter, &mut prompt)
}

fn play(
    session: &GameSession,
    presenter: &mut impl Presenter,
    prompt: &mut impl Prompt,
) -> Result<(), String> {
    match session.run(presenter, prompt) {
        Ok(_) => Ok(()),
        Err(GameError::Interrupted) => {
            print_interrupted();
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn print_interrupted() {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "\n\n\n{}\n", INTERRUPTED.yellow());
    let _ = out.flush();
}
