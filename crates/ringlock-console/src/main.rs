//! Ringlock console entry point.

use std::sync::Arc;
use std::time::Duration;

use ringlock_audio::{AudioEngine, AudioPort};
use ringlock_core::clock::SystemClock;
use ringlock_core::rng::SeededRng;
use ringlock_session::{GameSession, StoryConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

mod bell;
mod commands;
mod config;
mod error;
mod render;

use bell::TerminalBell;
use commands::ConsoleCommand;
use config::ConsoleConfig;
use error::{AppError, CommandError};
use render::Screen;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Logs go to stderr so they never interleave with the game screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .json()
        .with_writer(std::io::stderr)
        .init();

    let config = ConsoleConfig::from_env()?;
    tracing::info!(?config, "starting Ringlock console");

    let story = match &config.story_path {
        Some(path) => StoryConfig::load(path)?,
        None => StoryConfig::builtin()?,
    };
    let mut rng = config
        .seed
        .map_or_else(SeededRng::from_os_rng, SeededRng::seed_from_u64);
    let audio: Box<dyn AudioPort> = if config.muted {
        Box::new(AudioEngine::muted(TerminalBell::new()))
    } else {
        Box::new(AudioEngine::new(TerminalBell::new()))
    };

    let mut session = GameSession::new(story, Arc::new(SystemClock), &mut rng, audio)?;
    let result = run(&mut session, config.tick).await;
    session.shutdown();
    result
}

async fn run(session: &mut GameSession, tick: Duration) -> Result<(), AppError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    println!("{}", Screen(&session.view()));
    println!("(type `help` for commands)");

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match commands::parse(&line) {
                    Ok(ConsoleCommand::Quit) => break,
                    Ok(ConsoleCommand::Help) => println!("{}", render::HELP),
                    Ok(ConsoleCommand::Look) => println!("{}", Screen(&session.view())),
                    Ok(ConsoleCommand::Play(action)) => {
                        let outcome = session.dispatch(action);
                        if let Some(line) = render::outcome_line(&outcome) {
                            println!("{line}");
                        }
                        println!("{}", Screen(&session.view()));
                    }
                    Err(CommandError::Empty) => {}
                    Err(e) => println!("{e}"),
                }
            }
            _ = ticker.tick() => {
                if session.run_due_tasks() > 0 {
                    println!("{}", Screen(&session.view()));
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("received Ctrl+C, shutting down");
                break;
            }
        }
    }
    Ok(())
}
