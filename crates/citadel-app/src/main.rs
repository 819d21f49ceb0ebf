//! Citadel dashboard binary: seeds a demo session, then runs the blocking
//! prompt/dispatch/render loop until the operator quits.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::style::Color as TermColor;

use citadel_config::DisplayConfig;
use citadel_core::auth::EnvAuthenticator;
use citadel_core::command::Transition;
use citadel_core::controller::ScreenController;
use citadel_core::logging;
use citadel_core::screen::{ScreenId, ScreenRegistry};
use citadel_screens::all_screens;

mod seed;
mod term;

use term::SecretRead;

/// Exit code when stdin closes before the operator quits.
const EXIT_INPUT_CLOSED: i32 = 1;

fn main() -> Result<()> {
    logging::init();
    tracing::info!("Citadel dashboard starting up");

    let code = run()?;
    process::exit(code);
}

/// Optional config path from the first CLI argument.
fn config_arg() -> Option<PathBuf> {
    std::env::args_os().nth(1).map(PathBuf::from)
}

/// Outcome of one prompt round.
enum Round {
    Transition(Transition),
    Closed,
}

fn run() -> Result<i32> {
    let config = DisplayConfig::load(config_arg().as_deref())?;
    let caps = term::detect_caps(&config.ui);
    let width = term::render_width(&config.ui);

    // Interrupt is a normal way to leave the dashboard, not a failure.
    ctrlc::set_handler(move || {
        let _ = term::print_notice("\nShutting down Citadel Agent...", TermColor::Red, caps);
        process::exit(0);
    })
    .context("failed to install interrupt handler")?;

    let mut registry = ScreenRegistry::new();
    for screen in all_screens() {
        registry.register(screen)?;
    }

    let auth = Box::new(EnvAuthenticator::from_env());
    let mut controller = ScreenController::new(registry, auth, seed::demo_session())?;

    // Boot banner, then a fixed pause before the first paint.
    term::print_notice(
        &format!("Starting Citadel-Agent v{}...", env!("CARGO_PKG_VERSION")),
        TermColor::Cyan,
        caps,
    )?;
    let delay = Duration::from_millis(config.ui.startup_delay_ms);
    if !delay.is_zero() {
        thread::sleep(delay);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        // ── Paint ──
        term::paint_screen(&controller.render(width, caps))?;

        // ── Prompt → Dispatch ──
        let round = if controller.current_screen() == ScreenId::Login {
            login_round(&mut input, &mut controller)?
        } else {
            command_round(&mut input, &mut controller)?
        };

        // ── Report ──
        match round {
            Round::Closed => {
                tracing::warn!("input stream closed; shutting down");
                term::print_notice("Input stream closed.", TermColor::Red, caps)?;
                return Ok(EXIT_INPUT_CLOSED);
            }
            Round::Transition(Transition::Exit(code)) => {
                term::print_notice("Shutting down Citadel Agent...", TermColor::Red, caps)?;
                return Ok(code);
            }
            Round::Transition(Transition::Reject(reason)) => {
                term::print_notice(&reason, TermColor::Yellow, caps)?;
                term::pause_after_notice();
            }
            Round::Transition(_) => {}
        }
    }
}

/// One round at the login screen: username line, then hidden secret.
///
/// The username prompt still honors commands (`quit`, `esc`); a line the
/// dispatcher rejects is what identifies plain input as a username.
fn login_round(input: &mut impl BufRead, controller: &mut ScreenController) -> Result<Round> {
    let Some(line) = term::prompt_line(input, "> Username: ")? else {
        return Ok(Round::Closed);
    };

    let username = match controller.handle_command(&line) {
        Transition::Reject(_) => line,
        other => return Ok(Round::Transition(other)),
    };

    let secret = match term::read_secret(input, "> Password: ")? {
        SecretRead::Entered(secret) => secret,
        SecretRead::Aborted => return Ok(Round::Transition(Transition::Stay)),
        SecretRead::Closed => return Ok(Round::Closed),
    };

    Ok(Round::Transition(controller.handle_login(&username, &secret)))
}

/// One round on any authenticated screen: prompt, dispatch.
fn command_round(input: &mut impl BufRead, controller: &mut ScreenController) -> Result<Round> {
    let Some(line) = term::prompt_line(input, "[CMD]: ")? else {
        return Ok(Round::Closed);
    };
    Ok(Round::Transition(controller.handle_command(&line)))
}
