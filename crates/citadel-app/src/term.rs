//! Terminal plumbing: capability detection, screen painting, line and
//! secret prompts.
//!
//! Everything here degrades cleanly when stdin or stdout is not a terminal,
//! so the binary stays scriptable (`echo quit | citadel-app`).

use std::io::{self, BufRead, Write};
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use citadel_config::UiConfig;
use citadel_render::TermCaps;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color as TermColor, Stylize};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::tty::IsTty;

const MIN_WIDTH: usize = 20;
const DEFAULT_WIDTH: usize = 80;
const NOTICE_PAUSE: Duration = Duration::from_millis(1200);

/// Outcome of one hidden secret prompt.
pub(crate) enum SecretRead {
    Entered(String),
    /// The operator pressed Esc instead of submitting.
    Aborted,
    Closed,
}

/// Resolve the effective capabilities from config and environment.
pub(crate) fn detect_caps(ui: &UiConfig) -> TermCaps {
    TermCaps {
        color: ui.color.resolve(color_detected()),
        unicode: ui.unicode.resolve(unicode_detected()),
    }
}

fn color_detected() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("TERM").as_deref(), Ok("dumb")) {
        return false;
    }
    io::stdout().is_tty()
}

fn unicode_detected() -> bool {
    for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return value.to_lowercase().contains("utf");
            }
        }
    }
    false
}

/// Width to render at: config override, else the terminal, else 80 columns.
/// Never below 20; panels need room for their frames.
pub(crate) fn render_width(ui: &UiConfig) -> usize {
    if let Some(width) = ui.width {
        return width.max(MIN_WIDTH);
    }
    match terminal::size() {
        Ok((cols, _)) => (cols as usize).max(MIN_WIDTH),
        Err(_) => DEFAULT_WIDTH,
    }
}

/// Write one rendered screen, clearing first when stdout is a terminal.
pub(crate) fn paint_screen(lines: &[String]) -> Result<()> {
    let mut out = io::stdout();
    if out.is_tty() {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Print a prompt and read one line. `None` means the stream closed.
pub(crate) fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    let mut out = io::stdout();
    write!(out, "\n{prompt}")?;
    out.flush()?;
    next_line(input)
}

fn next_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prompt for a secret with echo suppressed.
///
/// On a terminal this switches to raw mode and consumes key events; piped
/// input falls back to a plain line read.
pub(crate) fn read_secret(input: &mut impl BufRead, prompt: &str) -> Result<SecretRead> {
    let mut out = io::stdout();
    write!(out, "{prompt}")?;
    out.flush()?;

    if !io::stdin().is_tty() {
        return Ok(match next_line(input)? {
            Some(line) => SecretRead::Entered(line),
            None => SecretRead::Closed,
        });
    }

    enable_raw_mode().context("failed to enter raw mode for secret entry")?;
    let result = read_secret_keys();
    let _ = disable_raw_mode();
    writeln!(out)?;
    out.flush()?;
    result
}

fn read_secret_keys() -> Result<SecretRead> {
    let mut secret = String::new();
    loop {
        if let Event::Key(key) = event::read().context("failed to read key event")? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Enter => return Ok(SecretRead::Entered(secret)),
                KeyCode::Esc => return Ok(SecretRead::Aborted),
                KeyCode::Backspace => {
                    secret.pop();
                }
                // Raw mode swallows the signal the interrupt handler relies
                // on, so honor Ctrl+C here directly.
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let _ = disable_raw_mode();
                    process::exit(0);
                }
                KeyCode::Char(c) => secret.push(c),
                _ => {}
            }
        }
    }
}

/// Print a one-line colored notice below the screen.
pub(crate) fn print_notice(message: &str, color: TermColor, caps: TermCaps) -> Result<()> {
    let mut out = io::stdout();
    if caps.color {
        writeln!(out, "{}", message.with(color))?;
    } else {
        writeln!(out, "{message}")?;
    }
    out.flush()?;
    Ok(())
}

/// Give the operator a moment to read a notice before the next repaint.
/// Skipped for piped output.
pub(crate) fn pause_after_notice() {
    if io::stdout().is_tty() {
        thread::sleep(NOTICE_PAUSE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citadel_config::CapMode;
    use std::sync::Mutex;

    // Serialize env-mutating tests to avoid data races.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(names: &[&'static str]) -> Self {
            Self {
                saved: names
                    .iter()
                    .map(|&name| (name, std::env::var(name).ok()))
                    .collect(),
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => std::env::set_var(name, v),
                    None => std::env::remove_var(name),
                }
            }
        }
    }

    #[test]
    fn unicode_detection_reads_locale_chain() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvGuard::capture(&["LC_ALL", "LC_CTYPE", "LANG"]);

        std::env::set_var("LC_ALL", "en_US.UTF-8");
        assert!(unicode_detected());

        std::env::set_var("LC_ALL", "C");
        assert!(!unicode_detected());

        std::env::remove_var("LC_ALL");
        std::env::remove_var("LC_CTYPE");
        std::env::set_var("LANG", "de_DE.utf8");
        assert!(unicode_detected());

        std::env::remove_var("LANG");
        assert!(!unicode_detected());
    }

    #[test]
    fn no_color_forces_color_off() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvGuard::capture(&["NO_COLOR"]);

        std::env::set_var("NO_COLOR", "1");
        assert!(!color_detected());
    }

    #[test]
    fn dumb_term_forces_color_off() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvGuard::capture(&["NO_COLOR", "TERM"]);

        std::env::remove_var("NO_COLOR");
        std::env::set_var("TERM", "dumb");
        assert!(!color_detected());
    }

    #[test]
    fn config_overrides_beat_detection() {
        let _guard = ENV_LOCK.lock().unwrap();
        let _env = EnvGuard::capture(&["NO_COLOR", "LC_ALL", "LC_CTYPE", "LANG"]);
        std::env::set_var("NO_COLOR", "1");
        std::env::set_var("LC_ALL", "C");

        let ui = UiConfig {
            color: CapMode::Always,
            unicode: CapMode::Always,
            ..UiConfig::default()
        };
        let caps = detect_caps(&ui);
        assert!(caps.color);
        assert!(caps.unicode);

        let ui = UiConfig {
            color: CapMode::Never,
            unicode: CapMode::Never,
            ..UiConfig::default()
        };
        let caps = detect_caps(&ui);
        assert!(!caps.color);
        assert!(!caps.unicode);
    }

    #[test]
    fn width_override_respects_floor() {
        let ui = UiConfig { width: Some(4), ..UiConfig::default() };
        assert_eq!(render_width(&ui), MIN_WIDTH);

        let ui = UiConfig { width: Some(120), ..UiConfig::default() };
        assert_eq!(render_width(&ui), 120);
    }

    #[test]
    fn next_line_strips_terminators_and_signals_eof() {
        let mut input = io::Cursor::new(b"alpha\r\nbeta\n".to_vec());
        assert_eq!(next_line(&mut input).unwrap(), Some("alpha".into()));
        assert_eq!(next_line(&mut input).unwrap(), Some("beta".into()));
        assert_eq!(next_line(&mut input).unwrap(), None);
    }
}
