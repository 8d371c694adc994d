use std::fmt;
use std::io::{self, Stdout, Write, stdout};
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    execute, terminal,
};
use rodio::StreamError;

mod assets;
mod audio;
mod clock;
mod collision;
mod config;
mod game;
mod pipes;
mod player;
mod render;
mod score;
mod sprite;

use assets::Assets;
use audio::Audio;
use clock::FramePacer;
use game::GameState;
use render::Presenter;

// ── Errors ──────────────────────────────────────────────────────────────────

/// Everything fatal reduces to a failed acquisition or a failed write; the
/// game itself has no error states, only Running and Over.
#[derive(Debug)]
enum AppError {
    Io(io::Error),
    Audio(StreamError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "terminal error: {err}"),
            AppError::Audio(err) => write!(f, "audio device error: {err}"),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> AppError {
        AppError::Io(err)
    }
}

impl From<StreamError> for AppError {
    fn from(err: StreamError) -> AppError {
        AppError::Audio(err)
    }
}

// ── Terminal session ────────────────────────────────────────────────────────

/// Raw mode + alternate screen, released in Drop so every exit path
/// (including mid-loop write errors) restores the terminal.
struct TermGuard;

impl TermGuard {
    fn acquire(out: &mut Stdout) -> io::Result<TermGuard> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
        ) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(TermGuard)
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            terminal::LeaveAlternateScreen,
            cursor::Show,
            terminal::EnableLineWrap,
        );
        let _ = terminal::disable_raw_mode();
    }
}

// ── Input ───────────────────────────────────────────────────────────────────

#[derive(Default, Clone, Copy)]
struct InputState {
    jump_held: bool,
    quit: bool,
}

/// Drains everything the terminal queued since last tick. Any jump key seen
/// counts as "held" for this tick; key autorepeat keeps the signal alive
/// while the key stays down.
fn drain_input(presenter: &mut Presenter) -> io::Result<InputState> {
    let mut input = InputState::default();
    while event::poll(Duration::ZERO)? {
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => input.quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    input.quit = true;
                }
                KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => input.jump_held = true,
                _ => {}
            },
            Event::Resize(cols, rows) => presenter.resize(cols, rows),
            _ => {}
        }
    }
    Ok(input)
}

// ── Main ────────────────────────────────────────────────────────────────────

/// Runs the game to completion. `Some(score)` when a game was played to
/// its end, `None` when the player quit mid-flight.
fn run() -> Result<Option<f64>, AppError> {
    // Acquire the audio device before taking over the screen, so a failure
    // prints on a usable terminal.
    let audio = Audio::open()?;
    let assets = Assets::build();

    let mut out = stdout();
    let _guard = TermGuard::acquire(&mut out)?;

    let (cols, rows) = terminal::size()?;
    let mut presenter = Presenter::new(cols, rows);
    let mut game = GameState::new();
    let mut rng = rand::rng();
    let mut pacer = FramePacer::new(config::TARGET_FPS);

    loop {
        let input = drain_input(&mut presenter)?;
        if input.quit {
            return Ok(None);
        }

        let report = game.tick(input.jump_held, &mut rng, &assets);
        if report.flapped {
            audio.flap();
        }
        if report.scored {
            audio.score();
        }

        presenter.present(&game.frame(&assets), &mut out)?;

        if report.game_over {
            // leave the dimmed final frame up while the sweep rings out
            audio.death();
            thread::sleep(Duration::from_millis(900));
            return Ok(Some(game.score()));
        }

        pacer.tick();
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(Some(score)) => {
            println!("game over, score {}", score as u32);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("flapper: {err}");
            ExitCode::FAILURE
        }
    }
}
