//! TERMTRIS - falling blocks in the terminal

use crossterm::event::{self, Event};
use std::{io, time::Instant};
use termtris::{
    app::{GameEvent, Session},
    clock::Clock,
    game::Game,
    input::InputMapper,
    settings::Settings,
    terminal::{self, TerminalSink},
};

/// Get the termtris temp directory, creating it if needed
fn termtris_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("termtris");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    // Generate session ID for this instance
    let session_id: u32 = rand::random();

    // The terminal belongs to the game, so logs go to a file
    let log_dir = termtris_temp_dir();
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("termtris=debug".parse().expect("static directive")),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "TERMTRIS starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let settings = Settings::load();
    let game = match settings.gameplay.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };

    let sink = TerminalSink::enter()?;
    let mut session = Session::new(game, sink, settings.visual.glyphs());

    let result = run(&mut session, &settings);

    // Restore terminal before reporting anything
    terminal::restore()?;

    match &result {
        Ok(()) => {
            println!("Exiting game...");
            println!("Final Score: {}", session.game().score.points);
            tracing::info!("clean exit");
        }
        Err(e) => tracing::error!("terminal error: {}", e),
    }

    result
}

/// Feed clock ticks and key presses into the session until the player quits
fn run(session: &mut Session<TerminalSink>, settings: &Settings) -> io::Result<()> {
    let mapper = InputMapper::from_settings(settings);
    let mut clock = Clock::new(settings.gameplay.gravity(), Instant::now());

    session.redraw()?;

    loop {
        if event::poll(clock.timeout(Instant::now()))? {
            let event = match event::read()? {
                Event::Key(key) => match mapper.map(key) {
                    Some(action) => Some(GameEvent::Action(action)),
                    None => Some(GameEvent::Redraw),
                },
                Event::Resize(_, _) => Some(GameEvent::Redraw),
                _ => None,
            };
            match event {
                Some(event) if session.handle(event)?.is_break() => return Ok(()),
                _ => {}
            }
        }

        if clock.poll(Instant::now()) && session.handle(GameEvent::Tick)?.is_break() {
            return Ok(());
        }
    }
}
