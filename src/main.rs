mod ui;

use battle_snake::arena::Direction;
use battle_snake::build_info::version_line;
use battle_snake::config::GameConfig;
use battle_snake::game::{ControlInput, Session, SessionFlow};
use battle_snake::high_score::{FileHighScoreStore, HighScoreStore};
use battle_snake::logging::{default_log_path, TracingSubscriber};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Battle Snake - eat, grow, and outrun the hunter\n");
                println!("Usage: battle-snake [options]\n");
                println!("Options:");
                println!("  --seed <N>  Fixed seed for walls and food");
                println!("  --version   Show version information");
                println!("  --help      Show this help message");
                println!();
                println!("Controls: arrows/WASD move, space pauses, c resumes,");
                println!("          r restarts after game over, q quits.");
                std::process::exit(0);
            }
            "--seed" => {
                seed = args.get(i + 1).and_then(|s| s.parse().ok());
                if seed.is_none() {
                    eprintln!("--seed needs a number");
                    std::process::exit(1);
                }
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'battle-snake --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = GameConfig::load()?;

    match default_log_path() {
        Ok(path) => {
            if let Err(e) = TracingSubscriber::new()
                .rust_log_fallback("battle_snake=info")
                .to_file(path)
                .try_init()
            {
                eprintln!("Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    let mut store = FileHighScoreStore::open_default()?;
    let mut session = Session::new(config.clone(), store.load());
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::info!(version = %version_line(), ?seed, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, &mut session, &mut store, &mut rng);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "game loop failed");
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &GameConfig,
    session: &mut Session,
    store: &mut impl HighScoreStore,
    rng: &mut StdRng,
) -> io::Result<()> {
    let tick_interval = config.tick_interval();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, session))?;

        let timeout = tick_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press
                    && session.handle_input(map_key(key_event.code), rng)? == SessionFlow::Exit
                {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();
            let outcome = session.tick(rng)?;
            if let Some(finished) = outcome.finished {
                tracing::info!(
                    score = finished.score,
                    cause = ?finished.cause,
                    "match over"
                );
                if let Err(e) = store.record(finished.score) {
                    tracing::warn!(error = %e, "could not save high score");
                }
            }
        }
    }

    Ok(())
}

fn map_key(code: KeyCode) -> ControlInput {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => ControlInput::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            ControlInput::Move(Direction::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            ControlInput::Move(Direction::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            ControlInput::Move(Direction::Right)
        }
        KeyCode::Char(' ') => ControlInput::Pause,
        KeyCode::Char('c') | KeyCode::Char('C') => ControlInput::Resume,
        KeyCode::Char('r') | KeyCode::Char('R') => ControlInput::Restart,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ControlInput::Quit,
        _ => ControlInput::Other,
    }
}
