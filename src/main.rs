// Ici on importe depuis la crate lib complète
use std::io::stdout;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;

use score_fireworks::physic_engine::config::SimConfig;
use score_fireworks::render_engine::{RenderSurface, TerminalSurface};
use score_fireworks::score::ScoreBoard;
use score_fireworks::Simulator;

/// Fréquence de poll des événements clavier quand la boucle est suspendue.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Fabrique un message de score au format du host (même enveloppe JSON que
/// les notifications H5P réelles).
fn score_message(score: u32, max_score: u32) -> String {
    format!(
        r#"{{"type":"H5P_SCORE_RESULT","score":{},"maxScore":{}}}"#,
        score, max_score
    )
}

/// Ligne de statut textuelle (collaborateur d'affichage, hors cœur de
/// simulation) : texte et couleur selon le pourcentage.
fn draw_status(scoreboard: &ScoreBoard) -> std::io::Result<()> {
    let (text, color) = match scoreboard.percentage() {
        None => (
            "no score yet — press 0-9 for a score, p for a perfect one, q to quit".to_string(),
            Color::Grey,
        ),
        Some(_) if scoreboard.is_perfect() => (
            format!(
                "score {}/{} — perfect! 🎆",
                scoreboard.score(),
                scoreboard.max_score()
            ),
            Color::Cyan,
        ),
        Some(p) if p >= 90.0 => (
            format!(
                "score {}/{} ({:.0}%) — excellent",
                scoreboard.score(),
                scoreboard.max_score(),
                p
            ),
            Color::Green,
        ),
        Some(p) if p >= 60.0 => (
            format!(
                "score {}/{} ({:.0}%) — good, keep going",
                scoreboard.score(),
                scoreboard.max_score(),
                p
            ),
            Color::Yellow,
        ),
        Some(p) => (
            format!(
                "score {}/{} ({:.0}%) — needs work",
                scoreboard.score(),
                scoreboard.max_score(),
                p
            ),
            Color::Red,
        ),
    };

    execute!(
        stdout(),
        MoveTo(0, 0),
        SetForegroundColor(color),
        Print(text),
        ResetColor
    )
}

fn run(config: &SimConfig) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let surface = TerminalSurface::new(cols, rows);
    let mut simulator = Simulator::new(surface, config.clone());

    let frame_budget = Duration::from_secs_f32(1.0 / config.target_fps.max(1) as f32);

    loop {
        let frame_start = Instant::now();

        // En Idle, on bloque plus longtemps sur le poll : aucune frame
        // n'est traitée, c'est l'état économe en ressources.
        let timeout = if simulator.is_running() {
            Duration::from_millis(1)
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('p') => {
                        simulator.handle_message(&score_message(10, 10));
                        draw_status(simulator.scoreboard())?;
                    }
                    KeyCode::Char(c @ '0'..='9') => {
                        let n = c as u32 - '0' as u32;
                        simulator.handle_message(&score_message(n, 10));
                        draw_status(simulator.scoreboard())?;
                    }
                    _ => {}
                },
                Event::Resize(cols, rows) => {
                    simulator.surface_mut().resize(cols, rows);
                    let bounds = simulator.surface_mut().bounds();
                    simulator.set_bounds(bounds);
                    execute!(stdout(), Clear(ClearType::All))?;
                }
                _ => {}
            }
        }

        if simulator.is_running() {
            simulator.step()?;
            draw_status(simulator.scoreboard())?;

            let elapsed = frame_start.elapsed();
            if elapsed < frame_budget {
                thread::sleep(frame_budget - elapsed);
            }
        }
    }

    simulator.close();
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    info!("🎆 Starting score fireworks display...");

    // TODO: rendre le chemin de config paramétrable en argument CLI
    let config = SimConfig::from_file("assets/config/simulation.toml").unwrap_or_default();
    info!("Simulation config loaded:\n{:#?}", config);

    terminal::enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;

    let result = run(&config);

    execute!(stdout(), Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}
