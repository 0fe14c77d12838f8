use std::time::{Duration, Instant};

use log::{debug, info};

use crate::physic_engine::{config::SimConfig, types::Vec2, SimulationState};
use crate::render_engine::RenderSurface;
use crate::scheduler::{AnimationScheduler, LoopState};
use crate::score::{ScoreBoard, ScoreEvent};

const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Pilote de frames : relie la surface de rendu, la simulation, le
/// scheduler et l'état de score.
pub struct Simulator<S: RenderSurface> {
    surface: S,
    simulation: SimulationState,
    scheduler: AnimationScheduler,
    scoreboard: ScoreBoard,
    config: SimConfig,

    // Loop state
    frames: u64,
    last_log: Instant,
}

impl<S: RenderSurface> Simulator<S> {
    pub fn new(surface: S, config: SimConfig) -> Self {
        let bounds = surface.bounds();
        Self {
            surface,
            simulation: SimulationState::new(&config, bounds),
            scheduler: AnimationScheduler::new(),
            scoreboard: ScoreBoard::new(),
            config,
            frames: 0,
            last_log: Instant::now(),
        }
    }

    /// Injecte un message brut du host. Les messages invalides sont ignorés
    /// sans changement d'état ; un message valide relance la boucle.
    pub fn handle_message(&mut self, raw: &str) -> bool {
        match ScoreEvent::from_message(raw) {
            Some(event) => {
                info!(
                    "score received: {}/{} (perfect: {})",
                    event.score,
                    event.max_score,
                    event.score == event.max_score && event.max_score > 0
                );
                self.scoreboard.apply(event);
                self.scheduler.notify_score_event();
                true
            }
            None => {
                debug!("ignoring malformed or irrelevant message: {:?}", raw);
                false
            }
        }
    }

    /// Traite exactement une frame si le scheduler est en Running.
    ///
    /// Retourne `true` tant que la boucle doit continuer à être cadencée
    /// par le pilote externe, `false` une fois repassée en Idle.
    pub fn step(&mut self) -> anyhow::Result<bool> {
        if !self.scheduler.is_running() {
            return Ok(false);
        }

        // Voile sombre -> effet de traînée sur les frames précédentes
        self.surface.fade(self.config.trail_fade);

        self.simulation
            .spawn_if_triggered(self.scoreboard.is_perfect(), self.config.spawn_probability);
        let stats = self.simulation.tick(&mut self.surface);
        self.surface.present()?;

        let state = self
            .scheduler
            .frame_done(self.simulation.has_activity(), self.scoreboard.has_score());

        self.frames += 1;
        if self.last_log.elapsed() >= LOG_INTERVAL {
            debug!(
                "frame {}: {} fireworks, {} fragments",
                self.frames, stats.fireworks, stats.fragments
            );
            self.last_log = Instant::now();
        }

        Ok(state == LoopState::Running)
    }

    /// Propage un redimensionnement du canvas à la simulation.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.simulation.set_bounds(bounds);
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn scoreboard(&self) -> &ScoreBoard {
        &self.scoreboard
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn close(&mut self) {
        info!("closing simulator after {} frames", self.frames);
        self.surface.close();
    }
}
