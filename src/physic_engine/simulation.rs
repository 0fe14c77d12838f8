use log::debug;
use rand::Rng;

use crate::physic_engine::{
    config::SimConfig,
    firework::Firework,
    types::{FrameStats, Vec2},
};
use crate::render_engine::RenderSurface;

/// La collection vivante de feux d'artifice actifs.
///
/// Possédée par le pilote de la boucle de frames ; toute mutation passe par
/// `spawn_if_triggered` / `tick`, sur un seul thread.
#[derive(Debug)]
pub struct SimulationState {
    pub fireworks: Vec<Firework>,
    /// Constante partagée en lecture par toutes les particules à chaque frame.
    pub gravity: Vec2,
    bounds: Vec2,
    config: SimConfig,
    rng: rand::rngs::ThreadRng,
}

impl SimulationState {
    pub fn new(config: &SimConfig, bounds: Vec2) -> Self {
        Self {
            fireworks: Vec::new(),
            gravity: Vec2::new(0.0, config.gravity),
            bounds,
            config: config.clone(),
            rng: rand::rng(),
        }
    }

    /// Épreuve de Bernoulli par frame : quand la condition de célébration
    /// tient, tire dans [0,1) et lance une fusée sous `probability`.
    /// Plusieurs fusées peuvent donc être en vol simultanément.
    pub fn spawn_if_triggered(&mut self, trigger: bool, probability: f32) -> bool {
        if !trigger {
            return false;
        }
        if self.rng.random::<f32>() >= probability {
            return false;
        }

        let fw = Firework::new(&self.config, self.bounds, &mut self.rng);
        debug!(
            "spawning firework (hue {:.1}), {} now active",
            fw.hue,
            self.fireworks.len() + 1
        );
        self.fireworks.push(fw);
        true
    }

    /// Une frame complète : update + render de chaque feu d'artifice dans
    /// l'ordre d'insertion, puis retrait de ceux qui sont terminés.
    pub fn tick<S: RenderSurface>(&mut self, surface: &mut S) -> FrameStats {
        let mut fragments = 0;
        for fw in &mut self.fireworks {
            fw.update(self.gravity, &self.config, &mut self.rng);
            fw.render(surface);
            fragments += fw.fragments.len();
        }

        self.fireworks.retain(|fw| !fw.is_complete());

        FrameStats {
            fireworks: self.fireworks.len(),
            fragments,
        }
    }

    #[inline(always)]
    pub fn has_activity(&self) -> bool {
        !self.fireworks.is_empty()
    }

    /// Ajuste la taille du canvas (redimensionnement de la fenêtre) ; les
    /// fusées déjà en vol terminent leur trajectoire telle quelle.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }
}
