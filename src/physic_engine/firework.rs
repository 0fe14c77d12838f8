#[cfg(debug_assertions)]
use log::debug;
use rand::Rng;

use crate::physic_engine::{
    config::SimConfig,
    particle::{Particle, HUE_MAX},
    types::Vec2,
};
use crate::render_engine::RenderSurface;

/// Un feu d'artifice : une fusée en montée, puis une gerbe de fragments.
#[derive(Debug, Clone)]
pub struct Firework {
    /// Teinte commune à la fusée et à tous ses fragments.
    pub hue: f32,
    pub rocket: Particle,
    pub exploded: bool,
    /// Vide tant que `exploded == false`.
    pub fragments: Vec<Particle>,
}

impl Firework {
    /// Tire une fusée depuis un point aléatoire du bord inférieur du canvas.
    pub fn new(cfg: &SimConfig, bounds: Vec2, rng: &mut impl Rng) -> Self {
        let hue = rng.random_range(0.0..HUE_MAX);
        let launch_pos = Vec2::new(rng.random_range(0.0..bounds.x), bounds.y);

        Self {
            hue,
            rocket: Particle::rocket(launch_pos, hue, cfg, rng),
            exploded: false,
            fragments: Vec::new(),
        }
    }

    /// Un pas de simulation : phase fusée (jusqu'à l'apogée), puis mise à
    /// jour et élagage des fragments expirés.
    pub fn update(&mut self, gravity: Vec2, cfg: &SimConfig, rng: &mut impl Rng) {
        if !self.exploded {
            self.rocket.apply_force(gravity);
            self.rocket.update();

            // Apogée : la vitesse verticale repasse à zéro ou positive
            // (la fusée retombe), on déclenche l'explosion.
            if self.rocket.vel.y >= 0.0 {
                self.explode(cfg, rng);
            }
        }

        // `retain_mut` retire en place sans sauter d'élément, équivalent
        // d'une itération inverse avec suppression.
        self.fragments.retain_mut(|p| {
            p.apply_force(gravity);
            p.update();
            !p.is_expired()
        });
    }

    /// Fait éclater la fusée en `fragments_per_explosion` fragments, tous à
    /// la position courante de la fusée et de la même teinte.
    pub fn explode(&mut self, cfg: &SimConfig, rng: &mut impl Rng) {
        self.exploded = true;

        #[cfg(debug_assertions)]
        debug!(
            "firework (hue {:.1}) exploding at {:?} into {} fragments",
            self.hue, self.rocket.pos, cfg.fragments_per_explosion
        );

        self.fragments.reserve(cfg.fragments_per_explosion);
        for _ in 0..cfg.fragments_per_explosion {
            self.fragments
                .push(Particle::fragment(self.rocket.pos, self.hue, cfg, rng));
        }
    }

    /// Dessine la fusée (tant qu'elle n'a pas explosé) et tous les fragments.
    pub fn render<S: RenderSurface>(&self, surface: &mut S) {
        if !self.exploded {
            self.rocket.render(surface);
        }

        for p in &self.fragments {
            p.render(surface);
        }
    }

    /// Terminé : la fusée a explosé et tous les fragments sont éteints.
    #[inline(always)]
    pub fn is_complete(&self) -> bool {
        self.exploded && self.fragments.is_empty()
    }
}
