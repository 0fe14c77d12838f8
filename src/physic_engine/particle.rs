use rand::Rng;

use crate::physic_engine::{config::SimConfig, types::Vec2};
use crate::render_engine::RenderSurface;

/// Durée de vie initiale d'un fragment (canal alpha au rendu).
pub const INITIAL_LIFESPAN: f32 = 255.0;
/// Décrément de durée de vie par frame (fragments uniquement).
pub const LIFESPAN_STEP: f32 = 4.0;
/// Facteur de friction appliqué aux fragments après explosion.
pub const DRAG: f32 = 0.9;
/// Borne supérieure (exclusive) de la teinte.
pub const HUE_MAX: f32 = 255.0;

const ROCKET_STROKE: f32 = 4.0;
const FRAGMENT_STROKE: f32 = 2.0;

/// Rôle d'une particule, fixé à la construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Fusée en phase de montée, pilotée par son `Firework`.
    Rocket,
    /// Débris post-explosion, à durée de vie finie.
    Fragment,
}

/// Un point mobile : position, vitesse, accélération cumulée et teinte.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub hue: f32,
    pub kind: ParticleKind,
    /// N'a de sens que pour `ParticleKind::Fragment`.
    pub lifespan: f32,
}

impl Particle {
    /// Crée la tête de fusée d'un feu d'artifice, avec une vitesse
    /// verticale initiale tirée dans `[rocket_min_speed, rocket_max_speed)`.
    pub fn rocket(pos: Vec2, hue: f32, cfg: &SimConfig, rng: &mut impl Rng) -> Self {
        let speed = rng.random_range(cfg.rocket_min_speed..cfg.rocket_max_speed);
        Self {
            pos,
            // Repère écran : -y = vers le haut
            vel: Vec2::new(0.0, -speed),
            acc: Vec2::ZERO,
            hue,
            kind: ParticleKind::Rocket,
            lifespan: INITIAL_LIFESPAN,
        }
    }

    /// Crée un fragment d'explosion : direction uniforme sur [0, 2π),
    /// vitesse tirée dans `[fragment_min_speed, fragment_max_speed)`.
    pub fn fragment(pos: Vec2, hue: f32, cfg: &SimConfig, rng: &mut impl Rng) -> Self {
        let angle = rng.random_range(0.0..(2.0 * std::f32::consts::PI));
        let speed = rng.random_range(cfg.fragment_min_speed..cfg.fragment_max_speed);
        Self {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            acc: Vec2::ZERO,
            hue,
            kind: ParticleKind::Fragment,
            lifespan: INITIAL_LIFESPAN,
        }
    }

    /// Accumule une force dans l'accélération (plusieurs forces par frame
    /// s'additionnent avant intégration).
    #[inline(always)]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    /// Intègre un pas de simulation.
    ///
    /// L'ordre est important : friction/décroissance d'abord (fragments),
    /// puis intégration, puis remise à zéro de l'accélération pour que les
    /// forces de cette frame ne fuient pas dans la suivante.
    pub fn update(&mut self) {
        if self.kind == ParticleKind::Fragment {
            self.vel *= DRAG;
            self.lifespan -= LIFESPAN_STEP;
        }

        self.vel += self.acc;
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
    }

    /// Dessine la particule. Ne modifie aucun état du modèle.
    pub fn render<S: RenderSurface>(&self, surface: &mut S) {
        match self.kind {
            ParticleKind::Rocket => {
                surface.draw_point(self.pos, self.hue, 1.0, ROCKET_STROKE);
            }
            ParticleKind::Fragment => {
                let alpha = (self.lifespan / INITIAL_LIFESPAN).clamp(0.0, 1.0);
                surface.draw_point(self.pos, self.hue, alpha, FRAGMENT_STROKE);
            }
        }
    }

    /// Une fusée n'expire jamais d'elle-même : elle est retirée par son
    /// `Firework` au moment de l'explosion.
    #[inline(always)]
    pub fn is_expired(&self) -> bool {
        self.kind == ParticleKind::Fragment && self.lifespan < 0.0
    }
}
