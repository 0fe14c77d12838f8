pub mod types;
pub use self::types::{FrameStats, Vec2};

pub mod particle;
pub use self::particle::{Particle, ParticleKind};

pub mod firework;
pub use self::firework::Firework;

pub mod config;
pub use self::config::SimConfig;

pub mod simulation;
pub use self::simulation::SimulationState;
