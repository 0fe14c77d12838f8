// Physic engine
pub mod physic_engine;
pub use physic_engine::config::SimConfig;
pub use physic_engine::{Firework, Particle, ParticleKind, SimulationState};

// Render engine
pub mod render_engine;
pub use render_engine::RenderSurface;
pub use render_engine::TerminalSurface;

// Scheduler de la boucle d'animation
pub mod scheduler;
pub use scheduler::{AnimationScheduler, LoopState};

// État de score (événements entrants du host)
pub mod score;
pub use score::{ScoreBoard, ScoreEvent};

// Simulateur (pilote de frames)
pub mod simulator;
pub use simulator::Simulator;
