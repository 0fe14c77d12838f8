use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SimConfig {
    /// Accélération verticale appliquée à chaque frame (repère écran, +y vers le bas).
    pub gravity: f32,

    /// Probabilité de tir d'une fusée par frame quand le score est parfait.
    pub spawn_probability: f32,
    pub fragments_per_explosion: usize,

    pub rocket_min_speed: f32,
    pub rocket_max_speed: f32,
    pub fragment_min_speed: f32,
    pub fragment_max_speed: f32,

    /// Opacité du voile noir repeint à chaque frame (effet de traînée).
    pub trail_fade: f32,
    pub target_fps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: 0.2,
            spawn_probability: 0.05,
            fragments_per_explosion: 100,
            rocket_min_speed: 8.0,
            rocket_max_speed: 12.0,
            fragment_min_speed: 2.0,
            fragment_max_speed: 10.0,
            trail_fade: 0.15,
            target_fps: 60,
        }
    }
}

impl SimConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
