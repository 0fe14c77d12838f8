pub use glam::Vec2;

// ------------------------
// FrameStats
// ------------------------
/// Compteurs produits par un tick de simulation (pour le logging).
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameStats {
    /// Nombre de feux d'artifice encore actifs après élagage.
    pub fireworks: usize,
    /// Nombre total de fragments vivants pendant le tick.
    pub fragments: usize,
}
