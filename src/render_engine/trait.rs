use crate::physic_engine::types::Vec2;

/// Surface de dessin 2D en mode immédiat exposée par l'hôte.
///
/// La surface conserve le contenu de la frame précédente : c'est le cœur
/// qui repeint un voile sombre à chaque frame (`fade`) pour produire les
/// traînées, jamais la surface elle-même.
pub trait RenderSurface {
    /// Taille du canvas en unités monde (largeur, hauteur).
    fn bounds(&self) -> Vec2;

    /// Repeint un voile noir d'opacité `alpha` sur toute la surface.
    fn fade(&mut self, alpha: f32);

    /// Dessine un point de teinte `hue` (plage [0, 255)), d'opacité `alpha`
    /// dans [0, 1] et d'épaisseur de trait `weight` en pixels.
    fn draw_point(&mut self, pos: Vec2, hue: f32, alpha: f32, weight: f32);

    /// Pousse la frame courante vers l'affichage.
    fn present(&mut self) -> anyhow::Result<()>;

    /// Libère la surface. Par défaut, fait rien.
    fn close(&mut self) {}
}
