#![allow(dead_code)]

use score_fireworks::physic_engine::types::Vec2;
use score_fireworks::render_engine::RenderSurface;

/// Un appel à `draw_point`, tel qu'enregistré par [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub pos: Vec2,
    pub hue: f32,
    pub alpha: f32,
    pub weight: f32,
}

/// Surface de rendu factice : enregistre les appels au lieu de dessiner.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub points: Vec<DrawCall>,
    pub fades: usize,
    pub presents: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for RecordingSurface {
    fn bounds(&self) -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    fn fade(&mut self, _alpha: f32) {
        self.fades += 1;
    }

    fn draw_point(&mut self, pos: Vec2, hue: f32, alpha: f32, weight: f32) {
        self.points.push(DrawCall {
            pos,
            hue,
            alpha,
            weight,
        });
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.presents += 1;
        Ok(())
    }
}

/// Surface muette pour les tests qui n'observent pas le rendu.
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn bounds(&self) -> Vec2 {
        Vec2::new(800.0, 600.0)
    }

    fn fade(&mut self, _alpha: f32) {}

    fn draw_point(&mut self, _pos: Vec2, _hue: f32, _alpha: f32, _weight: f32) {}

    fn present(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Message de score valide au format du host.
pub fn score_message(score: u32, max_score: u32) -> String {
    format!(
        r#"{{"type":"H5P_SCORE_RESULT","score":{},"maxScore":{}}}"#,
        score, max_score
    )
}
