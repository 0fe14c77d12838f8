use std::io::{stdout, BufWriter, Stdout, Write};

use crate::physic_engine::types::Vec2;
use crate::render_engine::RenderSurface;

/// Surface de rendu terminal : un framebuffer RGB flottant, affiché en
/// demi-blocs ANSI (deux pixels par cellule, fond = pixel haut,
/// avant-plan = pixel bas).
pub struct TerminalSurface {
    width: usize,
    height: usize,
    pixels: Vec<[f32; 3]>,
    output_buf: Vec<u8>,
    out: BufWriter<Stdout>,
}

impl TerminalSurface {
    /// `cols`/`rows` en cellules terminal ; la hauteur pixel vaut `rows * 2`.
    pub fn new(cols: u16, rows: u16) -> Self {
        let width = cols as usize;
        let height = rows as usize * 2;
        Self {
            width,
            height,
            pixels: vec![[0.0; 3]; width * height],
            output_buf: Vec::with_capacity(width * height * 25),
            out: BufWriter::with_capacity(1024 * 64, stdout()),
        }
    }

    /// Réalloue le framebuffer après un redimensionnement du terminal.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.width = cols as usize;
        self.height = rows as usize * 2;
        self.pixels = vec![[0.0; 3]; self.width * self.height];
    }

    fn blend_pixel(&mut self, x: i32, y: i32, rgb: [f32; 3]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let px = &mut self.pixels[y as usize * self.width + x as usize];
        // Fusion additive plafonnée : le point le plus lumineux gagne.
        for c in 0..3 {
            px[c] = px[c].max(rgb[c]);
        }
    }
}

/// Teinte [0, 255) -> RGB [0, 1], saturation et luminosité pleines (mode HSB).
pub fn hue_to_rgb(hue: f32) -> [f32; 3] {
    let h = hue.rem_euclid(255.0) / 255.0 * 6.0;
    let f = h - h.floor();

    match h as u32 {
        0 => [1.0, f, 0.0],
        1 => [1.0 - f, 1.0, 0.0],
        2 => [0.0, 1.0, f],
        3 => [0.0, 1.0 - f, 1.0],
        4 => [f, 0.0, 1.0],
        _ => [1.0, 0.0, 1.0 - f],
    }
}

impl RenderSurface for TerminalSurface {
    fn bounds(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn fade(&mut self, alpha: f32) {
        let keep = (1.0 - alpha).clamp(0.0, 1.0);
        for px in &mut self.pixels {
            for c in px.iter_mut() {
                *c *= keep;
            }
        }
    }

    fn draw_point(&mut self, pos: Vec2, hue: f32, alpha: f32, weight: f32) {
        let [r, g, b] = hue_to_rgb(hue);
        let a = alpha.clamp(0.0, 1.0);
        let rgb = [r * a, g * a, b * a];

        let cx = pos.x.round() as i32;
        let cy = pos.y.round() as i32;
        // Épaisseur de trait -> rayon en pixels terminal (grossier) :
        // weight 2 = 1 pixel, weight 4 = bloc 3x3.
        let radius = weight as i32 / 4;

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                self.blend_pixel(cx + dx, cy + dy, rgb);
            }
        }
    }

    fn present(&mut self) -> anyhow::Result<()> {
        self.output_buf.clear();
        self.output_buf.extend_from_slice(b"\x1b[H");

        let mut prev_top: (u8, u8, u8) = (255, 255, 255);
        let mut prev_bot: (u8, u8, u8) = (255, 255, 255);

        for y in (0..self.height).step_by(2) {
            for x in 0..self.width {
                let to_u8 = |px: &[f32; 3]| {
                    (
                        (px[0].clamp(0.0, 1.0) * 255.0) as u8,
                        (px[1].clamp(0.0, 1.0) * 255.0) as u8,
                        (px[2].clamp(0.0, 1.0) * 255.0) as u8,
                    )
                };
                let top = to_u8(&self.pixels[y * self.width + x]);
                let bot = if y + 1 < self.height {
                    to_u8(&self.pixels[(y + 1) * self.width + x])
                } else {
                    top
                };

                if top != prev_top {
                    write!(self.output_buf, "\x1b[48;2;{};{};{}m", top.0, top.1, top.2)?;
                    prev_top = top;
                }
                if bot != prev_bot {
                    write!(self.output_buf, "\x1b[38;2;{};{};{}m", bot.0, bot.1, bot.2)?;
                    prev_bot = bot;
                }

                self.output_buf.extend_from_slice("▄".as_bytes());
            }
            self.output_buf.extend_from_slice(b"\x1b[0m");
            prev_top = (255, 255, 255);
            prev_bot = (255, 255, 255);
            if y + 2 < self.height {
                self.output_buf.extend_from_slice(b"\r\n");
            }
        }

        self.out.write_all(&self.output_buf)?;
        self.out.flush()?;
        Ok(())
    }
}
