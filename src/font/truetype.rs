use super::CaptionFont;
use ab_glyph::{Font, FontArc, FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// A TrueType/OpenType face rendered through imageproc.
pub struct TrueTypeFont {
    name: String,
    font: FontArc,
    scale: PxScale,
}

impl TrueTypeFont {
    /// Parse face `index` of `data`. Returns `None` when the bytes are not a
    /// usable font.
    pub fn from_bytes(data: Vec<u8>, index: u32, size: f32, name: &str) -> Option<Self> {
        let font = FontVec::try_from_vec_and_index(data, index).ok()?;
        let scale = em_scale(&font, size);
        Some(Self {
            name: name.to_string(),
            font: FontArc::new(font),
            scale,
        })
    }
}

/// ab_glyph scales by line height; convert an em size into that.
fn em_scale(font: &impl Font, size: f32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(size * font.height_unscaled() / units_per_em)
}

impl CaptionFont for TrueTypeFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&self, text: &str) -> (u32, u32) {
        text_size(self.scale, &self.font, text)
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str) {
        draw_text_mut(canvas, color, x, y, self.scale, &self.font, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::count_non_background;

    #[test]
    fn garbage_bytes_are_rejected() {
        assert!(TrueTypeFont::from_bytes(b"definitely not a font".to_vec(), 0, 18.0, "x").is_none());
    }

    #[test]
    fn empty_bytes_are_rejected() {
        assert!(TrueTypeFont::from_bytes(Vec::new(), 0, 18.0, "x").is_none());
    }

    // =========================================================================
    // Real face tests
    // =========================================================================

    const WHITE: [u8; 3] = [255, 255, 255];

    fn tuffy(size: f32) -> TrueTypeFont {
        let data = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/Tuffy.ttf"));
        TrueTypeFont::from_bytes(data.to_vec(), 0, size, "Tuffy.ttf").unwrap()
    }

    #[test]
    fn measure_grows_with_text_length() {
        let font = tuffy(18.0);
        let (short_w, short_h) = font.measure("a.jpg");
        let (long_w, long_h) = font.measure("a-much-longer-name.jpg");

        assert!(short_w > 0 && short_h > 0);
        assert!(long_w > short_w);
        assert_eq!(short_h, long_h);
    }

    #[test]
    fn em_size_sets_line_height() {
        // An 18px em with ascenders and descenders lands well inside 10..30px.
        let (_, height) = tuffy(18.0).measure("Hgjy");
        assert!((10..30).contains(&height), "height {height}");
        let (_, larger) = tuffy(36.0).measure("Hgjy");
        assert!(larger > height);
    }

    #[test]
    fn ink_stays_within_measured_box() {
        let font = tuffy(18.0);
        for text in ["cat.jpg", "jiffy_f.jpg", "WAVE_0001.PNG", "(g)"] {
            let (w, h) = font.measure(text);
            let mut canvas = RgbImage::from_pixel(w + 60, h + 60, Rgb(WHITE));
            let (x, y) = (20u32, 20u32);
            font.draw(&mut canvas, x as i32, y as i32, Rgb([0, 0, 0]), text);

            let total = count_non_background(&canvas, WHITE, (0, 0), canvas.dimensions());
            // Negative side bearings ('j') and rounding may ink one pixel
            // past the box; the 20px column gap absorbs that.
            let inside =
                count_non_background(&canvas, WHITE, (x - 1, y - 1), (x + w + 1, y + h + 1));
            assert!(total > 0, "{text}: nothing drawn");
            assert_eq!(inside, total, "{text}: ink outside {w}x{h} box");
        }
    }
}
