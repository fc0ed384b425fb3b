//! Caption fonts.
//!
//! The compositor only needs two things from a font: how wide a caption will
//! be, and a way to draw it. [`CaptionFont`] captures that, with two variants
//! chosen once per run by [`resolve`]:
//!
//! | Variant | Source | Honors `size` |
//! |---|---|---|
//! | [`TrueTypeFont`] | first loadable file from the configured name list | yes (pixels per em) |
//! | [`BuiltinFont`] | embedded 5x7 bitmap glyphs | approximately (integer scale) |
//!
//! ## Lookup
//!
//! Each name is tried first as a path relative to the working directory, then
//! against the file names of every font `fontdb` finds in the platform's
//! standard font directories. Resolution never fails; when no name loads the
//! builtin font is returned and a warning is logged.

mod builtin;
mod truetype;

pub use builtin::BuiltinFont;
pub use truetype::TrueTypeFont;

use fontdb::{Database, Source};
use image::{Rgb, RgbImage};
use std::path::Path;
use tracing::{debug, info, warn};

/// Text measurement and rendering for sheet captions.
pub trait CaptionFont {
    /// Human-readable identity, for logs.
    fn name(&self) -> &str;

    /// Rendered `(width, height)` of `text` in pixels.
    fn measure(&self, text: &str) -> (u32, u32);

    /// Draw `text` with its top-left corner at `(x, y)`. Pixels that fall
    /// outside the canvas are clipped.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, text: &str);
}

/// Resolve a caption font of `size` pixels per em from `names`, in order.
pub fn resolve(names: &[&str], size: f32) -> Box<dyn CaptionFont> {
    let mut db = None;
    for name in names {
        if let Some(font) = load_named(name, size, &mut db) {
            info!(font = font.name(), size, "resolved caption font");
            return Box::new(font);
        }
        debug!(font = *name, "caption font not found");
    }
    warn!(
        tried = ?names,
        "no caption font could be loaded; using the builtin bitmap font"
    );
    Box::new(BuiltinFont::new(size))
}

fn load_named(name: &str, size: f32, db: &mut Option<Database>) -> Option<TrueTypeFont> {
    let local = Path::new(name);
    if local.is_file() {
        if let Some(font) = std::fs::read(local)
            .ok()
            .and_then(|data| TrueTypeFont::from_bytes(data, 0, size, name))
        {
            return Some(font);
        }
    }

    // Scanning the system font directories is slow; do it at most once.
    let db = db.get_or_insert_with(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    });
    let id = db
        .faces()
        .find(|face| face_file_name(&face.source).is_some_and(|file| file == name))?
        .id;
    db.with_face_data(id, |data, index| {
        TrueTypeFont::from_bytes(data.to_vec(), index, size, name)
    })
    .flatten()
}

fn face_file_name(source: &Source) -> Option<&str> {
    match source {
        Source::File(path) | Source::SharedFile(path, _) => {
            path.file_name().and_then(|name| name.to_str())
        }
        Source::Binary(_) => None,
    }
}
