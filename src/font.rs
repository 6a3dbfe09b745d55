//! Font face loading and single glyph rasterization.

use std::path::Path;

use fontdue::{Font, FontSettings};

/// Largest pixel size accepted; no GL texture gets bigger than this anyway.
pub const MAX_PIXEL_SIZE: f32 = 4096.0;

/// A rasterized glyph: one byte of coverage per pixel, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphBitmap {
    width: u32,
    rows: u32,
    buffer: Vec<u8>,
}

impl GlyphBitmap {
    /// Wraps raw coverage data. `buffer` must hold exactly `width * rows` bytes.
    pub fn new(width: u32, rows: u32, buffer: Vec<u8>) -> Result<Self, String> {
        let expected = width as usize * rows as usize;
        if buffer.len() != expected {
            return Err(format!(
                "Glyph bitmap of {}x{} needs {} bytes, got {}",
                width,
                rows,
                expected,
                buffer.len()
            ));
        }
        Ok(Self {
            width,
            rows,
            buffer,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// True when the glyph covers no pixels at all, e.g. a space.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows == 0
    }
}

/// A parsed font at one fixed pixel size.
pub struct FontFace {
    font: Font,
    pixel_size: f32,
}

impl FontFace {
    /// Reads and parses the font file at `path`.
    pub fn open(path: &Path, pixel_size: f32) -> Result<Self, String> {
        log::info!("Font path {} exists: {}", path.display(), path.exists());
        let bytes = std::fs::read(path)
            .map_err(|e| format!("Failed to read font {}: {}", path.display(), e))?;
        Self::from_bytes(bytes, pixel_size)
    }

    /// Parses an in-memory font file.
    pub fn from_bytes(bytes: Vec<u8>, pixel_size: f32) -> Result<Self, String> {
        if !(pixel_size.is_finite() && pixel_size > 0.0 && pixel_size <= MAX_PIXEL_SIZE) {
            return Err(format!("Invalid pixel size {pixel_size}"));
        }
        let settings = FontSettings {
            scale: pixel_size,
            ..FontSettings::default()
        };
        let font = Font::from_bytes(bytes, settings).map_err(|e| e.to_string())?;
        Ok(Self { font, pixel_size })
    }

    pub fn pixel_size(&self) -> f32 {
        self.pixel_size
    }

    /// Renders `ch` at the face's pixel size.
    ///
    /// Characters the font does not cover come out as the font's fallback glyph.
    pub fn rasterize(&self, ch: char) -> Result<GlyphBitmap, String> {
        if self.font.lookup_glyph_index(ch) == 0 {
            log::warn!("Font has no glyph for {ch:?}, using its fallback glyph");
        }
        let (metrics, buffer) = self.font.rasterize(ch, self.pixel_size);
        log::debug!(
            "Rasterized {:?} at {}px into {}x{}",
            ch,
            self.pixel_size,
            metrics.width,
            metrics.height
        );
        GlyphBitmap::new(metrics.width as u32, metrics.height as u32, buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_FONT: &[u8] = include_bytes!("assets/DejaVuSans.ttf");

    #[test]
    fn bitmap_checks_buffer_length() {
        assert!(GlyphBitmap::new(3, 2, vec![0; 6]).is_ok());
        let err = GlyphBitmap::new(3, 2, vec![0; 5]).unwrap_err();
        assert!(err.contains("needs 6 bytes, got 5"));
    }

    #[test]
    fn zero_area_bitmap_is_empty() {
        let space = GlyphBitmap::new(0, 0, Vec::new()).unwrap();
        assert!(space.is_empty());
        let line = GlyphBitmap::new(4, 0, Vec::new()).unwrap();
        assert!(line.is_empty());
        let dot = GlyphBitmap::new(1, 1, vec![255]).unwrap();
        assert!(!dot.is_empty());
        assert_eq!(dot.buffer(), &[255]);
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let path = std::env::temp_dir().join("glyph-playground-no-such-font.ttf");
        let err = FontFace::open(&path, 30.0).err().unwrap();
        assert!(err.starts_with("Failed to read font"));
    }

    #[test]
    fn garbage_bytes_are_not_a_font() {
        assert!(FontFace::from_bytes(b"definitely not a font".to_vec(), 30.0).is_err());
    }

    #[test]
    fn pixel_size_must_be_positive() {
        let err = FontFace::from_bytes(Vec::new(), 0.0).err().unwrap();
        assert!(err.starts_with("Invalid pixel size"));
        assert!(FontFace::from_bytes(Vec::new(), f32::NAN).is_err());
    }

    #[test]
    fn huge_pixel_size_is_rejected() {
        let err = FontFace::from_bytes(TEST_FONT.to_vec(), 1e9).err().unwrap();
        assert!(err.starts_with("Invalid pixel size"));
        assert!(FontFace::from_bytes(TEST_FONT.to_vec(), MAX_PIXEL_SIZE + 1.0).is_err());
    }

    #[test]
    fn letter_rasterizes_to_coverage() {
        let face = FontFace::from_bytes(TEST_FONT.to_vec(), 30.0).unwrap();
        assert_eq!(face.pixel_size(), 30.0);
        let glyph = face.rasterize('t').unwrap();
        assert!(!glyph.is_empty());
        assert_eq!(
            glyph.buffer().len(),
            glyph.width() as usize * glyph.rows() as usize
        );
        assert!(glyph.buffer().iter().any(|&c| c > 0));
    }

    #[test]
    fn space_rasterizes_empty() {
        let face = FontFace::from_bytes(TEST_FONT.to_vec(), 30.0).unwrap();
        assert!(face.rasterize(' ').unwrap().is_empty());
    }

    #[test]
    fn uncovered_char_uses_fallback_glyph() {
        let face = FontFace::from_bytes(TEST_FONT.to_vec(), 30.0).unwrap();
        let glyph = face.rasterize('\u{10FFFD}').unwrap();
        assert!(!glyph.is_empty());
    }
}
