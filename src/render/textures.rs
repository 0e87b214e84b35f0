//! Texture store: CPU pixmaps keyed by name, with clamped sampling.
use raylib::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use crate::error::TextureError;

/// Returned for any texture name the store does not know.
pub const FALLBACK_COLOR: Color = Color::WHITE;

const EXTENSIONS: &[&str] = &["png", "bmp", "jpg", "jpeg"];

/// An immutable CPU pixmap.
#[derive(Clone, Debug)]
pub struct Pixmap {
    w: u32,
    h: u32,
    px: Vec<Color>,
}

impl Pixmap {
    /// `px` must hold `w * h` colors, row-major.
    pub fn new(w: u32, h: u32, px: Vec<Color>) -> Self {
        debug_assert_eq!(px.len(), (w * h) as usize);
        Self { w: w.max(1), h: h.max(1), px }
    }

    /// Out-of-range coordinates snap to the nearest edge pixel.
    #[inline]
    pub fn sample(&self, x: i32, y: i32) -> Color {
        let xi = x.clamp(0, self.w as i32 - 1) as usize;
        let yi = y.clamp(0, self.h as i32 - 1) as usize;
        self.px.get(yi * self.w as usize + xi).copied().unwrap_or(FALLBACK_COLOR)
    }

    fn mean(&self) -> Color {
        if self.px.is_empty() {
            return FALLBACK_COLOR;
        }
        let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
        for c in &self.px {
            r += c.r as u64;
            g += c.g as u64;
            b += c.b as u64;
        }
        let n = self.px.len() as u64;
        Color::new((r / n) as u8, (g / n) as u8, (b / n) as u8, 255)
    }

    pub fn solid(w: u32, h: u32, color: Color) -> Self {
        Self::new(w, h, vec![color; (w * h) as usize])
    }

    pub fn checker(w: u32, h: u32, cell: u32, a: Color, b: Color) -> Self {
        let cell = cell.max(1);
        let mut px = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                px.push(if ((x / cell) + (y / cell)) % 2 == 0 { a } else { b });
            }
        }
        Self::new(w, h, px)
    }

    /// Running-bond brick pattern with mortar lines.
    pub fn brick(w: u32, h: u32, brick: Color, mortar: Color) -> Self {
        let row_h = (h / 4).max(2);
        let brick_w = (w / 2).max(2);
        let mut px = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            let row = y / row_h;
            let shift = if row % 2 == 0 { 0 } else { brick_w / 2 };
            for x in 0..w {
                let edge = y % row_h == 0 || (x + shift) % brick_w == 0;
                px.push(if edge { mortar } else { brick });
            }
        }
        Self::new(w, h, px)
    }

    /// Vertical bands, for telling faces apart.
    pub fn stripes(w: u32, h: u32, band: u32, a: Color, b: Color) -> Self {
        let band = band.max(1);
        let mut px = Vec::with_capacity((w * h) as usize);
        for _ in 0..h {
            for x in 0..w {
                px.push(if (x / band) % 2 == 0 { a } else { b });
            }
        }
        Self::new(w, h, px)
    }
}

struct Entry {
    pixmap: Pixmap,
    reference: Color,
}

/// Decoded textures; read-only while a frame renders.
#[derive(Default)]
pub struct TextureStore {
    maps: HashMap<String, Entry>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, pixmap: Pixmap) {
        let reference = pixmap.mean();
        self.maps.insert(name.into(), Entry { pixmap, reference });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.maps.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    pub fn size(&self, name: &str) -> Option<(u32, u32)> {
        self.maps.get(name).map(|e| (e.pixmap.w, e.pixmap.h))
    }

    pub fn pixmap(&self, name: &str) -> Option<&Pixmap> {
        self.maps.get(name).map(|e| &e.pixmap)
    }

    /// Point sample with clamped coordinates; unknown names give white.
    #[inline]
    pub fn get_color(&self, name: &str, x: i32, y: i32) -> Color {
        match self.maps.get(name) {
            Some(e) => e.pixmap.sample(x, y),
            None => FALLBACK_COLOR,
        }
    }

    /// Flat color standing in for the whole texture (its mean).
    pub fn reference_color(&self, name: &str) -> Color {
        self.maps.get(name).map_or(FALLBACK_COLOR, |e| e.reference)
    }

    /// Decodes one image file through raylib.
    pub fn load_file(&mut self, name: &str, path: &Path) -> Result<(), TextureError> {
        let path_str = path.to_str().ok_or_else(|| TextureError::NonUtf8Path(path.to_path_buf()))?;
        let img = Image::load_image(path_str).map_err(|source| TextureError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let w = img.width().max(1) as u32;
        let h = img.height().max(1) as u32;
        let data = img.get_image_data().to_vec();
        if data.len() != (w * h) as usize {
            return Err(TextureError::PixelCount {
                path: path.to_path_buf(),
                got: data.len(),
                expected: (w * h) as usize,
            });
        }
        self.insert(name, Pixmap::new(w, h, data));
        Ok(())
    }

    /// Loads every image in `dir`, keyed by file stem. Returns how many loaded.
    pub fn load_dir(&mut self, dir: &Path) -> std::io::Result<usize> {
        let mut loaded = 0;
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase());
            if !ext.is_some_and(|e| EXTENSIONS.contains(&e.as_str())) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()).map(str::to_owned) else {
                continue;
            };
            match self.load_file(&stem, &path) {
                Ok(()) => {
                    tracing::debug!(name = %stem, path = %path.display(), "texture loaded");
                    loaded += 1;
                }
                Err(err) => tracing::warn!(path = %path.display(), %err, "skipping texture"),
            }
        }
        tracing::info!(dir = %dir.display(), loaded, "texture directory scanned");
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient() -> Pixmap {
        // 4x2, red channel = x * 10, green = y * 100
        let mut px = Vec::new();
        for y in 0..2u8 {
            for x in 0..4u8 {
                px.push(Color::new(x * 10, y * 100, 0, 255));
            }
        }
        Pixmap::new(4, 2, px)
    }

    #[test]
    fn in_range_sample() {
        let mut s = TextureStore::new();
        s.insert("g", gradient());
        assert_eq!(s.get_color("g", 2, 1), Color::new(20, 100, 0, 255));
    }

    #[test]
    fn out_of_range_clamps_to_edge() {
        let mut s = TextureStore::new();
        s.insert("g", gradient());
        assert_eq!(s.get_color("g", -7, -1), Color::new(0, 0, 0, 255));
        assert_eq!(s.get_color("g", 99, 0), Color::new(30, 0, 0, 255));
        assert_eq!(s.get_color("g", 3, 50), Color::new(30, 100, 0, 255));
        assert_eq!(s.get_color("g", i32::MAX, i32::MIN), Color::new(30, 0, 0, 255));
    }

    #[test]
    fn missing_texture_is_white() {
        let s = TextureStore::new();
        assert_eq!(s.get_color("nope", 0, 0), Color::WHITE);
        assert_eq!(s.reference_color("nope"), Color::WHITE);
        assert_eq!(s.size("nope"), None);
    }

    #[test]
    fn reference_color_is_mean() {
        let mut s = TextureStore::new();
        s.insert("c", Pixmap::checker(8, 8, 1, Color::new(100, 0, 200, 255), Color::new(0, 100, 0, 255)));
        assert_eq!(s.reference_color("c"), Color::new(50, 50, 100, 255));
    }

    #[test]
    fn procedural_sizes() {
        let mut s = TextureStore::new();
        s.insert("b", Pixmap::brick(64, 64, Color::RED, Color::GRAY));
        s.insert("s", Pixmap::stripes(32, 16, 4, Color::RED, Color::BLUE));
        assert_eq!(s.size("b"), Some((64, 64)));
        assert_eq!(s.size("s"), Some((32, 16)));
        assert_eq!(s.get_color("s", 0, 0), Color::RED);
        assert_eq!(s.get_color("s", 4, 0), Color::BLUE);
        assert_eq!(s.get_color("b", 5, 0), Color::GRAY);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn pixmap_sample_matches_get_color() {
        let mut s = TextureStore::new();
        s.insert("g", gradient());
        let pm = s.pixmap("g").unwrap();
        for (x, y) in [(0, 0), (2, 1), (-3, 9), (40, -2)] {
            assert_eq!(pm.sample(x, y), s.get_color("g", x, y));
        }
        assert!(s.pixmap("nope").is_none());
    }

    #[test]
    fn undecodable_image_is_skipped() {
        let dir = std::env::temp_dir().join(format!("tilecaster-badtex-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("broken.png"), b"definitely not a png").unwrap();
        let mut s = TextureStore::new();
        assert_eq!(s.load_dir(&dir).unwrap(), 0);
        assert!(s.is_empty());
        let err = s.load_file("broken", &dir.join("broken.png")).unwrap_err();
        assert!(matches!(err, TextureError::Decode { .. }));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_dir_skips_non_images() {
        let dir = std::env::temp_dir().join(format!("tilecaster-tex-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("notes.txt"), "hello").unwrap();
        let mut s = TextureStore::new();
        assert_eq!(s.load_dir(&dir).unwrap(), 0);
        assert!(s.is_empty());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
