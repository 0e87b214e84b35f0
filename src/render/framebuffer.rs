use raylib::prelude::*;
use raylib::core::texture::RaylibTexture2D; // for .update_texture()

/// CPU color buffer. Writes outside the frame are ignored.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
        }
    }

    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.color_buffer[(y as u32 * self.width + x as u32) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            return self.color_buffer[(y as u32 * self.width + x as u32) as usize];
        }
        self.background_color
    }

    /// Fills rows `y0..y1` (clipped) with one color.
    pub fn fill_rows(&mut self, y0: i32, y1: i32, color: Color) {
        let y0 = y0.clamp(0, self.height as i32) as usize;
        let y1 = y1.clamp(0, self.height as i32) as usize;
        if y0 >= y1 {
            return;
        }
        let w = self.width as usize;
        self.color_buffer[y0 * w..y1 * w].fill(color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        for yy in y..y + h {
            for xx in x..x + w {
                self.set_pixel(xx, yy, color);
            }
        }
    }

    /// Uploads the pixels to a persistent texture of the same size.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        // Color is four u8 fields, so the buffer is already RGBA8.
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        let bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len)
        };
        let _ = tex.update_texture(bytes);
    }
}
