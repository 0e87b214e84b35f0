//! Linear distance fog.
use raylib::prelude::Color;

/// Fog begins here (world units)...
pub const FOG_START: f32 = 300.0;
/// ...and is total here. Independent of the max ray distance.
pub const FOG_END: f32 = 700.0;

#[inline]
pub fn fog_factor(distance: f32) -> f32 {
    ((distance - FOG_START) / (FOG_END - FOG_START)).clamp(0.0, 1.0)
}

#[inline]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let f = |x: u8, y: u8| -> u8 { ((x as f32) * (1.0 - t) + (y as f32) * t) as u8 };
    Color::new(f(a.r, b.r), f(a.g, b.g), f(a.b, b.b), 255)
}

#[inline]
pub fn apply_fog(sample: Color, fog: Color, distance: f32) -> Color {
    lerp_color(sample, fog, fog_factor(distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOG: Color = Color::new(7, 7, 7, 255);

    #[test]
    fn factor_is_zero_before_start() {
        for d in [0.0, 1.0, 150.0, 299.9, 300.0] {
            assert_eq!(fog_factor(d), 0.0);
        }
    }

    #[test]
    fn factor_is_one_past_end() {
        for d in [700.0, 700.1, 1000.0, 1e6] {
            assert_eq!(fog_factor(d), 1.0);
        }
    }

    #[test]
    fn factor_is_linear_between() {
        assert!((fog_factor(400.0) - 0.25).abs() < 1e-6);
        assert!((fog_factor(500.0) - 0.5).abs() < 1e-6);
        assert!((fog_factor(600.0) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn ends_are_exact() {
        let c = Color::new(200, 120, 33, 255);
        assert_eq!(apply_fog(c, FOG, 0.0), c);
        assert_eq!(apply_fog(c, FOG, 700.0), FOG);
        assert_eq!(apply_fog(c, FOG, 5000.0), FOG);
    }

    #[test]
    fn midpoint_blends() {
        let c = Color::new(207, 107, 7, 255);
        let out = apply_fog(c, FOG, 500.0);
        assert_eq!(out, Color::new(107, 57, 7, 255));
    }
}
