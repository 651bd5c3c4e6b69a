//! Mapping from iteration counts to colors.

use mandelplane_core::Rgb;

/// Linear grayscale ramp.
///
/// - Points that never escaped (count == max_iterations) are black.
/// - Escaped points get floor(255 · count / max_iterations) on every channel.
///
/// A count of 0 is also black, so immediate escapes and interior points look
/// the same.
pub fn iterations_to_color(count: u32, max_iterations: u32) -> Rgb {
    if count >= max_iterations {
        return Rgb::BLACK;
    }

    let value = (255.0 * count as f64 / max_iterations as f64) as u8;
    Rgb::gray(value)
}

/// Available colorizers. Enum dispatch keeps the per-pixel call static.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ColorizerKind {
    #[default]
    Grayscale,
    Palette(Palette),
}

impl ColorizerKind {
    pub fn colorize(&self, count: u32, max_iterations: u32) -> Rgb {
        match self {
            Self::Grayscale => iterations_to_color(count, max_iterations),
            Self::Palette(palette) => palette.colorize(count, max_iterations),
        }
    }
}

/// Gradient of evenly spaced color stops, sampled by normalized iteration count.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    stops: Vec<Rgb>,
}

impl Palette {
    /// Build a palette from at least one stop. Returns `None` for an empty list.
    pub fn new(stops: Vec<Rgb>) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        Some(Self { stops })
    }

    /// Blue to gold ramp.
    pub fn classic() -> Self {
        Self {
            stops: vec![
                Rgb::new(0, 7, 100),
                Rgb::new(32, 107, 203),
                Rgb::new(237, 255, 255),
                Rgb::new(255, 170, 0),
                Rgb::new(0, 2, 0),
            ],
        }
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    fn colorize(&self, count: u32, max_iterations: u32) -> Rgb {
        if count >= max_iterations {
            return Rgb::BLACK;
        }
        if self.stops.len() == 1 {
            return self.stops[0];
        }

        let t = count as f64 / max_iterations as f64;
        let scaled = t * (self.stops.len() - 1) as f64;
        let index = (scaled.floor() as usize).min(self.stops.len() - 2);
        let frac = scaled - index as f64;

        let a = self.stops[index];
        let b = self.stops[index + 1];
        Rgb::new(lerp(a.r, b.r, frac), lerp(a.g, b.g, frac), lerp(a.b, b.b, frac))
    }
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_set_is_black() {
        assert_eq!(iterations_to_color(64, 64), Rgb::BLACK);
    }

    #[test]
    fn escaped_at_zero_is_black() {
        assert_eq!(iterations_to_color(0, 64), Rgb::BLACK);
    }

    #[test]
    fn escaped_halfway_is_gray() {
        // floor(255 * 32 / 64) = 127
        assert_eq!(iterations_to_color(32, 64), Rgb::gray(127));
    }

    #[test]
    fn escaped_just_before_max_is_near_white() {
        // floor(255 * 63 / 64) = 251
        assert_eq!(iterations_to_color(63, 64), Rgb::gray(251));
    }

    #[test]
    fn ramp_is_monotonic() {
        let mut previous = 0;
        for count in 0..64 {
            let value = iterations_to_color(count, 64).r;
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn default_colorizer_is_grayscale() {
        let colorizer = ColorizerKind::default();
        assert_eq!(colorizer, ColorizerKind::Grayscale);
        assert_eq!(colorizer.colorize(16, 64), iterations_to_color(16, 64));
    }

    #[test]
    fn palette_interior_is_black() {
        let colorizer = ColorizerKind::Palette(Palette::classic());
        assert_eq!(colorizer.colorize(64, 64), Rgb::BLACK);
    }

    #[test]
    fn palette_starts_at_first_stop() {
        let palette = Palette::classic();
        let colorizer = ColorizerKind::Palette(palette.clone());
        assert_eq!(colorizer.colorize(0, 64), palette.stops()[0]);
    }

    #[test]
    fn palette_interpolates_between_stops() {
        let palette = Palette::new(vec![Rgb::new(0, 0, 0), Rgb::new(200, 100, 50)]).unwrap();
        let colorizer = ColorizerKind::Palette(palette);
        assert_eq!(colorizer.colorize(50, 100), Rgb::new(100, 50, 25));
    }

    #[test]
    fn single_stop_palette_is_flat() {
        let palette = Palette::new(vec![Rgb::new(9, 8, 7)]).unwrap();
        let colorizer = ColorizerKind::Palette(palette);
        assert_eq!(colorizer.colorize(3, 10), Rgb::new(9, 8, 7));
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(Palette::new(Vec::new()).is_none());
    }
}
