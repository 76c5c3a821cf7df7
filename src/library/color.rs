//! Display colours for track cards.

/// An sRGB colour used to paint a track card and its waveform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TrackColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TrackColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A light pastel with a random hue (`hsl(h, 70%, 90%)`).
    pub fn random_pastel() -> Self {
        let hue = rand::random::<u16>() % 360;
        Self::pastel(hue)
    }

    /// The pastel for a fixed `hue` in degrees.
    pub fn pastel(hue: u16) -> Self {
        Self::from_hsl(f32::from(hue % 360), 0.70, 0.90)
    }

    /// Convert HSL (`h` in degrees, `s` and `l` in `0..=1`) to RGB.
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hp = (h.rem_euclid(360.0)) / 60.0;
        let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
        let (r1, g1, b1) = match hp as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(to_u8(r1), to_u8(g1), to_u8(b1))
    }

    /// Mix this colour toward `background`; `opacity` 1.0 keeps the colour as is.
    pub fn blend_over(self, background: TrackColor, opacity: f32) -> Self {
        let a = opacity.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| {
            (f32::from(fg) * a + f32::from(bg) * (1.0 - a))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

impl From<TrackColor> for ratatui::style::Color {
    fn from(c: TrackColor) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}
