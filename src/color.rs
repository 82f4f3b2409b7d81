// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// Particles and lines carry their opacity separately as a float, so only the
// rgb channels end up in the css string.

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_u32(0xffffffff);
    pub const CYAN: Color = Color::from_u32(0x00f0ffff);
    // Faint purple used for connection lines
    pub const LINE: Color = Color::from_u32(0x6366f1ff);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Picks one of the two particle colors with equal odds
    pub fn random_particle<R: Rng + ?Sized>(rng: &mut R) -> Color {
        if rng.gen_bool(0.5) {
            Color::WHITE
        } else {
            Color::CYAN
        }
    }

    pub fn to_css(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}
