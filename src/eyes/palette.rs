use rand::{rngs::SmallRng, Rng};

use crate::graphics::{color, Argb};

pub const INITIAL_BACKGROUND: Argb = 0xFF_F2_C5_3D;
pub const INITIAL_PUPIL: Argb = color::BLACK;

/// The two global colors every hard bounce rerolls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Argb,
    pub pupil: Argb,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            background: INITIAL_BACKGROUND,
            pupil: INITIAL_PUPIL,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Background becomes a light pastel, pupils a dark gray.
    pub fn reroll(&mut self, rng: &mut SmallRng) {
        self.background = color::rgb(
            rng.gen_range(150..255),
            rng.gen_range(150..255),
            rng.gen_range(150..255),
        );
        self.pupil = color::gray(rng.gen_range(0..100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn reroll_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut palette = Palette::new();

        for _ in 0..200 {
            palette.reroll(&mut rng);

            let [_, r, g, b] = color::decompose(palette.background);
            assert!(r >= 150 && g >= 150 && b >= 150, "background is pastel");

            let [_, pr, pg, pb] = color::decompose(palette.pupil);
            assert_eq!(pr, pg);
            assert_eq!(pg, pb);
            assert!(pr < 100, "pupil gray stays dark");
        }
    }

    #[test]
    fn reset_restores_initial_colors() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut palette = Palette::new();

        palette.reroll(&mut rng);
        palette.reset();

        assert_eq!(palette, Palette::new());
    }
}
