//! Random colours for newly created labels.

use rand::Rng;

use crate::{ColorSource, LabelColor};

/// Draws each colour independently and uniformly from `000000..=ffffff`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomColorSource;

impl ColorSource for RandomColorSource {
    fn next_color(&self) -> LabelColor {
        let rgb = rand::thread_rng().gen_range(0..=LabelColor::MAX_RGB);
        LabelColor::from_rgb_masked(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_colors_are_six_hex_digits() {
        let source = RandomColorSource;
        for _ in 0..256 {
            let color = source.next_color();
            assert_eq!(color.as_str().len(), 6);
            assert!(color
                .as_str()
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
