//! Shape descriptor generation.

use super::seed::{Category, SeedScheme};
use crate::config::DEFAULT_BALL_SIZE;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound (exclusive) of the digit draw: nine decimal digits.
const DIGIT_SPACE: u32 = 1_000_000_000;

/// The two shape categories. The kind digit's lower half is `Round`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Round,
    RoundedSquare,
}

impl ShapeKind {
    fn from_digit(digit: u32) -> Self {
        if digit < 5 {
            Self::Round
        } else {
            Self::RoundedSquare
        }
    }

    /// CSS border radius for the kind.
    pub fn border_radius(&self) -> &'static str {
        match self {
            Self::Round => "50%",
            Self::RoundedSquare => "5px",
        }
    }
}

/// Where and how one token is drawn inside the collage.
///
/// Offsets and size are in em relative to the collage's top-left corner;
/// rotation is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub offset_x: f64,
    pub offset_y: f64,
    pub size: f64,
    pub rotation: f64,
}

/// Builds shape descriptors for a collage of a given size.
#[derive(Debug, Clone, Copy)]
pub struct ShapeGenerator {
    ball_size: f64,
    scheme: SeedScheme,
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BALL_SIZE)
    }
}

impl ShapeGenerator {
    /// Creates a generator for a collage `ball_size` em across.
    pub fn new(ball_size: f64) -> Self {
        Self {
            ball_size,
            scheme: SeedScheme::default(),
        }
    }

    pub fn ball_size(&self) -> f64 {
        self.ball_size
    }

    /// Em per position step: positions range over 0..=999 steps.
    fn position_step(&self) -> f64 {
        (self.ball_size * 0.70) / 999.0 - 0.02 / 999.0 + (self.ball_size * 0.17) / 999.0
    }

    /// The nine-digit value behind a token's shape.
    fn draw(&self, token: &str, index: usize, category: Category) -> u32 {
        let mut rng = self.scheme.rng(token, index, category);
        let _reserved = rng.next_u64();
        rng.gen_range(0..DIGIT_SPACE)
    }

    /// Generates the descriptor for one token.
    ///
    /// The first draw of the stream is reserved and discarded; the second is
    /// a nine-digit number `d0..d8` whose digits pick the kind (`d0`), the
    /// offsets (`d1d2d3`, `d4d5d6`) and the size and rotation (`d7`).
    pub fn generate(&self, token: &str, index: usize, category: Category) -> ShapeDescriptor {
        let value = self.draw(token, index, category);

        let kind_digit = value / 100_000_000;
        let x_digits = (value / 100_000) % 1000;
        let y_digits = (value / 100) % 1000;
        let scale_digit = (value / 10) % 10;

        let step = self.position_step();
        let descriptor = ShapeDescriptor {
            kind: ShapeKind::from_digit(kind_digit),
            offset_x: f64::from(x_digits) * step + 0.01 / 999.0,
            offset_y: f64::from(y_digits) * step + 0.01 / 999.0,
            size: 0.5 * f64::from(scale_digit) + 0.5,
            rotation: f64::from(scale_digit) * 50.0 - 100.0,
        };

        debug!(
            token,
            index,
            category = %category,
            value,
            "generated shape"
        );
        descriptor
    }

    /// Splits a raw field on its category's separator and generates one
    /// descriptor per token.
    ///
    /// Each token is seeded with the index of its first occurrence, so repeated
    /// tokens draw identical shapes. An empty field still yields one shape
    /// for the empty token.
    pub fn generate_field(&self, field: &str, category: Category) -> Vec<(String, ShapeDescriptor)> {
        let tokens: Vec<&str> = field.split(category.separator()).collect();
        if field.is_empty() {
            debug!(category = %category, "empty field, using a single empty token");
        }

        tokens
            .iter()
            .map(|token| {
                let index = tokens.iter().position(|t| t == token).unwrap_or(0);
                (token.to_string(), self.generate(token, index, category))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let generator = ShapeGenerator::default();
        let first = generator.generate("1995", 0, Category::Year);
        for _ in 0..100 {
            assert_eq!(generator.generate("1995", 0, Category::Year), first);
        }
    }

    #[test]
    fn test_known_streams_are_pinned() {
        // Saved collages are redrawn from these streams; they must never drift.
        let generator = ShapeGenerator::new(10.0);

        assert_eq!(generator.draw("1995", 0, Category::Year), 533_091_687);
        assert_eq!(
            generator.generate("1995", 0, Category::Year),
            ShapeDescriptor {
                kind: ShapeKind::RoundedSquare,
                offset_x: 2.8672772772772777,
                offset_y: 7.95884884884885,
                size: 4.5,
                rotation: 300.0,
            }
        );

        assert_eq!(generator.draw("mrbeast", 1, Category::Preferences), 661_755_169);
        assert_eq!(
            generator.generate("mrbeast", 1, Category::Preferences),
            ShapeDescriptor {
                kind: ShapeKind::RoundedSquare,
                offset_x: 5.360930930930931,
                offset_y: 4.787477477477478,
                size: 3.5,
                rotation: 200.0,
            }
        );

        assert_eq!(generator.draw("", 0, Category::Topics), 786_347_056);
        assert_eq!(
            generator.generate("", 0, Category::Topics),
            ShapeDescriptor {
                kind: ShapeKind::RoundedSquare,
                offset_x: 7.498348348348349,
                offset_y: 4.083693693693694,
                size: 3.0,
                rotation: 150.0,
            }
        );
    }

    #[test]
    fn test_independent_generators_agree() {
        let a = ShapeGenerator::new(10.0).generate("vine", 2, Category::Topics);
        let b = ShapeGenerator::new(10.0).generate("vine", 2, Category::Topics);
        assert_eq!(a, b);
    }

    #[test]
    fn test_descriptor_bounds() {
        let generator = ShapeGenerator::default();
        let max_offset = 999.0 * generator.position_step() + 0.01 / 999.0;

        for i in 0..200 {
            let shape = generator.generate(&format!("token{}", i), i % 5, Category::Preferences);
            assert!((0.5..=5.0).contains(&shape.size));
            assert!((-100.0..=350.0).contains(&shape.rotation));
            assert!(shape.offset_x >= 0.0 && shape.offset_x <= max_offset);
            assert!(shape.offset_y >= 0.0 && shape.offset_y <= max_offset);
            // Size and rotation come from the same digit
            assert_eq!((shape.size - 0.5) * 100.0 - 100.0, shape.rotation);
        }
    }

    #[test]
    fn test_both_kinds_occur() {
        let generator = ShapeGenerator::default();
        let kinds: Vec<ShapeKind> = (0..64)
            .map(|i| generator.generate(&i.to_string(), 0, Category::Topics).kind)
            .collect();
        assert!(kinds.contains(&ShapeKind::Round));
        assert!(kinds.contains(&ShapeKind::RoundedSquare));
    }

    #[test]
    fn test_category_changes_shape() {
        let generator = ShapeGenerator::default();
        assert_ne!(
            generator.generate("x", 0, Category::Preferences),
            generator.generate("x", 0, Category::Topics)
        );
    }

    #[test]
    fn test_ball_size_scales_offsets_only() {
        let small = ShapeGenerator::new(10.0).generate("1987", 0, Category::Year);
        let large = ShapeGenerator::new(20.0).generate("1987", 0, Category::Year);
        assert_eq!(small.kind, large.kind);
        assert_eq!(small.size, large.size);
        assert_eq!(small.rotation, large.rotation);
        assert!(large.offset_x >= small.offset_x);
    }

    #[test]
    fn test_empty_field_yields_one_shape() {
        let generator = ShapeGenerator::default();
        let shapes = generator.generate_field("", Category::Topics);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].0, "");
        assert_eq!(shapes[0].1, generator.generate("", 0, Category::Topics));
    }

    #[test]
    fn test_field_split_and_duplicate_index() {
        let generator = ShapeGenerator::default();
        let shapes = generator.generate_field("a,b,a", Category::Preferences);
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[1].1, generator.generate("b", 1, Category::Preferences));
        // The repeated token reuses the first occurrence's index
        assert_eq!(shapes[2].1, shapes[0].1);
    }

    #[test]
    fn test_year_splits_on_space() {
        let generator = ShapeGenerator::default();
        let shapes = generator.generate_field("summer 2012", Category::Year);
        let tokens: Vec<&str> = shapes.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(tokens, vec!["summer", "2012"]);
    }

    #[test]
    fn test_border_radius() {
        assert_eq!(ShapeKind::Round.border_radius(), "50%");
        assert_eq!(ShapeKind::RoundedSquare.border_radius(), "5px");
    }
}
