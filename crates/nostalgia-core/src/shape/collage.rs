//! The full set of shapes for one session.

use super::generator::{ShapeDescriptor, ShapeGenerator};
use super::seed::Category;
use crate::session::Session;
use serde::Serialize;

/// A shape together with the token it was drawn from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedShape {
    pub category: Category,
    pub token: String,
    pub descriptor: ShapeDescriptor,
}

/// Ordered shapes: year tokens, then preferences, then topics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Collage {
    shapes: Vec<PlacedShape>,
}

impl Collage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every field of a stored session.
    pub fn from_session(generator: &ShapeGenerator, session: &Session) -> Self {
        let mut collage = Self::new();
        collage.add_field(generator, &session.year, Category::Year);
        collage.add_field(generator, &session.preferences, Category::Preferences);
        collage.add_field(generator, &session.topics, Category::Topics);
        collage
    }

    /// Adds the shapes for one field and returns them.
    pub fn add_field(
        &mut self,
        generator: &ShapeGenerator,
        field: &str,
        category: Category,
    ) -> Vec<PlacedShape> {
        let added: Vec<PlacedShape> = generator
            .generate_field(field, category)
            .into_iter()
            .map(|(token, descriptor)| PlacedShape {
                category,
                token,
                descriptor,
            })
            .collect();
        self.shapes.extend(added.iter().cloned());
        added
    }

    pub fn shapes(&self) -> &[PlacedShape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            year: "summer 2016".to_string(),
            preferences: "a,b".to_string(),
            topics: "dance".to_string(),
        }
    }

    #[test]
    fn test_from_session_order() {
        let collage = Collage::from_session(&ShapeGenerator::default(), &sample());
        let categories: Vec<Category> = collage.shapes().iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Year,
                Category::Year,
                Category::Preferences,
                Category::Preferences,
                Category::Topics,
            ]
        );
    }

    #[test]
    fn test_replay_reproduces_live_collage() {
        let generator = ShapeGenerator::default();
        let session = sample();

        let mut live = Collage::new();
        live.add_field(&generator, &session.year, Category::Year);
        live.add_field(&generator, &session.preferences, Category::Preferences);
        live.add_field(&generator, &session.topics, Category::Topics);

        assert_eq!(Collage::from_session(&generator, &session), live);
    }

    #[test]
    fn test_blank_session_has_one_shape_per_field() {
        let collage = Collage::from_session(&ShapeGenerator::default(), &Session::new());
        assert_eq!(collage.len(), 3);
    }
}
