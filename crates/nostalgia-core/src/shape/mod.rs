//! Deterministic shape generation.
//!
//! Every token a user types becomes one shape. The shape is a pure function
//! of `(token, index, category)`, so a stored session always renders the same
//! collage on every run and every device.
//!
//! - `seed`: the versioned seed construction and PRNG
//! - `generator`: digit draws mapped onto a `ShapeDescriptor`
//! - `collage`: all shapes for one session

mod collage;
mod generator;
mod seed;

pub use collage::{Collage, PlacedShape};
pub use generator::{ShapeDescriptor, ShapeGenerator, ShapeKind};
pub use seed::{Category, SeedScheme};
