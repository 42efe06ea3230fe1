//! Value types shared by the sanitizers and the field registry.

mod color;

pub use color::Color;
