//! Membership model: sampled universes and triangular curves.

pub mod triangular;
pub mod universe;

pub use triangular::TriangularMf;
pub use universe::Universe;
