//! Bond instruments.

mod bond;

pub use bond::{Bond, BondKind};
