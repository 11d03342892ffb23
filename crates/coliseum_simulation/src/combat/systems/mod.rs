//! Combat systems

pub mod damage;
pub mod melee;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod damage_tests;

pub use damage::*;
pub use melee::*;
