//! ECS components shared by every domain
//!
//! - actor: identity and vitals (Fighter, Side, Health, Dead, PlayerControlled)
//! - movement: controller intent (FighterIntent)

pub mod actor;
pub mod movement;

pub use actor::*;
pub use movement::*;
