//! Tool subcommands

mod rotate;
mod variants;

pub use rotate::{DirectionArg, Rotate};
pub use variants::Variants;
