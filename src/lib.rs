pub mod cs;

pub use cs::ecc::{self, LinearCode};
pub use cs::error::{Error, Result};
