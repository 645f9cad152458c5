pub mod ecc;
pub mod error;

pub use ecc::{gf2, linear};
pub use error::{Error, Result};
