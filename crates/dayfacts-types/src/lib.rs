pub mod date;
pub mod domain;
pub mod error;

pub use date::*;
pub use domain::*;
pub use error::{Error, Result};
