pub mod color;
pub mod error;
pub mod font;
pub mod named;
mod helpers;

pub use color::Color;
pub use error::{Error, Result};
pub use font::{Font, FontStyle};
