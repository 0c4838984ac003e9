pub mod color;
pub mod options;

pub use color::{Lch, Rgb};
pub use options::ConversionOptions;
