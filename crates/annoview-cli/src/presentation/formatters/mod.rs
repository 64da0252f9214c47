pub mod palette;
pub mod text;

pub use palette::Palette;
pub use text::{counted, fit, single_line};
