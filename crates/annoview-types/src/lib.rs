pub mod annotation;
pub mod error;
pub mod question;
pub mod raw;
mod util;

pub use annotation::*;
pub use error::{Error, Result};
pub use question::*;
pub use raw::*;
pub use util::*;
