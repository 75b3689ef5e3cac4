pub mod error;
pub mod geometry;
pub mod math;
pub mod plot;
pub mod render;
pub mod session;
pub mod tessellation;

pub use error::{LinealisError, Result};
