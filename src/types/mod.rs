//! Data types for the fixed-position layout engine.

mod column;
mod length;
mod position;
mod props;
mod rows;
mod scroll;

pub use column::*;
pub use length::*;
pub use position::*;
pub use props::*;
pub use rows::*;
pub use scroll::*;
