mod component;
mod sequence;

pub use component::*;
pub use sequence::*;
