mod animation;
mod component;
mod reveal;

pub use animation::*;
pub use component::*;
pub use reveal::*;
