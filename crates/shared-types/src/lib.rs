pub mod admin;
pub mod error;
pub mod feature_flags;

pub use admin::*;
pub use error::*;
pub use feature_flags::*;
