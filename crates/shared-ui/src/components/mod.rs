pub mod lazy_section;
pub mod page_progress;
pub mod skeleton;

// Re-exports for convenience
pub use lazy_section::*;
pub use page_progress::*;
pub use skeleton::*;
