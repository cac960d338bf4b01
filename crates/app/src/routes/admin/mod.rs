mod services;
mod snippets;

pub use services::{AdminServices, ServicesLoading};
pub use snippets::{AdminSnippets, SnippetDetail, SnippetsLoading};
