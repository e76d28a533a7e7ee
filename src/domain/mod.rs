//! Core domain types for Tembo

mod page;
mod scope;

pub use page::ResolvedPage;
pub use scope::{ScopeDefinition, ScopeRegistry};
