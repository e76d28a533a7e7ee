//! Token resolution and page materialization
//!
//! A scope's path, filename and template body are patterns mixing literal
//! text with `{d:<format>}`, `{inputN}` and `{name}` tokens. This module
//! expands them against a reference date and the user's positional inputs,
//! builds the page path and writes the rendered body to disk.

mod bind;
mod creator;
mod error;
mod expand;
mod path;
mod resolve;
mod template;
mod token;

pub use bind::bind;
pub use creator::{PageCreator, create_page, resolve_page};
pub use error::PageError;
pub use expand::expand;
pub use path::{expand_home, resolve_path, sanitize_filename};
pub use resolve::Resolution;
pub use template::{FsTemplateLoader, TemplateLoader, render};
pub use token::{Token, required_inputs, tokenize};
