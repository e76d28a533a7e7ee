//! Tembo - a simple folder organiser for your work notes
//!
//! Tembo creates note pages from user-declared *scopes*. Each scope names a
//! directory pattern, a filename pattern, an extension and an optional
//! template. Patterns may contain tokens that are resolved when a page is
//! created:
//!
//! - `{d:<format>}` - the reference date, formatted with a strftime specifier
//! - `{inputN}`     - the N-th positional input given on the command line
//! - `{name}`       - the scope name
//!
//! ```yaml
//! base_path: ~/tembo
//! scopes:
//!   - name: meeting
//!     example: tembo new meeting $meeting_title
//!     path: "meetings/{d:%B_%y}"
//!     filename: "{d:%a_%d_%m_%y}-{input0}"
//!     extension: md
//!     template_filename: meeting.md.tpl
//! ```

pub mod config;
pub mod domain;
pub mod page;

pub use domain::*;
