//! Code ownership attribution over commit history.

pub(crate) mod blurb;
pub(crate) mod owner;

pub use blurb::{CodeFacetLanguage, CodeFacetOwner, ProjectStats, generate_bus_blurb};
pub use owner::{CodeOwner, UNKNOWN_OWNER, code_owner, code_owner_at};
