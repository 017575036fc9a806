//! Value objects - immutable types that represent domain concepts

mod author;
mod email;

pub use author::PostAuthor;
pub use email::normalize_email;
