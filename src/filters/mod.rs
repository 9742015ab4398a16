pub mod dedupe;

pub use dedupe::{count_duplicates, remove_duplicates};
