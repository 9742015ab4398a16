pub mod files;

pub use files::{read_file, write_file};
