pub mod catalog_files;
pub mod memory_store;

pub use catalog_files::*;
pub use memory_store::*;
