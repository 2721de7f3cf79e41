pub mod fs;
pub mod reader;
pub mod writer;

pub use fs::resolve_files;
pub use reader::{FrontMatterReader, MAX_FILE_SIZE};
pub use writer::ArticleWriter;
