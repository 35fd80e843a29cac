pub mod mmap;
pub mod pairs;

pub use self::mmap::MmapFileHandler;
