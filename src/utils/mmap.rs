use std::fs::File;
use std::path::{Path, PathBuf};
use memmap2::Mmap;
use log::debug;
use crate::error::{Error, Result};

/// Read-only view of a document on disk.
pub struct MmapFileHandler {
    // None for zero-length files, which cannot be mapped portably
    mapped_file: Option<Mmap>,
    file_size: usize,
    file_path: PathBuf,
}

impl MmapFileHandler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let file = File::open(&file_path)
            .map_err(|e| Error::file_access(&file_path, e))?;
        let file_size = file.metadata()
            .map_err(|e| Error::file_access(&file_path, e))?
            .len() as usize;

        let mapped_file = if file_size == 0 {
            None
        } else {
            // The mapping is read-only and dropped with the handler
            let mapped = unsafe { Mmap::map(&file) }
                .map_err(|e| Error::file_access(&file_path, e))?;
            Some(mapped)
        };

        debug!("Opened {:?} ({} bytes)", file_path, file_size);

        Ok(Self {
            mapped_file,
            file_size,
            file_path,
        })
    }

    /// Get a reference to the entire file content
    pub fn get_content(&self) -> &[u8] {
        self.mapped_file.as_deref().unwrap_or(&[])
    }

    pub fn get_size(&self) -> usize {
        self.file_size
    }

    pub fn get_path(&self) -> &Path {
        &self.file_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn maps_file_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("نص قصير".as_bytes()).unwrap();
        file.flush().unwrap();

        let handler = MmapFileHandler::open(file.path()).unwrap();
        assert_eq!(handler.get_content(), "نص قصير".as_bytes());
        assert_eq!(handler.get_size(), "نص قصير".len());
        assert_eq!(handler.get_path(), file.path());
    }

    #[test]
    fn empty_file_gives_empty_slice() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let handler = MmapFileHandler::open(file.path()).unwrap();
        assert!(handler.get_content().is_empty());
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = MmapFileHandler::open(dir.path().join("absent.txt")).err().unwrap();
        assert!(matches!(err, Error::FileAccess { .. }));
    }
}
