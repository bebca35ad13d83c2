use thiserror::Error;

/// Fixed filename of the newsletter CSV export.
pub const EXPORT_FILENAME: &str = "newsletter-subscribers.csv";

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser error: {0}")]
    Browser(String),
}

/// Hands a payload to the user as a file.
pub trait Downloader {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), DownloadError>;
}

/// Writes downloads into a directory on disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirectoryDownloader {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, filename: &str) -> std::path::PathBuf {
        self.dir.join(filename)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Downloader for DirectoryDownloader {
    fn save(&self, filename: &str, bytes: &[u8]) -> Result<(), DownloadError> {
        let path = self.path_for(filename);
        std::fs::write(&path, bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "download saved");
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn saves_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = DirectoryDownloader::new(dir.path());

        downloader.save(EXPORT_FILENAME, b"email\n").unwrap();

        let written = std::fs::read(dir.path().join(EXPORT_FILENAME)).unwrap();
        assert_eq!(written, b"email\n");
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = DirectoryDownloader::new(dir.path().join("nope"));

        let err = downloader.save(EXPORT_FILENAME, b"x").unwrap_err();
        assert!(matches!(err, DownloadError::Io(_)));
    }
}
