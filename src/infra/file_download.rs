use crate::app::ports::DownloadPort;
use crate::error::{AdminError, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Saves downloads into a directory. The file handle is closed before returning.
pub struct FileDownload {
    output_dir: PathBuf,
}

impl FileDownload {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }
}

impl DownloadPort for FileDownload {
    fn trigger_download(&self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<String> {
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(AdminError::Config(format!("invalid download filename '{}'", filename)));
        }
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(filename);
        {
            let mut file = fs::File::create(&path)?;
            file.write_all(bytes)?;
            file.sync_all()?;
        }
        info!(path = %path.display(), mime_type, bytes = bytes.len(), "Download written");
        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bytes_under_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let download = FileDownload::new(dir.path().join("nested"));
        let location = download
            .trigger_download(b"abc", "players-2026-01-01.csv", "text/csv")
            .unwrap();
        assert!(location.ends_with("players-2026-01-01.csv"));
        assert_eq!(fs::read(&location).unwrap(), b"abc");
    }

    #[test]
    fn refuses_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let download = FileDownload::new(dir.path());
        assert!(download.trigger_download(b"x", "../evil.csv", "text/csv").is_err());
    }
}
