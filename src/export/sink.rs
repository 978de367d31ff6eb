use async_trait::async_trait;
use rentdesk_render_core::RenderedFile;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Receives each finished export exactly once.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    async fn save(&self, file: RenderedFile) -> io::Result<()>;
}

/// Writes exports into a directory, creating it on first use.
///
/// Each file is written to `<name>.tmp` and renamed into place, so a failed
/// write leaves no partial export behind. Names must be bare file names.
#[derive(Debug, Clone)]
pub struct FilesystemSink {
    dir: PathBuf,
}

impl FilesystemSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl DownloadSink for FilesystemSink {
    async fn save(&self, file: RenderedFile) -> io::Result<()> {
        let name = bare_file_name(&file.file_name)?;
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!("{}.tmp", name));

        let written = match tokio::fs::write(&tmp, &file.bytes).await {
            Ok(()) => tokio::fs::rename(&tmp, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                log::debug!("Could not remove {}: {}", tmp.display(), cleanup);
            }
            return Err(e);
        }
        log::info!(
            "Saved {} ({} bytes, {})",
            path.display(),
            file.bytes.len(),
            file.mime_type
        );
        Ok(())
    }
}

fn bare_file_name(name: &str) -> io::Result<&str> {
    let path = Path::new(name);
    match path.file_name() {
        Some(file_name) if file_name == path.as_os_str() => Ok(name),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a plain file name", name),
        )),
    }
}

/// Keeps exports in memory; used by tests and embedding callers.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Mutex<Vec<RenderedFile>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> Vec<RenderedFile> {
        self.files
            .lock()
            .map(|files| files.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl DownloadSink for MemorySink {
    async fn save(&self, file: RenderedFile) -> io::Result<()> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| io::Error::other("memory sink lock poisoned"))?;
        files.push(file);
        Ok(())
    }
}
