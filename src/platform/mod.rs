//! Platform abstraction for the hosts file.

use std::fs;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::lines::LineSet;
use crate::store;

/// Trait for hosts file operations.
pub trait HostsFile: Send + Sync {
    /// Location of the hosts file.
    fn path(&self) -> &Path;
    /// Read every line of the hosts file.
    fn read(&self) -> Result<LineSet>;
    /// Overwrite the hosts file with `lines`.
    fn write(&self, lines: &LineSet) -> Result<()>;
}

/// OS hosts file location.
pub fn system_hosts_path() -> PathBuf {
    #[cfg(unix)]
    return PathBuf::from(unix::HOSTS_PATH);

    #[cfg(windows)]
    return PathBuf::from(windows::HOSTS_PATH);
}

/// Advice shown when the hosts file cannot be opened.
pub fn permission_hint() -> &'static str {
    #[cfg(unix)]
    return unix::PERMISSION_HINT;

    #[cfg(windows)]
    return windows::PERMISSION_HINT;
}

/// Get the hosts file to edit.
/// BLOCKHOSTS_HOSTS_FILE (e.g. in tests) wins over `hosts_file` in config, which wins over
/// the platform default.
pub fn default_hosts_file(config: &Config) -> Box<dyn HostsFile> {
    if let Ok(path) = std::env::var("BLOCKHOSTS_HOSTS_FILE") {
        return Box::new(FileHostsFile::new(path));
    }
    match &config.hosts_file {
        Some(path) => Box::new(FileHostsFile::new(path)),
        None => Box::new(FileHostsFile::new(system_hosts_path())),
    }
}

/// HostsFile backed by a plain file at the given path.
#[derive(Debug, Clone)]
pub struct FileHostsFile {
    path: PathBuf,
}

impl FileHostsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn inaccessible(&self, source: std::io::Error) -> Error {
        Error::HostsInaccessible {
            path: self.path.clone(),
            hint: permission_hint(),
            source,
        }
    }
}

impl HostsFile for FileHostsFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<LineSet> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.inaccessible(e))?;
        Ok(LineSet::from_lines(content.lines()))
    }

    fn write(&self, lines: &LineSet) -> Result<()> {
        let rendered = store::render(lines);
        // Open without truncating so a missing or read-only file is reported untouched.
        let mut file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(&self.path)
            .map_err(|e| self.inaccessible(e))?;
        fs2::FileExt::lock_exclusive(&file).map_err(|e| self.inaccessible(e))?;

        match self.replace(rendered.as_bytes()) {
            Ok(()) => Ok(()),
            Err(e) if needs_in_place(&e) => {
                tracing::debug!(
                    error = %e,
                    path = %self.path.display(),
                    "cannot replace hosts file, rewriting in place"
                );
                let mut original = Vec::new();
                file.read_to_end(&mut original).map_err(|e| self.inaccessible(e))?;
                overwrite_in_place(&mut file, &original, rendered.as_bytes())
                    .map_err(|e| Error::io(&self.path, e))
            }
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }
}

impl FileHostsFile {
    /// Write a sibling temp file with the original permissions and rename it over the
    /// hosts file.
    fn replace(&self, content: &[u8]) -> io::Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content)?;
        tmp.as_file().sync_all()?;
        fs::set_permissions(tmp.path(), fs::metadata(&self.path)?.permissions())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Rename is unavailable: unwritable directory, bind-mounted file, or file in use.
fn needs_in_place(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::PermissionDenied | ErrorKind::ResourceBusy | ErrorKind::CrossesDevices
    )
}

/// A file that can be truncated and rewritten through one handle.
trait Rewrite: Write + Seek {
    fn truncate(&mut self) -> io::Result<()>;
    fn sync(&mut self) -> io::Result<()>;
}

impl Rewrite for fs::File {
    fn truncate(&mut self) -> io::Result<()> {
        self.set_len(0)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

fn rewrite<F: Rewrite>(file: &mut F, content: &[u8]) -> io::Result<()> {
    file.truncate()?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(content)?;
    file.sync()
}

/// Overwrite `file` with `content`; on failure put `original` back.
fn overwrite_in_place<F: Rewrite>(
    file: &mut F,
    original: &[u8],
    content: &[u8],
) -> io::Result<()> {
    if let Err(e) = rewrite(file, content) {
        if let Err(restore) = rewrite(file, original) {
            tracing::error!(error = %restore, "could not restore original hosts content");
        }
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory file that refuses to grow past `limit` bytes.
    struct LimitedFile {
        data: Vec<u8>,
        pos: usize,
        limit: usize,
    }

    impl Write for LimitedFile {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.pos >= self.limit {
                return Err(io::Error::other("file too large"));
            }
            let n = buf.len().min(self.limit - self.pos);
            let end = self.pos + n;
            if self.data.len() < end {
                self.data.resize(end, 0);
            }
            self.data[self.pos..end].copy_from_slice(&buf[..n]);
            self.pos = end;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Seek for LimitedFile {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            self.pos = match pos {
                SeekFrom::Start(n) => n as usize,
                SeekFrom::End(n) => (self.data.len() as i64 + n) as usize,
                SeekFrom::Current(n) => (self.pos as i64 + n) as usize,
            };
            Ok(self.pos as u64)
        }
    }

    impl Rewrite for LimitedFile {
        fn truncate(&mut self) -> io::Result<()> {
            self.data.clear();
            Ok(())
        }

        fn sync(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    const ORIGINAL: &[u8] = b"127.0.0.1 localhost\n";

    #[test]
    fn failed_rewrite_restores_original() {
        let mut file = LimitedFile {
            data: ORIGINAL.to_vec(),
            pos: 0,
            limit: 32,
        };
        let content = b"127.0.0.1 localhost\n0.0.0.0 ads.example.com\n0.0.0.0 track.example.com\n";

        let err = overwrite_in_place(&mut file, ORIGINAL, content).unwrap_err();
        assert_eq!(err.to_string(), "file too large");
        assert_eq!(file.data, ORIGINAL);
    }

    #[test]
    fn rewrite_within_limit_replaces_content() {
        let mut file = LimitedFile {
            data: ORIGINAL.to_vec(),
            pos: 0,
            limit: 1024,
        };
        overwrite_in_place(&mut file, ORIGINAL, b"a\n").unwrap();
        assert_eq!(file.data, b"a\n");
    }

    #[cfg(unix)]
    #[test]
    fn replace_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hosts");
        fs::write(&path, ORIGINAL).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        let hosts = FileHostsFile::new(&path);
        hosts.write(&LineSet::from_lines(["a", "b"])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
