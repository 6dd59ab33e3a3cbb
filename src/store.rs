//! Line files on disk: category snapshots and plain read/write helpers.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::category::Category;
use crate::config::DataPaths;
use crate::error::{Error, Result};
use crate::lines::LineSet;

/// Ensure the data and lists directories exist.
pub fn ensure_dirs(paths: &DataPaths) -> Result<()> {
    fs::create_dir_all(&paths.lists_dir).map_err(|e| Error::io(&paths.lists_dir, e))
}

/// Read a UTF-8 file as lines, taken verbatim (no trimming).
pub fn read_lines(path: &Path) -> Result<LineSet> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(LineSet::from_lines(content.lines()))
}

/// Render lines with a trailing newline after each one.
pub fn render(lines: &LineSet) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Replace `path` with `lines` atomically: write a sibling temp file, then rename.
pub fn write_lines_atomic(path: &Path, lines: &LineSet) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(render(lines).as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}

/// Load a category snapshot; `MissingCategory` if it was never refreshed.
pub fn load_snapshot(paths: &DataPaths, category: Category) -> Result<LineSet> {
    let path = paths.snapshot(category);
    if !path.is_file() {
        return Err(Error::MissingCategory { category, path });
    }
    read_lines(&path)
}

/// Replace a category snapshot.
pub fn save_snapshot(paths: &DataPaths, category: Category, lines: &LineSet) -> Result<()> {
    let path = paths.snapshot(category);
    write_lines_atomic(&path, lines)?;
    tracing::debug!(%category, lines = lines.len(), path = %path.display(), "snapshot written");
    Ok(())
}
