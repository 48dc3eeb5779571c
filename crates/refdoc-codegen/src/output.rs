//! Writing generated files to the output directory.
//!
//! Files are always overwritten. With atomic writes enabled (the default),
//! content goes to a temporary file in the same directory that is then
//! renamed over the target, so readers never observe a half-written page.
//! Both modes leave the same permissions behind: a new file gets the
//! umask-derived mode `fs::write` would give it, and an existing file keeps
//! its mode across the rename.
//!
//! # Examples
//!
//! ```
//! use refdoc_codegen::output::{OutputWriter, WriteOptions};
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let writer = OutputWriter::new(temp.path().join("docs/reference"), WriteOptions::default());
//! let path = writer.write("ora.md", "# `ora`\n").unwrap();
//! assert!(path.exists());
//! ```

use refdoc_core::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Options for writing generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename)
    pub atomic: bool,
}

impl WriteOptions {
    /// Creates options with defaults (atomic writes on).
    #[must_use]
    pub const fn new() -> Self {
        Self { atomic: true }
    }

    /// Sets whether to use atomic writes.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Writer rooted at one output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
    options: WriteOptions,
}

impl OutputWriter {
    /// Creates a writer for `dir`. Nothing is touched on disk yet.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, options: WriteOptions) -> Self {
        Self {
            dir: dir.into(),
            options,
        }
    }

    /// The output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the output directory and its parents if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be created.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::Io {
            path: self.dir.clone(),
            source,
        })
    }

    /// Writes `content` to `file_name` inside the output directory,
    /// creating the directory first if needed.
    ///
    /// Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory cannot be created or the file
    /// cannot be written.
    pub fn write(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.dir.join(file_name);
        write_file(&path, content, self.options)?;
        tracing::debug!("Wrote {} ({} bytes)", path.display(), content.len());
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str, options: WriteOptions) -> Result<()> {
    let io_err = |source: std::io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if !options.atomic {
        return fs::write(path, content).map_err(io_err);
    }

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    builder.prefix(".refdoc-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Open mode of `fs::write`; the umask still applies.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut temp = builder.tempfile_in(parent).map_err(io_err)?;
    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions).map_err(io_err)?;
    }
    temp.write_all(content.as_bytes()).map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;
    temp.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");
        let writer = OutputWriter::new(&dir, WriteOptions::default());

        writer.write("x.md", "x").unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_to_string(dir.join("x.md")).unwrap(), "x");
    }

    #[test]
    fn test_ensure_dir_idempotent() {
        let temp = TempDir::new().unwrap();
        let writer = OutputWriter::new(temp.path().join("out"), WriteOptions::default());
        writer.ensure_dir().unwrap();
        writer.ensure_dir().unwrap();
        assert!(writer.dir().is_dir());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ora.md"), "old content").unwrap();

        let writer = OutputWriter::new(temp.path(), WriteOptions::default());
        writer.write("ora.md", "new content").unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("ora.md")).unwrap(),
            "new content"
        );
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let writer = OutputWriter::new(temp.path(), WriteOptions::new().with_atomic_writes(true));
        writer.write("ora.md", "content").unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_non_atomic_write() {
        let temp = TempDir::new().unwrap();
        let writer = OutputWriter::new(temp.path(), WriteOptions::new().with_atomic_writes(false));
        let path = writer.write("gsea.md", "direct").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "direct");
    }

    #[cfg(unix)]
    fn mode_of(path: &Path) -> u32 {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_matches_direct_write_mode() {
        let atomic_dir = TempDir::new().unwrap();
        let direct_dir = TempDir::new().unwrap();

        let atomic = OutputWriter::new(atomic_dir.path(), WriteOptions::new().with_atomic_writes(true))
            .write("ora.md", "content")
            .unwrap();
        let direct = OutputWriter::new(direct_dir.path(), WriteOptions::new().with_atomic_writes(false))
            .write("ora.md", "content")
            .unwrap();

        assert_eq!(mode_of(&atomic), mode_of(&direct));
    }

    #[cfg(unix)]
    #[test]
    fn test_atomic_write_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gsea.md");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        OutputWriter::new(temp.path(), WriteOptions::default())
            .write("gsea.md", "new")
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(mode_of(&path), 0o640);
    }

    #[test]
    fn test_directory_blocked_by_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("out");
        fs::write(&blocker, "not a directory").unwrap();

        let writer = OutputWriter::new(&blocker, WriteOptions::default());
        let err = writer.write("x.md", "x").unwrap_err();
        assert!(err.is_io_error());
    }

    #[test]
    fn test_options_default() {
        assert!(WriteOptions::default().atomic);
    }
}
