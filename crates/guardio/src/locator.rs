//! Resource locator: a path or an already-acquired descriptor.

#[cfg(unix)]
use std::os::fd::OwnedFd;
use std::path::{Path, PathBuf};

/// Addressable reference to the resource an open request targets.
#[derive(Debug)]
pub enum Locator {
    /// A filesystem path, resolved by the platform open call.
    Path(PathBuf),
    /// An already-open descriptor, adopted as-is. The capability claim made
    /// by the accompanying mode is the caller's contract; adoption itself
    /// cannot fail at this layer.
    #[cfg(unix)]
    Fd(OwnedFd),
}

impl From<&str> for Locator {
    fn from(path: &str) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<String> for Locator {
    fn from(path: String) -> Self {
        Self::Path(PathBuf::from(path))
    }
}

impl From<&Path> for Locator {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for Locator {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

#[cfg(unix)]
impl From<OwnedFd> for Locator {
    fn from(fd: OwnedFd) -> Self {
        Self::Fd(fd)
    }
}
