//! Owned handle over an open stream.
//!
//! The handle is created only inside the guarded boundary and carries the
//! capability set its mode granted. Reads and writes outside that set are
//! refused here rather than forwarded for the platform to reject with a
//! less specific signal.

use std::fs::File;
use std::io::{self, Read, Write};

use crate::config::{Buffering, Encoding, Newline, OpenConfig};
use crate::mode::{Framing, OpenMode};

/// An owned, open stream with its granted capability set.
///
/// Dropping the handle releases the stream; [`Handle::release`] does the
/// same explicitly. When the open request asked for
/// `close_on_release(false)` the underlying descriptor is left open for its
/// original owner instead of being closed.
#[derive(Debug)]
pub struct Handle {
    // Vacated only by consuming methods and Drop.
    file: Option<File>,
    mode: OpenMode,
    buffering: Buffering,
    encoding: Option<Encoding>,
    newline: Option<Newline>,
    close_on_release: bool,
}

impl Handle {
    pub(crate) fn new(file: File, mode: OpenMode, config: &OpenConfig) -> Self {
        Self {
            file: Some(file),
            mode,
            buffering: config.buffering(),
            encoding: config.encoding(),
            newline: config.newline(),
            close_on_release: config.close_on_release(),
        }
    }

    /// The mode this handle was granted.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Whether reads are within the granted capability set.
    pub fn is_readable(&self) -> bool {
        self.mode.reads()
    }

    /// Whether writes are within the granted capability set.
    pub fn is_writable(&self) -> bool {
        self.mode.writes()
    }

    /// The stream framing.
    pub fn framing(&self) -> Framing {
        self.mode.framing()
    }

    /// The buffering strategy the open request asked for.
    pub fn buffering(&self) -> Buffering {
        self.buffering
    }

    /// The declared text encoding, if any.
    pub fn encoding(&self) -> Option<Encoding> {
        self.encoding
    }

    /// The newline translation policy, if any.
    pub fn newline(&self) -> Option<Newline> {
        self.newline
    }

    /// Whether releasing this handle closes the underlying descriptor.
    pub fn closes_on_release(&self) -> bool {
        self.close_on_release
    }

    /// Explicitly release the handle.
    pub fn release(self) {}

    /// Unwrap the underlying stream, giving up the capability gating and
    /// the close-on-release behavior.
    pub fn into_file(mut self) -> File {
        self.file.take().expect("open handle always holds a stream")
    }

    fn stream_mut(&mut self) -> &mut File {
        self.file
            .as_mut()
            .expect("open handle always holds a stream")
    }
}

impl Read for Handle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.mode.reads() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "handle was not opened for reading",
            ));
        }
        self.stream_mut().read(buf)
    }
}

impl Write for Handle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.mode.writes() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "handle was not opened for writing",
            ));
        }
        self.stream_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.mode.writes() {
            return Ok(());
        }
        self.stream_mut().flush()
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        let Some(file) = self.file.take() else {
            return;
        };
        #[cfg(unix)]
        if !self.close_on_release {
            use std::os::fd::IntoRawFd;
            // Hand the descriptor back to its original owner unclosed.
            let _ = file.into_raw_fd();
            return;
        }
        drop(file);
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};

    use crate::config::OpenConfig;
    use crate::handle::Handle;
    use crate::mode::OpenMode;

    fn scratch_file() -> (tempfile::TempDir, std::fs::File) {
        let dir = tempfile::TempDir::new().unwrap();
        let file = std::fs::File::create(dir.path().join("scratch")).unwrap();
        (dir, file)
    }

    #[test]
    fn read_outside_the_granted_set_is_refused() {
        let (_dir, file) = scratch_file();
        let mut handle = Handle::new(file, OpenMode::write(), &OpenConfig::default());
        let mut buf = [0u8; 4];
        let err = handle.read(&mut buf).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Unsupported);
    }

    #[test]
    fn write_outside_the_granted_set_is_refused() {
        let (_dir, file) = scratch_file();
        let mut handle = Handle::new(file, OpenMode::read(), &OpenConfig::default());
        let err = handle.write(b"data").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Unsupported);
    }

    #[test]
    fn capability_queries_mirror_the_mode() {
        let (_dir, file) = scratch_file();
        let handle = Handle::new(file, OpenMode::append().update(), &OpenConfig::default());
        assert!(handle.is_readable());
        assert!(handle.is_writable());
        assert_eq!(handle.mode(), OpenMode::append().update());
    }
}
