//! Open-request configuration.
//!
//! Every field is optional and defaults to the platform behavior. The layer
//! records buffering and text-mode policy on the handle but implements
//! neither; buffering policy is explicitly out of scope.

use std::fmt;
use std::fs::File;
use std::io;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::error::{OpenError, OpenResult};
use crate::locator::Locator;
use crate::mode::{Framing, OpenMode};

/// Custom low-level opener callback: given the path and the validated mode,
/// produce the open stream itself.
pub type OpenerFn = dyn Fn(&Path, &OpenMode) -> io::Result<File> + Send + Sync;

/// Requested buffering strategy, recorded on the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Buffering {
    /// Platform default.
    Default,
    /// No buffering; only consistent with binary framing.
    Unbuffered,
    /// Flush on newline; only consistent with text framing.
    LineBuffered,
    /// Fixed buffer size in bytes.
    Size(NonZeroUsize),
}

/// Declared text encoding. Text framing only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// UTF-8 (the default when text framing is in effect).
    Utf8,
    /// 7-bit ASCII.
    Ascii,
    /// ISO-8859-1.
    Latin1,
}

/// Newline translation policy. Text framing only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Newline {
    /// Recognize any line ending on input, translate to the platform's on output.
    Universal,
    /// No translation in either direction.
    Raw,
    /// `\n` line endings.
    Lf,
    /// `\r` line endings.
    Cr,
    /// `\r\n` line endings.
    CrLf,
}

/// Optional configuration for an open request.
///
/// Built fluently; cross-validated against the mode and locator before the
/// acquisition attempt, so a handle is never produced from an inconsistent
/// request.
pub struct OpenConfig {
    buffering: Buffering,
    encoding: Option<Encoding>,
    newline: Option<Newline>,
    close_on_release: bool,
    opener: Option<Box<OpenerFn>>,
}

impl Default for OpenConfig {
    fn default() -> Self {
        Self {
            buffering: Buffering::Default,
            encoding: None,
            newline: None,
            close_on_release: true,
            opener: None,
        }
    }
}

impl fmt::Debug for OpenConfig {
    // The opener callback has no useful Debug form; render presence only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenConfig")
            .field("buffering", &self.buffering)
            .field("encoding", &self.encoding)
            .field("newline", &self.newline)
            .field("close_on_release", &self.close_on_release)
            .field("opener", &self.opener.is_some())
            .finish()
    }
}

impl OpenConfig {
    /// Configuration with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a buffering strategy.
    pub fn with_buffering(mut self, buffering: Buffering) -> Self {
        self.buffering = buffering;
        self
    }

    /// Declare the text encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = Some(encoding);
        self
    }

    /// Set the newline translation policy.
    pub fn with_newline(mut self, newline: Newline) -> Self {
        self.newline = Some(newline);
        self
    }

    /// Whether releasing the handle closes the underlying descriptor.
    ///
    /// `false` is only valid for descriptor locators: the descriptor's
    /// original owner keeps responsibility for closing it.
    pub fn with_close_on_release(mut self, close: bool) -> Self {
        self.close_on_release = close;
        self
    }

    /// Install a custom low-level opener, replacing the platform call.
    pub fn with_opener<F>(mut self, opener: F) -> Self
    where
        F: Fn(&Path, &OpenMode) -> io::Result<File> + Send + Sync + 'static,
    {
        self.opener = Some(Box::new(opener));
        self
    }

    /// The requested buffering strategy.
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

    /// Whether releasing the handle closes the underlying descriptor.
    pub fn close_on_release(&self) -> bool {
        self.close_on_release
    }

    pub(crate) fn opener_ref(&self) -> Option<&OpenerFn> {
        self.opener.as_deref()
    }

    /// Cross-validate the configuration against the mode and locator.
    ///
    /// Shape violations (a field that does not apply to the framing) are
    /// [`OpenError::TypeMismatch`]; mutually inconsistent values are
    /// [`OpenError::InvalidArgument`].
    pub(crate) fn validate(&self, mode: &OpenMode, locator: &Locator) -> OpenResult<()> {
        if mode.framing() == Framing::Binary {
            if self.encoding.is_some() {
                return Err(OpenError::type_mismatch(
                    "encoding applies to text framing only",
                ));
            }
            if self.newline.is_some() {
                return Err(OpenError::type_mismatch(
                    "newline policy applies to text framing only",
                ));
            }
            if self.buffering == Buffering::LineBuffered {
                return Err(OpenError::invalid_argument(
                    "line buffering is inconsistent with binary framing",
                ));
            }
        } else if self.buffering == Buffering::Unbuffered {
            return Err(OpenError::invalid_argument(
                "an unbuffered stream requires binary framing",
            ));
        }

        if !self.close_on_release && matches!(locator, Locator::Path(_)) {
            return Err(OpenError::invalid_argument(
                "close_on_release(false) requires a descriptor locator",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Buffering, Encoding, Newline, OpenConfig};
    use crate::error::OpenError;
    use crate::locator::Locator;
    use crate::mode::OpenMode;

    fn path_locator() -> Locator {
        Locator::from("some/path")
    }

    #[test]
    fn default_config_fits_any_mode() {
        let config = OpenConfig::default();
        for mode in [
            OpenMode::read(),
            OpenMode::write().binary(),
            OpenMode::append().update(),
        ] {
            assert!(config.validate(&mode, &path_locator()).is_ok());
        }
    }

    #[test]
    fn encoding_with_binary_framing_is_a_shape_violation() {
        let config = OpenConfig::new().with_encoding(Encoding::Utf8);
        let result = config.validate(&OpenMode::read().binary(), &path_locator());
        assert!(matches!(result, Err(OpenError::TypeMismatch { .. })));
    }

    #[test]
    fn newline_with_binary_framing_is_a_shape_violation() {
        let config = OpenConfig::new().with_newline(Newline::Universal);
        let result = config.validate(&OpenMode::write().binary(), &path_locator());
        assert!(matches!(result, Err(OpenError::TypeMismatch { .. })));
    }

    #[test]
    fn unbuffered_text_is_inconsistent() {
        let config = OpenConfig::new().with_buffering(Buffering::Unbuffered);
        let result = config.validate(&OpenMode::read(), &path_locator());
        assert!(matches!(result, Err(OpenError::InvalidArgument { .. })));
    }

    #[test]
    fn line_buffered_binary_is_inconsistent() {
        let config = OpenConfig::new().with_buffering(Buffering::LineBuffered);
        let result = config.validate(&OpenMode::read().binary(), &path_locator());
        assert!(matches!(result, Err(OpenError::InvalidArgument { .. })));
    }

    #[test]
    fn unbuffered_binary_is_fine() {
        let config = OpenConfig::new().with_buffering(Buffering::Unbuffered);
        assert!(
            config
                .validate(&OpenMode::read().binary(), &path_locator())
                .is_ok()
        );
    }

    #[test]
    fn keeping_a_path_descriptor_open_is_inconsistent() {
        let config = OpenConfig::new().with_close_on_release(false);
        let result = config.validate(&OpenMode::read(), &path_locator());
        assert!(matches!(result, Err(OpenError::InvalidArgument { .. })));
    }

    #[test]
    fn debug_reports_opener_presence_not_contents() {
        let config = OpenConfig::new().with_opener(|path, mode| {
            let _ = mode;
            std::fs::File::open(path)
        });
        let rendered = format!("{config:?}");
        assert!(rendered.contains("opener: true"));
    }
}
