//! Structured open mode.
//!
//! The loose `"r"` / `"w+b"` mode string is redesigned as a combination of
//! independent parts validated at construction: an access direction, an
//! optional update flag, and text/binary framing. Invalid combinations are
//! unrepresentable; the string surface survives only as a [`FromStr`]
//! convenience for callers porting string-based call sites.

use std::fmt;
use std::fs::OpenOptions;
use std::str::FromStr;

use crate::error::OpenError;

/// Primary access direction of an open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Access {
    /// Read an existing resource (`r`).
    Read,
    /// Write, creating the resource if missing and truncating it otherwise (`w`).
    Write,
    /// Write at the end, creating the resource if missing (`a`).
    Append,
    /// Create exclusively; fail if the resource already exists (`x`).
    CreateNew,
}

/// Text or binary framing of the opened stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Framing {
    /// Text framing; encoding and newline policy apply.
    Text,
    /// Raw byte framing.
    Binary,
}

/// A validated open mode: access direction × update flag × framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenMode {
    access: Access,
    update: bool,
    framing: Framing,
}

impl OpenMode {
    fn new(access: Access) -> Self {
        Self {
            access,
            update: false,
            framing: Framing::Text,
        }
    }

    /// Read-only mode (`r`).
    pub fn read() -> Self {
        Self::new(Access::Read)
    }

    /// Write mode with create + truncate (`w`).
    pub fn write() -> Self {
        Self::new(Access::Write)
    }

    /// Append mode with create (`a`).
    pub fn append() -> Self {
        Self::new(Access::Append)
    }

    /// Exclusive-create write mode (`x`).
    pub fn create_new() -> Self {
        Self::new(Access::CreateNew)
    }

    /// Add the complementary direction (`+`).
    pub fn update(mut self) -> Self {
        self.update = true;
        self
    }

    /// Switch to raw byte framing (`b`).
    pub fn binary(mut self) -> Self {
        self.framing = Framing::Binary;
        self
    }

    /// Switch to text framing (`t`, the default).
    pub fn text(mut self) -> Self {
        self.framing = Framing::Text;
        self
    }

    /// The primary access direction.
    pub fn access(&self) -> Access {
        self.access
    }

    /// The stream framing.
    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// Whether a handle granted this mode may be read from.
    pub fn reads(&self) -> bool {
        self.update || matches!(self.access, Access::Read)
    }

    /// Whether a handle granted this mode may be written to.
    pub fn writes(&self) -> bool {
        self.update || !matches!(self.access, Access::Read)
    }

    /// Whether writes land at the end of the stream.
    pub fn appends(&self) -> bool {
        matches!(self.access, Access::Append)
    }

    /// Whether a missing resource is created.
    pub fn creates(&self) -> bool {
        !matches!(self.access, Access::Read)
    }

    /// Whether an existing resource is truncated on open.
    pub fn truncates(&self) -> bool {
        matches!(self.access, Access::Write)
    }

    /// Whether the open must create the resource itself.
    pub fn is_exclusive(&self) -> bool {
        matches!(self.access, Access::CreateNew)
    }

    /// The platform open-options configuration this mode implies.
    pub(crate) fn to_open_options(self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        opts.read(self.reads());
        match self.access {
            Access::Read => {
                if self.update {
                    opts.write(true);
                }
            }
            Access::Write => {
                opts.write(true).create(true).truncate(true);
            }
            Access::Append => {
                opts.append(true).create(true);
            }
            Access::CreateNew => {
                opts.write(true).create_new(true);
            }
        }
        opts
    }
}

impl FromStr for OpenMode {
    type Err = OpenError;

    /// Parse a legacy mode string: exactly one of `r`/`w`/`a`/`x`, at most
    /// one of `t`/`b`, an optional `+`, in any order, no repeats.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut access: Option<Access> = None;
        let mut framing: Option<Framing> = None;
        let mut update = false;

        for ch in s.chars() {
            match ch {
                'r' | 'w' | 'a' | 'x' => {
                    let next = match ch {
                        'r' => Access::Read,
                        'w' => Access::Write,
                        'a' => Access::Append,
                        _ => Access::CreateNew,
                    };
                    if access.replace(next).is_some() {
                        return Err(OpenError::invalid_argument(format!(
                            "mode '{s}' must contain exactly one of 'r', 'w', 'a', 'x'"
                        )));
                    }
                }
                't' | 'b' => {
                    let next = if ch == 't' { Framing::Text } else { Framing::Binary };
                    if framing.replace(next).is_some() {
                        return Err(OpenError::invalid_argument(format!(
                            "mode '{s}' may contain at most one of 't', 'b'"
                        )));
                    }
                }
                '+' => {
                    if update {
                        return Err(OpenError::invalid_argument(format!(
                            "mode '{s}' repeats '+'"
                        )));
                    }
                    update = true;
                }
                other => {
                    return Err(OpenError::invalid_argument(format!(
                        "mode '{s}' contains unrecognized flag '{other}'"
                    )));
                }
            }
        }

        let Some(access) = access else {
            return Err(OpenError::invalid_argument(format!(
                "mode '{s}' is missing an access direction ('r', 'w', 'a' or 'x')"
            )));
        };

        Ok(Self {
            access,
            update,
            framing: framing.unwrap_or(Framing::Text),
        })
    }
}

impl fmt::Display for OpenMode {
    /// Canonical mode string: access, then `+`, then `b` for binary.
    /// Text framing is the default and is not rendered.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let access = match self.access {
            Access::Read => 'r',
            Access::Write => 'w',
            Access::Append => 'a',
            Access::CreateNew => 'x',
        };
        write!(f, "{access}")?;
        if self.update {
            write!(f, "+")?;
        }
        if self.framing == Framing::Binary {
            write!(f, "b")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{Framing, OpenMode};
    use crate::error::OpenError;

    #[rstest]
    #[case("r", OpenMode::read())]
    #[case("rt", OpenMode::read())]
    #[case("rb", OpenMode::read().binary())]
    #[case("r+", OpenMode::read().update())]
    #[case("+r", OpenMode::read().update())]
    #[case("r+b", OpenMode::read().update().binary())]
    #[case("br+", OpenMode::read().update().binary())]
    #[case("w", OpenMode::write())]
    #[case("a+", OpenMode::append().update())]
    #[case("xb", OpenMode::create_new().binary())]
    fn legacy_strings_parse_to_the_structured_mode(#[case] s: &str, #[case] expected: OpenMode) {
        assert_eq!(s.parse::<OpenMode>().unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("z")]
    #[case("rw")]
    #[case("rr")]
    #[case("rtb")]
    #[case("r++")]
    #[case("b")]
    fn malformed_strings_are_invalid_argument(#[case] s: &str) {
        assert!(matches!(
            s.parse::<OpenMode>(),
            Err(OpenError::InvalidArgument { .. })
        ));
    }

    #[rstest]
    #[case(OpenMode::read(), "r")]
    #[case(OpenMode::read().update().binary(), "r+b")]
    #[case(OpenMode::append(), "a")]
    #[case(OpenMode::create_new().update(), "x+")]
    fn display_renders_the_canonical_string(#[case] mode: OpenMode, #[case] expected: &str) {
        assert_eq!(mode.to_string(), expected);
    }

    #[test]
    fn capability_set_follows_the_combination() {
        let r = OpenMode::read();
        assert!(r.reads() && !r.writes() && !r.creates());

        let w = OpenMode::write();
        assert!(!w.reads() && w.writes() && w.creates() && w.truncates());

        let a_plus = OpenMode::append().update();
        assert!(a_plus.reads() && a_plus.writes() && a_plus.appends() && !a_plus.truncates());

        let x = OpenMode::create_new();
        assert!(x.is_exclusive() && x.creates() && !x.truncates());
    }

    #[test]
    fn framing_defaults_to_text() {
        assert_eq!(OpenMode::write().framing(), Framing::Text);
        assert_eq!(OpenMode::write().binary().framing(), Framing::Binary);
    }
}
