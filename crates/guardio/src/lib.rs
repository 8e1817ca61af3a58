//! # guardio
//!
//! A small safety layer over two fallible primitives: opening a file-like
//! resource and computing the length of a sized value. Both are wrapped so
//! that every underlying failure signal is caught at a single guarded
//! boundary and converted into a closed, matchable error taxonomy — a
//! caller who does not inspect the result cannot silently proceed with a
//! half-initialized resource.
//!
//! ## Quick start
//!
//! ```no_run
//! use guardio::prelude::*;
//!
//! match guardio::open("notes.txt", OpenMode::read()) {
//!     Ok(mut handle) => {
//!         let mut text = String::new();
//!         use std::io::Read;
//!         let _ = handle.read_to_string(&mut text);
//!     }
//!     Err(OpenError::NotFound { path }) => eprintln!("missing: {path}"),
//!     Err(other) => eprintln!("open failed: {other}"),
//! }
//!
//! assert_eq!(guardio::length_of(&[1, 2, 3, 4, 5]), Ok(5));
//! ```
//!
//! ## Design
//!
//! - The taxonomy is closed and exhaustive per operation; any native
//!   failure outside the recognized set becomes [`OpenError::Os`] with the
//!   originating system error code. Losing a failure signal is the one
//!   forbidden outcome.
//! - The open mode is a structured combination (access direction × framing
//!   × update flag) validated at construction; the legacy mode-string
//!   surface survives as a `FromStr` impl.
//! - Both operations are synchronous, add no buffering or queuing, and
//!   share no mutable state between invocations.
//! - No retry, no fallback, nothing fatal at this layer: terminal handling
//!   belongs to the caller, which the `Result` forces to branch.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handle;
pub mod len;
pub mod locator;
pub mod mode;
mod open;

pub use config::{Buffering, Encoding, Newline, OpenConfig, OpenerFn};
pub use error::{OpenError, OpenResult, SizeError, SizeResult};
pub use handle::Handle;
pub use len::{Measurable, length_of};
pub use locator::Locator;
pub use mode::{Access, Framing, OpenMode};
pub use open::{open, open_with};

/// Convenient prelude with everything a call site needs.
pub mod prelude {
    pub use super::{
        Access, Buffering, Encoding, Framing, Handle, Locator, Measurable, Newline, OpenConfig,
        OpenError, OpenMode, OpenResult, SizeError, SizeResult, length_of, open, open_with,
    };
}
