//! The guarded boundary for resource acquisition.
//!
//! One acquisition attempt, one classification step, no retry, no fallback
//! mode. On the failure path no handle exists and nothing is leaked; on the
//! success path the caller receives exclusive ownership of the handle.

use std::fs::File;
use std::path::Path;

use tracing::{debug, trace};

use crate::config::OpenConfig;
use crate::error::{OpenError, OpenResult};
use crate::handle::Handle;
use crate::locator::Locator;
use crate::mode::OpenMode;

/// Open a resource with the default configuration.
///
/// See [`open_with`] for the full contract.
pub fn open(locator: impl Into<Locator>, mode: OpenMode) -> OpenResult<Handle> {
    open_with(locator, mode, OpenConfig::default())
}

/// Open a resource under `mode` with an explicit configuration.
///
/// The underlying acquisition primitive is invoked exactly once,
/// synchronously. Any native failure signal is classified into exactly one
/// [`OpenError`] kind; anything outside the recognized set becomes
/// [`OpenError::Os`] with the original system error code. Terminal handling
/// (abort, log, retry, degrade) is entirely the caller's decision.
pub fn open_with(
    locator: impl Into<Locator>,
    mode: OpenMode,
    config: OpenConfig,
) -> OpenResult<Handle> {
    match acquire(locator.into(), mode, &config) {
        Ok(file) => {
            trace!(mode = %mode, "resource opened");
            Ok(Handle::new(file, mode, &config))
        }
        // Every failure kind leaves through this one point: validation,
        // classified native signals, and the directory rejection.
        Err(err) => {
            debug!(mode = %mode, error = %err, "open failed");
            Err(err)
        }
    }
}

fn acquire(locator: Locator, mode: OpenMode, config: &OpenConfig) -> OpenResult<File> {
    config.validate(&mode, &locator)?;

    match locator {
        Locator::Path(path) => {
            let attempt = match config.opener_ref() {
                Some(opener) => opener(&path, &mode),
                None => mode.to_open_options().open(&path),
            };
            let file = attempt.map_err(|err| OpenError::classify(&err, &path))?;
            reject_directory(file, &path)
        }
        // An adopted descriptor can still point at a directory, so it goes
        // through the same rejection as a path-opened stream.
        #[cfg(unix)]
        Locator::Fd(fd) => reject_directory(File::from(fd), Path::new("<descriptor>")),
    }
}

/// Some platforms let a read-only open of a directory succeed and only fail
/// on the first read. The boundary verifies the acquired stream here so the
/// caller always sees `IsDirectory` at open time; the just-acquired
/// descriptor is dropped on the error path, so nothing leaks.
fn reject_directory(file: File, path: &Path) -> OpenResult<File> {
    let metadata = file
        .metadata()
        .map_err(|err| OpenError::classify(&err, path))?;
    if metadata.is_dir() {
        return Err(OpenError::IsDirectory {
            path: path.display().to_string(),
        });
    }
    Ok(file)
}
