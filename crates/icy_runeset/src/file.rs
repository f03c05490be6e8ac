//! Loading and saving runeset files.

use std::{fs, io, path::Path};

use crate::{codec, Result, Runeset, RunesetError};

/// Load a runeset file.
///
/// Returns `Ok(None)` if there is no file at `path`. A file that exists but
/// can't be read fails with [`RunesetError::FileRead`], one with the wrong size
/// with [`RunesetError::BytesLength`].
pub fn load(path: impl AsRef<Path>) -> Result<Option<Runeset>> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("no runeset file at {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(RunesetError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match codec::decode(&bytes) {
        Ok(runeset) => {
            log::debug!("loaded runeset from {}", path.display());
            Ok(Some(runeset))
        }
        Err(err) => {
            log::warn!("{} is not a runeset file: {err}", path.display());
            Err(err)
        }
    }
}

/// Like [`load`], but yields a blank runeset for a missing file.
///
/// The flag is `true` if the file was found.
pub fn load_or_new(path: impl AsRef<Path>) -> Result<(Runeset, bool)> {
    Ok(match load(path)? {
        Some(runeset) => (runeset, true),
        None => (Runeset::new(), false),
    })
}

/// Write the full 2048 byte runeset to `path`, replacing any existing file.
pub fn save(runeset: &Runeset, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, codec::encode(runeset))?;
    log::debug!("saved runeset to {}", path.display());
    Ok(())
}
