//! Exercise tracker persistence with file locking.
//!
//! The tracker is stored as a single JSON document. Reads take a shared
//! lock; writes go to a temp file in the same directory and are renamed over
//! the original.

use crate::model::ExerciseTracker;
use crate::{Error, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load the tracker from `path`
///
/// Returns an empty tracker if the file doesn't exist. A file that exists
/// but cannot be parsed is an error, so stored records are never dropped.
pub fn load(path: &Path) -> Result<ExerciseTracker> {
    if !path.exists() {
        tracing::info!("No data file found at {:?}, starting with an empty tracker", path);
        return Ok(ExerciseTracker::default());
    }

    let file = File::open(path)?;

    // Acquire shared lock for reading
    file.lock_shared()?;

    let mut contents = String::new();
    let read = std::io::BufReader::new(&file).read_to_string(&mut contents);
    file.unlock()?;
    read?;

    let tracker: ExerciseTracker = serde_json::from_str(&contents)?;
    tracing::debug!(
        "Loaded {} exercises from {:?}",
        tracker.exercises().len(),
        path
    );
    Ok(tracker)
}

/// Save the tracker to `path` atomically
///
/// 1. Write to a temp file next to `path`
/// 2. Sync to disk
/// 3. Rename over the original
pub fn save(tracker: &ExerciseTracker, path: &Path) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;

    // Acquire exclusive lock on the temp file to serialize concurrent writers
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string_pretty(tracker)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    tracing::debug!(
        "Saved {} exercises to {:?}",
        tracker.exercises().len(),
        path
    );
    Ok(())
}
