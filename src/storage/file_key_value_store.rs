use super::{Error, KeyValueStore, KeyVersion, KeyVersions};
use std::{fs, io::ErrorKind, path::PathBuf};

///
/// Stores every key in its own file inside the root directory.
///
/// Writes go to a temporary file first and are then renamed over
/// the target, so readers never observe a partially written value.
///
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    ///
    /// Creates root directory if it does not exist yet
    ///
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, Error> {
        let root = root.into();
        fs::create_dir_all(&root)?;

        tracing::debug!(root = %root.display(), "opened file key value store");

        Ok(Self { root })
    }

    fn path(&self, key: &str) -> Result<PathBuf, Error> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));
        if !valid {
            return Err(Error::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Io(err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path(key)?;
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let path = self.path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::Io(err)),
        }
    }
}

impl KeyVersions for FileKeyValueStore {
    fn version(&self, key: &str) -> Result<Option<KeyVersion>, Error> {
        let path = self.path(key)?;

        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::Io(err)),
        };

        Ok(Some(KeyVersion {
            modified: metadata.modified()?,
            len: metadata.len(),
        }))
    }
}
