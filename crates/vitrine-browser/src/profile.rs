use crate::{Error, Result};
use std::path::Path;
use tempfile::TempDir;

/// Chrome profile directory scoped to a single browsing session
///
/// Every session gets a fresh directory; nothing persists across pipeline
/// invocations. The directory is removed when the profile is dropped.
pub struct Profile {
    dir: TempDir,
}

impl Profile {
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("vitrine-profile-")
            .tempdir()
            .map_err(Error::Io)?;

        Ok(Self { dir })
    }

    /// Get the profile directory path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_creates_directory() {
        let profile = Profile::create().unwrap();

        assert!(profile.path().exists());
        assert!(profile.path().is_dir());
    }

    #[test]
    fn test_profile_cleans_up_on_drop() {
        let profile = Profile::create().unwrap();
        let path = profile.path().to_path_buf();

        assert!(path.exists());

        drop(profile);

        assert!(!path.exists());
    }

    #[test]
    fn test_profiles_do_not_collide() {
        let first = Profile::create().unwrap();
        let second = Profile::create().unwrap();

        assert_ne!(first.path(), second.path());
    }
}
