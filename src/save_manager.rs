use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::core::game_state::CareState;
use directories::ProjectDirs;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Manages saving and loading the care session with a checksummed binary format
#[derive(Debug, Clone)]
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Creates a new SaveManager instance
    ///
    /// Sets up the save directory at the appropriate location for the platform
    /// using the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "sustainabuddy").ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine config directory",
            )
        })?;

        Self::in_dir(project_dirs.config_dir())
    }

    /// Creates a SaveManager that keeps `save.dat` inside `dir`.
    pub fn in_dir(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            save_path: dir.join("save.dat"),
        })
    }

    /// Creates a SaveManager for testing with a unique temporary directory
    #[cfg(test)]
    pub(crate) fn new_for_test() -> io::Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_dir = std::env::temp_dir().join(format!(
            "sustainabuddy-test-{}-{}",
            std::process::id(),
            test_id
        ));
        Self::in_dir(&temp_dir)
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    /// Saves the care state to disk with checksum verification
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized care state (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, state: &CareState) -> io::Result<()> {
        let data =
            bincode::serialize(state).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let data_len = u32::try_from(data.len())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        // Checksum covers version + length + data
        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        tracing::debug!(path = %self.save_path.display(), bytes = data.len(), "Saved care state");
        Ok(())
    }

    /// Loads the care state from disk with checksum verification
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The version magic is incorrect
    /// - The checksum verification fails
    /// - The data cannot be deserialized
    pub fn load(&self) -> io::Result<CareState> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != SAVE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid save version: expected 0x{:016X}, got 0x{:016X}",
                    SAVE_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        bincode::deserialize::<CareState>(&data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Checks if a save file exists
    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    pub fn delete(&self) -> io::Result<()> {
        if self.save_exists() {
            fs::remove_file(&self.save_path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buddy::vitals::VitalKind;
    use crate::customization::logic::{equip_accessory, purchase_accessory};
    use crate::profile::CaregiverProfile;
    use chrono::NaiveDate;

    fn sample_state() -> CareState {
        let now = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut state = CareState::new(CaregiverProfile::new(), now);
        state.buddy.name = "Pearl".to_string();
        state.buddy.set_vital(VitalKind::Hunger, 42);
        state.buddy.level = 4;
        state.buddy.experience = 120;
        purchase_accessory(
            &mut state.buddy.wardrobe,
            "cute_bow",
            &mut state.profile.eco_credits,
        )
        .unwrap();
        equip_accessory(&mut state.buddy.wardrobe, "cute_bow").unwrap();
        state
    }

    #[test]
    fn test_save_and_load() {
        let manager = SaveManager::new_for_test().expect("Failed to create SaveManager");
        assert!(!manager.save_exists());

        let original = sample_state();
        manager.save(&original).expect("Failed to save care state");
        assert!(manager.save_exists());

        let loaded = manager.load().expect("Failed to load care state");
        assert_eq!(loaded, original);
        assert_eq!(loaded.profile.eco_credits, 70);

        manager.delete().unwrap();
        assert!(!manager.save_exists());
    }

    #[test]
    fn test_load_missing_file() {
        let manager = SaveManager::new_for_test().unwrap();
        let err = manager.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_corrupted_save_fails_checksum() {
        let manager = SaveManager::new_for_test().unwrap();
        manager.save(&sample_state()).unwrap();

        let mut bytes = fs::read(manager.save_path()).unwrap();
        let last_data_byte = bytes.len() - 33;
        bytes[last_data_byte] ^= 0xFF;
        fs::write(manager.save_path(), &bytes).unwrap();

        let err = manager.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("Checksum"));
        manager.delete().unwrap();
    }

    #[test]
    fn test_wrong_magic_is_rejected() {
        let manager = SaveManager::new_for_test().unwrap();
        manager.save(&sample_state()).unwrap();

        let mut bytes = fs::read(manager.save_path()).unwrap();
        bytes[0] ^= 0x01;
        fs::write(manager.save_path(), &bytes).unwrap();

        let err = manager.load().unwrap_err();
        assert!(err.to_string().contains("Invalid save version"));
        manager.delete().unwrap();
    }
}
