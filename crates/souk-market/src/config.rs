use std::path::{Path, PathBuf};

/// Configuration for opening a market.
#[derive(Clone, Debug)]
pub struct MarketConfig {
    /// Path of the binary snapshot file (authoritative state).
    pub snapshot_path: PathBuf,
    /// Path of the operator-facing text export.
    pub export_path: PathBuf,
    /// Username of the bootstrap admin account.
    pub admin_username: String,
    /// Password of the bootstrap admin account.
    pub admin_password: String,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("souk.snapshot"),
            export_path: PathBuf::from("souk.txt"),
            admin_username: "admin".into(),
            admin_password: "admin123".into(),
        }
    }
}

impl MarketConfig {
    /// Default configuration with both files placed under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            snapshot_path: dir.join("souk.snapshot"),
            export_path: dir.join("souk.txt"),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_working_directory_files() {
        let config = MarketConfig::default();
        assert_eq!(config.snapshot_path, PathBuf::from("souk.snapshot"));
        assert_eq!(config.export_path, PathBuf::from("souk.txt"));
        assert_eq!(config.admin_username, "admin");
    }

    #[test]
    fn in_dir_keeps_the_default_credential() {
        let config = MarketConfig::in_dir(Path::new("/var/lib/souk"));
        assert_eq!(config.snapshot_path, PathBuf::from("/var/lib/souk/souk.snapshot"));
        assert_eq!(config.export_path, PathBuf::from("/var/lib/souk/souk.txt"));
        assert_eq!(config.admin_password, "admin123");
    }
}
