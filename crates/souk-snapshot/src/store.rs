use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::data::SnapshotData;
use crate::error::{SnapshotError, SnapshotResult};

/// Magic bytes at the start of every snapshot file.
const MAGIC: &[u8; 4] = b"SOUK";

/// Current snapshot format version.
const FORMAT_VERSION: u16 = 1;

/// Header size: 4 bytes magic + 2 bytes version + 4 bytes CRC.
const HEADER_SIZE: usize = 10;

/// Reads and writes market snapshots.
///
/// Owns two paths: the binary snapshot (authoritative, read back on startup)
/// and the text export (derived, operator-facing, never read back). A save
/// rewrites both wholesale; the snapshot is flushed and fsynced before the
/// export is touched, so the authoritative file is durable first.
pub struct SnapshotStore {
    snapshot_path: PathBuf,
    export_path: PathBuf,
}

impl SnapshotStore {
    pub fn new(snapshot_path: &Path, export_path: &Path) -> Self {
        Self {
            snapshot_path: snapshot_path.to_path_buf(),
            export_path: export_path.to_path_buf(),
        }
    }

    /// Path to the binary snapshot file.
    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Path to the text export file.
    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Persist a snapshot, replacing whatever was on disk.
    pub fn save(&self, data: &SnapshotData) -> SnapshotResult<()> {
        let payload =
            bincode::serialize(data).map_err(|e| SnapshotError::Encode(e.to_string()))?;
        let crc = crc32fast::hash(&payload);

        if let Some(parent) = self.snapshot_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.snapshot_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(MAGIC)?;
        writer.write_all(&FORMAT_VERSION.to_le_bytes())?;
        writer.write_all(&crc.to_le_bytes())?;
        writer.write_all(&payload)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        fs::write(&self.export_path, data.export_text())?;

        debug!(
            bytes = payload.len(),
            accounts = data.accounts.len(),
            items = data.items.len(),
            transactions = data.transactions.len(),
            "snapshot written"
        );
        Ok(())
    }

    /// Load the snapshot from disk.
    ///
    /// A missing file is a valid empty start and returns `Ok(None)`. Every
    /// other failure (unreadable file, bad magic, version from the future,
    /// checksum mismatch, undecodable payload) is a typed error; the caller
    /// decides whether that is fatal.
    pub fn load(&self) -> SnapshotResult<Option<SnapshotData>> {
        let bytes = match fs::read(&self.snapshot_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if bytes.len() < HEADER_SIZE {
            return Err(SnapshotError::Malformed(format!(
                "{} bytes is shorter than the {HEADER_SIZE}-byte header",
                bytes.len()
            )));
        }
        if &bytes[..4] != MAGIC {
            return Err(SnapshotError::Malformed(format!(
                "bad magic {:02x?}",
                &bytes[..4]
            )));
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(version));
        }

        let expected_crc = u32::from_le_bytes([bytes[6], bytes[7], bytes[8], bytes[9]]);
        let payload = &bytes[HEADER_SIZE..];
        if crc32fast::hash(payload) != expected_crc {
            return Err(SnapshotError::ChecksumMismatch);
        }

        let data: SnapshotData =
            bincode::deserialize(payload).map_err(|e| SnapshotError::Decode(e.to_string()))?;

        debug!(
            accounts = data.accounts.len(),
            items = data.items.len(),
            transactions = data.transactions.len(),
            "snapshot loaded"
        );
        Ok(Some(data))
    }
}
