//! Database backup, optionally zipped.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`. Returns the final path, which
    /// is the `.zip` archive when `compress` is set.
    pub fn backup(src: &Path, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Other(format!(
                "database not found: {} (run `hybridops init` first)",
                src.display()
            )));
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        if final_target.exists() && !force {
            return Err(AppError::Other(format!(
                "'{}' already exists; pass --force to overwrite it",
                final_target.display()
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, dest)?;
        log::info!("copied {} to {}", src.display(), dest.display());

        let final_path = if compress {
            let zipped = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {e}"));
            }
            zipped
        } else {
            dest.to_path_buf()
        };
        success(format!("Backup created: {}", final_path.display()));

        if let Ok(conn) = Connection::open(src) {
            crate::db::log::audit_quiet(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            );
        }

        Ok(final_path)
    }
}

/// Zip `path` next to itself as `<stem>.zip`.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "hybridops.sqlite".to_string());

    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_copies_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("db.sqlite");
        fs::write(&src, b"data").unwrap();
        let dest = dir.path().join("bk").join("copy.sqlite");
        let dest_str = dest.to_str().unwrap();

        let out = BackupLogic::backup(&src, dest_str, false, false).unwrap();
        assert_eq!(fs::read(&out).unwrap(), b"data");
        assert!(BackupLogic::backup(&src, dest_str, false, false).is_err());
        assert!(BackupLogic::backup(&src, dest_str, false, true).is_ok());
    }

    #[test]
    fn test_compressed_backup_replaces_copy() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("db.sqlite");
        fs::write(&src, b"data").unwrap();
        let dest = dir.path().join("copy.sqlite");

        let out = BackupLogic::backup(&src, dest.to_str().unwrap(), true, false).unwrap();
        assert_eq!(out.extension().unwrap(), "zip");
        assert!(out.exists());
        assert!(!dest.exists());
    }

    #[test]
    fn test_missing_database() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.sqlite");
        assert!(BackupLogic::backup(&missing, "/tmp/x.sqlite", false, true).is_err());
    }
}
