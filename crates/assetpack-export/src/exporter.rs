use crate::{AssetSource, ExportDestination, ExportError, ExportOutcome, FileStamp};
use assetpack_domain::report::{Report, ReportEntry};
use assetpack_types::{ArchivedEntry, AssetPath, DependencyNode, Severity, ids};
use camino::Utf8Path;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::io::{self, Read, Write};
use tempfile::NamedTempFile;
use time::OffsetDateTime;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

const COPY_BUFFER_SIZE: usize = 8 * 1024;

/// Layout and compression of the written archives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveOptions {
    /// Stripped once from the front of each asset path to form the entry name.
    pub asset_prefix: String,
    pub metadata_suffix: String,
    /// Deflate level, 0-9.
    pub compression_level: u32,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            asset_prefix: "Assets/".to_string(),
            metadata_suffix: ".meta".to_string(),
            compression_level: 5,
        }
    }
}

/// Packages a validated target and its dependencies into `<destination>/<name>.zip`.
pub struct ArchiveExporter<'a, S: AssetSource + ?Sized> {
    source: &'a S,
    destination: &'a ExportDestination,
    options: &'a ArchiveOptions,
}

impl<'a, S: AssetSource + ?Sized> ArchiveExporter<'a, S> {
    pub fn new(
        source: &'a S,
        destination: &'a ExportDestination,
        options: &'a ArchiveOptions,
    ) -> Self {
        Self {
            source,
            destination,
            options,
        }
    }

    /// Export the target owning `report`.
    ///
    /// Policy is not re-checked here; callers only pass reports that succeeded.
    /// Nodes in the report's ignore-set are left out. On failure no archive exists at
    /// the destination path and an `export.archive` violation is appended to the report.
    pub fn export(&self, mut report: Report, deps: &[DependencyNode]) -> ExportOutcome {
        let target = report.target().clone();
        let archive_path = self.destination.archive_path(&target.name);

        match self.write_archive(&archive_path, &report, deps) {
            Ok(entries) => {
                tracing::info!(
                    target_name = %target.name,
                    archive = %archive_path,
                    entries = entries.len(),
                    "archive written"
                );
                ExportOutcome {
                    report,
                    archive_path: Some(archive_path),
                    error: None,
                    entries,
                }
            }
            Err(err) => {
                tracing::warn!(target_name = %target.name, error = %err, "export failed");
                remove_stale_archive(&archive_path);
                report.push_violation(
                    ReportEntry::for_node(
                        &target,
                        Severity::Error,
                        ids::CHECK_EXPORT_ARCHIVE,
                        err.code(),
                    )
                    .with_message(err.to_string()),
                );
                ExportOutcome {
                    report,
                    archive_path: None,
                    error: Some(err),
                    entries: Vec::new(),
                }
            }
        }
    }

    fn write_archive(
        &self,
        archive_path: &Utf8Path,
        report: &Report,
        deps: &[DependencyNode],
    ) -> Result<Vec<ArchivedEntry>, ExportError> {
        let dir = self.destination.ensure()?;
        let temp = NamedTempFile::new_in(dir).map_err(|source| ExportError::Create {
            dir: dir.to_path_buf(),
            source,
        })?;

        let mut zip = ZipWriter::new(temp);
        let base = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(self.options.compression_level)));

        let mut seen: HashSet<&AssetPath> = HashSet::new();
        let mut entries = Vec::new();

        for node in deps {
            let Some(path) = node.path.as_ref().filter(|p| !p.is_empty()) else {
                tracing::debug!(node = %node.id, "no asset path, skipping");
                continue;
            };
            if !seen.insert(path) {
                continue;
            }
            if report.is_ignored(node) {
                tracing::debug!(node = %node.id, path = %path.as_str(), "ignored, skipping");
                continue;
            }

            if !path.stays_in_project() {
                return Err(ExportError::PathOutsideProject {
                    path: path.as_str().to_string(),
                });
            }

            let rel = path.as_str();
            let Some(stamp) = self.stat(rel)? else {
                tracing::debug!(path = %rel, "not on disk, skipping");
                continue;
            };
            let entry = path.entry_name(&self.options.asset_prefix);
            entries.push(self.add_entry(&mut zip, base, rel, &entry, stamp)?);

            let meta_rel = format!("{rel}{}", self.options.metadata_suffix);
            let Some(meta_stamp) = self.stat(&meta_rel)? else {
                return Err(ExportError::MetadataMissing { path: meta_rel });
            };
            let meta_entry = format!("{entry}{}", self.options.metadata_suffix);
            entries.push(self.add_entry(&mut zip, base, &meta_rel, &meta_entry, meta_stamp)?);
        }

        let temp = zip.finish().map_err(|source| ExportError::Archive {
            entry: "<central directory>".to_string(),
            source,
        })?;
        temp.persist(archive_path)
            .map_err(|err| ExportError::Persist {
                path: archive_path.to_path_buf(),
                source: err.error,
            })?;

        Ok(entries)
    }

    fn stat(&self, rel: &str) -> Result<Option<FileStamp>, ExportError> {
        self.source.stat(rel).map_err(|source| ExportError::Read {
            path: rel.to_string(),
            source,
        })
    }

    fn add_entry<W: Write + io::Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        base: SimpleFileOptions,
        rel: &str,
        entry: &str,
        stamp: FileStamp,
    ) -> Result<ArchivedEntry, ExportError> {
        let modified = stamp.modified.map(OffsetDateTime::from);
        let options = base
            .last_modified_time(modified.map(zip_timestamp).unwrap_or_default())
            .large_file(stamp.len >= u64::from(u32::MAX));

        zip.start_file(entry, options)
            .map_err(|source| ExportError::Archive {
                entry: entry.to_string(),
                source,
            })?;

        let mut reader = self.source.open(rel).map_err(|source| ExportError::Read {
            path: rel.to_string(),
            source,
        })?;
        let (size, sha256) = copy_hashed(&mut reader, zip).map_err(|source| ExportError::Copy {
            path: rel.to_string(),
            source,
        })?;

        Ok(ArchivedEntry {
            name: entry.to_string(),
            size,
            modified,
            sha256,
        })
    }
}

/// Zip timestamps only cover 1980-2107; anything outside falls back to the zip epoch.
fn zip_timestamp(at: OffsetDateTime) -> DateTime {
    let Ok(year) = u16::try_from(at.year()) else {
        return DateTime::default();
    };
    DateTime::from_date_and_time(
        year,
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute(),
        at.second(),
    )
    .unwrap_or_default()
}

fn copy_hashed(reader: &mut dyn Read, writer: &mut dyn Write) -> io::Result<(u64, String)> {
    let mut hasher = Sha256::new();
    let mut buf = [0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        hasher.update(&buf[..n]);
        writer.write_all(&buf[..n])?;
        total += n as u64;
    }
    Ok((total, hex::encode(hasher.finalize())))
}

fn remove_stale_archive(path: &Utf8Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::warn!(archive = %path, "removed stale archive"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => tracing::warn!(archive = %path, error = %err, "could not remove stale archive"),
    }
}
