//! Zip archive assembly and saving.

use crate::error::ExportError;
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use webforge_codegen::GeneratedProject;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// A finished archive, held in memory until saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectArchive {
    /// File name offered for download.
    pub file_name: String,
    /// Serialized zip bytes.
    pub bytes: Vec<u8>,
}

impl ProjectArchive {
    /// Save into `dir` under the archive's file name.
    ///
    /// The bytes go to a temporary sibling first and are renamed into place,
    /// so a failed save never leaves a partial archive at the target path.
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, ExportError> {
        let target = dir.join(&self.file_name);
        let partial = dir.join(format!(".{}.part", self.file_name));

        let result = fs::write(&partial, &self.bytes).and_then(|_| fs::rename(&partial, &target));
        if let Err(source) = result {
            let _ = fs::remove_file(&partial);
            return Err(ExportError::Save {
                path: target,
                source,
            });
        }

        tracing::info!(path = %target.display(), bytes = self.bytes.len(), "saved project archive");
        Ok(target)
    }
}

/// Serialize every project file into a zip, in order.
pub fn write_archive(
    project: &GeneratedProject,
    compression: CompressionMethod,
) -> Result<Vec<u8>, ExportError> {
    let buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(buffer);

    let file_options: FileOptions<'_, ()> = FileOptions::default().compression_method(compression);

    for file in &project.files {
        zip.start_file(file.path.as_str(), file_options.clone())?;
        zip.write_all(file.content.as_bytes())?;
    }

    let result = zip.finish()?;
    Ok(result.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use webforge_codegen::GeneratedFile;

    fn sample_project() -> GeneratedProject {
        let mut project = GeneratedProject::default();
        project.push(GeneratedFile::scaffold("package.json", "{}"));
        project.push(GeneratedFile::source("src/App.tsx", "export default 1"));
        project
    }

    #[test]
    fn test_write_archive_contents() {
        let bytes = write_archive(&sample_project(), CompressionMethod::Deflated).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        assert_eq!(names.len(), 2);

        let mut content = String::new();
        archive
            .by_name("src/App.tsx")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "export default 1");
    }

    #[test]
    fn test_stored_compression() {
        let bytes = write_archive(&sample_project(), CompressionMethod::Stored).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(
            archive.by_name("package.json").unwrap().compression(),
            CompressionMethod::Stored
        );
    }

    #[test]
    fn test_save_to() {
        let dir = tempfile::tempdir().unwrap();
        let archive = ProjectArchive {
            file_name: "site.zip".into(),
            bytes: b"PK-test".to_vec(),
        };
        let path = archive.save_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("site.zip"));
        assert_eq!(fs::read(&path).unwrap(), b"PK-test");
        assert!(!dir.path().join(".site.zip.part").exists());
    }

    #[test]
    fn test_save_to_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let archive = ProjectArchive {
            file_name: "site.zip".into(),
            bytes: vec![1, 2, 3],
        };
        let result = archive.save_to(&dir.path().join("missing"));
        assert!(matches!(result, Err(ExportError::Save { .. })));
    }
}
