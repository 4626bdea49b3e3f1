use crate::utils::file_size::FileSizeUtils;
use chrono::{DateTime, Local};
use std::fs;
use std::io;
use std::path::Path;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: Option<String>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type,
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid filename"))?;
        let mime_type = mime_guess::from_path(path)
            .first()
            .map(|mime| mime.essence_str().to_string());

        Ok(Self {
            name,
            size: metadata.len(),
            mime_type,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub size: String,
    pub mime_type: String,
    pub upload_date: String,
}

impl FileRecord {
    pub(crate) fn new(file: SelectedFile, now: &DateTime<Local>, unknown_type: &str) -> Self {
        let mime_type = match file.mime_type {
            Some(mime) if !mime.is_empty() => mime,
            _ => unknown_type.to_string(),
        };

        Self {
            id: Uuid::new_v4().to_string(),
            size: FileSizeUtils::format_size(file.size),
            name: file.name,
            mime_type,
            upload_date: now.format("%-I:%M:%S %p").to_string(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.contains("image")
    }
}
