// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Directory-backed file history.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{ChatError, ChatFile};

/// A directory standing in for a channel's attachment history.
///
/// Newer files (by modification time) are considered more recent, and only
/// the `history_limit` most recent files are searched.
#[derive(Debug, Clone)]
pub struct DirectoryFiles {
    dir: PathBuf,
    history_limit: usize,
}

impl DirectoryFiles {
    pub fn new(dir: impl Into<PathBuf>, history_limit: usize) -> Self {
        Self {
            dir: dir.into(),
            history_limit,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn find(&self, name: &str) -> Result<Option<ChatFile>, ChatError> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut files: Vec<(SystemTime, PathBuf)> = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let meta = entry.metadata().await?;
            if meta.is_file() {
                let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                files.push((modified, entry.path()));
            }
        }
        files.sort_by(|a, b| b.0.cmp(&a.0));

        let found = files
            .into_iter()
            .take(self.history_limit)
            .map(|(_, path)| path)
            .find(|path| path.file_name().is_some_and(|f| f == name));

        match found {
            Some(path) => {
                let data = tokio::fs::read(&path).await?;
                tracing::debug!(path = %path.display(), bytes = data.len(), "file found");
                Ok(Some(ChatFile::new(name, data)))
            }
            None => Ok(None),
        }
    }

    pub async fn store(&self, file: &ChatFile) -> Result<PathBuf, ChatError> {
        if !is_plain_file_name(&file.name) {
            return Err(ChatError::InvalidFileName(file.name.clone()));
        }
        let path = self.dir.join(&file.name);
        tokio::fs::write(&path, &file.data).await?;
        tracing::debug!(path = %path.display(), bytes = file.data.len(), "file stored");
        Ok(path)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
