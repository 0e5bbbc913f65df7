//! Creates checklist files, one per suite id, never touching existing ones.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::error::ChecklistError;
use super::template::ChecklistTemplate;
use crate::suite::SuiteId;

/// What happened to one suite id's checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File did not exist and was written.
    Created(PathBuf),
    /// File already exists and was left alone.
    AlreadyExists(PathBuf),
    /// Dry run: the file would have been created.
    WouldCreate(PathBuf),
}

impl WriteOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::AlreadyExists(path) | Self::WouldCreate(path) => {
                path.as_path()
            }
        }
    }
}

#[derive(Debug)]
pub struct ChecklistWriter {
    output_dir: PathBuf,
    template: ChecklistTemplate,
    dry_run: bool,
}

impl ChecklistWriter {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>, template: ChecklistTemplate) -> Self {
        Self {
            output_dir: output_dir.into(),
            template,
            dry_run: false,
        }
    }

    /// Report what would be created without writing anything.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<output_dir>/<suite_id>`
    #[must_use]
    pub fn checklist_path(&self, suite_id: &SuiteId) -> PathBuf {
        self.output_dir.join(suite_id.as_str())
    }

    /// Write the checklist for `suite_id` unless a file is already there.
    ///
    /// Creation uses `create_new`, so an existing file is never truncated even
    /// if another process creates it at the same moment. The output directory is
    /// never created here.
    pub async fn write_if_absent(
        &self,
        suite_id: &SuiteId,
    ) -> Result<WriteOutcome, ChecklistError> {
        let path = self.checklist_path(suite_id);

        if self.dry_run {
            return self.plan(path).await;
        }

        let content = self.template.render(suite_id)?;

        let opened = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await;
        let mut file = match opened {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "Checklist already exists, skipping");
                return Ok(WriteOutcome::AlreadyExists(path));
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ChecklistError::OutputDirMissing(self.output_dir.clone()));
            }
            Err(source) => return Err(ChecklistError::Io { path, source }),
        };

        write_or_discard(&mut file, &path, &content).await?;

        debug!(suite_id = %suite_id, path = %path.display(), "Created checklist");
        Ok(WriteOutcome::Created(path))
    }

    async fn plan(&self, path: PathBuf) -> Result<WriteOutcome, ChecklistError> {
        let dir_exists = fs::try_exists(&self.output_dir)
            .await
            .map_err(|source| ChecklistError::Io {
                path: self.output_dir.clone(),
                source,
            })?;
        if !dir_exists {
            return Err(ChecklistError::OutputDirMissing(self.output_dir.clone()));
        }

        match fs::try_exists(&path).await {
            Ok(true) => Ok(WriteOutcome::AlreadyExists(path)),
            Ok(false) => {
                debug!(path = %path.display(), "Would create checklist");
                Ok(WriteOutcome::WouldCreate(path))
            }
            Err(source) => Err(ChecklistError::Io { path, source }),
        }
    }
}

/// Write `content` to a freshly created file, removing the file again if the
/// write fails so a partial checklist is never left behind.
async fn write_or_discard<W>(
    file: &mut W,
    path: &Path,
    content: &str,
) -> Result<(), ChecklistError>
where
    W: AsyncWrite + Unpin,
{
    let written = match file.write_all(content.as_bytes()).await {
        Ok(()) => file.flush().await,
        Err(e) => Err(e),
    };
    let Err(source) = written else {
        return Ok(());
    };

    if let Err(e) = fs::remove_file(path).await {
        warn!(path = %path.display(), error = %e, "Failed to remove partial checklist");
    }
    Err(ChecklistError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
