//! Process working-directory bookkeeping: cwd, chdir, restore.
//!
//! A [`WorkDir`] instance only validates and remembers a directory, so the
//! core stays testable without touching process state. The module-level
//! [`cwd`]/[`chdir`]/[`restore`] functions operate on a mutex-guarded
//! process singleton and move the real process working directory as well.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use thiserror::Error;

/// Error from [`chdir`]: the facade's only failing operation.
#[derive(Debug, Error)]
pub enum WorkdirError {
    #[error("directory not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("cannot enter {path}: {source}")]
    Rejected {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Working-directory context: a current directory plus validated moves.
#[derive(Debug)]
pub struct WorkDir {
    current: PathBuf,
}

impl Default for WorkDir {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkDir {
    /// Starts at the process working directory.
    pub fn new() -> Self {
        Self {
            current: env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
        }
    }

    pub fn cwd(&self) -> String {
        self.current.display().to_string()
    }

    /// Adopts `path` as the current directory after checking it exists and
    /// is a directory. Relative paths resolve against the current value.
    pub fn chdir(&mut self, path: &str) -> Result<(), WorkdirError> {
        let target = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.current.join(path)
        };
        let meta = match fs::metadata(&target) {
            Ok(meta) => meta,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(WorkdirError::NotFound(path.to_string()));
            }
            Err(source) => {
                return Err(WorkdirError::Rejected {
                    path: path.to_string(),
                    source,
                });
            }
        };
        if !meta.is_dir() {
            return Err(WorkdirError::NotADirectory(path.to_string()));
        }
        self.current = target;
        Ok(())
    }

    /// Best-effort reset to a previously obtained directory. Failures are
    /// logged, not propagated.
    pub fn restore(&mut self, path: &str) {
        if let Err(err) = self.chdir(path) {
            tracing::warn!("restore to {path:?} failed: {err}");
        }
    }
}

fn process_workdir() -> &'static Mutex<WorkDir> {
    static WORKDIR: OnceLock<Mutex<WorkDir>> = OnceLock::new();
    WORKDIR.get_or_init(|| Mutex::new(WorkDir::new()))
}

/// Current process working directory.
pub fn cwd() -> String {
    process_workdir().lock().unwrap().cwd()
}

/// Changes the process working directory, keeping the singleton's
/// bookkeeping consistent with the real process state.
pub fn chdir(path: &str) -> Result<(), WorkdirError> {
    let mut wd = process_workdir().lock().unwrap();
    let prev = wd.current.clone();
    wd.chdir(path)?;
    if let Err(source) = env::set_current_dir(&wd.current) {
        wd.current = prev;
        return Err(WorkdirError::Rejected {
            path: path.to_string(),
            source,
        });
    }
    tracing::debug!("working directory now {}", wd.current.display());
    Ok(())
}

/// Best-effort process-wide reset to a previously obtained directory.
pub fn restore(path: &str) {
    let mut wd = process_workdir().lock().unwrap();
    let prev = wd.current.clone();
    if let Err(err) = wd.chdir(path) {
        tracing::warn!("restore to {path:?} failed: {err}");
        return;
    }
    if env::set_current_dir(&wd.current).is_err() {
        tracing::warn!("restore to {path:?} rejected by the host");
        wd.current = prev;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn standalone_context_does_not_touch_process_state() {
        let dir = tempdir().unwrap();
        let before = env::current_dir().unwrap();
        let mut wd = WorkDir::new();
        wd.chdir(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(wd.cwd(), dir.path().display().to_string());
        assert_eq!(env::current_dir().unwrap(), before);
    }

    #[test]
    fn chdir_missing_directory_fails() {
        let mut wd = WorkDir::new();
        let err = wd.chdir("/no/such/directory/urlkit").unwrap_err();
        assert!(matches!(err, WorkdirError::NotFound(_)));
    }

    #[test]
    fn chdir_file_target_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        let mut wd = WorkDir::new();
        let err = wd.chdir(file.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, WorkdirError::NotADirectory(_)));
    }

    #[test]
    fn chdir_relative_resolves_against_current() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let mut wd = WorkDir::new();
        wd.chdir(dir.path().to_str().unwrap()).unwrap();
        wd.chdir("sub").unwrap();
        assert_eq!(wd.cwd(), dir.path().join("sub").display().to_string());
    }

    #[test]
    fn restore_failure_keeps_previous_directory() {
        let dir = tempdir().unwrap();
        let mut wd = WorkDir::new();
        wd.chdir(dir.path().to_str().unwrap()).unwrap();
        wd.restore("/no/such/directory/urlkit");
        assert_eq!(wd.cwd(), dir.path().display().to_string());
    }
}
