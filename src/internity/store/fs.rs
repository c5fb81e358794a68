use super::{format, Snapshot, Storage};
use crate::error::{InternityError, Result};
use crate::model::Internship;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Keeps the list in a single text file.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the file, if the path names one.
    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn ensure_dir(&self) -> Result<()> {
        if let Some(dir) = self.parent_dir() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(InternityError::Io)?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = format!(".internity-{}.tmp", Uuid::new_v4());
        match self.parent_dir() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Writes `contents` to a fresh temp file next to the target and flushes it to disk.
    /// The target is not touched.
    pub(crate) fn stage(&self, contents: &str) -> Result<PathBuf> {
        let tmp = self.temp_path();
        let written = File::create(&tmp).and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        });
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(InternityError::Io(err));
        }
        Ok(tmp)
    }

    /// Moves a staged file over the target.
    pub(crate) fn commit(&self, tmp: &Path) -> Result<()> {
        match fs::rename(tmp, &self.path) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "rename failed, copying instead");
                let copied = fs::copy(tmp, &self.path);
                let _ = fs::remove_file(tmp);
                copied.map(|_| ()).map_err(InternityError::Io)
            }
        }
    }

    /// Deletes every other regular file in the data directory. Failures are logged, not returned.
    fn remove_other_files(&self) {
        let (Some(dir), Some(own_name)) = (self.parent_dir(), self.path.file_name()) else {
            return;
        };
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, dir = %dir.display(), "could not scan data directory");
                return;
            }
        };
        for entry in entries.flatten() {
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file || entry.file_name() == own_name {
                continue;
            }
            let path = entry.path();
            match fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "removed stray file"),
                Err(err) => warn!(error = %err, path = %path.display(), "could not remove stray file"),
            }
        }
    }
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Snapshot> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(Snapshot::default());
        }

        let content = fs::read_to_string(&self.path).map_err(InternityError::Io)?;
        let snapshot = format::parse(&content)?;
        info!(
            path = %self.path.display(),
            loaded = snapshot.internships.len(),
            skipped = snapshot.warnings.len(),
            "loaded internships"
        );

        self.remove_other_files();
        Ok(snapshot)
    }

    fn save(&mut self, internships: &[Internship], username: Option<&str>) -> Result<()> {
        let contents = format::render(internships, username)?;
        self.ensure_dir()?;
        let tmp = self.stage(&contents)?;
        self.commit(&tmp)?;
        debug!(path = %self.path.display(), count = internships.len(), "saved internships");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::fixtures::internship;
    use crate::model::Status;
    use tempfile::tempdir;

    fn sample() -> Vec<Internship> {
        vec![
            internship("Google", "SWE", "01-01-2025", 8000).with_status(Status::Applied),
            internship("A|B", "100%", "15-11-2025", 0),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = FileStorage::new(dir.path().join("internity.txt"));
        let snap = store.load().unwrap();
        assert!(snap.internships.is_empty());
        assert!(snap.username.is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn save_creates_directories_and_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("internity.txt");
        let mut store = FileStorage::new(&path);

        store.save(&sample(), Some("Walter")).unwrap();
        assert!(path.exists());

        let snap = store.load().unwrap();
        assert_eq!(snap.internships, sample());
        assert_eq!(snap.username.as_deref(), Some("Walter"));
        assert!(snap.warnings.is_empty());
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let mut store = FileStorage::new(dir.path().join("internity.txt"));
        store.save(&sample(), None).unwrap();
        store.save(&sample()[..1], None).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("internity.txt")]);
    }

    #[test]
    fn interrupted_save_keeps_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("internity.txt");
        let mut store = FileStorage::new(&path);
        store.save(&sample(), Some("Walter")).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        // Stage a replacement but never commit it.
        let staged = format::render(&[], Some("Jesse")).unwrap();
        let tmp = store.stage(&staged).unwrap();
        assert!(tmp.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), before);

        // The leftover temp file is swept on the next load.
        let snap = store.load().unwrap();
        assert_eq!(snap.internships.len(), 2);
        assert_eq!(snap.username.as_deref(), Some("Walter"));
        assert!(!tmp.exists());
    }

    #[test]
    fn failed_render_does_not_touch_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("internity.txt");
        let mut store = FileStorage::new(&path);
        store.save(&sample(), Some("Walter")).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        let err = store.save(&[], Some("two\nlines")).unwrap_err();
        assert!(matches!(err, InternityError::Format(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn commit_onto_a_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("internity.txt");
        fs::create_dir(&path).unwrap();
        let store = FileStorage::new(&path);

        let tmp = store.stage("Username (in line below):\n\n").unwrap();
        let err = store.commit(&tmp).unwrap_err();
        assert!(matches!(err, InternityError::Io(_)));
        assert!(!tmp.exists());
        assert!(path.is_dir());
    }

    #[test]
    fn load_removes_other_files_but_not_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("internity.txt");
        let mut store = FileStorage::new(&path);
        store.save(&sample(), None).unwrap();

        fs::write(dir.path().join("notes.txt"), "stray").unwrap();
        fs::create_dir(dir.path().join("keep")).unwrap();

        store.load().unwrap();
        assert!(!dir.path().join("notes.txt").exists());
        assert!(dir.path().join("keep").is_dir());
        assert!(path.exists());
    }

    #[test]
    fn bad_header_is_a_format_error_and_skips_cleanup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("internity.txt");
        fs::write(&path, "not a header\nbob\n").unwrap();
        fs::write(dir.path().join("other.txt"), "x").unwrap();

        let store = FileStorage::new(&path);
        assert!(matches!(store.load(), Err(InternityError::Format(_))));
        assert!(dir.path().join("other.txt").exists());
    }

    #[test]
    fn malformed_lines_load_with_warnings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("internity.txt");
        fs::write(
            &path,
            "Username (in line below):\n\nGoogle | SWE | 01-01-2025 | 1 | Pending\nbroken line\n",
        )
        .unwrap();

        let snap = FileStorage::new(&path).load().unwrap();
        assert_eq!(snap.internships.len(), 1);
        assert_eq!(snap.warnings.len(), 1);
        assert_eq!(snap.warnings[0].line, "broken line");
    }
}
