use heat_core::{Grid, save_dat};
use std::path::{Path, PathBuf};

/// Saves every `every`-th field as `<stem>_<step>.dat` beside the main output.
pub struct SnapshotWriter {
    dir: PathBuf,
    stem: String,
    every: usize,
    written: usize,
    failed: bool,
}

impl SnapshotWriter {
    pub fn new(out: &Path, every: usize) -> SnapshotWriter {
        let dir = out.parent().map(Path::to_path_buf).unwrap_or_default();
        let stem = out
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data".to_string());
        SnapshotWriter {
            dir,
            stem,
            every: every.max(1),
            written: 0,
            failed: false,
        }
    }

    pub fn frame_path(&self, step: usize) -> PathBuf {
        self.dir.join(format!("{}_{step:06}.dat", self.stem))
    }

    pub fn written(&self) -> usize {
        self.written
    }

    /// Frame failures are reported once and otherwise ignored.
    pub fn observe(&mut self, step: usize, grid: &Grid) {
        if self.failed || step % self.every != 0 {
            return;
        }
        let path = self.frame_path(step);
        match save_dat(&path, grid) {
            Ok(()) => self.written += 1,
            Err(e) => {
                eprintln!("Error: could not write snapshot {}: {e}", path.display());
                self.failed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_sit_next_to_output() {
        let w = SnapshotWriter::new(Path::new("runs/data.dat"), 5);
        assert_eq!(w.frame_path(10), PathBuf::from("runs/data_000010.dat"));

        let bare = SnapshotWriter::new(Path::new("field.dat"), 1);
        assert_eq!(bare.frame_path(3), PathBuf::from("field_000003.dat"));
    }

    #[test]
    fn writes_only_every_kth_step() {
        let dir = std::env::temp_dir().join(format!("heat-cli-snapshots-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut w = SnapshotWriter::new(&dir.join("data.dat"), 2);

        let grid = Grid::zeros(3, 3);
        for step in 1..=5 {
            w.observe(step, &grid);
        }
        assert_eq!(w.written(), 2);
        assert!(w.frame_path(2).exists());
        assert!(w.frame_path(4).exists());
        assert!(!w.frame_path(3).exists());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unwritable_directory_stops_after_first_failure() {
        let mut w = SnapshotWriter::new(Path::new("/nonexistent-heat-dir/data.dat"), 1);
        let grid = Grid::zeros(3, 3);
        w.observe(1, &grid);
        w.observe(2, &grid);
        assert_eq!(w.written(), 0);
    }
}
