//! Output file naming and collision handling.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use recibos_model::CollisionPolicy;
use tracing::warn;

use crate::error::RowError;

/// Replaces path separators so a value can be used inside a file name.
pub fn sanitize_component(value: &str) -> String {
    value.replace(['/', '\\'], "_")
}

/// `recibo_depto_{unit}_{date}.{extension}`, e.g. `recibo_depto_101_01_03_2024.txt`.
pub fn receipt_file_name(unit: &str, date: &str, extension: &str) -> String {
    format!("{}.{extension}", receipt_stem(unit, date))
}

fn receipt_stem(unit: &str, date: &str) -> String {
    format!(
        "recibo_depto_{}_{}",
        sanitize_component(unit),
        sanitize_component(date)
    )
}

/// Hands out output paths for one batch, applying the collision policy.
///
/// A path counts as produced only once [`commit`](Self::commit) records it,
/// so a row that fails to render or write leaves its name free.
#[derive(Debug)]
pub struct OutputPlanner {
    dir: PathBuf,
    policy: CollisionPolicy,
    produced: HashSet<PathBuf>,
}

impl OutputPlanner {
    pub fn new(dir: &Path, policy: CollisionPolicy) -> Self {
        Self {
            dir: dir.to_path_buf(),
            policy,
            produced: HashSet::new(),
        }
    }

    /// Picks the output path for a row without recording it.
    pub fn plan(&self, unit: &str, date: &str, extension: &str) -> Result<PathBuf, RowError> {
        let path = self.dir.join(receipt_file_name(unit, date, extension));
        if !self.produced.contains(&path) {
            return Ok(path);
        }
        match self.policy {
            CollisionPolicy::Overwrite => {
                warn!(path = %path.display(), "output name reused, overwriting earlier receipt");
                Ok(path)
            }
            CollisionPolicy::Suffix => {
                let stem = receipt_stem(unit, date);
                let candidate = (2usize..)
                    .map(|n| self.dir.join(format!("{stem}_{n}.{extension}")))
                    .find(|candidate| !self.produced.contains(candidate))
                    .unwrap_or(path);
                warn!(path = %candidate.display(), "output name reused, writing with suffix");
                Ok(candidate)
            }
            CollisionPolicy::Fail => Err(RowError::OutputCollision { path }),
        }
    }

    /// Records a path whose file was written.
    pub fn commit(&mut self, path: PathBuf) {
        self.produced.insert(path);
    }

    /// Number of distinct paths written so far.
    pub fn produced(&self) -> usize {
        self.produced.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(planner: &mut OutputPlanner, unit: &str, date: &str) -> PathBuf {
        let path = planner.plan(unit, date, "txt").unwrap();
        planner.commit(path.clone());
        path
    }

    #[test]
    fn file_name_replaces_separators() {
        assert_eq!(
            receipt_file_name("101", "01/03/2024", "txt"),
            "recibo_depto_101_01_03_2024.txt"
        );
        assert_eq!(
            receipt_file_name("B/2", "2024\\03", "json"),
            "recibo_depto_B_2_2024_03.json"
        );
    }

    #[test]
    fn overwrite_returns_same_path() {
        let mut planner = OutputPlanner::new(Path::new("out"), CollisionPolicy::Overwrite);
        let first = write(&mut planner, "101", "01/03/2024");
        let second = write(&mut planner, "101", "01/03/2024");
        assert_eq!(first, second);
        assert_eq!(planner.produced(), 1);
    }

    #[test]
    fn suffix_appends_counter() {
        let mut planner = OutputPlanner::new(Path::new("out"), CollisionPolicy::Suffix);
        write(&mut planner, "101", "01/03/2024");
        let second = write(&mut planner, "101", "01/03/2024");
        let third = write(&mut planner, "101", "01/03/2024");
        assert_eq!(second, Path::new("out/recibo_depto_101_01_03_2024_2.txt"));
        assert_eq!(third, Path::new("out/recibo_depto_101_01_03_2024_3.txt"));
    }

    #[test]
    fn suffix_skips_names_taken_by_other_rows() {
        let mut planner = OutputPlanner::new(Path::new("out"), CollisionPolicy::Suffix);
        write(&mut planner, "101", "x_2");
        write(&mut planner, "101", "x");
        let again = write(&mut planner, "101", "x");
        assert_eq!(again, Path::new("out/recibo_depto_101_x_3.txt"));
    }

    #[test]
    fn fail_policy_rejects_written_name() {
        let mut planner = OutputPlanner::new(Path::new("out"), CollisionPolicy::Fail);
        write(&mut planner, "101", "01/03/2024");
        let result = planner.plan("101", "01/03/2024", "txt");
        assert!(matches!(result, Err(RowError::OutputCollision { .. })));
    }

    #[test]
    fn planned_path_stays_free_until_committed() {
        let mut planner = OutputPlanner::new(Path::new("out"), CollisionPolicy::Fail);
        let first = planner.plan("101", "01/03/2024", "txt").unwrap();
        let retry = planner.plan("101", "01/03/2024", "txt").unwrap();
        assert_eq!(first, retry);
        assert_eq!(planner.produced(), 0);

        planner.commit(retry);
        assert!(planner.plan("101", "01/03/2024", "txt").is_err());
    }

    #[test]
    fn suffix_is_not_used_for_unwritten_name() {
        let planner = OutputPlanner::new(Path::new("out"), CollisionPolicy::Suffix);
        planner.plan("101", "01/03/2024", "txt").unwrap();
        let next = planner.plan("101", "01/03/2024", "txt").unwrap();
        assert_eq!(next, Path::new("out/recibo_depto_101_01_03_2024.txt"));
    }
}
