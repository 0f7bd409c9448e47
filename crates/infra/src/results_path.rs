// crates/infra/src/results_path.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use line_tools_shared_kernel::{InfrastructureError, Result};

pub const RESULTS_SUFFIX: &str = "_Results_generated.txt";
pub const RESULTS_DIR_NAME: &str = "results";

/// Decides where a run's results file goes.
///
/// Precedence: an explicit directory, then a `results` directory next to the
/// tool's own directory (`<exe dir>/../results`) when it exists, then the
/// current working directory.
#[derive(Debug, Clone, Default)]
pub struct ResultsLocation {
    tool_dir: Option<PathBuf>,
    override_dir: Option<PathBuf>,
}

impl ResultsLocation {
    pub fn new(tool_dir: Option<PathBuf>, override_dir: Option<PathBuf>) -> Self {
        Self { tool_dir, override_dir }
    }

    /// Location relative to the running executable.
    pub fn for_current_exe(override_dir: Option<PathBuf>) -> Self {
        let tool_dir = std::env::current_exe()
            .map_err(|err| log::debug!("cannot locate current executable: {err}"))
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::new(tool_dir, override_dir)
    }

    /// `{stem}_Results_generated.txt` for `input`.
    pub fn file_name(input: &Path) -> String {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{stem}{RESULTS_SUFFIX}")
    }

    fn sibling_results_dir(&self) -> Option<PathBuf> {
        let dir = self.tool_dir.as_ref()?.join("..").join(RESULTS_DIR_NAME);
        dir.is_dir().then_some(dir)
    }

    /// Full path of the results file for `input`.
    ///
    /// # Errors
    /// Fails when an explicit directory cannot be created.
    pub fn resolve(&self, input: &Path) -> Result<PathBuf> {
        let file_name = Self::file_name(input);

        if let Some(dir) = &self.override_dir {
            fs::create_dir_all(dir).map_err(|source| InfrastructureError::ResultsDirectory {
                path: dir.clone(),
                source,
            })?;
            return Ok(dir.join(file_name));
        }

        Ok(match self.sibling_results_dir() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn file_name_drops_directory_and_extension() {
        assert_eq!(
            ResultsLocation::file_name(Path::new("data/TC1.txt")),
            "TC1_Results_generated.txt"
        );
        assert_eq!(
            ResultsLocation::file_name(Path::new("archive.tar.gz")),
            "archive.tar_Results_generated.txt"
        );
        assert_eq!(
            ResultsLocation::file_name(Path::new("noext")),
            "noext_Results_generated.txt"
        );
    }

    #[test]
    fn sibling_results_directory_is_used_when_present() {
        let root = tempdir().unwrap();
        let bin = root.path().join("bin");
        fs::create_dir(&bin).unwrap();
        fs::create_dir(root.path().join("results")).unwrap();

        let location = ResultsLocation::new(Some(bin.clone()), None);
        let path = location.resolve(Path::new("input.txt")).unwrap();

        assert_eq!(path, bin.join("..").join("results").join("input_Results_generated.txt"));
    }

    #[test]
    fn falls_back_to_working_directory() {
        let root = tempdir().unwrap();
        let location = ResultsLocation::new(Some(root.path().join("bin")), None);

        let path = location.resolve(Path::new("dir/words.txt")).unwrap();
        assert_eq!(path, PathBuf::from("words_Results_generated.txt"));
    }

    #[test]
    fn override_directory_wins_and_is_created() {
        let root = tempdir().unwrap();
        fs::create_dir(root.path().join("results")).unwrap();
        let custom = root.path().join("custom").join("nested");

        let location = ResultsLocation::new(Some(root.path().join("bin")), Some(custom.clone()));
        let path = location.resolve(Path::new("nums.txt")).unwrap();

        assert!(custom.is_dir());
        assert_eq!(path, custom.join("nums_Results_generated.txt"));
    }
}
