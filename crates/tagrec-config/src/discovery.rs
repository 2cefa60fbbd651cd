//! Locating the `.tagrec.toml` files that apply to a catalog directory.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".tagrec.toml";

/// Lists the config files that apply to `cwd`, highest precedence first.
///
/// Every ancestor of `cwd` is checked, nearest first. A file with `root = true`
/// ends the list. Otherwise `~/.tagrec.toml` is appended when it exists.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    config_files_between(cwd, home.as_deref())
}

/// Returns the path of the per-user config file (`~/.tagrec.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Walks from `cwd` to the filesystem root, then falls back to `home`.
fn config_files_between(cwd: &Path, home: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for dir in cwd.ancestors() {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            continue;
        }
        let is_root = is_root_config(&path);
        files.push(path);
        if is_root {
            return files;
        }
    }

    // The walk already picked up the home file when cwd lies under home.
    if let Some(global) = home.map(|h| h.join(CONFIG_FILENAME))
        && global.is_file()
        && !files.contains(&global)
    {
        files.push(global);
    }
    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    /// Writes a config file with `contents` under `dir`, creating it first.
    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(CONFIG_FILENAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn catalog_and_project_configs_precede_home() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path().join("home");
        let global = write_config(&home, "[output]\nprecision = 3\n");
        let project = write_config(&tmp.path().join("work/noaa"), "[suggest]\ntop_n = 4\n");
        let catalog = write_config(&tmp.path().join("work/noaa/2016"), "[export]\ntop_n = 2\n");
        let cwd = tmp.path().join("work/noaa/2016/runs");
        fs::create_dir_all(&cwd).unwrap();

        let files = config_files_between(&cwd, Some(&home));

        // Files above the temp dir belong to the host and are not asserted on.
        assert_eq!(files[..2], [catalog, project]);
        assert_eq!(files.last(), Some(&global));
    }

    #[test]
    fn root_config_hides_parents_and_home() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path().join("home");
        write_config(&home, "[output]\nprecision = 3\n");
        write_config(&tmp.path().join("work"), "[suggest]\ntop_n = 4\n");
        let catalog = write_config(
            &tmp.path().join("work/catalog"),
            "root = true\n[stopwords]\nlanguage = \"none\"\n",
        );

        let files = config_files_between(&tmp.path().join("work/catalog"), Some(&home));

        assert_eq!(files, vec![catalog]);
    }

    #[test]
    fn home_config_found_by_walk_is_listed_once() {
        let tmp = tempfile::tempdir().unwrap();
        let home = tmp.path().join("home");
        let global = write_config(&home, "[output]\nprecision = 3\n");
        let catalog = home.join("catalogs/noaa");
        fs::create_dir_all(&catalog).unwrap();

        let files = config_files_between(&catalog, Some(&home));

        assert_eq!(files.iter().filter(|p| **p == global).count(), 1);
        assert_eq!(files.first(), Some(&global));
    }

    #[test]
    fn missing_home_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let catalog = write_config(tmp.path(), "root = true\n");

        assert_eq!(config_files_between(tmp.path(), None), vec![catalog]);
    }
}
