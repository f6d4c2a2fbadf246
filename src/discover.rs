use anyhow::{bail, Context, Result};
use glob::{glob, Pattern};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// List the `*.zip` files directly inside `input_dir`, sorted by path.
///
/// A missing or unreadable `input_dir` is an error; an empty one is not.
pub fn discover_zips(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let meta = fs::metadata(input_dir)
        .with_context(|| format!("reading input directory {:?}", input_dir))?;
    if !meta.is_dir() {
        bail!("input path {:?} is not a directory", input_dir);
    }
    fs::read_dir(input_dir)
        .with_context(|| format!("listing input directory {:?}", input_dir))?;

    let pattern = format!(
        "{}/*.zip",
        Pattern::escape(&input_dir.to_string_lossy())
    );
    let mut zips: Vec<PathBuf> = glob(&pattern)
        .with_context(|| format!("Failed to read glob pattern '{}'", pattern))?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    zips.sort();
    Ok(zips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_only_top_level_zips_in_order() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("b.csv.zip"), b"")?;
        fs::write(dir.path().join("a.csv.zip"), b"")?;
        fs::write(dir.path().join("notes.txt"), b"")?;
        fs::create_dir(dir.path().join("nested"))?;
        fs::write(dir.path().join("nested").join("c.zip"), b"")?;

        let names: Vec<String> = discover_zips(dir.path())?
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.csv.zip", "b.csv.zip"]);
        Ok(())
    }

    #[test]
    fn empty_dir_is_fine() -> Result<()> {
        let dir = tempdir()?;
        assert!(discover_zips(dir.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_dir_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let missing = dir.path().join("nope");
        assert!(discover_zips(&missing).is_err());

        let file = dir.path().join("file.zip");
        fs::write(&file, b"")?;
        assert!(discover_zips(&file).is_err());
        Ok(())
    }
}
