use std::path::{Path, PathBuf};

use serde::Deserialize;

pub(crate) const DEFAULT_CONFIG: &str = "rmerge.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub(crate) struct Options {
    /// Split the pooled input into this many worker lists, 0 keeps one list
    /// per input file
    pub workers: usize,
    /// Whether the lists should be sorted and merged by rank
    pub sorted: bool,
    /// Reverse the order of unsorted output
    pub tac: bool,
    /// How many items to print, 0 prints everything
    pub count: usize,
    pub log_file: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            workers: 0,
            sorted: true,
            tac: false,
            count: 0,
            log_file: PathBuf::from("/tmp/rmerge.log"),
        }
    }
}

/// Read options from `path` if given, otherwise from the default config file
/// in the working directory if it exists.
pub(crate) fn read_config(path: Option<&Path>) -> anyhow::Result<Options> {
    match path {
        Some(path) => load(path, true),
        None => load(Path::new(DEFAULT_CONFIG), false),
    }
}

fn load(path: &Path, required: bool) -> anyhow::Result<Options> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(required))
        .build()?;

    let options = config.try_deserialize::<Options>()?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::{NamedTempFile, TempDir};

    use super::*;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("rmerge")
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_when_missing() {
        let dir = TempDir::new().unwrap();
        let opts = load(&dir.path().join(DEFAULT_CONFIG), false).unwrap();
        assert!(opts.sorted);
        assert!(!opts.tac);
        assert_eq!(opts.workers, 0);
        assert_eq!(opts.count, 0);
    }

    #[test]
    fn partial_config() {
        let file = write_config("workers = 4\ntac = true\n");
        let opts = read_config(Some(file.path())).unwrap();
        assert_eq!(opts.workers, 4);
        assert!(opts.tac);
        assert!(opts.sorted);
    }

    #[test]
    fn explicit_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG);
        assert!(read_config(Some(&path)).is_err());
    }
}
