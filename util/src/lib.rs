//! File formats and other plumbing around the `linesep` core.
//!
//! An *instance file* holds a point count followed by that many `x y`
//! coordinate pairs, all whitespace-separated. A *solution file* holds the
//! number of committed lines, followed by one `v <x>` or `h <y>` line per
//! committed line, in commit order.

use std::path::{Path, PathBuf};

use linesep::InvalidInstance;

pub mod instance;
pub mod render;
pub mod solution;

pub use instance::{instance_path, parse_instance, read_instance, RawInstance};
pub use solution::{parse_solution, solution_path, verify, write_solution};

/// Something went wrong reading or writing one of our files.
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: token {position} ({token:?}) is not a valid number", path.display())]
    Parse {
        path: PathBuf,
        position: usize,
        token: String,
    },

    #[error("{}: the last coordinate has no partner", path.display())]
    UnpairedCoordinate { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: InvalidInstance,
    },

    #[error("{}: line {line} is not a valid solution line", path.display())]
    BadSolutionLine { path: PathBuf, line: usize },

    #[error("could not parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl InstanceError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        InstanceError::Io {
            path: path.to_owned(),
            source,
        }
    }

    /// Is this error just a missing file?
    ///
    /// When iterating over numbered instances, a missing file marks the end.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            InstanceError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Loads a [`SeparatorConfig`](linesep::SeparatorConfig) from a TOML file.
///
/// Missing keys get their default values.
pub fn load_config(path: &Path) -> Result<linesep::SeparatorConfig, InstanceError> {
    let text = std::fs::read_to_string(path).map_err(|e| InstanceError::io(path, e))?;
    toml::from_str(&text).map_err(|source| InstanceError::Config {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use linesep::{Axis, SeparatorConfig};

    use super::*;

    #[test]
    fn config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linesep.toml");

        std::fs::write(&path, "first_axis = \"y\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(
            config,
            SeparatorConfig {
                first_axis: Axis::Y,
                ..SeparatorConfig::default()
            }
        );

        std::fs::write(&path, "max_points = 12\nfirst_axis = \"x\"\n").unwrap();
        assert_eq!(load_config(&path).unwrap().max_points, 12);

        std::fs::write(&path, "first_axis = \"z\"\n").unwrap();
        assert_matches!(load_config(&path), Err(InstanceError::Config { .. }));
    }

    #[test]
    fn missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.is_not_found());
    }
}
