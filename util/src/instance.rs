//! Reading instance files.

use std::path::{Path, PathBuf};

use linesep::{PointRegistry, SeparatorConfig};

use crate::InstanceError;

/// The contents of an instance file, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct RawInstance {
    /// The point count that the file claims.
    pub declared: usize,
    /// The coordinate pairs actually present.
    pub coords: Vec<(f64, f64)>,
}

/// The path of instance number `number` in `dir`: `instance01`, `instance02`, ...
pub fn instance_path(dir: &Path, number: u32) -> PathBuf {
    dir.join(format!("instance{number:02}"))
}

/// Parses the text of an instance file.
///
/// `path` is only used for error messages. An empty file is reported as an
/// instance with no points; a count that doesn't match the number of pairs is
/// left for [`PointRegistry::load`] to reject.
pub fn parse_instance(text: &str, path: &Path) -> Result<RawInstance, InstanceError> {
    let mut tokens = text.split_whitespace().enumerate();

    let Some((_, count)) = tokens.next() else {
        return Err(InstanceError::Invalid {
            path: path.to_owned(),
            source: linesep::InvalidInstance::NoPoints,
        });
    };
    let declared = count.parse::<usize>().map_err(|_| InstanceError::Parse {
        path: path.to_owned(),
        position: 0,
        token: count.to_owned(),
    })?;

    let numbers = tokens
        .map(|(position, token)| {
            token
                .parse::<f64>()
                .ok()
                .filter(|c| c.is_finite())
                .ok_or_else(|| InstanceError::Parse {
                    path: path.to_owned(),
                    position,
                    token: token.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.len() % 2 != 0 {
        return Err(InstanceError::UnpairedCoordinate {
            path: path.to_owned(),
        });
    }

    let coords = numbers.chunks_exact(2).map(|c| (c[0], c[1])).collect();
    Ok(RawInstance { declared, coords })
}

/// Reads and validates an instance file.
pub fn read_instance(path: &Path, config: &SeparatorConfig) -> Result<PointRegistry, InstanceError> {
    let text = std::fs::read_to_string(path).map_err(|e| InstanceError::io(path, e))?;
    let raw = parse_instance(&text, path)?;
    log::debug!(
        "{}: {} points declared, {} supplied",
        path.display(),
        raw.declared,
        raw.coords.len()
    );
    PointRegistry::load(raw.declared, &raw.coords, config).map_err(|source| {
        InstanceError::Invalid {
            path: path.to_owned(),
            source,
        }
    })
}
