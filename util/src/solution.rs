//! Writing, reading and checking solution files.

use std::path::{Path, PathBuf};

use linesep::{Axis, Line, PointIdx, PointRegistry, Separation};

use crate::InstanceError;

/// The path of the solution for instance number `number` in `dir`.
pub fn solution_path(dir: &Path, number: u32) -> PathBuf {
    dir.join(format!("greedy_solution_{number:02}"))
}

/// Writes the committed lines of `separation`, in commit order.
pub fn write_solution(path: &Path, separation: &Separation) -> Result<(), InstanceError> {
    std::fs::write(path, separation.solution_text()).map_err(|e| InstanceError::io(path, e))
}

/// Parses the text of a solution file.
///
/// The count on the first line has to match the number of lines that follow.
pub fn parse_solution(text: &str, path: &Path) -> Result<Vec<Line>, InstanceError> {
    let bad_line = |line: usize| InstanceError::BadSolutionLine {
        path: path.to_owned(),
        line,
    };

    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());
    let (_, count) = lines.next().ok_or_else(|| bad_line(1))?;
    let count: usize = count.parse().map_err(|_| bad_line(1))?;

    let mut ret = Vec::with_capacity(count);
    for (number, entry) in lines {
        let mut parts = entry.split_whitespace();
        let axis = parts
            .next()
            .and_then(|tag| {
                let mut chars = tag.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Axis::from_line_tag(c),
                    _ => None,
                }
            })
            .ok_or_else(|| bad_line(number))?;
        let coordinate = parts
            .next()
            .and_then(|c| c.parse::<f64>().ok())
            .ok_or_else(|| bad_line(number))?;
        if parts.next().is_some() {
            return Err(bad_line(number));
        }
        ret.push(Line::new(axis, coordinate));
    }

    if ret.len() != count {
        return Err(bad_line(1));
    }
    Ok(ret)
}

/// Finds the pairs of points that none of `lines` separates.
///
/// The result is empty exactly when `lines` is a valid solution.
pub fn verify(registry: &PointRegistry, lines: &[Line]) -> Vec<(PointIdx, PointIdx)> {
    let points = registry.points();
    let mut ret = Vec::new();
    for (i, p) in points.iter() {
        for (j, q) in points.iter().filter(|(j, _)| *j > i) {
            if !lines.iter().any(|line| line.separates(p, q)) {
                ret.push((i, j));
            }
        }
    }
    ret
}
