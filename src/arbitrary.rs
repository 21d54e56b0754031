//! Utilities for fuzz and/or property testing using `arbitrary`.

use arbitrary::Unstructured;

use crate::{separate, Axis, Outcome, SeparatorConfig};

/// Generate an arbitrary float in some range.
pub fn float_in_range(
    start: f64,
    end: f64,
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    let num: u32 = u.arbitrary()?;
    let t = num as f64 / u32::MAX as f64;
    Ok((1.0 - t) * start + t * end)
}

/// Generate a coordinate in `[0, size]`, either a fresh one or one that was
/// already used.
///
/// Shared coordinates are the interesting case for the separator, so we make
/// them common. Fresh coordinates are sometimes snapped to integers, like the
/// inputs we usually get.
fn coordinate(
    size: f64,
    used: &[f64],
    u: &mut Unstructured<'_>,
) -> Result<f64, arbitrary::Error> {
    if !used.is_empty() && u.ratio(1, 4)? {
        return Ok(*u.choose(used)?);
    }
    let c = float_in_range(0.0, size, u)?;
    if u.arbitrary()? {
        Ok(c.round())
    } else {
        Ok(c)
    }
}

/// Generate an arbitrary point set in the square `[0, size] x [0, size]`,
/// with at least one and at most `max_points` points.
pub fn points(
    size: f64,
    max_points: usize,
    u: &mut Unstructured<'_>,
) -> Result<Vec<(f64, f64)>, arbitrary::Error> {
    let n = u.int_in_range(1..=max_points.max(1))?;
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for _ in 0..n {
        let x = coordinate(size, &xs, u)?;
        let y = coordinate(size, &ys, u)?;
        xs.push(x);
        ys.push(y);
    }
    Ok(xs.into_iter().zip(ys).collect())
}

/// Separates an arbitrary point set and checks that the result makes sense.
pub fn check_separation(u: &mut Unstructured<'_>) -> Result<(), arbitrary::Error> {
    let coords = points(50.0, 40, u)?;
    let first_axis: Axis = u.arbitrary()?;
    let config = SeparatorConfig {
        first_axis,
        ..SeparatorConfig::default()
    };
    let sep = separate(&coords, &config).expect("generated instances are valid");
    let n = coords.len();

    let mut unseparated = 0;
    for (i, p) in sep.points().iter().enumerate() {
        for q in &sep.points()[i + 1..] {
            if !sep.separates(p, q) {
                unseparated += 1;
            }
        }
    }
    assert_eq!(sep.remaining(), 2 * unseparated);
    assert_eq!(sep.is_done(), unseparated == 0);

    // Every committed line separated something, so there can't be more of them
    // than there are edges in a spanning tree.
    assert!(sep.lines().len() < n.max(1));
    for axis in Axis::BOTH {
        let stats = sep.stats(axis);
        assert_eq!(stats.generated, n - 1);
        assert!(stats.committed + stats.discarded <= stats.generated);
    }

    let mut xs: Vec<u64> = coords.iter().map(|c| c.0.to_bits()).collect();
    xs.sort();
    xs.dedup();
    if xs.len() == n {
        assert_eq!(sep.outcome(), Outcome::Done);
    }
    Ok(())
}
