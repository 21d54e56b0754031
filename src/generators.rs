//! Utilities for generating examples, benchmarks, and test cases.

type Coords = Vec<(f64, f64)>;

/// `n` points on the main diagonal: `(0, 0), (1, 1), ...`.
///
/// Lines on either axis make the same partitions here, so the separator ends
/// up discarding every candidate on one of the axes.
pub fn diagonal(n: usize) -> Coords {
    (0..n).map(|i| (i as f64, i as f64)).collect()
}

/// An `n` by `n` grid of points with spacing `1`.
///
/// Every column and every row shares a coordinate, so this is the worst case
/// for coordinate ties.
pub fn grid(n: usize) -> Coords {
    (0..n)
        .flat_map(|i| (0..n).map(move |j| (i as f64, j as f64)))
        .collect()
}

/// `n` points with distinct coordinates on both axes, where the y order is a
/// scrambled version of the x order.
///
/// Point `x` gets the rank of `(stride * x) mod p` as its y coordinate, where
/// `p` is the smallest prime that is at least `n`. `stride` should not be a
/// multiple of `p`, or all the keys collide.
pub fn scrambled(n: usize, stride: usize) -> Coords {
    let p = (n.max(2)..).find(|&m| is_prime(m)).unwrap_or(n);
    let mut by_key: Vec<usize> = (0..n).collect();
    by_key.sort_by_key(|&x| (x * stride) % p);

    let mut ret = vec![(0.0, 0.0); n];
    for (rank, x) in by_key.into_iter().enumerate() {
        ret[x] = (x as f64, rank as f64);
    }
    ret
}

fn is_prime(m: usize) -> bool {
    m >= 2 && (2..).take_while(|d| d * d <= m).all(|d| m % d != 0)
}

/// Points placed around `rings` concentric squares, `per_side` points per side
/// of each ring. Coordinates are shifted so they're all non-negative.
pub fn rings(rings: usize, per_side: usize) -> Coords {
    let mut ret = Vec::new();
    let offset = rings as f64 + 1.0;
    for r in 1..=rings {
        let r = r as f64;
        for k in 0..per_side {
            let t = -r + 2.0 * r * k as f64 / per_side as f64;
            ret.push((offset + t, offset - r));
            ret.push((offset + r, offset + t));
            ret.push((offset - t, offset + r));
            ret.push((offset - r, offset - t));
        }
    }
    ret
}
