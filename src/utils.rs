/// Triangular pairing function for unordered node pairs.
///
/// ```text
/// (a, b) -> b * (b - 1) / 2 + a,   where a < b
/// ```
///
/// The numbering does not depend on the total number of nodes, so edge indices stay
/// valid when a graph with more nodes is built:
///
/// ```text
/// a\b  1  2  3  4
/// ---------------
/// 0    0  1  3  6
/// 1       2  4  7
/// 2          5  8
/// 3             9
/// ```
pub fn pairing_triangular(a: usize, b: usize) -> usize {
    assert!(a < b, "Pairing requires a < b, got ({}, {})", a, b);
    b * (b - 1) / 2 + a
}

/// Inverse of [`pairing_triangular`]: returns `(a, b)` with `a < b`.
pub fn unpairing_triangular(e: usize) -> (usize, usize) {
    // Largest b with b * (b - 1) / 2 <= e, i.e. b = floor((1 + sqrt(8e + 1)) / 2).
    let b = (1 + isqrt(8 * e + 1)) / 2;
    let a = e - b * (b - 1) / 2;
    (a, b)
}

/// Number of edges of a complete graph on `nodes` nodes.
pub fn edge_count(nodes: usize) -> usize {
    nodes * nodes.saturating_sub(1) / 2
}

/// Smallest node count whose complete graph has at least `edges` edges.
pub fn min_nodes_for_edges(edges: usize) -> usize {
    let mut n = 1;
    while edge_count(n) < edges {
        n += 1;
    }
    n
}

/// Integer square root (floor).
fn isqrt(x: usize) -> usize {
    if x < 2 {
        return x;
    }
    // Newton iteration from an upper bound.
    let mut r = x;
    let mut next = (r + x / r) / 2;
    while next < r {
        r = next;
        next = (r + x / r) / 2;
    }
    r
}
