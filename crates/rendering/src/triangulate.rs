//! Ear-clipping triangulation so concave region outlines fill correctly.

use bevy_egui::egui::Pos2;

fn cross(o: Pos2, a: Pos2, b: Pos2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Twice the signed area; positive for counter-clockwise in a y-up frame.
pub fn signed_area2(ring: &[Pos2]) -> f32 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum()
}

fn in_triangle(p: Pos2, a: Pos2, b: Pos2, c: Pos2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Triangles over the vertices of `ring` (a closing duplicate vertex is
/// ignored). Returns indices into `ring`.
pub fn triangulate(ring: &[Pos2]) -> Vec<[usize; 3]> {
    let mut n = ring.len();
    if n >= 2 && ring[0] == ring[n - 1] {
        n -= 1;
    }
    if n < 3 {
        return Vec::new();
    }
    let orientation = signed_area2(&ring[..n]).signum();
    let mut remaining: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);

    let mut i = 0;
    let mut misses = 0;
    while remaining.len() > 3 {
        let m = remaining.len();
        let (a, b, c) = (remaining[(i + m - 1) % m], remaining[i], remaining[(i + 1) % m]);
        if is_ear(ring, &remaining, a, b, c, orientation) {
            triangles.push([a, b, c]);
            remaining.remove(i);
            misses = 0;
            if i >= remaining.len() {
                i = 0;
            }
        } else {
            misses += 1;
            if misses > m {
                // Self-intersecting input; fan the rest.
                break;
            }
            i = (i + 1) % m;
        }
    }
    for k in 1..remaining.len().saturating_sub(1) {
        triangles.push([remaining[0], remaining[k], remaining[k + 1]]);
    }
    triangles
}

fn is_ear(ring: &[Pos2], remaining: &[usize], a: usize, b: usize, c: usize, orientation: f32) -> bool {
    let turn = cross(ring[a], ring[b], ring[c]);
    if turn == 0.0 {
        return true;
    }
    if turn.signum() != orientation {
        return false;
    }
    remaining.iter().all(|&j| {
        j == a
            || j == b
            || j == c
            || ring[j] == ring[a]
            || ring[j] == ring[b]
            || ring[j] == ring[c]
            || !in_triangle(ring[j], ring[a], ring[b], ring[c])
    })
}
