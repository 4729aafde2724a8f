/// Axis-aligned bounding box in integer screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Aabb {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Strict-inequality AABB overlap: the boxes collide only when overlap is
/// confirmed independently on both axes, and edges that merely touch do not
/// count. Symmetric in its arguments.
pub fn boxes_overlap(a: Aabb, b: Aabb) -> bool {
    axis_overlap(a.x, a.w, b.x, b.w) && axis_overlap(a.y, a.h, b.y, b.h)
}

/// One edge of either span must fall strictly inside the other span.
fn axis_overlap(a0: i32, a_len: i32, b0: i32, b_len: i32) -> bool {
    let a1 = a0 + a_len;
    let b1 = b0 + b_len;
    (b0 < a0 && a0 < b1)
        || (b0 < a1 && a1 < b1)
        || (a0 < b0 && b0 < a1)
        || (a0 < b1 && b1 < a1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_collide() {
        let a = Aabb::new(0, 0, 10, 10);
        let b = Aabb::new(5, 5, 10, 10);
        assert!(boxes_overlap(a, b));
    }

    #[test]
    fn contained_box_collides() {
        let outer = Aabb::new(0, 0, 20, 20);
        let inner = Aabb::new(5, 5, 2, 2);
        assert!(boxes_overlap(outer, inner));
        assert!(boxes_overlap(inner, outer));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Aabb::new(0, 0, 10, 10);
        let right_of_a = Aabb::new(10, 0, 10, 10);
        let below_a = Aabb::new(0, 10, 10, 10);
        assert!(!boxes_overlap(a, right_of_a));
        assert!(!boxes_overlap(a, below_a));
    }

    #[test]
    fn touching_corner_does_not_collide() {
        let a = Aabb::new(0, 0, 10, 10);
        let corner = Aabb::new(10, 10, 10, 10);
        assert!(!boxes_overlap(a, corner));
    }

    #[test]
    fn single_axis_overlap_is_not_a_collision() {
        let a = Aabb::new(0, 0, 10, 10);
        let beside = Aabb::new(5, 30, 10, 10);
        assert!(!boxes_overlap(a, beside));
    }

    #[test]
    fn overlap_is_symmetric() {
        let pairs = [
            (Aabb::new(0, 0, 10, 10), Aabb::new(5, 5, 10, 10)),
            (Aabb::new(0, 0, 10, 10), Aabb::new(10, 0, 10, 10)),
            (Aabb::new(-4, -4, 8, 8), Aabb::new(0, 0, 2, 2)),
            (Aabb::new(0, 0, 10, 10), Aabb::new(0, 0, 10, 10)),
        ];
        for (a, b) in pairs {
            assert_eq!(boxes_overlap(a, b), boxes_overlap(b, a));
        }
    }

    #[test]
    fn coincident_boxes_have_no_strictly_interior_edge() {
        // Every edge lands exactly on the other box's edge, so the strict
        // comparison finds no interior crossing.
        let a = Aabb::new(3, 3, 6, 6);
        assert!(!boxes_overlap(a, a));
    }
}
