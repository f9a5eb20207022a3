use crate::geometry::{Aabb, Ray};
use crate::surface::Surface;
use cgmath::Point3;

/// Degenerate-split tolerance: an axis whose extent is smaller than half
/// this value collapses its node to a leaf instead of splitting again, and
/// the same value pads every slab test so axis-aligned rays aren't pruned.
pub const EPS_BVH: f64 = 0.2;

struct Item {
    surface: Surface,
    point: Point3<f64>,
    aabb: Aabb,
}

enum Node {
    Leaf {
        aabb: Aabb,
        surfaces: Vec<Surface>,
    },
    Internal {
        aabb: Aabb,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn aabb(&self) -> &Aabb {
        match self {
            Node::Leaf { aabb, .. } => aabb,
            Node::Internal { aabb, .. } => aabb,
        }
    }
}

/// A bounding volume hierarchy over a fixed set of surfaces, built once by
/// top-down midpoint split and treated as read-only afterward.
pub struct Bvh {
    root: Option<Node>,
}

impl Bvh {
    /// Builds a tree whose leaves collectively contain every input surface
    /// exactly once. `surfaces` pairs each `Surface` with its classifying
    /// point (triangle centroid or sphere center) and its AABB.
    pub fn build(surfaces: Vec<(Surface, Point3<f64>, Aabb)>) -> Self {
        if surfaces.is_empty() {
            return Self { root: None };
        }
        let items: Vec<Item> = surfaces
            .into_iter()
            .map(|(surface, point, aabb)| Item {
                surface,
                point,
                aabb,
            })
            .collect();
        Self {
            root: Some(Self::build_node(items)),
        }
    }

    fn node_aabb(items: &[Item]) -> Aabb {
        let mut aabb = items[0].aabb;
        for item in &items[1..] {
            aabb = aabb.union(&item.aabb);
        }
        aabb
    }

    fn build_node(mut items: Vec<Item>) -> Node {
        let mut aabb = Self::node_aabb(&items);

        if items.len() == 1 {
            return Node::Leaf {
                aabb,
                surfaces: vec![items[0].surface],
            };
        }

        loop {
            let d = aabb.diagonal();
            let axis = if d.x >= d.y && d.x >= d.z {
                0
            } else if d.y >= d.z {
                1
            } else {
                2
            };
            let extent = match axis {
                0 => d.x,
                1 => d.y,
                _ => d.z,
            };

            if extent < EPS_BVH / 2.0 {
                let surfaces = items.iter().map(|i| i.surface).collect();
                return Node::Leaf { aabb, surfaces };
            }

            let mid = match axis {
                0 => (aabb.minima.x + aabb.maxima.x) / 2.0,
                1 => (aabb.minima.y + aabb.maxima.y) / 2.0,
                _ => (aabb.minima.z + aabb.maxima.z) / 2.0,
            };

            let (mut left_items, mut right_items) = (Vec::new(), Vec::new());
            for item in items {
                let coord = match axis {
                    0 => item.point.x,
                    1 => item.point.y,
                    _ => item.point.z,
                };
                if coord < mid {
                    left_items.push(item);
                } else {
                    right_items.push(item);
                }
            }

            if left_items.is_empty() {
                aabb = Self::node_aabb(&right_items);
                items = right_items;
                continue;
            }
            if right_items.is_empty() {
                aabb = Self::node_aabb(&left_items);
                items = left_items;
                continue;
            }

            let left_aabb = Self::node_aabb(&left_items);
            let right_aabb = Self::node_aabb(&right_items);
            return Node::Internal {
                aabb,
                left: Box::new(Self::build_node(left_items)),
                right: Box::new(Self::build_node(right_items)),
            };
        }
    }

    /// Finds the nearest surface hit by `ray` within `(t_min, t_max)`,
    /// skipping `exclude` under surface identity. `test` computes the
    /// intersection parameter for a given surface (resolved by the caller,
    /// typically `Scene`).
    pub fn intersect(
        &self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        exclude: Option<Surface>,
        test: &mut dyn FnMut(Surface, &Ray, f64, f64) -> f64,
    ) -> Option<(f64, Surface)> {
        let root = self.root.as_ref()?;
        Self::intersect_node(root, ray, t_min, t_max, exclude, test)
    }

    fn intersect_node(
        node: &Node,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        exclude: Option<Surface>,
        test: &mut dyn FnMut(Surface, &Ray, f64, f64) -> f64,
    ) -> Option<(f64, Surface)> {
        if !node.aabb().hit(ray, t_min, t_max, EPS_BVH) {
            return None;
        }

        match node {
            Node::Leaf { surfaces, .. } => {
                let mut best: Option<(f64, Surface)> = None;
                for &surface in surfaces {
                    if Some(surface) == exclude {
                        continue;
                    }
                    let t = test(surface, ray, t_min, t_max);
                    if t < t_max && t > t_min {
                        if best.map_or(true, |(best_t, _)| t < best_t) {
                            best = Some((t, surface));
                        }
                    }
                }
                best
            }
            Node::Internal { left, right, .. } => {
                let left_hit = Self::intersect_node(left, ray, t_min, t_max, exclude, test);
                let right_hit = Self::intersect_node(right, ray, t_min, t_max, exclude, test);
                match (left_hit, right_hit) {
                    (Some(l), Some(r)) => Some(if l.0 <= r.0 { l } else { r }),
                    (Some(l), None) => Some(l),
                    (None, Some(r)) => Some(r),
                    (None, None) => None,
                }
            }
        }
    }

    /// Number of leaves in the tree. Used for diagnostic logging.
    pub fn leaf_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        self.root.as_ref().map_or(0, count)
    }

    /// Maximum depth of the tree, counting the root as depth 1. Used for
    /// diagnostic logging.
    pub fn max_depth(&self) -> usize {
        fn depth(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Internal { left, right, .. } => 1 + depth(left).max(depth(right)),
            }
        }
        self.root.as_ref().map_or(0, depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Motility;

    fn surface(i: usize) -> Surface {
        Surface::Sphere {
            motility: Motility::Static,
            index: i,
        }
    }

    fn leaf_count_of(aabb: Aabb, point: Point3<f64>, i: usize) -> (Surface, Point3<f64>, Aabb) {
        (surface(i), point, aabb)
    }

    #[test]
    fn leaves_partition_every_input_surface_exactly_once() {
        let items: Vec<_> = (0..20)
            .map(|i| {
                let x = i as f64;
                let point = Point3::new(x, 0.0, 0.0);
                let aabb = Aabb::new(
                    Point3::new(x - 0.1, -0.1, -0.1),
                    Point3::new(x + 0.1, 0.1, 0.1),
                );
                leaf_count_of(aabb, point, i)
            })
            .collect();

        let bvh = Bvh::build(items);

        fn collect(node: &Node, out: &mut Vec<Surface>) {
            match node {
                Node::Leaf { surfaces, .. } => out.extend(surfaces.iter().copied()),
                Node::Internal { left, right, .. } => {
                    collect(left, out);
                    collect(right, out);
                }
            }
        }
        let mut all = Vec::new();
        if let Some(root) = &bvh.root {
            collect(root, &mut all);
        }
        assert_eq!(all.len(), 20);
        for i in 0..20 {
            assert!(all.contains(&surface(i)));
        }
    }

    #[test]
    fn single_surface_scene_is_a_single_leaf() {
        let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let bvh = Bvh::build(vec![(surface(0), Point3::new(0.0, 0.0, 0.0), aabb)]);
        assert_eq!(bvh.leaf_count(), 1);
        assert_eq!(bvh.max_depth(), 1);
    }

    #[test]
    fn miss_reports_none() {
        let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let bvh = Bvh::build(vec![(surface(0), Point3::new(0.0, 0.0, 0.0), aabb)]);
        let ray = Ray::new(Point3::new(100.0, 100.0, 100.0), Point3::new(0.0, 0.0, 1.0) - Point3::new(0.0, 0.0, 0.0));
        let hit = bvh.intersect(&ray, 0.01, 1000.0, None, &mut |_, _, _, t_max| t_max + 1.0);
        assert!(hit.is_none());
    }
}
