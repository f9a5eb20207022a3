use cgmath::{InnerSpace, Point3, Vector3};

/// A ray in world space. `dir` need not be unit length; intersection kernels
/// normalize internally where the underlying formula requires it but always
/// report `t` in the caller's (un-normalized) units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub dir: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Point3<f64>, dir: Vector3<f64>) -> Self {
        Self { origin, dir }
    }

    pub fn at(&self, t: f64) -> Point3<f64> {
        self.origin + self.dir * t
    }

    pub fn inv_dir(&self) -> Vector3<f64> {
        Vector3::new(1.0 / self.dir.x, 1.0 / self.dir.y, 1.0 / self.dir.z)
    }
}

/// An axis-aligned bounding box. `minima.k <= maxima.k` for every axis `k`,
/// except transiently while a degenerate split is being resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub minima: Point3<f64>,
    pub maxima: Point3<f64>,
}

impl Aabb {
    pub fn new(minima: Point3<f64>, maxima: Point3<f64>) -> Self {
        Self { minima, maxima }
    }

    pub fn from_points(points: &[Point3<f64>]) -> Self {
        let mut minima = points[0];
        let mut maxima = points[0];
        for p in &points[1..] {
            minima.x = minima.x.min(p.x);
            minima.y = minima.y.min(p.y);
            minima.z = minima.z.min(p.z);
            maxima.x = maxima.x.max(p.x);
            maxima.y = maxima.y.max(p.y);
            maxima.z = maxima.z.max(p.z);
        }
        Self { minima, maxima }
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb::new(
            Point3::new(
                self.minima.x.min(other.minima.x),
                self.minima.y.min(other.minima.y),
                self.minima.z.min(other.minima.z),
            ),
            Point3::new(
                self.maxima.x.max(other.maxima.x),
                self.maxima.y.max(other.maxima.y),
                self.maxima.z.max(other.maxima.z),
            ),
        )
    }

    pub fn diagonal(&self) -> Vector3<f64> {
        self.maxima - self.minima
    }

    pub fn contains(&self, p: Point3<f64>, eps: f64) -> bool {
        p.x >= self.minima.x - eps
            && p.x <= self.maxima.x + eps
            && p.y >= self.minima.y - eps
            && p.y <= self.maxima.y + eps
            && p.z >= self.minima.z - eps
            && p.z <= self.maxima.z + eps
    }

    /// Slab test. Returns `true` if the ray crosses this box (padded by
    /// `eps` on every face) within `(t_min, t_max)`.
    pub fn hit(&self, ray: &Ray, t_min: f64, t_max: f64, eps: f64) -> bool {
        let inv_dir = ray.inv_dir();
        let mut near = t_min;
        let mut far = t_max;

        for axis in 0..3 {
            let (min_k, max_k, origin_k, inv_k) = match axis {
                0 => (self.minima.x, self.maxima.x, ray.origin.x, inv_dir.x),
                1 => (self.minima.y, self.maxima.y, ray.origin.y, inv_dir.y),
                _ => (self.minima.z, self.maxima.z, ray.origin.z, inv_dir.z),
            };
            let t0 = (min_k - eps - origin_k) * inv_k;
            let t1 = (max_k + eps - origin_k) * inv_k;
            let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
            near = near.max(t0);
            far = far.min(t1);
            if near >= far {
                return false;
            }
        }
        true
    }
}

impl Vector3Ext for Vector3<f64> {
    fn reflect(&self, normal: Vector3<f64>) -> Vector3<f64> {
        *self - normal * (2.0 * self.dot(normal))
    }
}

pub trait Vector3Ext {
    /// Reflects `self` (typically an incoming direction) about `normal`.
    fn reflect(&self, normal: Vector3<f64>) -> Vector3<f64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_union_spans_both_boxes() {
        let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let b = Aabb::new(Point3::new(-1.0, 2.0, 0.5), Point3::new(0.5, 3.0, 4.0));
        let u = a.union(&b);
        assert_eq!(u.minima, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(u.maxima, Point3::new(1.0, 3.0, 4.0));
    }

    #[test]
    fn axis_aligned_ray_is_not_pruned_by_padding() {
        let aabb = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Point3::new(0.0, 1.0, -5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(aabb.hit(&ray, 0.01, 1000.0, 0.2));
    }
}
