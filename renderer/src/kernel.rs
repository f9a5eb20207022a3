use crate::geometry::Ray;
use crate::sphere::Sphere;
use cgmath::InnerSpace;
use mesh::Triangle;

const EPS_TRI: f64 = 1e-7;

/// Parametric value of the nearest ray-sphere intersection in
/// `(t_min, t_max)`, or `t_max + 1` on a miss.
pub fn ray_sphere(ray: &Ray, sphere: &Sphere, t_min: f64, t_max: f64) -> f64 {
    let miss = t_max + 1.0;
    let dir_len = ray.dir.magnitude();
    let dir_norm = ray.dir / dir_len;

    let l = sphere.center - ray.origin;
    let tca = l.dot(dir_norm);
    let d2 = l.dot(l) - tca * tca;
    let r2 = sphere.radius * sphere.radius;
    if d2 > r2 {
        return miss;
    }
    let thc = (r2 - d2).sqrt();

    let t0 = (tca - thc) / dir_len;
    let t1 = (tca + thc) / dir_len;

    let mut best = miss;
    if t0 > t_min && t0 < t_max {
        best = t0;
    }
    if t1 > t_min && t1 < t_max && t1 < best {
        best = t1;
    }
    best
}

/// Moller-Trumbore ray-triangle intersection. Returns the parametric hit
/// value in `(t_min, t_max)`, or `t_max + 1` on a miss.
pub fn ray_triangle(ray: &Ray, tri: &Triangle, t_min: f64, t_max: f64) -> f64 {
    let miss = t_max + 1.0;

    let e1 = tri.b.point - tri.a.point;
    let e2 = tri.c.point - tri.a.point;
    let p = ray.dir.cross(e2);
    let det = e1.dot(p);

    if det.abs() < EPS_TRI {
        return miss;
    }
    let inv_det = 1.0 / det;

    let t_vec = ray.origin - tri.a.point;
    let u = t_vec.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return miss;
    }

    let q = t_vec.cross(e1);
    let v = ray.dir.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return miss;
    }

    let w = e2.dot(q) * inv_det;
    if w > t_min && w < t_max {
        w
    } else {
        miss
    }
}
