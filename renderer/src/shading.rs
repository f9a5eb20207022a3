use crate::config::Config;
use crate::geometry::Vector3Ext;
use crate::scene::Scene;
use cgmath::{InnerSpace, Vector3};

/// Casts a primary ray into `scene` and returns the shaded color, clamped
/// per component to `[0, 1]`.
pub fn cast(scene: &Scene, config: &Config, x: usize, y: usize, w: usize, h: usize) -> Vector3<f64> {
    let ray = scene.camera.primary_ray(x, y, w, h, config);

    let hit = match scene.intersect(&ray, config, None) {
        Some(hit) => hit,
        None => return Vector3::new(0.0, 0.0, 0.0),
    };
    let (t, surface) = hit;

    let point = ray.at(t);
    let normal = scene.normal_at(surface, point);
    let material = scene.material(scene.material_of(surface));

    let mut color = material.color_ambient * config.ambience;

    for light in scene.lights() {
        let to_light = light.pos - point;
        let distance = to_light.magnitude();
        let l = to_light / distance;

        let shadow_ray = crate::geometry::Ray::new(point, l);
        let occluded = scene
            .intersect_range(&shadow_ray, config.t_min, distance, Some(surface))
            .is_some();
        if occluded {
            continue;
        }

        let n_dot_l = normal.dot(l).max(0.0);
        let diffuse = n_dot_l * light.strength;
        color += component_mul(material.color_diffuse, Vector3::new(diffuse, diffuse, diffuse));

        let refl = ray.dir.reflect(normal);
        let refl_dot_l = refl.dot(l).max(0.0);
        let spec = (material.luster * refl_dot_l.powf(material.metallicity)).max(0.0);
        color += component_mul(material.color_spec, Vector3::new(spec, spec, spec));
    }

    Vector3::new(
        color.x.clamp(0.0, 1.0),
        color.y.clamp(0.0, 1.0),
        color.z.clamp(0.0, 1.0),
    )
}

fn component_mul(a: Vector3<f64>, b: Vector3<f64>) -> Vector3<f64> {
    Vector3::new(a.x * b.x, a.y * b.y, a.z * b.z)
}
