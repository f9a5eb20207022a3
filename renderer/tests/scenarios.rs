use cgmath::{InnerSpace, Point3, Vector3};
use mesh::{MaterialRef, Mesh, Triangle, Vertex};
use renderer::{Camera, Config, Light, Material, Motility, Scene, Sphere};

fn white_material(scene: &mut Scene) -> MaterialRef {
    scene.add_material(Material::new(
        "white",
        Vector3::new(0.1, 0.1, 0.1),
        Vector3::new(0.7, 0.7, 0.7),
        Vector3::new(0.9, 0.9, 0.9),
        0.9,
        200.0,
    ))
}

#[test]
fn single_sphere_miss() {
    let mut scene = Scene::new(Camera::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ));
    let material = white_material(&mut scene);
    scene.add_sphere(
        Sphere::new(Point3::new(0.0, 0.0, 15.0), 10.0, material),
        Motility::Static,
    );
    scene.initialize();

    let config = Config::default();
    let ray = renderer::Ray::new(Point3::new(100.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
    assert!(scene.intersect(&ray, &config, None).is_none());
}

#[test]
fn single_sphere_hit() {
    let mut scene = Scene::new(Camera::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ));
    let material = white_material(&mut scene);
    scene.add_sphere(
        Sphere::new(Point3::new(0.0, 0.0, 15.0), 10.0, material),
        Motility::Static,
    );
    scene.initialize();

    let config = Config::default();
    let ray = renderer::Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0));
    let (t, surface) = scene.intersect(&ray, &config, None).unwrap();
    assert!((t - 5.0).abs() < 1e-6);

    let hit = ray.at(t);
    let normal = scene.normal_at(surface, hit);
    assert!((normal - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-6);
}

#[test]
fn shadow_correctness() {
    let mut scene = Scene::new(Camera::new(
        Point3::new(0.0, 10.0, -15.0),
        Point3::new(0.0, 0.0, 0.0),
    ));
    let material = white_material(&mut scene);
    scene.add_sphere(
        Sphere::new(Point3::new(0.0, 0.0, 15.0), 10.0, material),
        Motility::Static,
    );
    scene.add_light(Light::new(Point3::new(0.0, 10.0, -10.0), 1.0));
    scene.initialize();

    let config = Config::default();
    let w = 80;
    let h = 60;

    let lit = renderer::shading::cast(&scene, &config, w / 2, 0, w, h);
    assert!(lit.x > 0.05 || lit.y > 0.05 || lit.z > 0.05);

    let shadowed = renderer::shading::cast(&scene, &config, w / 2, h - 1, w, h);
    let ambient = Vector3::new(0.1, 0.1, 0.1) * config.ambience;
    assert!((shadowed.x - ambient.x).abs() < 1e-3);
    assert!((shadowed.y - ambient.y).abs() < 1e-3);
    assert!((shadowed.z - ambient.z).abs() < 1e-3);
}

fn grid_mesh(material: MaterialRef) -> Mesh {
    let mut triangles = Vec::new();
    for i in 0..50 {
        let x = i as f64;
        let a = Vertex::new(Point3::new(x, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let b = Vertex::new(Point3::new(x + 1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let c = Vertex::new(Point3::new(x, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.0));
        triangles.push(Triangle::new(a, b, c, material));

        let d = Vertex::new(Point3::new(x + 1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let e = Vertex::new(Point3::new(x + 1.0, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.0));
        let f = Vertex::new(Point3::new(x, 0.0, 1.0), Vector3::new(0.0, 1.0, 0.0));
        triangles.push(Triangle::new(d, e, f, material));
    }
    Mesh::new(triangles)
}

#[test]
fn bvh_correctness_under_exclusion() {
    let mut scene = Scene::new(Camera::new(
        Point3::new(0.0, 5.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
    ));
    let material = white_material(&mut scene);
    let mesh = grid_mesh(material);
    let reference = mesh.clone();
    scene.add_mesh(mesh, Motility::Static);
    scene.initialize();

    let config = Config::default();

    for (tri_index, tri) in reference.triangles().iter().enumerate() {
        let surface = renderer::Surface::Triangle {
            motility: Motility::Static,
            mesh_index: 0,
            tri_index,
        };
        let n = tri.normal_at(tri.centroid);
        let origin = tri.centroid + n * 0.5;
        let ray = renderer::Ray::new(origin, -n);

        let hit = scene.intersect(&ray, &config, Some(surface));
        if let Some((_, hit_surface)) = hit {
            assert_ne!(hit_surface, surface);
        }
    }
}

#[test]
fn tile_parity_between_single_and_multi_threaded() {
    let mut scene = Scene::new(Camera::new(
        Point3::new(0.0, 10.0, -15.0),
        Point3::new(0.0, 0.0, 0.0),
    ));
    let material = white_material(&mut scene);
    scene.add_sphere(
        Sphere::new(Point3::new(0.0, 0.0, 15.0), 10.0, material),
        Motility::Static,
    );
    scene.add_light(Light::new(Point3::new(0.0, 10.0, -10.0), 1.0));
    scene.initialize();

    let mut config = Config::default();
    config.block_size = 10;

    config.threads = 1;
    let single = renderer::render(&scene, &config, 640, 360);

    config.threads = 8;
    let multi = renderer::render(&scene, &config, 640, 360);

    assert_eq!(single.pixels(), multi.pixels());
}

#[test]
fn ppm_round_trip() {
    let mut buffer = renderer::Buffer::new(4, 4, renderer::Kind::Rgb);
    for y in 0..4 {
        for x in 0..4 {
            buffer.set_pixel(
                x,
                y,
                Vector3::new(
                    (x as f64 * 64.0) / 255.0,
                    (y as f64 * 64.0) / 255.0,
                    128.0 / 255.0,
                ),
            );
        }
    }

    let mut bytes = Vec::new();
    buffer.write_ppm(&mut bytes).unwrap();

    assert_eq!(&bytes[bytes.len() - buffer.pixels().len()..], buffer.pixels());
}
