mod config;
mod error;

use config::RenderConfig;
use error::Result;
use mesh::mesh_from_raw;
use renderer::{Camera, Config, Motility, Scene, Sphere};
use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let matches = clap::App::new("Ray Tracer")
        .arg(
            clap::Arg::with_name("CONFIG")
                .help("Path to a RON configuration file describing a scene and an output image.")
                .required(true)
                .index(1),
        )
        .get_matches();

    // CONFIG is required by Clap, so unwrapping is ok.
    let config_path = matches.value_of("CONFIG").unwrap();
    let config_file = File::open(config_path)?;
    let render_config: RenderConfig = ron::de::from_reader(config_file)?;

    render_from_config(&render_config)
}

fn render_from_config(render_config: &RenderConfig) -> Result<()> {
    let start = Instant::now();
    let scene_config = &render_config.scene;

    let mut scene = Scene::new(Camera::new(
        scene_config.camera.pos.into(),
        scene_config.camera.at.into(),
    ));

    let materials: Vec<_> = scene_config
        .materials
        .iter()
        .map(|m| {
            scene.add_material(renderer::Material::new(
                m.name.clone(),
                m.color_ambient.into(),
                m.color_diffuse.into(),
                m.color_spec.into(),
                m.luster,
                m.metallicity,
            ))
        })
        .collect();

    for light in &scene_config.lights {
        scene.add_light(renderer::Light::new(light.pos.into(), light.strength));
    }

    for mesh_entry in &scene_config.meshes {
        let material = materials[mesh_entry.material];
        let file = File::open(&mesh_entry.path)?;
        let mesh = mesh_from_raw(BufReader::new(file), material)?;
        let motility: Motility = mesh_entry.motility.into();
        let handle = scene.add_mesh(mesh, motility);

        for transform_config in &mesh_entry.transforms {
            let transform: mesh::Transform = transform_config.into();
            transform.apply_to_mesh(scene.mesh_mut(handle));
        }
    }

    for sphere_entry in &scene_config.spheres {
        let material = materials[sphere_entry.material];
        let motility: Motility = sphere_entry.motility.into();
        let handle = scene.add_sphere(
            Sphere::new(sphere_entry.center.into(), sphere_entry.radius, material),
            motility,
        );

        for transform_config in &sphere_entry.transforms {
            let transform: mesh::Transform = transform_config.into();
            let center = scene.sphere_mut(handle).center;
            scene.sphere_mut(handle).center = transform.apply_to_sphere_center(center);
        }
    }

    tracing::info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        materials = scene_config.materials.len(),
        lights = scene_config.lights.len(),
        meshes = scene_config.meshes.len(),
        spheres = scene_config.spheres.len(),
        "scene loaded"
    );

    scene.initialize();

    let config: Config = (&render_config.render).into();
    let buffer = renderer::render(
        &scene,
        &config,
        render_config.width,
        render_config.height,
    );

    write_output(&buffer, render_config.width, render_config.height, &render_config.output_path)?;

    tracing::info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        output = %render_config.output_path,
        "wrote output"
    );
    Ok(())
}

fn write_output(buffer: &renderer::Buffer, w: usize, h: usize, output_path: &str) -> Result<()> {
    if output_path.ends_with(".ppm") {
        let mut file = File::create(output_path)?;
        buffer.write_ppm(&mut file)?;
    } else {
        let image = image::RgbImage::from_raw(w as u32, h as u32, buffer.pixels().to_vec())
            .expect("buffer dimensions match the declared width/height");
        image.save(output_path)?;
    }
    Ok(())
}
