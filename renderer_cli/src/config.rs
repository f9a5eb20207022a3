use serde::Deserialize;

/// The front-door config a RON file deserializes into: output target, image
/// dimensions, the renderer-facing `Config` subset, and a declarative scene.
#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    pub output_path: String,
    pub width: usize,
    pub height: usize,
    pub render: RenderSettings,
    pub scene: SceneConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderSettings {
    pub t_min: f64,
    pub t_max: f64,
    pub fov: f64,
    pub ambience: f64,
    pub block_size: usize,
    pub threads: usize,
}

impl From<&RenderSettings> for renderer::Config {
    fn from(s: &RenderSettings) -> Self {
        renderer::Config::new(s.t_min, s.t_max, s.fov, s.ambience, s.block_size, s.threads)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vec3> for cgmath::Vector3<f64> {
    fn from(v: Vec3) -> Self {
        cgmath::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for cgmath::Point3<f64> {
    fn from(v: Vec3) -> Self {
        cgmath::Point3::new(v.x, v.y, v.z)
    }
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    pub pos: Vec3,
    pub at: Vec3,
}

#[derive(Debug, Deserialize)]
pub struct MaterialConfig {
    pub name: String,
    pub color_ambient: Vec3,
    pub color_diffuse: Vec3,
    pub color_spec: Vec3,
    pub luster: f64,
    pub metallicity: f64,
}

#[derive(Debug, Deserialize)]
pub struct LightConfig {
    pub pos: Vec3,
    pub strength: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub enum MotilityConfig {
    Static,
    Dynamic,
}

impl From<MotilityConfig> for renderer::Motility {
    fn from(m: MotilityConfig) -> Self {
        match m {
            MotilityConfig::Static => renderer::Motility::Static,
            MotilityConfig::Dynamic => renderer::Motility::Dynamic,
        }
    }
}

#[derive(Debug, Deserialize)]
pub enum AxisConfig {
    X,
    Y,
    Z,
}

impl From<AxisConfig> for mesh::Axis {
    fn from(a: AxisConfig) -> Self {
        match a {
            AxisConfig::X => mesh::Axis::X,
            AxisConfig::Y => mesh::Axis::Y,
            AxisConfig::Z => mesh::Axis::Z,
        }
    }
}

#[derive(Debug, Deserialize)]
pub enum TransformConfig {
    Rotate(AxisConfig, f64),
    Scale(Vec3),
    Translate(Vec3),
}

impl From<&TransformConfig> for mesh::Transform {
    fn from(t: &TransformConfig) -> Self {
        match t {
            TransformConfig::Rotate(axis, angle) => mesh::Transform::rotate((*axis).into(), *angle),
            TransformConfig::Scale(v) => mesh::Transform::scale((*v).into()),
            TransformConfig::Translate(v) => mesh::Transform::translate((*v).into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MeshConfig {
    pub path: String,
    pub material: usize,
    pub motility: MotilityConfig,
    #[serde(default)]
    pub transforms: Vec<TransformConfig>,
}

#[derive(Debug, Deserialize)]
pub struct SphereConfig {
    pub center: Vec3,
    pub radius: f64,
    pub material: usize,
    pub motility: MotilityConfig,
    #[serde(default)]
    pub transforms: Vec<TransformConfig>,
}

#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub materials: Vec<MaterialConfig>,
    pub lights: Vec<LightConfig>,
    #[serde(default)]
    pub meshes: Vec<MeshConfig>,
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
}
