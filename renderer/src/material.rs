use cgmath::Vector3;

/// A Phong material. `luster` is the specular coefficient; `metallicity` is
/// the specular exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub color_ambient: Vector3<f64>,
    pub color_diffuse: Vector3<f64>,
    pub color_spec: Vector3<f64>,
    pub luster: f64,
    pub metallicity: f64,
}

impl Material {
    pub fn new(
        name: impl Into<String>,
        color_ambient: Vector3<f64>,
        color_diffuse: Vector3<f64>,
        color_spec: Vector3<f64>,
        luster: f64,
        metallicity: f64,
    ) -> Self {
        let name = name.into();
        Self {
            name,
            color_ambient,
            color_diffuse,
            color_spec,
            luster,
            metallicity,
        }
    }
}
