use cgmath::Point3;

/// A point light with no attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub pos: Point3<f64>,
    pub strength: f64,
}

impl Light {
    pub fn new(pos: Point3<f64>, strength: f64) -> Self {
        Self { pos, strength }
    }
}
