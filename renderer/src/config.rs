/// The renderer-facing subset of configuration: everything needed to cast a
/// primary ray and shade it, independent of how the scene was assembled or
/// where the resulting image goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub t_min: f64,
    pub t_max: f64,
    pub fov: f64,
    pub ambience: f64,
    pub block_size: usize,
    pub threads: usize,
}

impl Config {
    pub fn new(t_min: f64, t_max: f64, fov: f64, ambience: f64, block_size: usize, threads: usize) -> Self {
        let threads = if threads == 0 {
            tracing::warn!("Config::threads of 0 coerced up to 1");
            1
        } else {
            threads
        };
        Self {
            t_min,
            t_max,
            fov,
            ambience,
            block_size,
            threads,
        }
    }
}

impl Default for Config {
    /// `fov = 2*atan(0.5)` reproduces the unscaled image-plane mapping that
    /// earlier scene files were authored against.
    fn default() -> Self {
        Self {
            t_min: 0.01,
            t_max: 1000.0,
            fov: 2.0 * (0.5f64).atan(),
            ambience: 1.0,
            block_size: 10,
            threads: 1,
        }
    }
}
