use crate::bvh::Bvh;
use crate::camera::Camera;
use crate::geometry::{Aabb, Ray};
use crate::kernel;
use crate::light::Light;
use crate::material::Material;
use crate::sphere::Sphere;
use crate::surface::{LightRef, MeshRef, Motility, Surface, SphereRef};
use crate::Config;
use cgmath::{Point3, Vector3};
use mesh::{Mesh, MaterialRef};

/// Owns every material, light, mesh, and sphere in a render, plus the BVH
/// built over the static subset once `initialize` has run.
pub struct Scene {
    pub camera: Camera,
    materials: Vec<Material>,
    lights: Vec<Light>,
    static_meshes: Vec<Mesh>,
    dynamic_meshes: Vec<Mesh>,
    static_spheres: Vec<Sphere>,
    dynamic_spheres: Vec<Sphere>,
    static_surfaces: Vec<Surface>,
    dynamic_surfaces: Vec<Surface>,
    bvh: Option<Bvh>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            materials: Vec::new(),
            lights: Vec::new(),
            static_meshes: Vec::new(),
            dynamic_meshes: Vec::new(),
            static_spheres: Vec::new(),
            dynamic_spheres: Vec::new(),
            static_surfaces: Vec::new(),
            dynamic_surfaces: Vec::new(),
            bvh: None,
        }
    }

    pub fn add_material(&mut self, material: Material) -> MaterialRef {
        self.materials.push(material);
        MaterialRef(self.materials.len() - 1)
    }

    pub fn add_light(&mut self, light: Light) -> LightRef {
        self.lights.push(light);
        LightRef(self.lights.len() - 1)
    }

    pub fn add_mesh(&mut self, mesh: Mesh, motility: Motility) -> MeshRef {
        let index = match motility {
            Motility::Static => {
                self.static_meshes.push(mesh);
                self.static_meshes.len() - 1
            }
            Motility::Dynamic => {
                self.dynamic_meshes.push(mesh);
                self.dynamic_meshes.len() - 1
            }
        };
        MeshRef { motility, index }
    }

    pub fn add_sphere(&mut self, sphere: Sphere, motility: Motility) -> SphereRef {
        let index = match motility {
            Motility::Static => {
                self.static_spheres.push(sphere);
                self.static_spheres.len() - 1
            }
            Motility::Dynamic => {
                self.dynamic_spheres.push(sphere);
                self.dynamic_spheres.len() - 1
            }
        };
        SphereRef { motility, index }
    }

    pub fn mesh_mut(&mut self, handle: MeshRef) -> &mut Mesh {
        match handle.motility {
            Motility::Static => &mut self.static_meshes[handle.index],
            Motility::Dynamic => &mut self.dynamic_meshes[handle.index],
        }
    }

    pub fn sphere_mut(&mut self, handle: SphereRef) -> &mut Sphere {
        match handle.motility {
            Motility::Static => &mut self.static_spheres[handle.index],
            Motility::Dynamic => &mut self.dynamic_spheres[handle.index],
        }
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn material(&self, handle: MaterialRef) -> &Material {
        &self.materials[handle.0]
    }

    fn mesh(&self, motility: Motility, index: usize) -> &Mesh {
        match motility {
            Motility::Static => &self.static_meshes[index],
            Motility::Dynamic => &self.dynamic_meshes[index],
        }
    }

    fn sphere(&self, motility: Motility, index: usize) -> &Sphere {
        match motility {
            Motility::Static => &self.static_spheres[index],
            Motility::Dynamic => &self.dynamic_spheres[index],
        }
    }

    pub fn material_of(&self, surface: Surface) -> MaterialRef {
        match surface {
            Surface::Triangle {
                motility,
                mesh_index,
                tri_index,
            } => self.mesh(motility, mesh_index).triangles()[tri_index].material,
            Surface::Sphere { motility, index } => self.sphere(motility, index).material,
        }
    }

    pub fn normal_at(&self, surface: Surface, hit: Point3<f64>) -> Vector3<f64> {
        match surface {
            Surface::Triangle {
                motility,
                mesh_index,
                tri_index,
            } => self.mesh(motility, mesh_index).triangles()[tri_index].normal_at(hit),
            Surface::Sphere { motility, index } => self.sphere(motility, index).normal_at(hit),
        }
    }

    fn test(&self, surface: Surface, ray: &Ray, t_min: f64, t_max: f64) -> f64 {
        match surface {
            Surface::Triangle {
                motility,
                mesh_index,
                tri_index,
            } => {
                let tri = &self.mesh(motility, mesh_index).triangles()[tri_index];
                kernel::ray_triangle(ray, tri, t_min, t_max)
            }
            Surface::Sphere { motility, index } => {
                kernel::ray_sphere(ray, self.sphere(motility, index), t_min, t_max)
            }
        }
    }

    /// Partitions meshes and spheres into flat static/dynamic surface
    /// arrays and builds the BVH over the static set. Must be called
    /// exactly once, after at least one drawable object has been added.
    pub fn initialize(&mut self) {
        assert!(self.bvh.is_none(), "Scene::initialize called more than once");

        let drawable_count = self.static_meshes.iter().map(Mesh::len).sum::<usize>()
            + self.dynamic_meshes.iter().map(Mesh::len).sum::<usize>()
            + self.static_spheres.len()
            + self.dynamic_spheres.len();
        assert!(
            drawable_count > 0,
            "Scene::initialize requires at least one drawable object"
        );

        let mut build_items: Vec<(Surface, Point3<f64>, Aabb)> = Vec::new();

        for (mesh_index, mesh) in self.static_meshes.iter().enumerate() {
            for (tri_index, tri) in mesh.triangles().iter().enumerate() {
                let surface = Surface::Triangle {
                    motility: Motility::Static,
                    mesh_index,
                    tri_index,
                };
                let (min, max) = tri.extrema();
                self.static_surfaces.push(surface);
                build_items.push((surface, tri.centroid, Aabb::new(min, max)));
            }
        }
        for (index, sphere) in self.static_spheres.iter().enumerate() {
            let surface = Surface::Sphere {
                motility: Motility::Static,
                index,
            };
            self.static_surfaces.push(surface);
            build_items.push((surface, sphere.center, sphere.aabb()));
        }

        for (mesh_index, mesh) in self.dynamic_meshes.iter().enumerate() {
            for tri_index in 0..mesh.len() {
                self.dynamic_surfaces.push(Surface::Triangle {
                    motility: Motility::Dynamic,
                    mesh_index,
                    tri_index,
                });
            }
        }
        for index in 0..self.dynamic_spheres.len() {
            self.dynamic_surfaces.push(Surface::Sphere {
                motility: Motility::Dynamic,
                index,
            });
        }

        let bvh = Bvh::build(build_items);
        tracing::debug!(
            leaves = bvh.leaf_count(),
            max_depth = bvh.max_depth(),
            static_surfaces = self.static_surfaces.len(),
            dynamic_surfaces = self.dynamic_surfaces.len(),
            "built scene BVH"
        );
        self.bvh = Some(bvh);
    }

    /// Queries the static BVH, then linearly scans the dynamic surfaces,
    /// using `config`'s `t_min`/`t_max` as the valid parametric range.
    pub fn intersect(&self, ray: &Ray, config: &Config, exclude: Option<Surface>) -> Option<(f64, Surface)> {
        self.intersect_range(ray, config.t_min, config.t_max, exclude)
    }

    /// As `intersect`, but with an explicit `(t_min, t_max)` range rather
    /// than one taken from a `Config` (used for shadow rays bounded by
    /// distance to the light).
    pub fn intersect_range(
        &self,
        ray: &Ray,
        t_min: f64,
        t_max: f64,
        exclude: Option<Surface>,
    ) -> Option<(f64, Surface)> {
        let bvh = self
            .bvh
            .as_ref()
            .expect("Scene::initialize must run before intersect");

        let mut test = |surface: Surface, ray: &Ray, t_min: f64, t_max: f64| {
            self.test(surface, ray, t_min, t_max)
        };
        let mut best = bvh.intersect(ray, t_min, t_max, exclude, &mut test);

        for &surface in &self.dynamic_surfaces {
            if Some(surface) == exclude {
                continue;
            }
            let t = self.test(surface, ray, t_min, t_max);
            if t > t_min && t < t_max && best.map_or(true, |(best_t, _)| t < best_t) {
                best = Some((t, surface));
            }
        }

        best
    }
}
