//! # Surface Picking
//!
//! Ray-casting against placed surfaces, for hosts whose renderer reports a
//! click as a ray (or a screen position) rather than an exhibit id.
//!
//! ## How it works
//!
//! 1. **Screen to Ray**: Unproject the click through the inverse view-projection
//! 2. **Ray-Frame Intersection**: Test the ray against each frame box in world space
//! 3. **Selection**: Report the closest selectable surface
//!
//! ## Usage
//!
//! ```
//! use cgmath::Vector3;
//! use virtual_museum::model::Gallery;
//! use virtual_museum::scene::{pick_surface, Ray, SceneProjector, ViewMode};
//!
//! let surfaces = SceneProjector::new(ViewMode::Edit).project(&Gallery::demo());
//! let ray = Ray::new(Vector3::new(0.0, 1.5, 0.0), Vector3::new(0.0, 0.0, -1.0));
//! let hit = pick_surface(&ray, &surfaces).unwrap();
//! assert_eq!(hit.id.as_str(), "3");
//! ```

use cgmath::{ElementWise, InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};
use log::debug;

use super::surface::PlacedSurface;
use crate::model::ExhibitId;

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Ray through a screen position, given the camera's view-projection matrix
    ///
    /// # Arguments
    ///
    /// * `screen_pos` - Cursor position in pixels, origin top-left
    /// * `screen_size` - Viewport size in pixels
    /// * `view_proj` - Projection matrix times view matrix
    pub fn from_screen(screen_pos: (f32, f32), screen_size: (f32, f32), view_proj: Matrix4<f32>) -> Self {
        let (mouse_x, mouse_y) = screen_pos;
        let (width, height) = screen_size;

        let ndc_x = (2.0 * mouse_x) / width - 1.0;
        let ndc_y = 1.0 - (2.0 * mouse_y) / height;

        let inv_view_proj = view_proj.invert().unwrap_or_else(Matrix4::identity);

        let unproject = |ndc_z: f32| {
            let world = inv_view_proj * Vector4::new(ndc_x, ndc_y, ndc_z, 1.0);
            Vector3::new(world.x / world.w, world.y / world.w, world.z / world.w)
        };
        let near = unproject(-1.0);
        let far = unproject(1.0);

        Ray::new(near, far - near)
    }

    /// Point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl AABB {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point
    pub fn from_points(points: &[Vector3<f32>]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return Self::new(Vector3::zero(), Vector3::zero());
        };

        rest.iter().fold(Self::new(*first, *first), |aabb, p| {
            Self::new(
                Vector3::new(aabb.min.x.min(p.x), aabb.min.y.min(p.y), aabb.min.z.min(p.z)),
                Vector3::new(aabb.max.x.max(p.x), aabb.max.y.max(p.y), aabb.max.z.max(p.z)),
            )
        })
    }

    /// Distance along the ray to the first intersection, if any
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(1.0 / ray.direction.x, 1.0 / ray.direction.y, 1.0 / ray.direction.z);

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(t_min.x.min(t_max.x), t_min.y.min(t_max.y), t_min.z.min(t_max.z));
        let t2 = Vector3::new(t_min.x.max(t_max.x), t_min.y.max(t_max.y), t_min.z.max(t_max.z));

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }

    /// World-space bounds of this box after applying `matrix`
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        let corners: Vec<Vector3<f32>> = (0..8)
            .map(|i| {
                let corner = Vector4::new(
                    if i & 1 == 0 { self.min.x } else { self.max.x },
                    if i & 2 == 0 { self.min.y } else { self.max.y },
                    if i & 4 == 0 { self.min.z } else { self.max.z },
                    1.0,
                );
                let t = matrix * corner;
                Vector3::new(t.x / t.w, t.y / t.w, t.z / t.w)
            })
            .collect();

        Self::from_points(&corners)
    }
}

/// Surface hit by a pick ray
#[derive(Debug, Clone, PartialEq)]
pub struct PickResult {
    pub id: ExhibitId,
    /// Index of the surface in the projected list
    pub index: usize,
    /// Distance from the ray origin to the hit
    pub distance: f32,
    pub intersection_point: Vector3<f32>,
}

/// World-space box around a surface's frame
pub fn surface_bounds(surface: &PlacedSurface) -> AABB {
    let (min, max) = surface.layout.frame_bounds();
    AABB::new(min, max).transform(&surface.world_matrix())
}

/// Closest selectable surface hit by `ray`
pub fn pick_surface(ray: &Ray, surfaces: &[PlacedSurface]) -> Option<PickResult> {
    let mut closest: Option<PickResult> = None;

    for (index, surface) in surfaces.iter().enumerate() {
        if !surface.is_selectable {
            continue;
        }
        let Some(distance) = surface_bounds(surface).intersect_ray(ray) else {
            continue;
        };
        if closest.as_ref().map_or(true, |hit| distance < hit.distance) {
            closest = Some(PickResult {
                id: surface.id.clone(),
                index,
                distance,
                intersection_point: ray.point_at(distance),
            });
        }
    }

    if closest.is_none() {
        debug!("Pick ray from {:?} hit no surface", ray.origin);
    }
    closest
}
