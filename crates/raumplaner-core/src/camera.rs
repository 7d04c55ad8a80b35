//! Perspective camera, damped orbit controls and the sun's shadow frustum.
//!
//! The orbit behaves like the usual "orbit around a target" controls of web
//! 3D viewers: drag rotates, right/shift drag pans in screen space, the wheel
//! dollies. Input only accumulates deltas; `OrbitControls::update` applies a
//! fraction of them each frame, which gives the damped glide after release.

use crate::constants::*;
use crate::scene::Lighting;
use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Elevated three-quarter view onto the apartment.
    pub fn apartment_default(aspect: f32) -> Self {
        Self {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

/// Radius/polar/azimuth around the orbit target. Polar is measured from +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return Self {
                radius: 0.0,
                phi: 0.0,
                theta: 0.0,
            };
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(
            s * self.theta.sin(),
            self.phi.cos() * self.radius,
            s * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub spherical: Spherical,
    pub damping: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_step: f32,
    delta_theta: f32,
    delta_phi: f32,
    pan_offset: Vec3,
    scale: f32,
}

impl OrbitControls {
    pub fn new(camera: &Camera) -> Self {
        let mut controls = Self {
            target: camera.target,
            spherical: Spherical::from_offset(camera.eye - camera.target),
            damping: ORBIT_DAMPING,
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            rotate_speed: 1.0,
            zoom_step: 0.95,
            delta_theta: 0.0,
            delta_phi: 0.0,
            pan_offset: Vec3::ZERO,
            scale: 1.0,
        };
        controls.clamp();
        controls
    }

    /// Pointer drag in pixels; a full viewport height turns a full circle.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= 2.0 * PI * dx_px / h * self.rotate_speed;
        self.delta_phi -= 2.0 * PI * dy_px / h * self.rotate_speed;
    }

    /// Screen-space pan: the point under the cursor follows the pointer at
    /// the target's depth.
    pub fn pan(&mut self, dx_px: f32, dy_px: f32, viewport_height: f32, camera: &Camera) {
        let h = viewport_height.max(1.0);
        let distance = self.spherical.radius * (camera.fovy_radians * 0.5).tan();
        let view = camera.view_matrix().inverse();
        let right = view.x_axis.truncate();
        let up = view.y_axis.truncate();
        self.pan_offset -= right * (2.0 * dx_px * distance / h);
        self.pan_offset += up * (2.0 * dy_px * distance / h);
    }

    /// Wheel input; negative `delta_y` moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.scale *= self.zoom_step;
        } else if delta_y > 0.0 {
            self.scale /= self.zoom_step;
        }
    }

    /// Apply one frame of pending motion to `camera`. Returns true while the
    /// camera is still moving.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let before = (self.spherical, self.target);

        self.spherical.theta += self.delta_theta * self.damping;
        self.spherical.phi += self.delta_phi * self.damping;
        self.spherical.radius *= self.scale;
        self.target += self.pan_offset * self.damping;
        self.clamp();

        let keep = 1.0 - self.damping;
        self.delta_theta *= keep;
        self.delta_phi *= keep;
        self.pan_offset *= keep;
        self.scale = 1.0;

        camera.target = self.target;
        camera.eye = self.target + self.spherical.to_offset();

        let (s, t) = before;
        (s.theta - self.spherical.theta).abs() > 1e-5
            || (s.phi - self.spherical.phi).abs() > 1e-5
            || (s.radius - self.spherical.radius).abs() > 1e-5
            || (t - self.target).length_squared() > 1e-10
    }

    pub fn polar_angle(&self) -> f32 {
        self.spherical.phi
    }

    pub fn distance(&self) -> f32 {
        self.spherical.radius
    }

    fn clamp(&mut self) {
        self.spherical.phi = self.spherical.phi.clamp(self.min_polar, self.max_polar);
        self.spherical.radius = self
            .spherical
            .radius
            .clamp(self.min_distance, self.max_distance);
    }
}

/// Orthographic view-projection from the sun that tightly covers `bounds`.
pub fn light_view_projection(lighting: &Lighting, bounds: (Vec3, Vec3)) -> Mat4 {
    let (lo, hi) = bounds;
    let view = Mat4::look_at_rh(lighting.sun_position, lighting.sun_target, Vec3::Y);
    let mut min = Vec3::splat(f32::MAX);
    let mut max = Vec3::splat(f32::MIN);
    for i in 0..8 {
        let corner = Vec3::new(
            if i & 1 == 0 { lo.x } else { hi.x },
            if i & 2 == 0 { lo.y } else { hi.y },
            if i & 4 == 0 { lo.z } else { hi.z },
        );
        let p = view.transform_point3(corner);
        min = min.min(p);
        max = max.max(p);
    }
    // pad so PCF taps near the border stay inside the map
    let pad = 0.5;
    let proj = Mat4::orthographic_rh(
        min.x - pad,
        max.x + pad,
        min.y - pad,
        max.y + pad,
        -max.z - pad,
        -min.z + pad,
    );
    proj * view
}
