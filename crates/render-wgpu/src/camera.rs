use cubespace_render::RenderView;
use glam::{Mat4, Vec3};

/// Orbit camera circling a fixed target at a fixed distance.
///
/// Mirrors the original viewer's controls: rotation only, with pan and zoom
/// disabled unless explicitly enabled.
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
    pub allow_zoom: bool,
    pub allow_pan: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(Vec3::new(6.0, 3.0, 4.0), Vec3::ZERO)
    }
}

impl OrbitCamera {
    /// Build a camera orbiting `target`, initially positioned at `eye`.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1e-4);
        Self {
            target,
            distance,
            yaw: offset.z.atan2(offset.x),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            fov: 30.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            sensitivity: 0.005,
            allow_zoom: false,
            allow_pan: false,
        }
    }

    /// Build a camera from a renderer-agnostic view description.
    pub fn from_view(view: &RenderView) -> Self {
        let mut camera = Self::looking_from(view.eye, view.target);
        camera.fov = view.fov_degrees.to_radians();
        camera
    }

    /// Current camera position on the orbit sphere.
    pub fn position(&self) -> Vec3 {
        self.target
            + self.distance
                * Vec3::new(
                    self.yaw.cos() * self.pitch.cos(),
                    self.pitch.sin(),
                    self.yaw.sin() * self.pitch.cos(),
                )
    }

    /// Orbit by a mouse delta. Pitch is clamped short of the poles so the
    /// view never flips.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity)
            .clamp(-89.0_f32.to_radians(), 89.0_f32.to_radians());
    }

    /// Move toward or away from the target. No-op unless zoom is enabled.
    pub fn zoom(&mut self, delta: f32) {
        if !self.allow_zoom {
            return;
        }
        self.distance = (self.distance - delta).max(self.near * 2.0);
    }

    /// Shift the orbit target sideways. No-op unless pan is enabled.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if !self.allow_pan {
            return;
        }
        let forward = (self.target - self.position()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        self.target += right * dx + up * dy;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_vec(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn default_camera_matches_reference_start() {
        let cam = OrbitCamera::default();
        approx_vec(cam.position(), Vec3::new(6.0, 3.0, 4.0));
        assert_eq!(cam.fov, 30.0_f32.to_radians());
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn from_view_takes_eye_target_and_fov() {
        let view = RenderView {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ONE,
            fov_degrees: 45.0,
        };
        let cam = OrbitCamera::from_view(&view);
        approx_vec(cam.position(), view.eye);
        approx_vec(cam.target, view.target);
        assert_eq!(cam.fov, 45.0_f32.to_radians());
    }

    #[test]
    fn looking_from_recovers_eye_position() {
        let eye = Vec3::new(-2.0, 5.0, 1.5);
        let target = Vec3::new(0.5, 0.5, 0.5);
        let cam = OrbitCamera::looking_from(eye, target);
        approx_vec(cam.position(), eye);
    }

    #[test]
    fn rotation_keeps_distance() {
        let mut cam = OrbitCamera::default();
        let start = cam.position();
        cam.rotate(120.0, -40.0);
        assert_ne!(cam.position(), start);
        let d = (cam.position() - cam.target).length();
        assert!((d - cam.distance).abs() < 1e-4);
    }

    #[test]
    fn pitch_clamps_short_of_poles() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 1e6);
        assert!(cam.pitch <= 89.0_f32.to_radians());
        cam.rotate(0.0, -1e6);
        assert!(cam.pitch >= -89.0_f32.to_radians());
    }

    #[test]
    fn zoom_and_pan_are_disabled_by_default() {
        let mut cam = OrbitCamera::default();
        let distance = cam.distance;
        let target = cam.target;
        cam.zoom(1.0);
        cam.pan(1.0, 1.0);
        assert_eq!(cam.distance, distance);
        assert_eq!(cam.target, target);

        cam.allow_zoom = true;
        cam.zoom(1.0);
        assert!(cam.distance < distance);
    }
}
