use glam::{Mat4, Vec2, Vec3};

/// Default yaw in degrees; -90 looks down the negative Z axis.
pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
/// Movement speed in world units per second.
pub const MOVEMENT_SPEED: f32 = 6.0;
/// Degrees of yaw/pitch per pixel of mouse travel.
pub const MOUSE_SENSITIVITY: f32 = 0.25;
/// Vertical field of view in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;
/// Pitch is clamped short of straight up/down to avoid gimbal flip.
pub const PITCH_LIMIT: f32 = 89.0;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Movement directions a key press can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera translating key state and mouse deltas into a view
/// transform.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    zoom: f32,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom.to_radians(), aspect.max(0.01), NEAR_PLANE, FAR_PLANE)
    }

    /// Translates the camera along its front/right axes, scaled by the frame
    /// delta so speed is frame-rate independent.
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = MOVEMENT_SPEED * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Applies a mouse delta whose y component has already been inverted by
    /// the tracker (screen y grows downward).
    pub fn process_mouse(&mut self, delta: Vec2) {
        self.yaw += delta.x * MOUSE_SENSITIVITY;
        self.pitch = (self.pitch + delta.y * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_vector_stays_unit_length() {
        let mut camera = Camera::default();
        for yaw_step in -8..=8 {
            for pitch_step in -8..=8 {
                camera.yaw = yaw_step as f32 * 45.0;
                camera.pitch = (pitch_step as f32 * 11.0).clamp(-PITCH_LIMIT, PITCH_LIMIT);
                camera.update_vectors();
                assert!((camera.front().length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn mouse_delta_scales_yaw_and_pitch() {
        let mut camera = Camera::default();
        let yaw = camera.yaw();
        let pitch = camera.pitch();
        camera.process_mouse(Vec2::new(10.0, -4.0));
        assert!((camera.yaw() - (yaw + 10.0 * MOUSE_SENSITIVITY)).abs() < 1e-5);
        assert!((camera.pitch() - (pitch - 4.0 * MOUSE_SENSITIVITY)).abs() < 1e-5);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse(Vec2::new(0.0, 100_000.0));
        assert!((camera.pitch() - PITCH_LIMIT).abs() < 1e-5);
        camera.process_mouse(Vec2::new(0.0, -200_000.0));
        assert!((camera.pitch() + PITCH_LIMIT).abs() < 1e-5);
    }

    #[test]
    fn keyboard_moves_along_front() {
        let mut camera = Camera::new(Vec3::ZERO);
        camera.process_keyboard(CameraMovement::Forward, 0.5);
        let expected = camera.front() * MOVEMENT_SPEED * 0.5;
        assert!((camera.position() - expected).length() < 1e-5);
    }

    #[test]
    fn view_matrix_is_look_at() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0));
        let expected = Mat4::look_at_rh(
            camera.position(),
            camera.position() + camera.front(),
            Vec3::Y,
        );
        assert!(camera
            .view_matrix()
            .abs_diff_eq(expected, 1e-5));
    }
}
