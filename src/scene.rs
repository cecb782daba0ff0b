use glam::{Mat4, Vec3};

use crate::geometry::CUBE_VERTEX_COUNT;
use crate::lighting::LightRig;
use crate::obj::ObjMesh;

/// World positions of the demo's lit cubes.
pub const CUBE_POSITIONS: [Vec3; 4] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 0.0, 2.0),
    Vec3::new(-2.0, 0.0, 2.0),
    Vec3::new(0.0, 0.0, 4.0),
];

/// Scale applied to the small marker cube drawn at each point light.
pub const LAMP_SCALE: f32 = 0.2;

/// A single placed cube: translation, optional rotation and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeInstance {
    pub position: Vec3,
    pub rotation_deg: Vec3,
    pub scale: Vec3,
}

impl CubeInstance {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation_deg: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    pub fn scaled(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            rotation_deg: Vec3::ZERO,
            scale: Vec3::splat(scale),
        }
    }

    /// Composes translate, then rotate, then scale (applied right to left).
    pub fn model_matrix(&self) -> Mat4 {
        let translation = Mat4::from_translation(self.position);
        let rotation = Mat4::from_rotation_z(self.rotation_deg.z.to_radians())
            * Mat4::from_rotation_y(self.rotation_deg.y.to_radians())
            * Mat4::from_rotation_x(self.rotation_deg.x.to_radians());
        let scale = Mat4::from_scale(self.scale);
        translation * rotation * scale
    }
}

/// A loaded OBJ model placed in the scene.
#[derive(Debug, Clone)]
pub struct ModelInstance {
    pub mesh: ObjMesh,
    pub transform: CubeInstance,
}

/// Everything drawn each frame: the fixed cube set, a marker cube per point
/// light, an optional model, and the lights applied to all of them.
#[derive(Debug, Clone)]
pub struct Scene {
    pub cubes: Vec<CubeInstance>,
    pub model: Option<ModelInstance>,
    pub lights: LightRig,
}

impl Scene {
    /// The compiled-in demo scene.
    pub fn demo() -> Self {
        Self {
            cubes: CUBE_POSITIONS.iter().copied().map(CubeInstance::at).collect(),
            model: None,
            lights: LightRig::default(),
        }
    }

    /// Flattens the scene into one draw command per instance. Lit geometry
    /// comes first; lamp markers follow. The skybox is not part of the list
    /// because it has no model transform.
    pub fn draw_list(&self) -> Vec<DrawCmd> {
        let mut commands = Vec::with_capacity(self.cubes.len() + self.lights.point_lights().len());
        for cube in &self.cubes {
            commands.push(DrawCmd {
                shader: ShaderKind::MultiLight,
                model: cube.model_matrix(),
                vertex_count: CUBE_VERTEX_COUNT,
            });
        }
        for light in self.lights.point_lights() {
            commands.push(DrawCmd {
                shader: ShaderKind::Lamp,
                model: CubeInstance::scaled(light.position, LAMP_SCALE).model_matrix(),
                vertex_count: CUBE_VERTEX_COUNT,
            });
        }
        commands
    }
}

/// Which pipeline a draw command runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    MultiLight,
    Lamp,
}

/// One draw call: a model matrix applied to the shared cube vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCmd {
    pub shader: ShaderKind,
    pub model: Mat4,
    pub vertex_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_then_scale_places_cube_corner() {
        let cube = CubeInstance::at(Vec3::new(2.0, 0.0, 2.0));
        let corner = cube.model_matrix().transform_point3(Vec3::splat(-0.5));
        assert!((corner - Vec3::new(1.5, -0.5, 1.5)).length() < 1e-6);
    }

    #[test]
    fn lamp_scale_shrinks_the_corner_offset() {
        let lamp = CubeInstance::scaled(Vec3::new(0.0, 0.0, 2.0), LAMP_SCALE);
        let corner = lamp.model_matrix().transform_point3(Vec3::splat(-0.5));
        assert!((corner - Vec3::new(-0.1, -0.1, 1.9)).length() < 1e-6);
    }

    #[test]
    fn four_lit_cube_draws_of_36_vertices() {
        let scene = Scene::demo();
        let lit: Vec<_> = scene
            .draw_list()
            .into_iter()
            .filter(|cmd| cmd.shader == ShaderKind::MultiLight)
            .collect();
        assert_eq!(lit.len(), 4);
        assert!(lit.iter().all(|cmd| cmd.vertex_count == 36));
    }

    #[test]
    fn draw_count_is_independent_of_light_colors() {
        let mut scene = Scene::demo();
        scene.lights.directional.diffuse = Vec3::ZERO;
        scene.lights.spot.diffuse = Vec3::ONE;
        let lit = scene
            .draw_list()
            .iter()
            .filter(|cmd| cmd.shader == ShaderKind::MultiLight)
            .count();
        assert_eq!(lit, 4);
    }

    #[test]
    fn one_lamp_marker_per_point_light() {
        let scene = Scene::demo();
        let lamps = scene
            .draw_list()
            .iter()
            .filter(|cmd| cmd.shader == ShaderKind::Lamp)
            .count();
        assert_eq!(lamps, scene.lights.point_lights().len());
    }

    #[test]
    fn rotation_is_applied_before_translation() {
        let mut cube = CubeInstance::at(Vec3::new(1.0, 0.0, 0.0));
        cube.rotation_deg = Vec3::new(0.0, 90.0, 0.0);
        let moved = cube.model_matrix().transform_point3(Vec3::new(0.5, 0.0, 0.0));
        // Rotating +X by 90 degrees about Y lands on -Z, then the translation
        // applies on top.
        assert!((moved - Vec3::new(1.0, 0.0, -0.5)).length() < 1e-5);
    }
}
