//! Strongly typed uniform blocks mirroring the WGSL structs.
//!
//! Every vec3 quantity is padded to a vec4 so the Rust layout matches WGSL
//! uniform alignment rules exactly.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

use crate::lighting::{
    Attenuation, DirectionalLight, LightRig, PointLight, SpotLight, MAX_POINT_LIGHTS,
};

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GlobalUniform {
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub camera_position: [f32; 4],
}

impl GlobalUniform {
    pub fn new(view: Mat4, proj: Mat4, camera_position: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            camera_position: camera_position.extend(1.0).into(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DirectionalLightUniform {
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
}

impl From<&DirectionalLight> for DirectionalLightUniform {
    fn from(light: &DirectionalLight) -> Self {
        Self {
            direction: light.direction.extend(0.0).into(),
            ambient: light.ambient.extend(0.0).into(),
            diffuse: light.diffuse.extend(0.0).into(),
            specular: light.specular.extend(0.0).into(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// x = constant, y = linear, z = quadratic.
    pub attenuation: [f32; 4],
}

impl From<&PointLight> for PointLightUniform {
    fn from(light: &PointLight) -> Self {
        Self {
            position: light.position.extend(1.0).into(),
            ambient: light.ambient.extend(0.0).into(),
            diffuse: light.diffuse.extend(0.0).into(),
            specular: light.specular.extend(0.0).into(),
            attenuation: pack_attenuation(light.attenuation),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SpotLightUniform {
    pub position: [f32; 4],
    pub direction: [f32; 4],
    pub ambient: [f32; 4],
    pub diffuse: [f32; 4],
    pub specular: [f32; 4],
    /// x = constant, y = linear, z = quadratic.
    pub attenuation: [f32; 4],
    /// x = cos(inner cutoff), y = cos(outer cutoff).
    pub cutoffs: [f32; 4],
}

impl From<&SpotLight> for SpotLightUniform {
    fn from(light: &SpotLight) -> Self {
        Self {
            position: light.position.extend(1.0).into(),
            direction: light.direction.extend(0.0).into(),
            ambient: light.ambient.extend(0.0).into(),
            diffuse: light.diffuse.extend(0.0).into(),
            specular: light.specular.extend(0.0).into(),
            attenuation: pack_attenuation(light.attenuation),
            cutoffs: [light.cutoff_cos(), light.outer_cutoff_cos(), 0.0, 0.0],
        }
    }
}

/// The complete lighting block, rewritten into the uniform buffer every
/// frame before any dependent draw.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightsUniform {
    pub directional: DirectionalLightUniform,
    pub point_lights: [PointLightUniform; MAX_POINT_LIGHTS],
    pub spot: SpotLightUniform,
    /// x = active point light count, y = material shininess.
    pub params: [f32; 4],
}

impl LightsUniform {
    pub fn pack(rig: &LightRig, shininess: f32) -> Self {
        let mut point_lights = [PointLightUniform::zeroed(); MAX_POINT_LIGHTS];
        for (slot, light) in point_lights.iter_mut().zip(rig.point_lights()) {
            *slot = light.into();
        }
        Self {
            directional: (&rig.directional).into(),
            point_lights,
            spot: (&rig.spot).into(),
            params: [rig.point_lights().len() as f32, shininess, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model's upper 3x3, padded to three vec4s.
    pub normal: [[f32; 4]; 3],
}

impl ObjectUniform {
    pub fn new(model: Mat4) -> Self {
        let normal = Mat3::from_mat4(model).inverse().transpose();
        Self {
            model: model.to_cols_array_2d(),
            normal: mat3_to_3x4(normal),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SkyboxUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl SkyboxUniform {
    /// Strips the translation from the view so the skybox stays centered on
    /// the camera.
    pub fn new(view: Mat4, proj: Mat4) -> Self {
        let rotation_only = Mat4::from_mat3(Mat3::from_mat4(view));
        Self {
            view_proj: (proj * rotation_only).to_cols_array_2d(),
        }
    }
}

fn pack_attenuation(attenuation: Attenuation) -> [f32; 4] {
    [
        attenuation.constant,
        attenuation.linear,
        attenuation.quadratic,
        0.0,
    ]
}

fn mat3_to_3x4(matrix: Mat3) -> [[f32; 4]; 3] {
    let cols = matrix.to_cols_array();
    [
        [cols[0], cols[1], cols[2], 0.0],
        [cols[3], cols[4], cols[5], 0.0],
        [cols[6], cols[7], cols[8], 0.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn uniform_sizes_are_16_byte_multiples() {
        assert_eq!(size_of::<GlobalUniform>() % 16, 0);
        assert_eq!(size_of::<LightsUniform>() % 16, 0);
        assert_eq!(size_of::<ObjectUniform>() % 16, 0);
        assert_eq!(size_of::<SkyboxUniform>() % 16, 0);
    }

    #[test]
    fn spot_cutoffs_pack_as_ordered_cosines() {
        let uniform: SpotLightUniform = (&SpotLight::default()).into();
        assert!(uniform.cutoffs[0] > uniform.cutoffs[1]);
        assert!((uniform.cutoffs[0] - 12.5_f32.to_radians().cos()).abs() < 1e-6);
    }

    #[test]
    fn pack_records_point_light_count() {
        let uniform = LightsUniform::pack(&LightRig::default(), 32.0);
        assert_eq!(uniform.params[0], 1.0);
        assert_eq!(uniform.params[1], 32.0);
        assert_eq!(uniform.point_lights[0].attenuation[..3], [1.0, 0.09, 0.032]);
    }

    #[test]
    fn normal_matrix_is_identity_for_pure_translation() {
        let uniform = ObjectUniform::new(Mat4::from_translation(Vec3::new(3.0, 1.0, -2.0)));
        assert_eq!(uniform.normal[0][..3], [1.0, 0.0, 0.0]);
        assert_eq!(uniform.normal[1][..3], [0.0, 1.0, 0.0]);
        assert_eq!(uniform.normal[2][..3], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn skybox_view_drops_translation() {
        let view = Mat4::look_at_rh(Vec3::new(10.0, 5.0, -3.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::IDENTITY;
        let uniform = SkyboxUniform::new(view, proj);
        // With an identity projection the last column is the view translation,
        // which must have been stripped.
        assert_eq!(uniform.view_proj[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
