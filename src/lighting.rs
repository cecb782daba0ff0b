use glam::Vec3;
use thiserror::Error;

/// Point light capacity compiled into the fragment shader's uniform array.
pub const MAX_POINT_LIGHTS: usize = 1;

/// Specular exponent shared by all lit geometry in the demo.
pub const MATERIAL_SHININESS: f32 = 32.0;

/// Distance falloff polynomial for positional lights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Attenuation {
    fn default() -> Self {
        Self {
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
        }
    }
}

/// Infinitely distant light with a constant direction and no attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            direction: Vec3::new(-0.2, -1.0, -0.3),
            ambient: Vec3::new(0.2, 0.0, 0.0),
            diffuse: Vec3::splat(0.4),
            specular: Vec3::splat(0.5),
        }
    }
}

/// Positional light attenuated by distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 2.0),
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::new(0.0, 0.8, 0.8),
            specular: Vec3::ONE,
            attenuation: Attenuation::default(),
        }
    }
}

/// Positional light restricted to a cone with a smooth edge falloff.
///
/// Cutoff angles are stored in degrees and converted to cosines when packed
/// for the shader; the inner cutoff must describe a tighter cone than the
/// outer one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
    pub cutoff_deg: f32,
    pub outer_cutoff_deg: f32,
}

impl SpotLight {
    pub fn cutoff_cos(&self) -> f32 {
        self.cutoff_deg.to_radians().cos()
    }

    pub fn outer_cutoff_cos(&self) -> f32 {
        self.outer_cutoff_deg.to_radians().cos()
    }

    /// Re-anchors the cone to the viewer, making it behave like a headlamp.
    pub fn follow(&mut self, position: Vec3, direction: Vec3) {
        self.position = position;
        self.direction = direction;
    }
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            ambient: Vec3::ZERO,
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(0.8),
            attenuation: Attenuation::default(),
            cutoff_deg: 12.5,
            outer_cutoff_deg: 15.0,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LightError {
    #[error("point light count {requested} exceeds the shader capacity of {MAX_POINT_LIGHTS}")]
    TooManyPointLights { requested: usize },
}

/// The full lighting setup applied to the scene every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRig {
    pub directional: DirectionalLight,
    point_lights: Vec<PointLight>,
    pub spot: SpotLight,
}

impl LightRig {
    pub fn new(
        directional: DirectionalLight,
        point_lights: Vec<PointLight>,
        spot: SpotLight,
    ) -> Result<Self, LightError> {
        if point_lights.len() > MAX_POINT_LIGHTS {
            return Err(LightError::TooManyPointLights {
                requested: point_lights.len(),
            });
        }
        Ok(Self {
            directional,
            point_lights,
            spot,
        })
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    pub fn push_point_light(&mut self, light: PointLight) -> Result<(), LightError> {
        if self.point_lights.len() == MAX_POINT_LIGHTS {
            return Err(LightError::TooManyPointLights {
                requested: self.point_lights.len() + 1,
            });
        }
        self.point_lights.push(light);
        Ok(())
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            directional: DirectionalLight::default(),
            point_lights: vec![PointLight::default()],
            spot: SpotLight::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_cutoff_is_a_tighter_cone() {
        let spot = SpotLight::default();
        assert!(spot.cutoff_cos() > spot.outer_cutoff_cos());
    }

    #[test]
    fn cutoffs_convert_to_cosines() {
        let spot = SpotLight::default();
        assert!((spot.cutoff_cos() - 12.5_f32.to_radians().cos()).abs() < 1e-6);
        assert!((spot.outer_cutoff_cos() - 15.0_f32.to_radians().cos()).abs() < 1e-6);
    }

    #[test]
    fn point_light_capacity_is_enforced() {
        let mut rig = LightRig::default();
        assert_eq!(rig.point_lights().len(), MAX_POINT_LIGHTS);
        assert_eq!(
            rig.push_point_light(PointLight::default()),
            Err(LightError::TooManyPointLights { requested: 2 })
        );

        let oversized = vec![PointLight::default(); MAX_POINT_LIGHTS + 1];
        assert!(LightRig::new(
            DirectionalLight::default(),
            oversized,
            SpotLight::default()
        )
        .is_err());
    }

    #[test]
    fn spot_follows_the_viewer() {
        let mut spot = SpotLight::default();
        spot.follow(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
        assert_eq!(spot.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(spot.direction, Vec3::X);
    }
}
