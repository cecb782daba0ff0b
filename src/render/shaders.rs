//! WGSL shader sources embedded in the binary.
//!
//! The struct layouts mirror the Pod types in [`super::uniforms`]; the point
//! light array length must stay in sync with `lighting::MAX_POINT_LIGHTS`.

pub(crate) const MULTI_LIGHT_SHADER: &str = r#"
const MAX_POINT_LIGHTS: i32 = 1;

struct GlobalUniform {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    camera_position: vec4<f32>,
}

struct DirectionalLight {
    direction: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
}

struct PointLight {
    position: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
    attenuation: vec4<f32>,
}

struct SpotLight {
    position: vec4<f32>,
    direction: vec4<f32>,
    ambient: vec4<f32>,
    diffuse: vec4<f32>,
    specular: vec4<f32>,
    attenuation: vec4<f32>,
    cutoffs: vec4<f32>,
}

struct LightsUniform {
    directional: DirectionalLight,
    point_lights: array<PointLight, MAX_POINT_LIGHTS>,
    spot: SpotLight,
    params: vec4<f32>,
}

struct ObjectUniform {
    model: mat4x4<f32>,
    normal: mat3x4<f32>,
}

@group(0) @binding(0)
var<uniform> globals: GlobalUniform;

@group(0) @binding(1)
var<uniform> lights: LightsUniform;

@group(1) @binding(0)
var t_diffuse: texture_2d<f32>;

@group(1) @binding(1)
var s_diffuse: sampler;

@group(2) @binding(0)
var<uniform> object: ObjectUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

@vertex
fn vs_main(input: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world_pos = object.model * vec4<f32>(input.position, 1.0);
    out.clip_position = globals.proj * globals.view * world_pos;
    out.world_pos = world_pos.xyz;
    let normal_matrix = mat3x3<f32>(
        object.normal[0].xyz,
        object.normal[1].xyz,
        object.normal[2].xyz
    );
    out.normal = normalize(normal_matrix * input.normal);
    out.uv = input.uv;
    return out;
}

fn specular_strength(light_dir: vec3<f32>, normal: vec3<f32>, view_dir: vec3<f32>) -> f32 {
    let reflect_dir = reflect(-light_dir, normal);
    return pow(max(dot(view_dir, reflect_dir), 0.0), lights.params.y);
}

fn shade_directional(
    light: DirectionalLight,
    normal: vec3<f32>,
    view_dir: vec3<f32>,
    albedo: vec3<f32>,
) -> vec3<f32> {
    let light_dir = normalize(-light.direction.xyz);
    let diff = max(dot(normal, light_dir), 0.0);
    let spec = specular_strength(light_dir, normal, view_dir);
    return light.ambient.xyz * albedo
        + light.diffuse.xyz * diff * albedo
        + light.specular.xyz * spec;
}

fn shade_point(
    light: PointLight,
    normal: vec3<f32>,
    world_pos: vec3<f32>,
    view_dir: vec3<f32>,
    albedo: vec3<f32>,
) -> vec3<f32> {
    let to_light = light.position.xyz - world_pos;
    let light_dir = normalize(to_light);
    let diff = max(dot(normal, light_dir), 0.0);
    let spec = specular_strength(light_dir, normal, view_dir);
    let distance = length(to_light);
    let attenuation = 1.0 / (light.attenuation.x
        + light.attenuation.y * distance
        + light.attenuation.z * distance * distance);
    return (light.ambient.xyz * albedo
        + light.diffuse.xyz * diff * albedo
        + light.specular.xyz * spec) * attenuation;
}

fn shade_spot(
    light: SpotLight,
    normal: vec3<f32>,
    world_pos: vec3<f32>,
    view_dir: vec3<f32>,
    albedo: vec3<f32>,
) -> vec3<f32> {
    let to_light = light.position.xyz - world_pos;
    let light_dir = normalize(to_light);
    let diff = max(dot(normal, light_dir), 0.0);
    let spec = specular_strength(light_dir, normal, view_dir);
    let distance = length(to_light);
    let attenuation = 1.0 / (light.attenuation.x
        + light.attenuation.y * distance
        + light.attenuation.z * distance * distance);
    // Smooth falloff between the inner and outer cutoff cosines.
    let theta = dot(light_dir, normalize(-light.direction.xyz));
    let epsilon = light.cutoffs.x - light.cutoffs.y;
    let cone = clamp((theta - light.cutoffs.y) / epsilon, 0.0, 1.0);
    return (light.ambient.xyz * albedo
        + light.diffuse.xyz * diff * albedo
        + light.specular.xyz * spec) * attenuation * cone;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    let normal = normalize(input.normal);
    let view_dir = normalize(globals.camera_position.xyz - input.world_pos);
    let albedo = textureSample(t_diffuse, s_diffuse, input.uv).rgb;

    var result = shade_directional(lights.directional, normal, view_dir, albedo);
    let point_count = i32(lights.params.x);
    for (var i: i32 = 0; i < MAX_POINT_LIGHTS; i = i + 1) {
        if (i >= point_count) {
            break;
        }
        result = result
            + shade_point(lights.point_lights[i], normal, input.world_pos, view_dir, albedo);
    }
    result = result + shade_spot(lights.spot, normal, input.world_pos, view_dir, albedo);

    return vec4<f32>(result, 1.0);
}
"#;

/// Flat white shader for the marker cubes drawn at point light positions.
pub(crate) const LAMP_SHADER: &str = r#"
struct GlobalUniform {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    camera_position: vec4<f32>,
}

struct ObjectUniform {
    model: mat4x4<f32>,
    normal: mat3x4<f32>,
}

@group(0) @binding(0)
var<uniform> globals: GlobalUniform;

@group(1) @binding(0)
var<uniform> object: ObjectUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
}

@vertex
fn vs_main(input: VertexInput) -> @builtin(position) vec4<f32> {
    return globals.proj * globals.view * object.model * vec4<f32>(input.position, 1.0);
}

@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 1.0, 1.0);
}
"#;

/// Cubemap skybox. The clip position's z is forced to the far plane so the
/// box passes the LessEqual depth test only where nothing else was drawn.
pub(crate) const SKYBOX_SHADER: &str = r#"
struct SkyboxUniform {
    view_proj: mat4x4<f32>,
}

@group(0) @binding(0)
var<uniform> sky: SkyboxUniform;

@group(0) @binding(1)
var t_sky: texture_cube<f32>;

@group(0) @binding(2)
var s_sky: sampler;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) direction: vec3<f32>,
}

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = (sky.view_proj * vec4<f32>(position, 1.0)).xyww;
    out.direction = position;
    return out;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(t_sky, s_sky, normalize(input.direction));
}
"#;

/// Full-screen greyscale conversion of the offscreen color texture.
pub(crate) const POST_SHADER: &str = r#"
@group(0) @binding(0)
var t_scene: texture_2d<f32>;

@group(0) @binding(1)
var s_scene: sampler;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

@vertex
fn vs_main(@location(0) position: vec2<f32>, @location(1) uv: vec2<f32>) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(position, 0.0, 1.0);
    out.uv = uv;
    return out;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    let color = textureSample(t_scene, s_scene, input.uv);
    let grey = dot(color.rgb, vec3<f32>(0.2126, 0.7152, 0.0722));
    return vec4<f32>(grey, grey, grey, color.a);
}
"#;
