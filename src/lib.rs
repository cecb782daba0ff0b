//! Core modules for the multi-light rendering demo.
//!
//! The crate is split so that everything below the GPU boundary is plain
//! data: the camera, the input state, the lighting rig, the scene draw
//! list, and the pass sequencing are all testable without a window or an
//! adapter.  The `render` module owns the wgpu side and consumes those
//! types wholesale.

pub mod assets;
pub mod camera;
pub mod clock;
pub mod geometry;
pub mod input;
pub mod lighting;
pub mod obj;
pub mod render;
pub mod scene;

pub use assets::{load_cubemap, load_model, load_texture, LoadError};
pub use camera::{Camera, CameraMovement};
pub use clock::FrameClock;
pub use input::{InputState, KeyCode, MouseTracker, NamedKey};
pub use lighting::{DirectionalLight, LightRig, PointLight, SpotLight};
pub use obj::{load_obj_from_str, ObjMesh};
pub use render::Renderer;
pub use scene::{CubeInstance, Scene};
