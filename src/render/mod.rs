pub mod renderer;
pub mod sequencer;
mod shaders;
pub mod targets;
pub mod texture;
pub mod uniforms;

pub use renderer::Renderer;
pub use sequencer::{FramePlan, PassState, RenderTarget, TwoPassSequencer};
