use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use glam::Vec2;
use log::{info, warn};
use pollster::block_on;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::{CursorGrabMode, WindowBuilder};

use multilight::assets::{self, MODEL_PATH};
use multilight::scene::ModelInstance;
use multilight::{
    Camera, CubeInstance, FrameClock, InputState, KeyCode, MouseTracker, NamedKey, Renderer, Scene,
};

const WINDOW_WIDTH: f64 = 800.0;
const WINDOW_HEIGHT: f64 = 600.0;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut scene = Scene::demo();
    if Path::new(MODEL_PATH).exists() {
        let mesh = assets::load_model(MODEL_PATH)
            .with_context(|| format!("failed to load model {MODEL_PATH}"))?;
        info!(
            "loaded model {MODEL_PATH} ({} indices)",
            mesh.index_count()
        );
        scene.model = Some(ModelInstance {
            mesh,
            transform: CubeInstance::at(glam::Vec3::new(0.0, -1.0, 0.0)),
        });
    }

    match run_interactive(&scene) {
        Ok(()) => Ok(()),
        Err(err) => {
            // Window/context bootstrap failures exit nonzero; the scene
            // summary goes out alongside the diagnostic.
            if err.downcast_ref::<WindowInitError>().is_some() {
                print_summary(&scene);
            }
            Err(err)
        }
    }
}

fn run_interactive(scene: &Scene) -> Result<()> {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let event_loop = panic::catch_unwind(AssertUnwindSafe(EventLoop::new));
    panic::set_hook(default_hook);
    let event_loop =
        event_loop.map_err(|panic| WindowInitError::from_panic("event loop", panic))?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Multi-Light Demo")
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .build(&event_loop)
            .map_err(|err| WindowInitError::from_error("window", err))?,
    );

    // Classic FPS controls: the cursor is captured and hidden for the whole
    // session. Confined is not available everywhere, so fall back to Locked.
    if window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
        .is_err()
    {
        warn!("cursor grab is unavailable; mouse look still works");
    }
    window.set_cursor_visible(false);

    let diffuse = assets::diffuse_or_fallback();
    let skybox = assets::skybox_or_fallback();
    let renderer = block_on(Renderer::new(
        Arc::clone(&window),
        &diffuse,
        &skybox,
        scene.model.as_ref().map(|instance| &instance.mesh),
    ))?;

    let mut app = AppState {
        renderer,
        camera: Camera::default(),
        scene: scene.clone(),
        input: InputState::new(),
        mouse: MouseTracker::new(),
        clock: FrameClock::new(),
        last_error: None,
    };

    let mut event_loop = event_loop;
    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        if let Err(err) = app.process_event(&event, control_flow) {
            app.last_error = Some(err);
            control_flow.set_exit();
        }
    });

    if let Some(err) = app.last_error {
        return Err(err);
    }
    Ok(())
}

struct AppState {
    renderer: Renderer,
    camera: Camera,
    scene: Scene,
    input: InputState,
    mouse: MouseTracker,
    clock: FrameClock,
    last_error: Option<anyhow::Error>,
}

impl AppState {
    fn process_event(&mut self, event: &Event<()>, control_flow: &mut ControlFlow) -> Result<()> {
        match event {
            Event::WindowEvent { event, window_id } if *window_id == self.renderer.window_id() => {
                match event {
                    WindowEvent::CloseRequested => {
                        control_flow.set_exit();
                    }
                    WindowEvent::Resized(size) => {
                        self.renderer.resize(*size)?;
                    }
                    WindowEvent::ScaleFactorChanged { new_inner_size, .. } => {
                        self.renderer.resize(**new_inner_size)?;
                    }
                    WindowEvent::KeyboardInput { input, .. } => {
                        self.handle_keyboard(input, control_flow);
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        let pos = Vec2::new(position.x as f32, position.y as f32);
                        let delta = self.mouse.delta(pos);
                        self.camera.process_mouse(delta);
                    }
                    WindowEvent::Focused(false) => {
                        self.mouse.reset();
                    }
                    _ => {}
                }
            }
            Event::RedrawRequested(window_id) if *window_id == self.renderer.window_id() => {
                self.redraw()?;
            }
            Event::MainEventsCleared => {
                self.renderer.window().request_redraw();
            }
            _ => {}
        }
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let delta_time = self.clock.tick();
        for direction in self.input.movement() {
            self.camera.process_keyboard(direction, delta_time);
        }
        // The spotlight is the camera's headlamp.
        self.scene
            .lights
            .spot
            .follow(self.camera.position(), self.camera.front());

        self.renderer.update_globals(&self.camera, &self.scene.lights);
        if let Err(err) = self.renderer.render(&self.scene) {
            match err {
                wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                    let size = self.renderer.window().inner_size();
                    self.renderer.resize(size)?;
                }
                wgpu::SurfaceError::OutOfMemory => {
                    return Err(anyhow!("GPU is out of memory"));
                }
                wgpu::SurfaceError::Timeout => {
                    info!("Surface timeout; retrying next frame");
                }
            }
        }
        Ok(())
    }

    fn handle_keyboard(&mut self, input: &KeyboardInput, control_flow: &mut ControlFlow) {
        let Some(keycode) = input.virtual_keycode.and_then(map_keycode) else {
            return;
        };
        match input.state {
            ElementState::Pressed => {
                if keycode == KeyCode::Named(NamedKey::Escape) {
                    control_flow.set_exit();
                    return;
                }
                // Toggle on the initial press only; key repeat arrives as
                // further Pressed events.
                if keycode == KeyCode::Character('G') && !self.input.is_key_down(keycode) {
                    let enabled = !self.renderer.post_enabled();
                    self.renderer.set_post_enabled(enabled);
                    info!("greyscale pass {}", if enabled { "on" } else { "off" });
                }
                self.input.set_key_down(keycode);
            }
            ElementState::Released => self.input.set_key_up(keycode),
        }
    }
}

#[derive(Debug)]
struct WindowInitError {
    message: String,
}

impl WindowInitError {
    fn from_panic(stage: &str, panic: Box<dyn Any + Send>) -> Self {
        Self {
            message: format!("failed to initialize {stage}: {}", panic_message(panic)),
        }
    }

    fn from_error(stage: &str, err: impl fmt::Display) -> Self {
        Self {
            message: format!("failed to initialize {stage}: {err}"),
        }
    }
}

impl fmt::Display for WindowInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for WindowInitError {}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    match panic.downcast::<String>() {
        Ok(msg) => *msg,
        Err(panic) => match panic.downcast::<&'static str>() {
            Ok(msg) => (*msg).to_string(),
            Err(_) => "unknown panic".into(),
        },
    }
}

fn map_keycode(code: winit::event::VirtualKeyCode) -> Option<KeyCode> {
    use winit::event::VirtualKeyCode as Key;
    Some(match code {
        Key::Left => KeyCode::Named(NamedKey::Left),
        Key::Right => KeyCode::Named(NamedKey::Right),
        Key::Up => KeyCode::Named(NamedKey::Up),
        Key::Down => KeyCode::Named(NamedKey::Down),
        Key::Escape => KeyCode::Named(NamedKey::Escape),
        Key::W => KeyCode::Character('W'),
        Key::A => KeyCode::Character('A'),
        Key::S => KeyCode::Character('S'),
        Key::D => KeyCode::Character('D'),
        Key::G => KeyCode::Character('G'),
        _ => return None,
    })
}

fn print_summary(scene: &Scene) {
    println!("Scene summary:");
    println!(" - {} lit cube(s)", scene.cubes.len());
    println!(
        " - {} point light(s), 1 directional, 1 spot",
        scene.lights.point_lights().len()
    );
    for cube in &scene.cubes {
        println!(
            "   cube at ({:.1}, {:.1}, {:.1})",
            cube.position.x, cube.position.y, cube.position.z
        );
    }
    match &scene.model {
        Some(instance) => println!(" - model with {} indices", instance.mesh.index_count()),
        None => println!(" - no model loaded"),
    }
}
