//! Wavefield - an animated particle wave field with cinematic camera motions
//!
//! The window hosts the render loop; the keyboard stands in for the tuning
//! panel (P/M select presets and motions, Enter plays, S stops, R resets).

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use wavefield::camera::{MotionLibrary, PresetLibrary};
use wavefield::cli::Args;
use wavefield::error::EngineError;
use wavefield::panel::{KeyboardPanel, PanelAction};
use wavefield::params::{DriftConfig, ParticleGridConfig, RecordingConfig, RenderConfig};
use wavefield::particles::ParticleField;
use wavefield::render_loop::RenderLoop;
use wavefield::rendering::RenderSystem;
use wavefield::store::ParamField;

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,
    panel: Option<KeyboardPanel>,

    // Engine
    render_loop: RenderLoop,
    field: ParticleField,

    // Configuration
    render_config: RenderConfig,
    recording: Option<RecordingConfig>,

    // Time tracking
    last_frame: Instant,
    frames_recorded: usize,

    /// First fatal error; reported once the event loop returns
    fatal: Option<EngineError>,
}

impl App {
    fn new(
        render_loop: RenderLoop,
        grid: &ParticleGridConfig,
        render_config: RenderConfig,
        recording: Option<RecordingConfig>,
    ) -> Self {
        let field = ParticleField::new(grid);
        info!(
            "Particle field: {} x {} ({} particles)",
            field.rows(),
            field.cols(),
            field.len()
        );

        Self {
            window: None,
            render_system: None,
            panel: None,
            render_loop,
            field,
            render_config,
            recording,
            last_frame: Instant::now(),
            frames_recorded: 0,
            fatal: None,
        }
    }

    /// Teardown: stop the loop, then the panel, then GPU resources
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.render_loop.cancel();
        if let Some(mut panel) = self.panel.take() {
            panel.detach(self.render_loop.store_mut());
        }
        self.render_system = None;
        self.window = None;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: EngineError) {
        error!("{}", err);
        self.fatal.get_or_insert(err);
        self.shutdown(event_loop);
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.render_loop.is_active() {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || !self.render_loop.is_active() {
            return;
        }

        let window_attributes = Window::default_attributes()
            .with_title("Wavefield")
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, EngineError::Surface(e.to_string()));
                return;
            }
        };

        let render_system = match pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.field,
            &self.render_config,
            self.recording.is_some(),
        )) {
            Ok(render_system) => render_system,
            Err(e) => {
                self.fail(event_loop, e);
                return;
            }
        };

        let (width, height) = render_system.size();
        self.render_loop.request_resize(width, height);
        self.panel = Some(KeyboardPanel::attach(self.render_loop.store_mut()));
        self.window = Some(window);
        self.render_system = Some(render_system);
        self.last_frame = Instant::now();

        info!("Wavefield is running (Esc to quit)");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),
            WindowEvent::Resized(size) => {
                self.render_loop.request_resize(size.width, size.height)
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        logical_key,
                        ..
                    },
                ..
            } => {
                let Some(panel) = self.panel.as_mut() else {
                    return;
                };
                match panel.handle_key(&logical_key, self.render_loop.store()) {
                    Some(PanelAction::Quit) => self.shutdown(event_loop),
                    Some(PanelAction::Command(command)) => {
                        if let Err(e) = command.apply(&mut self.render_loop) {
                            warn!("{}", e);
                        }
                    }
                    None => {}
                }
            }
            WindowEvent::RedrawRequested => self.render_frame(event_loop),
            _ => {}
        }
    }
}

impl App {
    /// Advance the engine and draw a single frame
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = match &self.recording {
            Some(recording) => f64::from(recording.frame_step()),
            None => now.duration_since(self.last_frame).as_secs_f64(),
        };
        self.last_frame = now;

        let Some(frame) = self.render_loop.advance(dt) else {
            return;
        };
        if let Some(panel) = self.panel.as_mut() {
            panel.refresh();
        }

        let Some(render_system) = self.render_system.as_mut() else {
            return;
        };
        if let Some((width, height)) = frame.resize {
            render_system.resize(width, height);
        }
        render_system.update_uniforms(&frame.uniforms);

        let capture_path = self
            .recording
            .as_ref()
            .map(|recording| PathBuf::from(recording.frame_path(self.frames_recorded)));

        match render_system.render(&frame.bloom, capture_path.as_deref()) {
            Ok(()) => {}
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                warn!("Surface {:?}, reconfiguring", e);
                render_system.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, EngineError::OutOfMemory);
                return;
            }
            Err(e) => warn!("Skipped frame {}: {:?}", frame.index, e),
        }

        if let Some(reason) = render_system.device_lost() {
            self.fail(event_loop, EngineError::DeviceLost(reason));
            return;
        }

        if let Some(recording) = &self.recording {
            self.frames_recorded += 1;
            if self.frames_recorded >= recording.total_frames() {
                info!(
                    "Recorded {} frames to {}",
                    self.frames_recorded,
                    recording.frames_dir()
                );
                self.shutdown(event_loop);
            }
        }
    }
}

/// Print the preset and motion tables
fn print_catalog() -> anyhow::Result<()> {
    let presets = PresetLibrary::builtin()?;
    let motions = MotionLibrary::builtin()?;

    println!("Camera presets:");
    for preset in presets.iter() {
        let state = preset.state;
        println!(
            "  {:<18} position {:?}  look at {:?}  fov {}",
            preset.name(),
            state.position.to_array(),
            state.look_at.to_array(),
            state.fov_degrees
        );
    }

    println!("\nCamera motions:");
    for motion in motions.iter() {
        println!(
            "  {:<24} {:>5.1}s  {:<6} {}",
            motion.name(),
            motion.duration_s,
            motion.kind.label(),
            motion.easing.id()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.list {
        return print_catalog();
    }

    let recording = args
        .create_recording_config()
        .context("Failed to create frames directory")?;

    let mut render_loop = RenderLoop::new(args.render_config(), DriftConfig::default())?;
    render_loop
        .store_mut()
        .set(ParamField::MotionSpeed, args.speed);

    for command in args.color_commands()? {
        command.apply(&mut render_loop)?;
    }

    if let Some(name) = &args.preset {
        if let Err(e) = render_loop.apply_preset(name) {
            warn!("{}", e);
        }
    }
    if let Some(name) = &args.motion {
        if let Err(e) = render_loop.start_motion(name) {
            warn!("{}", e);
        }
    }

    let mut app = App::new(
        render_loop,
        &args.grid_config(),
        args.render_config(),
        recording,
    );
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
