//! Per-frame driver: clock, camera advancement and uniform assembly.
//!
//! The host calls [`RenderLoop::advance`] once per redraw and keeps asking for
//! redraws while the loop's [`FrameToken`] is active. Everything a frame needs
//! is produced here, in a fixed order, so no draw ever sees a half-updated
//! camera session.

use log::{debug, info};

use crate::camera::{self, CameraAnimationSession, CameraMotionEngine};
use crate::error::{LibraryError, LookupError};
use crate::params::{BloomParameters, CameraState, DriftConfig, RenderConfig};
use crate::shader::ParticleUniforms;
use crate::store::ParameterStore;

/// Wave time is rebased once it exceeds this many seconds
pub const CLOCK_RESET_SECS: f64 = 3600.0;

/// Session clock plus the periodically rebased wave clock
///
/// Camera motions read the monotonic session time so a wave clock reset
/// never disturbs a running motion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    session: f64,
    wave_epoch: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds; returns true when the wave clock was rebased
    pub fn advance(&mut self, dt: f64) -> bool {
        self.session += dt.max(0.0);
        if self.session - self.wave_epoch > CLOCK_RESET_SECS {
            self.wave_epoch = self.session;
            return true;
        }
        false
    }

    /// Seconds since the loop started
    pub fn session_time(&self) -> f64 {
        self.session
    }

    /// Seconds since the last wave clock reset, fed to the shader
    pub fn wave_time(&self) -> f32 {
        (self.session - self.wave_epoch) as f32
    }
}

/// Owned cancellation flag for the frame loop
#[derive(Debug)]
pub struct FrameToken {
    active: bool,
}

impl FrameToken {
    fn new() -> Self {
        Self { active: true }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

/// Everything the renderer needs to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub index: u64,
    pub session_time: f64,
    pub wave_time: f32,
    pub camera: CameraState,
    pub uniforms: ParticleUniforms,
    pub bloom: BloomParameters,
    /// Viewport size to apply before drawing, if it changed since the last frame
    pub resize: Option<(u32, u32)>,
}

/// The engine instance: parameter store, camera motions and frame clock
pub struct RenderLoop {
    store: ParameterStore,
    motion: CameraMotionEngine,
    clock: FrameClock,
    token: FrameToken,
    render_config: RenderConfig,
    drift: DriftConfig,
    viewport: (u32, u32),
    pending_resize: Option<(u32, u32)>,
    frame_index: u64,
}

impl RenderLoop {
    pub fn new(render_config: RenderConfig, drift: DriftConfig) -> Result<Self, LibraryError> {
        let viewport = (render_config.window_width, render_config.window_height);
        Ok(Self {
            store: ParameterStore::new(),
            motion: CameraMotionEngine::new()?,
            clock: FrameClock::new(),
            token: FrameToken::new(),
            render_config,
            drift,
            viewport,
            pending_resize: None,
            frame_index: 0,
        })
    }

    pub fn store(&self) -> &ParameterStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ParameterStore {
        &mut self.store
    }

    pub fn motion(&self) -> &CameraMotionEngine {
        &self.motion
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn is_active(&self) -> bool {
        self.token.is_active()
    }

    /// Stop producing frames; the first step of teardown
    pub fn cancel(&mut self) {
        if self.token.is_active() {
            info!("Render loop cancelled after {} frames", self.frame_index);
        }
        self.token.cancel();
    }

    /// Record a viewport change; it takes effect at the next frame boundary
    pub fn request_resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.pending_resize = Some((width, height));
    }

    /// Start a named motion at the current speed multiplier
    pub fn start_motion(&mut self, name: &str) -> Result<CameraAnimationSession, LookupError> {
        let speed = self.store.motion_speed();
        self.motion
            .start_motion(name, speed, self.clock.session_time())
    }

    pub fn stop_motion(&mut self) {
        self.motion.stop();
    }

    /// Snap to a named preset, cancelling any running motion
    pub fn apply_preset(&mut self, name: &str) -> Result<CameraState, LookupError> {
        self.motion.apply_preset(name, &mut self.store)
    }

    /// Restore all parameters to defaults and drop any running motion
    pub fn reset(&mut self) {
        info!("Resetting parameters");
        self.motion.stop();
        self.store.reset();
    }

    /// Run one iteration; `None` once the loop has been cancelled
    ///
    /// Order within a frame: pending resize, clock, camera advancement, then
    /// the uniform snapshot the draw consumes.
    pub fn advance(&mut self, dt: f64) -> Option<Frame> {
        if !self.token.is_active() {
            return None;
        }

        let resize = self.pending_resize.take();
        if let Some(size) = resize {
            debug!("Applying resize to {}x{}", size.0, size.1);
            self.viewport = size;
        }

        if self.clock.advance(dt) {
            info!(
                "Wave clock rebased at {:.1}s session time",
                self.clock.session_time()
            );
        }
        let session_time = self.clock.session_time();
        let wave_time = self.clock.wave_time();

        self.motion.tick(session_time, &mut self.store);
        let camera = *self.store.camera();

        let aspect = self.viewport.0 as f32 / self.viewport.1.max(1) as f32;
        let view_proj = camera::view_proj_matrix(&camera, aspect, &self.render_config);
        let uniforms = ParticleUniforms::from_store(
            &self.store,
            view_proj,
            wave_time,
            self.viewport,
            &self.drift,
        );

        let frame = Frame {
            index: self.frame_index,
            session_time,
            wave_time,
            camera,
            uniforms,
            bloom: *self.store.bloom(),
            resize,
        };
        self.frame_index += 1;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PresetId;
    use crate::params::WaveParameters;
    use crate::shader::math;
    use crate::store::ParamField;
    use glam::Vec3;
    use std::f32::consts::PI;
    use std::f64::consts::TAU;

    fn render_loop() -> RenderLoop {
        RenderLoop::new(RenderConfig::default(), DriftConfig::default()).unwrap()
    }

    #[test]
    fn test_clock_resets_after_an_hour() {
        let mut clock = FrameClock::new();
        assert!(!clock.advance(CLOCK_RESET_SECS));
        assert!(clock.advance(0.5));
        assert_eq!(clock.wave_time(), 0.0);
        assert_eq!(clock.session_time(), CLOCK_RESET_SECS + 0.5);

        clock.advance(1.0);
        assert_eq!(clock.wave_time(), 1.0);
    }

    #[test]
    fn test_clock_reset_phase_jump_is_bounded() {
        let wave = WaveParameters::default();
        let mut clock = FrameClock::new();
        // Exact in binary, so the session clock accumulates without drift
        let dt = 0.5;
        let (x, y) = (3.0, -4.0);

        let mut before = math::wave_height(&wave, x, y, clock.wave_time());
        while !clock.advance(dt) {
            before = math::wave_height(&wave, x, y, clock.wave_time());
        }
        let after = math::wave_height(&wave, x, y, clock.wave_time());

        assert_eq!(clock.session_time(), CLOCK_RESET_SECS + dt);
        assert!(f64::from(clock.wave_time()) < dt);
        assert!((after - before).abs() <= 2.0 * wave.amplitude);

        // The rebase drops exactly the elapsed epoch from the wave phase
        let rate = f64::from(wave.speed * wave.frequency);
        let dropped = (clock.session_time() - f64::from(clock.wave_time())) * rate;
        let expected = (CLOCK_RESET_SECS + dt) * rate;
        let diff = (dropped - expected).rem_euclid(TAU);
        assert!(diff.min(TAU - diff) < 1e-6);

        clock.advance(dt);
        assert_eq!(f64::from(clock.wave_time()), dt);
    }

    #[test]
    fn test_wave_stays_continuous_within_an_epoch() {
        let wave = WaveParameters::default();
        let mut clock = FrameClock::new();
        clock.advance(1800.0);
        let before = math::wave_height(&wave, 3.0, 2.0, clock.wave_time());
        clock.advance(1.0 / 60.0);
        let after = math::wave_height(&wave, 3.0, 2.0, clock.wave_time());
        assert!((after - before).abs() < wave.amplitude * PI / 60.0);
    }

    #[test]
    fn test_cancelled_loop_produces_no_frames() {
        let mut render_loop = render_loop();
        assert!(render_loop.advance(0.016).is_some());
        render_loop.cancel();
        assert!(render_loop.advance(0.016).is_none());
        assert!(!render_loop.is_active());
    }

    #[test]
    fn test_resize_applied_at_next_frame() {
        let mut render_loop = render_loop();
        render_loop.request_resize(800, 600);
        render_loop.request_resize(1024, 768);
        assert_eq!(render_loop.viewport(), (1280, 720));

        let frame = render_loop.advance(0.016).unwrap();
        assert_eq!(frame.resize, Some((1024, 768)));
        assert_eq!(frame.uniforms.viewport[..2], [1024.0, 768.0]);

        let frame = render_loop.advance(0.016).unwrap();
        assert_eq!(frame.resize, None);
    }

    #[test]
    fn test_zero_sized_resize_ignored() {
        let mut render_loop = render_loop();
        render_loop.request_resize(0, 600);
        assert_eq!(render_loop.advance(0.016).unwrap().resize, None);
    }

    #[test]
    fn test_frame_reflects_motion_tick() {
        let mut render_loop = render_loop();
        render_loop.advance(1.0);
        render_loop.start_motion("Orbit Clockwise").unwrap();

        let frame = render_loop.advance(6.0).unwrap();
        assert!(frame
            .camera
            .position
            .abs_diff_eq(Vec3::new(-35.0, -25.0, 0.0), 1e-3));
        assert_eq!(frame.uniforms.wave[3], frame.wave_time);
    }

    #[test]
    fn test_starting_motion_b_discards_motion_a() {
        let mut render_loop = render_loop();
        render_loop.start_motion("Orbit Clockwise").unwrap();
        render_loop.advance(2.0);
        render_loop.start_motion("Pan Left").unwrap();

        let frame = render_loop.advance(5.0).unwrap();
        let pan_end = crate::camera::MotionId::PanLeft.descriptor().kind.end_state();
        assert!(frame.camera.approx_eq(&pan_end, 1e-4));
        assert!(!render_loop.motion().is_animating());
    }

    #[test]
    fn test_speed_multiplier_comes_from_store() {
        let mut render_loop = render_loop();
        render_loop.store_mut().set(ParamField::MotionSpeed, 4.0);
        let session = render_loop.start_motion("Zoom In").unwrap();
        assert_eq!(session.duration, 1.0);
    }

    #[test]
    fn test_reset_clears_motion_and_parameters() {
        let mut render_loop = render_loop();
        render_loop.store_mut().set(ParamField::Amplitude, 9.0);
        render_loop.start_motion("Slow Orbit").unwrap();
        render_loop.advance(3.0);

        render_loop.reset();
        assert!(!render_loop.motion().is_animating());
        assert_eq!(render_loop.store().wave().amplitude, 3.0);
        assert_eq!(*render_loop.store().camera(), PresetId::DefaultView.state());

        let frame = render_loop.advance(1.0).unwrap();
        assert_eq!(frame.camera, PresetId::DefaultView.state());
    }

    #[test]
    fn test_top_down_preset_scenario() {
        let mut render_loop = render_loop();
        let camera = render_loop.apply_preset("Top Down").unwrap();
        assert_eq!(camera.position, Vec3::new(0.0, 50.0, 0.0));
        assert_eq!(camera.look_at, Vec3::ZERO);
        assert_eq!(camera.fov_degrees, 60.0);

        let frame = render_loop.advance(0.016).unwrap();
        assert!(glam::Mat4::from_cols_array_2d(&frame.uniforms.view_proj).is_finite());
    }
}
