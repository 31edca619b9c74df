//! Camera motion state machine: at most one animation session at a time.

use log::{debug, info};

use super::motion::{MotionId, MotionLibrary};
use super::presets::PresetLibrary;
use crate::error::{LibraryError, LookupError};
use crate::params::CameraState;
use crate::store::ParameterStore;

/// A running camera motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAnimationSession {
    pub motion: MotionId,
    /// Session clock reading when the motion started (seconds)
    pub start_time: f64,
    /// Effective duration after applying the speed multiplier (seconds)
    pub duration: f64,
    pub speed_multiplier: f32,
}

impl CameraAnimationSession {
    /// Linear progress in [0, 1] at `now`
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0) as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Animating(CameraAnimationSession),
}

/// Owns the preset and motion tables and the single animation session
#[derive(Debug)]
pub struct CameraMotionEngine {
    presets: PresetLibrary,
    motions: MotionLibrary,
    state: MotionState,
}

impl CameraMotionEngine {
    /// Build the engine over the built-in tables
    pub fn new() -> Result<Self, LibraryError> {
        Ok(Self::with_libraries(
            PresetLibrary::builtin()?,
            MotionLibrary::builtin()?,
        ))
    }

    pub fn with_libraries(presets: PresetLibrary, motions: MotionLibrary) -> Self {
        Self {
            presets,
            motions,
            state: MotionState::Idle,
        }
    }

    pub fn presets(&self) -> &PresetLibrary {
        &self.presets
    }

    pub fn motions(&self) -> &MotionLibrary {
        &self.motions
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn session(&self) -> Option<&CameraAnimationSession> {
        match &self.state {
            MotionState::Idle => None,
            MotionState::Animating(session) => Some(session),
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, MotionState::Animating(_))
    }

    /// Start the named motion, replacing any running session
    ///
    /// An unknown name leaves the current session untouched.
    pub fn start_motion(
        &mut self,
        name: &str,
        speed_multiplier: f32,
        now: f64,
    ) -> Result<CameraAnimationSession, LookupError> {
        let id = self.motions.find(name)?.id;
        self.start(id, speed_multiplier, now)
            .ok_or_else(|| LookupError::UnknownMotion(name.to_string()))
    }

    /// Start a motion by id; `None` if this engine's table lacks it
    pub fn start(
        &mut self,
        id: MotionId,
        speed_multiplier: f32,
        now: f64,
    ) -> Option<CameraAnimationSession> {
        let motion = self.motions.get(id)?;
        let session = CameraAnimationSession {
            motion: id,
            start_time: now,
            duration: f64::from(motion.duration_s) / f64::from(speed_multiplier),
            speed_multiplier,
        };
        if let Some(previous) = self.session() {
            debug!("Replacing motion '{}'", previous.motion.name());
        }
        info!(
            "Starting motion '{}' ({:.2}s at {:.1}x)",
            id.name(),
            session.duration,
            speed_multiplier
        );
        self.state = MotionState::Animating(session);
        Some(session)
    }

    /// Advance the running session and write the camera into `store`
    ///
    /// Returns the camera written this tick, or `None` when idle. The session
    /// ends on the tick where progress reaches 1.
    pub fn tick(&mut self, now: f64, store: &mut ParameterStore) -> Option<CameraState> {
        let MotionState::Animating(session) = self.state else {
            return None;
        };
        let Some(motion) = self.motions.get(session.motion) else {
            self.state = MotionState::Idle;
            return None;
        };

        let progress = session.progress(now);
        let camera = motion.sample(progress);
        store.set_camera(camera);

        if progress >= 1.0 {
            debug!("Motion '{}' finished", session.motion.name());
            self.state = MotionState::Idle;
        }
        Some(camera)
    }

    /// Cancel any running session
    pub fn stop(&mut self) {
        if let MotionState::Animating(session) = self.state {
            debug!("Stopping motion '{}'", session.motion.name());
        }
        self.state = MotionState::Idle;
    }

    /// Snap the camera to a named preset; cancels any running motion
    pub fn apply_preset(
        &mut self,
        name: &str,
        store: &mut ParameterStore,
    ) -> Result<CameraState, LookupError> {
        let preset = self.presets.find(name)?;
        let camera = preset.state;
        info!("Applying camera preset '{}'", preset.name());
        self.stop();
        store.set_camera(camera);
        Ok(camera)
    }
}
