//! Animated camera motions: tagged keyframe variants and the built-in library.
//!
//! Each motion kind is a closed-form function of eased progress, so a motion
//! can be sampled at any point without carrying state between frames.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::easing::Easing;
use super::presets::{validate_fov, validate_state};
use crate::error::{LibraryError, LookupError};
use crate::params::CameraState;

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Straight-line transition between two camera snapshots (zoom and pan)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearKeyframes {
    pub start: CameraState,
    pub end: CameraState,
}

/// Circle around `center` at a fixed radius, height interpolated
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPath {
    pub center: Vec3,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub start_height: f32,
    pub end_height: f32,
    pub start_fov: f32,
    pub end_fov: f32,
}

/// Orbit whose radius is interpolated along with the angle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralPath {
    pub center: Vec3,
    pub start_radius: f32,
    pub end_radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub start_height: f32,
    pub end_height: f32,
    pub start_fov: f32,
    pub end_fov: f32,
}

/// Lemniscate-like loop around `center` at constant height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Figure8Path {
    pub center: Vec3,
    pub radius: f32,
    pub height: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub start_fov: f32,
    pub end_fov: f32,
}

/// Kind-specific keyframes of a motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionKind {
    Zoom(LinearKeyframes),
    Pan(LinearKeyframes),
    Orbit(OrbitPath),
    Spiral(SpiralPath),
    Figure8(Figure8Path),
}

impl MotionKind {
    /// Camera state at eased progress `eased` (0 = start keyframe, 1 = end keyframe)
    pub fn sample(&self, eased: f32) -> CameraState {
        match self {
            MotionKind::Zoom(keys) | MotionKind::Pan(keys) => keys.start.lerp(&keys.end, eased),
            MotionKind::Orbit(p) => {
                let angle = lerp(p.start_angle, p.end_angle, eased);
                let position = Vec3::new(
                    p.center.x + angle.cos() * p.radius,
                    lerp(p.start_height, p.end_height, eased),
                    p.center.z + angle.sin() * p.radius,
                );
                CameraState::new(position, p.center, lerp(p.start_fov, p.end_fov, eased))
            }
            MotionKind::Spiral(p) => {
                let angle = lerp(p.start_angle, p.end_angle, eased);
                let radius = lerp(p.start_radius, p.end_radius, eased);
                let position = Vec3::new(
                    p.center.x + angle.cos() * radius,
                    lerp(p.start_height, p.end_height, eased),
                    p.center.z + angle.sin() * radius,
                );
                CameraState::new(position, p.center, lerp(p.start_fov, p.end_fov, eased))
            }
            MotionKind::Figure8(p) => {
                let angle = lerp(p.start_angle, p.end_angle, eased);
                let position = Vec3::new(
                    p.center.x + angle.sin() * p.radius,
                    p.height,
                    p.center.z + (2.0 * angle).sin() * p.radius,
                );
                CameraState::new(position, p.center, lerp(p.start_fov, p.end_fov, eased))
            }
        }
    }

    /// Start keyframe, built from the declared start fields
    pub fn start_state(&self) -> CameraState {
        match self {
            MotionKind::Zoom(keys) | MotionKind::Pan(keys) => keys.start,
            MotionKind::Orbit(p) => {
                orbit_keyframe(p.center, p.radius, p.start_angle, p.start_height, p.start_fov)
            }
            MotionKind::Spiral(p) => orbit_keyframe(
                p.center,
                p.start_radius,
                p.start_angle,
                p.start_height,
                p.start_fov,
            ),
            MotionKind::Figure8(p) => {
                figure8_keyframe(p.center, p.radius, p.start_angle, p.height, p.start_fov)
            }
        }
    }

    /// End keyframe, built from the declared end fields
    pub fn end_state(&self) -> CameraState {
        match self {
            MotionKind::Zoom(keys) | MotionKind::Pan(keys) => keys.end,
            MotionKind::Orbit(p) => {
                orbit_keyframe(p.center, p.radius, p.end_angle, p.end_height, p.end_fov)
            }
            MotionKind::Spiral(p) => {
                orbit_keyframe(p.center, p.end_radius, p.end_angle, p.end_height, p.end_fov)
            }
            MotionKind::Figure8(p) => {
                figure8_keyframe(p.center, p.radius, p.end_angle, p.height, p.end_fov)
            }
        }
    }

    /// Short kind label ("zoom", "pan", ...)
    pub fn label(&self) -> &'static str {
        match self {
            MotionKind::Zoom(_) => "zoom",
            MotionKind::Pan(_) => "pan",
            MotionKind::Orbit(_) => "orbit",
            MotionKind::Spiral(_) => "spiral",
            MotionKind::Figure8(_) => "figure8",
        }
    }

    fn validate(&self, name: &'static str) -> Result<(), LibraryError> {
        match self {
            MotionKind::Zoom(keys) | MotionKind::Pan(keys) => {
                validate_state(name, &keys.start)?;
                validate_state(name, &keys.end)
            }
            MotionKind::Orbit(_) | MotionKind::Spiral(_) | MotionKind::Figure8(_) => {
                let (start, end) = (self.start_state(), self.end_state());
                if !start.position.is_finite() || !end.position.is_finite() {
                    return Err(LibraryError::NonFinite(name));
                }
                validate_fov(name, start.fov_degrees)?;
                validate_fov(name, end.fov_degrees)
            }
        }
    }
}

fn orbit_keyframe(center: Vec3, radius: f32, angle: f32, height: f32, fov: f32) -> CameraState {
    let position = Vec3::new(
        center.x + angle.cos() * radius,
        height,
        center.z + angle.sin() * radius,
    );
    CameraState::new(position, center, fov)
}

fn figure8_keyframe(center: Vec3, radius: f32, angle: f32, height: f32, fov: f32) -> CameraState {
    let position = Vec3::new(
        center.x + angle.sin() * radius,
        height,
        center.z + (2.0 * angle).sin() * radius,
    );
    CameraState::new(position, center, fov)
}

/// Identifier of a built-in camera motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionId {
    ZoomIn,
    ZoomOut,
    DollyZoom,
    PanLeft,
    PanRight,
    CraneUp,
    CraneDown,
    FlyOver,
    OrbitClockwise,
    OrbitCounterClockwise,
    SlowOrbit,
    HalfOrbit,
    SpiralIn,
    SpiralOut,
    RisingSpiral,
    FigureEight,
    WideFigureEight,
    QuickFigureEight,
}

impl MotionId {
    pub const ALL: [MotionId; 18] = [
        MotionId::ZoomIn,
        MotionId::ZoomOut,
        MotionId::DollyZoom,
        MotionId::PanLeft,
        MotionId::PanRight,
        MotionId::CraneUp,
        MotionId::CraneDown,
        MotionId::FlyOver,
        MotionId::OrbitClockwise,
        MotionId::OrbitCounterClockwise,
        MotionId::SlowOrbit,
        MotionId::HalfOrbit,
        MotionId::SpiralIn,
        MotionId::SpiralOut,
        MotionId::RisingSpiral,
        MotionId::FigureEight,
        MotionId::WideFigureEight,
        MotionId::QuickFigureEight,
    ];

    /// Display name shown on the trigger button
    pub fn name(self) -> &'static str {
        match self {
            MotionId::ZoomIn => "Zoom In",
            MotionId::ZoomOut => "Zoom Out",
            MotionId::DollyZoom => "Dolly Zoom",
            MotionId::PanLeft => "Pan Left",
            MotionId::PanRight => "Pan Right",
            MotionId::CraneUp => "Crane Up",
            MotionId::CraneDown => "Crane Down",
            MotionId::FlyOver => "Fly Over",
            MotionId::OrbitClockwise => "Orbit Clockwise",
            MotionId::OrbitCounterClockwise => "Orbit Counter-Clockwise",
            MotionId::SlowOrbit => "Slow Orbit",
            MotionId::HalfOrbit => "Half Orbit",
            MotionId::SpiralIn => "Spiral In",
            MotionId::SpiralOut => "Spiral Out",
            MotionId::RisingSpiral => "Rising Spiral",
            MotionId::FigureEight => "Figure Eight",
            MotionId::WideFigureEight => "Wide Figure Eight",
            MotionId::QuickFigureEight => "Quick Figure Eight",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    /// Built-in descriptor for this motion
    pub fn descriptor(self) -> CameraMotion {
        let (duration_s, easing, kind) = match self {
            MotionId::ZoomIn => (
                4.0,
                Easing::EaseInOut,
                MotionKind::Zoom(linear(
                    ([0.0, -25.0, 15.0], [0.0, 35.0, 0.0], 75.0),
                    ([0.0, -10.0, 8.0], [0.0, 20.0, 0.0], 60.0),
                )),
            ),
            MotionId::ZoomOut => (
                4.0,
                Easing::EaseInOut,
                MotionKind::Zoom(linear(
                    ([0.0, -25.0, 15.0], [0.0, 35.0, 0.0], 75.0),
                    ([0.0, -45.0, 40.0], [0.0, 10.0, 0.0], 90.0),
                )),
            ),
            MotionId::DollyZoom => (
                6.0,
                Easing::EaseInOut,
                MotionKind::Zoom(linear(
                    ([0.0, -40.0, 10.0], [0.0, 0.0, 0.0], 40.0),
                    ([0.0, -10.0, 10.0], [0.0, 0.0, 0.0], 100.0),
                )),
            ),
            MotionId::PanLeft => (
                5.0,
                Easing::EaseInOut,
                MotionKind::Pan(linear(
                    ([10.0, -25.0, 15.0], [10.0, 35.0, 0.0], 75.0),
                    ([-30.0, -25.0, 15.0], [-30.0, 35.0, 0.0], 75.0),
                )),
            ),
            MotionId::PanRight => (
                5.0,
                Easing::EaseInOut,
                MotionKind::Pan(linear(
                    ([-10.0, -25.0, 15.0], [-10.0, 35.0, 0.0], 75.0),
                    ([30.0, -25.0, 15.0], [30.0, 35.0, 0.0], 75.0),
                )),
            ),
            MotionId::CraneUp => (
                6.0,
                Easing::EaseOut,
                MotionKind::Pan(linear(
                    ([0.0, -25.0, 5.0], [0.0, 35.0, 0.0], 75.0),
                    ([0.0, -25.0, 50.0], [0.0, 0.0, 0.0], 65.0),
                )),
            ),
            MotionId::CraneDown => (
                6.0,
                Easing::EaseIn,
                MotionKind::Pan(linear(
                    ([0.0, -25.0, 50.0], [0.0, 0.0, 0.0], 65.0),
                    ([0.0, -25.0, 5.0], [0.0, 35.0, 0.0], 75.0),
                )),
            ),
            MotionId::FlyOver => (
                8.0,
                Easing::Linear,
                MotionKind::Pan(linear(
                    ([0.0, -50.0, 20.0], [0.0, 0.0, 0.0], 70.0),
                    ([0.0, 50.0, 20.0], [0.0, 80.0, 0.0], 70.0),
                )),
            ),
            MotionId::OrbitClockwise => (
                12.0,
                Easing::Linear,
                MotionKind::Orbit(orbit(35.0, (0.0, TAU), (-25.0, -25.0), 75.0)),
            ),
            MotionId::OrbitCounterClockwise => (
                12.0,
                Easing::Linear,
                MotionKind::Orbit(orbit(35.0, (TAU, 0.0), (-25.0, -25.0), 75.0)),
            ),
            MotionId::SlowOrbit => (
                24.0,
                Easing::Linear,
                MotionKind::Orbit(orbit(45.0, (0.0, TAU), (20.0, 20.0), 65.0)),
            ),
            MotionId::HalfOrbit => (
                8.0,
                Easing::EaseInOut,
                MotionKind::Orbit(orbit(30.0, (0.0, PI), (10.0, 10.0), 75.0)),
            ),
            MotionId::SpiralIn => (
                10.0,
                Easing::EaseInOut,
                MotionKind::Spiral(spiral((50.0, 15.0), (0.0, 2.0 * TAU), (30.0, 5.0), (80.0, 65.0))),
            ),
            MotionId::SpiralOut => (
                10.0,
                Easing::EaseInOut,
                MotionKind::Spiral(spiral((15.0, 50.0), (2.0 * TAU, 0.0), (5.0, 30.0), (65.0, 80.0))),
            ),
            MotionId::RisingSpiral => (
                12.0,
                Easing::EaseOut,
                MotionKind::Spiral(spiral((25.0, 40.0), (0.0, TAU), (-20.0, 40.0), (75.0, 75.0))),
            ),
            MotionId::FigureEight => (
                16.0,
                Easing::Linear,
                MotionKind::Figure8(figure8(30.0, 20.0, (75.0, 75.0))),
            ),
            MotionId::WideFigureEight => (
                20.0,
                Easing::Linear,
                MotionKind::Figure8(figure8(45.0, 35.0, (70.0, 80.0))),
            ),
            MotionId::QuickFigureEight => (
                8.0,
                Easing::EaseInOut,
                MotionKind::Figure8(figure8(20.0, 10.0, (80.0, 80.0))),
            ),
        };

        CameraMotion {
            id: self,
            duration_s,
            easing,
            kind,
        }
    }
}

type Keyframe = ([f32; 3], [f32; 3], f32);

fn linear(start: Keyframe, end: Keyframe) -> LinearKeyframes {
    let state = |(position, look_at, fov): Keyframe| {
        CameraState::new(Vec3::from_array(position), Vec3::from_array(look_at), fov)
    };
    LinearKeyframes {
        start: state(start),
        end: state(end),
    }
}

fn orbit(radius: f32, angles: (f32, f32), heights: (f32, f32), fov: f32) -> OrbitPath {
    OrbitPath {
        center: Vec3::ZERO,
        radius,
        start_angle: angles.0,
        end_angle: angles.1,
        start_height: heights.0,
        end_height: heights.1,
        start_fov: fov,
        end_fov: fov,
    }
}

fn spiral(radii: (f32, f32), angles: (f32, f32), heights: (f32, f32), fovs: (f32, f32)) -> SpiralPath {
    SpiralPath {
        center: Vec3::ZERO,
        start_radius: radii.0,
        end_radius: radii.1,
        start_angle: angles.0,
        end_angle: angles.1,
        start_height: heights.0,
        end_height: heights.1,
        start_fov: fovs.0,
        end_fov: fovs.1,
    }
}

fn figure8(radius: f32, height: f32, fovs: (f32, f32)) -> Figure8Path {
    Figure8Path {
        center: Vec3::ZERO,
        radius,
        height,
        start_angle: 0.0,
        end_angle: TAU,
        start_fov: fovs.0,
        end_fov: fovs.1,
    }
}

/// A named animated camera transition
#[derive(Debug, Clone, PartialEq)]
pub struct CameraMotion {
    pub id: MotionId,
    /// Duration at speed multiplier 1.0 (seconds)
    pub duration_s: f32,
    pub easing: Easing,
    pub kind: MotionKind,
}

impl CameraMotion {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Camera state at linear progress `progress` in [0, 1]
    pub fn sample(&self, progress: f32) -> CameraState {
        self.kind.sample(self.easing.apply(progress.clamp(0.0, 1.0)))
    }
}

/// Validated table of camera motions
#[derive(Debug, Clone)]
pub struct MotionLibrary {
    entries: Vec<CameraMotion>,
}

impl MotionLibrary {
    /// Load the 18 built-in motions
    pub fn builtin() -> Result<Self, LibraryError> {
        Self::from_entries(MotionId::ALL.into_iter().map(MotionId::descriptor).collect())
    }

    /// Validate and wrap a motion table
    pub fn from_entries(entries: Vec<CameraMotion>) -> Result<Self, LibraryError> {
        for (index, motion) in entries.iter().enumerate() {
            if entries[..index].iter().any(|other| other.id == motion.id) {
                return Err(LibraryError::DuplicateName(motion.name()));
            }
            if motion.duration_s <= 0.0 || !motion.duration_s.is_finite() {
                return Err(LibraryError::InvalidDuration(motion.name(), motion.duration_s));
            }
            motion.kind.validate(motion.name())?;
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: MotionId) -> Option<&CameraMotion> {
        self.entries.iter().find(|motion| motion.id == id)
    }

    /// Look up a motion by display name
    pub fn find(&self, name: &str) -> Result<&CameraMotion, LookupError> {
        MotionId::from_name(name)
            .and_then(|id| self.get(id))
            .ok_or_else(|| LookupError::UnknownMotion(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CameraMotion> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_builtin_library_has_eighteen_motions() {
        let library = MotionLibrary::builtin().unwrap();
        assert_eq!(library.len(), 18);
    }

    fn state(position: [f32; 3], fov: f32) -> CameraState {
        CameraState::new(Vec3::from_array(position), Vec3::ZERO, fov)
    }

    #[test]
    fn test_every_motion_hits_its_keyframes() {
        let library = MotionLibrary::builtin().unwrap();
        for motion in library.iter() {
            assert!(
                motion.sample(0.0).approx_eq(&motion.kind.start_state(), EPS),
                "{} does not start at its start keyframe",
                motion.name()
            );
            assert!(
                motion.sample(1.0).approx_eq(&motion.kind.end_state(), EPS),
                "{} does not end at its end keyframe",
                motion.name()
            );
        }
    }

    #[test]
    fn test_path_keyframes_come_from_declared_fields() {
        let orbit = MotionKind::Orbit(OrbitPath {
            center: Vec3::new(1.0, 0.0, 2.0),
            radius: 10.0,
            start_angle: 0.0,
            end_angle: PI / 2.0,
            start_height: 3.0,
            end_height: 7.0,
            start_fov: 50.0,
            end_fov: 70.0,
        });
        let expected = CameraState::new(Vec3::new(11.0, 3.0, 2.0), Vec3::new(1.0, 0.0, 2.0), 50.0);
        assert!(orbit.sample(0.0).approx_eq(&expected, EPS));
        let expected = CameraState::new(Vec3::new(1.0, 7.0, 12.0), Vec3::new(1.0, 0.0, 2.0), 70.0);
        assert!(orbit.sample(1.0).approx_eq(&expected, EPS));

        let inward = MotionKind::Spiral(spiral((20.0, 5.0), (0.0, PI), (30.0, 10.0), (80.0, 60.0)));
        assert!(inward.sample(0.0).approx_eq(&state([20.0, 30.0, 0.0], 80.0), EPS));
        assert!(inward.sample(1.0).approx_eq(&state([-5.0, 10.0, 0.0], 60.0), EPS));

        let figure8 = MotionKind::Figure8(Figure8Path {
            center: Vec3::ZERO,
            radius: 12.0,
            height: 4.0,
            start_angle: PI / 2.0,
            end_angle: PI / 4.0,
            start_fov: 65.0,
            end_fov: 85.0,
        });
        assert!(figure8.sample(0.0).approx_eq(&state([12.0, 4.0, 0.0], 65.0), EPS));
        let end_x = 12.0 * (PI / 4.0).sin();
        assert!(figure8.sample(1.0).approx_eq(&state([end_x, 4.0, 12.0], 85.0), EPS));
    }

    #[test]
    fn test_builtin_path_keyframes() {
        let cases = [
            (MotionId::OrbitClockwise, ([35.0, -25.0, 0.0], 75.0), ([35.0, -25.0, 0.0], 75.0)),
            (MotionId::OrbitCounterClockwise, ([35.0, -25.0, 0.0], 75.0), ([35.0, -25.0, 0.0], 75.0)),
            (MotionId::SlowOrbit, ([45.0, 20.0, 0.0], 65.0), ([45.0, 20.0, 0.0], 65.0)),
            (MotionId::HalfOrbit, ([30.0, 10.0, 0.0], 75.0), ([-30.0, 10.0, 0.0], 75.0)),
            (MotionId::SpiralIn, ([50.0, 30.0, 0.0], 80.0), ([15.0, 5.0, 0.0], 65.0)),
            (MotionId::SpiralOut, ([15.0, 5.0, 0.0], 65.0), ([50.0, 30.0, 0.0], 80.0)),
            (MotionId::RisingSpiral, ([25.0, -20.0, 0.0], 75.0), ([40.0, 40.0, 0.0], 75.0)),
            (MotionId::FigureEight, ([0.0, 20.0, 0.0], 75.0), ([0.0, 20.0, 0.0], 75.0)),
            (MotionId::WideFigureEight, ([0.0, 35.0, 0.0], 70.0), ([0.0, 35.0, 0.0], 80.0)),
            (MotionId::QuickFigureEight, ([0.0, 10.0, 0.0], 80.0), ([0.0, 10.0, 0.0], 80.0)),
        ];
        for (id, start, end) in cases {
            let motion = id.descriptor();
            assert!(
                motion.sample(0.0).approx_eq(&state(start.0, start.1), EPS),
                "{} start: {:?}",
                id.name(),
                motion.sample(0.0)
            );
            assert!(
                motion.sample(1.0).approx_eq(&state(end.0, end.1), EPS),
                "{} end: {:?}",
                id.name(),
                motion.sample(1.0)
            );
        }
    }

    #[test]
    fn test_linear_motions_hit_declared_keyframes() {
        let motion = MotionId::ZoomIn.descriptor();
        let MotionKind::Zoom(keys) = motion.kind else {
            panic!("Zoom In should be a zoom");
        };
        assert!(motion.sample(0.0).approx_eq(&keys.start, EPS));
        assert!(motion.sample(1.0).approx_eq(&keys.end, EPS));
    }

    #[test]
    fn test_full_orbit_returns_to_start_for_any_radius() {
        for radius in [1.0, 35.0, 500.0] {
            let path = MotionKind::Orbit(orbit(radius, (0.0, TAU), (-25.0, -25.0), 75.0));
            let start = path.sample(0.0);
            let end = path.sample(1.0);
            let tolerance = 1e-5 * radius.max(1.0);
            assert!(
                start.position.abs_diff_eq(end.position, tolerance),
                "radius {}: {:?} vs {:?}",
                radius,
                start.position,
                end.position
            );
        }
    }

    #[test]
    fn test_orbit_clockwise_halfway() {
        let motion = MotionId::OrbitClockwise.descriptor();
        let state = motion.sample(0.5);
        assert!((state.position.x + 35.0).abs() < EPS);
        assert!((state.position.y + 25.0).abs() < EPS);
        assert!(state.position.z.abs() < EPS);
        assert_eq!(state.look_at, Vec3::ZERO);
    }

    #[test]
    fn test_spiral_radius_shrinks() {
        let motion = MotionId::SpiralIn.descriptor();
        let horizontal = |s: CameraState| Vec3::new(s.position.x, 0.0, s.position.z).length();
        assert!((horizontal(motion.sample(0.0)) - 50.0).abs() < EPS);
        assert!((horizontal(motion.sample(1.0)) - 15.0).abs() < EPS);
    }

    #[test]
    fn test_figure_eight_keeps_height() {
        let motion = MotionId::FigureEight.descriptor();
        for step in 0..=10 {
            let state = motion.sample(step as f32 / 10.0);
            assert_eq!(state.position.y, 20.0);
            assert_eq!(state.look_at, Vec3::ZERO);
        }
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut motion = MotionId::ZoomIn.descriptor();
        motion.duration_s = 0.0;
        assert_eq!(
            MotionLibrary::from_entries(vec![motion]).unwrap_err(),
            LibraryError::InvalidDuration("Zoom In", 0.0)
        );
    }

    #[test]
    fn test_unknown_motion_is_not_found() {
        let library = MotionLibrary::builtin().unwrap();
        assert!(matches!(
            library.find("Barrel Roll"),
            Err(LookupError::UnknownMotion(_))
        ));
    }
}
