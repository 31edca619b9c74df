use glam::Vec3;

use wavefield::bindings::PanelCommand;
use wavefield::camera::{MotionId, MotionKind, MotionLibrary, OrbitPath, PresetId};
use wavefield::params::{CameraState, DriftConfig, RenderConfig, WaveParameters};
use wavefield::render_loop::RenderLoop;
use wavefield::shader::math;
use wavefield::store::{ParamField, ParameterSnapshot};

fn render_loop() -> RenderLoop {
    RenderLoop::new(RenderConfig::default(), DriftConfig::default()).unwrap()
}

#[test]
fn every_motion_hits_its_keyframes() {
    let library = MotionLibrary::builtin().unwrap();
    assert_eq!(library.len(), 18);
    for motion in library.iter() {
        assert!(
            motion.sample(0.0).approx_eq(&motion.kind.start_state(), 1e-4),
            "{} start",
            motion.name()
        );
        assert!(
            motion.sample(1.0).approx_eq(&motion.kind.end_state(), 1e-4),
            "{} end",
            motion.name()
        );
    }
}

#[test]
fn path_motions_start_and_end_on_their_declared_poses() {
    let half_orbit = MotionId::HalfOrbit.descriptor();
    let start = CameraState::new(Vec3::new(30.0, 10.0, 0.0), Vec3::ZERO, 75.0);
    let end = CameraState::new(Vec3::new(-30.0, 10.0, 0.0), Vec3::ZERO, 75.0);
    assert!(half_orbit.sample(0.0).approx_eq(&start, 1e-3));
    assert!(half_orbit.sample(1.0).approx_eq(&end, 1e-3));

    let spiral_in = MotionId::SpiralIn.descriptor();
    let start = CameraState::new(Vec3::new(50.0, 30.0, 0.0), Vec3::ZERO, 80.0);
    let end = CameraState::new(Vec3::new(15.0, 5.0, 0.0), Vec3::ZERO, 65.0);
    assert!(spiral_in.sample(0.0).approx_eq(&start, 1e-3));
    assert!(spiral_in.sample(1.0).approx_eq(&end, 1e-3));

    let wide = MotionId::WideFigureEight.descriptor();
    let start = CameraState::new(Vec3::new(0.0, 35.0, 0.0), Vec3::ZERO, 70.0);
    let end = CameraState::new(Vec3::new(0.0, 35.0, 0.0), Vec3::ZERO, 80.0);
    assert!(wide.sample(0.0).approx_eq(&start, 1e-3));
    assert!(wide.sample(1.0).approx_eq(&end, 1e-3));
}

#[test]
fn orbit_clockwise_halfway_through() {
    let mut render_loop = render_loop();
    render_loop.start_motion("Orbit Clockwise").unwrap();
    let frame = render_loop.advance(6.0).unwrap();
    assert!(frame
        .camera
        .position
        .abs_diff_eq(Vec3::new(-35.0, -25.0, 0.0), 1e-3));
    assert_eq!(frame.camera.look_at, Vec3::ZERO);
}

#[test]
fn full_orbit_returns_to_start_for_any_radius() {
    for radius in [1.0, 35.0, 120.0] {
        let orbit = MotionKind::Orbit(OrbitPath {
            center: Vec3::new(2.0, 0.0, -3.0),
            radius,
            start_angle: 0.0,
            end_angle: std::f32::consts::TAU,
            start_height: 10.0,
            end_height: 10.0,
            start_fov: 60.0,
            end_fov: 60.0,
        });
        let start = orbit.sample(0.0).position;
        let end = orbit.sample(1.0).position;
        assert!(start.abs_diff_eq(end, 1e-3 * radius), "radius {}", radius);
    }
}

#[test]
fn second_motion_replaces_the_first() {
    let mut render_loop = render_loop();
    render_loop.start_motion("Spiral In").unwrap();
    render_loop.advance(3.0);
    render_loop.start_motion("Crane Up").unwrap();

    let frame = render_loop.advance(0.0).unwrap();
    let crane_start = MotionId::CraneUp.descriptor().kind.start_state();
    assert!(frame.camera.approx_eq(&crane_start, 1e-4));
}

#[test]
fn top_down_preset() {
    let mut render_loop = render_loop();
    PanelCommand::ApplyPreset("Top Down".to_string())
        .apply(&mut render_loop)
        .unwrap();
    let camera = *render_loop.store().camera();
    assert_eq!(camera.position, Vec3::new(0.0, 50.0, 0.0));
    assert_eq!(camera.look_at, Vec3::ZERO);
    assert_eq!(camera.fov_degrees, 60.0);
}

#[test]
fn reset_restores_defaults_and_stops_motion() {
    let mut render_loop = render_loop();
    for field in ParamField::all() {
        render_loop.store_mut().set(field, 42.0);
    }
    render_loop.start_motion("Dolly Zoom").unwrap();
    render_loop.advance(1.0);

    PanelCommand::Reset.apply(&mut render_loop).unwrap();
    assert_eq!(render_loop.store().snapshot(), ParameterSnapshot::default());
    assert!(render_loop.motion().session().is_none());
    assert_eq!(*render_loop.store().camera(), PresetId::DefaultView.state());
}

#[test]
fn wave_height_scenario() {
    let wave = WaveParameters {
        amplitude: 8.0,
        frequency: 0.1,
        speed: 2.0,
        ..WaveParameters::default()
    };
    assert!((math::wave_height(&wave, 0.0, 0.0, 5.0) + 6.73).abs() < 0.01);
}

#[test]
fn depth_fade_opacity_is_clamped() {
    assert!((math::vertex_opacity(math::depth_fade(-10.0)) - 0.6).abs() < 1e-6);
    assert!((math::vertex_opacity(math::depth_fade(10.0)) - 1.0).abs() < 1e-6);
    let mid = math::vertex_opacity(math::depth_fade(-0.5));
    assert!(mid > 0.6 && mid < 1.0);
}

#[test]
fn long_session_keeps_wave_time_bounded() {
    let mut render_loop = render_loop();
    let mut last = None;
    for _ in 0..(2 * 3600 + 10) {
        last = render_loop.advance(1.0);
    }
    let frame = last.unwrap();
    assert!(frame.wave_time <= 3600.0);
    assert!(frame.session_time > 7200.0);
}
