//! Live-tunable parameter store with change notifications.
//!
//! The store accepts any value written to it; the ranges attached to each
//! field describe what the tuning panel offers, they are never enforced here.

use std::fmt;
use std::ops::RangeInclusive;

use crate::camera::PresetId;
use crate::params::{
    default_lights, BloomParameters, CameraState, ColorParameters, ColorSlot, LightSource, Rgb,
    WaveParameters, LIGHT_COUNT,
};

/// Vector component addressed by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// One of the three lights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightSlot {
    First,
    Second,
    Third,
}

impl LightSlot {
    pub const ALL: [LightSlot; LIGHT_COUNT] = [LightSlot::First, LightSlot::Second, LightSlot::Third];

    pub fn index(self) -> usize {
        match self {
            LightSlot::First => 0,
            LightSlot::Second => 1,
            LightSlot::Third => 2,
        }
    }
}

/// Panel folder a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamGroup {
    Wave,
    Color,
    Bloom,
    Light(LightSlot),
    Camera,
    Motion,
}

/// Closed set of scalar fields the store exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    Amplitude,
    Frequency,
    Speed,
    ColorWaveSpeed,
    PointSize,
    BlurStrength,
    BloomStrength,
    BloomRadius,
    BloomThreshold,
    LightIntensity(LightSlot),
    LightPosition(LightSlot, Axis),
    CameraPosition(Axis),
    CameraLookAt(Axis),
    CameraFov,
    MotionSpeed,
}

impl ParamField {
    /// Every scalar field, in panel order
    pub fn all() -> Vec<ParamField> {
        let mut fields = vec![
            ParamField::Amplitude,
            ParamField::Frequency,
            ParamField::Speed,
            ParamField::ColorWaveSpeed,
            ParamField::PointSize,
            ParamField::BlurStrength,
            ParamField::BloomStrength,
            ParamField::BloomRadius,
            ParamField::BloomThreshold,
        ];
        for slot in LightSlot::ALL {
            fields.push(ParamField::LightIntensity(slot));
            fields.extend(Axis::ALL.map(|axis| ParamField::LightPosition(slot, axis)));
        }
        fields.extend(Axis::ALL.map(ParamField::CameraPosition));
        fields.extend(Axis::ALL.map(ParamField::CameraLookAt));
        fields.push(ParamField::CameraFov);
        fields.push(ParamField::MotionSpeed);
        fields
    }

    /// Camera fields touched whenever the whole camera state changes
    pub fn camera_fields() -> Vec<ParamField> {
        let mut fields: Vec<ParamField> = Axis::ALL.map(ParamField::CameraPosition).to_vec();
        fields.extend(Axis::ALL.map(ParamField::CameraLookAt));
        fields.push(ParamField::CameraFov);
        fields
    }

    pub fn group(self) -> ParamGroup {
        match self {
            ParamField::Amplitude
            | ParamField::Frequency
            | ParamField::Speed
            | ParamField::ColorWaveSpeed
            | ParamField::PointSize
            | ParamField::BlurStrength => ParamGroup::Wave,
            ParamField::BloomStrength | ParamField::BloomRadius | ParamField::BloomThreshold => {
                ParamGroup::Bloom
            }
            ParamField::LightIntensity(slot) | ParamField::LightPosition(slot, _) => {
                ParamGroup::Light(slot)
            }
            ParamField::CameraPosition(_) | ParamField::CameraLookAt(_) | ParamField::CameraFov => {
                ParamGroup::Camera
            }
            ParamField::MotionSpeed => ParamGroup::Motion,
        }
    }

    /// Range the tuning panel offers for this field; advisory only
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            ParamField::Amplitude => 0.1..=10.0,
            ParamField::Frequency => 0.01..=1.0,
            ParamField::Speed => 0.1..=10.0,
            ParamField::ColorWaveSpeed => 0.1..=3.0,
            ParamField::PointSize => 0.5..=5.0,
            ParamField::BlurStrength => 0.0..=10.0,
            ParamField::BloomStrength | ParamField::BloomRadius => 0.0..=5.0,
            ParamField::BloomThreshold => 0.0..=1.0,
            ParamField::LightIntensity(_) => 0.0..=100.0,
            ParamField::LightPosition(_, Axis::Z) => 1.0..=100.0,
            ParamField::LightPosition(_, _) => -30.0..=30.0,
            ParamField::CameraPosition(Axis::Z) => 1.0..=100.0,
            ParamField::CameraPosition(_) | ParamField::CameraLookAt(_) => -50.0..=50.0,
            ParamField::CameraFov => 10.0..=120.0,
            ParamField::MotionSpeed => 0.1..=5.0,
        }
    }

    /// Human-readable label as shown in the panel
    pub fn label(self) -> String {
        match self {
            ParamField::Amplitude => "Amplitude".to_string(),
            ParamField::Frequency => "Frequency".to_string(),
            ParamField::Speed => "Speed".to_string(),
            ParamField::ColorWaveSpeed => "Color Speed".to_string(),
            ParamField::PointSize => "Particle Size".to_string(),
            ParamField::BlurStrength => "Blur Strength".to_string(),
            ParamField::BloomStrength => "Bloom Strength".to_string(),
            ParamField::BloomRadius => "Bloom Radius".to_string(),
            ParamField::BloomThreshold => "Bloom Threshold".to_string(),
            ParamField::LightIntensity(slot) => format!("Light {} Intensity", slot.index() + 1),
            ParamField::LightPosition(slot, axis) => {
                format!("Light {} {}", slot.index() + 1, axis.label())
            }
            ParamField::CameraPosition(axis) => format!("Camera {}", axis.label()),
            ParamField::CameraLookAt(axis) => format!("Look At {}", axis.label()),
            ParamField::CameraFov => "Field of View".to_string(),
            ParamField::MotionSpeed => "Motion Speed".to_string(),
        }
    }
}

/// Notification emitted after a write
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamChange {
    Scalar { field: ParamField, value: f32 },
    Color { slot: ColorSlot, color: Rgb },
}

/// Handle returned by [`ParameterStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ParamChange)>;

/// Complete set of tunable values
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSnapshot {
    pub wave: WaveParameters,
    pub colors: ColorParameters,
    pub bloom: BloomParameters,
    pub lights: [LightSource; LIGHT_COUNT],
    pub camera: CameraState,
    pub motion_speed: f32,
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self {
            wave: WaveParameters::default(),
            colors: ColorParameters::default(),
            bloom: BloomParameters::default(),
            lights: default_lights(),
            camera: PresetId::DefaultView.state(),
            motion_speed: 1.0,
        }
    }
}

/// Owner of every tunable value; the single source the render loop reads from
pub struct ParameterStore {
    values: ParameterSnapshot,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self {
            values: ParameterSnapshot::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn wave(&self) -> &WaveParameters {
        &self.values.wave
    }

    pub fn colors(&self) -> &ColorParameters {
        &self.values.colors
    }

    pub fn bloom(&self) -> &BloomParameters {
        &self.values.bloom
    }

    pub fn lights(&self) -> &[LightSource; LIGHT_COUNT] {
        &self.values.lights
    }

    pub fn camera(&self) -> &CameraState {
        &self.values.camera
    }

    pub fn motion_speed(&self) -> f32 {
        self.values.motion_speed
    }

    /// Copy of every current value
    pub fn snapshot(&self) -> ParameterSnapshot {
        self.values.clone()
    }

    /// Read a scalar field
    pub fn get(&self, field: ParamField) -> f32 {
        let v = &self.values;
        match field {
            ParamField::Amplitude => v.wave.amplitude,
            ParamField::Frequency => v.wave.frequency,
            ParamField::Speed => v.wave.speed,
            ParamField::ColorWaveSpeed => v.wave.color_wave_speed,
            ParamField::PointSize => v.wave.point_size,
            ParamField::BlurStrength => v.wave.blur_strength,
            ParamField::BloomStrength => v.bloom.strength,
            ParamField::BloomRadius => v.bloom.radius,
            ParamField::BloomThreshold => v.bloom.threshold,
            ParamField::LightIntensity(slot) => v.lights[slot.index()].intensity,
            ParamField::LightPosition(slot, axis) => component(v.lights[slot.index()].position, axis),
            ParamField::CameraPosition(axis) => component(v.camera.position, axis),
            ParamField::CameraLookAt(axis) => component(v.camera.look_at, axis),
            ParamField::CameraFov => v.camera.fov_degrees,
            ParamField::MotionSpeed => v.motion_speed,
        }
    }

    /// Write a scalar field; the value is stored as given
    pub fn set(&mut self, field: ParamField, value: f32) {
        let v = &mut self.values;
        match field {
            ParamField::Amplitude => v.wave.amplitude = value,
            ParamField::Frequency => v.wave.frequency = value,
            ParamField::Speed => v.wave.speed = value,
            ParamField::ColorWaveSpeed => v.wave.color_wave_speed = value,
            ParamField::PointSize => v.wave.point_size = value,
            ParamField::BlurStrength => v.wave.blur_strength = value,
            ParamField::BloomStrength => v.bloom.strength = value,
            ParamField::BloomRadius => v.bloom.radius = value,
            ParamField::BloomThreshold => v.bloom.threshold = value,
            ParamField::LightIntensity(slot) => v.lights[slot.index()].intensity = value,
            ParamField::LightPosition(slot, axis) => {
                *component_mut(&mut v.lights[slot.index()].position, axis) = value
            }
            ParamField::CameraPosition(axis) => *component_mut(&mut v.camera.position, axis) = value,
            ParamField::CameraLookAt(axis) => *component_mut(&mut v.camera.look_at, axis) = value,
            ParamField::CameraFov => v.camera.fov_degrees = value,
            ParamField::MotionSpeed => v.motion_speed = value,
        }
        self.notify(ParamChange::Scalar { field, value });
    }

    pub fn color(&self, slot: ColorSlot) -> Rgb {
        self.values.colors.get(slot)
    }

    pub fn set_color(&mut self, slot: ColorSlot, color: Rgb) {
        self.values.colors.set(slot, color);
        self.notify(ParamChange::Color { slot, color });
    }

    /// Replace the whole camera state (presets and motion ticks)
    pub fn set_camera(&mut self, camera: CameraState) {
        self.values.camera = camera;
        for field in ParamField::camera_fields() {
            let value = self.get(field);
            self.notify(ParamChange::Scalar { field, value });
        }
    }

    /// Restore every value to its default and notify subscribers of each field
    ///
    /// The camera returns to the "Default View" preset and the motion speed
    /// multiplier to 1.0. Cancelling a running camera motion is the caller's
    /// job (see `RenderLoop::reset`).
    pub fn reset(&mut self) {
        self.values = ParameterSnapshot::default();
        for field in ParamField::all() {
            let value = self.get(field);
            self.notify(ParamChange::Scalar { field, value });
        }
        for slot in ColorSlot::ALL {
            let color = self.color(slot);
            self.notify(ParamChange::Color { slot, color });
        }
    }

    /// Register a listener invoked synchronously after every write
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ParamChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: ParamChange) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ParameterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterStore")
            .field("values", &self.values)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn component(v: glam::Vec3, axis: Axis) -> f32 {
    match axis {
        Axis::X => v.x,
        Axis::Y => v.y,
        Axis::Z => v.z,
    }
}

fn component_mut(v: &mut glam::Vec3, axis: Axis) -> &mut f32 {
    match axis {
        Axis::X => &mut v.x,
        Axis::Y => &mut v.y,
        Axis::Z => &mut v.z,
    }
}
