//! Binding contract between a tuning panel and the engine.
//!
//! Widgets are described by [`ControlSpec`]; user actions come back as
//! [`PanelCommand`]s. Ranges are for widgets only, the store never clamps.

use std::ops::RangeInclusive;

use crate::error::LookupError;
use crate::params::{ColorSlot, Rgb};
use crate::render_loop::RenderLoop;
use crate::store::{ParamField, ParamGroup};

/// One slider in the tuning panel
#[derive(Debug, Clone, PartialEq)]
pub struct ControlSpec {
    pub field: ParamField,
    pub label: String,
    pub range: RangeInclusive<f32>,
}

impl ControlSpec {
    pub fn new(field: ParamField) -> Self {
        Self {
            field,
            label: field.label(),
            range: field.range(),
        }
    }

    pub fn group(&self) -> ParamGroup {
        self.field.group()
    }

    /// Clamp a widget value into this control's range
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(*self.range.start(), *self.range.end())
    }
}

/// The full slider table, in panel order
pub fn controls() -> Vec<ControlSpec> {
    ParamField::all()
        .into_iter()
        .map(ControlSpec::new)
        .collect()
}

/// A user action coming from the panel
#[derive(Debug, Clone, PartialEq)]
pub enum PanelCommand {
    Set(ParamField, f32),
    SetColor(ColorSlot, Rgb),
    ApplyPreset(String),
    TriggerMotion(String),
    SetMotionSpeed(f32),
    StopMotion,
    Reset,
}

impl PanelCommand {
    /// Apply to the engine; unknown preset or motion names change nothing
    pub fn apply(self, render_loop: &mut RenderLoop) -> Result<(), LookupError> {
        match self {
            PanelCommand::Set(field, value) => render_loop.store_mut().set(field, value),
            PanelCommand::SetColor(slot, color) => render_loop.store_mut().set_color(slot, color),
            PanelCommand::ApplyPreset(name) => {
                render_loop.apply_preset(&name)?;
            }
            PanelCommand::TriggerMotion(name) => {
                render_loop.start_motion(&name)?;
            }
            PanelCommand::SetMotionSpeed(speed) => {
                render_loop.store_mut().set(ParamField::MotionSpeed, speed)
            }
            PanelCommand::StopMotion => render_loop.stop_motion(),
            PanelCommand::Reset => render_loop.reset(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DriftConfig, RenderConfig};
    use crate::store::{Axis, LightSlot};

    fn render_loop() -> RenderLoop {
        RenderLoop::new(RenderConfig::default(), DriftConfig::default()).unwrap()
    }

    #[test]
    fn test_every_field_has_a_control() {
        let controls = controls();
        assert_eq!(controls.len(), ParamField::all().len());
        let light_z = controls
            .iter()
            .find(|c| c.field == ParamField::LightPosition(LightSlot::First, Axis::Z))
            .unwrap();
        assert_eq!(light_z.range, 1.0..=100.0);
        assert_eq!(light_z.label, "Light 1 Z");
    }

    #[test]
    fn test_defaults_sit_inside_their_ranges() {
        let render_loop = render_loop();
        for control in controls() {
            let value = render_loop.store().get(control.field);
            assert!(
                control.range.contains(&value),
                "{} = {} outside {:?}",
                control.label,
                value,
                control.range
            );
        }
    }

    #[test]
    fn test_set_bypasses_ranges() {
        let mut render_loop = render_loop();
        PanelCommand::Set(ParamField::Amplitude, 50.0)
            .apply(&mut render_loop)
            .unwrap();
        assert_eq!(render_loop.store().wave().amplitude, 50.0);
    }

    #[test]
    fn test_unknown_names_are_noops() {
        let mut render_loop = render_loop();
        PanelCommand::TriggerMotion("Zoom In".to_string())
            .apply(&mut render_loop)
            .unwrap();
        let session = *render_loop.motion().session().unwrap();
        let camera = *render_loop.store().camera();

        let result = PanelCommand::TriggerMotion("Moonwalk".to_string()).apply(&mut render_loop);
        assert!(result.is_err());
        let result = PanelCommand::ApplyPreset("Moon".to_string()).apply(&mut render_loop);
        assert!(result.is_err());

        assert_eq!(*render_loop.motion().session().unwrap(), session);
        assert_eq!(*render_loop.store().camera(), camera);
    }

    #[test]
    fn test_motion_speed_and_stop() {
        let mut render_loop = render_loop();
        PanelCommand::SetMotionSpeed(2.0)
            .apply(&mut render_loop)
            .unwrap();
        PanelCommand::TriggerMotion("Figure Eight".to_string())
            .apply(&mut render_loop)
            .unwrap();
        assert_eq!(render_loop.motion().session().unwrap().duration, 8.0);

        PanelCommand::StopMotion.apply(&mut render_loop).unwrap();
        assert!(!render_loop.motion().is_animating());
    }

    #[test]
    fn test_reset_command() {
        let mut render_loop = render_loop();
        PanelCommand::SetColor(ColorSlot::Primary, Rgb::new(0.0, 1.0, 0.0))
            .apply(&mut render_loop)
            .unwrap();
        PanelCommand::Reset.apply(&mut render_loop).unwrap();
        assert_eq!(render_loop.store().color(ColorSlot::Primary).to_hex(), "#ffdbb8");
    }

    #[test]
    fn test_control_clamp() {
        let control = ControlSpec::new(ParamField::MotionSpeed);
        assert_eq!(control.clamp(9.0), 5.0);
        assert_eq!(control.clamp(0.0), 0.1);
    }
}
