//! Keyboard stand-in for the tuning panel.
//!
//! Keys map to [`PanelCommand`]s; the panel subscribes to the parameter store
//! and reports the fields that changed since its last refresh.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use winit::keyboard::{Key, NamedKey};

use crate::bindings::{ControlSpec, PanelCommand};
use crate::camera::{MotionId, PresetId};
use crate::store::{ParamChange, ParamField, ParameterStore, SubscriptionId};

/// Step applied to the motion speed multiplier per key press
const SPEED_STEP: f32 = 0.1;

/// What a key press asks the host to do
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    Command(PanelCommand),
    Quit,
}

pub struct KeyboardPanel {
    preset_cursor: usize,
    motion_cursor: usize,
    changes: Rc<RefCell<Vec<ParamChange>>>,
    subscription: Option<SubscriptionId>,
}

impl KeyboardPanel {
    /// Create the panel and subscribe it to `store`
    pub fn attach(store: &mut ParameterStore) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let subscription = store.subscribe(move |change| sink.borrow_mut().push(*change));
        Self {
            preset_cursor: 0,
            motion_cursor: 0,
            changes,
            subscription: Some(subscription),
        }
    }

    /// Unsubscribe from `store`; the panel stops receiving changes
    pub fn detach(&mut self, store: &mut ParameterStore) {
        if let Some(id) = self.subscription.take() {
            store.unsubscribe(id);
            debug!("Panel detached");
        }
    }

    pub fn selected_motion(&self) -> MotionId {
        MotionId::ALL[self.motion_cursor]
    }

    pub fn selected_preset(&self) -> PresetId {
        PresetId::ALL[self.preset_cursor]
    }

    /// Translate a key press into an action
    pub fn handle_key(&mut self, key: &Key, store: &ParameterStore) -> Option<PanelAction> {
        match key {
            Key::Named(NamedKey::Escape) => Some(PanelAction::Quit),
            Key::Named(NamedKey::Enter) => Some(PanelAction::Command(PanelCommand::TriggerMotion(
                self.selected_motion().name().to_string(),
            ))),
            Key::Character(text) => match text.as_str() {
                "p" => {
                    self.preset_cursor = (self.preset_cursor + 1) % PresetId::ALL.len();
                    Some(self.preset_command())
                }
                "P" => {
                    self.preset_cursor =
                        (self.preset_cursor + PresetId::ALL.len() - 1) % PresetId::ALL.len();
                    Some(self.preset_command())
                }
                "m" => {
                    self.motion_cursor = (self.motion_cursor + 1) % MotionId::ALL.len();
                    info!("Selected motion '{}'", self.selected_motion().name());
                    None
                }
                "M" => {
                    self.motion_cursor =
                        (self.motion_cursor + MotionId::ALL.len() - 1) % MotionId::ALL.len();
                    info!("Selected motion '{}'", self.selected_motion().name());
                    None
                }
                "s" | "S" => Some(PanelAction::Command(PanelCommand::StopMotion)),
                "r" | "R" => Some(PanelAction::Command(PanelCommand::Reset)),
                "+" | "=" => Some(speed_command(store, SPEED_STEP)),
                "-" | "_" => Some(speed_command(store, -SPEED_STEP)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Drain and report the changes received since the last refresh
    pub fn refresh(&mut self) -> Vec<ParamChange> {
        let changes: Vec<ParamChange> = self.changes.borrow_mut().drain(..).collect();
        for change in &changes {
            match change {
                ParamChange::Scalar {
                    field: ParamField::MotionSpeed,
                    value,
                } => info!("Motion speed {:.1}x", value),
                ParamChange::Scalar { field, value } => {
                    debug!("{} = {:.3}", field.label(), value)
                }
                ParamChange::Color { slot, color } => debug!("{:?} color = {}", slot, color),
            }
        }
        changes
    }

    fn preset_command(&self) -> PanelAction {
        PanelAction::Command(PanelCommand::ApplyPreset(
            self.selected_preset().name().to_string(),
        ))
    }
}

fn speed_command(store: &ParameterStore, delta: f32) -> PanelAction {
    let control = ControlSpec::new(ParamField::MotionSpeed);
    let speed = ((store.motion_speed() + delta) * 10.0).round() / 10.0;
    PanelAction::Command(PanelCommand::SetMotionSpeed(control.clamp(speed)))
}
