//! Named static camera presets.

use glam::Vec3;

use crate::error::{LibraryError, LookupError};
use crate::params::CameraState;

/// Identifier of a built-in camera preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetId {
    DefaultView,
    TopDown,
    LowAngle,
    SideView,
    FrontView,
    CloseUp,
    WideShot,
    BirdsEye,
    Horizon,
    Diagonal,
    ReverseDiagonal,
    LeftFlank,
    RightFlank,
    DramaticLow,
    OverheadTilt,
    FarAway,
    WaveRider,
    CornerView,
    DeepDive,
}

impl PresetId {
    pub const ALL: [PresetId; 19] = [
        PresetId::DefaultView,
        PresetId::TopDown,
        PresetId::LowAngle,
        PresetId::SideView,
        PresetId::FrontView,
        PresetId::CloseUp,
        PresetId::WideShot,
        PresetId::BirdsEye,
        PresetId::Horizon,
        PresetId::Diagonal,
        PresetId::ReverseDiagonal,
        PresetId::LeftFlank,
        PresetId::RightFlank,
        PresetId::DramaticLow,
        PresetId::OverheadTilt,
        PresetId::FarAway,
        PresetId::WaveRider,
        PresetId::CornerView,
        PresetId::DeepDive,
    ];

    /// Display name shown in the preset selector
    pub fn name(self) -> &'static str {
        match self {
            PresetId::DefaultView => "Default View",
            PresetId::TopDown => "Top Down",
            PresetId::LowAngle => "Low Angle",
            PresetId::SideView => "Side View",
            PresetId::FrontView => "Front View",
            PresetId::CloseUp => "Close Up",
            PresetId::WideShot => "Wide Shot",
            PresetId::BirdsEye => "Bird's Eye",
            PresetId::Horizon => "Horizon",
            PresetId::Diagonal => "Diagonal",
            PresetId::ReverseDiagonal => "Reverse Diagonal",
            PresetId::LeftFlank => "Left Flank",
            PresetId::RightFlank => "Right Flank",
            PresetId::DramaticLow => "Dramatic Low",
            PresetId::OverheadTilt => "Overhead Tilt",
            PresetId::FarAway => "Far Away",
            PresetId::WaveRider => "Wave Rider",
            PresetId::CornerView => "Corner View",
            PresetId::DeepDive => "Deep Dive",
        }
    }

    /// Case-insensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    /// Camera snapshot for this preset
    pub fn state(self) -> CameraState {
        let (position, look_at, fov) = match self {
            PresetId::DefaultView => ([0.0, -25.0, 15.0], [0.0, 35.0, 0.0], 75.0),
            PresetId::TopDown => ([0.0, 50.0, 0.0], [0.0, 0.0, 0.0], 60.0),
            PresetId::LowAngle => ([0.0, -40.0, 5.0], [0.0, 20.0, 0.0], 70.0),
            PresetId::SideView => ([50.0, 0.0, 10.0], [0.0, 0.0, 0.0], 60.0),
            PresetId::FrontView => ([0.0, -50.0, 10.0], [0.0, 0.0, 0.0], 60.0),
            PresetId::CloseUp => ([0.0, -10.0, 8.0], [0.0, 5.0, 0.0], 80.0),
            PresetId::WideShot => ([0.0, -45.0, 40.0], [0.0, 10.0, 0.0], 90.0),
            PresetId::BirdsEye => ([0.0, -5.0, 80.0], [0.0, 0.0, 0.0], 55.0),
            PresetId::Horizon => ([0.0, -50.0, 2.0], [0.0, 50.0, 2.0], 75.0),
            PresetId::Diagonal => ([-35.0, -35.0, 25.0], [0.0, 0.0, 0.0], 65.0),
            PresetId::ReverseDiagonal => ([35.0, 35.0, 25.0], [0.0, 0.0, 0.0], 65.0),
            PresetId::LeftFlank => ([-45.0, -10.0, 12.0], [10.0, 10.0, 0.0], 70.0),
            PresetId::RightFlank => ([45.0, -10.0, 12.0], [-10.0, 10.0, 0.0], 70.0),
            PresetId::DramaticLow => ([0.0, -30.0, 1.5], [0.0, 40.0, 10.0], 85.0),
            PresetId::OverheadTilt => ([0.0, -20.0, 60.0], [0.0, 10.0, 0.0], 60.0),
            PresetId::FarAway => ([0.0, -50.0, 90.0], [0.0, 0.0, 0.0], 45.0),
            PresetId::WaveRider => ([0.0, -15.0, 4.0], [0.0, 30.0, 2.0], 95.0),
            PresetId::CornerView => ([-50.0, -50.0, 30.0], [0.0, 0.0, 0.0], 50.0),
            PresetId::DeepDive => ([0.0, 0.0, 3.0], [0.0, 50.0, -5.0], 100.0),
        };
        CameraState::new(Vec3::from_array(position), Vec3::from_array(look_at), fov)
    }
}

/// A named static camera configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPreset {
    pub id: PresetId,
    pub state: CameraState,
}

impl CameraPreset {
    pub fn name(&self) -> &'static str {
        self.id.name()
    }
}

/// Validated table of camera presets
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    entries: Vec<CameraPreset>,
}

impl PresetLibrary {
    /// Load the 19 built-in presets
    pub fn builtin() -> Result<Self, LibraryError> {
        Self::from_entries(
            PresetId::ALL
                .into_iter()
                .map(|id| CameraPreset {
                    id,
                    state: id.state(),
                })
                .collect(),
        )
    }

    /// Validate and wrap a preset table
    pub fn from_entries(entries: Vec<CameraPreset>) -> Result<Self, LibraryError> {
        for (index, preset) in entries.iter().enumerate() {
            if entries[..index].iter().any(|other| other.id == preset.id) {
                return Err(LibraryError::DuplicateName(preset.name()));
            }
            validate_state(preset.name(), &preset.state)?;
        }
        Ok(Self { entries })
    }

    pub fn get(&self, id: PresetId) -> Option<&CameraPreset> {
        self.entries.iter().find(|preset| preset.id == id)
    }

    /// Look up a preset by display name
    pub fn find(&self, name: &str) -> Result<&CameraPreset, LookupError> {
        PresetId::from_name(name)
            .and_then(|id| self.get(id))
            .ok_or_else(|| LookupError::UnknownPreset(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CameraPreset> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reject keyframes that would produce a degenerate projection
pub(crate) fn validate_state(name: &'static str, state: &CameraState) -> Result<(), LibraryError> {
    if !state.position.is_finite() || !state.look_at.is_finite() || !state.fov_degrees.is_finite()
    {
        return Err(LibraryError::NonFinite(name));
    }
    validate_fov(name, state.fov_degrees)
}

pub(crate) fn validate_fov(name: &'static str, fov_degrees: f32) -> Result<(), LibraryError> {
    if fov_degrees <= 0.0 || fov_degrees >= 180.0 {
        return Err(LibraryError::InvalidFov(name, fov_degrees));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_library_has_nineteen_presets() {
        let library = PresetLibrary::builtin().unwrap();
        assert_eq!(library.len(), 19);
    }

    #[test]
    fn test_top_down_preset() {
        let library = PresetLibrary::builtin().unwrap();
        let preset = library.find("Top Down").unwrap();
        assert_eq!(preset.state.position, Vec3::new(0.0, 50.0, 0.0));
        assert_eq!(preset.state.look_at, Vec3::ZERO);
        assert_eq!(preset.state.fov_degrees, 60.0);
    }

    #[test]
    fn test_default_view_matches_camera_default() {
        assert_eq!(PresetId::DefaultView.state(), CameraState::default());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(PresetId::from_name("  bird's eye "), Some(PresetId::BirdsEye));
    }

    #[test]
    fn test_unknown_preset_is_not_found() {
        let library = PresetLibrary::builtin().unwrap();
        assert_eq!(
            library.find("Nowhere").unwrap_err(),
            LookupError::UnknownPreset("Nowhere".to_string())
        );
    }

    #[test]
    fn test_duplicate_entries_rejected() {
        let preset = CameraPreset {
            id: PresetId::TopDown,
            state: PresetId::TopDown.state(),
        };
        let result = PresetLibrary::from_entries(vec![preset.clone(), preset]);
        assert_eq!(result.unwrap_err(), LibraryError::DuplicateName("Top Down"));
    }

    #[test]
    fn test_invalid_fov_rejected() {
        let mut state = PresetId::CloseUp.state();
        state.fov_degrees = 180.0;
        let result = PresetLibrary::from_entries(vec![CameraPreset {
            id: PresetId::CloseUp,
            state,
        }]);
        assert!(matches!(result, Err(LibraryError::InvalidFov("Close Up", _))));
    }

    #[test]
    fn test_names_are_unique() {
        for (index, id) in PresetId::ALL.iter().enumerate() {
            for other in &PresetId::ALL[index + 1..] {
                assert_ne!(id.name(), other.name());
            }
        }
    }
}
