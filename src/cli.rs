//! Command-line argument parsing.

use std::io;

use clap::Parser;
use log::info;

use crate::bindings::PanelCommand;
use crate::error::EngineResult;
use crate::params::{ColorSlot, ParticleGridConfig, RecordingConfig, RenderConfig, Rgb};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "Wavefield")]
#[command(about = "Animated particle wave field with cinematic camera motions", long_about = None)]
pub struct Args {
    /// Camera preset to start from (e.g. "Top Down")
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Camera motion to trigger at startup (e.g. "Orbit Clockwise")
    #[arg(long, value_name = "NAME")]
    pub motion: Option<String>,

    /// Motion speed multiplier
    #[arg(long, value_name = "X", default_value = "1.0")]
    pub speed: f32,

    /// Particle grid rows
    #[arg(long, value_name = "N", default_value = "200")]
    pub rows: usize,

    /// Particle grid columns
    #[arg(long, value_name = "N", default_value = "200")]
    pub cols: usize,

    /// Distance between neighbouring particles (world units)
    #[arg(long, value_name = "UNITS", default_value = "1.0")]
    pub spacing: f32,

    /// Primary particle color as hex RGB (e.g. "#ffdbb8")
    #[arg(long, value_name = "HEX")]
    pub primary: Option<String>,

    /// Secondary particle color as hex RGB
    #[arg(long, value_name = "HEX")]
    pub secondary: Option<String>,

    /// Ambient color as hex RGB
    #[arg(long, value_name = "HEX")]
    pub ambient: Option<String>,

    /// Window width (pixels)
    #[arg(long, default_value = "1280")]
    pub width: u32,

    /// Window height (pixels)
    #[arg(long, default_value = "720")]
    pub height: u32,

    /// Record frames to disk (duration in seconds)
    #[arg(long, value_name = "SECONDS")]
    pub record: Option<f32>,

    /// Print the available presets and motions, then exit
    #[arg(long)]
    pub list: bool,
}

impl Args {
    pub fn grid_config(&self) -> ParticleGridConfig {
        ParticleGridConfig {
            rows: self.rows,
            cols: self.cols,
            spacing: self.spacing,
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            window_width: self.width,
            window_height: self.height,
            ..RenderConfig::default()
        }
    }

    /// Color overrides given on the command line, in slot order
    pub fn color_commands(&self) -> EngineResult<Vec<PanelCommand>> {
        let overrides = [
            (ColorSlot::Primary, &self.primary),
            (ColorSlot::Secondary, &self.secondary),
            (ColorSlot::Ambient, &self.ambient),
        ];
        let mut commands = Vec::new();
        for (slot, hex) in overrides {
            if let Some(hex) = hex {
                commands.push(PanelCommand::SetColor(slot, hex.parse::<Rgb>()?));
            }
        }
        Ok(commands)
    }

    /// Create recording configuration if recording mode is enabled
    pub fn create_recording_config(&self) -> io::Result<Option<RecordingConfig>> {
        let Some(duration) = self.record else {
            return Ok(None);
        };
        let config = RecordingConfig::new(duration);
        std::fs::create_dir_all(config.frames_dir())?;
        info!(
            "Recording {} frames to {}",
            config.total_frames(),
            config.frames_dir()
        );
        Ok(Some(config))
    }
}
