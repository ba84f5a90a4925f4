use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera tuning and projection parameters.
pub struct CameraOptions {
    /// Translation speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 0.1, max = 45.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Degrees of rotation per unit of mouse offset.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub zoom: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Keep the view from pitching past straight up or down.
    #[schemars(title = "Constrain Pitch")]
    pub constrain_pitch: bool,
    /// Roll rate for held roll keys, in mouse-offset units per second.
    #[schemars(title = "Roll Speed", range(min = 0.0, max = 20000.0), extend("step" = 100.0))]
    pub roll_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            mouse_sensitivity: 0.01,
            zoom: 45.0,
            znear: 0.1,
            zfar: 100.0,
            constrain_pitch: true,
            roll_speed: 6000.0,
        }
    }
}
