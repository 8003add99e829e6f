//! Core types module - shared constants and small enums
//!
//! This crate defines the values every other crate agrees on. All types are
//! plain data with no external dependencies, so they can be used from the
//! geometry core, the frame engine, input mapping and the terminal renderer.
//!
//! # Geometry Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `NORMAL_OFFSET` | 0.01 | Distance of a face's normal anchor point from its center |
//! | `PROJECTION_EPSILON` | 1e-5 | Added to the perspective divisor to guard zero depth |
//! | `BARYCENTRIC_EPSILON` | 1e-9 | Added to the barycentric denominator for degenerate triangles |
//! | `DEFAULT_CULL_THRESHOLD_DEG` | 90 | Back-face culling angle threshold |
//! | `DEFAULT_LIGHT_FALLOFF` | 0.15 | Distance falloff constant for diffuse lighting |
//!
//! # Examples
//!
//! ```
//! use term3d_types::{ModelKind, ViewAction};
//!
//! assert_eq!(ModelKind::from_str("Cube"), Some(ModelKind::Cube));
//! assert_eq!(ModelKind::Cube.next(), ModelKind::Toroid);
//!
//! assert_eq!(ViewAction::from_str("yawLeft"), Some(ViewAction::YawLeft));
//! assert_eq!(ViewAction::YawLeft.as_str(), "yawLeft");
//! ```

/// Offset of the stored normal point from the face center, in world units.
pub const NORMAL_OFFSET: f64 = 0.01;

/// Guard added to the perspective divisor so a vertex at zero depth does not divide by zero.
pub const PROJECTION_EPSILON: f64 = 1e-5;

/// Guard added to the barycentric denominator of near-zero-area triangles.
pub const BARYCENTRIC_EPSILON: f64 = 1e-9;

/// Faces whose normal makes an angle below this with the camera ray are kept (degrees).
pub const DEFAULT_CULL_THRESHOLD_DEG: f64 = 90.0;

/// Distance falloff multiplier used by diffuse lighting.
pub const DEFAULT_LIGHT_FALLOFF: f64 = 0.15;

/// Terminal character cell height divided by its width.
pub const DEFAULT_CHAR_ASPECT: f64 = 2.0;

/// Frame pacing target.
pub const DEFAULT_TARGET_FPS: u32 = 60;

/// Auto-rotation speed in degrees per second.
pub const DEFAULT_ROTATION_SPEED: f64 = 50.0;

/// Degrees applied per key press for interactive rotation.
pub const ROTATION_STEP_DEG: f64 = 5.0;

/// World units applied per key press for interactive camera movement.
pub const CAMERA_STEP: f64 = 0.5;

/// Rows from the bottom and columns from the right where the FPS counter is drawn.
pub const HUD_MARGIN: u16 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_defaults() {
        assert_eq!(NORMAL_OFFSET, 0.01);
        assert_eq!(PROJECTION_EPSILON, 1e-5);
        assert_eq!(BARYCENTRIC_EPSILON, 1e-9);
        assert_eq!(DEFAULT_CULL_THRESHOLD_DEG, 90.0);
        assert!(DEFAULT_LIGHT_FALLOFF > 0.1 && DEFAULT_LIGHT_FALLOFF < 0.2);
    }

    #[test]
    fn model_kind_cycles_through_all_models() {
        let mut kind = ModelKind::Cube;
        for _ in 0..ModelKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, ModelKind::Cube);
    }

    #[test]
    fn view_action_string_round_trip() {
        for action in ViewAction::ALL {
            assert_eq!(ViewAction::from_str(action.as_str()), Some(action));
        }
        assert_eq!(ViewAction::from_str("spin"), None);
    }
}

/// Built-in meshes the renderer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Cube,
    Toroid,
    ToroidHighPoly,
    Pyramid,
}

impl ModelKind {
    pub const ALL: [ModelKind; 4] = [
        ModelKind::Cube,
        ModelKind::Toroid,
        ModelKind::ToroidHighPoly,
        ModelKind::Pyramid,
    ];

    /// Parse model kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term3d_types::ModelKind;
    ///
    /// assert_eq!(ModelKind::from_str("toroid"), Some(ModelKind::Toroid));
    /// assert_eq!(ModelKind::from_str("TOROID_HIGH_POLY"), Some(ModelKind::ToroidHighPoly));
    /// assert_eq!(ModelKind::from_str("teapot"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cube" => Some(ModelKind::Cube),
            "toroid" | "torus" => Some(ModelKind::Toroid),
            "toroid_high_poly" | "toroid-high-poly" => Some(ModelKind::ToroidHighPoly),
            "pyramid" => Some(ModelKind::Pyramid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Cube => "cube",
            ModelKind::Toroid => "toroid",
            ModelKind::ToroidHighPoly => "toroid_high_poly",
            ModelKind::Pyramid => "pyramid",
        }
    }

    /// The model shown after this one when cycling.
    pub fn next(&self) -> Self {
        match self {
            ModelKind::Cube => ModelKind::Toroid,
            ModelKind::Toroid => ModelKind::ToroidHighPoly,
            ModelKind::ToroidHighPoly => ModelKind::Pyramid,
            ModelKind::Pyramid => ModelKind::Cube,
        }
    }
}

/// Actions that mutate the scene between frames
///
/// Produced by keyboard input; the frame engine applies them to the
/// active mesh or the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Rotate the mesh about its Y axis (negative)
    YawLeft,
    /// Rotate the mesh about its Y axis (positive)
    YawRight,
    /// Rotate the mesh about its X axis (positive)
    PitchUp,
    /// Rotate the mesh about its X axis (negative)
    PitchDown,
    /// Rotate the mesh about its Z axis (negative)
    RollLeft,
    /// Rotate the mesh about its Z axis (positive)
    RollRight,
    /// Move the camera towards +Z
    CameraForward,
    /// Move the camera towards -Z
    CameraBack,
    /// Move the camera towards -X
    CameraLeft,
    /// Move the camera towards +X
    CameraRight,
    /// Move the camera towards -Y
    CameraUp,
    /// Move the camera towards +Y
    CameraDown,
    /// Switch to the next built-in mesh
    NextModel,
    /// Toggle back-face culling
    ToggleCulling,
}

impl ViewAction {
    pub const ALL: [ViewAction; 14] = [
        ViewAction::YawLeft,
        ViewAction::YawRight,
        ViewAction::PitchUp,
        ViewAction::PitchDown,
        ViewAction::RollLeft,
        ViewAction::RollRight,
        ViewAction::CameraForward,
        ViewAction::CameraBack,
        ViewAction::CameraLeft,
        ViewAction::CameraRight,
        ViewAction::CameraUp,
        ViewAction::CameraDown,
        ViewAction::NextModel,
        ViewAction::ToggleCulling,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yawleft" => Some(ViewAction::YawLeft),
            "yawright" => Some(ViewAction::YawRight),
            "pitchup" => Some(ViewAction::PitchUp),
            "pitchdown" => Some(ViewAction::PitchDown),
            "rollleft" => Some(ViewAction::RollLeft),
            "rollright" => Some(ViewAction::RollRight),
            "cameraforward" => Some(ViewAction::CameraForward),
            "cameraback" => Some(ViewAction::CameraBack),
            "cameraleft" => Some(ViewAction::CameraLeft),
            "cameraright" => Some(ViewAction::CameraRight),
            "cameraup" => Some(ViewAction::CameraUp),
            "cameradown" => Some(ViewAction::CameraDown),
            "nextmodel" => Some(ViewAction::NextModel),
            "toggleculling" => Some(ViewAction::ToggleCulling),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewAction::YawLeft => "yawLeft",
            ViewAction::YawRight => "yawRight",
            ViewAction::PitchUp => "pitchUp",
            ViewAction::PitchDown => "pitchDown",
            ViewAction::RollLeft => "rollLeft",
            ViewAction::RollRight => "rollRight",
            ViewAction::CameraForward => "cameraForward",
            ViewAction::CameraBack => "cameraBack",
            ViewAction::CameraLeft => "cameraLeft",
            ViewAction::CameraRight => "cameraRight",
            ViewAction::CameraUp => "cameraUp",
            ViewAction::CameraDown => "cameraDown",
            ViewAction::NextModel => "nextModel",
            ViewAction::ToggleCulling => "toggleCulling",
        }
    }
}
