//! Render configuration loaded from `TERM3D_*` environment variables.
//!
//! Every key is optional. A missing or unparsable value falls back to its
//! default so a typo never prevents the renderer from starting.

use term3d_core::Vec3;
use term3d_types::{
    ModelKind, DEFAULT_CHAR_ASPECT, DEFAULT_CULL_THRESHOLD_DEG, DEFAULT_ROTATION_SPEED,
    DEFAULT_TARGET_FPS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub model: ModelKind,
    pub fps_counter: bool,
    /// Flush only changed cells instead of the whole screen.
    pub dirty_redraw: bool,
    pub backface_culling: bool,
    /// Degrees.
    pub cull_threshold: f64,
    /// Keyboard drives the scene; otherwise the mesh spins on its own.
    pub user_control: bool,
    /// Degrees per second.
    pub rotation_speed: f64,
    pub target_fps: u32,
    /// Character cell height divided by width.
    pub char_aspect: f64,
    /// Recording surface `(x, y, zoom)`.
    pub sensor: Vec3,
    pub camera: Vec3,
    pub light: Vec3,
    pub light_intensity: f64,
    pub light_clamp: bool,
    pub perf_log: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::ToroidHighPoly,
            fps_counter: true,
            dirty_redraw: true,
            backface_culling: false,
            cull_threshold: DEFAULT_CULL_THRESHOLD_DEG,
            user_control: true,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            target_fps: DEFAULT_TARGET_FPS,
            char_aspect: DEFAULT_CHAR_ASPECT,
            sensor: Vec3::new(1.0, 1.0, 1.0),
            camera: Vec3::new(0.0, 0.0, -10.0),
            light: Vec3::new(10.0, -10.0, -10.0),
            light_intensity: 2.0,
            light_clamp: true,
            perf_log: None,
        }
    }
}

impl RenderConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();

        let model = get("TERM3D_MODEL")
            .and_then(|s| ModelKind::from_str(s.trim()))
            .unwrap_or(d.model);

        let flag = |key: &str, default: bool| get(key).and_then(|s| parse_bool(&s)).unwrap_or(default);
        let number = |key: &str, default: f64| {
            get(key)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(default)
        };
        let point = |key: &str, default: Vec3| get(key).and_then(|s| parse_vec3(&s)).unwrap_or(default);

        let target_fps = get("TERM3D_TARGET_FPS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(d.target_fps);

        let perf_log = get("TERM3D_PERF_LOG")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            model,
            fps_counter: flag("TERM3D_FPS_COUNTER", d.fps_counter),
            dirty_redraw: flag("TERM3D_DIRTY_REDRAW", d.dirty_redraw),
            backface_culling: flag("TERM3D_BACKFACE_CULLING", d.backface_culling),
            cull_threshold: number("TERM3D_CULL_THRESHOLD", d.cull_threshold),
            user_control: flag("TERM3D_USER_CONTROL", d.user_control),
            rotation_speed: number("TERM3D_ROTATION_SPEED", d.rotation_speed),
            target_fps,
            char_aspect: number("TERM3D_CHAR_ASPECT", d.char_aspect),
            sensor: point("TERM3D_SENSOR", d.sensor),
            camera: point("TERM3D_CAMERA", d.camera),
            light: point("TERM3D_LIGHT", d.light),
            light_intensity: number("TERM3D_LIGHT_INTENSITY", d.light_intensity),
            light_clamp: flag("TERM3D_LIGHT_CLAMP", d.light_clamp),
            perf_log,
        }
    }

    /// Culling threshold to pass to the depth sort, if culling is on.
    pub fn cull(&self) -> Option<f64> {
        self.backface_culling.then_some(self.cull_threshold)
    }
}

/// `"1"`/`"true"` and `"0"`/`"false"`, case-insensitive. Anything else is `None`.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Three comma-separated finite numbers, e.g. `"0, 0, -10"`.
pub fn parse_vec3(s: &str) -> Option<Vec3> {
    let mut parts = s.split(',').map(|p| p.trim().parse::<f64>().ok().filter(|v| v.is_finite()));
    let x = parts.next()??;
    let y = parts.next()??;
    let z = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    Some(Vec3::new(x, y, z))
}
