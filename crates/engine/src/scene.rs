//! Per-run render context: the meshes, the camera, the light and the
//! toggles the user can flip between frames.

use std::time::Duration;

use term3d_core::error::Result;
use term3d_core::{factory, Camera, CharBuffer, Coord, LightSource, Mesh, Rasterizer};
use term3d_types::{ModelKind, ViewAction, CAMERA_STEP, ROTATION_STEP_DEG};

use crate::config::RenderConfig;

/// What one call to [`Scene::render`] produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub faces_drawn: usize,
    pub cells_written: usize,
}

pub struct Scene {
    /// One mesh per [`ModelKind`], in `ModelKind::ALL` order.
    meshes: Vec<Mesh>,
    active: ModelKind,
    camera: Camera,
    light: LightSource,
    culling: bool,
    cull_threshold: f64,
    user_control: bool,
    rotation_speed: f64,
    char_aspect: f64,
    rasterizer: Rasterizer,
    written: Vec<Coord>,
}

/// Mesh for a built-in model, sized to sit around the origin.
pub fn build_model(kind: ModelKind) -> Result<Mesh> {
    match kind {
        ModelKind::Cube => factory::cube(2.0),
        ModelKind::Toroid => factory::toroid(2.0, 1.0, 20),
        ModelKind::ToroidHighPoly => {
            let mut mesh = factory::toroid(2.0, 1.0, 40)?;
            mesh.set_name("toroid_high_poly");
            Ok(mesh)
        }
        ModelKind::Pyramid => factory::pyramid(2.0),
    }
}

fn slot(kind: ModelKind) -> usize {
    kind as usize
}

impl Scene {
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let meshes = ModelKind::ALL
            .iter()
            .map(|&kind| build_model(kind))
            .collect::<Result<Vec<_>>>()?;

        let s = config.sensor;
        let camera = Camera::new(config.camera).with_recording_surface(s.x, s.y, s.z);
        let light =
            LightSource::new(config.light, config.light_intensity).with_clamp(config.light_clamp);

        Ok(Self {
            meshes,
            active: config.model,
            camera,
            light,
            culling: config.backface_culling,
            cull_threshold: config.cull_threshold,
            user_control: config.user_control,
            rotation_speed: config.rotation_speed,
            char_aspect: config.char_aspect,
            rasterizer: Rasterizer::default(),
            written: Vec::new(),
        })
    }

    pub fn active(&self) -> ModelKind {
        self.active
    }

    pub fn mesh(&self) -> &Mesh {
        &self.meshes[slot(self.active)]
    }

    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.meshes[slot(self.active)]
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn light(&self) -> &LightSource {
        &self.light
    }

    pub fn culling(&self) -> bool {
        self.culling
    }

    pub fn cull_threshold(&self) -> Option<f64> {
        self.culling.then_some(self.cull_threshold)
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Fit the camera's display aspect to the terminal grid.
    pub fn set_viewport(&mut self, cols: u16, rows: u16) {
        self.camera.configure_for_viewport(cols, rows, self.char_aspect);
    }

    /// Apply one user action.
    pub fn apply(&mut self, action: ViewAction) {
        let step = ROTATION_STEP_DEG;
        match action {
            ViewAction::YawLeft => self.rotate_by(0.0, -step, 0.0),
            ViewAction::YawRight => self.rotate_by(0.0, step, 0.0),
            ViewAction::PitchUp => self.rotate_by(step, 0.0, 0.0),
            ViewAction::PitchDown => self.rotate_by(-step, 0.0, 0.0),
            ViewAction::RollLeft => self.rotate_by(0.0, 0.0, -step),
            ViewAction::RollRight => self.rotate_by(0.0, 0.0, step),
            ViewAction::CameraForward => self.camera.position.z += CAMERA_STEP,
            ViewAction::CameraBack => self.camera.position.z -= CAMERA_STEP,
            ViewAction::CameraLeft => self.camera.position.x -= CAMERA_STEP,
            ViewAction::CameraRight => self.camera.position.x += CAMERA_STEP,
            ViewAction::CameraUp => self.camera.position.y -= CAMERA_STEP,
            ViewAction::CameraDown => self.camera.position.y += CAMERA_STEP,
            ViewAction::NextModel => self.active = self.active.next(),
            ViewAction::ToggleCulling => self.culling = !self.culling,
        }
    }

    /// Rotate the active mesh relative to its current orientation (degrees).
    pub fn rotate_by(&mut self, dx: f64, dy: f64, dz: f64) {
        let mesh = self.mesh_mut();
        let r = mesh.rotation();
        mesh.rotate_to(Some(r.x + dx), Some(r.y + dy), Some(r.z + dz));
    }

    /// Advance time. Without user control the mesh spins on every axis.
    pub fn update(&mut self, dt: Duration) {
        if self.user_control {
            return;
        }
        let step = self.rotation_speed * dt.as_secs_f64();
        self.rotate_by(step, step, step);
    }

    /// Start a new frame in `buf`, relight the active mesh and draw it.
    pub fn render(&mut self, buf: &mut CharBuffer) -> FrameStats {
        buf.begin_frame();

        let cull = self.cull_threshold();
        let mesh = &mut self.meshes[slot(self.active)];
        mesh.apply_light(&self.light);

        self.written.clear();
        let faces_drawn = self
            .rasterizer
            .draw_mesh(mesh, &self.camera, cull, buf, &mut self.written);

        FrameStats {
            faces_drawn,
            cells_written: self.written.len(),
        }
    }

    /// Cells written by the last [`Scene::render`], in paint order (a cell
    /// covered by several faces appears once per face).
    pub fn written(&self) -> &[Coord] {
        &self.written
    }
}
