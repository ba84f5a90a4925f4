use glam::{Mat4, Quat, Vec3};

use super::command::CameraCommand;
use super::movement::Movement;
use super::orientation::{
    Basis, MatrixOrientation, Orientation, QuatOrientation,
};
use crate::options::CameraOptions;

/// Lower bound for [`Camera::movement_speed`].
pub const MIN_MOVEMENT_SPEED: f32 = 0.1;
/// Upper bound for [`Camera::movement_speed`].
pub const MAX_MOVEMENT_SPEED: f32 = 45.0;
/// Narrowest field of view accepted by [`Camera::set_zoom`], in degrees.
pub const MIN_ZOOM: f32 = 1.0;
/// Widest field of view accepted by [`Camera::set_zoom`], in degrees.
pub const MAX_ZOOM: f32 = 179.0;
/// Largest angle between `front` and the horizon when pitch is
/// constrained, in degrees.
pub const MAX_PITCH_DEGREES: f32 = 89.0;

/// Angular travel of `front` between two pitch-constraint samples, in
/// degrees. Half the margin left below vertical.
const CONSTRAINT_STEP_DEGREES: f32 = 0.5;
/// Bisection rounds used to place `front` on the elevation limit.
const CONSTRAINT_BISECTIONS: u32 = 20;

/// Wrap an angle into `[-180, 180)` degrees.
fn wrap_degrees(degrees: f32) -> f32 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

/// Free-flying camera with a persistent orientation.
///
/// `front`, `right` and `up` are always derived from the orientation and
/// form an orthonormal basis with `up = right × front`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera<O: Orientation = QuatOrientation> {
    position: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    orientation: O,

    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    znear: f32,
    zfar: f32,
}

/// Camera backed by a rotation matrix instead of a quaternion.
pub type MatrixCamera = Camera<MatrixOrientation>;

impl Camera {
    /// Quaternion camera at `position` with the default orientation
    /// (looking down `-Z`).
    #[must_use]
    pub fn new(
        position: Vec3,
        world_up: Vec3,
        options: &CameraOptions,
    ) -> Self {
        Self::with_default_orientation(position, world_up, options)
    }

    /// Same as [`Camera::new`] with the vectors given component-wise.
    #[must_use]
    pub fn from_scalars(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        options: &CameraOptions,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            options,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, &CameraOptions::default())
    }
}

impl<O: Orientation> Camera<O> {
    /// Camera with the strategy's [`BASELINE`](Orientation::BASELINE)
    /// orientation.
    #[must_use]
    pub fn with_default_orientation(
        position: Vec3,
        world_up: Vec3,
        options: &CameraOptions,
    ) -> Self {
        Self::with_orientation(position, world_up, O::BASELINE, options)
    }

    /// Camera with an explicit initial orientation.
    ///
    /// `orientation` is read in a `+Y`-up world and tilted by the shortest
    /// arc from `+Y` to `world_up`, so the default orientation starts level
    /// with `up == world_up`. A zero-length `world_up` falls back to `+Y`.
    #[must_use]
    pub fn with_orientation(
        position: Vec3,
        world_up: Vec3,
        orientation: O,
        options: &CameraOptions,
    ) -> Self {
        let world_up = world_up.try_normalize().unwrap_or_else(|| {
            log::warn!("degenerate world up {world_up}, using +Y");
            Vec3::Y
        });
        let orientation = orientation.compose(Self::tilt_toward(world_up));

        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: world_up,
            world_up,
            orientation,
            movement_speed: MIN_MOVEMENT_SPEED,
            mouse_sensitivity: 0.0,
            zoom: MIN_ZOOM,
            znear: options.znear,
            zfar: options.zfar,
        };
        camera.apply_options(options);
        camera.update_camera_vectors(O::IDENTITY);

        log::debug!(
            "camera at {} facing {} (up {})",
            camera.position,
            camera.front,
            camera.up
        );
        camera
    }

    // ── Rendering ──

    /// Right-handed look-at transform from `position` toward
    /// `position + front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection with `zoom` as the vertical field of view.
    #[must_use]
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        // perspective_rh uses [0,1] depth range (wgpu/Vulkan convention)
        Mat4::perspective_rh(
            self.zoom.to_radians(),
            aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined `projection * view`.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    // ── Input ──

    /// Translate along a camera axis by `movement_speed * delta_time`.
    pub fn process_keyboard(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        self.position += direction.direction(&self.basis()) * velocity;
    }

    /// Rotate from mouse offsets.
    ///
    /// Pitch (`yoffset`) is about the current `right` axis. A non-zero
    /// `zspin` rolls about `front` (applied before pitch); otherwise
    /// `xoffset` yaws about `up` (applied after pitch). Offsets are scaled
    /// by `mouse_sensitivity` into degrees.
    ///
    /// With `constrain_pitch`, pitch and yaw are scaled back together so
    /// the elevation of `front` above the `world_up` horizon stays within
    /// [`MAX_PITCH_DEGREES`], whatever the current roll. A camera that
    /// already sits outside that band may not move further out.
    pub fn process_mouse_movement(
        &mut self,
        xoffset: f32,
        yoffset: f32,
        zspin: f32,
        constrain_pitch: bool,
    ) {
        let sensitivity = self.mouse_sensitivity;
        let mut pitch = yoffset * sensitivity;
        let (mut yaw, roll) = if zspin != 0.0 {
            (0.0, Some(zspin * sensitivity))
        } else {
            (xoffset * sensitivity, None)
        };

        if constrain_pitch {
            // Same end rotation, shortest sweep.
            pitch = wrap_degrees(pitch);
            yaw = wrap_degrees(yaw);
            let scale = self.constrained_scale(pitch, yaw, roll);
            pitch *= scale;
            yaw *= scale;
        }

        let composite = self.incremental(pitch, yaw, roll);
        self.update_camera_vectors(composite);
    }

    /// Scroll-wheel input: lowers movement speed by `yoffset`, clamped
    /// between [`MIN_MOVEMENT_SPEED`] and [`MAX_MOVEMENT_SPEED`]. Leaves
    /// `zoom` alone.
    pub fn process_mouse_scroll(&mut self, yoffset: f32) {
        self.set_movement_speed(self.movement_speed - yoffset);
    }

    /// Apply one command from an input layer.
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::Move {
                movement,
                delta_time,
            } => self.process_keyboard(movement, delta_time),
            CameraCommand::Rotate {
                xoffset,
                yoffset,
                zspin,
                constrain_pitch,
            } => {
                self.process_mouse_movement(
                    xoffset,
                    yoffset,
                    zspin,
                    constrain_pitch,
                );
            }
            CameraCommand::Scroll { delta } => self.process_mouse_scroll(delta),
        }
    }

    // ── Accessors ──

    /// World-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the camera without changing its orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Viewing direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Screen-right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Screen-up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// The normalized up reference supplied at construction.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// All three camera axes.
    #[must_use]
    pub fn basis(&self) -> Basis {
        Basis {
            front: self.front,
            right: self.right,
            up: self.up,
        }
    }

    /// Persistent orientation.
    #[must_use]
    pub fn orientation(&self) -> O {
        self.orientation
    }

    /// Translation speed in world units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Set the movement speed, clamped between [`MIN_MOVEMENT_SPEED`] and
    /// [`MAX_MOVEMENT_SPEED`].
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed =
            speed.clamp(MIN_MOVEMENT_SPEED, MAX_MOVEMENT_SPEED);
    }

    /// Degrees of rotation per unit of mouse offset.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Set the mouse sensitivity; negative values become zero.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity.max(0.0);
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the field of view, clamped between [`MIN_ZOOM`] and [`MAX_ZOOM`].
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Push tuning values from options. Pose is left untouched.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.set_movement_speed(options.movement_speed);
        self.set_mouse_sensitivity(options.mouse_sensitivity);
        self.set_zoom(options.zoom);
        self.znear = options.znear;
        self.zfar = options.zfar;
    }

    // ── Internals ──

    /// Axis-angle rotation; the camera axes are unit length, so a failure
    /// here means the state already holds NaNs.
    fn rotation(&self, degrees: f32, axis: Vec3) -> O {
        O::from_axis_angle(degrees, axis).unwrap_or_else(|e| {
            log::warn!("skipping camera rotation: {e}");
            O::IDENTITY
        })
    }

    /// Composite of one mouse step, built from the basis before the
    /// update: `pitch * roll` when rolling, `yaw * pitch` otherwise.
    fn incremental(&self, pitch: f32, yaw: f32, roll: Option<f32>) -> O {
        let pitch = self.rotation(pitch, self.right);
        match roll {
            Some(roll) => pitch * self.rotation(roll, self.front),
            None => self.rotation(yaw, self.up) * pitch,
        }
    }

    /// Signed angle between `front` and the `world_up` horizon, in degrees.
    fn elevation(&self, front: Vec3) -> f32 {
        front.dot(self.world_up).clamp(-1.0, 1.0).asin().to_degrees()
    }

    /// Largest fraction of a pitch/yaw step that keeps `front` inside the
    /// elevation band for the whole sweep.
    ///
    /// `front` moves at most `|pitch| + |yaw|` degrees over the step, so
    /// sampling every `CONSTRAINT_STEP_DEGREES` catches any pass over a
    /// pole. The first blocked sample is then bisected against the last
    /// allowed one. Roll leaves `front` in place and is never scaled.
    fn constrained_scale(
        &self,
        pitch: f32,
        yaw: f32,
        roll: Option<f32>,
    ) -> f32 {
        let limit = self.elevation(self.front).abs().max(MAX_PITCH_DEGREES);
        let within = |t: f32| {
            let step = self.incremental(pitch * t, yaw * t, roll);
            let front = self.orientation.compose(step).basis().front;
            self.elevation(front).abs() <= limit
        };

        let samples = ((pitch.abs() + yaw.abs()) / CONSTRAINT_STEP_DEGREES)
            .ceil()
            .max(1.0);
        let mut allowed = 0.0;
        let mut sample = 1.0;
        while sample <= samples {
            let t = sample / samples;
            if !within(t) {
                let mut blocked = t;
                for _ in 0..CONSTRAINT_BISECTIONS {
                    let mid = 0.5 * (allowed + blocked);
                    if within(mid) {
                        allowed = mid;
                    } else {
                        blocked = mid;
                    }
                }
                return allowed;
            }
            allowed = t;
            sample += 1.0;
        }
        1.0
    }

    /// Rotation carrying `+Y` onto `world_up`, so that a camera built for
    /// a `+Y`-up world starts level under any other up reference.
    fn tilt_toward(world_up: Vec3) -> O {
        let arc = Quat::from_rotation_arc(Vec3::Y, world_up);
        let (axis, angle) = arc.to_axis_angle();
        if angle == 0.0 {
            return O::IDENTITY;
        }
        O::from_axis_angle(angle.to_degrees(), axis).unwrap_or_else(|e| {
            log::warn!("keeping +Y-up orientation: {e}");
            O::IDENTITY
        })
    }

    /// Compose `rotation` onto the orientation and re-derive the basis.
    /// Position is never affected.
    fn update_camera_vectors(&mut self, rotation: O) {
        self.orientation = self.orientation.compose(rotation);

        let Basis { front, right, up } = self.orientation.basis();
        self.front = front;
        self.right = right;
        self.up = up;
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices and metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// View matrix alone.
    pub view: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: 45.0,
            forward: [0.0, 0.0, -1.0],
            aspect: 1.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj<O: Orientation>(
        &mut self,
        camera: &Camera<O>,
        aspect: f32,
    ) {
        self.view_proj = camera.view_projection(aspect).to_cols_array_2d();
        self.view = camera.view_matrix().to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fovy = camera.zoom();
        self.forward = camera.front().to_array();
        self.aspect = aspect;
    }
}
