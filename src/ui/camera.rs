use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use std::f32::consts::FRAC_PI_2;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, camera_control_system);
    }
}

fn spawn_camera(mut commands: Commands, mut clearcolor: ResMut<ClearColor>) {
    *clearcolor = ClearColor(Color::BLACK);
    let orbit = OrbitCamera::looking_from(Vec3::splat(3.0), Vec3::ZERO);
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: 75f32.to_radians(),
            near: 0.1,
            far: 100.0,
            ..default()
        }),
        orbit.transform(),
        orbit,
    ));
}

/// Orbits `target` at `distance`, with yaw around +Y and pitch above the XZ plane.
///
/// Input is not applied directly: it accumulates in buffers that drain a
/// fixed fraction per frame, so the camera keeps gliding after release.
#[derive(Component, Clone, Debug)]
pub struct OrbitCamera {
    target: Vec3,
    yaw: f32,
    pitch: f32,
    distance: f32,
    yaw_buffer: f32,
    pitch_buffer: f32,
    pan_buffer: Vec3,
    // log-space, positive zooms in
    zoom_buffer: f32,
}

impl OrbitCamera {
    /// Fraction of the buffered motion applied per 60 Hz frame.
    const DAMPING: f32 = 0.05;
    const ROTATE_SPEED: f32 = 0.005;
    const PAN_SPEED: f32 = 0.0015;
    const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;
    const MIN_DISTANCE: f32 = 0.5;
    const MAX_DISTANCE: f32 = 50.0;

    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length();
        Self {
            target,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).asin(),
            distance,
            yaw_buffer: 0.0,
            pitch_buffer: 0.0,
            pan_buffer: Vec3::ZERO,
            zoom_buffer: 0.0,
        }
    }

    fn translation(&self) -> Vec3 {
        let direction = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.target + direction * self.distance
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(self.target, Vec3::Y)
    }

    /// Mouse drag in pixels, dragging down lifts the camera.
    pub fn rotate(&mut self, drag: Vec2) {
        self.yaw_buffer -= drag.x * Self::ROTATE_SPEED;
        self.pitch_buffer += drag.y * Self::ROTATE_SPEED;
    }

    /// Moves the target in the view plane, scaled so the scene follows the cursor.
    pub fn pan(&mut self, drag: Vec2) {
        let transform = self.transform();
        let offset = transform.left() * drag.x + transform.up() * drag.y;
        self.pan_buffer += offset * self.distance * Self::PAN_SPEED;
    }

    pub fn zoom(&mut self, amount: f32) {
        self.zoom_buffer += amount;
    }

    /// Drains the buffers by the share of `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let keep = (1.0 - Self::DAMPING).powf(dt * 60.0);
        let applied = 1.0 - keep;

        self.yaw += self.yaw_buffer * applied;
        self.pitch = (self.pitch + self.pitch_buffer * applied)
            .clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
        self.target += self.pan_buffer * applied;
        self.distance = (self.distance * (-self.zoom_buffer * applied).exp())
            .clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);

        self.yaw_buffer *= keep;
        self.pitch_buffer *= keep;
        self.pan_buffer *= keep;
        self.zoom_buffer *= keep;
    }
}

pub fn camera_control_system(
    mut query: Query<(&mut Transform, &mut OrbitCamera)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut motion_evr: EventReader<MouseMotion>,
    mut scroll_evr: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    time: Res<Time>,
) {
    let Ok((mut transform, mut orbit)) = query.single_mut() else {
        return;
    };

    let drag: Vec2 = motion_evr.read().map(|ev| ev.delta).sum();
    let ctx = contexts.ctx_mut();
    if ctx.wants_pointer_input() || ctx.is_pointer_over_area() {
        scroll_evr.clear();
    } else {
        if mouse_buttons.pressed(MouseButton::Left) {
            orbit.rotate(drag);
        } else if mouse_buttons.pressed(MouseButton::Right) {
            orbit.pan(drag);
        }

        for ev in scroll_evr.read() {
            match ev.unit {
                MouseScrollUnit::Line => orbit.zoom(ev.y * 0.1),
                MouseScrollUnit::Pixel => orbit.zoom(ev.y * 0.002),
            }
        }
    }

    orbit.step(time.delta_secs());
    *transform = orbit.transform();
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn start() -> OrbitCamera {
        OrbitCamera::looking_from(Vec3::splat(3.0), Vec3::ZERO)
    }

    #[test]
    fn test_starts_at_eye_position() {
        let orbit = start();
        assert!(orbit.translation().abs_diff_eq(Vec3::splat(3.0), 1e-5));
        assert!(
            orbit
                .transform()
                .forward()
                .abs_diff_eq(-Vec3::splat(3.0).normalize(), 1e-5)
        );
    }

    #[test]
    fn test_damped_rotation_settles_on_full_input() {
        let mut orbit = start();
        let yaw = orbit.yaw;
        orbit.rotate(Vec2::new(-100.0, 0.0));

        orbit.step(FRAME);
        let first = orbit.yaw - yaw;
        assert!((first - 0.5 * OrbitCamera::DAMPING).abs() < 1e-4);

        for _ in 0..600 {
            orbit.step(FRAME);
        }
        assert!((orbit.yaw - yaw - 0.5).abs() < 1e-4);
        assert!(orbit.yaw_buffer.abs() < 1e-6);
    }

    #[test]
    fn test_damping_is_frame_rate_independent() {
        let mut slow = start();
        let mut fast = start();
        slow.rotate(Vec2::new(50.0, 20.0));
        fast.rotate(Vec2::new(50.0, 20.0));

        slow.step(2.0 * FRAME);
        fast.step(FRAME);
        fast.step(FRAME);

        assert!((slow.yaw - fast.yaw).abs() < 1e-5);
        assert!((slow.pitch - fast.pitch).abs() < 1e-5);
    }

    #[test]
    fn test_pitch_and_distance_are_clamped() {
        let mut orbit = start();
        orbit.rotate(Vec2::new(0.0, 10_000.0));
        orbit.zoom(100.0);
        for _ in 0..600 {
            orbit.step(FRAME);
        }
        assert!(orbit.pitch <= OrbitCamera::PITCH_LIMIT);
        assert_eq!(orbit.distance, OrbitCamera::MIN_DISTANCE);

        orbit.zoom(-100.0);
        for _ in 0..600 {
            orbit.step(FRAME);
        }
        assert_eq!(orbit.distance, OrbitCamera::MAX_DISTANCE);
    }

    #[test]
    fn test_pan_moves_target_in_view_plane() {
        let mut orbit = start();
        let forward = orbit.transform().forward();
        orbit.pan(Vec2::new(200.0, -80.0));
        for _ in 0..600 {
            orbit.step(FRAME);
        }
        assert!(orbit.target.length() > 0.1);
        assert!(orbit.target.dot(*forward).abs() < 1e-4);
    }
}
