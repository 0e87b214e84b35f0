//! Viewer pose, input snapshot and the pose update step.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::MovementConfig;

/// Where the viewer stands and looks. The angle is never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    TurnLeft,
    TurnRight,
    Sprint,
}

/// Input sampled once per tick.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub pressed: HashSet<Key>,
    pub mouse_delta: f32,
}

impl InputState {
    pub fn with_keys(keys: &[Key]) -> Self {
        Self {
            pressed: keys.iter().copied().collect(),
            mouse_delta: 0.0,
        }
    }

    #[inline]
    pub fn down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

fn axis(input: &InputState, pos: Key, neg: Key) -> f32 {
    let mut v = 0.0;
    if input.down(pos) { v += 1.0; }
    if input.down(neg) { v -= 1.0; }
    v
}

/// Advances the pose by `dt` seconds. `blocked(x, y)` is the collision probe;
/// each axis is tried on its own so the viewer slides along walls.
pub fn update_pose<F>(pose: Pose, input: &InputState, dt: f32, movement: &MovementConfig, blocked: F) -> Pose
where
    F: Fn(f32, f32) -> bool,
{
    let mut next = pose;
    next.angle += axis(input, Key::TurnRight, Key::TurnLeft) * movement.turn_speed * dt;
    next.angle += input.mouse_delta * movement.mouse_sensitivity;

    let speed = if input.down(Key::Sprint) { movement.sprint_speed } else { movement.walk_speed };
    let fwd = axis(input, Key::Forward, Key::Back);
    let side = axis(input, Key::StrafeRight, Key::StrafeLeft);
    if fwd == 0.0 && side == 0.0 {
        return next;
    }

    let (sin, cos) = next.angle.sin_cos();
    let dx = (cos * fwd - sin * side) * speed * dt;
    let dy = (sin * fwd + cos * side) * speed * dt;

    if !blocked(next.x + dx, next.y) {
        next.x += dx;
    }
    if !blocked(next.x, next.y + dy) {
        next.y += dy;
    }
    next
}
