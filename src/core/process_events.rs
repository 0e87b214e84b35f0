//! Samples the raylib window into an [`InputState`].
use raylib::prelude::*;

use crate::core::player::{InputState, Key};

const BINDINGS: &[(KeyboardKey, Key)] = &[
    (KeyboardKey::KEY_W, Key::Forward),
    (KeyboardKey::KEY_UP, Key::Forward),
    (KeyboardKey::KEY_S, Key::Back),
    (KeyboardKey::KEY_DOWN, Key::Back),
    (KeyboardKey::KEY_A, Key::StrafeLeft),
    (KeyboardKey::KEY_D, Key::StrafeRight),
    (KeyboardKey::KEY_LEFT, Key::TurnLeft),
    (KeyboardKey::KEY_RIGHT, Key::TurnRight),
    (KeyboardKey::KEY_LEFT_SHIFT, Key::Sprint),
];

pub fn process_events(window: &RaylibHandle) -> InputState {
    let mut input = InputState::default();
    for &(raw, key) in BINDINGS {
        if window.is_key_down(raw) {
            input.pressed.insert(key);
        }
    }
    input.mouse_delta = window.get_mouse_delta().x;
    input
}
