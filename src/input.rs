//! Pointer and keyboard input.
//!
//! [`Input`] turns raw winit window events into the two things the field
//! cares about: the pointer position and a handful of keyboard shortcuts.
//!
//! The pointer follows the mouse cursor and the first active touch. A second
//! finger is ignored until the first one lifts. Positions are reported in
//! logical pixels, the same space the field is simulated in.
//!
//! | Key | Action |
//! |-----|--------|
//! | `R` | reset to defaults |
//! | `Space` | random preset |
//! | `H` | collapse / expand the control panel |
//! | `Escape` | stop |

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::controls::ControlEvent;

/// Keys the field responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    R,
    H,
    Space,
    Escape,
}

impl KeyCode {
    /// Map a physical key, or `None` for keys without a shortcut.
    pub fn from_winit(key: WinitKeyCode) -> Option<Self> {
        match key {
            WinitKeyCode::KeyR => Some(KeyCode::R),
            WinitKeyCode::KeyH => Some(KeyCode::H),
            WinitKeyCode::Space => Some(KeyCode::Space),
            WinitKeyCode::Escape => Some(KeyCode::Escape),
            _ => None,
        }
    }
}

/// Input state tracking for the pointer and keyboard.
#[derive(Debug)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,

    /// Latest pointer position, `None` until the first move.
    pointer: Option<Vec2>,
    /// Touch currently driving the pointer.
    active_touch: Option<u64>,

    /// Physical to logical pixel ratio.
    scale_factor: f64,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            keys_held: HashSet::new(),
            keys_pressed: HashSet::new(),
            pointer: None,
            active_touch: None,
            scale_factor: 1.0,
        }
    }

    // ========== Queries ==========

    /// Check if a key was pressed this frame (just went down).
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Latest pointer position in logical pixels.
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Control events for shortcut keys pressed this frame.
    pub fn control_events(&self) -> Vec<ControlEvent> {
        let mut events = Vec::new();
        if self.key_pressed(KeyCode::R) {
            events.push(ControlEvent::ResetDefaults);
        }
        if self.key_pressed(KeyCode::Space) {
            events.push(ControlEvent::RandomPreset);
        }
        if self.key_pressed(KeyCode::H) {
            events.push(ControlEvent::ToggleControls);
        }
        events
    }

    /// Whether the stop shortcut was pressed this frame.
    pub fn stop_requested(&self) -> bool {
        self.key_pressed(KeyCode::Escape)
    }

    // ========== Updates ==========

    /// Clear per-frame state. Call after the frame has consumed it.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        if scale_factor > 0.0 {
            self.scale_factor = scale_factor;
        }
    }

    pub fn key_down(&mut self, key: KeyCode) {
        // Held keys auto-repeat; only the first press counts.
        if self.keys_held.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    pub fn key_up(&mut self, key: KeyCode) {
        self.keys_held.remove(&key);
    }

    /// Mouse moved to `(x, y)` physical pixels.
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.pointer = Some(self.to_logical(x, y));
    }

    /// A touch event at `(x, y)` physical pixels.
    pub fn touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) {
        match phase {
            TouchPhase::Started => {
                if self.active_touch.is_none() {
                    self.active_touch = Some(id);
                    self.pointer = Some(self.to_logical(x, y));
                }
            }
            TouchPhase::Moved => {
                if self.active_touch == Some(id) {
                    self.pointer = Some(self.to_logical(x, y));
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                if self.active_touch == Some(id) {
                    self.active_touch = None;
                }
            }
        }
    }

    /// Process a winit window event.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(key) = match event.physical_key {
                    PhysicalKey::Code(keycode) => KeyCode::from_winit(keycode),
                    PhysicalKey::Unidentified(_) => None,
                } {
                    match event.state {
                        ElementState::Pressed => self.key_down(key),
                        ElementState::Released => self.key_up(key),
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
            }
            WindowEvent::Touch(touch) => {
                self.touch(touch.id, touch.phase, touch.location.x, touch.location.y);
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.set_scale_factor(*scale_factor);
            }
            _ => {}
        }
    }

    fn to_logical(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            (x / self.scale_factor) as f32,
            (y / self.scale_factor) as f32,
        )
    }
}
