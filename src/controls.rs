//! Control bindings.
//!
//! Every control on the panel maps one-to-one onto a [`ControlEvent`].
//! [`FieldState::apply`] turns an event into the matching configuration
//! change, reseeding or rescaling points where the control requires it.
//!
//! Hosts that identify controls by element id (`"node-count"`,
//! `"primary-color"`, ...) can build events with [`ControlEvent::from_input`];
//! unknown ids and unparsable values produce `None` and are meant to be
//! ignored.

use crate::color::Rgb;
use crate::field::FieldState;

/// The logical role of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    NodeCount,
    MouseInfluence,
    LineDistance,
    LineWidth,
    AnimationSpeed,
    PrimaryColor,
    SecondaryColor,
    AccentColor,
    ToggleControls,
    ResetDefaults,
    RandomPreset,
}

impl Control {
    pub const ALL: [Control; 11] = [
        Control::NodeCount,
        Control::MouseInfluence,
        Control::LineDistance,
        Control::LineWidth,
        Control::AnimationSpeed,
        Control::PrimaryColor,
        Control::SecondaryColor,
        Control::AccentColor,
        Control::ToggleControls,
        Control::ResetDefaults,
        Control::RandomPreset,
    ];

    /// Element id of the control.
    pub fn id(self) -> &'static str {
        match self {
            Control::NodeCount => "node-count",
            Control::MouseInfluence => "mouse-influence",
            Control::LineDistance => "line-distance",
            Control::LineWidth => "line-width",
            Control::AnimationSpeed => "animation-speed",
            Control::PrimaryColor => "primary-color",
            Control::SecondaryColor => "secondary-color",
            Control::AccentColor => "accent-color",
            Control::ToggleControls => "toggle-controls",
            Control::ResetDefaults => "reset-defaults",
            Control::RandomPreset => "random-preset",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

/// A change requested by a control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    NodeCount(u32),
    MouseInfluence(f32),
    LineDistance(f32),
    LineWidth(f32),
    AnimationSpeed(f32),
    PrimaryColor(Rgb),
    SecondaryColor(Rgb),
    AccentColor(Rgb),
    ToggleControls,
    ResetDefaults,
    RandomPreset,
}

impl ControlEvent {
    pub fn control(&self) -> Control {
        match self {
            ControlEvent::NodeCount(_) => Control::NodeCount,
            ControlEvent::MouseInfluence(_) => Control::MouseInfluence,
            ControlEvent::LineDistance(_) => Control::LineDistance,
            ControlEvent::LineWidth(_) => Control::LineWidth,
            ControlEvent::AnimationSpeed(_) => Control::AnimationSpeed,
            ControlEvent::PrimaryColor(_) => Control::PrimaryColor,
            ControlEvent::SecondaryColor(_) => Control::SecondaryColor,
            ControlEvent::AccentColor(_) => Control::AccentColor,
            ControlEvent::ToggleControls => Control::ToggleControls,
            ControlEvent::ResetDefaults => Control::ResetDefaults,
            ControlEvent::RandomPreset => Control::RandomPreset,
        }
    }

    /// Build an event from a control id and its raw input value.
    ///
    /// Buttons ignore `value`. Node count, mouse influence and line distance
    /// take whole numbers; line width and animation speed take decimals;
    /// colors take `#rrggbb`.
    pub fn from_input(id: &str, value: &str) -> Option<Self> {
        let value = value.trim();
        let event = match Control::from_id(id)? {
            Control::NodeCount => ControlEvent::NodeCount(value.parse().ok()?),
            Control::MouseInfluence => {
                ControlEvent::MouseInfluence(value.parse::<u32>().ok()? as f32)
            }
            Control::LineDistance => ControlEvent::LineDistance(value.parse::<u32>().ok()? as f32),
            Control::LineWidth => ControlEvent::LineWidth(value.parse().ok()?),
            Control::AnimationSpeed => ControlEvent::AnimationSpeed(value.parse().ok()?),
            Control::PrimaryColor => ControlEvent::PrimaryColor(Rgb::from_hex(value)?),
            Control::SecondaryColor => ControlEvent::SecondaryColor(Rgb::from_hex(value)?),
            Control::AccentColor => ControlEvent::AccentColor(Rgb::from_hex(value)?),
            Control::ToggleControls => ControlEvent::ToggleControls,
            Control::ResetDefaults => ControlEvent::ResetDefaults,
            Control::RandomPreset => ControlEvent::RandomPreset,
        };
        Some(event)
    }
}

/// Receives the numbers shown in the stats slots.
pub trait StatsDisplay {
    /// Called once per FPS measurement window.
    fn show_fps(&mut self, fps: u32);

    /// Called every frame.
    fn show_connections(&mut self, connections: usize);
}

impl FieldState {
    /// Apply a control change.
    pub fn apply(&mut self, event: ControlEvent) {
        log::debug!("Control {}: {:?}", event.control().id(), event);
        match event {
            ControlEvent::NodeCount(count) => self.set_point_count(count),
            ControlEvent::MouseInfluence(radius) => self.config_mut().mouse_influence = radius,
            ControlEvent::LineDistance(distance) => self.config_mut().max_distance = distance,
            ControlEvent::LineWidth(width) => self.config_mut().line_width = width,
            ControlEvent::AnimationSpeed(speed) => self.set_animation_speed(speed),
            ControlEvent::PrimaryColor(color) => self.config_mut().colors.primary = color,
            ControlEvent::SecondaryColor(color) => self.config_mut().colors.secondary = color,
            ControlEvent::AccentColor(color) => self.config_mut().colors.accent = color,
            ControlEvent::ToggleControls => self.toggle_panel(),
            ControlEvent::ResetDefaults => self.reset_defaults(),
            ControlEvent::RandomPreset => self.randomize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldConfig, RANDOM_PALETTES};

    fn state() -> FieldState {
        FieldState::with_seed(FieldConfig::default(), 800.0, 600.0, 11)
    }

    #[test]
    fn test_control_ids_round_trip() {
        for control in Control::ALL {
            assert_eq!(Control::from_id(control.id()), Some(control));
        }
        assert_eq!(Control::from_id("control-panel"), None);
    }

    #[test]
    fn test_from_input_parses_values() {
        assert_eq!(
            ControlEvent::from_input("node-count", "120"),
            Some(ControlEvent::NodeCount(120))
        );
        assert_eq!(
            ControlEvent::from_input("line-distance", "200"),
            Some(ControlEvent::LineDistance(200.0))
        );
        assert_eq!(
            ControlEvent::from_input("animation-speed", "1.25"),
            Some(ControlEvent::AnimationSpeed(1.25))
        );
        assert_eq!(
            ControlEvent::from_input("accent-color", "#54a0ff"),
            Some(ControlEvent::AccentColor(Rgb::from_u32(0x54a0ff)))
        );
        assert_eq!(
            ControlEvent::from_input("random-preset", ""),
            Some(ControlEvent::RandomPreset)
        );
    }

    #[test]
    fn test_from_input_rejects_unknown_and_garbage() {
        assert_eq!(ControlEvent::from_input("fps-counter", "60"), None);
        assert_eq!(ControlEvent::from_input("node-count", "lots"), None);
        assert_eq!(ControlEvent::from_input("primary-color", "teal"), None);
    }

    #[test]
    fn test_node_count_reseeds() {
        let mut state = state();
        state.apply(ControlEvent::NodeCount(33));
        assert_eq!(state.config().point_count, 33);
        assert_eq!(state.points().len(), 33);
    }

    #[test]
    fn test_plain_fields_do_not_reseed() {
        let mut state = state();
        let before = state.points().to_vec();

        state.apply(ControlEvent::MouseInfluence(250.0));
        state.apply(ControlEvent::LineDistance(90.0));
        state.apply(ControlEvent::LineWidth(2.5));
        state.apply(ControlEvent::PrimaryColor(Rgb::from_u32(0x123456)));
        state.apply(ControlEvent::SecondaryColor(Rgb::from_u32(0x654321)));
        state.apply(ControlEvent::AccentColor(Rgb::from_u32(0xabcdef)));

        let config = state.config();
        assert_eq!(config.mouse_influence, 250.0);
        assert_eq!(config.max_distance, 90.0);
        assert_eq!(config.line_width, 2.5);
        assert_eq!(config.colors.primary, Rgb::from_u32(0x123456));
        assert_eq!(config.colors.secondary, Rgb::from_u32(0x654321));
        assert_eq!(config.colors.accent, Rgb::from_u32(0xabcdef));
        assert_eq!(state.points(), &before[..]);
    }

    #[test]
    fn test_speed_rescales_existing_points() {
        let mut state = state();
        state.apply(ControlEvent::AnimationSpeed(1.0));
        assert_eq!(state.config().animation_speed, 1.0);
        assert_eq!(state.points().len(), 80);
        for point in state.points() {
            assert!((point.velocity.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_toggle_controls() {
        let mut state = state();
        state.apply(ControlEvent::ToggleControls);
        assert!(state.panel_collapsed());
        state.apply(ControlEvent::ToggleControls);
        assert!(!state.panel_collapsed());
    }

    #[test]
    fn test_reset_and_random_preset() {
        let mut state = state();
        state.apply(ControlEvent::RandomPreset);
        assert!(RANDOM_PALETTES.contains(&state.config().colors));
        assert_eq!(state.points().len() as u32, state.config().point_count);

        state.apply(ControlEvent::ResetDefaults);
        assert_eq!(*state.config(), FieldConfig::default());
        assert_eq!(state.points().len(), 80);
    }
}
