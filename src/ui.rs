//! The control panel and stats readout.
//!
//! The panel edits a copy of the current settings and reports each change as
//! a [`ControlEvent`]; the caller applies them to the field. Nothing here
//! mutates the field directly, so keyboard shortcuts and the panel go through
//! the same path.
//!
//! Sliders never clamp or snap the value they are handed. Randomized presets
//! and builder settings may sit off the slider grid or outside its range, and
//! must survive being displayed until the user actually drags them.

use std::ops::RangeInclusive;

use crate::color::Rgb;
use crate::config::FieldConfig;
use crate::controls::{Control, ControlEvent};
use crate::field::FieldState;
use crate::time::FrameStats;

/// Draw the control panel and stats overlay, returning requested changes.
pub fn render_control_panel(
    ctx: &egui::Context,
    state: &FieldState,
    stats: &FrameStats,
) -> Vec<ControlEvent> {
    let mut events = Vec::new();

    egui::Window::new("Controls")
        .id(egui::Id::new("controls"))
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Interlines");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if state.panel_collapsed() { "+" } else { "-" };
                    if ui.small_button(label).on_hover_text("Toggle (H)").clicked() {
                        events.push(ControlEvent::ToggleControls);
                    }
                });
            });

            if state.panel_collapsed() {
                return;
            }

            ui.separator();
            settings_section(ui, state.config(), &mut events);

            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Reset").on_hover_text("Defaults (R)").clicked() {
                    events.push(ControlEvent::ResetDefaults);
                }
                if ui.button("Random").on_hover_text("Random preset (Space)").clicked() {
                    events.push(ControlEvent::RandomPreset);
                }
            });
        });

    egui::Area::new(egui::Id::new("stats"))
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(format!("FPS: {}", stats.fps())).monospace());
            ui.label(egui::RichText::new(format!("Connections: {}", stats.connections())).monospace());
        });

    events
}

/// A slider over `current` that reports a new value only when the user moved it.
fn slider<T: egui::emath::Numeric>(
    ui: &mut egui::Ui,
    current: T,
    range: RangeInclusive<T>,
    label: &str,
) -> Option<T> {
    let mut value = current;
    let response = ui.add(
        egui::Slider::new(&mut value, range)
            .clamping(egui::SliderClamping::Never)
            .max_decimals(2)
            .text(label),
    );
    (response.changed() && value != current).then_some(value)
}

fn settings_section(ui: &mut egui::Ui, config: &FieldConfig, events: &mut Vec<ControlEvent>) {
    if let Some(count) = slider(ui, config.point_count, 20..=200, "Nodes") {
        events.push(ControlEvent::NodeCount(count));
    }
    if let Some(radius) = slider(ui, config.mouse_influence, 50.0..=300.0, "Mouse influence") {
        events.push(ControlEvent::MouseInfluence(radius.round()));
    }
    if let Some(distance) = slider(ui, config.max_distance, 50.0..=300.0, "Line distance") {
        events.push(ControlEvent::LineDistance(distance.round()));
    }
    if let Some(width) = slider(ui, config.line_width, 0.5..=5.0, "Line width") {
        events.push(ControlEvent::LineWidth(width));
    }
    if let Some(speed) = slider(ui, config.animation_speed, 0.1..=3.0, "Speed") {
        events.push(ControlEvent::AnimationSpeed(speed));
    }

    ui.add_space(4.0);
    ui.label("Colors:");
    ui.horizontal(|ui| {
        let colors = &config.colors;
        for (control, color) in [
            (Control::PrimaryColor, colors.primary),
            (Control::SecondaryColor, colors.secondary),
            (Control::AccentColor, colors.accent),
        ] {
            if let Some(color) = color_button(ui, color) {
                events.push(match control {
                    Control::PrimaryColor => ControlEvent::PrimaryColor(color),
                    Control::SecondaryColor => ControlEvent::SecondaryColor(color),
                    _ => ControlEvent::AccentColor(color),
                });
            }
        }
    });
}

fn color_button(ui: &mut egui::Ui, color: Rgb) -> Option<Rgb> {
    let mut rgb = color.to_array();
    let changed = ui.color_edit_button_srgb(&mut rgb).changed();
    let picked = Rgb::from(rgb);
    (changed && picked != color).then_some(picked)
}
