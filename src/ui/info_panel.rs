//! Info panel showing simulation time, time controls and the body list.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::simulation::{BodyRegistry, SimulationLoop};
use crate::types::BodyId;

use super::PointerCaptured;

/// One line of the body list.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyRow {
    pub id: BodyId,
    /// Orbit angle in degrees, [0, 360).
    pub angle_degrees: f64,
    /// Accumulated spin in degrees.
    pub spin_degrees: f64,
    /// Number of activations so far.
    pub activations: u64,
    /// Whether this is the most recently activated body.
    pub selected: bool,
}

/// Build the body list rows in registry order.
pub fn body_rows(registry: &BodyRegistry, last_activated: Option<BodyId>) -> Vec<BodyRow> {
    registry
        .iter()
        .map(|(id, body)| BodyRow {
            id,
            angle_degrees: body.orbit_angle().to_degrees(),
            spin_degrees: body.spin().to_degrees(),
            activations: (body.spin() / crate::types::SPIN_INCREMENT).round() as u64,
            selected: last_activated == Some(id),
        })
        .collect()
}

/// System that renders the info panel.
pub fn info_panel(
    mut contexts: EguiContexts,
    mut sim: ResMut<SimulationLoop>,
    mut captured: ResMut<PointerCaptured>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Orrery")
        .default_pos([12.0, 12.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "t = {:.2} s   frame {}",
                    sim.simulated_time(),
                    sim.frame_count()
                ))
                .monospace(),
            );

            ui.separator();

            ui.horizontal(|ui| {
                // Play/Pause button
                let paused = sim.time_control().paused;
                let icon = if paused { "\u{25B6}" } else { "\u{23F8}" };
                if ui
                    .button(icon)
                    .on_hover_text(if paused { "Play (Space)" } else { "Pause (Space)" })
                    .clicked()
                {
                    sim.time_control_mut().toggle_pause();
                    info!(
                        "Simulation {}",
                        if sim.time_control().paused { "paused" } else { "running" }
                    );
                }

                ui.label("Speed:");
                for (i, scale) in [1.0, 2.0, 4.0, 8.0].iter().enumerate() {
                    let is_selected = (sim.time_control().scale - scale).abs() < 1e-6;
                    if ui
                        .selectable_label(is_selected, format!("{}x", scale))
                        .on_hover_text(format!("Set time scale ({})", i + 1))
                        .clicked()
                    {
                        sim.time_control_mut().set_scale(*scale);
                        info!("Time scale: {}x", sim.time_control().scale);
                    }
                }
            });

            ui.separator();

            egui::Grid::new("body_list").striped(true).show(ui, |ui| {
                ui.label("Body");
                ui.label("Angle");
                ui.label("Spin");
                ui.end_row();

                for row in body_rows(sim.registry(), sim.last_activated()) {
                    let name = format!("#{}", row.id.index());
                    if row.selected {
                        ui.label(egui::RichText::new(name).color(egui::Color32::from_rgb(0, 255, 255)));
                    } else {
                        ui.label(name);
                    }
                    ui.label(egui::RichText::new(format!("{:6.1}\u{b0}", row.angle_degrees)).monospace());
                    ui.label(format!("{:.1}\u{b0} ({})", row.spin_degrees, row.activations));
                    ui.end_row();
                }
            });

            ui.separator();
            ui.small("Click a planet to spin it. Right drag orbits, scroll zooms.");
        });

    captured.0 = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
}
