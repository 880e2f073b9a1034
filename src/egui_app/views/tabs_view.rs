//! Authenticated area: tab bar and tab content.

use eframe::egui;

use crate::auth::SessionStatus;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;
use crate::egui_app::types::Tab;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Session guard wraps the whole protected area. Until it resolves
    // to Authenticated nothing but a transient shell is drawn; on
    // Unauthenticated it has already replaced the route with Login.
    let status = state
        .gate
        .guard(state.store.as_ref(), &mut state.router);
    if status != SessionStatus::Authenticated {
        ui.centered_and_justified(|ui| {
            ui.spinner();
        });
        return;
    }

    ui.vertical(|ui| {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.add_space(12.0);
            for tab in Tab::ALL {
                let selected = state.active_tab == tab;
                let text = if selected {
                    egui::RichText::new(tab.label()).strong().color(colors::TEXT)
                } else {
                    egui::RichText::new(tab.label()).color(colors::TEXT_SECONDARY)
                };
                if ui.selectable_label(selected, text).clicked() {
                    state.active_tab = tab;
                }
                ui.add_space(8.0);
            }
        });
        ui.separator();
        ui.add_space(16.0);

        match state.active_tab {
            Tab::Finance => placeholder(ui, "Finance", "Revenue and cashflow will appear here."),
            Tab::Branches => placeholder(ui, "Branches", "Branch managers will appear here."),
            Tab::Assistant => placeholder(ui, "Assistant", "Ask the assistant about your quarry."),
            Tab::Profile => profile(ui, state),
        }
    });
}

fn placeholder(ui: &mut egui::Ui, title: &str, body: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new(title).size(24.0).strong().color(colors::TEXT));
        ui.add_space(8.0);
        ui.label(egui::RichText::new(body).color(colors::TEXT_SECONDARY));
    });
}

fn profile(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(
            egui::RichText::new("Profile")
                .size(24.0)
                .strong()
                .color(colors::TEXT),
        );
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Profile content here.").color(colors::TEXT_SECONDARY));
        ui.add_space(24.0);

        let button = egui::Button::new(
            egui::RichText::new("Log Out").strong().color(colors::BUTTON_TEXT),
        )
        .min_size(egui::vec2(160.0, 32.0))
        .fill(colors::PRIMARY);
        if ui.add(button).clicked() {
            state.logout();
        }
    });
}
