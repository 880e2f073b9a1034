use eframe::egui;

use crate::auth::Route;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub mod auth_view;
pub mod tabs_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::PRIMARY,
                    egui::RichText::new("CoreQuarry").size(18.0).strong(),
                );
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("Owner").size(12.0));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(16.0);
                    if state.router.current == Route::Tabs {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BACKGROUND)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.router.current {
            Route::Login => auth_view::render_login(ui, state),
            Route::Register => auth_view::render_register(ui, state),
            Route::Tabs => tabs_view::render(ui, state),
        });
}
