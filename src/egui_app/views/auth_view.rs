//! Login and registration forms.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

const INPUT_WIDTH: f32 = 280.0;
const LABEL_WIDTH: f32 = 80.0;

pub fn render_login(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter()
        .rect_filled(available_rect, 0.0, colors::BACKGROUND);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = 300.0;
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("CoreQuarry")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT),
            );
            ui.label(
                egui::RichText::new("Owner Login")
                    .size(16.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(20.0);

            messages(ui, state);

            field(ui, &available_rect, "Email:", |ui| {
                ui.add_sized(
                    [INPUT_WIDTH, 28.0],
                    egui::TextEdit::singleline(&mut state.flow.fields.email)
                        .hint_text("Email Address"),
                );
            });
            field(ui, &available_rect, "Password:", |ui| {
                ui.add_sized(
                    [INPUT_WIDTH, 28.0],
                    egui::TextEdit::singleline(&mut state.flow.fields.password).password(true),
                );
            });

            ui.add_space(20.0);

            let label = if state.flow.loading {
                "Logging in..."
            } else {
                "Log In"
            };
            let button = egui::Button::new(
                egui::RichText::new(label).strong().color(colors::BUTTON_TEXT),
            )
            .min_size(egui::vec2(INPUT_WIDTH, 36.0))
            .fill(colors::PRIMARY);
            // the submit itself is debounced too; disabling is cosmetic
            if ui.add_enabled(!state.flow.loading, button).clicked() {
                state.flow.submit_login(&state.client);
            }

            ui.add_space(12.0);
            if ui
                .link(
                    egui::RichText::new("No account yet? Register here")
                        .color(colors::TEXT_SECONDARY),
                )
                .clicked()
            {
                state.open_register();
            }

            spinner(ui, state, &available_rect);
        });
    });
}

pub fn render_register(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();
    ui.painter()
        .rect_filled(available_rect, 0.0, colors::BACKGROUND);

    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let total_height = 340.0;
            let top_space = (available_rect.height() - total_height).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("Create Account")
                    .size(32.0)
                    .strong()
                    .color(colors::TEXT),
            );
            ui.label(
                egui::RichText::new("Register a new CoreQuarry owner")
                    .size(16.0)
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(20.0);

            messages(ui, state);

            field(ui, &available_rect, "Name:", |ui| {
                ui.add_sized(
                    [INPUT_WIDTH, 28.0],
                    egui::TextEdit::singleline(&mut state.flow.fields.name)
                        .hint_text("Full Name"),
                );
            });
            field(ui, &available_rect, "Email:", |ui| {
                ui.add_sized(
                    [INPUT_WIDTH, 28.0],
                    egui::TextEdit::singleline(&mut state.flow.fields.email)
                        .hint_text("email@domain.com"),
                );
            });
            field(ui, &available_rect, "Password:", |ui| {
                ui.add_sized(
                    [INPUT_WIDTH, 28.0],
                    egui::TextEdit::singleline(&mut state.flow.fields.password).password(true),
                );
            });

            ui.add_space(20.0);

            let label = if state.flow.loading {
                "Registering..."
            } else {
                "Register"
            };
            let button = egui::Button::new(
                egui::RichText::new(label).strong().color(colors::BUTTON_TEXT),
            )
            .min_size(egui::vec2(INPUT_WIDTH, 36.0))
            .fill(colors::PRIMARY);
            if ui.add_enabled(!state.flow.loading, button).clicked() {
                state.flow.submit_register(&state.client);
            }

            ui.add_space(12.0);
            if ui
                .link(
                    egui::RichText::new("Already have an account? Log in here")
                        .color(colors::TEXT_SECONDARY),
                )
                .clicked()
            {
                state.open_login();
            }

            spinner(ui, state, &available_rect);
        });
    });
}

fn messages(ui: &mut egui::Ui, state: &AppState) {
    if let Some(ref error) = state.flow.error {
        ui.label(egui::RichText::new(error).color(colors::ERROR));
        ui.add_space(10.0);
    }
    if let Some(ref notice) = state.flow.notice {
        ui.label(egui::RichText::new(notice).color(colors::SUCCESS));
        ui.add_space(10.0);
    }
}

fn field(
    ui: &mut egui::Ui,
    available_rect: &egui::Rect,
    label: &str,
    add_input: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        ui.add_space((available_rect.width() - INPUT_WIDTH - LABEL_WIDTH - 20.0).max(0.0) / 2.0);
        ui.add_sized(
            [LABEL_WIDTH, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        add_input(ui);
    });
    ui.add_space(8.0);
}

fn spinner(ui: &mut egui::Ui, state: &AppState, available_rect: &egui::Rect) {
    if state.flow.loading {
        ui.add_space(15.0);
        ui.horizontal(|ui| {
            ui.add_space((available_rect.width() - 100.0).max(0.0) / 2.0);
            ui.label(egui::RichText::new("Please wait...").color(colors::TEXT_SECONDARY));
            ui.spinner();
        });
    }
}
