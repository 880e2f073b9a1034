//! CoreQuarry owner client - main entry point.

use corequarry::egui_app::{views, AppState};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("corequarry=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 720.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "CoreQuarry",
        options,
        Box::new(|_cc| Ok(Box::new(CoreQuarryApp::default()))),
    )
}

struct CoreQuarryApp {
    state: AppState,
}

impl Default for CoreQuarryApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
        }
    }
}

impl eframe::App for CoreQuarryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // keep polling the pending auth result even without input
        if self.state.flow.is_pending() {
            ctx.request_repaint();
        }
    }
}
