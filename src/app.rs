use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{overview, panels, regression};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExplorerApp {
    pub state: AppState,
}

impl ExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: variable selection (regression tab only) ----
        if self.state.tab == Tab::Regression {
            egui::SidePanel::left("variable_panel")
                .default_width(300.0)
                .resizable(true)
                .show(ctx, |ui| {
                    panels::side_panel(ui, &mut self.state);
                });
        }

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Overview => overview::overview(ui, &self.state),
            Tab::Regression => regression::regression_tab(ui, &mut self.state),
        });
    }
}
