use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use nfhs_explorer::{DependentVar, IndependentVar};

use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Left side panel – variable selection
// ---------------------------------------------------------------------------

/// Render the left variable panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Variables");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Independent variable (X-axis) ----
            ui.strong("Independent variable (X-axis)");
            let current = state.selection.independent;
            let selected_text = current.map(|v| v.column_name()).unwrap_or("");
            egui::ComboBox::from_id_salt("independent_var")
                .selected_text(selected_text)
                .width(ui.available_width())
                .show_ui(ui, |ui: &mut Ui| {
                    for var in IndependentVar::ALL {
                        if ui
                            .selectable_label(current == Some(var), var.column_name())
                            .clicked()
                        {
                            state.set_independent(var);
                        }
                    }
                });
            ui.separator();

            // ---- Dependent variables (Y-axis) ----
            let n_selected = state.selection.dependents().len();
            ui.strong(format!(
                "Dependent variable(s) (Y-axis)  ({n_selected}/{})",
                DependentVar::ALL.len()
            ));
            for dep in DependentVar::ALL {
                let mut checked = state.selection.contains(dep);
                let text = RichText::new(dep.column_name()).color(state.colors.color_for(dep));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_dependent(dep);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_save = state.dataset.is_some();
            if ui
                .add_enabled(can_save, egui::Button::new("Save as CSV…"))
                .clicked()
            {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.tab, Tab::Overview, "Overview");
        ui.selectable_value(&mut state.tab, Tab::Regression, "Regression");

        ui.separator();

        if let Some(ds) = &state.dataset {
            let source = state
                .source_path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!("{source}: {} rows, {} columns", ds.len(), ds.n_columns()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::DARK_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open indicator table")
        .add_filter("Supported files", &["xlsx", "xls", "csv", "json", "parquet", "pq"])
        .add_filter("Excel", &["xlsx", "xls"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save dataset as CSV")
        .add_filter("CSV", &["csv"])
        .set_file_name("final_data.csv")
        .save_file();

    if let Some(path) = file {
        state.save_csv(&path);
    }
}
