use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use nfhs_explorer::data::describe::{dimensions, ColumnSummary};
use nfhs_explorer::Dataset;

use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Overview tab: dimensions, preview, summary statistics
// ---------------------------------------------------------------------------

pub fn overview(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to begin  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Dataset Preview");
            ui.push_id("preview_table", |ui: &mut Ui| {
                ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
                    preview_table(ui, dataset, state.config.preview_rows);
                });
            });
            ui.add_space(12.0);

            ui.heading("Dataset Dimensions");
            let dims = dimensions(dataset);
            ui.label(
                RichText::new(format!(
                    "The dataset contains {} rows and {} columns.",
                    dims.rows, dims.columns
                ))
                .strong(),
            );
            ui.add_space(12.0);

            ui.heading("Summary Statistics");
            ui.push_id("summary_table", |ui: &mut Ui| {
                ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
                    summary_table(ui, &state.summaries);
                });
            });
        });
}

fn preview_table(ui: &mut Ui, dataset: &Dataset, n_rows: usize) {
    let names = dataset.column_names();
    let n_rows = n_rows.min(dataset.len());

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_most(260.0).clip(true), names.len())
        .header(ROW_HEIGHT * 2.0, |mut header| {
            for name in names {
                header.col(|ui: &mut Ui| {
                    ui.add(egui::Label::new(RichText::new(name).strong()).wrap());
                });
            }
        })
        .body(|mut body| {
            for row in 0..n_rows {
                body.row(ROW_HEIGHT, |mut table_row| {
                    for name in names {
                        table_row.col(|ui: &mut Ui| {
                            let text = dataset
                                .cell(row, name)
                                .map(ToString::to_string)
                                .unwrap_or_default();
                            ui.label(text);
                        });
                    }
                });
            }
        });
}

fn summary_table(ui: &mut Ui, summaries: &[ColumnSummary]) {
    const HEADERS: [&str; 9] = ["column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_most(420.0).clip(true))
        .columns(Column::auto().at_least(64.0), HEADERS.len() - 1)
        .header(ROW_HEIGHT, |mut header| {
            for h in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, summaries.len(), |mut table_row| {
                let s = &summaries[table_row.index()];
                let std = s.std.map(|v| format!("{v:.3}")).unwrap_or_else(|| "-".into());
                let cells = [
                    s.column.clone(),
                    s.count.to_string(),
                    format!("{:.3}", s.mean),
                    std,
                    format!("{:.3}", s.min),
                    format!("{:.3}", s.q1),
                    format!("{:.3}", s.median),
                    format!("{:.3}", s.q3),
                    format!("{:.3}", s.max),
                ];
                for text in cells {
                    table_row.col(|ui: &mut Ui| {
                        ui.label(text);
                    });
                }
            });
        });
}
