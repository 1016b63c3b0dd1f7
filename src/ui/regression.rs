use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use nfhs_explorer::analysis::{
    AnalysisRun, Extrapolation, FittedModel, Interpretation, PairOutcome, RegressionSummary,
};
use nfhs_explorer::{DependentVar, IndependentVar};

use crate::state::AppState;
use crate::ui::plot;

const PLOT_HEIGHT: f32 = 320.0;

// ---------------------------------------------------------------------------
// Regression tab
// ---------------------------------------------------------------------------

pub fn regression_tab(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to begin  (File → Open…)");
        });
        return;
    }

    ui.heading("Influence of Women's Life Circumstances on Child Health Outcomes");
    ui.separator();

    // The run is replaced only on selection change, which happens in the
    // side panel, so a snapshot of the outcomes is stable for this frame.
    let (independent, outcomes) = match &state.analysis {
        AnalysisRun::Idle => {
            ui.label("Select an independent variable and at least one dependent variable.");
            return;
        }
        AnalysisRun::Ran {
            independent,
            outcomes,
        } => (*independent, outcomes.clone()),
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for outcome in &outcomes {
                ui.push_id(outcome.dependent, |ui: &mut Ui| {
                    outcome_section(ui, state, independent, outcome);
                });
                ui.separator();
            }
        });
}

fn outcome_section(
    ui: &mut Ui,
    state: &mut AppState,
    independent: IndependentVar,
    outcome: &PairOutcome,
) {
    let model = match &outcome.result {
        Ok(model) => model,
        Err(err) => {
            ui.strong(outcome.dependent.column_name());
            ui.label(RichText::new(format!("Cannot fit: {err}")).color(Color32::RED));
            return;
        }
    };

    let color = state.colors.color_for(outcome.dependent);

    ui.columns(2, |cols| {
        cols[0].strong(format!("Scatter Plot: {} vs {}", model.y_name, model.x_name));
        plot::regression_plot(&mut cols[0], model, color, PLOT_HEIGHT);

        cols[1].strong("Regression Interpretation");
        interpretation(&mut cols[1], model);
    });

    egui::CollapsingHeader::new(format!("Show Full Regression Summary for {}", model.y_name))
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.monospace(RegressionSummary(model).to_string());
        });

    prediction(ui, state, independent, outcome.dependent, model);
}

fn interpretation(ui: &mut Ui, model: &FittedModel) {
    let text = Interpretation::of(model);
    ui.label(format!("• {}", text.effect));
    ui.label(format!("• {}", text.fit));
    let color = if model.significance().is_significant() {
        Color32::DARK_GREEN
    } else {
        Color32::from_rgb(200, 60, 60)
    };
    ui.label(RichText::new(format!("• {}", text.significance)).color(color));
    ui.label(format!("• n = {} complete rows", model.n_observations));
}

fn prediction(
    ui: &mut Ui,
    state: &mut AppState,
    independent: IndependentVar,
    dependent: DependentVar,
    model: &FittedModel,
) {
    ui.strong(format!(
        "Predict {} Based on New {} Value",
        model.y_name, model.x_name
    ));

    let warn = state.config.warn_on_extrapolation;
    let Some(input) = state.prediction_input(independent, dependent) else {
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("Enter a new value for {}:", model.x_name));
        ui.add(egui::DragValue::new(&mut *input).speed(0.1).max_decimals(3));
    });

    let result = model.predict_checked(*input);
    ui.label(
        RichText::new(format!("Predicted {} = {:.2}", model.y_name, result.value))
            .color(Color32::DARK_GREEN)
            .strong(),
    );

    if warn {
        if let Some(side) = result.extrapolation {
            let side = match side {
                Extrapolation::BelowObserved => "below",
                Extrapolation::AboveObserved => "above",
            };
            ui.label(
                RichText::new(format!(
                    "Input is {side} the observed range [{:.2}, {:.2}]; the prediction extrapolates.",
                    model.x_min, model.x_max
                ))
                .color(Color32::from_rgb(200, 140, 0)),
            );
        }
    }
}
