use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use nfhs_explorer::FittedModel;

// ---------------------------------------------------------------------------
// Scatter plot with regression line
// ---------------------------------------------------------------------------

/// Observed points plus the fitted line across the observed x range.
pub fn regression_plot(ui: &mut Ui, model: &FittedModel, color: Color32, height: f32) {
    let observed: PlotPoints = model.points.iter().map(|&(x, y)| [x, y]).collect();

    let line: PlotPoints = [model.x_min, model.x_max]
        .iter()
        .map(|&x| [x, model.predict(x)])
        .collect();

    Plot::new(("regression_plot", &model.x_name, &model.y_name))
        .legend(Legend::default())
        .height(height)
        .x_axis_label(short_label(&model.x_name))
        .y_axis_label(short_label(&model.y_name))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(observed)
                    .name("Data Points")
                    .color(color)
                    .radius(3.5),
            );
            plot_ui.line(
                Line::new(line)
                    .name("Regression Line")
                    .color(Color32::RED)
                    .width(2.0),
            );
        });
}

/// Long indicator headers are cut down to fit an axis.
fn short_label(column: &str) -> String {
    const MAX_CHARS: usize = 48;
    if column.chars().count() <= MAX_CHARS {
        return column.to_string();
    }
    let truncated: String = column.chars().take(MAX_CHARS - 1).collect();
    format!("{truncated}…")
}

#[cfg(test)]
mod tests {
    use super::short_label;

    #[test]
    fn long_labels_are_truncated() {
        assert_eq!(short_label("Infant mortality"), "Infant mortality");
        let long = "Women age 15-19 years who were already mothers or pregnant at the time of the survey (%)";
        let label = short_label(long);
        assert_eq!(label.chars().count(), 48);
        assert!(label.ends_with('…'));
    }
}
