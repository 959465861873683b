use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints, Polygon};

use crate::graph::chart::{LineChart, SeriesId};
use crate::graph::MIN_Y;

/// Normalized pointer-to-point distance below which a click counts as a tap
/// on that series.
const TAP_RADIUS: f64 = 0.04;

/// Render one chart model. Returns the series whose point was tapped, if any.
pub fn show(ui: &mut egui::Ui, chart: &LineChart) -> Option<SeriesId> {
    if !chart.visible() {
        return None;
    }

    ui.scope(|ui| {
        ui.style_mut().visuals.override_text_color = Some(chart.legend.text_color);
        ui.style_mut().text_styles.insert(
            egui::TextStyle::Small,
            egui::FontId::proportional(chart.legend.text_size),
        );

        let mut plot = Plot::new(chart.plot_id().to_owned())
            .show_grid(true)
            .show_axes([chart.x_axis.draw_labels, true])
            .allow_drag(chart.scalable)
            .allow_zoom([chart.scalable, false])
            .allow_scroll(chart.scalable)
            .allow_boxed_zoom(false)
            .height(ui.available_height());

        if !chart.x_axis.title.is_empty() {
            plot = plot.x_axis_label(chart.x_axis.title.clone());
        }
        if !chart.y_axis.title.is_empty() {
            plot = plot.y_axis_label(chart.y_axis.title.clone());
        }
        if let Some(formatter) = chart.x_axis.formatter.clone() {
            plot = plot.x_axis_formatter(move |mark, _range| formatter(mark.value));
        }
        if chart.legend.enabled {
            plot = plot.legend(
                Legend::default()
                    .position(chart.legend.position)
                    .text_style(egui::TextStyle::Small),
            );
        }

        let response = plot.show(ui, |plot_ui| {
            let (x_min, x_max) = chart.x_bounds();
            let (y_min, y_max) = chart.y_bounds();
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));

            for data_set in chart.data.iter() {
                if data_set.draw_filled && data_set.entry_count() > 1 {
                    plot_ui.polygon(
                        Polygon::new(String::new(), fill_outline(data_set.entries()))
                            .fill_color(data_set.fill_color)
                            .stroke(egui::Stroke::NONE),
                    );
                }
                let points: PlotPoints = data_set.entries().iter().copied().collect();
                plot_ui.line(
                    Line::new(data_set.label.clone(), points)
                        .color(data_set.color)
                        .width(data_set.line_width),
                );
            }
        });

        if response.response.clicked() {
            if let Some(pointer) = response.response.interact_pointer_pos() {
                let tapped = response.transform.value_from_position(pointer);
                return nearest_series(chart, tapped.x, tapped.y, response.transform.bounds());
            }
        }
        None
    })
    .inner
}

/// Closes the series outline down to the graph floor so it can be filled.
fn fill_outline(entries: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let mut outline = Vec::with_capacity(entries.len() + 2);
    outline.push([entries[0][0], MIN_Y as f64]);
    outline.extend_from_slice(entries);
    outline.push([entries[entries.len() - 1][0], MIN_Y as f64]);
    outline
}

/// Closest data point to the click, measured in bounds-normalized space so x
/// and y scales weigh equally.
fn nearest_series(chart: &LineChart, x: f64, y: f64, bounds: &PlotBounds) -> Option<SeriesId> {
    let width = bounds.width().max(f64::EPSILON);
    let height = bounds.height().max(f64::EPSILON);

    let mut best: Option<(f64, SeriesId)> = None;
    for data_set in chart.data.iter() {
        for point in data_set.entries() {
            let dx = (point[0] - x) / width;
            let dy = (point[1] - y) / height;
            let distance = (dx * dx + dy * dy).sqrt();
            if best.map_or(true, |(d, _)| distance < d) {
                best = Some((distance, data_set.id()));
            }
        }
    }
    best.filter(|(distance, _)| *distance <= TAP_RADIUS)
        .map(|(_, id)| id)
}
