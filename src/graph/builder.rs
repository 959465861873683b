use crate::graph::chart::{AxisValueFormatter, LineChart};
use crate::graph::{MAX_Y, MAX_Y_DEFAULT, MIN_Y, MIN_Y_HALF};
use crate::state::theme::Theme;

/// One-shot configuration of a `LineChart`: axis ranges, label counts,
/// titles, and theme colors. Consumed by `build`.
pub struct GraphViewBuilder {
    plot_id: String,
    num_horizontal_labels: usize,
    maximum_y: i32,
    theme: Theme,
    horizontal_labels_visible: bool,
    label_formatter: Option<AxisValueFormatter>,
    vertical_title: String,
    horizontal_title: String,
}

impl GraphViewBuilder {
    pub fn new(
        plot_id: impl Into<String>,
        num_horizontal_labels: usize,
        maximum_y: i32,
        theme: Theme,
    ) -> Self {
        Self {
            plot_id: plot_id.into(),
            num_horizontal_labels,
            maximum_y,
            theme,
            horizontal_labels_visible: true,
            label_formatter: None,
            vertical_title: String::new(),
            horizontal_title: String::new(),
        }
    }

    pub fn set_horizontal_labels_visible(mut self, visible: bool) -> Self {
        self.horizontal_labels_visible = visible;
        self
    }

    pub fn set_label_formatter(mut self, formatter: AxisValueFormatter) -> Self {
        self.label_formatter = Some(formatter);
        self
    }

    pub fn set_vertical_title(mut self, title: impl Into<String>) -> Self {
        self.vertical_title = title.into();
        self
    }

    pub fn set_horizontal_title(mut self, title: impl Into<String>) -> Self {
        self.horizontal_title = title.into();
        self
    }

    /// Requested y maximum clamped to the displayable dBm range.
    pub fn maximum_port_y(&self) -> i32 {
        if self.maximum_y > MAX_Y || self.maximum_y < MIN_Y_HALF {
            MAX_Y_DEFAULT
        } else {
            self.maximum_y
        }
    }

    /// One label per 10 dBm step.
    pub fn num_vertical_labels(&self) -> usize {
        ((self.maximum_port_y() - MIN_Y) / 10 + 1) as usize
    }

    pub fn build(self, scalable: bool) -> LineChart {
        let mut chart = LineChart::new(self.plot_id.clone());
        chart.scalable = scalable;

        chart.y_axis.minimum = MIN_Y as f64;
        chart.y_axis.maximum = self.maximum_port_y() as f64;
        chart.y_axis.label_count = self.num_vertical_labels();
        chart.y_axis.title = self.vertical_title;

        chart.x_axis.label_count = self.num_horizontal_labels;
        chart.x_axis.title = self.horizontal_title;
        chart.x_axis.draw_labels = self.horizontal_labels_visible;
        chart.x_axis.formatter = self.label_formatter;

        chart.legend.enabled = false;
        chart.legend.text_color = self.theme.graph_text_color();

        // charts start hidden; the view manager decides which one shows
        chart.set_visible(false);
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn maximum_port_y_clamps_out_of_range_values() {
        let too_high = GraphViewBuilder::new("g", 10, MAX_Y + 5, Theme::Dark);
        assert_eq!(too_high.maximum_port_y(), MAX_Y_DEFAULT);

        let too_low = GraphViewBuilder::new("g", 10, MIN_Y_HALF - 1, Theme::Dark);
        assert_eq!(too_low.maximum_port_y(), MAX_Y_DEFAULT);

        let in_range = GraphViewBuilder::new("g", 10, -30, Theme::Dark);
        assert_eq!(in_range.maximum_port_y(), -30);
    }

    #[test]
    fn vertical_labels_cover_ten_dbm_steps() {
        let builder = GraphViewBuilder::new("g", 10, MAX_Y_DEFAULT, Theme::Dark);
        // -100..=-20 in steps of 10
        assert_eq!(builder.num_vertical_labels(), 9);
    }

    #[test]
    fn build_applies_configuration() {
        let chart = GraphViewBuilder::new("channels", 17, -30, Theme::Light)
            .set_horizontal_title("Channel")
            .set_vertical_title("Signal (dBm)")
            .set_label_formatter(Arc::new(|value| format!("{value:.0}")))
            .set_horizontal_labels_visible(false)
            .build(true);

        assert_eq!(chart.plot_id(), "channels");
        assert_eq!(chart.y_axis.minimum, MIN_Y as f64);
        assert_eq!(chart.y_axis.maximum, -30.0);
        assert_eq!(chart.x_axis.label_count, 17);
        assert_eq!(chart.x_axis.title, "Channel");
        assert_eq!(chart.y_axis.title, "Signal (dBm)");
        assert!(!chart.x_axis.draw_labels);
        assert!(chart.x_axis.formatter.is_some());
        assert!(chart.scalable);
        assert!(!chart.visible());
        assert!(!chart.legend.enabled);
        assert_eq!(chart.legend.text_color, Theme::Light.graph_text_color());
    }
}
