//! Budget gauge and category chart
//!
//! The gauge compares the filtered total against the budget ceiling. The
//! chart shows how that total splits across categories.

use ratatui::{
    layout::{Direction, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::services::ExpenseView;
use crate::tui::app::App;
use crate::tui::theme::chart_color;

/// Gauge fill for a progress ratio
///
/// The ratio itself is unclamped; the gauge only accepts `0.0..=1.0`.
pub fn gauge_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Render the budget gauge
pub fn render_gauge(frame: &mut Frame, app: &App, view: &ExpenseView, area: Rect) {
    let palette = app.palette();
    let max_budget = app.settings.max_budget;
    let ratio = view.progress_ratio(max_budget);

    let color = if ratio > 1.0 {
        palette.danger
    } else if ratio > 0.8 {
        palette.warning
    } else {
        palette.success
    };

    let label = format!(
        "Total: {} / {} ({:.1}%)",
        app.settings.format_amount(view.total),
        app.settings.format_amount(max_budget),
        ratio * 100.0
    );

    let block = Block::default()
        .title(" Budget ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(color).bg(palette.highlight_bg))
        .ratio(gauge_ratio(ratio))
        .label(Span::styled(
            label,
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ));

    frame.render_widget(gauge, area);
}

/// Render the per-category chart
pub fn render_chart(frame: &mut Frame, app: &App, view: &ExpenseView, area: Rect) {
    let palette = app.palette();

    let block = Block::default()
        .title(" By Category ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border(false));

    let slices = view.chart_slices();
    if slices.is_empty() {
        let text = Paragraph::new("Nothing to chart.")
            .block(block)
            .style(Style::default().fg(palette.muted));
        frame.render_widget(text, area);
        return;
    }

    let bars: Vec<Bar> = slices
        .iter()
        .map(|slice| {
            let color = chart_color(slice.rgb());
            Bar::default()
                .value(bar_value(slice.value))
                .label(Line::from(slice.category.as_str()))
                .text_value(format!(
                    "{} ({:.0}%)",
                    app.settings.format_amount(slice.value),
                    slice.share * 100.0
                ))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(palette.background).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .label_style(Style::default().fg(palette.text))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Bar length in hundredths; negative and non-finite values draw nothing
fn bar_value(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        (value * 100.0).round() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_ratio_clamps() {
        assert_eq!(gauge_ratio(0.25), 0.25);
        assert_eq!(gauge_ratio(1.5), 1.0);
        assert_eq!(gauge_ratio(-0.2), 0.0);
        assert_eq!(gauge_ratio(f64::NAN), 0.0);
    }

    #[test]
    fn test_bar_value() {
        assert_eq!(bar_value(12.345), 1235);
        assert_eq!(bar_value(-4.0), 0);
        assert_eq!(bar_value(f64::INFINITY), 0);
    }
}
