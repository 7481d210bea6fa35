use crate::catalog::Category;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 360.0;
const LEFT: f64 = 60.0;
const RIGHT: f64 = 24.0;
const TOP: f64 = 48.0;
const BOTTOM: f64 = 100.0;
const MAX_TICKS: u64 = 5;

pub const CHART_TITLE: &str = "Mood distribution";

/// Renders per-mood counts as an SVG bar chart, one bar per entry in the
/// order given. Callers handle the empty case; an empty slice draws axes only.
pub fn render_chart(counts: &[(Category, u64)]) -> String {
    let plot_bottom = HEIGHT - BOTTOM;
    let plot_height = plot_bottom - TOP;
    let plot_width = WIDTH - LEFT - RIGHT;

    let max = counts.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);
    let step = max.div_ceil(MAX_TICKS);
    let top_tick = step * max.div_ceil(step);
    let y = |value: u64| plot_bottom - value as f64 / top_tick as f64 * plot_height;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" role="img" aria-label="{CHART_TITLE}">"#
    ));
    svg.push_str(&format!(
        r#"<text class="chart-title" x="{}" y="28" text-anchor="middle">{CHART_TITLE}</text>"#,
        LEFT + plot_width / 2.0
    ));

    let mut tick = 0;
    while tick <= top_tick {
        let ty = y(tick);
        svg.push_str(&format!(
            r#"<line class="chart-grid" x1="{LEFT}" y1="{ty:.1}" x2="{:.1}" y2="{ty:.1}" /><text class="chart-label" x="{:.1}" y="{:.1}" text-anchor="end">{tick}</text>"#,
            WIDTH - RIGHT,
            LEFT - 8.0,
            ty + 4.0
        ));
        tick += step;
    }

    if !counts.is_empty() {
        let slot = plot_width / counts.len() as f64;
        let bar_width = slot * 0.6;
        for (index, (category, count)) in counts.iter().enumerate() {
            let center = LEFT + slot * (index as f64 + 0.5);
            let top = y(*count);
            let label = category.label();
            svg.push_str(&format!(
                r#"<rect class="bar" data-mood="{label}" data-count="{count}" x="{:.1}" y="{top:.1}" width="{bar_width:.1}" height="{:.1}"><title>{label}: {count}</title></rect>"#,
                center - bar_width / 2.0,
                plot_bottom - top
            ));
            let label_y = plot_bottom + 14.0;
            svg.push_str(&format!(
                r#"<text class="chart-label" x="{center:.1}" y="{label_y:.1}" text-anchor="end" transform="rotate(-45 {center:.1} {label_y:.1})">{label}</text>"#
            ));
        }
    }

    svg.push_str(&format!(
        r#"<line class="chart-axis" x1="{LEFT}" y1="{plot_bottom}" x2="{:.1}" y2="{plot_bottom}" />"#,
        WIDTH - RIGHT
    ));
    svg.push_str(&format!(
        r#"<text class="chart-axis-title" x="{:.1}" y="{:.1}" text-anchor="middle">Mood</text>"#,
        LEFT + plot_width / 2.0,
        HEIGHT - 12.0
    ));
    svg.push_str(&format!(
        r#"<text class="chart-axis-title" x="16" y="{:.1}" text-anchor="middle" transform="rotate(-90 16 {:.1})">Count</text>"#,
        TOP + plot_height / 2.0,
        TOP + plot_height / 2.0
    ));
    svg.push_str("</svg>");
    svg
}
