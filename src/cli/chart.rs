//! Text bar chart for the monthly spending report.

use crate::core::services::MonthlyTotal;

const BAR_CHAR: char = '█';
pub const DEFAULT_BAR_WIDTH: usize = 30;

/// Renders one line per month, bars scaled so the largest month fills `width`.
pub fn render_monthly_chart(rows: &[MonthlyTotal], width: usize) -> Vec<String> {
    let max = rows
        .iter()
        .map(|row| row.total)
        .fold(0.0_f64, f64::max);
    let label_width = rows
        .iter()
        .map(|row| format!("{:.2}", row.total).len())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|row| {
            let bar = BAR_CHAR.to_string().repeat(bar_length(row.total, max, width));
            format!(
                "{}  {:<width$}  {:>label_width$.2}",
                row.month,
                bar,
                row.total,
                width = width,
                label_width = label_width
            )
        })
        .collect()
}

fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    let scaled = (value / max * width as f64).round() as usize;
    scaled.clamp(1, width)
}
