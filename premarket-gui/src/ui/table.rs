use egui_extras::{Column, TableBuilder};
use premarket_core::FilteredRow;
use serde_json::Number;

pub fn render(ui: &mut egui::Ui, rows: &[FilteredRow]) {
    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));

    for width in [110.0, 80.0, 90.0, 90.0, 110.0, 80.0, 80.0] {
        builder = builder.column(Column::auto().at_least(width));
    }

    builder
        .header(30.0, |mut header| {
            for name in FilteredRow::COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            // Only the visible rows are laid out
            body.rows(25.0, rows.len(), |mut row| {
                let Some(item) = rows.get(row.index()) else {
                    return;
                };
                row.col(|ui| {
                    ui.label(&item.symbol);
                });
                row.col(|ui| {
                    let color = if item.p_change > 0.0 {
                        egui::Color32::GREEN
                    } else if item.p_change < 0.0 {
                        egui::Color32::RED
                    } else {
                        ui.style().visuals.text_color()
                    };
                    ui.colored_label(color, format!("{:+.2}%", item.p_change));
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", item.last_price));
                });
                row.col(|ui| {
                    ui.label(format_quantity(item.quantity.as_ref()));
                });
                row.col(|ui| {
                    ui.label(format_compact(item.total_turnover))
                        .on_hover_text(format!("{:.2}", item.total_turnover));
                });
                row.col(|ui| {
                    ui.label(format_optional(item.year_low));
                });
                row.col(|ui| {
                    ui.label(format_optional(item.year_high));
                });
            });
        });
}

/// Plain-text table for terminal output.
pub fn render_text(rows: &[FilteredRow]) -> String {
    let mut out = format!(
        "{:<14} | {:>8} | {:>10} | {:>10} | {:>16} | {:>10} | {:>10}\n",
        FilteredRow::COLUMNS[0],
        FilteredRow::COLUMNS[1],
        FilteredRow::COLUMNS[2],
        FilteredRow::COLUMNS[3],
        FilteredRow::COLUMNS[4],
        FilteredRow::COLUMNS[5],
        FilteredRow::COLUMNS[6],
    );
    out.push_str(&format!(
        "{:-<14}-|-{:-<8}-|-{:-<10}-|-{:-<10}-|-{:-<16}-|-{:-<10}-|-{:-<10}\n",
        "", "", "", "", "", "", ""
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<14} | {:>8.2} | {:>10.2} | {:>10} | {:>16.2} | {:>10} | {:>10}\n",
            row.symbol,
            row.p_change,
            row.last_price,
            row.quantity.as_ref().map(|q| q.to_string()).unwrap_or_else(|| "-".to_string()),
            row.total_turnover,
            format_optional(row.year_low),
            format_optional(row.year_high),
        ));
    }
    out
}

pub fn format_optional(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

pub fn format_quantity(quantity: Option<&Number>) -> String {
    quantity
        .and_then(Number::as_f64)
        .map(format_compact)
        .unwrap_or_else(|| "-".to_string())
}

/// Indian grouping: crore, lakh, thousand.
pub fn format_compact(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 10_000_000.0 {
        format!("{:.2}Cr", value / 10_000_000.0)
    } else if magnitude >= 100_000.0 {
        format!("{:.2}L", value / 100_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{}", value)
    }
}
