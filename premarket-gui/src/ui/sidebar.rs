use std::ops::RangeInclusive;

use crate::app::PremarketApp;

const PCHANGE_STEP: f64 = 0.1;
const PRICE_STEP: f64 = 1.0;
const TURNOVER_RANGE: RangeInclusive<f64> = 100_000.0..=1_000_000_000.0;
const TURNOVER_STEP: f64 = 1_000_000.0;

pub fn render(ui: &mut egui::Ui, app: &mut PremarketApp) {
    ui.vertical(|ui| {
        ui.add_space(10.0);

        ui.heading("Filter Conditions");

        ui.add_space(10.0);
        ui.separator();

        let criteria = &mut app.criteria;

        stepper(ui, "Minimum % Change", &mut criteria.pchange_min, PCHANGE_STEP, None);
        stepper(ui, "Maximum % Change", &mut criteria.pchange_max, PCHANGE_STEP, None);
        stepper(ui, "Minimum Price", &mut criteria.price_min, PRICE_STEP, None);
        stepper(ui, "Maximum Price", &mut criteria.price_max, PRICE_STEP, None);

        ui.add_space(5.0);
        ui.label("Total Turnover Range");
        stepper(ui, "min", &mut criteria.turnover_min, TURNOVER_STEP, Some(TURNOVER_RANGE));
        stepper(ui, "max", &mut criteria.turnover_max, TURNOVER_STEP, Some(TURNOVER_RANGE));

        let inverted = criteria.inverted_bounds();
        if !inverted.is_empty() {
            ui.add_space(5.0);
            ui.label(
                egui::RichText::new(format!("Min above max: {}", inverted.join(", ")))
                    .small()
                    .color(egui::Color32::YELLOW)
            );
        }

        ui.add_space(15.0);

        if ui.button("Apply Filter").clicked() {
            app.apply_filter();
        }
    });
}

/// Numeric input with -/+ buttons that move by exactly `step`. Dragging
/// is free-form; the result is clamped to `range` when one is given.
fn stepper(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f64,
    step: f64,
    range: Option<RangeInclusive<f64>>,
) {
    ui.add_space(5.0);
    ui.label(label);
    ui.horizontal(|ui| {
        if ui.small_button("-").clicked() {
            *value = nudge(*value, -step, range.as_ref());
        }
        ui.add(egui::DragValue::new(value).speed(step).max_decimals(2));
        if ui.small_button("+").clicked() {
            *value = nudge(*value, step, range.as_ref());
        }
    });
    if let Some(range) = &range {
        *value = value.clamp(*range.start(), *range.end());
    }
}

/// Moves `value` by `delta`, rounding away float drift at the step's
/// precision, then clamps to `range`.
pub(crate) fn nudge(value: f64, delta: f64, range: Option<&RangeInclusive<f64>>) -> f64 {
    let moved = ((value + delta) * 100.0).round() / 100.0;
    match range {
        Some(range) => moved.clamp(*range.start(), *range.end()),
        None => moved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nudge_moves_by_exact_step() {
        assert_eq!(nudge(-20.0, PCHANGE_STEP, None), -19.9);
        assert_eq!(nudge(0.2, PCHANGE_STEP, None), 0.3);
        assert_eq!(nudge(100.0, -PRICE_STEP, None), 99.0);
    }

    #[test]
    fn test_turnover_steps_count_from_range_minimum() {
        let range = TURNOVER_RANGE;
        let once = nudge(100_000.0, TURNOVER_STEP, Some(&range));
        assert_eq!(once, 1_100_000.0);
        assert_eq!(nudge(once, TURNOVER_STEP, Some(&range)), 2_100_000.0);
    }

    #[test]
    fn test_turnover_nudge_is_clamped() {
        let range = TURNOVER_RANGE;
        assert_eq!(nudge(100_000.0, -TURNOVER_STEP, Some(&range)), 100_000.0);
        assert_eq!(nudge(999_500_000.0, TURNOVER_STEP, Some(&range)), 1_000_000_000.0);
    }
}
