//! Layout for the grouped "current vs. optimized budget" bar chart.
//!
//! Only the numbers live here; the frontend turns them into SVG.

use num_format::{Locale, ToFormattedString};

use crate::model::analysis::AdAllocation;

/// Number of intervals between gridlines on the value axis.
pub const TICK_INTERVALS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub current: f64,
    pub suggested: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetChart {
    pub groups: Vec<BarGroup>,
    pub axis_max: f64,
    pub tick_step: f64,
}

impl BudgetChart {
    pub fn from_allocations(allocations: &[AdAllocation]) -> Self {
        let groups: Vec<BarGroup> = allocations
            .iter()
            .map(|a| BarGroup {
                label: a.name.clone(),
                current: sanitize(a.current_budget),
                suggested: sanitize(a.algo_suggested_budget),
            })
            .collect();

        let max = groups
            .iter()
            .flat_map(|g| [g.current, g.suggested])
            .fold(0.0_f64, f64::max);
        let tick_step = nice_step(max / TICK_INTERVALS as f64);

        Self {
            groups,
            axis_max: tick_step * TICK_INTERVALS as f64,
            tick_step,
        }
    }

    /// Gridline values from zero up to and including `axis_max`.
    pub fn ticks(&self) -> Vec<f64> {
        (0..=TICK_INTERVALS)
            .map(|i| self.tick_step * i as f64)
            .collect()
    }

    /// Dollar label for axis ticks and bar tooltips. Cents are shown once the
    /// gridlines are less than a dollar apart.
    pub fn dollar_label(&self, value: f64) -> String {
        format_dollars(value, self.tick_step < 1.0)
    }

    /// Height of `value` as a fraction of the plot area, in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        (sanitize(value) / self.axis_max).clamp(0.0, 1.0)
    }
}

/// Dollar amount with thousands separators, e.g. `$12,500` or `$0.50`.
/// Negative and non-finite amounts read as zero.
pub fn format_dollars(amount: f64, with_cents: bool) -> String {
    let amount = sanitize(amount);
    if with_cents {
        let cents = (amount * 100.0).round() as u64;
        format!(
            "${}.{:02}",
            (cents / 100).to_formatted_string(&Locale::en),
            cents % 100
        )
    } else {
        format!("${}", (amount.round() as u64).to_formatted_string(&Locale::en))
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

/// Smallest 1, 2 or 5 times a power of ten that is at least `raw`.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let exponent = raw.log10().floor() as i32;
    let base = 10f64.powi(exponent);
    let scaled = raw / base;
    let nice = if scaled <= 1.0 {
        1.0
    } else if scaled <= 2.0 {
        2.0
    } else if scaled <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}
