//! Text charts for weighted category maps.
//!
//! Both charts take an ordered `category -> weight` map, as produced by
//! [`CatalogQuery::genre_weights`](crate::catalog::CatalogQuery::genre_weights)
//! and [`CatalogQuery::year_weights`](crate::catalog::CatalogQuery::year_weights),
//! and draw one line per category in map order.

use indexmap::IndexMap;
use std::fmt::Write;

const FILL: char = '█';
const EMPTY_CHART: &str = "(no data)";

/// Share of the total per category, with a percentage label
pub fn pie_chart<K: AsRef<str>>(weights: &IndexMap<K, u64>, width: usize) -> String {
    if weights.is_empty() {
        return EMPTY_CHART.to_string();
    }

    let total: u64 = weights.values().sum();
    let label_width = label_width(weights);
    let mut out = String::new();

    for (label, weight) in weights {
        let share = if total == 0 {
            0.0
        } else {
            *weight as f64 / total as f64
        };
        let filled = bar(scaled(*weight, total, width));
        let _ = writeln!(
            out,
            "{:<lw$} |{:<width$}| {:>5.1}%",
            label.as_ref(),
            filled,
            share * 100.0,
            lw = label_width,
            width = width
        );
    }

    out.trim_end().to_string()
}

/// Bars scaled against the largest category, with the raw value
pub fn bar_chart<K: AsRef<str>>(weights: &IndexMap<K, u64>, width: usize) -> String {
    if weights.is_empty() {
        return EMPTY_CHART.to_string();
    }

    let max = weights.values().copied().max().unwrap_or(0);
    let label_width = label_width(weights);
    let mut out = String::new();

    for (label, weight) in weights {
        let _ = writeln!(
            out,
            "{:<lw$} |{} {}",
            label.as_ref(),
            bar(scaled(*weight, max, width)),
            weight,
            lw = label_width
        );
    }

    out.trim_end().to_string()
}

fn label_width<K: AsRef<str>>(weights: &IndexMap<K, u64>) -> usize {
    weights
        .keys()
        .map(|label| label.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

fn scaled(value: u64, denominator: u64, width: usize) -> usize {
    if denominator == 0 {
        return 0;
    }
    ((value as f64 / denominator as f64) * width as f64).round() as usize
}

fn bar(len: usize) -> String {
    std::iter::repeat(FILL).take(len).collect()
}
