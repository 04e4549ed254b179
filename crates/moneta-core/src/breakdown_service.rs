//! Groups report activity by category with percentage slices.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use moneta_domain::{Transaction, TransactionKind};

/// Label of the synthetic slice that buckets the long tail.
pub const OTHER_LABEL: &str = "Other";

/// Number of individual slices shown before bucketing into "Other".
pub const DEFAULT_TOP_SLICES: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One category bucket: a real category in `rows`, possibly the synthetic
/// "Other" aggregate in `slices`.
pub struct BreakdownEntry {
    pub label: String,
    pub value: f64,
    /// Rounded share of the total, in whole percent.
    pub percentage: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Category totals for one transaction kind over a pre-filtered view.
pub struct CategoryBreakdown {
    pub total: f64,
    /// Top groups plus an "Other" bucket when a remainder exists.
    pub slices: Vec<BreakdownEntry>,
    /// Every group, largest first.
    pub rows: Vec<BreakdownEntry>,
}

/// Builds per-category totals and chart slices.
pub struct BreakdownService;

impl BreakdownService {
    /// Groups reportable, `kind`-matching transactions by their canonical
    /// category label.
    ///
    /// Rows and slices are sorted by value descending (label ascending on
    /// ties) so ordering is deterministic. The top `top_n` groups become
    /// slices; any remainder collapses into one "Other" slice whose
    /// percentage is floored at 1% so a real remainder never reads as 0%.
    pub fn breakdown<'a, I>(transactions: I, kind: TransactionKind, top_n: usize) -> CategoryBreakdown
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut groups: HashMap<String, f64> = HashMap::new();
        for txn in transactions {
            if !txn.is_reportable() || txn.kind != kind {
                continue;
            }
            *groups.entry(txn.category_label()).or_insert(0.0) += txn.amount;
        }

        let total: f64 = groups.values().sum();
        let mut rows: Vec<BreakdownEntry> = groups
            .into_iter()
            .map(|(label, value)| BreakdownEntry {
                label,
                value,
                percentage: share_percent(value, total),
            })
            .collect();
        rows.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.label.cmp(&b.label))
        });

        let mut slices: Vec<BreakdownEntry> = rows.iter().take(top_n).cloned().collect();
        if rows.len() > top_n {
            let remainder: f64 = rows[top_n..].iter().map(|entry| entry.value).sum();
            if remainder > 0.0 {
                slices.push(BreakdownEntry {
                    label: OTHER_LABEL.to_string(),
                    value: remainder,
                    percentage: share_percent(remainder, total).max(1),
                });
            }
        }

        CategoryBreakdown {
            total,
            slices,
            rows,
        }
    }
}

fn share_percent(value: f64, total: f64) -> u32 {
    if total > 0.0 {
        (value / total * 100.0).round() as u32
    } else {
        0
    }
}
