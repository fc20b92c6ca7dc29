use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::debug;

use super::record::CostRecord;

/// Aggregated costs for a single date key.
#[derive(Debug, Clone, PartialEq)]
pub struct DateSummary {
    pub date: String,
    pub total_cost: f64,
    pub count: usize,
}

impl DateSummary {
    /// Average cost of a row on this date.
    ///
    /// A summary only exists once its date has been seen, so `count` is never
    /// zero here.
    pub fn row_cost(&self) -> f64 {
        self.total_cost / self.count as f64
    }
}

/// Per-date summaries ordered by the raw date string, plus grand totals.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Summary {
    dates: BTreeMap<String, DateSummary>,
    total_records: usize,
    total_cost: f64,
}

impl Summary {
    pub fn from_records(records: impl IntoIterator<Item = CostRecord>) -> Self {
        let records = records.into_iter().collect_vec();
        let total_records = records.len();
        let total_cost = records.iter().fold(0.0, |total, record| total + record.cost);

        let dates: BTreeMap<_, _> = records
            .into_iter()
            .into_grouping_map_by(|record| record.date.clone())
            .fold((0.0, 0), |(total, count), _date, record| {
                (total + record.cost, count + 1)
            })
            .into_iter()
            .map(|(date, (total_cost, count))| {
                let summary = DateSummary {
                    date: date.clone(),
                    total_cost,
                    count,
                };
                (date, summary)
            })
            .collect();

        debug!(
            records = total_records,
            dates = dates.len(),
            "Aggregated cost records"
        );

        Self {
            dates,
            total_records,
            total_cost,
        }
    }

    /// Summaries in ascending date order.
    pub fn dates(&self) -> impl Iterator<Item = &DateSummary> {
        self.dates.values()
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }
}
