//! Segment breakdowns: per-product and per-channel sales aggregates.

use crate::core::{SaleRecord, SegmentStat};
use std::collections::BTreeMap;

/// Group records by a key and compute total/count/avg plus each group's
/// percentage of the grand total.
///
/// No group is dropped, including single-sale groups. When the grand
/// total is zero every `pct` is zero. Output is ordered by segment name.
pub fn segment_breakdown<F>(records: &[SaleRecord], key_fn: F) -> Vec<SegmentStat>
where
    F: Fn(&SaleRecord) -> &str,
{
    let mut groups: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(key_fn(record)).or_insert((0.0, 0));
        entry.0 += record.amount;
        entry.1 += 1;
    }

    let grand_total: f64 = groups.values().map(|(total, _)| total).sum();

    groups
        .into_iter()
        .map(|(name, (total, count))| SegmentStat {
            name: name.to_string(),
            total,
            count,
            avg: total / count as f64,
            pct: if grand_total > 0.0 {
                total / grand_total * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Breakdown by product name.
pub fn by_product(records: &[SaleRecord]) -> Vec<SegmentStat> {
    segment_breakdown(records, |record| &record.product)
}

/// Breakdown by sales channel.
pub fn by_channel(records: &[SaleRecord]) -> Vec<SegmentStat> {
    segment_breakdown(records, |record| &record.channel)
}
