//! Summary computation over the three session datasets

use tracing::debug;

use super::fuzzy::fuzzy_number;
use crate::app::models::{
    Dataset, OverviewTotals, SampleTotals, StatisticsSummary, TrafficTotals,
};
use crate::constants::{CURRENCY_SUFFIX, GMV_MATCH_TERM, columns};

/// Compute summary statistics once all three datasets are present.
///
/// Returns `None` while any dataset slot is unpopulated; partial summaries
/// are never produced. Field access is total over any structurally valid
/// dataset: missing columns and non-numeric values contribute `0`.
pub fn aggregate(
    overview: Option<&Dataset>,
    traffic: Option<&Dataset>,
    sample: Option<&Dataset>,
) -> Option<StatisticsSummary> {
    let (overview, traffic, sample) = match (overview, traffic, sample) {
        (Some(overview), Some(traffic), Some(sample)) => (overview, traffic, sample),
        _ => {
            debug!("Summary skipped: not all dataset slots are populated");
            return None;
        }
    };

    let gmv: f64 = overview
        .records
        .iter()
        .map(|record| fuzzy_number(record, &overview.columns, GMV_MATCH_TERM))
        .sum();

    let summary = StatisticsSummary {
        overview: OverviewTotals {
            page_views: sum_column(overview, columns::PAGE_VIEWS),
            product_visitors: sum_column(overview, columns::PRODUCT_VISITORS),
            orders: sum_column(overview, columns::ORDER_COUNT),
            gmv,
            gmv_display: format_gmv(gmv),
        },
        product_traffic: TrafficTotals {
            exposed_users: sum_column(traffic, columns::EXPOSED_USERS),
            clicked_users: sum_column(traffic, columns::CLICKED_USERS),
            carted_users: sum_column(traffic, columns::CARTED_USERS),
            paid_users: sum_column(traffic, columns::PAID_USERS),
        },
        product_sample: SampleTotals {
            total_products: sample.len(),
            products_with_orders: sample
                .records
                .iter()
                .filter(|record| record.number(columns::PAID_USERS) > 0.0)
                .count(),
        },
    };

    debug!(
        "Summary computed over {} overview, {} traffic, {} sample records",
        overview.len(),
        traffic.len(),
        sample.len()
    );

    Some(summary)
}

/// Sum a column over all records of a dataset
fn sum_column(dataset: &Dataset, column: &str) -> f64 {
    dataset
        .records
        .iter()
        .map(|record| record.number(column))
        .sum()
}

/// Format a GMV total to two decimals with the currency suffix
pub fn format_gmv(total: f64) -> String {
    format!("{:.2} {}", total, CURRENCY_SUFFIX)
}
