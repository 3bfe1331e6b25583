//! Plain-text comparison table for a sweep.

use std::fmt;

use crate::metrics::ScenarioResult;

/// One row per scenario: pool size, wait and delivery means, utilization.
pub struct ComparisonTable<'a>(pub &'a [ScenarioResult]);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>7} {:>8} {:>10} {:>10} {:>12} {:>9} {:>9} {:>9}",
            "drivers", "orders", "delivered", "avg_wait", "avg_delivery", "util_%", "busy_%", "max_q"
        )?;
        for r in self.0 {
            writeln!(
                f,
                "{:>7} {:>8} {:>10} {:>10.2} {:>12.2} {:>9.1} {:>9.1} {:>9}",
                r.num_drivers,
                r.orders_placed,
                r.deliveries_completed,
                r.avg_wait,
                r.avg_delivery,
                r.utilization_pct,
                r.service_utilization_pct,
                r.max_queue_length
            )?;
        }
        Ok(())
    }
}

pub fn comparison_table(results: &[ScenarioResult]) -> String {
    ComparisonTable(results).to_string()
}
