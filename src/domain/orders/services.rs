use crate::domain::orders::{Money, Order, SupplyDate};
use std::collections::BTreeMap;

/// One point of the chart series: a supply date and the summed USD cost of
/// every order delivered on that date.
#[derive(Debug, Clone, PartialEq)]
pub struct DatePoint {
    pub date: SupplyDate,
    pub sum: Money,
}

/// Date-ordered cost series derived from the current order list.
///
/// Labels are the distinct supply dates present in the data, ascending
/// lexicographically; dates with no orders never appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateSeries {
    points: Vec<DatePoint>,
}

impl DateSeries {
    pub fn points(&self) -> &[DatePoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.date.value()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.sum.value()).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value range of the series (min, max), None when empty
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_value = f64::INFINITY;
        let mut max_value = f64::NEG_INFINITY;
        for point in &self.points {
            min_value = min_value.min(point.sum.value());
            max_value = max_value.max(point.sum.value());
        }

        Some((min_value, max_value))
    }
}

/// Доменный сервис агрегации заказов
///
/// Both operations are pure projections over the current order list and are
/// recomputed from scratch on every render; nothing is cached or invalidated.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Running total: sum of `price_usd` over all orders, in input order.
    /// Empty input yields zero.
    pub fn total(&self, orders: &[Order]) -> Money {
        let mut total = Money::zero();
        for order in orders {
            total += order.price_usd;
        }
        total
    }

    /// Per-date cost series for the chart.
    ///
    /// Groups orders by `supply_date` and sums `price_usd` within each group.
    /// Duplicate `order_id`s are NOT merged; identity plays no role here,
    /// only the date key does.
    pub fn date_series(&self, orders: &[Order]) -> DateSeries {
        let mut sums: BTreeMap<&SupplyDate, f64> = BTreeMap::new();

        for order in orders {
            *sums.entry(&order.supply_date).or_insert(0.0) += order.price_usd.value();
        }

        // BTreeMap iterates keys ascending, which for zero-padded ISO date
        // strings is exactly calendar order
        let points = sums
            .into_iter()
            .map(|(date, sum)| DatePoint { date: date.clone(), sum: Money::from(sum) })
            .collect();

        DateSeries { points }
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
