//! Per-split, per-class sample budgets.

use crate::error::{Result, StrataError};

/// Remaining capacity of every split for every class, stored row-major by
/// split. Cells start at `fraction * class_total` and never drop below zero.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CapacityGrid {
    splits: usize,
    classes: usize,
    cells: Vec<f64>,
}

impl CapacityGrid {
    /// Seeds the grid from split fractions and class totals.
    ///
    /// Also bounds the largest total score any group could produce, the sum
    /// over every cell of `capacity * class_total`, so that overflow is
    /// caught before the first draw.
    ///
    /// # Errors
    /// Returns [`StrataError::CapacityOverflow`] when a capacity or the
    /// score bound is not finite.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "capacities are fractional sample budgets"
    )]
    pub(crate) fn new(fractions: &[f64], class_totals: &[usize]) -> Result<Self> {
        let mut cells = Vec::with_capacity(fractions.len().saturating_mul(class_totals.len()));
        let mut score_bound = 0.0_f64;
        for (split, fraction) in fractions.iter().enumerate() {
            for total in class_totals {
                let capacity = fraction * *total as f64;
                score_bound += capacity * *total as f64;
                if !(capacity.is_finite() && score_bound.is_finite()) {
                    return Err(StrataError::CapacityOverflow { split });
                }
                cells.push(capacity);
            }
        }
        Ok(Self {
            splits: fractions.len(),
            classes: class_totals.len(),
            cells,
        })
    }

    /// Affinity of every split for a group: the dot product of the split's
    /// remaining capacity with the group's class histogram.
    ///
    /// # Errors
    /// Returns [`StrataError::CapacityOverflow`] when a score, or the running
    /// total the weighted draw accumulates, is not finite.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "scores weight fractional capacities by sample counts"
    )]
    pub(crate) fn scores(&self, class_counts: &[usize]) -> Result<Vec<f64>> {
        let mut total = 0.0_f64;
        (0..self.splits)
            .map(|split| {
                let score: f64 = self
                    .row(split)
                    .iter()
                    .zip(class_counts)
                    .map(|(capacity, count)| capacity * *count as f64)
                    .sum();
                total += score;
                if total.is_finite() {
                    Ok(score)
                } else {
                    Err(StrataError::CapacityOverflow { split })
                }
            })
            .collect()
    }

    /// Charges a group's class histogram against `split`, flooring at zero.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "capacities are fractional sample budgets"
    )]
    pub(crate) fn consume(&mut self, split: usize, class_counts: &[usize]) {
        for (capacity, count) in self.row_mut(split).iter_mut().zip(class_counts) {
            *capacity = (*capacity - *count as f64).max(0.0);
        }
    }

    pub(crate) fn row(&self, split: usize) -> &[f64] {
        let start = split.saturating_mul(self.classes);
        self.cells
            .get(start..start.saturating_add(self.classes))
            .unwrap_or_default()
    }

    fn row_mut(&mut self, split: usize) -> &mut [f64] {
        let start = split.saturating_mul(self.classes);
        self.cells
            .get_mut(start..start.saturating_add(self.classes))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_scale_class_totals_by_fraction() {
        let grid = CapacityGrid::new(&[0.5, 0.25], &[4, 8]).expect("finite capacities");
        assert_eq!(grid.row(0), &[2.0, 4.0]);
        assert_eq!(grid.row(1), &[1.0, 2.0]);
    }

    #[test]
    fn scores_are_dot_products() {
        let grid = CapacityGrid::new(&[0.5, 0.25], &[4, 8]).expect("finite capacities");
        let scores = grid.scores(&[1, 2]).expect("finite scores");
        assert_eq!(scores, vec![10.0, 5.0]);
    }

    #[test]
    fn consumption_floors_at_zero() {
        let mut grid = CapacityGrid::new(&[0.5], &[4, 2]).expect("finite capacities");
        grid.consume(0, &[3, 1]);
        assert_eq!(grid.row(0), &[0.0, 0.0]);
        assert_eq!(grid.scores(&[1, 1]).expect("finite scores"), vec![0.0]);
    }

    #[test]
    fn consumption_leaves_other_splits_untouched() {
        let mut grid = CapacityGrid::new(&[1.0, 1.0], &[3]).expect("finite capacities");
        grid.consume(1, &[2]);
        assert_eq!(grid.row(0), &[3.0]);
        assert_eq!(grid.row(1), &[1.0]);
    }

    #[test]
    fn overflowing_capacity_is_rejected() {
        let err = CapacityGrid::new(&[1.0, f64::MAX], &[3]).expect_err("capacity overflows");
        assert_eq!(err, StrataError::CapacityOverflow { split: 1 });
    }

    #[test]
    fn overflowing_score_is_rejected() {
        let grid = CapacityGrid::new(&[f64::MAX / 2.0], &[1, 1]).expect("finite capacities");
        let err = grid.scores(&[2, 2]).expect_err("score overflows");
        assert_eq!(err, StrataError::CapacityOverflow { split: 0 });
    }

    #[test]
    fn capacities_whose_scores_sum_past_the_float_range_are_rejected() {
        // Each capacity is finite on its own, but a group of one sample would
        // score both splits at 1e308 and the weighted draw sums them.
        let err = CapacityGrid::new(&[1.0e308, 1.0e308], &[1]).expect_err("score sum overflows");
        assert_eq!(err, StrataError::CapacityOverflow { split: 1 });
    }

    #[test]
    fn overflowing_score_total_is_rejected() {
        let grid = CapacityGrid::new(&[f64::MAX / 4.0, f64::MAX / 4.0], &[1])
            .expect("score bound is finite");
        let err = grid.scores(&[3]).expect_err("score total overflows");
        assert_eq!(err, StrataError::CapacityOverflow { split: 1 });
    }
}
