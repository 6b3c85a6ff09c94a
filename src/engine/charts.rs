// ==========================================
// Система управления логистикой - dashboard aggregation
// ==========================================
// Read models behind the chart tab. Aggregation happens here, not
// in the presentation shell, so the shell never recomputes over the
// full board. All outputs are deterministic for a given board.
// ==========================================

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::row::Board;
use crate::domain::status::{
    self, FULFILLED, FULFILLED_ADJUSTED, FULFILLED_ADJUSTED_BY_CONSTRAINT,
    UNFULFILLED_BY_CONSTRAINT,
};
use crate::domain::types::StageId;

/// Count of one status value across the whole board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub name: String,
    pub short_name: String,
    pub value: usize,
}

/// Per-stage breakdown of the three chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageBreakdown {
    pub stage: StageId,
    pub fulfilled: usize,
    pub unfulfilled: usize,
    pub adjusted: usize,
}

/// One day of the delivery trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub fulfilled: usize,
    pub unfulfilled: usize,
    pub adjusted: usize,
}

/// Status distribution over all stages, first-seen order.
pub fn status_distribution(board: &Board) -> Vec<StatusCount> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for (_, stage) in board.stages() {
        for row in &stage.rows {
            let entry = counts.entry(row.status.as_str()).or_insert(0);
            if *entry == 0 {
                order.push(row.status.as_str());
            }
            *entry += 1;
        }
    }

    order
        .into_iter()
        .map(|name| StatusCount {
            name: name.to_string(),
            short_name: status::short_label(name).to_string(),
            value: counts[name],
        })
        .collect()
}

/// Per-stage fulfilled / unfulfilled / adjusted counts (exact status
/// matches, the adjustment pair summed), pipeline order.
pub fn stage_breakdown(board: &Board) -> Vec<StageBreakdown> {
    board
        .stages()
        .map(|(stage_id, stage)| {
            let mut breakdown = StageBreakdown {
                stage: stage_id,
                fulfilled: 0,
                unfulfilled: 0,
                adjusted: 0,
            };
            for row in &stage.rows {
                match row.status.as_str() {
                    FULFILLED => breakdown.fulfilled += 1,
                    UNFULFILLED_BY_CONSTRAINT => breakdown.unfulfilled += 1,
                    FULFILLED_ADJUSTED | FULFILLED_ADJUSTED_BY_CONSTRAINT => {
                        breakdown.adjusted += 1
                    }
                    _ => {}
                }
            }
            breakdown
        })
        .collect()
}

/// Synthetic day-by-day series around the current board totals,
/// oldest first, dates formatted the Russian way (dd.mm.yyyy).
///
/// The series is derived, not stored: the same board, reference date
/// and window always produce the same points.
pub fn delivery_trend(board: &Board, reference_date: NaiveDate, days: u32) -> Vec<TrendPoint> {
    let totals = stage_breakdown(board);
    let fulfilled_base: usize = totals.iter().map(|b| b.fulfilled).sum();
    let unfulfilled_base: usize = totals.iter().map(|b| b.unfulfilled).sum();
    let adjusted_base: usize = totals.iter().map(|b| b.adjusted).sum();

    (0..days)
        .map(|offset| {
            let date = reference_date - Duration::days((days - 1 - offset) as i64);
            let seed = date.num_days_from_ce() as u64;
            TrendPoint {
                date: date.format("%d.%m.%Y").to_string(),
                fulfilled: scatter(fulfilled_base, seed),
                unfulfilled: scatter(unfulfilled_base, seed.rotate_left(13)),
                adjusted: scatter(adjusted_base, seed.rotate_left(27)),
            }
        })
        .collect()
}

/// Deterministic wobble of +/- half the base around the base value.
fn scatter(base: usize, seed: u64) -> usize {
    if base == 0 {
        return 0;
    }
    let span = base.max(2);
    let mixed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    let delta = ((mixed >> 33) as usize) % span;
    base + delta - span / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::row::{Row, StageData};

    fn sample_board() -> Board {
        let mut board = Board::default();
        board.demand = StageData::new(vec![
            Row::new("любой", FULFILLED, "", "111111"),
            Row::new("любой", FULFILLED_ADJUSTED, "", "222222"),
            Row::new("любой", UNFULFILLED_BY_CONSTRAINT, "", ""),
            Row::new("любой", UNFULFILLED_BY_CONSTRAINT, "", ""),
        ]);
        board.optimizer_plan = StageData::new(vec![
            Row::new("любой", FULFILLED, "", "44444"),
            Row::new("любой", FULFILLED_ADJUSTED_BY_CONSTRAINT, "", ""),
        ]);
        board
    }

    #[test]
    fn test_distribution_counts_and_order() {
        let distribution = status_distribution(&sample_board());

        let names: Vec<&str> = distribution.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                FULFILLED,
                FULFILLED_ADJUSTED,
                UNFULFILLED_BY_CONSTRAINT,
                FULFILLED_ADJUSTED_BY_CONSTRAINT,
            ]
        );
        assert_eq!(distribution[0].value, 2);
        assert_eq!(distribution[2].value, 2);
        assert_eq!(distribution[1].short_name, "обеспечен с корр.");

        let total: usize = distribution.iter().map(|c| c.value).sum();
        assert_eq!(total, sample_board().row_count());
    }

    #[test]
    fn test_breakdown_sums_adjustment_pair() {
        let breakdown = stage_breakdown(&sample_board());

        assert_eq!(breakdown.len(), 5);
        let demand = &breakdown[0];
        assert_eq!(demand.stage, StageId::Demand);
        assert_eq!(demand.fulfilled, 1);
        assert_eq!(demand.unfulfilled, 2);
        assert_eq!(demand.adjusted, 1);

        let optimizer = &breakdown[1];
        assert_eq!(optimizer.adjusted, 1);

        // Empty stages report zeroes, not absence.
        assert_eq!(breakdown[4].fulfilled, 0);
    }

    #[test]
    fn test_trend_is_deterministic_and_dated() {
        let board = sample_board();
        let date = NaiveDate::from_ymd_opt(2024, 9, 18).unwrap();

        let week = delivery_trend(&board, date, 7);
        assert_eq!(week.len(), 7);
        assert_eq!(week[6].date, "18.09.2024");
        assert_eq!(week[0].date, "12.09.2024");

        // Same inputs, same series.
        assert_eq!(week, delivery_trend(&board, date, 7));
    }

    #[test]
    fn test_trend_on_empty_board_is_flat_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 18).unwrap();
        let series = delivery_trend(&Board::default(), date, 3);
        assert!(series
            .iter()
            .all(|p| p.fulfilled == 0 && p.unfulfilled == 0 && p.adjusted == 0));
    }
}
