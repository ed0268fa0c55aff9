//! Fixed boarding-order baselines.

use super::trait_::Policy;
use crate::RowId;

/// Boards the rearmost row that still has passengers waiting.
///
/// Later passengers walk past rows that are already seated, which keeps the
/// aisle moving and collects walking reward.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackToFrontPolicy;

impl Policy for BackToFrontPolicy {
    fn select_row(&mut self, _observation: &[i32], mask: &[bool]) -> Option<RowId> {
        mask.iter().rposition(|&valid| valid)
    }

    fn name(&self) -> &str {
        "back_to_front"
    }
}

/// Boards the frontmost row that still has passengers waiting.
///
/// Passengers pile up behind the row being seated, but the last releases
/// only have a short walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontToBackPolicy;

impl Policy for FrontToBackPolicy {
    fn select_row(&mut self, _observation: &[i32], mask: &[bool]) -> Option<RowId> {
        mask.iter().position(|&valid| valid)
    }

    fn name(&self) -> &str {
        "front_to_back"
    }
}
