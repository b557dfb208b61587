//! Linear maturation of a custody balance over `[start, end)`.
//! - now >= end (or no anchor)       => the whole balance
//! - end <= start                    => the whole balance (degenerate window)
//! - otherwise                       => balance * (now - start) / (end - start), truncated

use anchor_lang::prelude::*;

use crate::error::{VestingError, VestingResult};

/// Anchor and end of the schedule currently running over the custody balance.
///
/// `start` is unset until a deposit anchors the schedule, and again after a
/// claim empties custody. `end` is unset until the first deposit; an unset
/// end reads as "already matured".
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingSchedule {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl VestingSchedule {
    pub const SIZE: usize =
        1 + 8 + // start (Option<i64>)
        1 + 8;  // end (Option<i64>)

    /// Move the end to `new_end`, anchoring the schedule at `now` if nothing
    /// anchored it yet. Once set, the end never moves earlier.
    pub fn extend(&mut self, now: i64, new_end: i64) -> VestingResult<()> {
        if matches!(self.end, Some(end) if new_end < end) {
            return Err(VestingError::VestingPeriodDecrease);
        }
        if self.start.is_none() {
            self.start = Some(now);
        }
        self.end = Some(new_end);
        Ok(())
    }

    /// Re-anchor at `now`: whatever remains in custody vests afresh toward the
    /// unchanged end.
    pub fn restart(&mut self, now: i64) {
        self.start = Some(now);
    }

    /// Custody is empty: drop the anchor so the next deposit anchors at its
    /// own time. The end is kept for the monotonic check.
    pub fn drain(&mut self) {
        self.start = None;
    }

    pub fn claimable(&self, balance: u64, now: i64) -> VestingResult<u64> {
        match self.end {
            Some(end) => linear_claimable(balance, self.start, end, now),
            None => Ok(balance),
        }
    }
}

pub fn linear_claimable(
    balance: u64,
    start: Option<i64>,
    end: i64,
    now: i64,
) -> VestingResult<u64> {
    if now >= end {
        return Ok(balance);
    }
    let start = match start {
        Some(s) => s,
        None => return Ok(balance),
    };
    if end <= start {
        return Ok(balance);
    }
    if now <= start {
        return Ok(0);
    }

    // end > now > start, so both spans are positive.
    let elapsed = (now as i128 - start as i128) as u128;
    let window = (end as i128 - start as i128) as u128;
    let v = (balance as u128)
        .checked_mul(elapsed)
        .ok_or(VestingError::MathOverflow)?
        .checked_div(window)
        .ok_or(VestingError::MathOverflow)?;
    u64::try_from(v).map_err(|_| VestingError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_767_225_600; // 2026-01-01 00:00:00 UTC

    #[test]
    fn linear_between_bounds() {
        let end = T0 + 10_000;
        assert_eq!(linear_claimable(1_000, Some(T0), end, T0).unwrap(), 0);
        assert_eq!(linear_claimable(1_000, Some(T0), end, T0 + 1).unwrap(), 0);
        assert_eq!(linear_claimable(1_000, Some(T0), end, T0 + 10).unwrap(), 1);
        assert_eq!(linear_claimable(1_000, Some(T0), end, T0 + 2_500).unwrap(), 250);
        assert_eq!(linear_claimable(1_000, Some(T0), end, T0 + 9_999).unwrap(), 999);
        assert_eq!(linear_claimable(1_000, Some(T0), end, end).unwrap(), 1_000);
        assert_eq!(linear_claimable(1_000, Some(T0), end, end + 86_400).unwrap(), 1_000);
    }

    #[test]
    fn truncates_toward_zero() {
        // 7 * 1 / 3 = 2.33..
        assert_eq!(linear_claimable(7, Some(0), 3, 1).unwrap(), 2);
        // 100 * 3333 / 10000 = 33.33
        assert_eq!(linear_claimable(100, Some(T0), T0 + 10_000, T0 + 3_333).unwrap(), 33);
    }

    #[test]
    fn no_schedule_reads_as_matured() {
        assert_eq!(linear_claimable(0, None, 0, T0).unwrap(), 0);
        assert_eq!(linear_claimable(42, None, 0, T0).unwrap(), 42);
        // An end in the future without an anchor cannot be interpolated.
        assert_eq!(linear_claimable(42, None, T0 + 5, T0).unwrap(), 42);
    }

    #[test]
    fn zero_length_window_is_fully_matured() {
        // Deposit whose end equals the deposit time.
        assert_eq!(linear_claimable(500, Some(T0), T0, T0).unwrap(), 500);
        // Anchor re-set past the end by a claim.
        assert_eq!(linear_claimable(500, Some(T0 + 10), T0, T0 - 1).unwrap(), 500);
    }

    #[test]
    fn clock_before_anchor_yields_nothing() {
        assert_eq!(linear_claimable(500, Some(T0), T0 + 100, T0 - 50).unwrap(), 0);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let got = linear_claimable(u64::MAX, Some(i64::MIN), i64::MAX, 0).unwrap();
        assert!(got <= u64::MAX / 2 + 1);
        assert_eq!(linear_claimable(u64::MAX, Some(0), i64::MAX, i64::MAX - 1).unwrap(), u64::MAX - 3);
    }

    #[test]
    fn extend_anchors_once_and_never_shortens() {
        let mut s = VestingSchedule::default();
        s.extend(T0, T0 + 10_000).unwrap();
        assert_eq!(s, VestingSchedule { start: Some(T0), end: Some(T0 + 10_000) });

        s.extend(T0 + 600, T0 + 10_000).unwrap();
        assert_eq!(s.start, Some(T0));

        s.extend(T0 + 700, T0 + 20_000).unwrap();
        assert_eq!(s, VestingSchedule { start: Some(T0), end: Some(T0 + 20_000) });

        let res = s.extend(T0 + 800, T0 + 19_999);
        assert!(matches!(res, Err(VestingError::VestingPeriodDecrease)));
        assert_eq!(s, VestingSchedule { start: Some(T0), end: Some(T0 + 20_000) });
    }

    #[test]
    fn restart_keeps_end() {
        let mut s = VestingSchedule { start: Some(T0), end: Some(T0 + 10_000) };
        s.restart(T0 + 5_000);
        assert_eq!(s, VestingSchedule { start: Some(T0 + 5_000), end: Some(T0 + 10_000) });
        assert_eq!(s.claimable(50, T0 + 7_500).unwrap(), 25);
    }

    #[test]
    fn first_end_may_be_anywhere() {
        let mut s = VestingSchedule::default();
        s.extend(T0, -5).unwrap();
        assert_eq!(s, VestingSchedule { start: Some(T0), end: Some(-5) });
        assert_eq!(s.claimable(10, T0).unwrap(), 10);
    }

    #[test]
    fn unset_end_reads_as_matured() {
        assert_eq!(VestingSchedule::default().claimable(9, T0).unwrap(), 9);
    }

    #[test]
    fn drain_drops_anchor_but_keeps_end() {
        let mut s = VestingSchedule { start: Some(T0), end: Some(T0 + 10_000) };
        s.drain();
        assert_eq!(s, VestingSchedule { start: None, end: Some(T0 + 10_000) });

        // Next deposit anchors at its own time and still cannot shorten.
        let res = s.extend(T0 + 20_000, T0 + 9_000);
        assert!(matches!(res, Err(VestingError::VestingPeriodDecrease)));
        s.extend(T0 + 20_000, T0 + 30_000).unwrap();
        assert_eq!(s, VestingSchedule { start: Some(T0 + 20_000), end: Some(T0 + 30_000) });
    }
}
