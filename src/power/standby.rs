//! Rank standby state machine.
//!
//! Tracks which banks of each rank hold an open row and turns changes of the
//! rank-level state (active if any bank is active) into closed intervals.
//! Intervals are emitted only when the rank state flips, plus one final
//! interval per rank on flush, so idle cycles are attributed without
//! iterating over every cycle.
//!
//! Activations take effect at issue time. Precharges take effect at their
//! completion time and are queued until the clock reaches it.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Standby state of a bank or of a whole rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandbyState {
    /// No open row.
    Precharged,
    /// At least one open row.
    Active,
}

/// A closed span of cycles during which a rank stayed in one state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub rank: usize,
    pub state: StandbyState,
    pub cycles: u64,
}

#[derive(Clone, Debug)]
struct RankStandby {
    open_banks: Vec<bool>,
    open_count: usize,
    state: StandbyState,
    last_transition: u64,
}

impl RankStandby {
    fn new(banks: usize) -> Self {
        Self {
            open_banks: vec![false; banks],
            open_count: 0,
            state: StandbyState::Precharged,
            last_transition: 0,
        }
    }

    fn derived_state(&self) -> StandbyState {
        if self.open_count > 0 {
            StandbyState::Active
        } else {
            StandbyState::Precharged
        }
    }

    fn set_bank(&mut self, bank: usize, open: bool) {
        if self.open_banks[bank] != open {
            self.open_banks[bank] = open;
            if open {
                self.open_count += 1;
            } else {
                self.open_count -= 1;
            }
        }
    }

    fn close_all(&mut self) {
        self.open_banks.iter_mut().for_each(|b| *b = false);
        self.open_count = 0;
    }

    /// Closes the open interval at `now` if the derived state changed.
    fn settle(&mut self, rank: usize, now: u64) -> Option<Interval> {
        let next = self.derived_state();
        if next == self.state {
            return None;
        }
        let closed = self.close_interval(rank, now);
        self.state = next;
        Some(closed)
    }

    fn close_interval(&mut self, rank: usize, now: u64) -> Interval {
        let cycles = now.saturating_sub(self.last_transition);
        self.last_transition = self.last_transition.max(now);
        Interval {
            rank,
            state: self.state,
            cycles,
        }
    }
}

/// A precharge that completes at `time`. `bank == None` closes every bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct PendingPrecharge {
    time: u64,
    rank: usize,
    bank: Option<usize>,
}

/// Standby bookkeeping for all ranks of one channel.
#[derive(Clone, Debug)]
pub struct StandbyTracker {
    ranks: Vec<RankStandby>,
    pending: BinaryHeap<Reverse<PendingPrecharge>>,
}

impl StandbyTracker {
    /// Creates a tracker with every bank precharged at cycle 0.
    pub fn new(ranks: usize, banks: usize) -> Self {
        Self {
            ranks: (0..ranks).map(|_| RankStandby::new(banks)).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Current derived state of `rank`.
    pub fn rank_state(&self, rank: usize) -> StandbyState {
        self.ranks[rank].state
    }

    /// Returns `true` if `bank` of `rank` currently holds an open row.
    pub fn bank_open(&self, rank: usize, bank: usize) -> bool {
        self.ranks[rank].open_banks[bank]
    }

    /// Applies every queued precharge completing at or before `now`, in
    /// completion order.
    pub fn advance(&mut self, now: u64, sink: &mut impl FnMut(Interval)) {
        while let Some(&Reverse(next)) = self.pending.peek() {
            if next.time > now {
                break;
            }
            self.pending.pop();
            let rank = &mut self.ranks[next.rank];
            match next.bank {
                Some(bank) => rank.set_bank(bank, false),
                None => rank.close_all(),
            }
            if let Some(interval) = rank.settle(next.rank, next.time) {
                sink(interval);
            }
        }
    }

    /// Opens `bank` of `rank` at `now`.
    pub fn activate(&mut self, rank: usize, bank: usize, now: u64, sink: &mut impl FnMut(Interval)) {
        let state = &mut self.ranks[rank];
        state.set_bank(bank, true);
        if let Some(interval) = state.settle(rank, now) {
            sink(interval);
        }
    }

    /// Queues a precharge of `bank` (or of every bank when `None`) of `rank`
    /// that completes at `at`.
    pub fn schedule_precharge(&mut self, rank: usize, bank: Option<usize>, at: u64) {
        self.pending.push(Reverse(PendingPrecharge {
            time: at,
            rank,
            bank,
        }));
    }

    /// Applies precharges completing by `end` and closes every rank's open
    /// interval at `end`.
    pub fn flush(&mut self, end: u64, sink: &mut impl FnMut(Interval)) {
        self.advance(end, sink);
        for (i, rank) in self.ranks.iter_mut().enumerate() {
            sink(rank.close_interval(i, end));
        }
    }
}
