//! Preload gate and auto-advance cursor for the showcase carousel.
//!
//! The state is a plain value driven through [`yew::Reducible`], so the
//! whole `Loading -> Ready` flow can be exercised without a browser.

use std::collections::BTreeSet;
use std::rc::Rc;

use log::{info, warn};
use yew::Reducible;

use crate::config::CAROUSEL_PERIOD_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

pub enum ShowcaseAction {
    /// Start over for a (possibly new) image list. Anything tagged with an
    /// older generation is dropped from then on.
    Reset { generation: u64, len: usize },
    Settled {
        generation: u64,
        index: usize,
        outcome: LoadOutcome,
    },
    Tick,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseState {
    generation: u64,
    len: usize,
    loaded: BTreeSet<usize>,
    failed: BTreeSet<usize>,
    current: usize,
    phase: Phase,
}

impl ShowcaseState {
    pub fn new(len: usize) -> Self {
        Self {
            generation: 0,
            len,
            loaded: BTreeSet::new(),
            failed: BTreeSet::new(),
            current: 0,
            phase: Phase::Loading,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.current
    }

    #[cfg(test)]
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.contains(&index)
    }

    /// Text for the loading indicator, e.g. "Loading... 1/3" or
    /// "2/3 loaded, 1 failed".
    pub fn loading_label(&self) -> String {
        if self.failed.is_empty() {
            format!("Loading... {}/{}", self.loaded.len(), self.len)
        } else {
            format!(
                "{}/{} loaded, {} failed",
                self.loaded.len(),
                self.len,
                self.failed.len()
            )
        }
    }

    /// Index of the image to draw, or `None` while the cursor sits on a
    /// slot that has not finished loading.
    pub fn displayed_index(&self) -> Option<usize> {
        self.is_loaded(self.current).then_some(self.current)
    }

    pub fn shows_indicator(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn shows_dots(&self) -> bool {
        !self.loaded.is_empty()
    }

    /// `(index, is_current)` for every position dot.
    pub fn dots(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.len).map(move |i| (i, i == self.current))
    }

    /// The auto-advance interval should exist exactly while this holds.
    pub fn timer_armed(&self) -> bool {
        self.is_ready() && self.len > 0
    }

    /// Dependencies of the auto-advance effect.
    pub fn timer_key(&self) -> (bool, usize) {
        (self.timer_armed(), self.len)
    }

    fn settle(&self, index: usize, outcome: LoadOutcome) -> Option<Self> {
        if index >= self.len {
            return None;
        }
        match outcome {
            LoadOutcome::Loaded => {
                if self.loaded.contains(&index) {
                    return None;
                }
                let mut next = self.clone();
                next.loaded.insert(index);
                next.failed.remove(&index);
                if next.phase == Phase::Loading && next.loaded.len() == next.len {
                    info!("Showcase ready, {} images loaded", next.len);
                    next.phase = Phase::Ready;
                }
                Some(next)
            }
            LoadOutcome::Failed => {
                if self.loaded.contains(&index) || self.failed.contains(&index) {
                    return None;
                }
                warn!("Showcase image {} failed to load", index);
                let mut next = self.clone();
                next.failed.insert(index);
                Some(next)
            }
        }
    }
}

/// Period of the auto-advance interval for a `(armed, len)` effect key, or
/// `None` when no interval may exist.
pub fn advance_period(armed: bool, len: usize) -> Option<u32> {
    (armed && len > 0).then_some(CAROUSEL_PERIOD_MS)
}

impl Reducible for ShowcaseState {
    type Action = ShowcaseAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ShowcaseAction::Reset { generation, len } => Rc::new(Self {
                generation,
                ..Self::new(len)
            }),
            ShowcaseAction::Settled {
                generation,
                index,
                outcome,
            } => {
                if generation != self.generation {
                    return self;
                }
                match self.settle(index, outcome) {
                    Some(next) => Rc::new(next),
                    None => self,
                }
            }
            ShowcaseAction::Tick => {
                if !self.timer_armed() {
                    return self;
                }
                Rc::new(Self {
                    current: (self.current + 1) % self.len,
                    ..(*self).clone()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEN: u64 = 1;

    fn fresh(len: usize) -> Rc<ShowcaseState> {
        Rc::new(ShowcaseState::new(len)).reduce(ShowcaseAction::Reset { generation: GEN, len })
    }

    fn loaded(state: Rc<ShowcaseState>, index: usize) -> Rc<ShowcaseState> {
        state.reduce(ShowcaseAction::Settled {
            generation: GEN,
            index,
            outcome: LoadOutcome::Loaded,
        })
    }

    fn permutations(items: Vec<usize>) -> Vec<Vec<usize>> {
        if items.len() <= 1 {
            return vec![items];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.clone();
            let head = rest.remove(i);
            for mut tail in permutations(rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn starts_loading_with_cursor_at_zero() {
        let state = fresh(3);
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.current(), 0);
        assert!(state.shows_indicator());
        assert!(!state.shows_dots());
        assert!(!state.timer_armed());
        assert_eq!(state.displayed_index(), None);
    }

    #[test]
    fn ready_fires_once_for_every_completion_order() {
        for n in 1..=5 {
            for order in permutations((0..n).collect()) {
                let mut state = fresh(n);
                let mut transitions = 0;
                for (step, &index) in order.iter().enumerate() {
                    let was_ready = state.is_ready();
                    state = loaded(state, index);
                    if !was_ready && state.is_ready() {
                        transitions += 1;
                    }
                    if step + 1 < n {
                        assert_eq!(state.phase(), Phase::Loading, "order {:?}", order);
                        assert!(!state.timer_armed());
                    }
                }
                assert!(state.is_ready(), "order {:?}", order);
                assert_eq!(transitions, 1, "order {:?}", order);
            }
        }
    }

    #[test]
    fn out_of_order_completion_waits_for_last_slot() {
        let mut state = fresh(3);
        state = loaded(state, 1);
        assert_eq!(state.phase(), Phase::Loading);
        state = loaded(state, 0);
        assert_eq!(state.phase(), Phase::Loading);
        state = loaded(state, 2);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.current(), 0);
        assert!(!state.shows_indicator());
        assert_eq!(state.displayed_index(), Some(0));
    }

    #[test]
    fn ticks_before_ready_are_ignored() {
        let mut state = fresh(3);
        state = loaded(state, 0);
        let before = Rc::clone(&state);
        state = state.reduce(ShowcaseAction::Tick);
        assert!(Rc::ptr_eq(&before, &state));
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn cursor_cycles_through_every_index() {
        let mut state = fresh(3);
        for i in 0..3 {
            state = loaded(state, i);
        }
        let mut visited = vec![state.current()];
        for _ in 0..7 {
            state = state.reduce(ShowcaseAction::Tick);
            visited.push(state.current());
        }
        assert_eq!(visited, vec![0, 1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn single_image_stays_on_zero() {
        let mut state = loaded(fresh(1), 0);
        assert!(state.is_ready());
        for _ in 0..3 {
            state = state.reduce(ShowcaseAction::Tick);
            assert_eq!(state.current(), 0);
        }
    }

    #[test]
    fn duplicate_load_does_not_change_state() {
        let state = loaded(fresh(3), 1);
        let again = loaded(Rc::clone(&state), 1);
        assert!(Rc::ptr_eq(&state, &again));
        assert_eq!(again.loaded_count(), 1);
    }

    #[test]
    fn loaded_set_never_shrinks() {
        let mut state = fresh(4);
        let mut last = 0;
        for index in [2, 2, 0, 3, 0, 1, 1] {
            state = loaded(state, index);
            assert!(state.loaded_count() >= last);
            last = state.loaded_count();
        }
        for _ in 0..5 {
            state = state.reduce(ShowcaseAction::Tick);
            assert_eq!(state.loaded_count(), 4);
        }
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let state = fresh(2);
        let after = loaded(Rc::clone(&state), 7);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn stale_generation_cannot_mutate() {
        let state = fresh(2);
        let replaced = state.reduce(ShowcaseAction::Reset {
            generation: GEN + 1,
            len: 2,
        });
        let after = Rc::clone(&replaced).reduce(ShowcaseAction::Settled {
            generation: GEN,
            index: 0,
            outcome: LoadOutcome::Loaded,
        });
        assert!(Rc::ptr_eq(&replaced, &after));
        assert_eq!(after.loaded_count(), 0);
    }

    #[test]
    fn reset_returns_to_loading_and_disarms_timer() {
        let mut state = fresh(2);
        state = loaded(state, 0);
        state = loaded(state, 1);
        state = state.reduce(ShowcaseAction::Tick);
        assert!(state.timer_armed());

        state = state.reduce(ShowcaseAction::Reset {
            generation: GEN + 1,
            len: 4,
        });
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.len(), 4);
        assert_eq!(state.current(), 0);
        assert_eq!(state.loaded_count(), 0);
        assert!(!state.timer_armed());
        assert!(state.shows_indicator());
    }

    #[test]
    fn failed_load_keeps_loading() {
        let mut state = fresh(2);
        state = loaded(state, 0);
        state = state.reduce(ShowcaseAction::Settled {
            generation: GEN,
            index: 1,
            outcome: LoadOutcome::Failed,
        });
        assert_eq!(state.phase(), Phase::Loading);
        assert_eq!(state.loading_label(), "1/2 loaded, 1 failed");
        assert!(state.shows_indicator());
        assert!(!state.is_loaded(1));
    }

    #[test]
    fn dots_appear_with_first_load_and_track_cursor() {
        let mut state = fresh(3);
        assert!(!state.shows_dots());
        state = loaded(state, 2);
        assert!(state.shows_dots());
        assert_eq!(state.dots().count(), 3);
        state = loaded(state, 0);
        state = loaded(state, 1);
        state = state.reduce(ShowcaseAction::Tick);
        let current: Vec<usize> = state.dots().filter(|(_, on)| *on).map(|(i, _)| i).collect();
        assert_eq!(current, vec![1]);
    }

    #[test]
    fn cursor_on_unloaded_slot_renders_nothing() {
        let state = loaded(fresh(3), 2);
        assert_eq!(state.current(), 0);
        assert_eq!(state.displayed_index(), None);
    }

    #[test]
    fn carousel_period_is_three_seconds() {
        assert_eq!(CAROUSEL_PERIOD_MS, 3000);
    }

    #[test]
    fn no_interval_unless_armed_with_images() {
        assert_eq!(advance_period(false, 3), None);
        assert_eq!(advance_period(true, 0), None);
        assert_eq!(advance_period(true, 3), Some(3000));
    }

    #[test]
    fn interval_follows_lifecycle() {
        let period = |s: &Rc<ShowcaseState>| {
            let (armed, len) = s.timer_key();
            advance_period(armed, len)
        };
        let mut state = fresh(3);
        assert_eq!(period(&state), None);
        state = loaded(state, 0);
        state = loaded(state, 2);
        assert_eq!(period(&state), None);
        state = loaded(state, 1);
        assert_eq!(period(&state), Some(CAROUSEL_PERIOD_MS));

        // A new image list drops the interval until everything is back in
        state = state.reduce(ShowcaseAction::Reset {
            generation: GEN + 1,
            len: 2,
        });
        assert_eq!(period(&state), None);
        assert_ne!(state.timer_key(), (true, 3));
    }

    #[test]
    fn one_advance_per_elapsed_period() {
        let mut state = fresh(3);
        for i in 0..3 {
            state = loaded(state, i);
        }
        let (armed, len) = state.timer_key();
        let period = advance_period(armed, len).unwrap();
        let elapsed_ms = 10_000;
        for _ in 0..elapsed_ms / period {
            state = state.reduce(ShowcaseAction::Tick);
        }
        // 10s at 3s per tick is three ticks: 0 -> 1 -> 2 -> 0
        assert_eq!(state.current(), 0);
        state = state.reduce(ShowcaseAction::Tick);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn loading_label_counts_progress() {
        let mut state = fresh(3);
        assert_eq!(state.loading_label(), "Loading... 0/3");
        state = loaded(state, 1);
        assert_eq!(state.loading_label(), "Loading... 1/3");
    }
}
