//! Hysteresis-based choice of the next current card.

/// Offsets the predicted resting position must cross to change card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexThresholds {
    /// Crossing this moves to the next card.
    pub next: f32,
    /// Crossing this moves to the previous card.
    pub prev: f32,
}

impl IndexThresholds {
    /// Thresholds straddling `target` by `fraction` of the card's extent.
    pub fn around(target: f32, extent: f32, fraction: f32) -> Self {
        let margin = extent * fraction;
        Self {
            next: target - margin,
            prev: target + margin,
        }
    }

    /// Classifies a predicted resting offset.
    ///
    /// Normally `next <= prev` (advancing lowers the offset). If a caller
    /// hands in thresholds the other way round, the comparisons flip with
    /// them.
    pub fn decide(&self, resting_offset: f32) -> IndexDecision {
        let (crossed_next, crossed_prev) = if self.next <= self.prev {
            (resting_offset < self.next, resting_offset > self.prev)
        } else {
            (resting_offset > self.next, resting_offset < self.prev)
        };
        if crossed_next {
            IndexDecision::Advance
        } else if crossed_prev {
            IndexDecision::Retreat
        } else {
            IndexDecision::Stay
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexDecision {
    Advance,
    Retreat,
    Stay,
}

impl IndexDecision {
    /// Applies the decision to `index`, clamped to `0..num_cards`.
    pub fn apply(self, index: usize, num_cards: usize) -> usize {
        let last = num_cards.saturating_sub(1);
        let index = index.min(last);
        match self {
            IndexDecision::Advance => (index + 1).min(last),
            IndexDecision::Retreat => index.saturating_sub(1),
            IndexDecision::Stay => index,
        }
    }
}

/// Picks the card that becomes current after a release.
///
/// `target` and `extent` describe the current card: its resting offset and
/// its size along the swipe axis.
pub fn select_index(
    resting_offset: f32,
    index: usize,
    num_cards: usize,
    target: f32,
    extent: f32,
    fraction: f32,
) -> usize {
    let thresholds = IndexThresholds::around(target, extent, fraction);
    let decision = thresholds.decide(resting_offset);
    log::trace!(
        "index selection: resting {resting_offset}, thresholds {thresholds:?} -> {decision:?}"
    );
    decision.apply(index, num_cards)
}
