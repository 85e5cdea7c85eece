//! Carousel model: current card, card sizes and the displayed offset.

use swoosh_foundation::{Size, Vector2};

/// Authoritative carousel state.
///
/// `offset` is the slider's continuous displacement. Advancing makes it more
/// negative: the resting offset for card `i` is minus the summed extents of
/// every card before it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselModel {
    index: usize,
    num_cards: usize,
    offset: f32,
    card_sizes: Vec<Size>,
}

impl CarouselModel {
    pub fn new(num_cards: usize) -> Self {
        Self {
            index: 0,
            num_cards,
            offset: 0.0,
            card_sizes: Vec::with_capacity(num_cards),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn num_cards(&self) -> usize {
        self.num_cards
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn last_index(&self) -> usize {
        self.num_cards.saturating_sub(1)
    }

    /// Size last reported for card `index`, or zero before the first report.
    pub fn card_size(&self, index: usize) -> Size {
        self.card_sizes.get(index).copied().unwrap_or(Size::ZERO)
    }

    pub fn card_extent(&self, index: usize, axis: Vector2) -> f32 {
        self.card_size(index).extent_along(axis)
    }

    /// Resting offset that puts card `index` in view.
    pub fn target_offset_for(&self, index: usize, axis: Vector2) -> f32 {
        let end = index.min(self.card_sizes.len());
        -self.card_sizes[..end]
            .iter()
            .map(|size| size.extent_along(axis))
            .sum::<f32>()
    }

    pub fn target_offset(&self, axis: Vector2) -> f32 {
        self.target_offset_for(self.index, axis)
    }

    /// Stores a size observation for card `index`, overwriting any previous
    /// one. Reports for cards outside the carousel, or with a non-finite
    /// dimension, are dropped.
    pub fn report_size(&mut self, index: usize, size: Size) -> bool {
        if index >= self.num_cards {
            log::warn!(
                "size report for card {index} ignored: carousel has {} cards",
                self.num_cards
            );
            return false;
        }
        if !(size.width.is_finite() && size.height.is_finite()) {
            log::warn!("size report for card {index} ignored: non-finite size {size:?}");
            return false;
        }
        if self.card_sizes.len() <= index {
            self.card_sizes.resize(index + 1, Size::ZERO);
        }
        self.card_sizes[index] = size;
        true
    }

    /// Changes the card count, clamping the current index into range.
    /// Sizes already reported are kept.
    pub fn set_num_cards(&mut self, num_cards: usize) {
        self.num_cards = num_cards;
        self.index = self.index.min(self.last_index());
        self.check_invariants();
    }

    pub(crate) fn set_index(&mut self, index: usize) {
        self.index = index;
        self.check_invariants();
    }

    pub(crate) fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    pub(crate) fn add_offset(&mut self, delta: f32) {
        self.offset += delta;
    }

    fn check_invariants(&self) {
        debug_assert!(
            self.index <= self.last_index(),
            "index {} outside 0..{}",
            self.index,
            self.num_cards
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_cards() -> CarouselModel {
        let mut model = CarouselModel::new(3);
        for i in 0..3 {
            model.report_size(i, Size::new(100.0, 60.0));
        }
        model
    }

    #[test]
    fn target_offset_is_negative_cumulative_extent() {
        let model = three_cards();
        assert_eq!(model.target_offset_for(0, Vector2::NEGATIVE_X), 0.0);
        assert_eq!(model.target_offset_for(1, Vector2::NEGATIVE_X), -100.0);
        assert_eq!(model.target_offset_for(2, Vector2::NEGATIVE_X), -200.0);
        assert_eq!(model.target_offset_for(2, Vector2::POSITIVE_Y), -120.0);
    }

    #[test]
    fn target_offset_is_non_increasing() {
        let mut model = CarouselModel::new(5);
        model.report_size(0, Size::new(80.0, 10.0));
        model.report_size(2, Size::new(0.0, 10.0));
        model.report_size(3, Size::new(140.0, 10.0));
        let mut previous = f32::INFINITY;
        for index in 0..model.num_cards() {
            let target = model.target_offset_for(index, Vector2::NEGATIVE_X);
            assert!(target <= previous);
            previous = target;
        }
    }

    #[test]
    fn unreported_cards_count_as_zero() {
        let mut model = CarouselModel::new(3);
        model.report_size(1, Size::new(50.0, 50.0));
        assert_eq!(model.card_size(0), Size::ZERO);
        assert_eq!(model.target_offset_for(1, Vector2::NEGATIVE_X), 0.0);
        assert_eq!(model.target_offset_for(2, Vector2::NEGATIVE_X), -50.0);
    }

    #[test]
    fn size_reports_overwrite_in_place() {
        let mut model = three_cards();
        assert!(model.report_size(0, Size::new(120.0, 60.0)));
        assert_eq!(model.target_offset_for(1, Vector2::NEGATIVE_X), -120.0);
        assert!(!model.report_size(3, Size::new(1.0, 1.0)));
    }

    #[test]
    fn non_finite_sizes_are_dropped() {
        let mut model = three_cards();
        assert!(!model.report_size(0, Size::new(f32::NAN, 60.0)));
        assert!(!model.report_size(1, Size::new(100.0, f32::INFINITY)));
        assert_eq!(model.card_size(0), Size::new(100.0, 60.0));
        assert_eq!(model.target_offset_for(2, Vector2::NEGATIVE_X), -200.0);
    }

    #[test]
    fn shrinking_card_count_clamps_index() {
        let mut model = three_cards();
        model.set_index(2);
        model.set_num_cards(2);
        assert_eq!(model.index(), 1);
        model.set_num_cards(0);
        assert_eq!(model.index(), 0);
    }
}
