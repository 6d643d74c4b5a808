/// Number of items shown at once.
pub const WINDOW: usize = 3;

/// A circular window of up to [`WINDOW`] items over a fixed list.
///
/// The start index only moves through [`Carousel::advance`] and
/// [`Carousel::retreat`], so it always stays in `0..=len - min(WINDOW, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<'a, T> {
    items: &'a [T],
    start: usize,
}

impl<'a, T> Carousel<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items, start: 0 }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in the visible window: `min(WINDOW, len)`.
    pub fn window_len(&self) -> usize {
        WINDOW.min(self.items.len())
    }

    /// Number of distinct windows `advance` steps through before wrapping.
    pub fn period(&self) -> usize {
        self.items.len().saturating_sub(WINDOW) + 1
    }

    pub fn advance(&mut self) {
        self.start = if self.start + WINDOW >= self.items.len() {
            0
        } else {
            self.start + 1
        };
    }

    pub fn retreat(&mut self) {
        self.start = if self.start == 0 {
            self.items.len().saturating_sub(WINDOW)
        } else {
            self.start - 1
        };
    }

    /// Items from `start` to the end, followed by the items before `start`,
    /// truncated to the window.
    pub fn visible(&self) -> impl Iterator<Item = &'a T> {
        let (before, after) = self.items.split_at(self.start);
        after.iter().chain(before.iter()).take(WINDOW)
    }

    /// Positions in the underlying list of the visible items.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> {
        let len = self.items.len();
        let start = self.start;
        (0..self.window_len()).map(move |offset| (start + offset) % len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn numbers(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_starts_at_first_item() {
        let items = numbers(6);
        let carousel = Carousel::new(&items);
        assert_eq!(carousel.start(), 0);
        assert_eq!(carousel.visible().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_advance_wraps_at_last_full_window() {
        let items = numbers(6);
        let mut carousel = Carousel::new(&items);
        let mut starts = Vec::new();
        for _ in 0..5 {
            carousel.advance();
            starts.push(carousel.start());
        }
        // 3 + 3 >= 6 sends the index back to 0 instead of showing a wrapped window
        assert_eq!(starts, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_retreat_from_zero_jumps_to_last_full_window() {
        let items = numbers(6);
        let mut carousel = Carousel::new(&items);
        carousel.retreat();
        assert_eq!(carousel.start(), 3);
        assert_eq!(carousel.visible().copied().collect::<Vec<_>>(), vec![3, 4, 5]);
        carousel.retreat();
        assert_eq!(carousel.start(), 2);
    }

    #[test]
    fn test_advance_cycle_closes() {
        for n in 3..12 {
            let items = numbers(n);
            let mut carousel = Carousel::new(&items);
            for start in 0..carousel.period() {
                assert_eq!(carousel.start(), start);
                let before = carousel.start();
                for _ in 0..carousel.period() {
                    carousel.advance();
                }
                assert_eq!(carousel.start(), before, "n = {n}");
                carousel.advance();
            }
        }
    }

    #[test]
    fn test_advance_n_times_closes_when_period_divides_len() {
        for n in [3, 4] {
            let items = numbers(n);
            let mut carousel = Carousel::new(&items);
            for _ in 0..n {
                carousel.advance();
            }
            assert_eq!(carousel.start(), 0);
        }
    }

    #[test]
    fn test_retreat_undoes_advance() {
        for n in 3..12 {
            let items = numbers(n);
            let mut carousel = Carousel::new(&items);
            for _ in 0..carousel.period() {
                let before = carousel.start();
                let mut probe = carousel.clone();
                probe.advance();
                probe.retreat();
                assert_eq!(probe.start(), before, "n = {n}");
                carousel.advance();
            }
        }
    }

    #[test]
    fn test_visible_has_window_len_without_duplicates() {
        for n in 3..12 {
            let items = numbers(n);
            let mut carousel = Carousel::new(&items);
            for _ in 0..2 * n {
                let visible = carousel.visible().copied().collect::<Vec<_>>();
                assert_eq!(visible.len(), WINDOW);
                assert_eq!(visible.iter().collect::<HashSet<_>>().len(), WINDOW);
                assert_eq!(carousel.visible_indices().collect::<Vec<_>>(), visible);
                carousel.advance();
            }
        }
    }

    #[test]
    fn test_small_lists_show_everything() {
        for n in 1..WINDOW {
            let items = numbers(n);
            let mut carousel = Carousel::new(&items);
            assert_eq!(carousel.window_len(), n);
            assert_eq!(carousel.visible().count(), n);

            carousel.advance();
            assert_eq!(carousel.start(), 0);
            carousel.retreat();
            assert_eq!(carousel.start(), 0);
            assert_eq!(carousel.visible().copied().collect::<Vec<_>>(), items);
        }
    }

    #[test]
    fn test_empty_list_is_total() {
        let items: Vec<usize> = Vec::new();
        let mut carousel = Carousel::new(&items);
        carousel.advance();
        carousel.retreat();
        assert!(carousel.is_empty());
        assert_eq!(carousel.start(), 0);
        assert_eq!(carousel.visible().count(), 0);
        assert_eq!(carousel.visible_indices().count(), 0);
    }
}
