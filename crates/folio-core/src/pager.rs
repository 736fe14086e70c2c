use std::ops::Range;

// ---------------------------------------------------------------------------
// PagerMode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerMode {
    /// One item at a time; previous/next wrap around at both ends.
    Ring,
    /// Several items per page; previous/next clamp at the window edges.
    Windowed,
}

// ---------------------------------------------------------------------------
// Pager
// ---------------------------------------------------------------------------

/// Index state for a carousel.
///
/// Invariant: `index <= max_index()` where
/// `max_index = total.saturating_sub(page_size)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    mode: PagerMode,
    index: usize,
    page_size: usize,
    total: usize,
}

impl Pager {
    /// Single-item gallery with wrap-around.
    pub fn ring(total: usize) -> Self {
        Self {
            mode: PagerMode::Ring,
            index: 0,
            page_size: 1,
            total,
        }
    }

    /// Multi-card pager. A page size of zero is treated as one.
    pub fn windowed(total: usize, page_size: usize) -> Self {
        Self {
            mode: PagerMode::Windowed,
            index: 0,
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn mode(&self) -> PagerMode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.page_size)
    }

    pub fn previous(&mut self) {
        if self.total == 0 {
            return;
        }
        self.index = match self.mode {
            PagerMode::Ring if self.index == 0 => self.total - 1,
            PagerMode::Ring => self.index - 1,
            PagerMode::Windowed => self.index.saturating_sub(1),
        };
    }

    pub fn next(&mut self) {
        if self.total == 0 {
            return;
        }
        self.index = match self.mode {
            PagerMode::Ring if self.index + 1 >= self.total => 0,
            PagerMode::Ring => self.index + 1,
            PagerMode::Windowed => (self.index + 1).min(self.max_index()),
        };
    }

    /// Jump straight to `index`. Ring mode accepts `0..total`; windowed mode
    /// accepts `0..=max_index`. Returns whether the jump was applied.
    pub fn go_to(&mut self, index: usize) -> bool {
        let valid = match self.mode {
            PagerMode::Ring => index < self.total,
            PagerMode::Windowed => self.total > 0 && index <= self.max_index(),
        };
        if valid {
            self.index = index;
        }
        valid
    }

    /// Viewport/breakpoint change. Ring pagers always show one item, so
    /// only windowed pagers react.
    pub fn set_page_size(&mut self, page_size: usize) {
        if self.mode == PagerMode::Windowed {
            self.page_size = page_size.max(1);
        }
        self.clamp();
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.index = self.index.min(self.max_index());
    }

    /// Whether the "previous" control is enabled. Ring pagers wrap, so it is
    /// enabled whenever there is more than one item.
    pub fn can_go_previous(&self) -> bool {
        match self.mode {
            PagerMode::Ring => self.total > 1,
            PagerMode::Windowed => self.index > 0,
        }
    }

    pub fn can_go_next(&self) -> bool {
        match self.mode {
            PagerMode::Ring => self.total > 1,
            PagerMode::Windowed => self.index < self.max_index(),
        }
    }

    /// Index the previous control would land on, without moving.
    pub fn peek_previous(&self) -> usize {
        let mut probe = self.clone();
        probe.previous();
        probe.index
    }

    pub fn peek_next(&self) -> usize {
        let mut probe = self.clone();
        probe.next();
        probe.index
    }

    /// Indices currently on screen.
    pub fn visible(&self) -> Range<usize> {
        if self.total == 0 {
            return 0..0;
        }
        self.index..(self.index + self.page_size).min(self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(p: &Pager) {
        assert!(
            p.index() <= p.max_index(),
            "index {} exceeds max {} (total {}, page {})",
            p.index(),
            p.max_index(),
            p.total(),
            p.page_size()
        );
    }

    #[test]
    fn ring_wraps_both_ways() {
        let mut p = Pager::ring(4);
        p.previous();
        assert_eq!(p.index(), 3);
        p.next();
        assert_eq!(p.index(), 0);
    }

    #[test]
    fn ring_full_cycle_returns_home() {
        for n in 1..8 {
            let mut p = Pager::ring(n);
            for _ in 0..n {
                p.next();
            }
            assert_eq!(p.index(), 0, "total {n}");
        }
    }

    #[test]
    fn single_item_is_fixed_point() {
        let mut p = Pager::ring(1);
        p.next();
        assert_eq!(p.index(), 0);
        p.previous();
        assert_eq!(p.index(), 0);
        assert!(!p.can_go_next());
    }

    #[test]
    fn empty_pager_ignores_everything() {
        let mut p = Pager::ring(0);
        p.next();
        p.previous();
        assert!(!p.go_to(0));
        assert_eq!(p.index(), 0);
        assert!(p.is_empty());
        assert_eq!(p.visible(), 0..0);
    }

    #[test]
    fn ring_go_to_rejects_out_of_range() {
        let mut p = Pager::ring(3);
        assert!(p.go_to(2));
        assert_eq!(p.index(), 2);
        assert!(!p.go_to(3));
        assert_eq!(p.index(), 2);
    }

    #[test]
    fn windowed_clamps_and_disables_edges() {
        let mut p = Pager::windowed(5, 3);
        assert_eq!(p.max_index(), 2);
        assert!(!p.can_go_previous());
        p.previous();
        assert_eq!(p.index(), 0);

        p.next();
        p.next();
        p.next();
        assert_eq!(p.index(), 2);
        assert!(!p.can_go_next());
        assert!(p.can_go_previous());
        assert_eq!(p.visible(), 2..5);
    }

    #[test]
    fn shrinking_viewport_growing_page_clamps_index() {
        let mut p = Pager::windowed(6, 1);
        assert!(p.go_to(5));
        p.set_page_size(3);
        assert_eq!(p.index(), 3);
        p.set_page_size(10);
        assert_eq!(p.index(), 0);
        assert_invariant(&p);
    }

    #[test]
    fn shrinking_total_clamps_index() {
        let mut p = Pager::ring(5);
        p.go_to(4);
        p.set_total(2);
        assert_eq!(p.index(), 1);

        let mut w = Pager::windowed(8, 2);
        w.go_to(6);
        w.set_total(3);
        assert_eq!(w.index(), 1);
    }

    #[test]
    fn peek_does_not_move() {
        let p = Pager::ring(3);
        assert_eq!(p.peek_previous(), 2);
        assert_eq!(p.peek_next(), 1);
        assert_eq!(p.index(), 0);
    }

    #[test]
    fn clamp_invariant_over_mixed_sequences() {
        // Deterministic pseudo-random walk over operations.
        let mut seed: u64 = 0x5eed;
        let mut step = || {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) as usize
        };
        for total in 0..7 {
            for start_page in 0..5 {
                // start_page 0 builds a ring pager.
                let mut p = match start_page {
                    0 => Pager::ring(total),
                    n => Pager::windowed(total, n),
                };
                let mode = p.mode();
                for _ in 0..300 {
                    match step() % 5 {
                        0 => p.previous(),
                        1 => p.next(),
                        2 => p.set_page_size(step() % 6),
                        3 => p.set_total(step() % 9),
                        _ => {
                            p.go_to(step() % 10);
                        }
                    }
                    assert_invariant(&p);
                    assert_eq!(p.mode(), mode);
                    if mode == PagerMode::Ring {
                        assert_eq!(p.page_size(), 1);
                    }
                }
            }
        }
    }
}
