/// Coalescing helper for render/resize decisions
pub struct Coalescer;

impl Coalescer {
    /// Pure decision function: whether to render this loop based on coalesced inputs
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool, resized: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render || resized
    }

    /// Pure decision function: coalesce multiple resizes into last-only
    #[inline]
    pub fn decide_resize(
        last_seen: Option<(u16, u16)>,
        events: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        events.last().copied().or(last_seen)
    }
}

#[cfg(test)]
mod tests {
    use super::Coalescer;
    use rstest::rstest;

    #[rstest]
    #[case(0, false, false, false)]
    #[case(1, false, false, true)]
    #[case(3, false, false, true)]
    #[case(0, true, false, true)]
    #[case(0, false, true, true)]
    #[case(2, true, true, true)]
    fn decide_render_table(
        #[case] queued: usize,
        #[case] saw_render: bool,
        #[case] resized: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(Coalescer::decide_render(queued, saw_render, resized), expected);
    }

    #[rstest]
    #[case(None, &[], None)]
    #[case(None, &[(10, 10)], Some((10, 10)))]
    #[case(None, &[(10, 10), (20, 30)], Some((20, 30)))]
    #[case(Some((5, 5)), &[(100, 200)], Some((100, 200)))]
    #[case(Some((5, 5)), &[], Some((5, 5)))]
    fn decide_resize_keeps_last(
        #[case] last_seen: Option<(u16, u16)>,
        #[case] events: &[(u16, u16)],
        #[case] expected: Option<(u16, u16)>,
    ) {
        assert_eq!(Coalescer::decide_resize(last_seen, events), expected);
    }
}
