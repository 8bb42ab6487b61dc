//! Center tracking and scroll targets for the vertical preview carousel.
//!
//! All measurements are in CSS pixels along the vertical axis. Item offsets
//! are relative to the top of the scroll container's content, so they can be
//! compared directly with the container's scroll offset.

/// Vertical placement of one carousel item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    /// Distance from the top of the container content to the item's top edge.
    pub top: f64,
    /// Rendered height of the item.
    pub height: f64,
}

impl ItemMetrics {
    /// Vertical midpoint of the item.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Current scroll position and visible height of the carousel container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// How far the content is scrolled.
    pub scroll_top: f64,
    /// Visible height of the container.
    pub height: f64,
}

impl ViewportMetrics {
    /// Vertical midpoint of the visible area, in content coordinates.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.scroll_top + self.height / 2.0
    }
}

/// Index of the item whose midpoint is closest to the visible midpoint.
///
/// Items are scanned top to bottom and only a strictly smaller distance
/// replaces the current best, so ties go to the lower index.
#[must_use]
pub fn center_index(items: &[ItemMetrics], viewport: ViewportMetrics) -> Option<usize> {
    let target = viewport.center();
    let mut closest: Option<(usize, f64)> = None;

    for (index, item) in items.iter().enumerate() {
        let distance = (target - item.center()).abs();
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((index, distance));
        }
    }

    closest.map(|(index, _)| index)
}

/// Which item is centered and whether it sits at either end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterState {
    /// Centered item, if any item is rendered.
    pub index: Option<usize>,
    /// The first item is centered; the scroll-up control is hidden.
    pub is_first: bool,
    /// The last item is centered; the scroll-down control is hidden.
    pub is_last: bool,
}

impl Default for CenterState {
    /// State before the first measurement: nothing centered, scroll-up hidden.
    fn default() -> Self {
        Self {
            index: None,
            is_first: true,
            is_last: false,
        }
    }
}

impl CenterState {
    /// Measure the centered item.
    ///
    /// `candidate_count` is the number of videos being previewed; the last
    /// flag is set when the centered index is the final candidate.
    #[must_use]
    pub fn compute(items: &[ItemMetrics], viewport: ViewportMetrics, candidate_count: usize) -> Self {
        let index = center_index(items, viewport);
        let is_last = matches!(
            (index, candidate_count.checked_sub(1)),
            (Some(i), Some(last)) if i == last
        );

        Self {
            index,
            is_first: index == Some(0),
            is_last,
        }
    }

    /// Whether the item at `index` is the centered one.
    #[must_use]
    pub fn is_centered(&self, index: usize) -> bool {
        self.index == Some(index)
    }
}

/// Scroll offset that puts the item's midpoint at the container's midpoint.
#[must_use]
pub fn scroll_target(item: ItemMetrics, container_height: f64) -> f64 {
    item.top - container_height / 2.0 + item.height / 2.0
}

/// Scroll offset that centers the item after the centered one.
///
/// `None` when nothing is centered or the centered item is the last one.
#[must_use]
pub fn next_scroll_target(
    items: &[ItemMetrics],
    centered: Option<usize>,
    container_height: f64,
) -> Option<f64> {
    let next = centered?.checked_add(1)?;
    items
        .get(next)
        .map(|item| scroll_target(*item, container_height))
}

/// Scroll offset that centers the item before the centered one.
///
/// When the first item is already centered this scrolls back to the very top.
/// `None` when nothing is centered or there are no items.
#[must_use]
pub fn previous_scroll_target(
    items: &[ItemMetrics],
    centered: Option<usize>,
    container_height: f64,
) -> Option<f64> {
    let current = centered?;
    if items.is_empty() {
        return None;
    }
    if current == 0 {
        return Some(0.0);
    }
    items
        .get(current - 1)
        .map(|item| scroll_target(*item, container_height))
}
