//! Page targets and navigation direction.

/// A page to scroll to, relative or absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// The page after the current one
    Next,
    /// The page before the current one
    Previous,
    First,
    Last,
    /// A specific index
    At(usize),
}

/// Direction of travel for a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationDirection {
    /// No movement (initial load or same page)
    #[default]
    Neutral,
    Forward,
    Reverse,
}

impl NavigationDirection {
    /// Direction for a move from `from` to `to`, given the page that was
    /// requested. Wrapping moves keep the direction of the request.
    pub(crate) fn for_move(page: Page, from: usize, to: usize) -> Self {
        match page {
            Page::Next if from != to => Self::Forward,
            Page::Previous if from != to => Self::Reverse,
            _ if to > from => Self::Forward,
            _ if to < from => Self::Reverse,
            _ => Self::Neutral,
        }
    }
}

/// Resolve `page` against a container of `count` pages positioned at
/// `current`. Returns `None` when the request has no valid target.
pub(crate) fn resolve(page: Page, current: usize, count: usize, wraps: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count - 1;
    match page {
        Page::Next if current < last => Some(current + 1),
        Page::Next => wraps.then_some(0),
        Page::Previous if current > 0 => Some(current - 1),
        Page::Previous => wraps.then_some(last),
        Page::First => Some(0),
        Page::Last => Some(last),
        Page::At(index) => (index < count).then_some(index),
    }
}
