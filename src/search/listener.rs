//! Outbound contract between the search form and its owner.

use super::criteria::FilterCriteria;

/// Receives the search form's outbound signals.
///
/// On submit the form calls [`on_search`](Self::on_search) exactly once and
/// then [`on_close`](Self::on_close). Dismissal calls only `on_close`.
#[cfg_attr(test, mockall::automock)]
pub trait SearchListener {
    /// Receives freshly submitted criteria.
    fn on_search(&mut self, criteria: FilterCriteria);

    /// The form should be hidden.
    fn on_close(&mut self);
}

/// Adapts a pair of closures to [`SearchListener`].
pub struct CallbackListener<S, C>
where
    S: FnMut(FilterCriteria),
    C: FnMut(),
{
    on_search: S,
    on_close: C,
}

impl<S, C> CallbackListener<S, C>
where
    S: FnMut(FilterCriteria),
    C: FnMut(),
{
    /// Wraps the search and close callbacks.
    #[must_use]
    pub const fn new(on_search: S, on_close: C) -> Self {
        Self {
            on_search,
            on_close,
        }
    }
}

impl<S, C> SearchListener for CallbackListener<S, C>
where
    S: FnMut(FilterCriteria),
    C: FnMut(),
{
    fn on_search(&mut self, criteria: FilterCriteria) {
        (self.on_search)(criteria);
    }

    fn on_close(&mut self) {
        (self.on_close)();
    }
}
