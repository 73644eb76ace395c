//! Best-route selection and the user's current pick
use crate::route::RouteCandidate;

/// Index of the highest-scoring candidate; the first one wins ties.
#[must_use]
pub fn best_index(routes: &[RouteCandidate]) -> Option<usize> {
    let first = routes.first()?;
    let (best, _) = routes
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, first.score), |(best, best_score), (idx, route)| {
            if route.score > best_score {
                (idx, route.score)
            } else {
                (best, best_score)
            }
        });
    Some(best)
}

/// The current candidate set plus which one the user picked.
///
/// The selection always refers into `routes`; replacing the set clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteBoard {
    routes: Vec<RouteCandidate>,
    selected: Option<usize>,
}

impl RouteBoard {
    #[must_use]
    pub fn new(routes: Vec<RouteCandidate>) -> Self {
        Self {
            routes,
            selected: None,
        }
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteCandidate] {
        &self.routes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Swap in a new candidate set, dropping any previous selection.
    pub fn replace(&mut self, routes: Vec<RouteCandidate>) {
        self.routes = routes;
        self.selected = None;
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    #[must_use]
    pub fn best_index(&self) -> Option<usize> {
        best_index(&self.routes)
    }

    #[must_use]
    pub fn best(&self) -> Option<&RouteCandidate> {
        self.best_index().and_then(|idx| self.routes.get(idx))
    }

    /// Mark the candidate at `index` as selected. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.routes.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Select the first candidate if nothing is selected yet.
    pub fn select_default(&mut self) -> Option<usize> {
        if self.selected.is_none() && !self.routes.is_empty() {
            self.selected = Some(0);
        }
        self.selected
    }

    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&RouteCandidate> {
        self.selected.and_then(|idx| self.routes.get(idx))
    }

    pub fn selected_mut(&mut self) -> Option<&mut RouteCandidate> {
        self.selected.and_then(|idx| self.routes.get_mut(idx))
    }
}
