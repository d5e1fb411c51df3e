use crate::viewport::picking::cycle_pick;
use crate::viewport::view::View;

/// Single-block selection, tied to the view it was picked in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<(usize, View)>,
}

impl SelectionState {
    /// Selected block index and its view
    pub fn current(&self) -> Option<(usize, View)> {
        self.selected
    }

    /// Selected block index if it was picked in `view`
    pub fn in_view(&self, view: View) -> Option<usize> {
        self.selected.filter(|(_, v)| *v == view).map(|(i, _)| i)
    }

    pub fn is_selected(&self, index: usize, view: View) -> bool {
        self.selected == Some((index, view))
    }

    pub fn select(&mut self, index: usize, view: View) {
        self.selected = Some((index, view));
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Apply a click over `candidates` (store order) in `view`.
    /// Repeated clicks on the same stack cycle through it.
    pub fn click(&mut self, candidates: &[usize], view: View) {
        match cycle_pick(candidates, self.in_view(view)) {
            Some(index) => self.select(index, view),
            None => self.clear(),
        }
    }
}
