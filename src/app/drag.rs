/// An in-progress card drag, in list positions.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DragState {
    from: Option<usize>,
    target: Option<usize>,
}

impl DragState {
    pub fn start(&mut self, index: usize) {
        self.from = Some(index);
        self.target = None;
    }

    /// Record the card under the pointer. Hovering the dragged card itself
    /// leaves the last target in place.
    pub fn over(&mut self, index: usize) {
        match self.from {
            Some(from) if from != index => self.target = Some(index),
            _ => {}
        }
    }

    pub fn dragged(&self) -> Option<usize> {
        self.from
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    /// End the drag; returns the move to apply, if any.
    pub fn finish(&mut self) -> Option<(usize, usize)> {
        let mv = match (self.from, self.target) {
            (Some(from), Some(to)) if from != to => Some((from, to)),
            _ => None,
        };
        self.cancel();
        mv
    }

    pub fn cancel(&mut self) {
        self.from = None;
        self.target = None;
    }
}
