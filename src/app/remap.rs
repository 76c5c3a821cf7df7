/// Where the element at `selected` ends up after moving the element at
/// `from` to `to` with splice semantics (remove, then insert).
pub fn remap_selection(selected: usize, from: usize, to: usize) -> usize {
    if selected == from {
        to
    } else if from < selected && selected <= to {
        selected - 1
    } else if to <= selected && selected < from {
        selected + 1
    } else {
        selected
    }
}
