use super::*;

pub(crate) struct ListView<T> {
  items: Vec<T>,
  offset: usize,
  selected: usize,
}

impl<T> Default for ListView<T> {
  fn default() -> Self {
    Self {
      items: Vec::new(),
      offset: 0,
      selected: 0,
    }
  }
}

impl<T> ListView<T> {
  pub(crate) fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub(crate) fn items(&self) -> &[T] {
    &self.items
  }

  pub(crate) fn len(&self) -> usize {
    self.items.len()
  }

  #[cfg(test)]
  pub(crate) fn new(items: Vec<T>) -> Self {
    Self {
      items,
      offset: 0,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    if self.items.is_empty() {
      0
    } else {
      self.offset.min(self.selected_index().unwrap_or(0))
    }
  }

  pub(crate) fn select_first(&mut self) {
    self.selected = 0;
  }

  pub(crate) fn select_last(&mut self) {
    self.selected = self.items.len().saturating_sub(1);
  }

  pub(crate) fn select_next(&mut self) {
    self.set_selected(self.selected.saturating_add(1));
  }

  pub(crate) fn select_previous(&mut self) {
    self.set_selected(self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.items.is_empty() {
      None
    } else {
      Some(self.selected.min(self.items.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_item(&self) -> Option<&T> {
    self
      .selected_index()
      .and_then(|index| self.items.get(index))
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    self.offset = offset.min(self.items.len().saturating_sub(1));
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    self.selected = index.min(self.items.len().saturating_sub(1));
  }
}

impl Container for ListView<Element> {
  fn append(&mut self, element: Element) {
    self.items.push(element);
  }

  fn clear(&mut self) {
    self.items.clear();
    self.offset = 0;
  }

  fn render(&mut self, elements: Vec<Element>) {
    let selected = self.selected;

    self.clear();
    self.items.extend(elements);
    self.set_selected(selected);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn selected_index_is_none_when_empty() {
    let view = ListView::<Element>::default();

    assert_eq!(view.selected_index(), None);
    assert!(view.selected_item().is_none());
  }

  #[test]
  fn selection_and_offset_are_clamped_to_bounds() {
    let mut view = ListView::new(vec![1, 2, 3]);

    view.set_selected(10);
    assert_eq!(view.selected_index(), Some(2));

    view.set_offset(10);
    assert_eq!(view.offset(), 2);

    view.select_first();
    view.select_previous();
    assert_eq!(view.selected_item(), Some(&1));

    view.select_next();
    view.select_last();
    assert_eq!(view.selected_item(), Some(&3));
  }

  #[test]
  fn render_replaces_every_element_in_order() {
    let mut view = ListView::new(vec![Element::text("stale")]);

    view.render(vec![
      Element::text("a"),
      Element::text("b"),
      Element::text("c"),
    ]);

    let titles = view
      .items()
      .iter()
      .map(|element| element.title.as_str())
      .collect::<Vec<_>>();

    assert_eq!(titles, ["a", "b", "c"]);
  }

  #[test]
  fn render_keeps_selection_within_new_bounds() {
    let mut view = ListView::new(vec![
      Element::text("a"),
      Element::text("b"),
      Element::text("c"),
    ]);

    view.set_selected(2);

    view.render(vec![Element::text("only")]);

    assert_eq!(view.selected_index(), Some(0));

    view.render(Vec::new());

    assert!(view.is_empty());
    assert_eq!(view.selected_index(), None);
  }
}
