use super::*;

/// The display surface a fetch-render cycle writes into.
pub(crate) trait Container {
  fn append(&mut self, element: Element);

  fn clear(&mut self);

  /// Replaces the whole content, keeping the given order.
  fn render(&mut self, elements: Vec<Element>) {
    self.clear();

    for element in elements {
      self.append(element);
    }
  }
}

impl Container for Vec<Element> {
  fn append(&mut self, element: Element) {
    self.push(element);
  }

  fn clear(&mut self) {
    Vec::clear(self);
  }
}
