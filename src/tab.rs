use super::*;

pub(crate) struct Tab {
  pub(crate) feed: Feed,
  pub(crate) inputs: Inputs,
  pub(crate) loading: bool,
  pub(crate) view: ListView<Element>,
}

impl Tab {
  pub(crate) fn new(feed: Feed) -> Self {
    Self {
      feed,
      inputs: Inputs::default(),
      loading: false,
      view: ListView::default(),
    }
  }

  pub(crate) fn title(&self) -> String {
    if self.loading {
      format!("{}…", self.feed.label.to_uppercase())
    } else {
      self.feed.label.to_uppercase()
    }
  }
}
