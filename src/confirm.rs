/// A pending deletion waiting for the user to answer y/n.
#[derive(Clone, Debug)]
pub(crate) struct Confirm {
  pub(crate) key: String,
  pub(crate) message_backup: String,
  pub(crate) tab_index: usize,
  pub(crate) title: String,
}

impl Confirm {
  pub(crate) fn text(&self) -> String {
    format!("Do you want to delete \"{}\"? (y/n)", self.title)
  }
}
