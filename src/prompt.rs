#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PromptTarget {
  Filter,
  Limit,
}

/// Single-line input for a tab's request parameter.
#[derive(Clone, Debug)]
pub(crate) struct Prompt {
  pub(crate) buffer: String,
  pub(crate) message_backup: String,
  pub(crate) name: String,
  pub(crate) tab_index: usize,
  pub(crate) target: PromptTarget,
}

impl Prompt {
  pub(crate) fn text(&self) -> String {
    let label = match self.target {
      PromptTarget::Filter => "Filter",
      PromptTarget::Limit => "Limit",
    };

    format!("{label} ({}): {}", self.name, self.buffer)
  }
}
