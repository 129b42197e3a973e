use super::*;

/// The fetch-render cycle that produced an `Event::Items`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Operation {
  Delete,
  Endorse,
  Load,
}

impl Operation {
  pub(crate) fn failure(self, label: &str, error: &FetchError) -> String {
    match self {
      Self::Delete => format!("Could not delete from {label}: {error}"),
      Self::Endorse => format!("Could not endorse in {label}: {error}"),
      Self::Load => format!("Could not load {label}: {error}"),
    }
  }

  pub(crate) fn success(self, label: &str, count: usize) -> String {
    match (self, count) {
      (Self::Delete, _) => format!("Deleted from {label}"),
      (Self::Endorse, _) => format!("Endorsed in {label}"),
      (Self::Load, 1) => format!("Loaded 1 item in {label}"),
      (Self::Load, _) => format!("Loaded {count} items in {label}"),
    }
  }
}

pub(crate) enum Event {
  Items {
    operation: Operation,
    result: Result<Vec<Element>, FetchError>,
    tab_index: usize,
  },
  MessageSent {
    result: Result<(), FetchError>,
  },
  UploadUrl {
    result: Result<String, FetchError>,
  },
}
