use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  Delete {
    feed: Feed,
    inputs: Inputs,
    key: Option<String>,
    tab_index: usize,
  },
  Endorse {
    feed: Feed,
    inputs: Inputs,
    skill: String,
    tab_index: usize,
  },
  Load {
    feed: Feed,
    inputs: Inputs,
    tab_index: usize,
  },
  OpenUrl {
    url: String,
  },
  SendMessage {
    form: ContactForm,
  },
  UploadUrl,
}
