use super::*;

/// A status line message that reverts to the previous one once it expires.
#[derive(Clone)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  previous: String,
  text: String,
}

impl TransientMessage {
  const LIFETIME: Duration = Duration::from_secs(3);

  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn new(text: String, previous: String) -> Self {
    Self {
      expires_at: Instant::now() + Self::LIFETIME,
      previous,
      text,
    }
  }

  pub(crate) fn previous(&self) -> &str {
    &self.previous
  }

  pub(crate) fn text(&self) -> &str {
    &self.text
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn fresh_message_is_not_expired() {
    let message =
      TransientMessage::new("Deleted".to_string(), LIST_STATUS.to_string());

    assert!(!message.is_expired());
    assert_eq!(message.text(), "Deleted");
    assert_eq!(message.previous(), LIST_STATUS);
  }
}
