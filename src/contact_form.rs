use super::*;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(
    r#"(?i)^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-z\-0-9]+\.)+[a-z]{2,}))$"#,
  )
  .unwrap()
});

/// Outcome of checking a contact form before it is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormCheck {
  EmptyField(&'static str),
  InvalidEmail,
  Valid,
}

impl fmt::Display for FormCheck {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::EmptyField(label) => write!(f, "{label} is required"),
      Self::InvalidEmail => write!(f, "email address is not valid"),
      Self::Valid => write!(f, "ready to send"),
    }
  }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ContactForm {
  pub(crate) body: String,
  pub(crate) email: String,
  pub(crate) first_name: String,
  pub(crate) last_name: String,
  pub(crate) subject: String,
}

impl ContactForm {
  pub(crate) const LABELS: [&str; 5] =
    ["first name", "last name", "email", "subject", "message"];

  /// Checks every field for emptiness in order, stopping at the first empty
  /// one, and only then checks the email address.
  pub(crate) fn check(&self) -> FormCheck {
    if let Some(label) = Self::LABELS
      .into_iter()
      .zip(self.fields())
      .find_map(|(label, value)| value.is_empty().then_some(label))
    {
      return FormCheck::EmptyField(label);
    }

    if is_email(&self.email) {
      FormCheck::Valid
    } else {
      FormCheck::InvalidEmail
    }
  }

  pub(crate) fn field_mut(&mut self, index: usize) -> Option<&mut String> {
    match index {
      0 => Some(&mut self.first_name),
      1 => Some(&mut self.last_name),
      2 => Some(&mut self.email),
      3 => Some(&mut self.subject),
      4 => Some(&mut self.body),
      _ => None,
    }
  }

  pub(crate) fn fields(&self) -> [&str; 5] {
    [
      &self.first_name,
      &self.last_name,
      &self.email,
      &self.subject,
      &self.body,
    ]
  }

  pub(crate) fn is_valid(&self) -> bool {
    self.check() == FormCheck::Valid
  }

  pub(crate) fn to_form(&self) -> Vec<(String, String)> {
    ["fname", "lname", "email", "subject", "body"]
      .into_iter()
      .zip(self.fields())
      .map(|(name, value)| (name.to_string(), value.to_string()))
      .collect()
  }
}

pub(crate) fn is_email(value: &str) -> bool {
  EMAIL.is_match(&value.to_lowercase())
}
