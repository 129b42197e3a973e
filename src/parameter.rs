use super::*;

/// A query string parameter read from user input at call time.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub(crate) struct Parameter {
  pub(crate) default: String,
  pub(crate) name: String,
}

impl Parameter {
  pub(crate) fn new(name: &str, default: &str) -> Self {
    Self {
      default: default.to_string(),
      name: name.to_string(),
    }
  }

  /// Resolves a limit, which must be a non-negative whole number.
  pub(crate) fn resolve_count(
    &self,
    input: Option<&str>,
  ) -> Result<(String, String), FetchError> {
    let (name, value) = self.resolve_text(input);

    match value.parse::<u32>() {
      Ok(count) => Ok((name, count.to_string())),
      Err(_) => Err(FetchError::Parameter { name, value }),
    }
  }

  pub(crate) fn resolve_text(&self, input: Option<&str>) -> (String, String) {
    let value = input
      .map(str::trim)
      .filter(|value| !value.is_empty())
      .unwrap_or(&self.default);

    (self.name.clone(), value.to_string())
  }
}
