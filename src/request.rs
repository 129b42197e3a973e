use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
  Get,
  Post,
}

impl fmt::Display for Method {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Get => write!(f, "GET"),
      Self::Post => write!(f, "POST"),
    }
  }
}

/// A single outbound request, relative to the backend's base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Request {
  pub(crate) form: Vec<(String, String)>,
  pub(crate) method: Method,
  pub(crate) path: String,
  pub(crate) query: Vec<(String, String)>,
}

impl Request {
  pub(crate) fn get(path: &str, query: Vec<(String, String)>) -> Self {
    Self {
      form: Vec::new(),
      method: Method::Get,
      path: path.to_string(),
      query,
    }
  }

  pub(crate) fn post(
    path: &str,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
  ) -> Self {
    Self {
      form,
      method: Method::Post,
      path: path.to_string(),
      query,
    }
  }

  #[cfg(test)]
  pub(crate) fn query_value(&self, name: &str) -> Option<&str> {
    self
      .query
      .iter()
      .find(|(key, _)| key == name)
      .map(|(_, value)| value.as_str())
  }
}

impl fmt::Display for Request {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.method, self.path)?;

    for (i, (name, value)) in self.query.iter().enumerate() {
      let separator = if i == 0 { '?' } else { '&' };
      write!(f, "{separator}{name}={value}")?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_includes_method_path_and_query() {
    let request = Request::get(
      "/data",
      vec![
        ("max-comments".to_string(), "5".to_string()),
        ("language".to_string(), "fr".to_string()),
      ],
    );

    assert_eq!(request.to_string(), "GET /data?max-comments=5&language=fr");
  }

  #[test]
  fn post_without_query_displays_bare_path() {
    let request = Request::post("/delete-data", Vec::new(), Vec::new());

    assert_eq!(request.to_string(), "POST /delete-data");
    assert_eq!(request.query_value("key"), None);
  }
}
