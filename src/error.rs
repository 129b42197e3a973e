use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum FetchError {
  #[error("malformed response from {url}: {message}")]
  Body { message: String, url: String },
  #[error("{name} must be a non-negative whole number, got \"{value}\"")]
  Parameter { name: String, value: String },
  #[error("{url} responded with status {status}")]
  Status { status: u16, url: String },
  #[error("could not reach {url}")]
  Transport {
    #[source]
    source: reqwest::Error,
    url: String,
  },
  #[error("cannot build a request url from `{path}`: {message}")]
  Url { message: String, path: String },
}

impl FetchError {
  pub(crate) fn body(url: impl Into<String>, message: impl ToString) -> Self {
    Self::Body {
      message: message.to_string(),
      url: url.into(),
    }
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Self::Body { .. } => "body",
      Self::Parameter { .. } => "parameter",
      Self::Status { .. } => "status",
      Self::Transport { .. } => "transport",
      Self::Url { .. } => "url",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn each_failure_class_has_a_distinct_kind() {
    let errors = [
      FetchError::body("/data", "expected value"),
      FetchError::Parameter {
        name: "max-comments".to_string(),
        value: "ten".to_string(),
      },
      FetchError::Status {
        status: 500,
        url: "/data".to_string(),
      },
    ];

    let kinds = errors.iter().map(FetchError::kind).collect::<Vec<_>>();

    assert_eq!(kinds, ["body", "parameter", "status"]);
  }

  #[test]
  fn messages_name_the_failing_resource() {
    assert_eq!(
      FetchError::Status {
        status: 404,
        url: "/blog-data".to_string(),
      }
      .to_string(),
      "/blog-data responded with status 404"
    );

    assert_eq!(
      FetchError::Parameter {
        name: "num-posts".to_string(),
        value: "-1".to_string(),
      }
      .to_string(),
      "num-posts must be a non-negative whole number, got \"-1\""
    );
  }
}
