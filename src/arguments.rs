use super::*;

#[derive(Debug, Parser)]
#[command(
  version,
  about = "Browse and manage a portfolio site's comments, posts, and messages"
)]
pub(crate) struct Arguments {
  /// Backend base URL, overriding the config file and FOLIO_BASE_URL
  #[arg(long)]
  pub(crate) base_url: Option<String>,
  /// Path to the TOML config file
  #[arg(long)]
  pub(crate) config: Option<PathBuf>,
  /// Where to write logs
  #[arg(long)]
  pub(crate) log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn flags_are_optional() {
    let arguments = Arguments::try_parse_from(["folio"]).unwrap();

    assert!(arguments.base_url.is_none());
    assert!(arguments.config.is_none());
  }

  #[test]
  fn flags_parse() {
    let arguments = Arguments::try_parse_from([
      "folio",
      "--base-url",
      "http://localhost:9000/",
      "--log-file",
      "/tmp/folio.log",
    ])
    .unwrap();

    assert_eq!(arguments.base_url.as_deref(), Some("http://localhost:9000/"));
    assert_eq!(arguments.log_file, Some(PathBuf::from("/tmp/folio.log")));
  }
}
