use {super::*, reqwest::Url};

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub(crate) enum MutationConfig {
  DeleteAll {
    path: String,
  },
  DeleteSelected {
    #[serde(default = "default_confirm")]
    confirm: bool,
    #[serde(default = "default_key_param")]
    param: String,
    path: String,
  },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub(crate) struct FeedConfig {
  #[serde(default = "default_filter")]
  pub(crate) default_filter: String,
  #[serde(default = "default_limit")]
  pub(crate) default_limit: u32,
  #[serde(default)]
  pub(crate) endorse_path: Option<String>,
  #[serde(default)]
  pub(crate) filter_param: Option<String>,
  #[serde(default = "default_format")]
  pub(crate) format: BodyFormat,
  pub(crate) label: String,
  #[serde(default)]
  pub(crate) limit_param: Option<String>,
  #[serde(default)]
  pub(crate) mutation: Option<MutationConfig>,
  pub(crate) path: String,
  #[serde(default = "default_view")]
  pub(crate) view: View,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub(crate) struct Config {
  pub(crate) base_url: String,
  pub(crate) contact_path: String,
  pub(crate) feeds: Vec<FeedConfig>,
  pub(crate) greetings: Vec<String>,
  pub(crate) log_level: String,
  pub(crate) lucky_page: String,
  pub(crate) lucky_posts: Vec<String>,
}

fn default_confirm() -> bool {
  true
}

fn default_filter() -> String {
  "en".to_string()
}

fn default_format() -> BodyFormat {
  BodyFormat::Html
}

fn default_key_param() -> String {
  "key".to_string()
}

fn default_limit() -> u32 {
  20
}

fn default_view() -> View {
  View::List
}

impl Default for Config {
  fn default() -> Self {
    let feed = |label: &str, path: &str, format: BodyFormat| FeedConfig {
      default_filter: default_filter(),
      default_limit: default_limit(),
      endorse_path: None,
      filter_param: None,
      format,
      label: label.to_string(),
      limit_param: None,
      mutation: None,
      path: path.to_string(),
      view: View::List,
    };

    Self {
      base_url: "http://localhost:8080/".to_string(),
      contact_path: "/message".to_string(),
      feeds: vec![
        FeedConfig {
          default_limit: 50,
          filter_param: Some("language".to_string()),
          limit_param: Some("max-comments".to_string()),
          mutation: Some(MutationConfig::DeleteAll {
            path: "/delete-data".to_string(),
          }),
          ..feed("comments", "/data", BodyFormat::Html)
        },
        FeedConfig {
          limit_param: Some("num-posts".to_string()),
          ..feed("blog", "/blog-data", BodyFormat::JsonFirstValue)
        },
        FeedConfig {
          mutation: Some(MutationConfig::DeleteSelected {
            confirm: true,
            param: default_key_param(),
            path: "/delete-message".to_string(),
          }),
          ..feed("messages", "/message", BodyFormat::Html)
        },
        FeedConfig {
          endorse_path: Some("/endorse-data".to_string()),
          view: View::Chart,
          ..feed("skills", "/endorse-data", BodyFormat::JsonMap)
        },
        feed("photos", "/photo-map-data", BodyFormat::JsonList),
      ],
      greetings: ["Hello!", "Bonjour!", "Hola!"]
        .map(String::from)
        .to_vec(),
      log_level: "folio=info".to_string(),
      lucky_page: "blog.html".to_string(),
      lucky_posts: ["#post1-lnk", "#post2-lnk", "#post3-lnk", "#post4-lnk"]
        .map(String::from)
        .to_vec(),
    }
  }
}

impl Config {
  const BASE_URL_VAR: &str = "FOLIO_BASE_URL";

  const CONFIG_FILE_VAR: &str = "FOLIO_CONFIG";

  pub(crate) fn base_url(&self) -> Result<Url> {
    Url::parse(&self.base_url)
      .with_context(|| format!("invalid base url `{}`", self.base_url))
  }

  fn config_path(
    arguments: &Arguments,
    var: &impl Fn(&str) -> Option<String>,
  ) -> Option<PathBuf> {
    if let Some(path) = &arguments.config {
      return Some(path.clone());
    }

    if let Some(path) = var(Self::CONFIG_FILE_VAR) {
      return Some(PathBuf::from(path));
    }

    dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
  }

  pub(crate) fn load(arguments: &Arguments) -> Result<Self> {
    Self::load_with(arguments, |name| env::var(name).ok())
  }

  /// Layers the config file, then `var` lookups, then command line flags.
  fn load_with(
    arguments: &Arguments,
    var: impl Fn(&str) -> Option<String>,
  ) -> Result<Self> {
    let mut config = match Self::config_path(arguments, &var) {
      Some(path) if path.exists() => Self::read(&path)?,
      Some(path) if arguments.config.is_some() => {
        anyhow::bail!("config file {} does not exist", path.display())
      }
      _ => Self::default(),
    };

    if let Some(base_url) = var(Self::BASE_URL_VAR) {
      config.base_url = base_url;
    }

    if let Some(base_url) = &arguments.base_url {
      config.base_url.clone_from(base_url);
    }

    config.validate()?;

    Ok(config)
  }

  pub(crate) fn read(path: &Path) -> Result<Self> {
    let contents = fs::read_to_string(path)
      .with_context(|| format!("could not read {}", path.display()))?;

    toml::from_str(&contents)
      .with_context(|| format!("could not parse {}", path.display()))
  }

  fn validate(&self) -> Result {
    self.base_url()?;

    anyhow::ensure!(!self.feeds.is_empty(), "at least one feed is required");

    anyhow::ensure!(
      !self.greetings.is_empty(),
      "at least one greeting is required"
    );

    anyhow::ensure!(
      !self.lucky_posts.is_empty(),
      "at least one lucky post is required"
    );

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::io::Write};

  fn arguments(config: Option<PathBuf>) -> Arguments {
    Arguments {
      base_url: None,
      config,
      log_file: None,
    }
  }

  fn no_env(_: &str) -> Option<String> {
    None
  }

  fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
  }

  #[test]
  fn defaults_describe_the_portfolio_backend() {
    let config = Config::default();

    let labels = config
      .feeds
      .iter()
      .map(|feed| feed.label.as_str())
      .collect::<Vec<_>>();

    assert_eq!(labels, ["comments", "blog", "messages", "skills", "photos"]);
    assert_eq!(config.feeds[0].default_limit, 50);
    assert_eq!(config.feeds[1].default_limit, 20);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn partial_file_keeps_defaults() {
    let file = write_config("base_url = \"http://portfolio.test/\"\n");

    let config = Config::read(file.path()).unwrap();

    assert_eq!(config.base_url, "http://portfolio.test/");
    assert_eq!(config.feeds, Config::default().feeds);
  }

  #[test]
  fn feeds_can_be_redefined() {
    let file = write_config(
      r#"
[[feeds]]
label = "comments"
path = "/data"
format = "json-first-value"
limit_param = "num-comments"

[[feeds]]
label = "messages"
path = "/message"
mutation = { kind = "delete-selected", path = "/delete-message" }
"#,
    );

    let config = Config::read(file.path()).unwrap();

    assert_eq!(config.feeds.len(), 2);
    assert_eq!(config.feeds[0].format, BodyFormat::JsonFirstValue);
    assert_eq!(config.feeds[0].default_limit, 20);
    assert_eq!(config.feeds[1].format, BodyFormat::Html);
    assert_eq!(
      config.feeds[1].mutation,
      Some(MutationConfig::DeleteSelected {
        confirm: true,
        param: "key".to_string(),
        path: "/delete-message".to_string(),
      })
    );
  }

  #[test]
  fn command_line_base_url_wins() {
    let file = write_config("base_url = \"http://from-file.test/\"\n");

    let arguments = Arguments {
      base_url: Some("http://from-flag.test/".to_string()),
      ..arguments(Some(file.path().to_path_buf()))
    };

    assert_eq!(
      Config::load_with(&arguments, no_env).unwrap().base_url,
      "http://from-flag.test/"
    );
  }

  #[test]
  fn environment_overrides_file_but_not_flags() {
    let file = write_config("base_url = \"http://from-file.test/\"\n");

    let env = |name: &str| {
      (name == "FOLIO_BASE_URL").then(|| "http://from-env.test/".to_string())
    };

    let from_file = arguments(Some(file.path().to_path_buf()));

    assert_eq!(
      Config::load_with(&from_file, env).unwrap().base_url,
      "http://from-env.test/"
    );

    let with_flag = Arguments {
      base_url: Some("http://from-flag.test/".to_string()),
      ..arguments(Some(file.path().to_path_buf()))
    };

    assert_eq!(
      Config::load_with(&with_flag, env).unwrap().base_url,
      "http://from-flag.test/"
    );
  }

  #[test]
  fn config_file_variable_is_used_without_flag() {
    let file = write_config("lucky_page = \"posts.html\"\n");

    let path = file.path().to_string_lossy().into_owned();

    let env = |name: &str| (name == "FOLIO_CONFIG").then(|| path.clone());

    assert_eq!(
      Config::load_with(&arguments(None), env).unwrap().lucky_page,
      "posts.html"
    );
  }

  #[test]
  fn missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = Config::load_with(
      &arguments(Some(dir.path().join("nope.toml"))),
      no_env,
    );

    assert!(result.is_err());
  }

  #[test]
  fn invalid_base_url_is_rejected() {
    let file = write_config("base_url = \"not a url\"\n");

    assert!(
      Config::load_with(&arguments(Some(file.path().to_path_buf())), no_env)
        .is_err()
    );
  }

  #[test]
  fn empty_option_sets_are_rejected() {
    let config = Config {
      lucky_posts: Vec::new(),
      ..Config::default()
    };

    assert!(config.validate().is_err());
  }
}
