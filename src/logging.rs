use {super::*, tracing_subscriber::EnvFilter};

fn filter(config: &Config) -> Result<EnvFilter> {
  match EnvFilter::try_from_default_env() {
    Ok(filter) => Ok(filter),
    Err(_) => EnvFilter::try_new(&config.log_level)
      .with_context(|| format!("invalid log level `{}`", config.log_level)),
  }
}

/// Routes `tracing` output to a file, since the terminal belongs to the UI.
pub(crate) fn initialize(config: &Config, log_file: Option<&Path>) -> Result {
  let path = log_file.map_or_else(log_path, Path::to_path_buf);

  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }

  let file = fs::OpenOptions::new()
    .create(true)
    .append(true)
    .open(&path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(filter(config)?)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .try_init()
    .map_err(|error| anyhow::anyhow!("could not install logger: {error}"))
}

fn log_path() -> PathBuf {
  dirs::data_local_dir()
    .unwrap_or_else(env::temp_dir)
    .join("folio")
    .join("folio.log")
}
