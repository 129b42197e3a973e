use super::*;

static BLOCK: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)<div\b[^>]*>").unwrap());

static LINE_BREAK: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)</p\s*>|<br\s*/?>").unwrap());

static SCRIPT_KEY: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"javascript:\s*\w+\(\s*['"]?([^'")\s]+)"#).unwrap()
});

/// How a feed endpoint encodes its list of items.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum BodyFormat {
  Html,
  JsonFirstValue,
  JsonList,
  JsonMap,
}

impl BodyFormat {
  pub(crate) fn decode(self, body: &str) -> Result<Vec<Item>, String> {
    match self {
      Self::Html => Ok(Self::decode_html(body)),
      Self::JsonFirstValue => match Self::parse(body)? {
        Value::Object(map) => match map.into_iter().next() {
          None => Ok(Vec::new()),
          Some((_, Value::Array(values))) => Self::decode_list(values),
          Some((key, _)) => Err(format!("expected \"{key}\" to hold a list")),
        },
        _ => Err("expected an object".to_string()),
      },
      Self::JsonList => match Self::parse(body)? {
        Value::Array(values) => Self::decode_list(values),
        _ => Err("expected a list".to_string()),
      },
      Self::JsonMap => match Self::parse(body)? {
        Value::Object(map) => map
          .into_iter()
          .map(|(name, votes)| {
            let votes = votes
              .as_u64()
              .ok_or_else(|| format!("expected a vote count for \"{name}\""))?;

            Ok(Item {
              title: Some(name),
              votes: Some(votes),
              ..Item::default()
            })
          })
          .collect(),
        _ => Err("expected an object".to_string()),
      },
    }
  }

  fn decode_html(body: &str) -> Vec<Item> {
    if !body.contains('<') {
      return body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Item {
          text: Some(line.to_string()),
          ..Item::default()
        })
        .collect();
    }

    BLOCK
      .split(body)
      .filter_map(|block| {
        let mut lines = LINE_BREAK
          .split(block)
          .map(strip_tags)
          .filter(|line| !line.is_empty());

        let title = lines.next()?;

        let text = lines.collect::<Vec<_>>().join(" ");

        let key = SCRIPT_KEY
          .captures(block)
          .and_then(|captures| captures.get(1))
          .map(|key| key.as_str().to_string());

        Some(Item {
          key,
          text: (!text.is_empty()).then_some(text),
          title: Some(title),
          ..Item::default()
        })
      })
      .collect()
  }

  fn decode_list(values: Vec<Value>) -> Result<Vec<Item>, String> {
    values.into_iter().map(Item::from_value).collect()
  }

  fn parse(body: &str) -> Result<Value, String> {
    serde_json::from_str(body).map_err(|error| error.to_string())
  }
}
