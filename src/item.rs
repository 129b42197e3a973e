use {super::*, crate::utils::deserialize_optional_string};

/// One record returned by a feed endpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Item {
  pub(crate) image: Option<String>,
  pub(crate) key: Option<String>,
  pub(crate) location: Option<(f64, f64)>,
  pub(crate) text: Option<String>,
  pub(crate) title: Option<String>,
  pub(crate) votes: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
  Record(Record),
  Text(String),
}

#[derive(Deserialize)]
struct Record {
  #[serde(default, alias = "imageUrl", alias = "img")]
  image: Option<String>,
  #[serde(
    default,
    alias = "id",
    deserialize_with = "deserialize_optional_string"
  )]
  key: Option<String>,
  #[serde(default)]
  lat: Option<f64>,
  #[serde(default)]
  lng: Option<f64>,
  #[serde(default, alias = "content", alias = "comment")]
  text: Option<String>,
  #[serde(default, alias = "header")]
  title: Option<String>,
  #[serde(default)]
  votes: Option<u64>,
}

impl Item {
  pub(crate) fn display_text(&self) -> Option<&str> {
    [self.title.as_deref(), self.text.as_deref()]
      .into_iter()
      .flatten()
      .map(str::trim)
      .find(|text| !text.is_empty())
  }

  /// Decodes one list entry. `null` and blank entries decode to an item with
  /// no display text, which renders as a blank row.
  pub(crate) fn from_value(value: Value) -> Result<Self, String> {
    let item = match serde_json::from_value::<Option<RawItem>>(value)
      .map_err(|error| format!("unrecognized item: {error}"))?
    {
      None => Self::default(),
      Some(RawItem::Text(text)) => Self {
        text: Some(text),
        ..Self::default()
      },
      Some(RawItem::Record(record)) => Self {
        image: record.image.filter(|image| !image.is_empty()),
        key: record.key,
        location: record.lat.zip(record.lng),
        text: record.text,
        title: record.title,
        votes: record.votes,
      },
    };

    if item.display_text().is_none() {
      tracing::debug!(?item, "item has no display text");
    }

    Ok(item)
  }
}
