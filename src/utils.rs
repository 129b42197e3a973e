use {
  super::*,
  serde::{
    Deserializer,
    de::{self, Unexpected},
  },
};

/// A rectangle of at most `width` by `height` cells, centered in `area` with a
/// one cell margin where space allows.
pub(crate) fn centered_area(area: Rect, width: usize, height: usize) -> Rect {
  let clamp = |value: usize| u16::try_from(value).unwrap_or(u16::MAX).max(1);

  let width = clamp(width)
    .min(area.width.saturating_sub(2).max(1))
    .min(area.width);

  let height = clamp(height)
    .min(area.height.saturating_sub(2).max(1))
    .min(area.height);

  Rect::new(
    area.x + (area.width.saturating_sub(width)) / 2,
    area.y + (area.height.saturating_sub(height)) / 2,
    width,
    height,
  )
}

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

pub(crate) fn format_votes(votes: u64) -> String {
  match votes {
    1 => "1 vote".to_string(),
    _ => format!("{votes} votes"),
  }
}

/// Builds a web search link for a place name, searching only the text before
/// the first comma.
pub(crate) fn search_link(title: &str) -> String {
  const SEARCH_URL: &str = "http://www.google.com/search?q=";

  if title.is_empty() {
    return String::new();
  }

  let term = title.split(',').next().unwrap_or(title);

  format!("{SEARCH_URL}{}", term.split(' ').collect::<Vec<_>>().join("+"))
}

pub(crate) fn strip_tags(html: &str) -> String {
  let mut cleaned = String::with_capacity(html.len());
  let mut inside_tag = false;
  let mut last_was_space = false;

  for ch in html.chars() {
    match ch {
      '<' => {
        inside_tag = true;

        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      '>' => {
        inside_tag = false;
      }
      _ if inside_tag => {}
      _ if ch.is_whitespace() => {
        if !last_was_space {
          cleaned.push(' ');
          last_was_space = true;
        }
      }
      _ => {
        cleaned.push(ch);
        last_was_space = false;
      }
    }
  }

  let decoded = html_escape::decode_html_entities(cleaned.trim());

  decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = text.chars().take(max_chars).collect::<String>();

  result.truncate(result.trim_end().len());
  result.push_str("...");

  result
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();
  let mut current = String::new();

  for word in text.split_whitespace() {
    if current.is_empty() {
      current.push_str(word);
    } else if current.chars().count() + 1 + word.chars().count() <= width {
      current.push(' ');
      current.push_str(word);
    } else {
      lines.push(std::mem::take(&mut current));
      current.push_str(word);
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  lines
}
