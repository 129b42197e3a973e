use super::*;

/// A rendered row in a display container.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Element {
  pub(crate) detail: Option<String>,
  pub(crate) key: Option<String>,
  pub(crate) link: Option<String>,
  pub(crate) title: String,
  pub(crate) votes: Option<u64>,
}

impl From<Item> for Element {
  fn from(item: Item) -> Self {
    let title = item.display_text().unwrap_or_default().to_string();

    let mut details = Vec::new();

    if item.title.is_some()
      && let Some(text) = item.text.filter(|text| !text.trim().is_empty())
    {
      details.push(text);
    }

    if let Some(votes) = item.votes {
      details.push(format_votes(votes));
    }

    if let Some((lat, lng)) = item.location {
      details.push(format!("{lat:.4}, {lng:.4}"));
    }

    let link = match (item.location, item.image) {
      (Some(_), _) => Some(search_link(&title)).filter(|link| !link.is_empty()),
      (None, image) => image,
    };

    Self {
      detail: (!details.is_empty()).then(|| details.join(" • ")),
      key: item.key,
      link,
      title,
      votes: item.votes,
    }
  }
}

impl Element {
  #[cfg(test)]
  pub(crate) fn text(title: &str) -> Self {
    Self {
      detail: None,
      key: None,
      link: None,
      title: title.to_string(),
      votes: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_items_render_as_titles() {
    let element = Element::from(Item {
      text: Some("Great portfolio!".to_string()),
      ..Item::default()
    });

    assert_eq!(element, Element::text("Great portfolio!"));
  }

  #[test]
  fn blog_posts_link_to_their_image() {
    let element = Element::from(Item {
      image: Some("/serve?blob-key=abc".to_string()),
      text: Some("Went hiking".to_string()),
      title: Some("Weekend".to_string()),
      ..Item::default()
    });

    assert_eq!(element.title, "Weekend");
    assert_eq!(element.detail.as_deref(), Some("Went hiking"));
    assert_eq!(element.link.as_deref(), Some("/serve?blob-key=abc"));
  }

  #[test]
  fn photo_markers_link_to_a_search() {
    let element = Element::from(Item {
      image: Some("vienna.jpg".to_string()),
      location: Some((48.2, 16.37)),
      title: Some("Vienna, Austria".to_string()),
      ..Item::default()
    });

    assert_eq!(
      element.link.as_deref(),
      Some("http://www.google.com/search?q=Vienna")
    );
    assert_eq!(element.detail.as_deref(), Some("48.2000, 16.3700"));
  }

  #[test]
  fn skills_show_vote_counts() {
    let element = Element::from(Item {
      title: Some("Rust".to_string()),
      votes: Some(1),
      ..Item::default()
    });

    assert_eq!(element.detail.as_deref(), Some("1 vote"));
    assert_eq!(element.votes, Some(1));
  }
}
