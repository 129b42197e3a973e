use super::*;

/// Raw values typed by the user, read fresh for every request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Inputs {
  pub(crate) filter: Option<String>,
  pub(crate) limit: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Mutation {
  DeleteAll {
    path: String,
  },
  DeleteSelected {
    confirm: bool,
    param: String,
    path: String,
  },
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum View {
  Chart,
  List,
}

/// One fetch-render cycle: an endpoint, the parameters it takes, how its body
/// is encoded, and the mutations that refresh it.
#[derive(Clone, Debug)]
pub(crate) struct Feed {
  pub(crate) endorse: Option<String>,
  pub(crate) filter: Option<Parameter>,
  pub(crate) format: BodyFormat,
  pub(crate) label: String,
  pub(crate) limit: Option<Parameter>,
  pub(crate) mutation: Option<Mutation>,
  pub(crate) path: String,
  pub(crate) view: View,
}

impl TryFrom<&FeedConfig> for Feed {
  type Error = anyhow::Error;

  fn try_from(config: &FeedConfig) -> Result<Self> {
    anyhow::ensure!(!config.label.is_empty(), "feed label must not be empty");

    anyhow::ensure!(
      !config.path.is_empty(),
      "feed `{}` has an empty path",
      config.label
    );

    let limit = config
      .limit_param
      .as_deref()
      .map(|name| Parameter::new(name, &config.default_limit.to_string()));

    let filter = config
      .filter_param
      .as_deref()
      .map(|name| Parameter::new(name, &config.default_filter));

    let mutation = config.mutation.as_ref().map(|mutation| match mutation {
      MutationConfig::DeleteAll { path } => Mutation::DeleteAll {
        path: path.clone(),
      },
      MutationConfig::DeleteSelected {
        confirm,
        param,
        path,
      } => Mutation::DeleteSelected {
        confirm: *confirm,
        param: param.clone(),
        path: path.clone(),
      },
    });

    Ok(Self {
      endorse: config.endorse_path.clone(),
      filter,
      format: config.format,
      label: config.label.clone(),
      limit,
      mutation,
      path: config.path.clone(),
      view: config.view,
    })
  }
}

impl Feed {
  /// Delete variant of the cycle: one mutation, then one refresh.
  pub(crate) async fn delete<T: Transport, C: Container>(
    &self,
    client: &Client<T>,
    container: &mut C,
    key: Option<&str>,
    inputs: &Inputs,
  ) -> Result<(), FetchError> {
    let Some(mutation) = &self.mutation else {
      return Ok(());
    };

    match mutation {
      Mutation::DeleteAll { path } => {
        tracing::info!(feed = %self.label, "deleting all items");
        client.post(path, Vec::new(), Vec::new()).await?;
      }
      Mutation::DeleteSelected { param, path, .. } => {
        let Some(key) = key.filter(|key| !key.is_empty()) else {
          return Err(FetchError::Parameter {
            name: param.clone(),
            value: String::new(),
          });
        };

        tracing::info!(feed = %self.label, key, "deleting item");

        client
          .post(path, vec![(param.clone(), key.to_string())], Vec::new())
          .await?;
      }
    }

    self.refresh(client, container, inputs).await
  }

  pub(crate) async fn endorse<T: Transport, C: Container>(
    &self,
    client: &Client<T>,
    container: &mut C,
    skill: &str,
    inputs: &Inputs,
  ) -> Result<(), FetchError> {
    let Some(path) = &self.endorse else {
      return Ok(());
    };

    tracing::info!(feed = %self.label, skill, "endorsing skill");

    client
      .post(path, vec![("skill".to_string(), skill.to_string())], Vec::new())
      .await?;

    self.refresh(client, container, inputs).await
  }

  pub(crate) async fn load<T: Transport>(
    &self,
    client: &Client<T>,
    inputs: &Inputs,
  ) -> Result<Vec<Element>, FetchError> {
    let query = self.query(inputs)?;

    let body = client.get_text(&self.path, query).await?;

    let items = self.format.decode(&body).map_err(|message| {
      let error = FetchError::body(self.path.clone(), message);
      tracing::warn!(%error, kind = error.kind(), "could not decode response");
      error
    })?;

    tracing::debug!(feed = %self.label, count = items.len(), "loaded items");

    Ok(items.into_iter().map(Element::from).collect())
  }

  pub(crate) fn needs_confirmation(&self) -> bool {
    matches!(
      self.mutation,
      Some(Mutation::DeleteSelected { confirm: true, .. })
    )
  }

  pub(crate) fn query(
    &self,
    inputs: &Inputs,
  ) -> Result<Vec<(String, String)>, FetchError> {
    let mut query = Vec::new();

    if let Some(limit) = &self.limit {
      query.push(limit.resolve_count(inputs.limit.as_deref())?);
    }

    if let Some(filter) = &self.filter {
      query.push(filter.resolve_text(inputs.filter.as_deref()));
    }

    Ok(query)
  }

  /// Fetches and, only once the response is decoded, replaces the container.
  pub(crate) async fn refresh<T: Transport, C: Container>(
    &self,
    client: &Client<T>,
    container: &mut C,
    inputs: &Inputs,
  ) -> Result<(), FetchError> {
    let elements = self.load(client, inputs).await?;

    container.render(elements);

    Ok(())
  }
}
