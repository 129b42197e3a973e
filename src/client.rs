use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Authentication {
  pub(crate) authentication_action: String,
  pub(crate) authentication_url: String,
}

#[derive(Clone)]
pub(crate) struct Client<T> {
  contact_path: String,
  pub(crate) transport: T,
}

impl<T: Transport> Client<T> {
  const AUTHENTICATION_PATH: &str = "/authentication-url";

  const UPLOAD_URL_PATH: &str = "/blobstore-upload-url";

  pub(crate) async fn authentication(&self) -> Result<Authentication, FetchError> {
    let value = self.get_json(Self::AUTHENTICATION_PATH, Vec::new()).await?;

    serde_json::from_value(value)
      .map_err(|error| FetchError::body(Self::AUTHENTICATION_PATH, error))
  }

  pub(crate) async fn get_json(
    &self,
    path: &str,
    query: Vec<(String, String)>,
  ) -> Result<Value, FetchError> {
    let body = self.get_text(path, query).await?;

    serde_json::from_str(&body).map_err(|error| FetchError::body(path, error))
  }

  pub(crate) async fn get_text(
    &self,
    path: &str,
    query: Vec<(String, String)>,
  ) -> Result<String, FetchError> {
    Ok(self.send(Request::get(path, query)).await?.body)
  }

  pub(crate) fn new(transport: T) -> Self {
    Self {
      contact_path: "/message".to_string(),
      transport,
    }
  }

  pub(crate) async fn post(
    &self,
    path: &str,
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
  ) -> Result<(), FetchError> {
    self.send(Request::post(path, query, form)).await.map(|_| ())
  }

  async fn send(&self, request: Request) -> Result<Response, FetchError> {
    tracing::debug!(%request, "sending request");

    let path = request.path.clone();

    let response = match self.transport.send(request).await {
      Ok(response) => response,
      Err(error) => {
        tracing::warn!(%error, kind = error.kind(), "request failed");
        return Err(error);
      }
    };

    if !response.is_success() {
      let error = FetchError::Status {
        status: response.status,
        url: path,
      };

      tracing::warn!(%error, kind = error.kind(), "request failed");

      return Err(error);
    }

    tracing::debug!(
      path = %path,
      status = response.status,
      bytes = response.body.len(),
      "received response"
    );

    Ok(response)
  }

  pub(crate) async fn submit_message(
    &self,
    form: &ContactForm,
  ) -> Result<(), FetchError> {
    self
      .post(&self.contact_path, Vec::new(), form.to_form())
      .await
  }

  pub(crate) async fn upload_url(&self) -> Result<String, FetchError> {
    let url = self.get_text(Self::UPLOAD_URL_PATH, Vec::new()).await?;

    let url = url.trim();

    if url.is_empty() {
      return Err(FetchError::body(Self::UPLOAD_URL_PATH, "empty upload url"));
    }

    Ok(url.to_string())
  }

  pub(crate) fn with_contact_path(mut self, path: &str) -> Self {
    self.contact_path = path.to_string();
    self
  }
}
