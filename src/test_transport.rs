use super::*;

/// In-memory backend that replays canned responses and records every request.
#[derive(Default)]
pub(crate) struct TestTransport {
  requests: Mutex<Vec<Request>>,
  responses: Mutex<Vec<(String, Response)>>,
}

impl TestTransport {
  pub(crate) fn requests(&self) -> Vec<Request> {
    self.requests.lock().unwrap().clone()
  }

  pub(crate) fn respond(self, path: &str, response: Response) -> Self {
    self
      .responses
      .lock()
      .unwrap()
      .push((path.to_string(), response));

    self
  }
}

impl Transport for TestTransport {
  async fn send(&self, request: Request) -> Result<Response, FetchError> {
    self.requests.lock().unwrap().push(request.clone());

    let responses = self.responses.lock().unwrap();

    Ok(
      responses
        .iter()
        .find(|(path, _)| *path == request.path)
        .map_or_else(
          || Response {
            body: String::new(),
            status: 404,
          },
          |(_, response)| response.clone(),
        ),
    )
  }
}
