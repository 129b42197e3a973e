use {super::*, reqwest::Url};

/// Sends requests to the backend.
///
/// Implementations report only transport failures. Non-success statuses come
/// back as ordinary responses and are classified by the client.
pub(crate) trait Transport: Send + Sync {
  fn send(
    &self,
    request: Request,
  ) -> impl Future<Output = Result<Response, FetchError>> + Send;
}

#[derive(Clone)]
pub(crate) struct HttpTransport {
  base_url: Url,
  client: reqwest::Client,
}

impl HttpTransport {
  pub(crate) fn new(base_url: Url) -> Self {
    Self {
      base_url,
      client: reqwest::Client::new(),
    }
  }

  fn url(&self, path: &str) -> Result<Url, FetchError> {
    self
      .base_url
      .join(path)
      .map_err(|error| FetchError::Url {
        message: error.to_string(),
        path: path.to_string(),
      })
  }
}

impl Transport for HttpTransport {
  async fn send(&self, request: Request) -> Result<Response, FetchError> {
    let url = self.url(&request.path)?;

    let builder = match request.method {
      Method::Get => self.client.get(url.clone()),
      Method::Post => self.client.post(url.clone()),
    };

    let builder = if request.query.is_empty() {
      builder
    } else {
      builder.query(&request.query)
    };

    let builder = if request.form.is_empty() {
      builder
    } else {
      builder.form(&request.form)
    };

    let transport_error = |source| FetchError::Transport {
      source,
      url: url.to_string(),
    };

    let response = builder.send().await.map_err(transport_error)?;

    let status = response.status().as_u16();

    let body = response.text().await.map_err(transport_error)?;

    Ok(Response { body, status })
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    tokio::{
      io::{AsyncReadExt, AsyncWriteExt},
      net::TcpListener,
    },
  };

  fn local(base_url: Url) -> HttpTransport {
    HttpTransport {
      base_url,
      client: reqwest::Client::builder().no_proxy().build().unwrap(),
    }
  }

  fn pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
      .iter()
      .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
      .collect()
  }

  async fn serve_once(listener: TcpListener, reply: &'static str) -> String {
    let (mut stream, _) = listener.accept().await.unwrap();

    let mut received = Vec::new();
    let mut buffer = [0; 1024];

    loop {
      let read = stream.read(&mut buffer).await.unwrap();

      if read == 0 {
        break;
      }

      received.extend_from_slice(&buffer[..read]);

      let text = String::from_utf8_lossy(&received);

      if let Some(end) = text.find("\r\n\r\n") {
        let length = text[..end]
          .lines()
          .filter_map(|line| line.split_once(':'))
          .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
          .and_then(|(_, value)| value.trim().parse::<usize>().ok())
          .unwrap_or(0);

        if received.len() >= end + 4 + length {
          break;
        }
      }
    }

    stream.write_all(reply.as_bytes()).await.unwrap();

    String::from_utf8(received).unwrap()
  }

  #[test]
  fn paths_resolve_against_base_url() {
    let transport =
      HttpTransport::new(Url::parse("http://localhost:8080/").unwrap());

    assert_eq!(
      transport.url("/delete-data").unwrap().as_str(),
      "http://localhost:8080/delete-data"
    );

    assert_eq!(
      transport.url("photo-map-data").unwrap().as_str(),
      "http://localhost:8080/photo-map-data"
    );
  }

  #[test]
  fn unjoinable_paths_are_url_errors() {
    let transport =
      HttpTransport::new(Url::parse("http://localhost:8080/").unwrap());

    let error = transport.url("http://[oops").unwrap_err();

    assert_eq!(error.kind(), "url");
    assert!(error.to_string().starts_with("cannot build a request url"));
  }

  #[tokio::test]
  async fn post_encodes_query_and_form() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let base_url =
      Url::parse(&format!("http://{}/", listener.local_addr().unwrap()))
        .unwrap();

    let server = tokio::spawn(serve_once(
      listener,
      "HTTP/1.1 201 Created\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok",
    ));

    let response = local(base_url)
      .send(Request::post(
        "/message",
        pairs(&[("max-comments", "5"), ("language", "fr")]),
        pairs(&[("fname", "Ada"), ("lname", "Lovelace")]),
      ))
      .await
      .unwrap();

    let received = server.await.unwrap();

    assert!(
      received.starts_with("POST /message?max-comments=5&language=fr HTTP/1.1\r\n"),
      "unexpected request: {received}"
    );

    assert!(
      received
        .to_ascii_lowercase()
        .contains("content-type: application/x-www-form-urlencoded"),
      "unexpected request: {received}"
    );

    assert!(received.ends_with("\r\n\r\nfname=Ada&lname=Lovelace"));

    assert_eq!(response.status, 201);
    assert_eq!(response.body, "ok");
  }

  #[tokio::test]
  async fn error_statuses_come_back_as_responses() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

    let base_url =
      Url::parse(&format!("http://{}/", listener.local_addr().unwrap()))
        .unwrap();

    let server = tokio::spawn(serve_once(
      listener,
      "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    ));

    let response = local(base_url)
      .send(Request::get("/data", Vec::new()))
      .await
      .unwrap();

    assert!(server.await.unwrap().starts_with("GET /data HTTP/1.1\r\n"));
    assert_eq!(response.status, 500);
    assert!(!response.is_success());
  }

  #[tokio::test]
  async fn unreachable_backend_is_a_transport_error() {
    let address = {
      let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
      listener.local_addr().unwrap()
    };

    let error = local(Url::parse(&format!("http://{address}/")).unwrap())
      .send(Request::get("/data", Vec::new()))
      .await
      .unwrap_err();

    assert_eq!(error.kind(), "transport");
    assert_eq!(
      error.to_string(),
      format!("could not reach http://{address}/data")
    );
  }
}
