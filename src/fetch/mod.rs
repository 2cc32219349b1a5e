use std::time::Duration;

use reqwest::{Client, Error as RequestError};
use tracing::{instrument, Level};
use url::Url;

pub fn make_client(timeout: Duration) -> Result<Client, RequestError> {
    Client::builder()
        .gzip(true)
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

#[instrument(skip_all, fields(%url), level = Level::DEBUG)]
pub async fn homepage(client: &Client, url: &Url) -> Result<String, RequestError> {
    let start = std::time::Instant::now();
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let text = response.text().await?;
    log::debug!("Got homepage in \t {:?}", start.elapsed());
    Ok(text)
}

#[instrument(skip_all, fields(%url), level = Level::DEBUG)]
pub async fn image_bytes(client: &Client, url: &Url) -> Result<Vec<u8>, RequestError> {
    let start = std::time::Instant::now();
    let response = client.get(url.clone()).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    log::debug!(
        "Got {} bytes of menu image in \t {:?}",
        bytes.len(),
        start.elapsed()
    );
    Ok(bytes.to_vec())
}


#[cfg(test)]
mod tests {
    use super::test_server::serve_once;
    use super::*;

    fn client() -> Client {
        make_client(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_homepage() {
        let url = serve_once("200 OK", "text/html", b"<html>VanderVeg</html>".to_vec()).await;
        let page = homepage(&client(), &url).await.unwrap();
        assert_eq!(page, "<html>VanderVeg</html>");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let url = serve_once("404 Not Found", "text/html", b"gone".to_vec()).await;
        let err = homepage(&client(), &url).await.unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_fetch_image_bytes() {
        let url = serve_once("200 OK", "image/jpeg", vec![0xFF, 0xD8, 0xFF, 0xE0]).await;
        let bytes = image_bytes(&client(), &url).await.unwrap();
        assert_eq!(bytes, [0xFF, 0xD8, 0xFF, 0xE0]);
    }

    #[tokio::test]
    async fn test_unreachable_host() {
        // bind then drop so nothing is listening on the port
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let url: Url = format!("http://{addr}/").parse().unwrap();
        let err = homepage(&client(), &url).await.unwrap_err();
        assert!(err.is_connect());
    }
}
