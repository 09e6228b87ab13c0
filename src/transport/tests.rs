use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

fn request(url: &str, fields: &[(&str, &str)]) -> FormRequest {
    FormRequestBuilder::new(url)
        .fields(fields.iter().copied())
        .build()
}

#[tokio::test]
async fn test_mock_transport_basic() {
    let mut mock = MockTransport::new();

    mock.expect_post("/create_poll.php")
        .returns_body("<html></html>")
        .finish();

    let response = mock
        .post_form(request("https://polls.test/create_poll.php?type=date", &[("name", "Ann")]))
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(response.body, "<html></html>");
    assert!(mock.verify_called("create_poll.php", 1));
    assert_eq!(mock.get_call_history()[0].field("name"), Some("Ann"));
}

#[tokio::test]
async fn test_mock_transport_matches_on_fields() {
    let mut mock = MockTransport::new();

    mock.expect_post("/create_date_poll.php")
        .with_field("confirmation")
        .returns_body("finalized")
        .finish();
    mock.expect_post("/create_date_poll.php")
        .returns_body("scheduled")
        .finish();

    let url = "https://polls.test/create_date_poll.php";
    let scheduled = mock
        .post_form(request(url, &[("choixheures", "Weiter")]))
        .await
        .unwrap();
    let finalized = mock
        .post_form(request(url, &[("confirmation", "confirmation")]))
        .await
        .unwrap();

    assert_eq!(scheduled.body, "scheduled");
    assert_eq!(finalized.body, "finalized");
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_mock_transport_status_and_times() {
    let mut mock = MockTransport::new();

    mock.expect_post("/admin")
        .returns_status(404)
        .times(1)
        .finish();

    let first = mock.post_form(request("https://polls.test/admin", &[])).await.unwrap();
    assert_eq!(first.status, 404);
    assert!(!first.is_ok());

    let second = mock.post_form(request("https://polls.test/admin", &[])).await;
    assert!(matches!(second, Err(TransportError::MockExpectationNotMet(_))));
}

#[tokio::test]
async fn test_mock_transport_unexpected_request() {
    let mock = MockTransport::new();
    let result = mock.post_form(request("https://polls.test/other", &[])).await;
    assert!(matches!(result, Err(TransportError::MockExpectationNotMet(_))));
    // Unmatched requests are still recorded
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_sessions_are_tagged() {
    let (manager, mut mock) = TransportManager::mock();
    mock.expect_post("/").finish();

    let first = manager.open_session().unwrap();
    let second = manager.open_session().unwrap();

    first.post_form(request("https://polls.test/a", &[])).await.unwrap();
    second.post_form(request("https://polls.test/b", &[])).await.unwrap();
    first.post_form(request("https://polls.test/c", &[])).await.unwrap();

    assert_eq!(mock.sessions_opened(), 2);
    assert_eq!(mock.get_session_history(), vec![1, 2, 1]);
}

#[test]
fn test_reqwest_transport_builds() {
    let factory = ReqwestSessionFactory::default();
    assert!(factory.open_session().is_ok());
}

const SET_COOKIE_RESPONSE: &str = "HTTP/1.1 200 OK\r\nSet-Cookie: PHPSESSID=abc123; Path=/\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok";
const PLAIN_RESPONSE: &str = "HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok";

/// Read one request and return its header block.
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            return String::from_utf8_lossy(&buf).into_owned();
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let headers = &text[..end];
            let length = headers
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return headers.to_string();
            }
        }
    }
}

/// Answer one connection per response, recording each request's headers.
async fn serve(listener: TcpListener, responses: Vec<&'static str>) -> Vec<String> {
    let mut seen = Vec::new();
    for response in responses {
        let (mut stream, _) = listener.accept().await.unwrap();
        seen.push(read_request(&mut stream).await);
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
    }
    seen
}

fn cookie_header(headers: &str) -> Option<String> {
    headers
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("cookie"))
        .map(|(_, value)| value.trim().to_string())
}

#[tokio::test]
async fn test_reqwest_session_sends_cookies_back() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(serve(
        listener,
        vec![SET_COOKIE_RESPONSE, PLAIN_RESPONSE, PLAIN_RESPONSE],
    ));

    let factory = ReqwestSessionFactory::default();
    let session = factory.open_session().unwrap();

    let first = session
        .post_form(request(&format!("{base}/create_poll.php?type=date"), &[("name", "Ann")]))
        .await
        .unwrap();
    assert!(first.is_ok());
    assert_eq!(first.body, "ok");

    session
        .post_form(request(&format!("{base}/create_date_poll.php"), &[("choixheures", "Weiter")]))
        .await
        .unwrap();

    // a new session starts with an empty jar
    let fresh = factory.open_session().unwrap();
    fresh
        .post_form(request(&format!("{base}/create_poll.php?type=date"), &[]))
        .await
        .unwrap();

    let seen = server.await.unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen[0].starts_with("POST /create_poll.php?type=date"));
    assert_eq!(cookie_header(&seen[0]), None);
    assert_eq!(cookie_header(&seen[1]).as_deref(), Some("PHPSESSID=abc123"));
    assert_eq!(cookie_header(&seen[2]), None);
}
