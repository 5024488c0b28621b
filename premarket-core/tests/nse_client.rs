use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use premarket_core::{filter_records, ErrorKind, FilterCriteria, FilterOutcome, NseClient, NseConfig};

const PRE_OPEN_BODY: &str = r#"{"data": [
    {"metadata": {"symbol": "A", "pChange": 5, "lastPrice": 200, "finalQuantity": 10,
                  "totalTurnover": 200000, "yearLow": 150, "yearHigh": 250}},
    {"metadata": {"symbol": "B", "pChange": -25, "lastPrice": 150, "totalTurnover": 300000}}
]}"#;

/// Answers one canned response per accepted connection, returning the
/// raw request heads it saw.
fn serve(responses: Vec<String>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for response in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            requests.push(String::from_utf8_lossy(&buf).to_ascii_lowercase());
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        requests
    });
    (format!("http://{}", addr), handle)
}

fn http_response(status: &str, headers: &[&str], body: &str) -> String {
    let mut out = format!("HTTP/1.1 {}\r\n", status);
    for header in headers {
        out.push_str(header);
        out.push_str("\r\n");
    }
    out.push_str(&format!("Content-Length: {}\r\nConnection: close\r\n\r\n{}", body.len(), body));
    out
}

fn client_for(base_url: &str) -> NseClient {
    let mut config = NseConfig::default().with_base_url(base_url);
    config.use_system_proxy = false;
    NseClient::new(config).unwrap()
}

#[test]
fn test_bootstrap_cookies_are_forwarded_to_data_fetch() {
    let (base_url, server) = serve(vec![
        http_response(
            "200 OK",
            &["Set-Cookie: nsit=abc; Path=/", "Set-Cookie: nseappid=xyz; Path=/; HttpOnly"],
            "<html>home</html>",
        ),
        http_response("200 OK", &["Content-Type: application/json"], PRE_OPEN_BODY),
    ]);
    let client = client_for(&base_url);

    let session = client.acquire_session().unwrap();
    assert_eq!(session.header_value().as_deref(), Some("nsit=abc; nseappid=xyz"));

    let records = client.fetch_records(&session).unwrap();
    assert_eq!(records.len(), 2);

    let requests = server.join().unwrap();
    assert!(requests[0].starts_with("get / "));
    assert!(requests[0].contains("user-agent: mozilla/5.0"));
    assert!(requests[1].starts_with("get /api/market-data-pre-open?key=all "));
    assert!(requests[1].contains("user-agent: mozilla/5.0"));
    assert!(requests[1].contains("cookie: nsit=abc; nseappid=xyz"));

    match filter_records(&records, &FilterCriteria::default()) {
        FilterOutcome::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].symbol, "A");
            assert_eq!(rows[0].quantity, Some(serde_json::Number::from(10)));
            assert_eq!(rows[0].year_low, Some(150.0));
            assert_eq!(rows[0].year_high, Some(250.0));
        }
        other => panic!("expected rows, got {:?}", other),
    }
}

#[test]
fn test_load_snapshot_runs_both_requests() {
    let (base_url, server) = serve(vec![
        http_response("200 OK", &["Set-Cookie: nsit=abc"], ""),
        http_response("200 OK", &[], r#"{"data": []}"#),
    ]);

    let snapshot = client_for(&base_url).load_snapshot().unwrap();
    assert!(snapshot.records.is_empty());
    assert_eq!(server.join().unwrap().len(), 2);
}

#[test]
fn test_non_success_bootstrap_is_network_error() {
    let (base_url, server) = serve(vec![http_response("403 Forbidden", &[], "denied")]);

    let err = client_for(&base_url).acquire_session().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().starts_with("Error fetching cookies"));
    server.join().unwrap();
}

#[test]
fn test_non_success_fetch_is_network_error() {
    let (base_url, server) = serve(vec![
        http_response("200 OK", &["Set-Cookie: nsit=abc"], ""),
        http_response("401 Unauthorized", &[], "{}"),
    ]);

    let err = client_for(&base_url).load_snapshot().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.to_string().starts_with("Error fetching data from API"));
    server.join().unwrap();
}

#[test]
fn test_non_json_body_is_decode_error() {
    let body = "<html><title>Resource not found</title></html>";
    let (base_url, server) = serve(vec![
        http_response("200 OK", &["Set-Cookie: nsit=abc"], ""),
        http_response("200 OK", &["Content-Type: text/html"], body),
    ]);

    let err = client_for(&base_url).load_snapshot().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.body(), Some(body));
    server.join().unwrap();
}

#[test]
fn test_unreachable_host_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{}", addr)).acquire_session().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
}
