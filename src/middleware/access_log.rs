use std::time::Instant;

use tracing::info;

use super::Next;
use crate::request::Request;
use crate::response::Response;

/// Logs `<method> <path> <status> <duration>` once the response is built.
///
/// The status is read off the returned response, so it is whatever the
/// client receives: handler output, router 404/405, or a layer's override.
pub async fn access_log(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.path().to_owned();

    let res = next.run(req).await;

    info!("{} {} {} {:?}", method, path, res.status_code().as_u16(), start.elapsed());
    res
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use http::{Method, StatusCode};

    use super::*;
    use crate::Router;
    use crate::handlers::healthz;

    /// Collects everything the subscriber writes.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn lines(&self) -> Vec<String> {
            let buf = self.0.lock().unwrap();
            String::from_utf8_lossy(&buf).lines().map(str::to_owned).collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn get(path: &str) -> http::Request<()> {
        http::Request::builder().method(Method::GET).uri(path).body(()).unwrap()
    }

    /// `"12.3µs"` and friends: a number followed by a `Duration` unit.
    fn is_duration(s: &str) -> bool {
        let digits = s.trim_end_matches(|c: char| c.is_alphabetic());
        let unit = &s[digits.len()..];
        ["ns", "µs", "ms", "s"].contains(&unit) && digits.parse::<f64>().is_ok()
    }

    #[tokio::test]
    async fn one_line_per_request_with_final_status() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_level(false)
            .with_target(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = Arc::new(Router::new().any("/healthz", healthz).layer(access_log));
        app.handle(get("/healthz")).await;
        app.handle(get("/nope")).await;

        let lines = captured.lines();
        assert_eq!(lines.len(), 2, "{lines:?}");

        let ok = lines[0].trim().strip_prefix("GET /healthz 200 ").unwrap();
        assert!(is_duration(ok), "{}", lines[0]);

        let missing = lines[1].trim().strip_prefix("GET /nope 404 ").unwrap();
        assert!(is_duration(missing), "{}", lines[1]);
    }

    async fn created(_req: Request) -> Response {
        Response::builder().status(StatusCode::CREATED).text("made")
    }

    #[tokio::test]
    async fn response_passes_through_untouched() {
        let app = Arc::new(Router::new().on(Method::POST, "/things", created).layer(access_log));
        let req = http::Request::builder().method(Method::POST).uri("/things").body(()).unwrap();

        let res = app.handle(req).await;

        assert_eq!(res.status_code(), StatusCode::CREATED);
        assert_eq!(res.body(), b"made");
        assert_eq!(res.headers().len(), 1);
    }
}
