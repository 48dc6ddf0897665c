use anyhow::{Context, Result};
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use std::io::{self, Write};

use crate::archive::{ArchiveClient, ArchiveRequest, FetchError};
use crate::status;
use crate::ui::{Spinner, Style};

pub struct FetchOptions {
    pub request: ArchiveRequest,
    pub api_base: String,
    pub body: bool,
}

/// Fetches one monthly archive and prints the outcome to stdout.
///
/// Nothing is printed to stdout when the request itself fails. A non-2xx
/// response is printed and then returned as an error. If stdout's reader
/// goes away, the remaining output is skipped.
pub async fn run_fetch(options: FetchOptions) -> Result<()> {
    let client = ArchiveClient::new(options.api_base);
    let url = client.url_for(&options.request);

    let spinner = Spinner::new(&format!("Fetching {}", Style::url(&url)));
    let result = client.fetch(&options.request).await;
    spinner.stop();

    let response = result?;

    let mut stdout = io::stdout();
    let reader_open = write_summary(&mut stdout, response.url(), &response.status_line())?;

    response.ensure_success()?;

    if options.body && reader_open {
        let written = write_body(response.into_body_stream(), &mut stdout).await?;
        status!("{}", Style::success(format!("{written} bytes written")));
    }

    Ok(())
}

/// Writes the confirmation and status lines. Returns `false` if the reader is gone.
fn write_summary<W: Write>(out: &mut W, url: &str, status_line: &str) -> Result<bool> {
    let result = writeln!(out, "fetched {url}")
        .and_then(|()| writeln!(out, "{status_line}"))
        .and_then(|()| out.flush());
    reader_open(result)
}

async fn write_body<S, W>(stream: S, out: &mut W) -> Result<usize>
where
    S: Stream<Item = Result<Bytes, FetchError>>,
    W: Write,
{
    let mut stream = Box::pin(stream);
    let mut written = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;

        if !reader_open(out.write_all(&chunk).and_then(|()| out.flush()))? {
            break;
        }
        written += chunk.len();
    }

    Ok(written)
}

fn reader_open(result: io::Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(e).context("Failed to write to stdout"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures_util::stream;

    /// A writer whose reader has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    /// A writer that fails for reasons other than a closed reader.
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn chunks(parts: &[&'static str]) -> impl Stream<Item = Result<Bytes, FetchError>> + use<> {
        let items: Vec<Result<Bytes, FetchError>> = parts
            .iter()
            .copied()
            .map(|part| Ok(Bytes::from_static(part.as_bytes())))
            .collect();
        stream::iter(items)
    }

    #[test]
    fn test_write_summary_prints_two_lines() {
        let mut out = Vec::new();
        let open = write_summary(&mut out, "http://h/pub/x/pgn", "HTTP/1.1 200 OK").unwrap();

        assert!(open);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "fetched http://h/pub/x/pgn\nHTTP/1.1 200 OK\n"
        );
    }

    #[test]
    fn test_write_summary_closed_pipe_is_not_an_error() {
        let open = write_summary(&mut ClosedPipe, "http://h/pub/x/pgn", "HTTP/1.1 200 OK").unwrap();
        assert!(!open);
    }

    #[test]
    fn test_write_summary_other_io_errors_propagate() {
        let err = write_summary(&mut FullDisk, "http://h/pub/x/pgn", "HTTP/1.1 200 OK").unwrap_err();
        assert!(err.downcast_ref::<io::Error>().is_some());
    }

    #[tokio::test]
    async fn test_write_body_copies_chunks_verbatim() {
        let mut out = Vec::new();
        let written = write_body(chunks(&["[Event \"Live\"]\n", "1. e4 e5\n"]), &mut out)
            .await
            .unwrap();

        assert_eq!(written, 24);
        assert_eq!(out, b"[Event \"Live\"]\n1. e4 e5\n");
    }

    #[tokio::test]
    async fn test_write_body_stops_quietly_on_closed_pipe() {
        let written = write_body(chunks(&["1. e4", " e5"]), &mut ClosedPipe)
            .await
            .unwrap();
        assert_eq!(written, 0);
    }

    #[tokio::test]
    async fn test_write_body_propagates_stream_errors() {
        let items = vec![
            Ok(Bytes::from_static(b"1. e4")),
            Err(FetchError::Body {
                detail: "connection reset".to_string(),
            }),
        ];
        let mut out = Vec::new();
        let err = write_body(stream::iter(items), &mut out).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::Body { .. })
        ));
        assert_eq!(out, b"1. e4");
    }
}
