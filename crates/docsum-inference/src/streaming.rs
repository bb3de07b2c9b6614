//! NDJSON stream parsing for streaming generate responses.

use std::io::Write;
use std::pin::Pin;

use futures::{Stream, StreamExt};
use serde::Deserialize;

use docsum_core::{Error, Result};

/// Stream of generation text fragments.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Destination for mirroring fragments as they arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEcho {
    /// Accumulate silently.
    Silent,
    /// Mirror each fragment to stdout for progress visibility.
    Stdout,
}

/// One NDJSON line of a streaming generate response.
#[derive(Deserialize)]
struct GenerateChunk {
    #[serde(default)]
    response: String,
    #[serde(default)]
    error: Option<String>,
}

/// Parse the NDJSON body of a streaming generate call into a token stream.
///
/// Transport chunks do not align with line boundaries, so a partial
/// trailing line is carried over and completed by the next chunk. The
/// terminal `done` line carries no text and produces no fragment.
pub fn parse_ndjson_stream(
    stream: impl Stream<Item = std::result::Result<bytes::Bytes, reqwest::Error>> + Send + 'static,
) -> TokenStream {
    let token_stream = stream
        .scan(String::new(), |buffer, chunk_result| {
            let items = match chunk_result {
                Ok(bytes) => {
                    buffer.push_str(&String::from_utf8_lossy(&bytes));
                    drain_complete_lines(buffer)
                }
                Err(e) => vec![Err(Error::Inference(format!("Stream error: {}", e)))],
            };
            futures::future::ready(Some(items))
        })
        .flat_map(futures::stream::iter);

    Box::pin(token_stream)
}

/// Split complete lines off the front of the buffer and parse each one.
fn drain_complete_lines(buffer: &mut String) -> Vec<Result<String>> {
    let mut items = Vec::new();
    while let Some(newline) = buffer.find('\n') {
        let line: String = buffer.drain(..=newline).collect();
        if let Some(item) = parse_generate_line(line.trim()) {
            items.push(item);
        }
    }
    items
}

/// Parse a single NDJSON line and extract the fragment it carries.
fn parse_generate_line(line: &str) -> Option<Result<String>> {
    if line.is_empty() {
        return None;
    }

    match serde_json::from_str::<GenerateChunk>(line) {
        Ok(chunk) => {
            if let Some(message) = chunk.error {
                return Some(Err(Error::Inference(format!(
                    "Generation stream error: {}",
                    message
                ))));
            }
            if chunk.response.is_empty() {
                None
            } else {
                Some(Ok(chunk.response))
            }
        }
        Err(e) => Some(Err(Error::Inference(format!(
            "Failed to parse stream line: {}",
            e
        )))),
    }
}

/// Fold a token stream into the final text, in arrival order.
///
/// No reordering, no deduplication. With [`StreamEcho::Stdout`] each
/// fragment is mirrored to stdout as it arrives, independent of the
/// returned aggregate.
pub async fn collect_stream(mut stream: TokenStream, echo: StreamEcho) -> Result<String> {
    let mut text = String::new();
    while let Some(fragment) = stream.next().await {
        let fragment = fragment?;
        if echo == StreamEcho::Stdout {
            print!("{}", fragment);
            let _ = std::io::stdout().flush();
        }
        text.push_str(&fragment);
    }
    if echo == StreamEcho::Stdout {
        println!();
    }
    Ok(text)
}
