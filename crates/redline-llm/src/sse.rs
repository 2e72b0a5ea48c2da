//! Accumulation of a streamed chat completion into one string.
//!
//! The stream is server-sent events: `data: <json>` lines separated by blank
//! lines, ending with `data: [DONE]`. Chunks may split lines and multi-byte
//! characters anywhere, so bytes are buffered until a full line is available.

use serde::Deserialize;

use crate::error::LlmError;

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    #[serde(default)]
    error: Option<StreamErrorBody>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Option<Delta>,
}

#[derive(Debug, Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamErrorBody {
    #[serde(default)]
    message: String,
}

/// Collects `delta.content` fragments from an event stream.
#[derive(Debug, Default)]
pub struct SseAccumulator {
    pending: Vec<u8>,
    text: String,
    done: bool,
}

impl SseAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one network chunk.
    ///
    /// # Errors
    ///
    /// [`LlmError::Stream`] when the stream carries an error event.
    pub fn push(&mut self, chunk: &[u8]) -> Result<(), LlmError> {
        self.pending.extend_from_slice(chunk);
        while let Some(newline) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=newline).collect();
            self.handle_line(&String::from_utf8_lossy(&line))?;
        }
        Ok(())
    }

    /// Whether `[DONE]` has been seen.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// The accumulated text, including a final unterminated line.
    ///
    /// # Errors
    ///
    /// See [`push`](Self::push).
    pub fn finish(mut self) -> Result<String, LlmError> {
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            self.handle_line(&String::from_utf8_lossy(&rest))?;
        }
        Ok(self.text)
    }

    fn handle_line(&mut self, line: &str) -> Result<(), LlmError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(data) = line.strip_prefix("data:") else {
            return Ok(());
        };
        let data = data.trim_start();
        if data == "[DONE]" {
            self.done = true;
            return Ok(());
        }
        if self.done || data.is_empty() {
            return Ok(());
        }

        match serde_json::from_str::<StreamChunk>(data) {
            Ok(chunk) => {
                if let Some(error) = chunk.error {
                    return Err(LlmError::Stream(error.message));
                }
                for choice in chunk.choices {
                    if let Some(content) = choice.delta.and_then(|d| d.content) {
                        self.text.push_str(&content);
                    }
                }
            }
            Err(error) => tracing::debug!(%error, "skipping unparseable stream event"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn event(content: &str) -> String {
        format!(
            "data: {}\n\n",
            serde_json::json!({"choices": [{"index": 0, "delta": {"content": content}}]})
        )
    }

    #[test]
    fn accumulates_deltas_until_done() {
        let mut acc = SseAccumulator::new();
        let stream = format!(
            "{}{}: keep-alive\n\n{}data: [DONE]\n\n{}",
            event("{\"plan_id\":"),
            event("\"p1\","),
            event("\"patches\":[]}"),
            event("ignored after done")
        );
        acc.push(stream.as_bytes()).unwrap();
        assert!(acc.is_done());
        assert_eq!(acc.finish().unwrap(), r#"{"plan_id":"p1","patches":[]}"#);
    }

    #[test]
    fn chunks_may_split_lines_and_characters() {
        let stream = format!("{}{}", event("caf\u{e9} "), event("ok"));
        let bytes = stream.as_bytes();
        let mut acc = SseAccumulator::new();
        for piece in bytes.chunks(3) {
            acc.push(piece).unwrap();
        }
        assert_eq!(acc.finish().unwrap(), "caf\u{e9} ok");
    }

    #[test]
    fn role_only_and_garbage_events_are_skipped() {
        let mut acc = SseAccumulator::new();
        acc.push(b"data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\ndata: {oops\n\n")
            .unwrap();
        acc.push(event("x").as_bytes()).unwrap();
        assert_eq!(acc.finish().unwrap(), "x");
    }

    #[test]
    fn error_event_fails_the_stream() {
        let mut acc = SseAccumulator::new();
        let err = acc
            .push(b"data: {\"error\":{\"message\":\"overloaded\"}}\n\n")
            .unwrap_err();
        assert!(matches!(err, LlmError::Stream(message) if message == "overloaded"));
    }

    #[test]
    fn unterminated_final_line_is_flushed() {
        let mut acc = SseAccumulator::new();
        acc.push(event("a").trim_end().as_bytes()).unwrap();
        assert_eq!(acc.finish().unwrap(), "a");
    }
}
