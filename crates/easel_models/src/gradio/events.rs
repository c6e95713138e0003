//! Server-sent event parsing for Gradio job results.

use easel_error::{ModelsError, ModelsErrorKind, ModelsResult};
use serde_json::Value;

/// Extracts the payload of the `complete` event from a Gradio SSE body.
///
/// Gradio streams `event:`/`data:` pairs (`generating`, `heartbeat`,
/// `complete`, `error`). Only the `complete` payload is returned; an `error`
/// event or a stream that ends without completing is an error.
///
/// # Examples
///
/// ```
/// use easel_models::parse_event_stream;
///
/// let body = "event: generating\ndata: null\n\nevent: complete\ndata: [\"/tmp/a.webp\", 7]\n\n";
/// let value = parse_event_stream(body).unwrap();
/// assert_eq!(value[1], 7);
/// ```
pub fn parse_event_stream(body: &str) -> ModelsResult<Value> {
    let mut event = "";

    for line in body.lines() {
        let line = line.trim_end_matches('\r');
        if let Some(name) = line.strip_prefix("event:") {
            event = name.trim();
        } else if let Some(data) = line.strip_prefix("data:") {
            let data = data.trim();
            match event {
                "complete" => {
                    return serde_json::from_str(data).map_err(|e| {
                        ModelsError::new(ModelsErrorKind::ResponseParsing(format!(
                            "Invalid complete payload: {}",
                            e
                        )))
                    });
                }
                "error" => {
                    return Err(ModelsError::new(ModelsErrorKind::Gradio(data.to_string())));
                }
                _ => {}
            }
        }
    }

    Err(ModelsError::new(ModelsErrorKind::ResponseParsing(
        "Event stream ended without a complete event".to_string(),
    )))
}
