//! Translation of edit operations into Docs `batchUpdate` requests.

use redline_core::edits::{ColorTarget, EditOperation, TextStyle};
use serde_json::{Value, json};

/// One `batchUpdate` request object for `operation`.
#[must_use]
pub fn to_request(operation: &EditOperation) -> Value {
    match operation {
        EditOperation::UpdateTextStyle { range, style } => {
            let (color_field, fields) = color_field(style);
            json!({
                "updateTextStyle": {
                    "range": {"startIndex": range.start, "endIndex": range.end},
                    "textStyle": {
                        "strikethrough": style.strikethrough,
                        color_field: {
                            "color": {"rgbColor": {
                                "red": style.color.red,
                                "green": style.color.green,
                                "blue": style.color.blue,
                            }}
                        }
                    },
                    "fields": fields,
                }
            })
        }
        EditOperation::InsertText { index, text } => json!({
            "insertText": {
                "location": {"index": index},
                "text": text,
            }
        }),
    }
}

/// The full `batchUpdate` body for `operations`, in order.
#[must_use]
pub fn batch_update_body(operations: &[EditOperation]) -> Value {
    json!({ "requests": operations.iter().map(to_request).collect::<Vec<_>>() })
}

const fn color_field(style: &TextStyle) -> (&'static str, &'static str) {
    match style.target {
        ColorTarget::Background => ("backgroundColor", "strikethrough,backgroundColor"),
        ColorTarget::Foreground => ("foregroundColor", "strikethrough,foregroundColor"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use redline_core::edits::{MarkupPalette, NativeRange};

    use super::*;

    #[test]
    fn style_request_sets_strikethrough_and_colour_explicitly() {
        let op = EditOperation::UpdateTextStyle {
            range: NativeRange::new(121, 128),
            style: TextStyle::added(&MarkupPalette::default()),
        };
        assert_eq!(
            to_request(&op),
            json!({
                "updateTextStyle": {
                    "range": {"startIndex": 121, "endIndex": 128},
                    "textStyle": {
                        "strikethrough": false,
                        "backgroundColor": {"color": {"rgbColor": {"red": 0.85, "green": 1.0, "blue": 0.85}}}
                    },
                    "fields": "strikethrough,backgroundColor"
                }
            })
        );
    }

    #[test]
    fn foreground_palette_targets_foreground_colour() {
        let palette = MarkupPalette {
            target: ColorTarget::Foreground,
            ..MarkupPalette::default()
        };
        let op = EditOperation::UpdateTextStyle {
            range: NativeRange::new(1, 2),
            style: TextStyle::removed(&palette),
        };
        let request = to_request(&op);
        assert_eq!(
            request["updateTextStyle"]["fields"],
            "strikethrough,foregroundColor"
        );
        assert!(request["updateTextStyle"]["textStyle"]["foregroundColor"].is_object());
    }

    #[test]
    fn batch_preserves_order() {
        let body = batch_update_body(&[
            EditOperation::InsertText {
                index: 120,
                text: " 30 days".into(),
            },
            EditOperation::UpdateTextStyle {
                range: NativeRange::new(121, 128),
                style: TextStyle::added(&MarkupPalette::default()),
            },
        ]);
        let requests = body["requests"].as_array().unwrap();
        assert_eq!(
            requests[0],
            json!({"insertText": {"location": {"index": 120}, "text": " 30 days"}})
        );
        assert!(requests[1].get("updateTextStyle").is_some());
    }
}
