use serde_json::{json, Value};
use std::collections::BTreeSet;

use crate::errors::{ClientError, ClientResult};
use crate::models::message::Message;
use crate::models::response::ModelResponse;

/// Build the body of a non-streaming `/api/chat` request
pub fn chat_payload(model: &str, messages: &[Message]) -> Value {
    json!({
        "model": model,
        "messages": messages,
        "stream": false,
    })
}

/// Extract the assistant reply from an `/api/chat` response
///
/// A missing `message` object or `content` field is an empty reply. A `message`
/// that is present but not an object, `null` included, is malformed.
pub fn chat_response_to_model_response(data: &Value) -> ClientResult<ModelResponse> {
    if !data.is_object() {
        return Err(ClientError::Decode(format!(
            "expected a JSON object, got {}",
            data
        )));
    }

    let content = match data.get("message") {
        None => "",
        Some(message @ Value::Object(_)) => message
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default(),
        Some(other) => {
            return Err(ClientError::Decode(format!(
                "expected `message` to be an object, got {}",
                other
            )))
        }
    };

    Ok(ModelResponse::new(content))
}

/// Collect the distinct base model names from an `/api/tags` response
pub fn tags_to_model_names(data: &Value) -> ClientResult<BTreeSet<String>> {
    if !data.is_object() {
        return Err(ClientError::Decode(format!(
            "expected a JSON object, got {}",
            data
        )));
    }

    let names = data
        .get("models")
        .and_then(Value::as_array)
        .map(|models| {
            models
                .iter()
                .filter_map(|model| model.get("name").and_then(Value::as_str))
                .map(|name| base_model_name(name).to_string())
                .collect()
        })
        .unwrap_or_default();

    Ok(names)
}

/// Strip the `:tag` suffix from a model name, `llama2:13b` becomes `llama2`
pub fn base_model_name(name: &str) -> &str {
    name.split_once(':').map_or(name, |(base, _)| base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_payload_preserves_message_order() {
        let messages = vec![
            Message::system("be brief"),
            Message::user("hello"),
            Message::assistant("hi"),
            Message::user("again"),
        ];

        let payload = chat_payload("mistral", &messages);

        assert_eq!(
            payload,
            json!({
                "model": "mistral",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "hello"},
                    {"role": "assistant", "content": "hi"},
                    {"role": "user", "content": "again"}
                ],
                "stream": false
            })
        );
    }

    #[test]
    fn test_chat_response_extracts_content() {
        let data = json!({
            "model": "mistral",
            "message": {"role": "assistant", "content": "hi"},
            "done": true
        });
        let response = chat_response_to_model_response(&data).unwrap();
        assert_eq!(response.content, "hi");
    }

    #[test]
    fn test_chat_response_missing_fields_is_empty() {
        for data in [
            json!({}),
            json!({"message": {}}),
            json!({"message": {"content": null}}),
        ] {
            let response = chat_response_to_model_response(&data).unwrap();
            assert_eq!(response.content, "", "payload: {}", data);
        }
    }

    #[test]
    fn test_chat_response_rejects_non_object_message() {
        for data in [json!({"message": null}), json!({"message": "hi"})] {
            let result = chat_response_to_model_response(&data);
            assert!(matches!(result, Err(ClientError::Decode(_))), "payload: {}", data);
        }
    }

    #[test]
    fn test_chat_response_rejects_non_object() {
        let result = chat_response_to_model_response(&json!(["hi"]));
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_tags_strip_suffix_and_dedupe() {
        let data = json!({
            "models": [
                {"name": "llama2:7b"},
                {"name": "llama2:13b"},
                {"name": "mistral:latest"}
            ]
        });
        let names = tags_to_model_names(&data).unwrap();
        assert_eq!(
            names,
            BTreeSet::from(["llama2".to_string(), "mistral".to_string()])
        );
    }

    #[test]
    fn test_tags_skip_entries_without_name() {
        let data = json!({
            "models": [{"name": "phi"}, {"model": "orphan:1b"}, {"name": 7}]
        });
        let names = tags_to_model_names(&data).unwrap();
        assert_eq!(names, BTreeSet::from(["phi".to_string()]));
    }

    #[test]
    fn test_tags_without_models_is_empty() {
        assert!(tags_to_model_names(&json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_base_model_name() {
        assert_eq!(base_model_name("mistral"), "mistral");
        assert_eq!(base_model_name("mistral:latest"), "mistral");
        assert_eq!(base_model_name("hf.co/org/model:Q4:extra"), "hf.co/org/model");
        assert_eq!(base_model_name(":tag"), "");
    }
}
