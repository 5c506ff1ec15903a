use assert_json_diff::{assert_json_eq, assert_json_include};
use eml_client::constants::{DEFAULT_CHAT_MODEL, DEFAULT_CHAT_PROMPT};
use eml_client::model::requests::{ChatPrompt, ChatRequest, EmlPayload, UploadFile};
use eml_client::presentation::{Body, Header};
use serde_json::json;

#[test]
fn test_chat_prompt_default() {
    let prompt = ChatPrompt::default();
    assert_eq!(prompt.prompt, DEFAULT_CHAT_PROMPT);
    assert_eq!(prompt.model, DEFAULT_CHAT_MODEL);
    assert_eq!(prompt.model, "gpt-3.5-turbo");
}

#[test]
fn test_chat_request_shape() {
    let header = Header {
        subject: Some("Invoice overdue".to_string()),
        from_: Some("billing@example.com".to_string()),
        to: vec!["victim@example.org".to_string()],
        ..Default::default()
    };
    let body = Body {
        content_type: Some("text/plain".to_string()),
        hash: "deadbeef".to_string(),
        content: "Please pay now".to_string(),
        ..Default::default()
    };
    let request = ChatRequest {
        header: &header,
        body: &body,
        prompt: ChatPrompt::new("Is this phishing?", "gpt-4o-mini"),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_json_include!(
        actual: value.clone(),
        expected: json!({
            "header": {
                "subject": "Invoice overdue",
                "from": "billing@example.com",
                "to": ["victim@example.org"]
            },
            "body": {
                "contentType": "text/plain",
                "hash": "deadbeef",
                "content": "Please pay now"
            },
            "prompt": {"prompt": "Is this phishing?", "model": "gpt-4o-mini"}
        })
    );
    assert_json_eq!(
        value["prompt"].clone(),
        json!({"prompt": "Is this phishing?", "model": "gpt-4o-mini"})
    );
    assert!(value["body"].get("aiText").is_none());
}

#[test]
fn test_eml_payload_shape() {
    let payload = EmlPayload::new("Subject: hi\r\n\r\nbody");
    assert_json_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"file": "Subject: hi\r\n\r\nbody"})
    );
}

#[test]
fn test_upload_file_new() {
    let file = UploadFile::new("sample.eml", b"Subject: hi".to_vec());
    assert_eq!(file.file_name, "sample.eml");
    assert_eq!(file.bytes, b"Subject: hi");
    let _form = file.into_form();
}
