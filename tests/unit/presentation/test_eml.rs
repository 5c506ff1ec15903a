use eml_client::presentation::{Attachment, Body, Eml, Header, HeaderValue};
use serde_json::json;

fn header_json() -> serde_json::Value {
    json!({
        "messageId": "<123@example.com>",
        "subject": "Your account",
        "from": "support@examp1e.com",
        "date": "2024-03-01T10:15:00+01:00",
        "to": ["alice@example.org"],
        "cc": [],
        "bcc": [],
        "deliveredTo": [],
        "received": [{
            "by": ["mx.example.org"],
            "date": "2024-03-01T09:15:02+00:00",
            "for": ["alice@example.org"],
            "from": ["mail.examp1e.com"],
            "with": "ESMTPS",
            "delay": 2.0,
            "src": "203.0.113.7"
        }],
        "receivedEmail": [],
        "receivedForemail": ["alice@example.org"],
        "receivedDomain": ["examp1e.com"],
        "receivedIp": ["203.0.113.7"],
        "receivedSrc": [],
        "header": {
            "subject": "Your account",
            "received": ["from a by b", "from c by d"]
        }
    })
}

#[test]
fn test_header_deserialize() {
    let header: Header = serde_json::from_value(header_json()).unwrap();
    assert_eq!(header.message_id.as_deref(), Some("<123@example.com>"));
    assert_eq!(header.from_.as_deref(), Some("support@examp1e.com"));
    assert_eq!(header.received.len(), 1);
    let hop = &header.received[0];
    assert_eq!(hop.for_.as_deref(), Some(&["alice@example.org".to_string()][..]));
    assert_eq!(hop.from_.as_ref().unwrap()[0], "mail.examp1e.com");
    assert_eq!(hop.delay, Some(2.0));
    assert_eq!(header.received_ip, vec!["203.0.113.7"]);
}

#[test]
fn test_header_raw_values() {
    let header: Header = serde_json::from_value(header_json()).unwrap();
    assert_eq!(
        header.get("subject"),
        Some(&HeaderValue::Single("Your account".to_string()))
    );
    assert_eq!(
        header.get("Received").map(|v| v.values()),
        Some(vec!["from a by b", "from c by d"])
    );
    assert!(header.get("x-missing").is_none());
}

#[test]
fn test_header_parsed_date() {
    let header: Header = serde_json::from_value(header_json()).unwrap();
    let date = header.parsed_date().unwrap();
    assert_eq!(date.to_rfc3339(), "2024-03-01T10:15:00+01:00");

    let header = Header {
        date: Some("Fri, 1 Mar 2024 10:15:00".to_string()),
        ..Default::default()
    };
    assert!(header.parsed_date().is_none());
}

#[test]
fn test_header_minimal_uses_defaults() {
    let header: Header = serde_json::from_value(json!({"subject": null})).unwrap();
    assert!(header.subject.is_none());
    assert!(header.to.is_empty());
    assert!(header.header.is_empty());
}

#[test]
fn test_header_serializes_wire_names() {
    let header: Header = serde_json::from_value(header_json()).unwrap();
    let value = serde_json::to_value(&header).unwrap();
    assert_eq!(value["from"], "support@examp1e.com");
    assert_eq!(value["messageId"], "<123@example.com>");
    assert_eq!(value["received"][0]["for"][0], "alice@example.org");
    assert!(value.get("from_").is_none());
}

#[test]
fn test_body_requires_hash_and_content() {
    let body: Body = serde_json::from_value(json!({
        "contentType": "text/plain; charset=utf-8",
        "hash": "abc",
        "content": "hello",
        "urls": ["https://examp1e.com/login"],
        "aiText": "Looks suspicious"
    }))
    .unwrap();
    assert!(body.is_plaintext());
    assert_eq!(body.urls.len(), 1);
    assert!(body.emails.is_empty());
    assert_eq!(body.ai_text.as_deref(), Some("Looks suspicious"));

    assert!(serde_json::from_value::<Body>(json!({"content": "hello"})).is_err());
}

#[test]
fn test_attachment_deserialize() {
    let attachment: Attachment = serde_json::from_value(json!({
        "hash": {"md5": "m", "sha1": "s1", "sha256": "s256", "sha512": "s512"},
        "mimeType": "application/vnd.ms-excel",
        "mimeTypeShort": "xls",
        "raw": "0M8R4KGxGuE=",
        "filename": "invoice.xls",
        "size": 8,
        "extension": "xls"
    }))
    .unwrap();
    assert_eq!(attachment.hash.sha256, "s256");
    assert_eq!(attachment.extension.as_deref(), Some("xls"));
    assert_eq!(attachment.size, 8);

    let value = serde_json::to_value(&attachment).unwrap();
    assert_eq!(value["mimeTypeShort"], "xls");
}

#[test]
fn test_eml_plaintext_body() {
    let eml = Eml {
        header: Header::default(),
        bodies: vec![
            Body {
                content_type: Some("text/html".to_string()),
                hash: "h1".to_string(),
                content: "<p>hi</p>".to_string(),
                ..Default::default()
            },
            Body {
                content_type: Some("text/plain".to_string()),
                hash: "h2".to_string(),
                content: "hi".to_string(),
                ..Default::default()
            },
        ],
        attachments: vec![],
    };
    assert_eq!(eml.plaintext_body().map(|b| b.hash.as_str()), Some("h2"));
    assert!(Eml::default().plaintext_body().is_none());
}
