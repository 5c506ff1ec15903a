// Common utilities for integration tests

use eml_client::prelude::*;
use mockito::ServerGuard;
use serde_json::{Value, json};

pub const ANALYSIS_ID: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";

/// Client pointed at a mock server
pub fn create_test_client(server: &ServerGuard) -> Client {
    setup_logger();
    Client::new(Config::with_base_url(server.url())).expect("client should build")
}

/// Analysis result as the backend serializes it
pub fn response_json() -> Value {
    json!({
        "id": ANALYSIS_ID,
        "eml": {
            "header": {
                "messageId": "<a1@mail.examp1e.com>",
                "subject": "Urgent: verify your account",
                "from": "security@examp1e.com",
                "date": "2024-05-02T08:00:00+00:00",
                "to": ["bob@example.org"],
                "cc": [],
                "bcc": [],
                "deliveredTo": ["bob@example.org"],
                "received": [],
                "receivedEmail": [],
                "receivedForemail": [],
                "receivedDomain": [],
                "receivedIp": [],
                "receivedSrc": [],
                "header": {"subject": "Urgent: verify your account"}
            },
            "bodies": [{
                "contentType": "text/plain",
                "hash": "c0ffee",
                "content": "Click https://examp1e.com/verify now",
                "urls": ["https://examp1e.com/verify"],
                "emails": [],
                "domains": ["examp1e.com"],
                "ipAddresses": []
            }],
            "attachments": []
        },
        "verdicts": [{
            "name": "SpamAssassin",
            "malicious": true,
            "score": 6.2,
            "details": [{"key": "PHISHING", "score": 4.0, "description": "phishing url"}]
        }]
    })
}

/// Attachment as carried in an analysis result
pub fn attachment() -> Attachment {
    serde_json::from_value(json!({
        "hash": {
            "md5": "d41d8cd98f00b204e9800998ecf8427e",
            "sha1": "da39a3ee5e6b4b0d3255bfef95601890afd80709",
            "sha256": "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            "sha512": "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce"
        },
        "mimeType": "application/msword",
        "mimeTypeShort": "doc",
        "raw": "",
        "filename": "invoice.doc",
        "size": 0,
        "extension": "doc"
    }))
    .expect("attachment fixture should be valid")
}
