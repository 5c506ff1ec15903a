/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use chrono::{DateTime, FixedOffset};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Digests of an attachment
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Hash {
    /// MD5 hex digest
    pub md5: String,
    /// SHA-1 hex digest
    pub sha1: String,
    /// SHA-256 hex digest
    pub sha256: String,
    /// SHA-512 hex digest
    pub sha512: String,
}

/// File attached to an email
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Digests of the decoded content
    pub hash: Hash,
    /// Full MIME type, e.g. `application/vnd.ms-excel`
    pub mime_type: String,
    /// Short MIME type, e.g. `xls`
    pub mime_type_short: String,
    /// Base64 encoded content
    pub raw: String,
    /// Original file name
    pub filename: String,
    /// Decoded size in bytes
    pub size: u64,
    /// File extension without the dot
    #[serde(default)]
    pub extension: Option<String>,
}

/// One MIME body part of an email
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Content type of the part, e.g. `text/plain`
    #[serde(default)]
    pub content_type: Option<String>,
    /// SHA-256 of the content
    pub hash: String,
    /// Decoded content
    pub content: String,
    /// URLs found in the content
    #[serde(default)]
    pub urls: Vec<String>,
    /// Email addresses found in the content
    #[serde(default)]
    pub emails: Vec<String>,
    /// Domains found in the content
    #[serde(default)]
    pub domains: Vec<String>,
    /// IP addresses found in the content
    #[serde(default)]
    pub ip_addresses: Vec<String>,
    /// Model-generated commentary attached by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_text: Option<String>,
}

impl Body {
    /// True for `text/plain` parts
    #[must_use]
    pub fn is_plaintext(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("text/plain"))
    }
}

/// One `Received:` hop
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Received {
    /// Receiving hosts
    #[serde(default)]
    pub by: Option<Vec<String>>,
    /// Timestamp of the hop
    #[serde(default)]
    pub date: Option<String>,
    /// Recipients named in the hop
    #[serde(rename = "for", default)]
    pub for_: Option<Vec<String>>,
    /// Sending hosts
    #[serde(rename = "from", default)]
    pub from_: Option<Vec<String>>,
    /// Protocol
    #[serde(default)]
    pub with: Option<String>,
    /// Seconds spent since the previous hop
    #[serde(default)]
    pub delay: Option<f64>,
    /// Source address
    #[serde(default)]
    pub src: Option<String>,
}

/// A raw header value, single or repeated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum HeaderValue {
    /// Header seen once
    Single(String),
    /// Header seen several times
    Multiple(Vec<String>),
}

impl HeaderValue {
    /// All values in the order they appeared
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            HeaderValue::Single(v) => vec![v.as_str()],
            HeaderValue::Multiple(vs) => vs.iter().map(String::as_str).collect(),
        }
    }
}

/// Parsed email header
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// `Message-ID`
    #[serde(default)]
    pub message_id: Option<String>,
    /// `Subject`
    #[serde(default)]
    pub subject: Option<String>,
    /// `From`
    #[serde(rename = "from", default)]
    pub from_: Option<String>,
    /// `Date`, as sent by the backend
    #[serde(default)]
    pub date: Option<String>,
    /// `To` addresses
    #[serde(default)]
    pub to: Vec<String>,
    /// `Cc` addresses
    #[serde(default)]
    pub cc: Vec<String>,
    /// `Bcc` addresses
    #[serde(default)]
    pub bcc: Vec<String>,
    /// `Delivered-To` addresses
    #[serde(default)]
    pub delivered_to: Vec<String>,
    /// `Received:` hops, most recent first
    #[serde(default)]
    pub received: Vec<Received>,
    /// Email addresses extracted from `Received:` headers
    #[serde(default)]
    pub received_email: Vec<String>,
    /// `for` addresses extracted from `Received:` headers
    #[serde(default)]
    pub received_foremail: Vec<String>,
    /// Domains extracted from `Received:` headers
    #[serde(default)]
    pub received_domain: Vec<String>,
    /// IP addresses extracted from `Received:` headers
    #[serde(default)]
    pub received_ip: Vec<String>,
    /// Source addresses extracted from `Received:` headers
    #[serde(default)]
    pub received_src: Vec<String>,
    /// Every raw header keyed by lowercase name
    #[serde(default)]
    pub header: BTreeMap<String, HeaderValue>,
}

impl Header {
    /// `Date` parsed as RFC 3339, `None` when absent or in another format
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<FixedOffset>> {
        self.date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
    }

    /// Raw values of a header, looked up case-insensitively
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HeaderValue> {
        self.header
            .get(name)
            .or_else(|| self.header.get(&name.to_lowercase()))
    }
}

/// Parsed email
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Eml {
    /// Header block
    pub header: Header,
    /// Body parts
    pub bodies: Vec<Body>,
    /// Attachments
    pub attachments: Vec<Attachment>,
}

impl Eml {
    /// First `text/plain` body, if any
    #[must_use]
    pub fn plaintext_body(&self) -> Option<&Body> {
        self.bodies.iter().find(|b| b.is_plaintext())
    }
}
