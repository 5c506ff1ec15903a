use crate::common::{attachment, create_test_client};
use eml_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn submit_to_virustotal_posts_attachment() {
    let mut server = Server::new_async().await;
    let sha256 = attachment().hash.sha256;
    let mock = server
        .mock("POST", "/api/submit/virustotal")
        .match_body(Matcher::PartialJson(json!({
            "filename": "invoice.doc",
            "mimeTypeShort": "doc",
            "hash": {"sha256": sha256}
        })))
        .with_status(200)
        .with_body(
            json!({
                "referenceUrl": format!("https://www.virustotal.com/gui/file/{sha256}/detection")
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server);
    let result = client
        .submit_to_virustotal(&attachment())
        .await
        .expect("submission should succeed");

    assert!(result.reference_url.contains(&sha256));
    mock.assert_async().await;
}

#[tokio::test]
async fn submit_to_inquest_posts_attachment() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/submit/inquest")
        .match_body(Matcher::PartialJson(json!({"extension": "doc"})))
        .with_status(200)
        .with_body(r#"{"referenceUrl":"https://labs.inquest.net/dfi/sha256/e3b0"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let result = client
        .submit_to_inquest(&attachment())
        .await
        .expect("submission should succeed");

    assert_eq!(result.reference_url, "https://labs.inquest.net/dfi/sha256/e3b0");
    mock.assert_async().await;
}

#[tokio::test]
async fn submit_to_inquest_unsupported_type() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/submit/inquest")
        .with_status(415)
        .with_body(r#"{"detail":"exe is not supported."}"#)
        .create_async()
        .await;

    let mut exe = attachment();
    exe.extension = Some("exe".to_string());
    let client = create_test_client(&server);
    let err = client.submit_to_inquest(&exe).await.expect_err("415 expected");

    assert_eq!(err.status().map(|s| s.as_u16()), Some(415));
    assert!(err.to_string().contains("exe is not supported."));
    mock.assert_async().await;
}
