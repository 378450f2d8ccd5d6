//! Unit tests for Gemini wire types

use super::*;
use serde_json::json;

#[test]
fn test_request_serializes_single_user_turn() {
    let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
    assert_eq!(
        body,
        json!({
            "contents": [
                { "role": "user", "parts": [ { "text": "hello" } ] }
            ]
        })
    );
}

#[test]
fn test_response_joins_parts_of_first_candidate() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [ { "text": "{\"a\":" }, { "text": "1}" } ]
                },
                "finishReason": "STOP"
            },
            {
                "content": { "parts": [ { "text": "ignored" } ] }
            }
        ]
    }))
    .unwrap();

    assert_eq!(response.into_text().unwrap(), "{\"a\":1}");
}

#[test]
fn test_response_skips_parts_without_text() {
    let response: GenerateContentResponse = serde_json::from_value(json!({
        "candidates": [
            { "content": { "parts": [ { "inlineData": {} }, { "text": "ok" } ] } }
        ]
    }))
    .unwrap();

    assert_eq!(response.into_text().unwrap(), "ok");
}

#[test]
fn test_response_without_candidates() {
    let response: GenerateContentResponse =
        serde_json::from_value(json!({ "promptFeedback": { "blockReason": "SAFETY" } })).unwrap();

    match response.into_text().unwrap_err() {
        CricketError::NoCandidates => (),
        _ => panic!("Expected NoCandidates error"),
    }
}
