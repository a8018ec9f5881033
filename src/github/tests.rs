use super::*;
use crate::errors::GhError;
use serde_json::json;

fn deployment_request(required_contexts: Vec<String>) -> DeploymentRequest {
    DeploymentRequest {
        git_ref: "main".to_string(),
        task: "deploy".to_string(),
        auto_merge: true,
        required_contexts,
        payload: None,
        environment: "production".to_string(),
        description: None,
        transient_environment: false,
        production_environment: true,
    }
}

#[test]
fn test_release_ref_latest_is_case_insensitive() {
    assert_eq!(ReleaseRef::resolve("latest"), ReleaseRef::Latest);
    assert_eq!(ReleaseRef::resolve("LATEST"), ReleaseRef::Latest);
    assert_eq!(ReleaseRef::resolve("LaTeSt"), ReleaseRef::Latest);
}

#[test]
fn test_release_ref_numeric_is_an_id() {
    assert_eq!(ReleaseRef::resolve("133742"), ReleaseRef::Id(133742));
    assert_eq!(ReleaseRef::resolve("-1"), ReleaseRef::Id(-1));
    assert_eq!(ReleaseRef::resolve("9223372036854775807"), ReleaseRef::Id(i64::MAX));
}

#[test]
fn test_release_ref_numeric_looking_tag_is_still_an_id() {
    // "2019" could be a tag name, ids win
    assert_eq!(ReleaseRef::resolve("2019"), ReleaseRef::Id(2019));
}

#[test]
fn test_release_ref_everything_else_is_a_tag() {
    assert_eq!(ReleaseRef::resolve("19.01.2"), ReleaseRef::Tag("19.01.2".to_string()));
    assert_eq!(ReleaseRef::resolve("v1.0.0"), ReleaseRef::Tag("v1.0.0".to_string()));
    assert_eq!(ReleaseRef::resolve("latest-stable"), ReleaseRef::Tag("latest-stable".to_string()));
    // Overflows an i64, so it is a tag
    assert_eq!(
        ReleaseRef::resolve("99999999999999999999"),
        ReleaseRef::Tag("99999999999999999999".to_string())
    );
}

#[test]
fn test_deployment_state_accepts_known_states() {
    for (value, expected) in [
        ("error", DeploymentState::Error),
        ("failure", DeploymentState::Failure),
        ("inactive", DeploymentState::Inactive),
        ("in_progress", DeploymentState::InProgress),
        ("queued", DeploymentState::Queued),
        ("pending", DeploymentState::Pending),
    ] {
        assert_eq!(value.parse::<DeploymentState>().unwrap(), expected);
        assert_eq!(expected.to_string(), value);
    }
}

#[test]
fn test_deployment_state_rejects_anything_else() {
    for value in ["bogus-state", "success", "Pending", "in-progress", ""] {
        let result = value.parse::<DeploymentState>();
        assert!(
            matches!(result, Err(GhError::Validation(_))),
            "{:?} should not be a valid state",
            value
        );
    }
}

#[test]
fn test_deployment_state_serializes_snake_case() {
    assert_eq!(serde_json::to_value(DeploymentState::InProgress).unwrap(), json!("in_progress"));
}

#[test]
fn test_deployment_request_sends_empty_required_contexts() {
    let value = serde_json::to_value(deployment_request(Vec::new())).unwrap();

    assert_eq!(value["ref"], "main");
    assert_eq!(value["required_contexts"], json!([]));
    assert!(value.get("payload").is_none());
    assert!(value.get("description").is_none());
}

#[test]
fn test_deployment_request_keeps_context_order() {
    let contexts = vec!["ci/build".to_string(), "ci/test".to_string()];
    let value = serde_json::to_value(deployment_request(contexts)).unwrap();

    assert_eq!(value["required_contexts"], json!(["ci/build", "ci/test"]));
}

#[test]
fn test_release_edit_only_sends_set_fields() {
    let edit = ReleaseEdit {
        draft: Some(false),
        ..Default::default()
    };

    let value = serde_json::to_value(&edit).unwrap();
    assert_eq!(value, json!({ "draft": false }));
}

#[test]
fn test_empty_release_edit_is_an_empty_object() {
    let value = serde_json::to_value(ReleaseEdit::default()).unwrap();
    assert_eq!(value, json!({}));
}

#[test]
fn test_deployment_status_request_omits_unset_fields() {
    let request = DeploymentStatusRequest {
        state: DeploymentState::Queued,
        log_url: None,
        description: Some("waiting".to_string()),
        environment: None,
        environment_url: None,
        auto_inactive: true,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({ "state": "queued", "description": "waiting", "auto_inactive": true })
    );
}
