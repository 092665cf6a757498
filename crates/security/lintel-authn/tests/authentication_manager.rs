//! Integration tests for the authentication manager and the policy family

mod common;

use std::collections::HashMap;
use std::sync::Arc;

use lintel_authn::error::Error;
use lintel_authn::handler::AttributeMergingResolver;
use lintel_authn::manager::AuthenticationManager;
use lintel_authn::policy::{
    AllAuthenticationPolicy, AnyAuthenticationPolicy, RequiredHandlerAuthenticationPolicy,
};
use pretty_assertions::assert_eq;

use common::{two_credential_transaction, FailingResolver, StubHandler};

#[tokio::test]
async fn any_policy_stops_at_the_first_success() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::succeeding("HandlerA"))
        .register_handler(StubHandler::failing("HandlerB"))
        .build();

    let authentication = manager.authenticate(&two_credential_transaction()).await.unwrap();

    assert_eq!(authentication.successes().len(), 1);
    assert_eq!(authentication.failures().len(), 0);
    assert_eq!(authentication.credentials().len(), 2);
}

#[tokio::test]
async fn any_policy_with_try_all_records_every_handler() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::succeeding("HandlerA"))
        .register_handler(StubHandler::failing("HandlerB"))
        .with_policy(Arc::new(AnyAuthenticationPolicy::new(true)))
        .build();

    let authentication = manager.authenticate(&two_credential_transaction()).await.unwrap();

    assert_eq!(authentication.successes().len(), 1);
    assert_eq!(authentication.failures().len(), 1);
    assert_eq!(authentication.credentials().len(), 2);
}

#[tokio::test]
async fn any_policy_rejects_when_every_handler_fails() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::failing("HandlerA"))
        .register_handler(StubHandler::failing("HandlerB"))
        .build();

    let error = manager.authenticate(&two_credential_transaction()).await.unwrap_err();

    assert_eq!(error.to_string(), "2 errors, 0 successes");
    match error {
        Error::PolicyRejection {
            errors,
            successes,
            failures,
        } => {
            assert_eq!(errors, 2);
            assert_eq!(successes, 0);
            assert!(failures.contains_key("HandlerA"));
            assert!(failures.contains_key("HandlerB"));
        }
        other => panic!("expected a policy rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn all_policy_accepts_when_every_handler_succeeds() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::succeeding("HandlerA"))
        .register_handler(StubHandler::succeeding("HandlerB"))
        .with_policy(Arc::new(AllAuthenticationPolicy::new()))
        .build();

    let authentication = manager.authenticate(&two_credential_transaction()).await.unwrap();

    assert_eq!(authentication.successes().len(), 2);
    assert_eq!(authentication.failures().len(), 0);
    assert_eq!(authentication.credentials().len(), 2);
}

#[tokio::test]
async fn all_policy_rejects_on_a_single_failure() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::succeeding("HandlerA"))
        .register_handler(StubHandler::failing("HandlerB"))
        .with_policy(Arc::new(AllAuthenticationPolicy::new()))
        .build();

    let error = manager.authenticate(&two_credential_transaction()).await.unwrap_err();

    assert_eq!(error.to_string(), "1 errors, 1 successes");
}

#[tokio::test]
async fn all_policy_rejects_when_every_handler_fails() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::failing("HandlerA"))
        .register_handler(StubHandler::failing("HandlerB"))
        .with_policy(Arc::new(AllAuthenticationPolicy::new()))
        .build();

    let error = manager.authenticate(&two_credential_transaction()).await.unwrap_err();

    assert_eq!(error.to_string(), "2 errors, 0 successes");
}

#[tokio::test]
async fn required_handler_policy_accepts_once_the_required_handler_succeeds() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::succeeding("HandlerA"))
        .register_handler(StubHandler::failing("HandlerB"))
        .with_policy(Arc::new(RequiredHandlerAuthenticationPolicy::new("HandlerA", false)))
        .build();

    let authentication = manager.authenticate(&two_credential_transaction()).await.unwrap();

    assert_eq!(authentication.successes().len(), 1);
    assert_eq!(authentication.failures().len(), 0);
    assert_eq!(authentication.credentials().len(), 2);
}

#[tokio::test]
async fn required_handler_policy_rejects_when_the_required_handler_fails() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::succeeding("HandlerA"))
        .register_handler(StubHandler::failing("HandlerB"))
        .with_policy(Arc::new(RequiredHandlerAuthenticationPolicy::new("HandlerB", false)))
        .build();

    let error = manager.authenticate(&two_credential_transaction()).await.unwrap_err();

    assert_eq!(error.to_string(), "1 errors, 1 successes");
}

#[tokio::test]
async fn required_handler_policy_with_try_all_still_runs_the_rest() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::succeeding("HandlerA"))
        .register_handler(StubHandler::failing("HandlerB"))
        .with_policy(Arc::new(RequiredHandlerAuthenticationPolicy::new("HandlerA", true)))
        .build();

    let authentication = manager.authenticate(&two_credential_transaction()).await.unwrap();

    assert_eq!(authentication.successes().len(), 1);
    assert_eq!(authentication.failures().len(), 1);
    assert_eq!(authentication.credentials().len(), 2);
}

#[tokio::test]
async fn principal_comes_from_the_first_successful_handler() {
    let manager = AuthenticationManager::builder()
        .register_handler(StubHandler::succeeding_as("HandlerA", "alice"))
        .register_handler(StubHandler::succeeding_as("HandlerB", "bob"))
        .with_policy(Arc::new(AllAuthenticationPolicy::new()))
        .build();

    let authentication = manager.authenticate(&two_credential_transaction()).await.unwrap();

    assert_eq!(authentication.principal().id, "alice");
}

#[tokio::test]
async fn paired_resolver_refines_the_principal() {
    let resolver = AttributeMergingResolver::new(HashMap::from([(
        "department".to_string(),
        serde_json::json!("engineering"),
    )]));
    let manager = AuthenticationManager::builder()
        .register_handler_with_resolver(StubHandler::succeeding_as("HandlerA", "alice"), Arc::new(resolver))
        .build();

    let authentication = manager.authenticate(&two_credential_transaction()).await.unwrap();

    assert_eq!(authentication.principal().id, "alice");
    assert_eq!(
        authentication.principal().attribute("department"),
        Some(&serde_json::json!("engineering"))
    );
}

#[tokio::test]
async fn resolver_failure_falls_back_to_the_handler_principal() {
    let manager = AuthenticationManager::builder()
        .register_handler_with_resolver(
            StubHandler::succeeding_as("HandlerA", "alice"),
            Arc::new(FailingResolver),
        )
        .build();

    let authentication = manager.authenticate(&two_credential_transaction()).await.unwrap();

    assert_eq!(authentication.principal().id, "alice");
    assert!(authentication.principal().attributes.is_empty());
}

#[tokio::test]
async fn a_manager_without_handlers_rejects_every_transaction() {
    let manager = AuthenticationManager::builder().build();

    let error = manager.authenticate(&two_credential_transaction()).await.unwrap_err();

    assert_eq!(error.to_string(), "0 errors, 0 successes");
}
