//! End-to-end wiring of the decision core: a static user store behind the
//! authentication manager, plus a step-up provider with an OPEN failure
//! mode.
//!
//! Run with: `cargo run --example login_flow`

use std::collections::HashMap;
use std::sync::Arc;

use lintel_authn::handler::StaticUsersHandler;
use lintel_authn::manager::AuthenticationManager;
use lintel_authn::mfa::{Event, MultifactorAuthenticationProvider};
use lintel_authn::policy::AnyAuthenticationPolicy;
use lintel_core::{
    AuthenticationTransaction, BasicRegisteredService, FailureMode, Service, UsernamePasswordCredential,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut users = HashMap::new();
    users.insert("alice".to_string(), "correct horse".to_string());
    users.insert("bob".to_string(), "battery staple".to_string());

    let manager = AuthenticationManager::builder()
        .register_handler(Arc::new(StaticUsersHandler::new(users)))
        .with_policy(Arc::new(AnyAuthenticationPolicy::new(false)))
        .build();

    let transaction = AuthenticationTransaction::new(
        Some(Service::new("https://app.example.org/")),
        vec![Arc::new(UsernamePasswordCredential::new("alice", "correct horse"))],
    );

    let authentication = manager.authenticate(&transaction).await?;
    println!("authenticated as {}", authentication.principal());

    let provider = MultifactorAuthenticationProvider::builder("mfa-duo")
        .order(10)
        .global_failure_mode(FailureMode::Open)
        .build()?;

    let event = Event::new("mfa-duo");
    let registered = BasicRegisteredService::new("https://app.example.org/");

    if provider.supports(Some(&event), &authentication, Some(&registered)) {
        let available = provider.is_available(&registered).await?;
        println!("provider {} selected, available: {}", provider, available);
    }

    Ok(())
}
