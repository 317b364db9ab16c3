#[cfg(feature = "lambda")]
use auth_cleanup::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use auth_cleanup::{
    CleanupOutcome, DeletionReactor, FirestoreStore, LambdaConfig, UserDeletedEvent,
};
#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[cfg(feature = "lambda")]
async fn function_handler(
    reactor: &DeletionReactor<FirestoreStore>,
    event: LambdaEvent<UserDeletedEvent>,
) -> Result<CleanupOutcome, Error> {
    // Delete failures are logged and swallowed inside the reactor, so every
    // invocation resolves Ok and the platform marks it complete.
    Ok(reactor.handle(event.payload).await)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // One-time setup per execution environment: config, HTTP client and store
    // are built before the runtime starts serving events and shared across
    // all invocations.
    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let client = reqwest::Client::new();
    let store = FirestoreStore::from_config(client, &config);
    let reactor = DeletionReactor::new(store);
    let reactor_ref = &reactor;

    run(service_fn(move |event| async move {
        function_handler(reactor_ref, event).await
    }))
    .await
}
