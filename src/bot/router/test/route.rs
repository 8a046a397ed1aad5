use super::*;

/// Tests routing a registered slash command.
///
/// Verifies the reply is deferred and the registered handler runs exactly once
/// with the flattened arguments.
///
/// Expected: Handled, one defer, one handler call
#[tokio::test]
async fn invokes_registered_handler_once() {
    let ping = Arc::new(CountingCommand::new("ping"));
    let router = InteractionRouter::new(factory::shared_state(vec![ping.clone()]));
    let responder = RecordingResponder::new();
    let invocation = factory::slash_invocation(
        "ping",
        vec![factory::value_option("message", factory::text("hello"))],
    );

    let outcome = router.route(invocation, &responder).await;

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(responder.defers(), 1);
    assert_eq!(ping.calls(), 1);
    assert_eq!(ping.last_arguments(), Some(vec![factory::text("hello")]));
    assert!(responder.replies().is_empty());
}

/// Tests routing an unknown slash command.
///
/// Expected: UnknownCommand, generic error reply, registered handler not called
#[tokio::test]
async fn reports_unknown_command() {
    let ping = Arc::new(CountingCommand::new("ping"));
    let router = InteractionRouter::new(factory::shared_state(vec![ping.clone()]));
    let responder = RecordingResponder::new();

    let outcome = router
        .route(factory::slash_invocation("unknown", Vec::new()), &responder)
        .await;

    assert_eq!(outcome, RouteOutcome::UnknownCommand);
    assert_eq!(responder.replies(), vec![Reply::text(GENERIC_ERROR_REPLY)]);
    assert_eq!(ping.calls(), 0);
}

/// Tests routing an unknown context-menu command.
///
/// Expected: UnknownCommand with the same generic reply as slash commands
#[tokio::test]
async fn reports_unknown_context_menu() {
    let router = InteractionRouter::new(factory::shared_state(Vec::new()));
    let responder = RecordingResponder::new();

    let outcome = router
        .route(factory::context_menu_invocation("Inspect", Some(42)), &responder)
        .await;

    assert_eq!(outcome, RouteOutcome::UnknownCommand);
    assert_eq!(responder.replies(), vec![Reply::text(GENERIC_ERROR_REPLY)]);
}

/// Tests routing a context-menu command.
///
/// Verifies context menus use the same handler signature with no arguments.
///
/// Expected: Handled with an empty argument list
#[tokio::test]
async fn invokes_context_menu_handler() {
    let inspect = Arc::new(CountingCommand::new("Inspect"));
    let router = InteractionRouter::new(factory::shared_state(vec![inspect.clone()]));
    let responder = RecordingResponder::new();

    let outcome = router
        .route(factory::context_menu_invocation("Inspect", Some(42)), &responder)
        .await;

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(inspect.calls(), 1);
    assert_eq!(inspect.last_arguments(), Some(Vec::new()));
}

/// Tests that other invocation kinds are ignored.
///
/// Expected: Ignored, nothing deferred or sent, handler not called
#[tokio::test]
async fn ignores_other_kinds() {
    let ping = Arc::new(CountingCommand::new("ping"));
    let router = InteractionRouter::new(factory::shared_state(vec![ping.clone()]));
    let responder = RecordingResponder::new();
    let mut invocation = factory::slash_invocation("ping", Vec::new());
    invocation.kind = InvocationKind::Other;

    let outcome = router.route(invocation, &responder).await;

    assert_eq!(outcome, RouteOutcome::Ignored);
    assert_eq!(responder.defers(), 0);
    assert!(responder.replies().is_empty());
    assert_eq!(ping.calls(), 0);
}

/// Tests that a failed deferral does not stop routing.
///
/// Expected: Handled even though defer returned an error
#[tokio::test]
async fn swallows_defer_failure() {
    let ping = Arc::new(CountingCommand::new("ping"));
    let router = InteractionRouter::new(factory::shared_state(vec![ping.clone()]));
    let responder = RecordingResponder::failing_defer();

    let outcome = router
        .route(factory::slash_invocation("ping", Vec::new()), &responder)
        .await;

    assert_eq!(outcome, RouteOutcome::Handled);
    assert_eq!(ping.calls(), 1);
}

/// Tests that a handler error is reported to the user.
///
/// Expected: Failed with the generic error reply
#[tokio::test]
async fn reports_handler_failure() {
    let broken = Arc::new(CountingCommand::failing("broken"));
    let router = InteractionRouter::new(factory::shared_state(vec![broken.clone()]));
    let responder = RecordingResponder::new();

    let outcome = router
        .route(factory::slash_invocation("broken", Vec::new()), &responder)
        .await;

    assert_eq!(outcome, RouteOutcome::Failed);
    assert_eq!(broken.calls(), 1);
    assert_eq!(responder.replies(), vec![Reply::text(GENERIC_ERROR_REPLY)]);
}
