use crate::{
    bot::router::{
        dispatch_isolated, flatten_arguments, InteractionRouter, RouteOutcome, GENERIC_ERROR_REPLY,
    },
    model::interaction::{Argument, InvocationKind, Reply},
    test_util::{
        factory,
        mock::{CountingCommand, RecordingResponder},
    },
};
use std::sync::Arc;

mod route;
