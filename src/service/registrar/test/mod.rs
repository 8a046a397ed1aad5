use crate::{
    model::command::{ClearSummary, CommandSchema, CommandScope},
    service::registrar::CommandRegistrar,
    test_util::mock::MockCommandApi,
};
use std::sync::Arc;
