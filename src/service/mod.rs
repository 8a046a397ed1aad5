//! Service layer orchestrating calls to Discord on behalf of event listeners.

pub mod registrar;
