//! Domain-level frontend features and their shared logic. Routes and layout
//! components import these modules to keep view code focused on markup.

pub(crate) mod gate;
pub(crate) mod notify;
