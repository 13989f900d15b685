pub mod gate;
pub mod messages;
pub mod pipeline;
pub mod rules;
pub mod transport;
pub mod validation;
