pub mod api;
pub mod form;
pub mod submission;
pub mod validation;
