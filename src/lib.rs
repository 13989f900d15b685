//! Newsletter signup core
//!
//! Validates signup forms against a static rule table and delivers accepted
//! signups to a workflow-automation webhook with timeout, bounded retry and
//! error classification. Every submission ends in a single
//! [`models::submission::SubmissionOutcome`].

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
