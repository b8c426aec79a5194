//! Underwriter review workflow: queue, per-application session, checks.

pub(crate) mod compliance_checker;
pub(crate) mod queue_tab;
pub(crate) mod review_application;
pub(crate) mod review_session;
pub(crate) mod risk_assessor;
