mod compliance_checker;
mod review_application;
mod review_session;
mod risk_assessor;
