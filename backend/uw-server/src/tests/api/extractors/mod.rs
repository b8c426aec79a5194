mod session_claims;
