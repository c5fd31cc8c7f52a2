//! Registered claim checks applied to the innermost payload
//!
//! Only `iss`, `aud`, `exp` and `nbf` are interpreted; every other claim is
//! passed through untouched.

mod validator;

pub use validator::ClaimsValidator;
