//! Build domain - requests and validation

pub mod request;
pub mod validator;
