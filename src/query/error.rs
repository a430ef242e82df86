use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid number for '{param}': {value}")]
    InvalidNumber { param: &'static str, value: String },

    #[error("Invalid boolean for '{param}': {value}")]
    InvalidBoolean { param: &'static str, value: String },
}
