use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid label {label}: labels must be non-negative and fit in 32 bits")]
    InvalidLabel { label: i64 },

    #[error("Invalid phone number {phone}: phone numbers must be non-negative")]
    InvalidPhone { phone: i64 },

    #[error("Could not parse {what} from '{input}'")]
    Parse { what: &'static str, input: String },
}
