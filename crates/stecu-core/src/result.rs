use crate::StecuError;

pub type Result<T> = std::result::Result<T, StecuError>;
