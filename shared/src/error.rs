use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    EmptyPrizeList,
    InvalidPrizeData(String),
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::EmptyPrizeList => write!(f, "Prize list is empty"),
            WheelError::InvalidPrizeData(msg) => write!(f, "Invalid prize data: {}", msg),
        }
    }
}

impl std::error::Error for WheelError {}

impl From<serde_json::Error> for WheelError {
    fn from(err: serde_json::Error) -> Self {
        WheelError::InvalidPrizeData(err.to_string())
    }
}
