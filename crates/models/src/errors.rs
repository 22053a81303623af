use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown {kind}: {value}")]
    Unknown { kind: &'static str, value: String },
}

impl ModelError {
    pub fn unknown(kind: &'static str, value: &str) -> Self {
        Self::Unknown { kind, value: value.to_string() }
    }
}
