use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GalaxyError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

impl GalaxyError {
    pub(crate) fn invalid(name: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter { name, reason }
    }
}
