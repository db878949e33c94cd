use serde::{Deserialize, Serialize};

/// Gearbox variants accepted by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Automatic => "Automatic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Manual" => Some(Self::Manual),
            "Automatic" => Some(Self::Automatic),
            _ => None,
        }
    }
}
