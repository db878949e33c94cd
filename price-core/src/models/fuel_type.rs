use serde::{Deserialize, Serialize};

/// Fuel variants accepted by the prediction service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    Cng,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Cng => "CNG",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Petrol" => Some(Self::Petrol),
            "Diesel" => Some(Self::Diesel),
            "CNG" => Some(Self::Cng),
            _ => None,
        }
    }
}
