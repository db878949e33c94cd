use serde::{Deserialize, Serialize};

/// Who is offering the vehicle for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SellerType {
    Dealer,
    Individual,
}

impl SellerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dealer => "Dealer",
            Self::Individual => "Individual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Dealer" => Some(Self::Dealer),
            "Individual" => Some(Self::Individual),
            _ => None,
        }
    }
}
