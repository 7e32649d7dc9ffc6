//! Loyalty tiers of the CRISPY ELITE program.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

static STANDARD_PROGRAM: Lazy<MembershipProgram> = Lazy::new(|| {
    MembershipProgram::from_yaml(include_str!("../../../content/membership.yaml"))
        .expect("bundled membership.yaml must be a valid program")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipTier {
    Bronze,
    Gold,
    Platinum,
}

impl MembershipTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::Bronze => "bronze",
            MembershipTier::Gold => "gold",
            MembershipTier::Platinum => "platinum",
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MembershipTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bronze" => Ok(MembershipTier::Bronze),
            "gold" => Ok(MembershipTier::Gold),
            "platinum" => Ok(MembershipTier::Platinum),
            _ => Err(format!("Invalid membership tier: {}", s)),
        }
    }
}

/// Marketing details of one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDetails {
    pub id: MembershipTier,
    pub name: String,
    /// Price label as shown, e.g. `$9.99/month` or `Free`.
    pub price: String,
    pub monthly_price: Money,
    pub points: String,
    pub popular: bool,
    pub perks: Vec<String>,
}

impl TierDetails {
    /// Free tiers skip the payment details step.
    pub fn is_free(&self) -> bool {
        self.monthly_price.is_zero()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipProgram {
    tiers: Vec<TierDetails>,
    benefits: Vec<Benefit>,
}

impl MembershipProgram {
    pub fn standard() -> &'static MembershipProgram {
        &STANDARD_PROGRAM
    }

    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    pub fn tiers(&self) -> &[TierDetails] {
        &self.tiers
    }

    pub fn benefits(&self) -> &[Benefit] {
        &self.benefits
    }

    pub fn tier(&self, id: MembershipTier) -> Option<&TierDetails> {
        self.tiers.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> &'static MembershipProgram {
        MembershipProgram::standard()
    }

    #[test]
    fn three_tiers_in_order() {
        let names: Vec<_> = program().tiers().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Crispy Starter", "Golden Member", "Platinum Elite"]);
    }

    #[test]
    fn only_bronze_is_free() {
        assert!(program().tier(MembershipTier::Bronze).unwrap().is_free());
        assert!(!program().tier(MembershipTier::Gold).unwrap().is_free());
        assert!(!program().tier(MembershipTier::Platinum).unwrap().is_free());
    }

    #[test]
    fn gold_is_most_popular() {
        let popular: Vec<_> = program().tiers().iter().filter(|t| t.popular).map(|t| t.id).collect();
        assert_eq!(popular, vec![MembershipTier::Gold]);
    }

    #[test]
    fn four_benefits() {
        assert_eq!(program().benefits().len(), 4);
    }

    #[test]
    fn platinum_price_label() {
        let platinum = program().tier(MembershipTier::Platinum).unwrap();
        assert_eq!(platinum.price, "$19.99/month");
        assert_eq!(platinum.perks.len(), 8);
    }
}
