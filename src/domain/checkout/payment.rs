//! Payment choices offered by the checkout view.

use serde::{Deserialize, Serialize};

/// Tab of the cart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutTab {
    #[default]
    Cart,
    Payment,
}

impl std::str::FromStr for CheckoutTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cart" => Ok(CheckoutTab::Cart),
            "payment" => Ok(CheckoutTab::Payment),
            _ => Err(format!("Invalid checkout tab: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Credit or debit card.
    #[default]
    Card,
    /// UPI or a digital wallet; requires a wallet choice.
    Wallet,
    /// Cash on delivery.
    Cod,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Wallet => "wallet",
            PaymentMethod::Cod => "cod",
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(PaymentMethod::Card),
            "wallet" => Ok(PaymentMethod::Wallet),
            "cod" => Ok(PaymentMethod::Cod),
            _ => Err(format!("Invalid payment method: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wallet {
    Upi,
    Paypal,
    Apple,
    Google,
}

impl Wallet {
    pub fn all() -> &'static [Wallet] {
        &[Wallet::Upi, Wallet::Paypal, Wallet::Apple, Wallet::Google]
    }

    /// Short code, also used verbatim in the payment confirmation.
    pub fn code(&self) -> &'static str {
        match self {
            Wallet::Upi => "upi",
            Wallet::Paypal => "paypal",
            Wallet::Apple => "apple",
            Wallet::Google => "google",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Wallet::Upi => "UPI",
            Wallet::Paypal => "PayPal",
            Wallet::Apple => "Apple Pay",
            Wallet::Google => "Google Pay",
        }
    }

    /// UPI needs a verified id before an order can be placed.
    pub fn requires_verification(&self) -> bool {
        matches!(self, Wallet::Upi)
    }
}

impl std::fmt::Display for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Wallet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upi" => Ok(Wallet::Upi),
            "paypal" => Ok(Wallet::Paypal),
            "apple" => Ok(Wallet::Apple),
            "google" => Ok(Wallet::Google),
            _ => Err(format!("Invalid wallet: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fresh_checkout() {
        assert_eq!(CheckoutTab::default(), CheckoutTab::Cart);
        assert_eq!(PaymentMethod::default(), PaymentMethod::Card);
    }

    #[test]
    fn wallet_codes_parse_back() {
        for wallet in Wallet::all() {
            assert_eq!(wallet.code().parse::<Wallet>(), Ok(*wallet));
        }
    }

    #[test]
    fn only_upi_requires_verification() {
        assert!(Wallet::Upi.requires_verification());
        assert!(!Wallet::Paypal.requires_verification());
        assert!(!Wallet::Apple.requires_verification());
        assert!(!Wallet::Google.requires_verification());
    }

    #[test]
    fn unknown_method_is_rejected() {
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }
}
