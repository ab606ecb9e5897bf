use crate::utils::error::{Result, WalletError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary account: one owner, one balance.
///
/// The entity performs no input validation on construction; the service
/// validates before building one. The balance invariant (never negative)
/// is enforced by `withdraw`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    id: String,
    owner_email: String,
    balance: Decimal,
}

impl Wallet {
    /// Covers both the restore path (id read back from storage) and the
    /// fresh-creation path (id supplied by the service's id provider).
    pub fn new(
        id: impl Into<String>,
        owner_email: impl Into<String>,
        balance: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            owner_email: owner_email.into(),
            balance,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner_email(&self) -> &str {
        &self.owner_email
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::InvalidArgument {
                message: "El monto a depositar debe ser positivo".to_string(),
            });
        }
        self.balance += amount;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(WalletError::InvalidArgument {
                message: "El monto a retirar debe ser positivo".to_string(),
            });
        }
        if amount > self.balance {
            return Err(WalletError::InsufficientFunds);
        }
        self.balance -= amount;
        Ok(())
    }
}

/// Minimal creation output: id and balance only.
#[derive(Debug, Clone, Serialize)]
pub struct WalletSummary {
    pub wallet_id: String,
    pub balance: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(balance: i64) -> Wallet {
        Wallet::new("w1", "owner@example.com", Decimal::from(balance))
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut w = wallet(300);
        w.deposit(Decimal::from(300)).unwrap();
        assert_eq!(w.balance(), Decimal::from(600));
    }

    #[test]
    fn test_deposit_rejects_non_positive_amount() {
        let mut w = wallet(100);

        let err = w.deposit(Decimal::ZERO).unwrap_err();
        assert_eq!(err.to_string(), "El monto a depositar debe ser positivo");

        let err = w.deposit(Decimal::from(-10)).unwrap_err();
        assert_eq!(err.to_string(), "El monto a depositar debe ser positivo");

        assert_eq!(w.balance(), Decimal::from(100));
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut w = wallet(300);
        w.withdraw(Decimal::from(120)).unwrap();
        assert_eq!(w.balance(), Decimal::from(180));
    }

    #[test]
    fn test_withdraw_rejects_non_positive_amount() {
        let mut w = wallet(100);

        let err = w.withdraw(Decimal::ZERO).unwrap_err();
        assert_eq!(err.to_string(), "El monto a retirar debe ser positivo");
        assert_eq!(w.balance(), Decimal::from(100));
    }

    #[test]
    fn test_withdraw_more_than_balance_fails() {
        let mut w = wallet(300);

        let err = w.withdraw(Decimal::from(500)).unwrap_err();
        assert!(matches!(err, WalletError::InsufficientFunds));
        assert_eq!(err.to_string(), "Fondos insuficientes");
        assert_eq!(w.balance(), Decimal::from(300));
    }

    #[test]
    fn test_withdraw_entire_balance_is_allowed() {
        let mut w = wallet(300);
        w.withdraw(Decimal::from(300)).unwrap();
        assert_eq!(w.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_fractional_amounts_do_not_drift() {
        let mut w = Wallet::new("w1", "owner@example.com", Decimal::ZERO);
        for _ in 0..10 {
            w.deposit("0.10".parse().unwrap()).unwrap();
        }
        assert_eq!(w.balance(), Decimal::from(1));
    }
}
