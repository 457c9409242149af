use derive_more::{Display, From, Into, Deref, DerefMut, Constructor};
use serde::{Serialize, Deserialize};
use std::cmp::Ordering;

/// Value Object - Денежная сумма (floating-point, display rounds to cents)
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Constructor, Serialize, Deserialize)]
pub struct Money(f64);

impl Money {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Two-decimal display form, matching the backend's cent precision
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

/// Value Object - Идентификатор заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct OrderId(i64);

impl OrderId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

/// Value Object - Порядковый номер строки в таблице (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, Into, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct TableId(u32);

impl TableId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Value Object - Дата поставки
///
/// Stored as the ISO `YYYY-MM-DD` string the backend sends. Zero-padded ISO
/// strings order lexicographically the same as calendar dates, so the string
/// itself is the sort key and no date arithmetic happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct SupplyDate(String);

impl SupplyDate {
    pub fn new(date: String) -> Result<Self, String> {
        if date.is_empty() {
            return Err("Supply date cannot be empty".to_string());
        }
        Ok(Self(date))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SupplyDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
