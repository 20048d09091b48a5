// Strategy Pattern: a shopping cart pays through whichever method it was built with.

use std::io::{self, Write};
use tracing::debug;

pub trait PaymentStrategy {
    fn pay(&self, amount: i32, out: &mut dyn Write) -> io::Result<()>;
    fn name(&self) -> &str;
}

pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: i32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Paid {} using Credit Card.", amount)
    }

    fn name(&self) -> &str {
        "Credit Card"
    }
}

pub struct UpiPayment;

impl PaymentStrategy for UpiPayment {
    fn pay(&self, amount: i32, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Paid {} using UPI.", amount)
    }

    fn name(&self) -> &str {
        "UPI"
    }
}

/// Context bound to one payment strategy for its whole lifetime.
pub struct ShoppingCart {
    strategy: Box<dyn PaymentStrategy>,
}

impl ShoppingCart {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    /// Hands `amount` to the strategy as-is. Zero and negative amounts are not rejected.
    pub fn checkout(&self, amount: i32, out: &mut dyn Write) -> io::Result<()> {
        debug!(strategy = self.strategy.name(), amount, "checkout");
        self.strategy.pay(amount, out)
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }
}
