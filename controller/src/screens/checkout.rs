//! # Checkout Flow
//!
//! The cart screen walks through three steps: review cart, delivery address, payment.
//! Everything here is screen-local; only order placement reaches the controller.

use std::fmt;

use shared::Rupees;

use crate::app::{BillSummary, Cart, DeliveryOption};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum CheckoutStep {
    #[default]
    Cart,
    Address,
    Payment,
}

impl CheckoutStep {
    pub fn title(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Your Cart",
            CheckoutStep::Address => "Delivery Address",
            CheckoutStep::Payment => "Payment",
        }
    }

    /// 1-based position for the step indicator
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Address => 2,
            CheckoutStep::Payment => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Upi,
    Wallet,
    Card,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::Upi,
            PaymentMethod::Wallet,
            PaymentMethod::Card,
            PaymentMethod::CashOnDelivery,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Upi => "UPI Payment",
            PaymentMethod::Wallet => "Digital Wallet",
            PaymentMethod::Card => "Credit/Debit Card",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub area: String,
    pub city: String,
    pub pincode: String,
}

impl Default for Address {
    fn default() -> Self {
        Self {
            street: "123 Green Street".to_string(),
            area: "Koramangala".to_string(),
            city: "Bangalore".to_string(),
            pincode: "560034".to_string(),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.street, self.area, self.city, self.pincode)
    }
}

/// Per-visit checkout choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutFlow {
    pub step: CheckoutStep,
    pub delivery: DeliveryOption,
    pub payment: PaymentMethod,
    donation: Rupees,
    pub address: Address,
    presets: Vec<Rupees>,
    delivery_fee: Rupees,
}

impl CheckoutFlow {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            step: CheckoutStep::Cart,
            delivery: DeliveryOption::Delivery,
            payment: PaymentMethod::Upi,
            donation: 0,
            address: Address::default(),
            presets: config.donation_presets.clone(),
            delivery_fee: config.delivery_fee,
        }
    }

    /// Forward one step; stays on payment
    pub fn advance(&mut self) {
        self.step = match self.step {
            CheckoutStep::Cart => CheckoutStep::Address,
            CheckoutStep::Address | CheckoutStep::Payment => CheckoutStep::Payment,
        };
    }

    /// Back one step. Returns `false` on the first step, where back leaves checkout.
    pub fn back(&mut self) -> bool {
        match self.step {
            CheckoutStep::Cart => false,
            CheckoutStep::Address => {
                self.step = CheckoutStep::Cart;
                true
            }
            CheckoutStep::Payment => {
                self.step = CheckoutStep::Address;
                true
            }
        }
    }

    pub fn donation_presets(&self) -> &[Rupees] {
        &self.presets
    }

    pub fn donation(&self) -> Rupees {
        self.donation
    }

    /// Pick a preset donation. Amounts outside the presets are ignored.
    pub fn select_donation(&mut self, amount: Rupees) -> bool {
        if self.presets.contains(&amount) {
            self.donation = amount;
            true
        } else {
            false
        }
    }

    pub fn clear_donation(&mut self) {
        self.donation = 0;
    }

    pub fn bill(&self, cart: &Cart) -> BillSummary {
        BillSummary::compute(cart, self.delivery, self.donation, self.delivery_fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        let bowl = shared::catalog::menu_item(1).unwrap();
        cart.add(shared::CartLineItem::from_menu_item(&bowl, 1));
        cart
    }

    #[test]
    fn test_defaults() {
        let flow = CheckoutFlow::new(&AppConfig::default());
        assert_eq!(flow.step, CheckoutStep::Cart);
        assert_eq!(flow.payment, PaymentMethod::Upi);
        assert_eq!(flow.donation_presets(), &[10, 25, 50, 100]);
        assert_eq!(
            flow.address.to_string(),
            "123 Green Street, Koramangala, Bangalore, 560034"
        );
    }

    #[test]
    fn test_steps() {
        let mut flow = CheckoutFlow::new(&AppConfig::default());
        flow.advance();
        flow.advance();
        flow.advance();
        assert_eq!(flow.step, CheckoutStep::Payment);
        assert!(flow.back());
        assert!(flow.back());
        assert!(!flow.back());
        assert_eq!(flow.step, CheckoutStep::Cart);
    }

    #[test]
    fn test_bill_follows_choices() {
        let mut flow = CheckoutFlow::new(&AppConfig::default());
        assert_eq!(flow.bill(&cart()).total, 178);

        assert!(flow.select_donation(25));
        assert!(!flow.select_donation(30));
        flow.delivery = DeliveryOption::Pickup;
        let bill = flow.bill(&cart());
        assert_eq!(bill.delivery_fee, 0);
        assert_eq!(bill.donation, 25);
        assert_eq!(bill.total, 174);
    }
}
