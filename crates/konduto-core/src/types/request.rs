//! Outbound payloads
//!
//! [`OrderRequest`] is the order sent for analysis; [`OrderStatusRequest`]
//! moves an analyzed order to a final status. Optional fields that are not
//! set are left out of the JSON body.

use crate::error::{CoreError, Result};
use crate::hooks;
use crate::types::OrderStatus;
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Order submitted for fraud analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Merchant-side order identifier
    pub id: String,

    #[serde(with = "hooks::decimal")]
    pub total_amount: BigDecimal,

    /// Visitor id collected by the Konduto javascript snippet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visitor: Option<String>,

    #[serde(default, with = "hooks::decimal::option", skip_serializing_if = "Option::is_none")]
    pub shipping_amount: Option<BigDecimal>,

    #[serde(default, with = "hooks::decimal::option", skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<BigDecimal>,

    /// ISO 4217 currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    #[serde(default, with = "hooks::timestamp::option", skip_serializing_if = "Option::is_none")]
    pub first_message: Option<DateTime<Utc>>,

    #[serde(default, with = "hooks::timestamp::option", skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<DateTime<Utc>>,

    /// Set to `false` to record the order without scoring it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyze: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment: Vec<Payment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing: Option<Address>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Address>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shopping_cart: Vec<CartItem>,
}

impl OrderRequest {
    /// Create a new order request with the two mandatory fields
    pub fn new(id: impl Into<String>, total_amount: BigDecimal) -> Self {
        Self {
            id: id.into(),
            total_amount,
            visitor: None,
            shipping_amount: None,
            tax_amount: None,
            currency: None,
            installments: None,
            ip: None,
            first_message: None,
            purchased_at: None,
            analyze: None,
            customer: None,
            payment: Vec::new(),
            billing: None,
            shipping: None,
            shopping_cart: Vec::new(),
        }
    }

    pub fn with_visitor(mut self, visitor: impl Into<String>) -> Self {
        self.visitor = Some(visitor.into());
        self
    }

    pub fn with_shipping_amount(mut self, amount: BigDecimal) -> Self {
        self.shipping_amount = Some(amount);
        self
    }

    pub fn with_tax_amount(mut self, amount: BigDecimal) -> Self {
        self.tax_amount = Some(amount);
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_installments(mut self, installments: u32) -> Self {
        self.installments = Some(installments);
        self
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_first_message(mut self, at: DateTime<Utc>) -> Self {
        self.first_message = Some(at);
        self
    }

    pub fn with_purchased_at(mut self, at: DateTime<Utc>) -> Self {
        self.purchased_at = Some(at);
        self
    }

    pub fn with_analyze(mut self, analyze: bool) -> Self {
        self.analyze = Some(analyze);
        self
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_payment(mut self, payment: Payment) -> Self {
        self.payment.push(payment);
        self
    }

    pub fn with_billing(mut self, address: Address) -> Self {
        self.billing = Some(address);
        self
    }

    pub fn with_shipping(mut self, address: Address) -> Self {
        self.shipping = Some(address);
        self
    }

    pub fn with_item(mut self, item: CartItem) -> Self {
        self.shopping_cart.push(item);
        self
    }

    /// Serialize into the JSON body sent to the API
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Buyer information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,

    #[serde(default, with = "hooks::date::option", skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone1: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone2: Option<String>,

    /// CPF/CNPJ or equivalent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,

    /// Date the customer account was created on the merchant side
    #[serde(default, with = "hooks::date::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,

    #[serde(rename = "new", default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vip: Option<bool>,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            dob: None,
            phone1: None,
            phone2: None,
            tax_id: None,
            created_at: None,
            is_new: None,
            vip: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Credit,
    Debit,
    Boleto,
    Transfer,
    Voucher,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Approved,
    Declined,
    Pending,
}

/// Payment method used for the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "type")]
    pub payment_type: PaymentType,

    /// First six digits of the card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,

    /// Card expiration as `MMYYYY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}

impl Payment {
    pub fn new(payment_type: PaymentType) -> Self {
        Self {
            payment_type,
            bin: None,
            last4: None,
            expiration_date: None,
            status: None,
        }
    }

    pub fn card(
        bin: impl Into<String>,
        last4: impl Into<String>,
        expiration_date: impl Into<String>,
        status: PaymentStatus,
    ) -> Self {
        Self {
            payment_type: PaymentType::Credit,
            bin: Some(bin.into()),
            last4: Some(last4.into()),
            expiration_date: Some(expiration_date.into()),
            status: Some(status),
        }
    }
}

/// Billing or shipping address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Line item of the shopping cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, with = "hooks::decimal::option", skip_serializing_if = "Option::is_none")]
    pub unit_cost: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, with = "hooks::decimal::option", skip_serializing_if = "Option::is_none")]
    pub discount: Option<BigDecimal>,
    #[serde(default, with = "hooks::date::option", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
}

/// Status transition for an already analyzed order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderStatusRequest {
    status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl OrderStatusRequest {
    /// Create a status update
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidStatusTransition`] for statuses that only
    /// Konduto can assign (`PENDING`, `NOT_ANALYZED`).
    pub fn new(status: OrderStatus) -> Result<Self> {
        if !status.is_transition_target() {
            return Err(CoreError::InvalidStatusTransition(status));
        }

        Ok(Self {
            status,
            comments: None,
        })
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
