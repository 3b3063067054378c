//! `crimson-orders` — purchase order and supplier snapshot records, plus
//! the VAT pricing rules applied when rendering order documents.

pub mod order;
pub mod pricing;

pub use order::{OrderDetail, OrderLineItem, OrderStatus, SupplierDetail};
pub use pricing::{total_amount, vat_adjusted_price};
