use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crimson_core::{DomainError, DomainResult, Won};

/// Purchase order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Approved,
    Completed,
    Cancelled,
}

/// One line of a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub variant_code: String,
    pub item_name: String,
    /// Variant option label, appended to the item name on the document.
    pub option: Option<String>,
    pub spec: Option<String>,
    pub unit: String,
    /// Price per unit in whole won.
    pub unit_price: u64,
    pub quantity: u32,
    pub remark: Option<String>,
}

impl OrderLineItem {
    /// Line amount: `quantity × unit_price`.
    pub fn amount(&self) -> Won {
        Won(u64::from(self.quantity) * self.unit_price)
    }

    /// Item name as printed on the order document, with the option label
    /// appended when one exists: `면장갑 (회색)`.
    pub fn display_name(&self) -> String {
        match self.option.as_deref().filter(|o| !o.trim().is_empty()) {
            Some(option) => format!("{} ({option})", self.item_name),
            None => self.item_name.clone(),
        }
    }
}

/// Read-only purchase order snapshot, fetched per invocation.
///
/// The engine never mutates persisted order state; this record is a plain
/// value handed in by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i64,
    /// Supplier name as stored on the order (freeform, not an id).
    pub supplier: String,
    pub manager: String,
    pub order_date: NaiveDate,
    pub expected_delivery_date: Option<NaiveDate>,
    pub status: OrderStatus,
    pub note: Option<String>,
    pub instruction_note: Option<String>,
    pub vat_included: bool,
    pub packaging_included: bool,
    pub items: Vec<OrderLineItem>,
}

impl OrderDetail {
    /// Structural completeness check, run before document generation.
    ///
    /// The document builder refuses to render an order that is missing
    /// required fields; callers are expected to validate earlier, this is
    /// the last line of defense.
    pub fn validate(&self) -> DomainResult<()> {
        if self.supplier.trim().is_empty() {
            return Err(DomainError::missing_field("order.supplier"));
        }
        if self.manager.trim().is_empty() {
            return Err(DomainError::missing_field("order.manager"));
        }
        if self.items.is_empty() {
            return Err(DomainError::validation("order has no line items"));
        }
        for (idx, item) in self.items.iter().enumerate() {
            if item.item_name.trim().is_empty() {
                return Err(DomainError::missing_field(format!("items[{idx}].item_name")));
            }
            if item.quantity == 0 {
                return Err(DomainError::validation(format!(
                    "items[{idx}].quantity must be positive"
                )));
            }
        }
        Ok(())
    }
}

/// Read-only supplier snapshot matched to an order by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDetail {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub manager: String,
    pub email: String,
    pub address: String,
}

impl SupplierDetail {
    /// Only the name is required; contact fields may be blank when the
    /// order's supplier has no directory entry.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::missing_field("supplier.name"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_item() -> OrderLineItem {
        OrderLineItem {
            variant_code: "P00000XN000A".to_string(),
            item_name: "면장갑".to_string(),
            option: None,
            spec: Some("10켤레/묶음".to_string()),
            unit: "EA".to_string(),
            unit_price: 500,
            quantity: 2,
            remark: None,
        }
    }

    fn test_order() -> OrderDetail {
        OrderDetail {
            id: 1,
            supplier: "한일물산".to_string(),
            manager: "김담당".to_string(),
            order_date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            expected_delivery_date: None,
            status: OrderStatus::Approved,
            note: None,
            instruction_note: None,
            vat_included: true,
            packaging_included: false,
            items: vec![test_item()],
        }
    }

    #[test]
    fn line_amount_is_quantity_times_unit_price() {
        assert_eq!(test_item().amount(), Won(1_000));
    }

    #[test]
    fn display_name_appends_option_label() {
        let mut item = test_item();
        assert_eq!(item.display_name(), "면장갑");

        item.option = Some("회색".to_string());
        assert_eq!(item.display_name(), "면장갑 (회색)");

        item.option = Some("  ".to_string());
        assert_eq!(item.display_name(), "면장갑");
    }

    #[test]
    fn validate_accepts_complete_order() {
        assert!(test_order().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_manager() {
        let mut order = test_order();
        order.manager = " ".to_string();
        assert_eq!(
            order.validate().unwrap_err(),
            DomainError::missing_field("order.manager")
        );
    }

    #[test]
    fn validate_rejects_zero_quantity() {
        let mut order = test_order();
        order.items[0].quantity = 0;
        assert!(matches!(
            order.validate().unwrap_err(),
            DomainError::Validation(msg) if msg.contains("quantity")
        ));
    }

    #[test]
    fn validate_rejects_empty_item_list() {
        let mut order = test_order();
        order.items.clear();
        assert!(order.validate().is_err());
    }

    #[test]
    fn supplier_requires_only_a_name() {
        let supplier = SupplierDetail {
            id: 7,
            name: "한일물산".to_string(),
            contact: String::new(),
            manager: String::new(),
            email: String::new(),
            address: String::new(),
        };
        assert!(supplier.validate().is_ok());

        let unnamed = SupplierDetail {
            name: String::new(),
            ..supplier
        };
        assert!(unnamed.validate().is_err());
    }
}
