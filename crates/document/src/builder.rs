//! Purchase order document builder.
//!
//! A build call walks one-way through: validate inputs, map the fixed header
//! and footer fields, size the repeating item block, populate item rows,
//! serialize. No step is retried and no partial artifact is ever returned.

use std::path::Path;

use chrono::NaiveDate;

use crimson_numerals::to_korean_numeral;
use crimson_orders::{pricing, OrderDetail, OrderLineItem, SupplierDetail};

use crate::error::DocumentError;
use crate::schema;
use crate::sheet::{CellAddr, SheetDocument};
use crate::xlsx::XlsxDocument;

/// Caller-supplied knobs for one build call.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Write the order's internal note into the document. Off by default;
    /// the note is for in-house eyes and most documents go to the supplier.
    pub include_internal_note: bool,
    /// Override the suggested artifact file name.
    pub file_name: Option<String>,
}

/// The finished binary artifact plus its suggested download name.
#[derive(Debug, Clone)]
pub struct OrderArtifact {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// Populates the fixed order template from order and supplier snapshots.
pub struct TemplateDocumentBuilder;

impl TemplateDocumentBuilder {
    /// Load and parse the template from disk.
    pub fn load_path(path: impl AsRef<Path>) -> Result<XlsxDocument, DocumentError> {
        XlsxDocument::from_path(path)
    }

    /// Load and parse the template from raw bytes (e.g. a fetched asset).
    pub fn load_bytes(bytes: &[u8]) -> Result<XlsxDocument, DocumentError> {
        XlsxDocument::from_bytes(bytes)
    }

    /// Populate the loaded template and serialize it.
    ///
    /// The document handle is consumed; building twice requires loading the
    /// template twice. Identical inputs over an unmutated template yield
    /// identical value-cell contents.
    pub fn build<D: SheetDocument>(
        mut document: D,
        order: &OrderDetail,
        supplier: &SupplierDetail,
        options: &BuildOptions,
    ) -> Result<OrderArtifact, DocumentError> {
        order.validate()?;
        supplier.validate()?;

        Self::map_fixed_fields(&mut document, order, supplier, options);
        Self::size_item_block(&mut document, order.items.len());
        Self::populate_items(&mut document, &order.items);

        let bytes = document.serialize()?;
        let file_name = options
            .file_name
            .clone()
            .unwrap_or_else(|| suggested_file_name(order.order_date));
        tracing::debug!(order_id = order.id, file = %file_name, "order document built");
        Ok(OrderArtifact { bytes, file_name })
    }

    fn map_fixed_fields<D: SheetDocument>(
        document: &mut D,
        order: &OrderDetail,
        supplier: &SupplierDetail,
        options: &BuildOptions,
    ) {
        document.set_text(schema::MANAGER, &order.manager);
        document.set_text(schema::SUPPLIER_NAME, &supplier.name);
        document.set_text(schema::SUPPLIER_CONTACT, &supplier.contact);
        document.set_text(schema::SUPPLIER_MANAGER, &supplier.manager);
        document.set_text(schema::SUPPLIER_EMAIL, &supplier.email);

        document.set_text(schema::ORDER_DATE, &order.order_date.to_string());
        match order.expected_delivery_date {
            Some(date) => document.set_text(schema::EXPECTED_DELIVERY_DATE, &date.to_string()),
            None => document.clear(schema::EXPECTED_DELIVERY_DATE),
        }
        document.set_text(schema::DELIVERY_LOCATION, schema::DELIVERY_LOCATION_TEXT);

        let total = pricing::total_amount(&order.items, order.vat_included);
        document.set_text(schema::TOTAL_WORDS, &to_korean_numeral(total.amount()));
        document.set_text(schema::TOTAL_NUMERIC, &format!("{})", total.grouped()));

        document.set_text(schema::VAT_LABEL, included_label(order.vat_included));
        document.set_text(
            schema::PACKAGING_LABEL,
            included_label(order.packaging_included),
        );

        document.set_text(
            schema::INSTRUCTION_NOTE,
            order.instruction_note.as_deref().unwrap_or(""),
        );
        if options.include_internal_note {
            document.set_text(schema::INTERNAL_NOTE, order.note.as_deref().unwrap_or(""));
        }
    }

    /// Grow or shrink the repeating item block to fit `count` rows.
    ///
    /// Growth duplicates the style-template row downward once per excess
    /// item, a pure function of the count. Shrinking only clears value
    /// cells, so fixed content below the block keeps its position.
    fn size_item_block<D: SheetDocument>(document: &mut D, count: usize) {
        if count > schema::ITEM_CAPACITY {
            for idx in schema::ITEM_CAPACITY..count {
                document.duplicate_row(schema::ITEM_STYLE_ROW, item_row(idx));
            }
            tracing::debug!(
                items = count,
                grown = count - schema::ITEM_CAPACITY,
                "item block grown beyond template capacity"
            );
        } else {
            for idx in count..schema::ITEM_CAPACITY {
                for col in schema::ITEM_COLUMNS {
                    document.clear(CellAddr::new(col, item_row(idx)));
                }
            }
        }
    }

    fn populate_items<D: SheetDocument>(document: &mut D, items: &[OrderLineItem]) {
        for (idx, item) in items.iter().enumerate() {
            let row = item_row(idx);
            document.set_text(CellAddr::new(schema::COL_ITEM_NAME, row), &item.display_name());
            document.set_text(
                CellAddr::new(schema::COL_SPEC, row),
                item.spec.as_deref().unwrap_or(""),
            );
            document.set_text(CellAddr::new(schema::COL_UNIT, row), schema::UNIT_LABEL);
            document.set_number(
                CellAddr::new(schema::COL_QUANTITY, row),
                u64::from(item.quantity),
            );
            document.set_number(CellAddr::new(schema::COL_UNIT_PRICE, row), item.unit_price);
            document.set_number(CellAddr::new(schema::COL_AMOUNT, row), item.amount().amount());
            document.set_text(
                CellAddr::new(schema::COL_REMARK, row),
                item.remark.as_deref().unwrap_or(""),
            );
        }
    }
}

fn item_row(idx: usize) -> u32 {
    schema::ITEM_START_ROW + idx as u32
}

fn included_label(included: bool) -> &'static str {
    if included {
        schema::LABEL_INCLUDED
    } else {
        schema::LABEL_EXCLUDED
    }
}

/// Default artifact name: `(주)고대미래_발주서_<order_date>.xlsx`.
pub fn suggested_file_name(order_date: NaiveDate) -> String {
    format!("{}_발주서_{order_date}.xlsx", schema::COMPANY_LABEL)
}
