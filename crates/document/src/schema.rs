//! Fixed cell schema of the pre-styled order template.
//!
//! The template ships with all styling, merged cells, and static captions in
//! place; the builder only writes values into these coordinates. Changing
//! the template layout means changing these constants in lockstep.

use crate::sheet::CellAddr;

pub const MANAGER: CellAddr = CellAddr::new(9, 10); // I10
pub const SUPPLIER_NAME: CellAddr = CellAddr::new(9, 11); // I11
pub const SUPPLIER_CONTACT: CellAddr = CellAddr::new(23, 11); // W11
pub const SUPPLIER_MANAGER: CellAddr = CellAddr::new(9, 12); // I12
pub const SUPPLIER_EMAIL: CellAddr = CellAddr::new(23, 12); // W12
pub const ORDER_DATE: CellAddr = CellAddr::new(5, 16); // E16
pub const EXPECTED_DELIVERY_DATE: CellAddr = CellAddr::new(18, 16); // R16
pub const DELIVERY_LOCATION: CellAddr = CellAddr::new(5, 17); // E17
pub const TOTAL_WORDS: CellAddr = CellAddr::new(7, 18); // G18
pub const TOTAL_NUMERIC: CellAddr = CellAddr::new(17, 18); // Q18
pub const VAT_LABEL: CellAddr = CellAddr::new(28, 18); // AB18
pub const PACKAGING_LABEL: CellAddr = CellAddr::new(28, 31); // AB31
pub const INSTRUCTION_NOTE: CellAddr = CellAddr::new(1, 30); // A30
pub const INTERNAL_NOTE: CellAddr = CellAddr::new(1, 33); // A33

/// First row of the repeating item block.
pub const ITEM_START_ROW: u32 = 21;
/// Interior row whose styling is duplicated when the block grows.
pub const ITEM_STYLE_ROW: u32 = 22;
/// Rows the template ships with; fewer items leave cleared rows in place.
pub const ITEM_CAPACITY: usize = 6;

pub const COL_ITEM_NAME: u32 = 3; // C
pub const COL_SPEC: u32 = 8; // H
pub const COL_UNIT: u32 = 11; // K
pub const COL_QUANTITY: u32 = 14; // N
pub const COL_UNIT_PRICE: u32 = 17; // Q
pub const COL_AMOUNT: u32 = 24; // X
pub const COL_REMARK: u32 = 30; // AD

/// Every value-bearing column of an item row, in left-to-right order.
pub const ITEM_COLUMNS: [u32; 7] = [
    COL_ITEM_NAME,
    COL_SPEC,
    COL_UNIT,
    COL_QUANTITY,
    COL_UNIT_PRICE,
    COL_AMOUNT,
    COL_REMARK,
];

/// Static caption for the delivery location cell.
pub const DELIVERY_LOCATION_TEXT: &str = "고려대학교 100주년기념관(크림슨스토어)";

/// Unit label printed for every line item.
pub const UNIT_LABEL: &str = "EA";

/// Issuing company, used for the suggested artifact file name.
pub const COMPANY_LABEL: &str = "(주)고대미래";

/// Boolean fields render as these labels on the document.
pub const LABEL_INCLUDED: &str = "포함";
pub const LABEL_EXCLUDED: &str = "비포함";
