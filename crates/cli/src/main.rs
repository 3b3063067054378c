use std::path::PathBuf;

use anyhow::{bail, Context};

use crimson_document::{BuildOptions, TemplateDocumentBuilder};
use crimson_orders::{OrderDetail, SupplierDetail};

/// Render a purchase order into the styled xlsx template.
///
/// Usage:
///   crimson-order-doc <template.xlsx> <order.json> <supplier.json> [out.xlsx]
///
/// Pass `--with-internal-note` to include the internal note cell.
fn main() -> anyhow::Result<()> {
    crimson_observability::init();

    let mut include_internal_note = false;
    let mut paths: Vec<PathBuf> = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--with-internal-note" => include_internal_note = true,
            _ => paths.push(PathBuf::from(arg)),
        }
    }
    let (template_path, order_path, supplier_path) = match paths.as_slice() {
        [template, order, supplier] | [template, order, supplier, _] => {
            (template, order, supplier)
        }
        _ => bail!(
            "usage: crimson-order-doc <template.xlsx> <order.json> <supplier.json> [out.xlsx] [--with-internal-note]"
        ),
    };

    let order: OrderDetail = read_json(order_path).context("reading order snapshot")?;
    let supplier: SupplierDetail = read_json(supplier_path).context("reading supplier snapshot")?;

    let document = TemplateDocumentBuilder::load_path(template_path)?;
    let options = BuildOptions {
        include_internal_note,
        file_name: None,
    };
    let artifact = TemplateDocumentBuilder::build(document, &order, &supplier, &options)?;

    let out_path = paths
        .get(3)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(&artifact.file_name));
    std::fs::write(&out_path, &artifact.bytes)
        .with_context(|| format!("writing {}", out_path.display()))?;

    tracing::info!(
        order_id = order.id,
        bytes = artifact.bytes.len(),
        out = %out_path.display(),
        "order document written"
    );
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> anyhow::Result<T> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(serde_json::from_str(&text)?)
}
