use crate::domain::a001_purchase_order::api;
use crate::domain::a001_purchase_order::document::{
    document_title, layout_purchase_order, pdf_file_name,
};
use crate::domain::a001_purchase_order::error::ExportError;
use crate::domain::a001_purchase_order::record::parse_order_payload;
use crate::shared::export::{download_bytes, PDF_MIME};
use crate::shared::pdf::render_pdf;

/// Fetches the purchase order and saves it as `<po>_PurchaseOrder.pdf`
pub async fn export_purchase_order(po_number: &str) -> Result<(), ExportError> {
    let (body, content_type) = api::download_purchase_order(po_number).await?;
    let generated_at = chrono::Local::now().format("%d.%m.%Y %H:%M:%S").to_string();
    let bytes = build_pdf(po_number, &body, content_type.as_deref(), &generated_at)?;
    download_bytes(&bytes, &pdf_file_name(po_number), PDF_MIME).map_err(ExportError::Download)
}

/// Turns a download response body into PDF bytes
pub fn build_pdf(
    po_number: &str,
    body: &str,
    content_type: Option<&str>,
    generated_at: &str,
) -> Result<Vec<u8>, ExportError> {
    let record = parse_order_payload(body, content_type, po_number)?
        .ok_or_else(|| ExportError::NotFound(po_number.to_string()))?;
    let layout = layout_purchase_order(po_number, &record, generated_at);
    render_pdf(&layout, &document_title(po_number)).map_err(ExportError::Render)
}
