use super::layout::{FontWeight, LayoutDocument};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, Pt};

/// Share of the font size above the baseline for the Helvetica family
const ASCENT_RATIO: f32 = 0.8;

const LAYER_NAME: &str = "Content";

/// Renders a laid out document with the built-in Helvetica fonts.
pub fn render_pdf(doc: &LayoutDocument, title: &str) -> Result<Vec<u8>, String> {
    let geometry = doc.geometry;
    let width = Mm::from(Pt(geometry.width));
    let height = Mm::from(Pt(geometry.height));

    let (pdf, first_page, first_layer) = PdfDocument::new(title, width, height, LAYER_NAME);
    let regular = pdf
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| format!("Failed to load font: {}", e))?;
    let bold = pdf
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| format!("Failed to load font: {}", e))?;

    for (index, page) in doc.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            pdf.add_page(width, height, LAYER_NAME)
        };
        let layer = pdf.get_page(page_index).get_layer(layer_index);

        for run in &page.runs {
            let font: &IndirectFontRef = match run.weight {
                FontWeight::Regular => &regular,
                FontWeight::Bold => &bold,
            };
            // PDF origin is the bottom-left corner
            let baseline = geometry.height - (run.y + run.size * ASCENT_RATIO);
            layer.use_text(
                run.text.clone(),
                run.size,
                Mm::from(Pt(run.x)),
                Mm::from(Pt(baseline)),
                font,
            );
        }
    }

    pdf.save_to_bytes()
        .map_err(|e| format!("Failed to write PDF: {}", e))
}
