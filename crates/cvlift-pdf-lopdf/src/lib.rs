use std::collections::BTreeMap;

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId};

use cvlift_core::{BackendError, PdfBackend, RawTextItem};

/// lopdf-based implementation of [`PdfBackend`].
///
/// Walks each page's content stream and records one [`RawTextItem`] per
/// show-text operation, with the text matrix translation as its position.
/// Glyph metrics are not consulted; width is approximated from character
/// count and font size, which is close enough for the gap heuristics
/// downstream.
///
/// This crate keeps the PDF library behind the backend seam so the parsing
/// pipeline stays free of lopdf types.
#[derive(Debug, Default)]
pub struct LopdfBackend;

/// Average glyph advance as a fraction of font size. Latin text in common
/// resume fonts sits near this ratio.
const CHAR_WIDTH_RATIO: f32 = 0.5;

/// Line advance for `T*` and `'`, as a fraction of font size.
const LINE_HEIGHT_RATIO: f32 = 1.2;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn extract_items(&self, bytes: &[u8]) -> Result<Vec<Vec<RawTextItem>>, BackendError> {
        let doc = Document::load_mem(bytes).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut pages = Vec::new();
        for (_, page_id) in doc.get_pages() {
            pages.push(extract_page_items(&doc, page_id)?);
        }
        Ok(pages)
    }
}

/// Walk one page's content stream and emit positioned text items.
fn extract_page_items(doc: &Document, page_id: ObjectId) -> Result<Vec<RawTextItem>, BackendError> {
    let fonts = doc.get_page_fonts(page_id).unwrap_or_default();

    let content_data = doc
        .get_page_content(page_id)
        .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
    let content =
        Content::decode(&content_data).map_err(|e| BackendError::ExtractionError(e.to_string()))?;

    let mut items = Vec::new();

    // Text object state (PDF 32000-1 §9.4). The line matrix tracks the
    // start of the current line; Td/TD/Tm reset the text matrix from it.
    let mut resource_font = String::new();
    let mut font_size: f32 = 12.0;
    let mut text_matrix = [1.0f32, 0.0, 0.0, 1.0, 0.0, 0.0];
    let mut line_matrix = [1.0f32, 0.0, 0.0, 1.0, 0.0, 0.0];
    let mut in_text_block = false;

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => {
                in_text_block = true;
                text_matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];
                line_matrix = text_matrix;
            }
            "ET" => {
                in_text_block = false;
            }
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let Ok(name) = op.operands[0].as_name() {
                        resource_font = String::from_utf8_lossy(name).to_string();
                    }
                    if let Some(size) = as_number(&op.operands[1]) {
                        font_size = size;
                    }
                }
            }
            "Td" | "TD" => {
                if op.operands.len() >= 2 {
                    line_matrix[4] += as_number(&op.operands[0]).unwrap_or(0.0);
                    line_matrix[5] += as_number(&op.operands[1]).unwrap_or(0.0);
                    text_matrix = line_matrix;
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    for (i, operand) in op.operands.iter().take(6).enumerate() {
                        text_matrix[i] =
                            as_number(operand).unwrap_or(if i == 0 || i == 3 { 1.0 } else { 0.0 });
                    }
                    line_matrix = text_matrix;
                }
            }
            "T*" => {
                line_matrix[5] -= font_size * LINE_HEIGHT_RATIO;
                text_matrix = line_matrix;
            }
            "Tj" => {
                if in_text_block {
                    if let Some(text) = op
                        .operands
                        .first()
                        .and_then(|obj| decode_operand(obj, doc, &fonts, &resource_font))
                    {
                        push_item(&mut items, text, text_matrix, font_size, &resource_font, &fonts);
                    }
                }
            }
            "TJ" => {
                if in_text_block {
                    if let Some(Ok(array)) = op.operands.first().map(|o| o.as_array()) {
                        let mut combined = String::new();
                        for element in array {
                            if let Some(text) = decode_operand(element, doc, &fonts, &resource_font)
                            {
                                combined.push_str(&text);
                            }
                        }
                        push_item(
                            &mut items,
                            combined,
                            text_matrix,
                            font_size,
                            &resource_font,
                            &fonts,
                        );
                    }
                }
            }
            "'" => {
                line_matrix[5] -= font_size * LINE_HEIGHT_RATIO;
                text_matrix = line_matrix;
                if let Some(text) = op
                    .operands
                    .first()
                    .and_then(|obj| decode_operand(obj, doc, &fonts, &resource_font))
                {
                    push_item(&mut items, text, text_matrix, font_size, &resource_font, &fonts);
                }
            }
            // Like ' but with word and character spacing operands first.
            "\"" => {
                line_matrix[5] -= font_size * LINE_HEIGHT_RATIO;
                text_matrix = line_matrix;
                if let Some(text) = op
                    .operands
                    .get(2)
                    .and_then(|obj| decode_operand(obj, doc, &fonts, &resource_font))
                {
                    push_item(&mut items, text, text_matrix, font_size, &resource_font, &fonts);
                }
            }
            _ => {}
        }
    }

    Ok(items)
}

fn push_item(
    items: &mut Vec<RawTextItem>,
    text: String,
    text_matrix: [f32; 6],
    font_size: f32,
    resource_font: &str,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
) {
    // One item per show-text operation; whitespace-only strings are real
    // items and carry the advance the merge stage needs. Only an empty
    // string (a TJ array with no text elements) shows nothing.
    if text.is_empty() {
        return;
    }
    let width = text.chars().count() as f32 * font_size * CHAR_WIDTH_RATIO;
    items.push(RawTextItem {
        font_name: base_font_name(fonts, resource_font),
        text,
        transform: text_matrix,
        width,
    });
}

/// Resolve a resource font tag like `F1` to its face name (`BaseFont`),
/// which is what carries the bold marker. Falls back to the tag itself.
fn base_font_name(fonts: &BTreeMap<Vec<u8>, &Dictionary>, resource_font: &str) -> String {
    fonts
        .get(resource_font.as_bytes())
        .and_then(|dict| dict.get(b"BaseFont").ok())
        .and_then(|obj| obj.as_name().ok())
        .map(|name| String::from_utf8_lossy(name).to_string())
        .unwrap_or_else(|| resource_font.to_string())
}

fn as_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Decode a string operand using the current font's encoding, falling back
/// to UTF-16BE (BOM-prefixed) and then Latin-1.
fn decode_operand(
    obj: &Object,
    doc: &Document,
    fonts: &BTreeMap<Vec<u8>, &Dictionary>,
    resource_font: &str,
) -> Option<String> {
    let Object::String(bytes, _) = obj else {
        return None;
    };

    if let Some(font_dict) = fonts.get(resource_font.as_bytes()) {
        if let Ok(encoding) = font_dict.get_font_encoding(doc) {
            if let Ok(text) = Document::decode_text(&encoding, bytes) {
                return Some(text);
            }
        }
    }

    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
            .collect();
        return Some(String::from_utf16_lossy(&utf16));
    }

    Some(bytes.iter().map(|&b| b as char).collect())
}
