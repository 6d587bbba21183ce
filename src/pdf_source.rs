use crate::document::{DocumentOpener, DocumentSource, OutlineEntry, TextSpan};
use anyhow::{Context, Result};
use pdf::content::{Content, Op, TextDrawAdjusted};
use pdf::file::FileOptions;
use pdf::object::{OutlineItem, Ref, Resolve};
use pdf::primitive::Primitive;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Default)]
struct PageContent {
    text: String,
    spans: Vec<TextSpan>,
}

/// A PDF loaded through the `pdf` crate, with page text, styled spans and the
/// outline extracted eagerly at open time.
pub struct PdfDocument {
    outline: Vec<OutlineEntry>,
    pages: Vec<PageContent>,
}

impl PdfDocument {
    pub fn open(path: &Path) -> Result<Self> {
        let file = FileOptions::cached()
            .open(path)
            .with_context(|| format!("Failed to open PDF at {}", path.display()))?;

        let mut pages = Vec::new();
        let mut page_ids = HashMap::new();
        for page_num in 0..file.num_pages() {
            let mut content = PageContent::default();
            match file.get_page(page_num) {
                Ok(page) => {
                    page_ids.insert(page.get_ref().id, page_num as usize);
                    if let Some(ops) = &page.contents {
                        if let Err(err) = extract_page_content(&file.resolver(), ops, &mut content) {
                            log::warn!(
                                "Failed to extract text from page {} of {}: {}",
                                page_num + 1,
                                path.display(),
                                err
                            );
                        }
                    }
                }
                Err(err) => {
                    log::warn!(
                        "Failed to load page {} of {}: {}",
                        page_num + 1,
                        path.display(),
                        err
                    );
                }
            }
            pages.push(content);
        }

        let mut outline = Vec::new();
        if let Some(outlines) = &file.get_root().outlines {
            let mut visited = HashSet::new();
            if let Err(err) = walk_outline(
                &file.resolver(),
                outlines.first,
                1,
                &page_ids,
                &mut visited,
                &mut outline,
            ) {
                log::warn!("Failed to read outline of {}: {}", path.display(), err);
            }
        }

        Ok(Self { outline, pages })
    }
}

impl DocumentSource for PdfDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn outline(&self) -> &[OutlineEntry] {
        &self.outline
    }

    fn page_text(&self, index: usize) -> &str {
        &self.pages[index].text
    }

    fn page_spans(&self, index: usize) -> &[TextSpan] {
        &self.pages[index].spans
    }
}

/// Replays a page's content stream, accumulating plain text and one span per
/// text-draw op. The current Tf size is carried onto each span so the
/// typography fallback can judge heading candidates.
fn extract_page_content(
    resolver: &impl Resolve,
    content: &Content,
    out: &mut PageContent,
) -> Result<()> {
    let mut font_size = 0.0_f32;
    for op in content.operations(resolver)? {
        match op {
            Op::TextFont { size, .. } => {
                font_size = size;
            }
            Op::TextDraw { text } => {
                let text = text.to_string_lossy();
                if !text.trim().is_empty() {
                    out.spans.push(TextSpan {
                        text: text.trim().to_string(),
                        font_size,
                    });
                    out.text.push_str(&text);
                    out.text.push(' ');
                }
            }
            Op::TextDrawAdjusted { array } => {
                let mut run = String::new();
                for item in array {
                    match item {
                        TextDrawAdjusted::Text(text) => {
                            let piece = text.to_string_lossy();
                            if !piece.trim().is_empty() {
                                run.push_str(&piece);
                            }
                        }
                        TextDrawAdjusted::Spacing(_) => {
                            run.push(' ');
                        }
                    }
                }
                if !run.trim().is_empty() {
                    out.spans.push(TextSpan {
                        text: run.trim().to_string(),
                        font_size,
                    });
                    out.text.push_str(&run);
                    out.text.push(' ');
                }
            }
            Op::TextNewline => {
                out.text.push('\n');
            }
            Op::MoveTextPosition { translation } => {
                // Large vertical movements typically indicate paragraph breaks.
                if translation.y.abs() > 12.0 {
                    out.text.push('\n');
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Depth-first walk of the outline item chain. Entries whose destination
/// cannot be resolved to a page keep page number 0 and are filtered out
/// during discovery.
fn walk_outline(
    resolver: &impl Resolve,
    mut next: Option<Ref<OutlineItem>>,
    level: u32,
    page_ids: &HashMap<u64, usize>,
    visited: &mut HashSet<u64>,
    out: &mut Vec<OutlineEntry>,
) -> Result<()> {
    while let Some(item_ref) = next {
        // Guard against reference cycles in malformed files.
        if !visited.insert(item_ref.get_inner().id) {
            break;
        }
        let item = resolver.get(item_ref)?;
        let title = item
            .title
            .as_ref()
            .map(|t| t.to_string_lossy().to_string())
            .unwrap_or_default();
        let page_number = item
            .dest
            .as_ref()
            .and_then(|dest| dest_page_number(dest, page_ids))
            .unwrap_or(0);
        out.push(OutlineEntry {
            level,
            title,
            page_number,
        });
        if let Some(first_child) = item.first {
            walk_outline(resolver, Some(first_child), level + 1, page_ids, visited, out)?;
        }
        next = item.next;
    }
    Ok(())
}

/// 1-based page number for an outline destination. Handles the common shape:
/// an array whose first element references a page object. Named destinations
/// are not resolved.
fn dest_page_number(dest: &Primitive, page_ids: &HashMap<u64, usize>) -> Option<u32> {
    let target = match dest {
        Primitive::Array(parts) => parts.first()?,
        other => other,
    };
    match target {
        Primitive::Reference(plain) => page_ids.get(&plain.id).map(|&index| index as u32 + 1),
        _ => None,
    }
}

/// Opens documents with [`PdfDocument`].
pub struct PdfOpener;

impl DocumentOpener for PdfOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn DocumentSource>> {
        Ok(Box::new(PdfDocument::open(path)?))
    }
}
