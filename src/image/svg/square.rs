use std::borrow::Cow;
use std::fs;
use std::path::Path;

use quick_xml::escape::unescape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use super::dimension::parse_dimension;
use crate::debug;
use crate::error::ToolError;
use crate::image::codec;

/// Square the viewport of an SVG file.
///
/// Returns the side length written.
pub fn square_svg(input: &Path, output: &Path) -> Result<u32, ToolError> {
    let bytes = fs::read(input).map_err(|e| ToolError::FileNotReadable(input.to_path_buf(), e))?;
    let source = String::from_utf8(bytes)
        .map_err(|e| ToolError::MarkupParseFailed(format!("{}: {e}", input.display())))?;
    let squared = square_document(&source)?;
    debug!("svg"; "squared {} to {}x{}", input.display(), squared.size, squared.size);

    codec::write_output(output, squared.markup.as_bytes())?;
    Ok(squared.size)
}

/// A re-serialized SVG document with a square viewport.
#[derive(Debug)]
pub struct SquaredSvg {
    pub size: u32,
    pub markup: String,
}

/// Rewrite the root `width`, `height` and `viewBox` to `min(width, height)`.
///
/// The root's inner markup is copied byte for byte. Other root attributes
/// are kept; anything before the root element is dropped.
pub fn square_document(source: &str) -> Result<SquaredSvg, ToolError> {
    let mut reader = Reader::from_str(source);

    let (root, inner) = loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let inner = reader.read_text(start.name())?;
                break (start, inner);
            }
            Event::Empty(start) => break (start, Cow::Borrowed("")),
            Event::Eof => {
                return Err(ToolError::MarkupParseFailed("no root element".to_string()));
            }
            _ => {}
        }
    };

    if root.local_name().as_ref() != b"svg" {
        return Err(ToolError::MarkupParseFailed(format!(
            "expected <svg> root element, found <{}>",
            String::from_utf8_lossy(root.name().as_ref())
        )));
    }

    let mut width = 0;
    let mut height = 0;
    let mut kept: Vec<Attribute> = Vec::new();
    for attr in root.attributes() {
        let attr = attr.map_err(|e| ToolError::MarkupParseFailed(e.to_string()))?;
        match attr.key.as_ref() {
            b"width" => width = parse_dimension(&String::from_utf8_lossy(&attr.value)),
            b"height" => height = parse_dimension(&String::from_utf8_lossy(&attr.value)),
            b"viewBox" => {}
            _ => kept.push(attr),
        }
    }
    let size = width.min(height);

    let name = String::from_utf8_lossy(root.name().as_ref()).into_owned();
    let side = size.to_string();
    let view_box = format!("0 0 {side} {side}");

    let mut start = BytesStart::new(name.as_str());
    start.push_attribute(("width", side.as_str()));
    start.push_attribute(("height", side.as_str()));
    start.push_attribute(("viewBox", view_box.as_str()));
    for attr in kept {
        push_raw_attribute(&mut start, attr)?;
    }

    let mut writer = Writer::new(Vec::with_capacity(source.len()));
    writer
        .write_event(Event::Start(start))
        .map_err(|e| ToolError::MarkupParseFailed(e.to_string()))?;
    writer.get_mut().extend_from_slice(inner.as_bytes());
    writer
        .write_event(Event::End(BytesEnd::new(name.as_str())))
        .map_err(|e| ToolError::MarkupParseFailed(e.to_string()))?;

    let markup = String::from_utf8(writer.into_inner())
        .map_err(|e| ToolError::MarkupParseFailed(e.to_string()))?;
    Ok(SquaredSvg { size, markup })
}

/// Keep an attribute's escaped value as written, unless it needs requoting.
fn push_raw_attribute(start: &mut BytesStart, attr: Attribute) -> Result<(), ToolError> {
    if !attr.value.contains(&b'"') {
        start.push_attribute(attr);
        return Ok(());
    }

    // Single-quoted in the source; unescape so it is re-escaped for double quotes
    let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
    let raw = String::from_utf8_lossy(&attr.value);
    let value = unescape(&raw).map_err(|e| ToolError::MarkupParseFailed(e.to_string()))?;
    start.push_attribute((key.as_str(), value.as_ref()));
    Ok(())
}
