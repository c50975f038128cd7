//! XML serialization for [`Document`](super::Document)
//!
//! Output is UTF-8 with an XML declaration and two-space indentation. Text and
//! attribute values are escaped by quick-xml; elements without children or
//! text are written self-closing.
//!
//! Attribute values keep `\t`, `\n` and `\r` as character references so a
//! reader gets them back unnormalized. Characters XML 1.0 cannot carry at all
//! (most C0 controls) are written as U+FFFD; embedded source is base64 and
//! unaffected.

use std::borrow::Cow;
use std::io::Write;

use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::{Document, Element};
use crate::error::DocumentError;

pub fn write_document<W: Write>(document: &Document, sink: W) -> Result<(), DocumentError> {
    let mut writer = Writer::new_with_indent(sink, b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    for element in document.elements() {
        write_element(&mut writer, element)?;
    }

    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), DocumentError> {
    let mut start = BytesStart::new(element.tag());
    for (key, value) in element.attributes() {
        let value = escape_attribute(value);
        start.push_attribute((key.as_bytes(), value.as_bytes()));
    }

    if element.children().is_empty() && element.text().is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = element.text() {
        writer.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
    }
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag())))?;
    Ok(())
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn replace_invalid_chars(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_xml_char) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(
            value
                .chars()
                .map(|c| if is_xml_char(c) { c } else { '\u{FFFD}' })
                .collect(),
        )
    }
}

fn escape_attribute(value: &str) -> String {
    let value = replace_invalid_chars(value);
    let escaped = escape(value.as_ref());
    let mut out = String::with_capacity(escaped.len());
    for c in escaped.chars() {
        match c {
            '\t' => out.push_str("&#x9;"),
            '\n' => out.push_str("&#xA;"),
            '\r' => out.push_str("&#xD;"),
            c => out.push(c),
        }
    }
    out
}

/// Text keeps raw newlines; only `\r` needs a reference to survive parsing
fn escape_text(text: &str) -> String {
    let text = replace_invalid_chars(text);
    escape(text.as_ref()).replace('\r', "&#xD;")
}
