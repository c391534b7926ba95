use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::trace;

use crate::{Fields, ProtocolError, ROOT_ELEMENT, Result};

enum Position {
    BeforeRoot,
    InRoot,
    InField { name: String, value: String },
    AfterRoot,
}

/// Decode one datagram payload into its fields.
///
/// The payload is read up to the first NUL byte. Whitespace between
/// elements is ignored; text inside a field is kept as-is (entities
/// unescaped, CDATA sections included verbatim).
pub fn decode(payload: &[u8]) -> Result<Fields> {
    let end = payload
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(payload.len());
    let payload = &payload[..end];
    if is_blank(payload) {
        return Err(ProtocolError::Empty);
    }
    let text = std::str::from_utf8(payload)?;

    let mut reader = Reader::from_str(text);
    let mut fields = Fields::new();
    let mut position = Position::BeforeRoot;

    loop {
        position = match (position, reader.read_event()?) {
            (Position::AfterRoot, Event::Eof) => break,
            (Position::BeforeRoot, Event::Eof) => return Err(ProtocolError::MissingRoot),
            (_, Event::Eof) => return Err(ProtocolError::UnexpectedEof),
            (pos, Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_)) => pos,

            (Position::BeforeRoot, Event::Start(e)) => {
                check_root(e.name().as_ref())?;
                Position::InRoot
            }
            (Position::BeforeRoot, Event::Empty(e)) => {
                check_root(e.name().as_ref())?;
                Position::AfterRoot
            }
            (Position::BeforeRoot, Event::Text(t)) if is_blank(&t) => Position::BeforeRoot,
            (Position::BeforeRoot, _) => return Err(ProtocolError::MissingRoot),

            (Position::InRoot, Event::Start(e)) => Position::InField {
                name: element_name(e.name().as_ref())?,
                value: String::new(),
            },
            (Position::InRoot, Event::Empty(e)) => {
                let name = element_name(e.name().as_ref())?;
                trace!(field = %name, "Empty field");
                fields.insert(name, "");
                Position::InRoot
            }
            // Text directly under <root> is not a field.
            (Position::InRoot, Event::Text(_) | Event::CData(_)) => Position::InRoot,
            (Position::InRoot, Event::End(_)) => Position::AfterRoot,

            (Position::InField { name, mut value }, Event::Text(t)) => {
                value.push_str(&t.unescape()?);
                Position::InField { name, value }
            }
            (Position::InField { name, mut value }, Event::CData(c)) => {
                value.push_str(&c.decode()?);
                Position::InField { name, value }
            }
            (Position::InField { name, .. }, Event::Start(_) | Event::Empty(_)) => {
                return Err(ProtocolError::NestedElement(name));
            }
            (Position::InField { name, value }, Event::End(_)) => {
                trace!(field = %name, len = value.len(), "Field decoded");
                fields.insert(name, value);
                Position::InRoot
            }

            (Position::AfterRoot, Event::Text(t)) if is_blank(&t) => Position::AfterRoot,
            (Position::AfterRoot, _) => return Err(ProtocolError::TrailingContent),
        };
    }

    Ok(fields)
}

fn check_root(name: &[u8]) -> Result<()> {
    if name == ROOT_ELEMENT.as_bytes() {
        Ok(())
    } else {
        Err(ProtocolError::WrongRoot(String::from_utf8_lossy(name).into_owned()))
    }
}

fn element_name(name: &[u8]) -> Result<String> {
    Ok(std::str::from_utf8(name)?.to_string())
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}
