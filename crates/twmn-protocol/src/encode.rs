use quick_xml::escape::escape;

use crate::{Fields, ProtocolError, ROOT_ELEMENT, Result};

/// Encode fields into a datagram payload understood by [`crate::decode`].
pub fn encode(fields: &Fields) -> Result<String> {
    let mut out = format!("<{ROOT_ELEMENT}>");
    for (name, value) in fields.iter() {
        if !is_valid_name(name) {
            return Err(ProtocolError::InvalidFieldName(name.to_string()));
        }
        out.push_str(&format!("<{name}>{}</{name}>", escape(value)));
    }
    out.push_str(&format!("</{ROOT_ELEMENT}>"));
    Ok(out)
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode;

    #[test]
    fn encoded_payload_decodes_to_same_fields() {
        let fields: Fields = [
            ("title", "Build <main>"),
            ("content", "tests & lints \"passed\""),
            ("icon", "ok"),
        ]
        .into_iter()
        .collect();

        let payload = encode(&fields).unwrap();
        assert!(payload.starts_with("<root>"));
        assert!(!payload.contains("<main>"));
        assert_eq!(decode(payload.as_bytes()).unwrap(), fields);
    }

    #[test]
    fn rejects_names_that_are_not_xml_names() {
        for bad in ["", "1st", "has space", "a<b"] {
            let fields: Fields = [(bad, "x")].into_iter().collect();
            assert!(
                matches!(encode(&fields), Err(ProtocolError::InvalidFieldName(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
