//! Wire format for twmn notification datagrams.
//!
//! One UDP datagram carries one XML document whose `<root>` element holds
//! the notification fields as direct children:
//!
//! ```xml
//! <root><title>Build</title><content>OK</content><icon>info</icon></root>
//! ```
//!
//! There is no framing, acknowledgement or versioning beyond that.

mod decode;
mod encode;
mod fields;

pub use decode::decode;
pub use encode::encode;
pub use fields::Fields;

/// Name of the document element every payload must use.
pub const ROOT_ELEMENT: &str = "root";

/// Largest payload a single UDP datagram can carry.
pub const MAX_DATAGRAM_SIZE: usize = 65_507;

/// Errors produced while decoding or encoding a payload.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Empty payload")]
    Empty,

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Text decoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("Expected document element <{ROOT_ELEMENT}>, found <{0}>")]
    WrongRoot(String),

    #[error("No <{ROOT_ELEMENT}> element in payload")]
    MissingRoot,

    #[error("Field <{0}> contains nested elements")]
    NestedElement(String),

    #[error("Unexpected content after </{ROOT_ELEMENT}>")]
    TrailingContent,

    #[error("Payload ended inside an open element")]
    UnexpectedEof,

    #[error("Invalid field name: {0:?}")]
    InvalidFieldName(String),
}

/// Result type alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
