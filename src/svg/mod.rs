//! SVG document model.
//!
//! # Modules
//!
//! - [`node`]: owned tree (`Document`, `Element`, `Node`)
//! - [`parse`]: markup -> tree via `quick_xml::Reader`
//! - [`write`]: tree -> markup via `quick_xml::Writer`
//! - [`find`]: depth-first lookup by `id`
//!
//! ```text
//! original.svg ──► load ──► Document ──► (mutate) ──► save ──► animated_result.svg
//! ```

mod error;
mod find;
mod node;
mod parse;
mod write;

pub use error::{SvgError, XmlError};
pub use find::{find_by_id, find_by_id_mut};
pub use node::{Document, Element, Node, SVG_NAMESPACE};
pub use parse::{parse_document, parse_fragment};
pub use write::write_document;

use encoding_rs::{Encoding, UTF_8};
use quick_xml::{
    Reader,
    encoding::{decode, detect_encoding},
    events::Event,
};
use std::{
    borrow::Cow,
    fs,
    io::{BufWriter, ErrorKind, Write},
    path::Path,
};

/// Load and parse the document at `path`.
///
/// Content is decoded per its byte order mark or declared `encoding`,
/// defaulting to UTF-8.
pub fn load(path: &Path) -> Result<Document, SvgError> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => SvgError::NotFound(path.to_path_buf()),
        _ => SvgError::Read(path.to_path_buf(), err),
    })?;

    let content =
        decode_source(&bytes).map_err(|err| SvgError::Malformed(path.to_path_buf(), err))?;
    parse_document(&content).map_err(|err| SvgError::Malformed(path.to_path_buf(), err))
}

fn decode_source(bytes: &[u8]) -> Result<Cow<'_, str>, XmlError> {
    let (detected, bom) = detect_encoding(bytes).unwrap_or((UTF_8, 0));
    let body = &bytes[bom..];

    // A BOM is authoritative; otherwise an ASCII-compatible prefix defers to
    // the declaration.
    let encoding = if bom == 0 && detected == UTF_8 {
        declared_encoding(body).unwrap_or(UTF_8)
    } else {
        detected
    };

    decode(body, encoding).map_err(|err| XmlError::new(0, err.to_string()))
}

/// Encoding named by the XML declaration, if any and known.
fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    match reader.read_event_into(&mut buf) {
        Ok(Event::Decl(decl)) => decl.encoder(),
        _ => None,
    }
}

/// Serialize `doc` to `path`, replacing any existing file.
///
/// A failure part-way through may leave a partial file behind.
pub fn save(doc: &Document, path: &Path) -> Result<(), SvgError> {
    let write = || -> std::io::Result<()> {
        let file = fs::File::create(path)?;
        let mut out = write_document(doc, BufWriter::new(file))?;
        out.flush()
    };
    write().map_err(|err| SvgError::Write(path.to_path_buf(), err))
}
