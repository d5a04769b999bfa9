//! Markup parsing into the owned tree.
//!
//! Streams events from `quick_xml::Reader` and builds [`Element`]s on an
//! explicit stack. Text and entity references are buffered raw and
//! unescaped once per text run.
//!
//! General entities declared in the doctype's internal subset resolve like
//! the predefined ones, in text and in attribute values.

use super::error::XmlError;
use super::node::{Document, Element, Node};
use quick_xml::{
    Reader,
    escape::{resolve_predefined_entity, unescape_with},
    events::{BytesStart, Event},
};
use std::collections::HashMap;

/// Parse a complete document (prolog + exactly one root element).
pub fn parse_document(source: &str) -> Result<Document, XmlError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().check_end_names = true;

    let mut builder = TreeBuilder::default();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| XmlError::new(reader.error_position() as u64, e.to_string()))?;
        let position = reader.buffer_position() as u64;

        match event {
            Event::Text(e) => builder.text.push_str(utf8(&e, position)?),
            Event::GeneralRef(e) => {
                builder.text.push('&');
                builder.text.push_str(utf8(&e, position)?);
                builder.text.push(';');
            }
            Event::Start(e) => {
                builder.flush_text(position)?;
                let elem = element_from(&e, &builder.entities, position)?;
                builder.stack.push(elem);
            }
            Event::Empty(e) => {
                builder.flush_text(position)?;
                let elem = element_from(&e, &builder.entities, position)?;
                builder.close(elem, position)?;
            }
            Event::End(_) => {
                builder.flush_text(position)?;
                let elem = builder
                    .stack
                    .pop()
                    .ok_or_else(|| XmlError::new(position, "unexpected closing tag"))?;
                builder.close(elem, position)?;
            }
            Event::CData(e) => {
                builder.flush_text(position)?;
                builder.push_node(Node::CData(utf8(&e, position)?.to_string()), position)?;
            }
            Event::Comment(e) => {
                builder.flush_text(position)?;
                builder.push_node(Node::Comment(utf8(&e, position)?.to_string()), position)?;
            }
            Event::PI(e) => {
                builder.flush_text(position)?;
                builder.push_node(Node::Instruction(utf8(&e, position)?.to_string()), position)?;
            }
            Event::DocType(e) => {
                builder.flush_text(position)?;
                let doctype = utf8(&e, position)?;
                builder.declare_entities(doctype);
                builder.push_node(Node::DocType(doctype.to_string()), position)?;
            }
            // The writer emits its own declaration.
            Event::Decl(_) => builder.flush_text(position)?,
            Event::Eof => {
                builder.flush_text(position)?;
                break;
            }
        }
    }

    builder.finish(reader.buffer_position() as u64)
}

/// Parse a standalone fragment consisting of a single element.
///
/// Surrounding whitespace is allowed; anything else outside the element
/// is rejected.
pub fn parse_fragment(markup: &str) -> Result<Element, XmlError> {
    parse_document(markup).map(|doc| doc.root)
}

#[derive(Default)]
struct TreeBuilder {
    prolog: Vec<Node>,
    root: Option<Element>,
    stack: Vec<Element>,
    /// Raw (still escaped) text of the current run.
    text: String,
    /// Internal-subset general entities, name -> replacement text.
    entities: HashMap<String, String>,
}

impl TreeBuilder {
    fn flush_text(&mut self, position: u64) -> Result<(), XmlError> {
        if self.text.is_empty() {
            return Ok(());
        }
        let raw = std::mem::take(&mut self.text);
        let text = unescape_with(&raw, |name| resolve_entity(&self.entities, name))
            .map_err(|e| XmlError::new(position, e.to_string()))?;

        match self.stack.last_mut() {
            Some(parent) => parent.append(Node::Text(text.into_owned())),
            None if text.trim().is_empty() => {}
            None => return Err(XmlError::new(position, "text outside the root element")),
        }
        Ok(())
    }

    /// Record the `<!ENTITY name "value">` declarations of a doctype.
    ///
    /// Parameter entities and external (`SYSTEM`/`PUBLIC`) entities are
    /// skipped. The first declaration of a name is binding.
    fn declare_entities(&mut self, doctype: &str) {
        for decl in doctype.split("<!ENTITY").skip(1) {
            let decl = decl.trim_start();
            if decl.starts_with('%') {
                continue;
            }
            let Some((name, rest)) = decl.split_once(|c: char| c.is_ascii_whitespace()) else {
                continue;
            };
            let rest = rest.trim_start();
            let Some(quote) = rest.chars().next().filter(|c| matches!(c, '"' | '\'')) else {
                continue;
            };
            let Some((value, _)) = rest[1..].split_once(quote) else {
                continue;
            };
            self.entities
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
    }

    fn push_node(&mut self, node: Node, position: u64) -> Result<(), XmlError> {
        if let Some(parent) = self.stack.last_mut() {
            parent.append(node);
        } else if self.root.is_none() {
            self.prolog.push(node);
        } else if matches!(node, Node::CData(_)) {
            return Err(XmlError::new(position, "CDATA outside the root element"));
        }
        // Misc nodes after the root are dropped.
        Ok(())
    }

    fn close(&mut self, elem: Element, position: u64) -> Result<(), XmlError> {
        if let Some(parent) = self.stack.last_mut() {
            parent.append(elem);
            return Ok(());
        }
        if self.root.is_some() {
            return Err(XmlError::new(
                position,
                format!("second root element `<{}>`", elem.name()),
            ));
        }
        self.root = Some(elem);
        Ok(())
    }

    fn finish(self, position: u64) -> Result<Document, XmlError> {
        if let Some(open) = self.stack.last() {
            return Err(XmlError::new(
                position,
                format!("unclosed element `<{}>`", open.name()),
            ));
        }
        let root = self
            .root
            .ok_or_else(|| XmlError::new(position, "no root element"))?;
        Ok(Document {
            prolog: self.prolog,
            root,
        })
    }
}

fn element_from(
    start: &BytesStart<'_>,
    entities: &HashMap<String, String>,
    position: u64,
) -> Result<Element, XmlError> {
    let mut elem = Element::new(utf8(start.name().as_ref(), position)?);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| XmlError::new(position, e.to_string()))?;
        let key = utf8(attr.key.as_ref(), position)?;
        if elem.attr(key).is_some() {
            return Err(XmlError::new(
                position,
                format!("duplicate attribute `{key}` on `<{}>`", elem.name()),
            ));
        }
        let value = unescape_with(utf8(&attr.value, position)?, |name| {
            resolve_entity(entities, name)
        })
        .map_err(|e| XmlError::new(position, e.to_string()))?;
        elem.set_attr(key, value.into_owned());
    }

    Ok(elem)
}

/// Declared entity first, then the five predefined XML entities.
fn resolve_entity<'a>(entities: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    entities
        .get(name)
        .map(String::as_str)
        .or_else(|| resolve_predefined_entity(name))
}

#[inline]
fn utf8(bytes: &[u8], position: u64) -> Result<&str, XmlError> {
    std::str::from_utf8(bytes).map_err(|e| XmlError::new(position, e.to_string()))
}

// ============================================================================
// Tests
// ============================================================================
