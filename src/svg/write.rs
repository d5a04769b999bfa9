//! Serialization of the owned tree back to markup.

use super::node::{Document, Element, Node};
use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event},
};
use std::io::{self, Write};

/// Write `doc` with an XML declaration to `out`, returning the sink.
pub fn write_document<W: Write>(doc: &Document, out: W) -> io::Result<W> {
    let mut writer = Writer::new(out);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;

    for node in doc.prolog() {
        write_node(&mut writer, node, None)?;
        writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
    }
    write_element(&mut writer, doc.root(), None)?;

    Ok(writer.into_inner())
}

fn write_node<W: Write>(writer: &mut Writer<W>, node: &Node, ns: Option<&str>) -> io::Result<()> {
    match node {
        Node::Element(elem) => write_element(writer, elem, ns),
        Node::Text(text) => writer.write_event(Event::Text(BytesText::from_escaped(
            partial_escape(text.as_str()),
        ))),
        Node::CData(data) => writer.write_event(Event::CData(BytesCData::new(data.as_str()))),
        Node::Comment(raw) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(raw.as_str())))
        }
        Node::Instruction(raw) => writer.write_event(Event::PI(BytesPI::new(raw.as_str()))),
        Node::DocType(raw) => {
            writer.write_event(Event::DocType(BytesText::from_escaped(raw.as_str())))
        }
    }
}

/// Write an element subtree.
///
/// `ns` is the default namespace in scope; an `xmlns` attribute repeating
/// it is redundant and skipped.
fn write_element<W: Write>(
    writer: &mut Writer<W>,
    elem: &Element,
    ns: Option<&str>,
) -> io::Result<()> {
    let mut start = BytesStart::new(elem.name());
    for (key, value) in elem.attrs() {
        if key == "xmlns" && ns == Some(value) {
            continue;
        }
        start.push_attribute((key, value));
    }

    if elem.children().is_empty() {
        return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;
    let scope = elem.attr("xmlns").or(ns);
    for child in elem.children() {
        write_node(writer, child, scope)?;
    }
    writer.write_event(Event::End(BytesEnd::new(elem.name())))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::{SVG_NAMESPACE, parse_document};

    fn render(doc: &Document) -> String {
        String::from_utf8(write_document(doc, Vec::new()).unwrap()).unwrap()
    }

    #[test]
    fn test_write_declaration_and_namespace() {
        let doc = parse_document(r#"<svg xmlns="http://www.w3.org/2000/svg"><rect id="a"/></svg>"#)
            .unwrap();
        let out = render(&doc);
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
        assert!(out.contains(r#"<svg xmlns="http://www.w3.org/2000/svg">"#));
        assert!(out.ends_with(r#"<rect id="a"/></svg>"#));
    }

    #[test]
    fn test_write_skips_redundant_default_namespace() {
        let mut doc = Document::new(Element::new("svg").with_attr("xmlns", SVG_NAMESPACE));
        doc.root_mut().append(
            Element::new("animate")
                .with_attr("attributeName", "fill")
                .with_attr("xmlns", SVG_NAMESPACE),
        );
        let out = render(&doc);
        assert!(out.contains(r#"<animate attributeName="fill"/>"#));
        assert_eq!(out.matches("xmlns=").count(), 1);
    }

    #[test]
    fn test_write_keeps_distinct_namespace() {
        let mut doc = Document::new(Element::new("svg").with_attr("xmlns", SVG_NAMESPACE));
        doc.root_mut()
            .append(Element::new("meta").with_attr("xmlns", "urn:example"));
        assert!(render(&doc).contains(r#"<meta xmlns="urn:example"/>"#));
    }

    #[test]
    fn test_write_escapes_text_and_attributes() {
        let doc = Document::new(
            Element::new("text")
                .with_attr("title", "a \"b\" & c")
                .with_child(Node::Text("1 < 2 & 3".into())),
        );
        let out = render(&doc);
        assert!(out.contains("title=\"a &quot;b&quot; &amp; c\""));
        assert!(out.contains(">1 &lt; 2 &amp; 3</text>"));
    }

    #[test]
    fn test_round_trip_preserves_tree() {
        let source = "<!-- logo -->\n<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <g id=\"LyricsSync\"><text>Lyrics &amp; Sync</text></g>\n  <![CDATA[raw <data>]]>\n</svg>";
        let doc = parse_document(source).unwrap();
        let again = parse_document(&render(&doc)).unwrap();
        assert_eq!(doc, again);
    }
}
