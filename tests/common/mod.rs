//! Shared test helpers: parse emitted XML into a normalized event stream.

use quick_xml::Reader;
use quick_xml::events::Event;

/// A structural event, normalized so that `<a/>` and `<a></a>` compare equal
/// and adjacent text fragments merge.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Start(String, Vec<(String, String)>),
    End,
    Text(String),
    Cdata(String),
    Comment(String),
}

/// Parse a document into normalized events, panicking on malformed XML.
pub fn parse_events(xml: &str) -> Vec<Node> {
    let mut reader = Reader::from_str(xml);
    let mut out: Vec<Node> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => out.push(start_node(&e)),
            Ok(Event::Empty(e)) => {
                out.push(start_node(&e));
                out.push(Node::End);
            }
            Ok(Event::End(_)) => out.push(Node::End),
            Ok(Event::Text(e)) => push_text(&mut out, &String::from_utf8_lossy(e.as_ref())),
            Ok(Event::GeneralRef(e)) => {
                let entity = String::from_utf8_lossy(e.as_ref()).to_string();
                push_text(&mut out, &resolve_entity(&entity));
            }
            Ok(Event::CData(e)) => {
                out.push(Node::Cdata(String::from_utf8_lossy(e.as_ref()).to_string()))
            }
            Ok(Event::Comment(e)) => {
                out.push(Node::Comment(String::from_utf8_lossy(e.as_ref()).to_string()))
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed XML {xml:?}: {e}"),
            _ => {}
        }
    }

    out
}

fn start_node(e: &quick_xml::events::BytesStart) -> Node {
    let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
    let attrs = e
        .attributes()
        .flatten()
        .map(|attr| {
            (
                String::from_utf8_lossy(attr.key.as_ref()).to_string(),
                attr.unescape_value().expect("attribute value").to_string(),
            )
        })
        .collect();
    Node::Start(name, attrs)
}

fn push_text(out: &mut Vec<Node>, content: &str) {
    if content.is_empty() {
        return;
    }
    if let Some(Node::Text(text)) = out.last_mut() {
        text.push_str(content);
    } else {
        out.push(Node::Text(content.to_string()));
    }
}

fn resolve_entity(entity: &str) -> String {
    match entity {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        "apos" => "'".to_string(),
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).expect("hex character reference")
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse().expect("decimal character reference")
            } else {
                panic!("unknown entity reference {entity:?}");
            };
            char::from_u32(code)
                .expect("valid character reference")
                .to_string()
        }
    }
}
