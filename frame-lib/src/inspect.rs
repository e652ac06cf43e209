//! Reading emitted markup back into plain elements.
//!
//! Used to check frames after serialization: what a vector editor will see
//! when the text is pasted is what `parse_elements` returns.

use std::collections::BTreeMap;

use svg::node::element::path::Data;
use svg::node::element::tag::Type;
use svg::parser::Event;

use crate::FrameError;

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.attr(key)?.parse().ok()
    }

    /// Path data of a `path` element.
    pub fn path_data(&self) -> Result<Data, FrameError> {
        let d = self
            .attr("d")
            .ok_or_else(|| FrameError::Parse(format!("<{}> has no path data", self.name)))?;
        Data::parse(d).map_err(|e| FrameError::Parse(e.to_string()))
    }
}

/// Opening and self-closing tags in document order.
pub fn parse_elements(markup: &str) -> Result<Vec<Element>, FrameError> {
    let mut elements = Vec::new();
    for event in svg::read(markup)? {
        match event {
            Event::Tag(name, Type::Start | Type::Empty, attributes) => {
                elements.push(Element {
                    name: name.to_string(),
                    attributes: attributes
                        .iter()
                        .map(|(key, value)| (key.to_string(), value.to_string()))
                        .collect(),
                });
            }
            Event::Error(e) => return Err(FrameError::Parse(e.to_string())),
            _ => (),
        }
    }
    Ok(elements)
}
