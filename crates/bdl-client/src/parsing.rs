//! XML parsing for BDL API responses.
//!
//! This module provides sync parsing functions that convert raw XML
//! response bodies into typed domain objects.

use crate::error::{BdlError, BdlResult};
use crate::models::Variable;
use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

/// Local name of the element that wraps a single record.
const ITEM_TAG: &[u8] = b"item";

#[derive(Debug, Clone, Copy)]
enum Field {
    Id,
    Name,
}

/// Accumulates the direct `id` and `name` children of one `item` element.
#[derive(Debug)]
struct ItemBuilder {
    depth: usize,
    id: Option<String>,
    name: Option<String>,
    field: Option<Field>,
}

impl ItemBuilder {
    const fn at_depth(depth: usize) -> Self {
        Self {
            depth,
            id: None,
            name: None,
            field: None,
        }
    }

    fn slot(&mut self, tag: &[u8]) -> Option<(Field, &mut Option<String>)> {
        match tag {
            b"id" => Some((Field::Id, &mut self.id)),
            b"name" => Some((Field::Name, &mut self.name)),
            _ => None,
        }
    }

    /// A direct child element opened. Only the first `id`/`name` counts.
    fn open_field(&mut self, tag: &[u8]) {
        self.field = None;
        if let Some((field, slot)) = self.slot(tag) {
            if slot.is_none() {
                *slot = Some(String::new());
                self.field = Some(field);
            }
        }
    }

    /// A direct child element with no content, e.g. `<name/>`.
    fn empty_field(&mut self, tag: &[u8]) {
        if let Some((_, slot)) = self.slot(tag) {
            slot.get_or_insert_with(String::new);
        }
    }

    fn push_text(&mut self, text: &str) {
        let slot = match self.field {
            Some(Field::Id) => &mut self.id,
            Some(Field::Name) => &mut self.name,
            None => return,
        };
        if let Some(value) = slot {
            value.push_str(text);
        }
    }

    fn finish(self, index: usize) -> Variable {
        if self.id.is_none() || self.name.is_none() {
            warn!(
                item = index,
                missing_id = self.id.is_none(),
                missing_name = self.name.is_none(),
                "Variable item is missing a field, using an empty value"
            );
        }
        Variable {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        }
    }
}

/// Parse one page of the `variables` endpoint.
///
/// Every `item` element at any depth becomes a [`Variable`]; its direct
/// `id` and `name` children supply the fields. A missing child yields an
/// empty string rather than an error.
pub fn parse_variables_page(xml: &str) -> BdlResult<Vec<Variable>> {
    let mut reader = Reader::from_str(xml);
    let mut items = Vec::new();
    let mut current: Option<ItemBuilder> = None;
    let mut depth = 0usize;
    let mut seen_element = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                seen_element = true;
                let name = e.local_name();
                match current.as_mut() {
                    Some(item) if depth == item.depth + 1 => item.open_field(name.as_ref()),
                    Some(_) => {}
                    None if name.as_ref() == ITEM_TAG => {
                        current = Some(ItemBuilder::at_depth(depth));
                    }
                    None => {}
                }
            }
            Event::Empty(e) => {
                seen_element = true;
                let name = e.local_name();
                match current.as_mut() {
                    Some(item) if depth == item.depth => item.empty_field(name.as_ref()),
                    Some(_) => {}
                    None if name.as_ref() == ITEM_TAG => {
                        items.push(ItemBuilder::at_depth(depth + 1).finish(items.len()));
                    }
                    None => {}
                }
            }
            Event::Text(e) => {
                if let Some(item) = current.as_mut() {
                    if depth == item.depth + 1 {
                        item.push_text(&e.unescape()?);
                    }
                }
            }
            Event::CData(e) => {
                if let Some(item) = current.as_mut() {
                    if depth == item.depth + 1 {
                        item.push_text(&String::from_utf8_lossy(&e));
                    }
                }
            }
            Event::End(_) => {
                if let Some(item) = current.as_mut() {
                    if depth == item.depth + 1 {
                        item.field = None;
                    } else if depth == item.depth {
                        if let Some(done) = current.take() {
                            items.push(done.finish(items.len()));
                        }
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_element {
        return Err(BdlError::InvalidResponse {
            message: "response body contains no XML element".to_string(),
        });
    }
    if depth != 0 || current.is_some() {
        return Err(BdlError::InvalidResponse {
            message: "XML document ended with unclosed elements".to_string(),
        });
    }

    Ok(items)
}
