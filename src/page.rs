use std::collections::BTreeMap;
use std::fmt;

/// Fixed fields of the stats page, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    Height,
    BlockId,
    Difficulty,
    Time,
    TokensSpendable,
    TokensLocked,
    CustodyFeeDebt,
    TokensSpent,
    CustodyFeeCollected,
}

impl ElementId {
    pub const ALL: [ElementId; 9] = [
        ElementId::Height,
        ElementId::BlockId,
        ElementId::Difficulty,
        ElementId::Time,
        ElementId::TokensSpendable,
        ElementId::TokensLocked,
        ElementId::CustodyFeeDebt,
        ElementId::TokensSpent,
        ElementId::CustodyFeeCollected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::Height => "height",
            ElementId::BlockId => "blockID",
            ElementId::Difficulty => "difficulty",
            ElementId::Time => "time",
            ElementId::TokensSpendable => "tokensSpendable",
            ElementId::TokensLocked => "tokensLocked",
            ElementId::CustodyFeeDebt => "custodyFeeDebt",
            ElementId::TokensSpent => "tokensSpent",
            ElementId::CustodyFeeCollected => "custodyFeeCollected",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
    Text(String),
    Link { text: String, href: String },
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Text(text) => f.write_str(text),
            Element::Link { text, href } => write!(f, "{} <{}>", text, href),
        }
    }
}

/// Render target for the stats loaders.
pub trait Document {
    fn set(&mut self, id: ElementId, element: Element);
}

/// In-memory page printed to stdout. Fields start out unset.
pub struct Page {
    link_base: String,
    elements: BTreeMap<ElementId, Element>,
}

impl Page {
    pub fn new(link_base: &str) -> Self {
        Self {
            link_base: link_base.to_string(),
            elements: BTreeMap::new(),
        }
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }
}

impl Document for Page {
    fn set(&mut self, id: ElementId, element: Element) {
        let element = match element {
            Element::Link { text, href } => Element::Link {
                text,
                href: format!("{}{}", self.link_base, href),
            },
            text => text,
        };
        self.elements.insert(id, element);
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in ElementId::ALL {
            match self.get(id) {
                Some(element) => writeln!(f, "{:<20} {}", id, element)?,
                None => writeln!(f, "{:<20} -", id)?,
            }
        }
        Ok(())
    }
}
