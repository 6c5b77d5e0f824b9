//! Minimal XML element tree built on the `xmlparser` tokenizer.
//!
//! The .xopp format only needs elements, string attributes, and inline
//! text, so the tree is assembled directly from tokens with an explicit
//! stack of open elements.

use crate::error::{Error, Result};

/// An XML element: tag, attributes in encounter order, optional inline
/// text, and child elements.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name without namespace prefix.
    pub tag: String,
    /// Attributes in encounter order.
    pub attributes: Vec<(String, String)>,
    /// Concatenated inline text, if any non-whitespace text was present.
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<Element>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Look up an attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Attach a finished element to its parent, or make it the root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, node: Element) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(Error::Xml("multiple root elements".to_string()));
    }
    *root = Some(node);
    Ok(())
}

/// Parse an XML source string into its root element.
pub fn parse_tree(source: &str) -> Result<Element> {
    let mut stack: Vec<Element> = Vec::new();
    let mut current: Option<Element> = None;
    let mut root: Option<Element> = None;

    for token in xmlparser::Tokenizer::from(source) {
        match token? {
            xmlparser::Token::ElementStart { local, .. } => {
                current = Some(Element::new(local.as_str()));
            }
            xmlparser::Token::Attribute { local, value, .. } => {
                let element = current
                    .as_mut()
                    .ok_or_else(|| Error::Xml("attribute outside an element".to_string()))?;
                element
                    .attributes
                    .push((local.as_str().to_string(), value.as_str().to_string()));
            }
            xmlparser::Token::ElementEnd { end, .. } => match end {
                // The opening tag ends; children follow.
                xmlparser::ElementEnd::Open => {
                    let element = current
                        .take()
                        .ok_or_else(|| Error::Xml("unbalanced element start".to_string()))?;
                    stack.push(element);
                }
                // Self-closing tag.
                xmlparser::ElementEnd::Empty => {
                    let element = current
                        .take()
                        .ok_or_else(|| Error::Xml("unbalanced element start".to_string()))?;
                    attach(&mut stack, &mut root, element)?;
                }
                // Closing tag of the innermost open element.
                xmlparser::ElementEnd::Close(..) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| Error::Xml("extra closing tag".to_string()))?;
                    attach(&mut stack, &mut root, element)?;
                }
            },
            xmlparser::Token::Text { text } => {
                if text.as_str().trim().is_empty() {
                    continue;
                }
                let parent = stack
                    .last_mut()
                    .ok_or_else(|| Error::Xml("text outside the root element".to_string()))?;
                match parent.text {
                    Some(ref mut existing) => existing.push_str(text.as_str()),
                    None => parent.text = Some(text.as_str().to_string()),
                }
            }
            // Declarations, comments, DTDs and processing instructions
            // carry nothing we need.
            _ => {}
        }
    }

    root.ok_or_else(|| Error::Xml("no root element".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_tree() {
        let root = parse_tree(
            r#"<?xml version="1.0"?>
<xournal version="0.4">
  <page width="612" height="792">
    <layer>
      <stroke tool="pen" width="1.41">0 0 30 30</stroke>
    </layer>
  </page>
</xournal>"#,
        )
        .unwrap();

        assert_eq!(root.tag, "xournal");
        assert_eq!(root.attribute("version"), Some("0.4"));
        assert_eq!(root.children.len(), 1);

        let page = &root.children[0];
        assert_eq!(page.tag, "page");
        let stroke = &page.children[0].children[0];
        assert_eq!(stroke.tag, "stroke");
        assert_eq!(stroke.attribute("tool"), Some("pen"));
        assert_eq!(stroke.text.as_deref(), Some("0 0 30 30"));
    }

    #[test]
    fn test_parse_self_closing() {
        let root = parse_tree(r#"<a><b x="1"/><b x="2"/></a>"#).unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[1].attribute("x"), Some("2"));
    }

    #[test]
    fn test_attribute_order_preserved() {
        let root = parse_tree(r#"<a z="1" a="2" m="3"/>"#).unwrap();
        let keys: Vec<&str> = root.attributes.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_whitespace_only_text_ignored() {
        let root = parse_tree("<a>\n  <b></b>\n</a>").unwrap();
        assert!(root.text.is_none());
        assert!(root.children[0].text.is_none());
    }

    #[test]
    fn test_unbalanced_input() {
        assert!(parse_tree("<a><b></a>").is_err());
        assert!(parse_tree("").is_err());
    }
}
