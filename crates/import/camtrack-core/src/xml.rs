//! Small element-lookup helpers over `roxmltree`.

use roxmltree::Node;

use crate::error::ImportError;

/// First element below `node` (excluding `node`) with the given tag, in document order.
/// Direct children match too, unlike ElementTree's `.//*Tag`, which needs two levels.
pub(crate) fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .find(|n| n.is_element() && n.has_tag_name(tag))
}

/// First direct element child with the given tag.
pub(crate) fn find_child<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.has_tag_name(tag))
}

/// Follow a chain of direct children, e.g. `["Value", "float"]`.
pub(crate) fn find_path<'a, 'input>(
    node: Node<'a, 'input>,
    path: &[&str],
) -> Option<Node<'a, 'input>> {
    path.iter().try_fold(node, |n, tag| find_child(n, tag))
}

/// First `<property>/<Animation>` pair below `node`; returns the Animation element.
/// `<property>` may be a direct child of `node`.
pub(crate) fn find_animation<'a, 'input>(
    node: Node<'a, 'input>,
    property: &str,
) -> Option<Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(|n| n.is_element() && n.has_tag_name(property))
        .find_map(|n| find_child(n, "Animation"))
}

pub(crate) fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|n| n.is_element())
}

/// Trimmed text content of an element, or `None` when it has none.
pub(crate) fn text<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.text().map(str::trim).filter(|t| !t.is_empty())
}

pub(crate) fn parse_f64(raw: &str, what: &str) -> Result<f64, ImportError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| ImportError::invalid(what, format!("'{raw}': {e}")))
}

/// Float attribute `attr` of `node`; absent or unparsable attributes are errors.
pub(crate) fn float_attribute(node: Node, attr: &str, what: &str) -> Result<f64, ImportError> {
    let raw = node
        .attribute(attr)
        .ok_or_else(|| ImportError::invalid(what, format!("missing attribute {attr}")))?;
    parse_f64(raw, what)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <Root>
          <Layer>
            <Props>
              <position><Static/></position>
              <position>
                <Animation>
                  <Key Time="0"><Value><float>1.5</float></Value></Key>
                  <!-- comment -->
                  <Key Time="1"><Value><float>2.5</float></Value></Key>
                </Animation>
              </position>
            </Props>
          </Layer>
        </Root>"#;

    #[test]
    fn animation_lookup_skips_static_properties() {
        let doc = roxmltree::Document::parse(DOC).expect("parse");
        let anim = find_animation(doc.root_element(), "position").expect("animation");
        let keys: Vec<_> = element_children(anim).collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1].attribute("Time"), Some("1"));

        let value = find_path(keys[0], &["Value", "float"]).and_then(text);
        assert_eq!(value, Some("1.5"));
    }

    #[test]
    fn descendant_lookup_excludes_self() {
        let doc = roxmltree::Document::parse("<Layer><Layer/></Layer>").expect("parse");
        let root = doc.root_element();
        let inner = find_descendant(root, "Layer").expect("inner layer");
        assert_ne!(inner.id(), root.id());
        assert!(find_descendant(inner, "Layer").is_none());
    }
}
