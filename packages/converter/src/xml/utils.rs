//! Helpers for navigating emitted markup with roxmltree.

use roxmltree::Node;

/// Get the tag name without namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use akn4itu_converter::xml::get_tag_name;
///
/// let xml = r#"<akomaNtoso xmlns="http://docs.oasis-open.org/legaldocml/ns/akn/3.0"><statement/></akomaNtoso>"#;
/// let doc = Document::parse(xml).unwrap();
/// let statement = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(statement), "statement");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with the given tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use akn4itu_converter::xml::find_children;
///
/// let xml = r#"<recitals><intro/><recital/><recital/></recitals>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(find_children(doc.root_element(), "recital").count(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}

/// Find a descendant element matching a slash-separated path of tag names.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use akn4itu_converter::xml::find_by_path;
///
/// let xml = r#"<preface><longTitle><p><docType>RESOLUTION</docType></p></longTitle></preface>"#;
/// let doc = Document::parse(xml).unwrap();
/// let doc_type = find_by_path(doc.root_element(), "longTitle/p/docType").unwrap();
/// assert_eq!(doc_type.text(), Some("RESOLUTION"));
/// ```
pub fn find_by_path<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    path.split('/')
        .try_fold(node, |current, part| find_child(current, part))
}

/// Concatenated, trimmed text of a node and its descendants.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Count descendant elements with the given tag name.
pub fn count_descendants(node: Node<'_, '_>, tag: &str) -> usize {
    node.descendants().filter(|n| has_tag(*n, tag)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<akn:statement xmlns:akn="http://docs.oasis-open.org/legaldocml/ns/akn/3.0"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "statement");
    }

    #[test]
    fn test_find_child() {
        let xml = r#"<statement><meta/><preface/></statement>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert!(find_child(root, "preface").is_some());
        assert!(find_child(root, "preamble").is_none());
    }

    #[test]
    fn test_find_by_path_missing() {
        let xml = r#"<statement><preface/></statement>"#;
        let doc = Document::parse(xml).unwrap();
        assert!(find_by_path(doc.root_element(), "preface/longTitle").is_none());
    }

    #[test]
    fn test_get_text_deep() {
        let xml = r#"<intro><p> <i>considering</i> </p></intro>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_text(doc.root_element()), "considering");
    }

    #[test]
    fn test_count_descendants() {
        let xml = r#"<list><point><content><p/></content></point><point/></list>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(count_descendants(doc.root_element(), "point"), 2);
        assert_eq!(count_descendants(doc.root_element(), "list"), 1);
    }
}
