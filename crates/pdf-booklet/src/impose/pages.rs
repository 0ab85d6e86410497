//! Page tree access
//!
//! The pipeline treats a document as a flat, ordered list of page objects.
//! Flattening pushes inheritable attributes down onto every page, hangs every
//! page directly off the root `Pages` node and drops the intermediate nodes,
//! so pages can then be appended or reordered by rewriting one `Kids` array.

use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashSet;

/// Page attributes a `Pages` node can pass down to its descendants
const INHERITABLE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// The flattened page list of a document
#[derive(Debug, Clone)]
pub(crate) struct PageList {
    /// Root `Pages` node
    pub root: ObjectId,
    /// Page objects in reading order
    pub pages: Vec<ObjectId>,
}

impl PageList {
    /// Flatten the document's page tree.
    pub(crate) fn flatten(doc: &mut Document) -> Result<Self> {
        let root = pages_root_id(doc)?;

        let mut leaves = Vec::new();
        let mut intermediate = Vec::new();
        let mut visited = HashSet::new();
        collect_pages(
            doc,
            root,
            &Dictionary::new(),
            &mut leaves,
            &mut intermediate,
            &mut visited,
        )?;

        let mut pages = Vec::with_capacity(leaves.len());
        for (page_id, inherited) in leaves {
            let page = doc.get_dictionary_mut(page_id)?;
            for (key, value) in inherited.iter() {
                if !page.has(key) {
                    page.set(key.clone(), value.clone());
                }
            }
            page.set("Parent", Object::Reference(root));
            pages.push(page_id);
        }

        for id in intermediate.into_iter().filter(|&id| id != root) {
            doc.objects.remove(&id);
        }

        let list = Self { root, pages };
        list.write(doc)?;
        Ok(list)
    }

    pub(crate) fn len(&self) -> usize {
        self.pages.len()
    }

    /// Replace the page order and write it back to the root node
    pub(crate) fn set_pages(&mut self, doc: &mut Document, pages: Vec<ObjectId>) -> Result<()> {
        self.pages = pages;
        self.write(doc)
    }

    fn write(&self, doc: &mut Document) -> Result<()> {
        let kids = self
            .pages
            .iter()
            .map(|&id| Object::Reference(id))
            .collect::<Vec<_>>();
        let root = doc.get_dictionary_mut(self.root)?;
        root.set("Kids", Object::Array(kids));
        root.set("Count", Object::Integer(self.pages.len() as i64));
        for key in INHERITABLE_KEYS {
            root.remove(key);
        }
        Ok(())
    }
}

/// Object ID of the root `Pages` node
pub(crate) fn pages_root_id(doc: &Document) -> Result<ObjectId> {
    let catalog_id = doc.trailer.get(b"Root")?.as_reference()?;
    let catalog = doc.get_dictionary(catalog_id)?;
    Ok(catalog.get(b"Pages")?.as_reference()?)
}

fn is_pages_node(dict: &Dictionary) -> bool {
    match dict.get(b"Type").and_then(Object::as_name) {
        Ok(name) => name == b"Pages",
        Err(_) => dict.has(b"Kids"),
    }
}

fn collect_pages(
    doc: &Document,
    node_id: ObjectId,
    inherited: &Dictionary,
    leaves: &mut Vec<(ObjectId, Dictionary)>,
    intermediate: &mut Vec<ObjectId>,
    visited: &mut HashSet<ObjectId>,
) -> Result<()> {
    if !visited.insert(node_id) {
        log::warn!("Page tree cycle at object {:?}, skipping", node_id);
        return Ok(());
    }

    let node = doc.get_dictionary(node_id)?;
    if !is_pages_node(node) {
        leaves.push((node_id, inherited.clone()));
        return Ok(());
    }

    let mut passed_down = inherited.clone();
    for key in INHERITABLE_KEYS {
        if let Ok(value) = node.get(key) {
            passed_down.set(key.to_vec(), value.clone());
        }
    }

    let kids = match node.get(b"Kids") {
        Ok(Object::Array(kids)) => kids.clone(),
        Ok(Object::Reference(id)) => doc.get_object(*id)?.as_array()?.clone(),
        _ => Vec::new(),
    };

    for kid in kids {
        let kid_id = kid.as_reference()?;
        collect_pages(doc, kid_id, &passed_down, leaves, intermediate, visited)?;
    }

    intermediate.push(node_id);
    Ok(())
}
