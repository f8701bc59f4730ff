//! Importer for externally-authored cheat table files (.ct XML dialect)

use crate::core::types::{
    CheatEntry, EntryAddress, EntryKind, Hotkey, MemoryError, MemoryResult, ValueType,
};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Parses cheat-table XML documents into [`CheatEntry`] lists
///
/// This is a read path only; the external format is never written back.
/// A malformed document root is an error, but a malformed individual entry
/// is skipped so a table with one corrupt entry among hundreds still yields
/// the valid ones.
pub struct CheatTableImporter;

impl CheatTableImporter {
    /// Imports a cheat-table file
    pub fn import_file(path: impl AsRef<Path>) -> MemoryResult<Vec<CheatEntry>> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let entries = Self::import_str(&text)?;
        info!(path = %path.display(), entries = entries.len(), "imported cheat table");
        Ok(entries)
    }

    /// Imports a cheat-table document from its XML text
    pub fn import_str(text: &str) -> MemoryResult<Vec<CheatEntry>> {
        let document = Document::parse(text)
            .map_err(|err| MemoryError::TableParse(err.to_string()))?;
        let root = document.root_element();

        // Some tables wrap everything in a CheatTable element, some are the
        // table itself
        let table = root
            .descendants()
            .find(|node| node.has_tag_name("CheatTable"))
            .unwrap_or(root);

        Ok(Self::parse_entry_collection(table))
    }

    /// Parses the `CheatEntries` collection directly under `parent`
    ///
    /// A missing collection yields an empty list, not an error.
    fn parse_entry_collection(parent: Node<'_, '_>) -> Vec<CheatEntry> {
        let mut entries = Vec::new();

        let collection = match parent
            .children()
            .find(|node| node.has_tag_name("CheatEntries"))
        {
            Some(node) => node,
            None => return entries,
        };

        for node in collection.children().filter(|n| n.has_tag_name("CheatEntry")) {
            match Self::parse_entry(node) {
                Some(entry) => entries.push(entry),
                None => warn!("skipping malformed cheat entry"),
            }
        }

        entries
    }

    /// Parses a single `CheatEntry` node
    ///
    /// A degenerate node with no fields at all carries no information and
    /// is treated as malformed.
    fn parse_entry(node: Node<'_, '_>) -> Option<CheatEntry> {
        if !node.children().any(|n| n.is_element()) {
            return None;
        }

        let description = child_text(node, "Description")
            .unwrap_or_else(|| "Unknown".to_string());

        // Group headers mark their children as hidden and carry no address
        if let Some(options) = find_child(node, "Options") {
            if options.attribute("moHideChildren") == Some("1") {
                let children = Self::parse_entry_collection(node);
                return Some(CheatEntry::group(description, children));
            }
        }

        // The address is kept as the authoring tool wrote it; resolution is
        // deferred and may legitimately fail for module-relative forms
        let address = child_text(node, "Address").map(EntryAddress::Expression);

        let value_type = child_text(node, "VariableType")
            .map(|name| map_variable_type(&name))
            .unwrap_or(ValueType::Int);

        let offsets = Self::parse_offsets(node);
        let hotkeys = Self::parse_hotkeys(node);

        Some(CheatEntry {
            name: description.clone(),
            description,
            kind: EntryKind::Entry,
            address,
            value_type: Some(value_type),
            offsets,
            frozen: false,
            frozen_value: None,
            enabled: false,
            hotkeys,
            children: Vec::new(),
        })
    }

    /// Parses pointer-chain offsets; unparsable tokens are dropped
    fn parse_offsets(node: Node<'_, '_>) -> Vec<i64> {
        let mut offsets = Vec::new();

        if let Some(collection) = find_child(node, "Offsets") {
            for offset_node in collection.children().filter(|n| n.has_tag_name("Offset")) {
                let Some(text) = offset_node.text() else { continue };
                match i64::from_str_radix(text.trim(), 16) {
                    Ok(offset) => offsets.push(offset),
                    Err(_) => debug!(token = text.trim(), "dropping unparsable offset token"),
                }
            }
        }

        offsets
    }

    /// Parses hotkey metadata; hotkeys missing Action or Keys are skipped
    fn parse_hotkeys(node: Node<'_, '_>) -> Vec<Hotkey> {
        let mut hotkeys = Vec::new();

        if let Some(collection) = find_child(node, "Hotkeys") {
            for hotkey_node in collection.children().filter(|n| n.has_tag_name("Hotkey")) {
                let action = child_text(hotkey_node, "Action");
                let keys = child_text(hotkey_node, "Keys");
                match (action, keys) {
                    (Some(action), Some(keys)) => hotkeys.push(Hotkey { action, keys }),
                    _ => warn!("skipping hotkey without Action and Keys"),
                }
            }
        }

        hotkeys
    }
}

/// Finds a direct child element by tag name
fn find_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// The trimmed text of a direct child element
fn child_text(node: Node<'_, '_>, name: &str) -> Option<String> {
    find_child(node, name)
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
}

/// Maps the authoring tool's variable-type names onto this engine's tags
///
/// Unrecognized names fall back to `int`.
fn map_variable_type(name: &str) -> ValueType {
    match name {
        "Byte" => ValueType::Byte,
        "2 Bytes" => ValueType::Short,
        "4 Bytes" => ValueType::Int,
        "8 Bytes" => ValueType::Long,
        "Float" => ValueType::Float,
        "Double" => ValueType::Double,
        "String" => ValueType::String,
        "Array of byte" => ValueType::Bytes,
        _ => ValueType::Int,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(entries_xml: &str) -> String {
        format!(
            "<CheatTable CheatEngineTableVersion=\"26\">\
               <CheatEntries>{entries_xml}</CheatEntries>\
             </CheatTable>"
        )
    }

    #[test]
    fn test_well_formed_entry() {
        let xml = wrap(
            "<CheatEntry>\
               <ID>0</ID>\
               <Description>\"Health\"</Description>\
               <VariableType>4 Bytes</VariableType>\
               <Address>00A8F5C0</Address>\
             </CheatEntry>",
        );

        let entries = CheatTableImporter::import_str(&xml).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.description, "\"Health\"");
        assert_eq!(entry.value_type, Some(ValueType::Int));
        assert_eq!(
            entry.address,
            Some(EntryAddress::Expression("00A8F5C0".to_string()))
        );
        assert!(!entry.enabled);
        assert!(!entry.frozen);
    }

    #[test]
    fn test_missing_description_defaults_to_unknown() {
        let xml = wrap(
            "<CheatEntry>\
               <Description>\"Gold\"</Description>\
               <VariableType>4 Bytes</VariableType>\
               <Address>0040C000</Address>\
             </CheatEntry>\
             <CheatEntry>\
               <VariableType>Float</VariableType>\
               <Address>0040C004</Address>\
             </CheatEntry>",
        );

        let entries = CheatTableImporter::import_str(&xml).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].description, "Unknown");
        assert_eq!(entries[1].value_type, Some(ValueType::Float));
    }

    #[test]
    fn test_type_mapping_and_unknown_default() {
        let cases = [
            ("Byte", ValueType::Byte),
            ("2 Bytes", ValueType::Short),
            ("4 Bytes", ValueType::Int),
            ("8 Bytes", ValueType::Long),
            ("Float", ValueType::Float),
            ("Double", ValueType::Double),
            ("String", ValueType::String),
            ("Array of byte", ValueType::Bytes),
            ("Binary", ValueType::Int),
        ];

        for (name, expected) in cases {
            assert_eq!(map_variable_type(name), expected, "mapping {name}");
        }
    }

    #[test]
    fn test_bad_offset_token_is_dropped_not_fatal() {
        let xml = wrap(
            "<CheatEntry>\
               <Description>\"Ammo\"</Description>\
               <VariableType>4 Bytes</VariableType>\
               <Address>game.exe+00BEEF00</Address>\
               <Offsets>\
                 <Offset>1C</Offset>\
                 <Offset>zzz</Offset>\
               </Offsets>\
             </CheatEntry>",
        );

        let entries = CheatTableImporter::import_str(&xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].offsets, vec![0x1C]);
    }

    #[test]
    fn test_hotkeys_require_action_and_keys() {
        let xml = wrap(
            "<CheatEntry>\
               <Description>\"Speed\"</Description>\
               <VariableType>Float</VariableType>\
               <Address>00D00000</Address>\
               <Hotkeys>\
                 <Hotkey>\
                   <Action>Set value</Action>\
                   <Keys>112</Keys>\
                 </Hotkey>\
                 <Hotkey>\
                   <Action>Toggle</Action>\
                 </Hotkey>\
               </Hotkeys>\
             </CheatEntry>",
        );

        let entries = CheatTableImporter::import_str(&xml).unwrap();
        assert_eq!(entries[0].hotkeys.len(), 1);
        assert_eq!(entries[0].hotkeys[0].action, "Set value");
        assert_eq!(entries[0].hotkeys[0].keys, "112");
    }

    #[test]
    fn test_group_with_nested_children() {
        let xml = wrap(
            "<CheatEntry>\
               <Description>\"Player\"</Description>\
               <Options moHideChildren=\"1\"/>\
               <CheatEntries>\
                 <CheatEntry>\
                   <Description>\"HP\"</Description>\
                   <VariableType>4 Bytes</VariableType>\
                   <Address>00AA0000</Address>\
                 </CheatEntry>\
                 <CheatEntry>\
                   <Description>\"MP\"</Description>\
                   <VariableType>2 Bytes</VariableType>\
                   <Address>00AA0004</Address>\
                 </CheatEntry>\
               </CheatEntries>\
             </CheatEntry>",
        );

        let entries = CheatTableImporter::import_str(&xml).unwrap();
        assert_eq!(entries.len(), 1);

        let group = &entries[0];
        assert!(group.is_group());
        assert!(group.address.is_none());
        assert!(group.value_type.is_none());
        assert_eq!(group.children.len(), 2);
        assert_eq!(group.children[0].description, "\"HP\"");
        assert_eq!(group.children[1].value_type, Some(ValueType::Short));
    }

    #[test]
    fn test_empty_entry_is_skipped_not_fatal() {
        let xml = wrap(
            "<CheatEntry/>\
             <CheatEntry>\
               <Description>\"Keys\"</Description>\
               <VariableType>Byte</VariableType>\
               <Address>00AB0000</Address>\
             </CheatEntry>",
        );

        let entries = CheatTableImporter::import_str(&xml).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "\"Keys\"");
    }

    #[test]
    fn test_malformed_root_is_parse_error() {
        let result = CheatTableImporter::import_str("<CheatTable><CheatEntries>");
        assert!(matches!(result, Err(MemoryError::TableParse(_))));
    }

    #[test]
    fn test_document_without_entries_is_empty() {
        let entries =
            CheatTableImporter::import_str("<CheatTable><CheatCodes/></CheatTable>").unwrap();
        assert!(entries.is_empty());
    }
}
