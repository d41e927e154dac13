//! XML encoding of category outputs.
//!
//! Names are written verbatim, surrounding whitespace included. Reading them
//! back needs a parser that keeps text whitespace: `quick_xml::de` trims it.

use serde::{Deserialize, Serialize};

use shelf_core::{
    application::{ApplicationError, CategoryOutput},
    error::{ShelfError, ShelfResult},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct XmlCategory {
    #[serde(rename = "ID")]
    id: u64,
    #[serde(rename = "Name")]
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlCategories {
    #[serde(rename = "Category", default)]
    items: Vec<XmlCategory>,
}

impl From<&CategoryOutput> for XmlCategory {
    fn from(output: &CategoryOutput) -> Self {
        Self {
            id: output.id,
            name: output.name.clone(),
        }
    }
}

pub(super) fn category(output: &CategoryOutput) -> ShelfResult<Vec<u8>> {
    quick_xml::se::to_string_with_root("Category", &XmlCategory::from(output))
        .map(String::into_bytes)
        .map_err(|e| xml_error(e.to_string()))
}

pub(super) fn categories(outputs: &[CategoryOutput]) -> ShelfResult<Vec<u8>> {
    let wrapper = XmlCategories {
        items: outputs.iter().map(XmlCategory::from).collect(),
    };
    quick_xml::se::to_string_with_root("Categories", &wrapper)
        .map(String::into_bytes)
        .map_err(|e| xml_error(e.to_string()))
}

fn xml_error(reason: String) -> ShelfError {
    ApplicationError::Presentation {
        format: super::WireFormat::Xml.as_str(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(id: u64, name: &str) -> CategoryOutput {
        CategoryOutput {
            id,
            name: name.into(),
        }
    }

    #[test]
    fn category_layout() {
        let xml = String::from_utf8(category(&output(1, "Electronics")).unwrap()).unwrap();
        assert_eq!(xml, "<Category><ID>1</ID><Name>Electronics</Name></Category>");
    }

    #[test]
    fn category_round_trips() {
        let xml = String::from_utf8(category(&output(1, "Electronics")).unwrap()).unwrap();
        let back: XmlCategory = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(back, XmlCategory::from(&output(1, "Electronics")));
    }

    #[test]
    fn markup_in_names_is_escaped() {
        let xml = String::from_utf8(category(&output(3, "Tools & <Parts>")).unwrap()).unwrap();
        assert!(!xml.contains("<Parts>"));

        let back: XmlCategory = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(back.name, "Tools & <Parts>");
    }

    #[test]
    fn whitespace_in_names_is_written_verbatim() {
        let xml = String::from_utf8(category(&output(2, "  Books  ")).unwrap()).unwrap();
        assert_eq!(xml, "<Category><ID>2</ID><Name>  Books  </Name></Category>");

        let blank = String::from_utf8(category(&output(3, " ")).unwrap()).unwrap();
        assert!(blank.contains("<Name> </Name>"));
    }

    #[test]
    fn serde_reader_trims_name_whitespace() {
        let xml = String::from_utf8(category(&output(2, "  Books  ")).unwrap()).unwrap();
        let back: XmlCategory = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(back.name, "Books");
    }

    #[test]
    fn list_wraps_each_category() {
        let outputs = [output(1, "A"), output(2, "B")];
        let xml = String::from_utf8(categories(&outputs).unwrap()).unwrap();
        assert!(xml.starts_with("<Categories>"));

        let back: XmlCategories = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(back.items.len(), 2);
        assert_eq!(back.items[1], XmlCategory::from(&outputs[1]));
    }

    #[test]
    fn empty_list_decodes_empty() {
        let xml = String::from_utf8(categories(&[]).unwrap()).unwrap();
        let back: XmlCategories = quick_xml::de::from_str(&xml).unwrap();
        assert!(back.items.is_empty());
    }
}
