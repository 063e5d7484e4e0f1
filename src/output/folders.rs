//! Docs folder children output formatter

use super::common::print_rows;
use crate::cli::OutputFormat;
use crate::lark::docs::FileChild;

const HEADERS: [&str; 3] = ["TOKEN", "TYPE", "NAME"];

fn row(child: &FileChild) -> Vec<String> {
    vec![child.token.clone(), child.r#type.clone(), child.name.clone()]
}

/// Output folder children in the specified format, folders first
pub fn output_folder_children(children: &[FileChild], format: OutputFormat, no_header: bool) {
    let mut sorted: Vec<&FileChild> = children.iter().collect();
    sorted.sort_by_key(|child| child.r#type != "folder");

    let rows: Vec<Vec<String>> = sorted.iter().map(|child| row(child)).collect();
    print_rows(&HEADERS, &rows, &sorted, format, no_header);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_uses_type_field() {
        let child = FileChild {
            token: "fld_1".to_string(),
            name: "Reports".to_string(),
            r#type: "folder".to_string(),
        };
        assert_eq!(row(&child), vec!["fld_1", "folder", "Reports"]);
    }

    #[test]
    fn test_child_json_uses_type_key() {
        let child = FileChild {
            token: "doc_1".to_string(),
            name: "Plan".to_string(),
            r#type: "docx".to_string(),
        };
        let json = serde_json::to_value(&child).unwrap();
        assert_eq!(json["type"], "docx");
    }
}
