use lopdf::Document;
use std::path::Path;
use tracing::debug;

use super::error::ExtractionError;

/// Extracts the text layer page by page, terminating every page with a
/// newline. Any page that fails to decode fails the whole document.
pub fn extract_text_from_pdf(path: &Path) -> Result<String, ExtractionError> {
    let document = Document::load(path)?;
    let pages = document.get_pages();
    debug!("PDF {} has {} pages", path.display(), pages.len());

    let mut text = String::new();
    for page_number in pages.keys() {
        let page_text = document.extract_text(&[*page_number])?;
        text.push_str(&page_text);
        text.push('\n');
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use tempfile::NamedTempFile;

    fn write_pdf(pages: &[&str]) -> NamedTempFile {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for line in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*line)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let file = NamedTempFile::with_suffix(".pdf").unwrap();
        doc.save(file.path()).unwrap();
        file
    }

    #[test]
    fn extracts_pages_in_order_each_newline_terminated() {
        let file = write_pdf(&["Glucose 130 mg/dL", "Sodium 140 mmol/L"]);

        let text = extract_text_from_pdf(file.path()).unwrap();

        let first = text.find("Glucose 130 mg/dL").expect("first page text");
        let second = text.find("Sodium 140 mmol/L").expect("second page text");
        assert!(first < second, "pages out of order: {text:?}");

        let after_first = first + "Glucose 130 mg/dL".len();
        assert_eq!(text[after_first..].chars().next(), Some('\n'));
        let after_second = second + "Sodium 140 mmol/L".len();
        assert_eq!(text[after_second..].chars().next(), Some('\n'));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(extract_text_from_pdf(&dir.path().join("absent.pdf")).is_err());
    }
}
