/// Tests for docx export
#[cfg(test)]
mod tests {
    use crate::docx::*;
    use crate::report::Report;
    use quick_xml::Reader;
    use quick_xml::events::Event;
    use std::io::{Cursor, Read};

    fn sample_report() -> Report {
        let mut report = Report::new();
        report.add_heading(1, "Analysis of file: marzo.xlsx");
        report.push_heading(2, "Data from sheet: Marzo", Some(27), false);
        report.add_paragraph("");
        report.push_heading(4, "Procedure Type: Cirugía", None, true);
        report.add_paragraph("Paciente: Ana & <Luis>");
        report.add_page_break();
        report
    }

    fn read_part(bytes: Vec<u8>, name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        let mut part = archive.by_name(name).expect("part present");
        let mut content = String::new();
        part.read_to_string(&mut content).expect("utf-8 part");
        content
    }

    #[test]
    fn test_package_contains_required_parts() {
        let mut buf = Cursor::new(Vec::new());
        write_docx(&sample_report(), &mut buf).expect("write docx");

        let archive = zip::ZipArchive::new(Cursor::new(buf.into_inner())).expect("valid zip");
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/document.xml",
        ] {
            assert!(names.contains(&part), "missing part {}", part);
        }
    }

    #[test]
    fn test_document_text_is_escaped() {
        let mut buf = Cursor::new(Vec::new());
        write_docx(&sample_report(), &mut buf).expect("write docx");
        let xml = read_part(buf.into_inner(), "word/document.xml");

        assert!(xml.contains("Analysis of file: marzo.xlsx"));
        assert!(xml.contains("Procedure Type: Cirugía"));
        assert!(xml.contains("Paciente: Ana &amp; &lt;Luis&gt;"));
        assert!(!xml.contains("<Luis>"));
    }

    #[test]
    fn test_block_markup() {
        let xml = document_xml(&sample_report());

        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="Heading2"/>"#));
        assert!(xml.contains(r#"<w:sz w:val="27"/>"#));
        assert!(xml.contains(r#"<w:pStyle w:val="Heading4"/></w:pPr><w:r><w:rPr><w:b/></w:rPr>"#));
        assert!(xml.contains("<w:p/>"));
        assert!(xml.contains(r#"<w:br w:type="page"/>"#));
    }

    /// Parse document.xml; returns run text plus `[br]` / `[tab]` markers per paragraph
    fn parse_paragraphs(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_text = false;
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_text = true,
                Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => in_text = false,
                Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => current.push_str("[br]"),
                Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => current.push_str("[tab]"),
                Ok(Event::Text(t)) if in_text => current.push_str(&t.unescape().expect("valid text")),
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("document.xml is not well-formed at {}: {}", reader.buffer_position(), e),
            }
        }
        paragraphs
    }

    #[test]
    fn test_control_characters_keep_document_well_formed() {
        let mut report = Report::new();
        report.add_paragraph("Paciente: Ana\u{0B}Luis\u{01}");
        report.add_paragraph("Notas: primera\nsegunda\r\ntercera\tfin");
        report.push_heading(4, "Procedure Type: Cirugía\u{1F}", None, true);

        let mut buf = Cursor::new(Vec::new());
        write_docx(&report, &mut buf).expect("write docx");
        let xml = read_part(buf.into_inner(), "word/document.xml");

        assert!(!xml.contains(['\u{0B}', '\u{01}', '\u{1F}', '\t', '\r']));
        assert_eq!(
            parse_paragraphs(&xml),
            vec![
                "Paciente: AnaLuis".to_string(),
                "Notas: primera[br]segunda[br]tercera[tab]fin".to_string(),
                "Procedure Type: Cirugía".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_report_is_valid_document() {
        let xml = document_xml(&Report::new());
        assert!(xml.contains("<w:body><w:sectPr>"));
        assert!(xml.ends_with("</w:body></w:document>"));
    }

    #[test]
    fn test_styles_define_heading_levels() {
        let xml = styles_xml();
        for level in 1..=4 {
            assert!(xml.contains(&format!(r#"w:styleId="Heading{}""#, level)));
        }
        assert!(xml.contains(r#"w:styleId="Normal""#));
    }

    #[test]
    fn test_save_docx_writes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.docx");

        save_docx(&sample_report(), &path).expect("save docx");

        let bytes = std::fs::read(&path).expect("read back");
        let xml = read_part(bytes, "word/document.xml");
        assert!(xml.contains("Data from sheet: Marzo"));
    }

    #[test]
    fn test_save_docx_reports_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("out.docx");

        assert!(save_docx(&sample_report(), &path).is_err());
    }
}
