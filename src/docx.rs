//! Word (.docx) export.
//!
//! Writes a `Report` as a minimal WordprocessingML package: content types,
//! package relationships, the main document part and a styles part defining
//! `Heading1`..`Heading4`.

use crate::report::{Block, Report};
use log::{debug, warn};
use quick_xml::escape::escape;
use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// (size in half-points, color) per heading level
const HEADING_STYLES: [(u32, &str); 4] = [(32, "2F5496"), (26, "2F5496"), (24, "1F3763"), (22, "2F5496")];

/// Save a report as a `.docx` file at `path`.
pub fn save_docx(report: &Report, path: &Path) -> io::Result<()> {
    debug!("Writing {} blocks to {:?}", report.len(), path);
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_docx(report, &mut writer)?;
    writer.flush()
}

/// Write a report as a `.docx` package to any seekable writer.
pub fn write_docx<W: Write + Seek>(report: &Report, writer: W) -> io::Result<()> {
    let mut zip = zip::ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.to_string()),
        ("word/styles.xml", styles_xml()),
        ("word/document.xml", document_xml(report)),
    ];

    for (name, content) in parts.iter() {
        zip.start_file(*name, options).map_err(io::Error::other)?;
        zip.write_all(content.as_bytes())?;
    }

    zip.finish().map_err(io::Error::other)?;
    Ok(())
}

/// Render the main document part
pub fn document_xml(report: &Report) -> String {
    let mut xml = String::with_capacity(256 + report.len() * 128);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:document xmlns:w="{}"><w:body>"#, WORD_NS));

    for block in report.blocks() {
        match block {
            Block::Heading { level, text, font_size_half_points, bold } => {
                xml.push_str(&format!(r#"<w:p><w:pPr><w:pStyle w:val="Heading{}"/></w:pPr>"#, level));
                push_run(&mut xml, text, *font_size_half_points, *bold);
                xml.push_str("</w:p>");
            }
            Block::Paragraph(text) if text.is_empty() => xml.push_str("<w:p/>"),
            Block::Paragraph(text) => {
                xml.push_str("<w:p>");
                push_run(&mut xml, text, None, false);
                xml.push_str("</w:p>");
            }
            Block::PageBreak => xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#),
        }
    }

    xml.push_str(
        r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#,
    );
    xml.push_str("</w:body></w:document>");
    xml
}

fn push_run(xml: &mut String, text: &str, font_size_half_points: Option<u32>, bold: bool) {
    xml.push_str("<w:r>");
    if bold || font_size_half_points.is_some() {
        xml.push_str("<w:rPr>");
        if bold {
            xml.push_str("<w:b/>");
        }
        if let Some(size) = font_size_half_points {
            xml.push_str(&format!(r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#, size));
        }
        xml.push_str("</w:rPr>");
    }
    push_text(xml, text);
    xml.push_str("</w:r>");
}

/// Write run content. Line breaks and tabs become `w:br` / `w:tab`;
/// characters XML 1.0 cannot carry are dropped.
fn push_text(xml: &mut String, text: &str) {
    let mut pending = String::new();
    let mut dropped = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\t' => {
                flush_text(xml, &mut pending);
                xml.push_str("<w:tab/>");
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                flush_text(xml, &mut pending);
                xml.push_str("<w:br/>");
            }
            c if is_xml_char(c) => pending.push(c),
            _ => dropped += 1,
        }
    }
    flush_text(xml, &mut pending);

    if dropped > 0 {
        warn!("Dropped {} control character(s) from {:?}", dropped, text);
    }
}

fn flush_text(xml: &mut String, pending: &mut String) {
    if pending.is_empty() {
        return;
    }
    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&escape(pending.as_str()));
    xml.push_str("</w:t>");
    pending.clear();
}

/// XML 1.0 `Char` production (surrogates are not representable in `char`)
fn is_xml_char(c: char) -> bool {
    matches!(c, '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Render the styles part (Normal plus one style per heading level)
pub fn styles_xml() -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, WORD_NS));
    xml.push_str(
        r#"<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="160" w:line="259" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults>"#,
    );
    xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#);

    for (idx, (size, color)) in HEADING_STYLES.iter().enumerate() {
        let level = idx + 1;
        xml.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="Heading{level}"><w:name w:val="heading {level}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:uiPriority w:val="9"/><w:qFormat/><w:pPr><w:keepNext/><w:keepLines/><w:spacing w:before="240" w:after="80"/><w:outlineLvl w:val="{outline}"/></w:pPr><w:rPr><w:b/><w:color w:val="{color}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr></w:style>"#,
            level = level,
            outline = idx,
            color = color,
            size = size,
        ));
    }

    xml.push_str("</w:styles>");
    xml
}

#[cfg(test)]
#[path = "docx_test.rs"]
mod docx_test;
