//! Integration tests for .xopp parsing.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use unxopp::{parse_bytes, parse_file, Error, Item};

/// Gzip an XML string the way Xournal++ writes .xopp files.
fn xopp(xml: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(xml.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

const SINGLE_PAGE: &str = r##"<?xml version="1.0" standalone="no"?>
<xournal creator="Xournal++ 1.1.1" fileversion="4">
  <title>Xournal++ document</title>
  <page width="612" height="792">
    <background type="solid" color="#ffffffff" style="lined"/>
    <layer>
      <stroke tool="pen" color="#3333ccff" width="1.41">30 30 60 60 90 30</stroke>
      <text font="Sans" size="12" x="30" y="120" color="#000000ff">hello</text>
    </layer>
    <layer>
      <teximage left="30" top="10" bottom="50" text="x^2" right="200"/>
    </layer>
  </page>
</xournal>"##;

#[test]
fn test_parse_single_page_document() {
    let doc = parse_bytes(&xopp(SINGLE_PAGE)).unwrap();

    assert_eq!(doc.page_count(), 1);
    let page = doc.first_page().unwrap();
    assert_eq!(page.layers.len(), 2);
    assert_eq!(page.item_count(), 3);

    let items: Vec<&Item> = page.items().collect();
    match items[0] {
        Item::Stroke(stroke) => {
            assert_eq!(stroke.tool, "pen");
            assert_eq!(stroke.width, 1.41);
            assert_eq!(stroke.color.as_deref(), Some("#3333ccff"));
            assert_eq!(stroke.points.as_ref().unwrap().len(), 3);
        }
        other => panic!("expected stroke, got {:?}", other),
    }
    match items[2] {
        Item::TexImage(tex) => {
            assert_eq!(tex.bottom - tex.top, 40.0);
            assert_eq!(tex.text, "x^2");
        }
        other => panic!("expected teximage, got {:?}", other),
    }
}

#[test]
fn test_stroke_odd_coordinate_token_dropped() {
    let doc = parse_bytes(&xopp(
        r##"<xournal><page><layer>
<stroke tool="pen" width="1">0 0 30 30 99</stroke>
</layer></page></xournal>"##,
    ))
    .unwrap();

    let page = doc.first_page().unwrap();
    let item = page.items().next().unwrap();
    match item {
        Item::Stroke(stroke) => {
            // 5 tokens give floor(5/2) = 2 points
            assert_eq!(stroke.points.as_ref().unwrap().len(), 2);
        }
        other => panic!("expected stroke, got {:?}", other),
    }
}

#[test]
fn test_stroke_without_text_has_no_points() {
    let doc = parse_bytes(&xopp(
        r##"<xournal><page><layer>
<stroke tool="pen" width="1"></stroke>
</layer></page></xournal>"##,
    ))
    .unwrap();

    let page = doc.first_page().unwrap();
    let item = page.items().next().unwrap();
    match item {
        Item::Stroke(stroke) => assert!(stroke.points.is_none()),
        other => panic!("expected stroke, got {:?}", other),
    }
}

#[test]
fn test_missing_required_attribute_is_recoverable() {
    let doc = parse_bytes(&xopp(
        r##"<xournal><page><layer>
<stroke tool="pen">0 0 30 30</stroke>
<text font="Sans" size="12" x="0" y="0">still here</text>
</layer></page></xournal>"##,
    ))
    .unwrap();

    let page = doc.first_page().unwrap();
    let items: Vec<&Item> = page.items().collect();
    assert!(matches!(items[0], Item::Malformed { .. }));
    assert!(matches!(items[1], Item::Text(_)));
}

#[test]
fn test_unknown_item_tag_is_kept() {
    let doc = parse_bytes(&xopp(
        r##"<xournal><page><layer>
<audio filename="rec.mp3"/>
<image left="0" top="0" right="10" bottom="10">aGVsbG8=</image>
</layer></page></xournal>"##,
    ))
    .unwrap();

    let page = doc.first_page().unwrap();
    let items: Vec<&Item> = page.items().collect();
    match items[0] {
        Item::Unsupported { tag, attributes } => {
            assert_eq!(tag, "audio");
            assert_eq!(attributes[0], ("filename".to_string(), "rec.mp3".to_string()));
        }
        other => panic!("expected unsupported item, got {:?}", other),
    }
    assert!(matches!(items[1], Item::Image { .. }));
}

#[test]
fn test_zero_pages_document() {
    let doc = parse_bytes(&xopp("<xournal><title>empty</title></xournal>")).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_not_gzip_input() {
    let result = parse_bytes(SINGLE_PAGE.as_bytes());
    assert!(matches!(result, Err(Error::UnknownFormat)));
}

#[test]
fn test_truncated_gzip_input() {
    let mut data = xopp(SINGLE_PAGE);
    data.truncate(data.len() / 2);
    assert!(parse_bytes(&data).is_err());
}

#[test]
fn test_parse_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.xopp");
    std::fs::write(&path, xopp(SINGLE_PAGE)).unwrap();

    let doc = parse_file(&path).unwrap();
    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.item_count(), 3);
}
