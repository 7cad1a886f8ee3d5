//! End-to-end tests for the document pipeline.
//!
//! Documents are either supplied as in-memory text layers or built as real
//! PDFs with `lopdf` and read back through `LopdfTextLayer`.

use lopdf::content::{Content, Operation};
use lopdf::encryption::{decrypt_object, get_encryption_key};
use lopdf::{dictionary, Document, Object, Stream};
use routine_extract::{
    Error, FieldKey, LopdfTextLayer, MemoryTextLayer, Result, RoutinePipeline, TextFragment,
    TextLayer,
};
use std::io::Write;

// ============================================================================
// Fixtures
// ============================================================================

type Cell = (&'static str, i64, i64);

fn header_row(y: i64) -> Vec<Cell> {
    vec![
        ("Day", 40, y),
        ("Time", 110, y),
        ("Room", 220, y),
        ("Lecturer", 300, y),
        ("Module", 420, y),
    ]
}

fn page_one() -> Vec<Cell> {
    let mut cells = vec![("Class Routine", 250, 800)];
    cells.extend(header_row(760));
    cells.extend(vec![
        ("Monday", 40, 740),
        ("09:00 - 10:30", 110, 740),
        ("A-204", 220, 740),
        ("Dr. Thapa", 300, 740),
        ("Databases", 420, 740),
    ]);
    cells
}

fn page_two() -> Vec<Cell> {
    vec![
        ("Notes", 40, 760),
        ("Tuesday 10:00 seminar moved", 40, 740),
        ("Library closes at 18:00", 40, 720),
    ]
}

fn to_fragments(cells: &[Cell]) -> Vec<TextFragment> {
    cells
        .iter()
        .map(|(text, x, y)| TextFragment::new(*text, *x as f32, *y as f32))
        .collect()
}

/// Build a document with one page per cell list, each cell drawn with `Tm`/`Tj`.
fn build_document(pages: &[Vec<Cell>]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for cells in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(9)]),
        ];
        for (text, x, y) in cells {
            operations.push(Operation::new(
                "Tm",
                vec![
                    Object::Integer(1),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(1),
                    Object::Integer(*x),
                    Object::Integer(*y),
                ],
            ));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*text)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(595),
                Object::Integer(842),
            ],
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(doc: &mut Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn build_pdf(pages: &[Vec<Cell>]) -> Vec<u8> {
    save(&mut build_document(pages))
}

/// Encrypt every stream with 40-bit RC4 under the empty user password
/// (standard security handler, revision 2). `user_check` is stored as `/U`.
fn encrypt_streams(doc: &mut Document, user_check: Option<Vec<u8>>) {
    let mut encrypt = dictionary! {
        "Filter" => "Standard",
        "V" => Object::Integer(1),
        "R" => Object::Integer(2),
        "Length" => Object::Integer(40),
        "O" => Object::string_literal(vec![0x5A_u8; 32]),
        "P" => Object::Integer(-4),
    };
    if let Some(check) = user_check {
        encrypt.set("U", Object::string_literal(check));
    }
    let encrypt_id = doc.add_object(encrypt);
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    doc.trailer.set(
        "ID",
        vec![
            Object::string_literal(b"routine-fixture".to_vec()),
            Object::string_literal(b"routine-fixture".to_vec()),
        ],
    );

    // RC4 is symmetric, so the object decryption also encrypts.
    let key = get_encryption_key(doc, "", false).unwrap();
    for (&id, obj) in doc.objects.iter_mut() {
        if let Ok(content) = decrypt_object(&key, id, &*obj) {
            if let Object::Stream(stream) = obj {
                stream.set_content(content);
            }
        }
    }
}

/// A text layer whose second page cannot be read.
struct BrokenLayer;

impl TextLayer for BrokenLayer {
    fn page_count(&self) -> usize {
        2
    }

    fn page_fragments(&self, index: usize) -> Result<Vec<TextFragment>> {
        if index == 0 {
            Ok(to_fragments(&page_one()))
        } else {
            Err(Error::PageContent {
                page: index + 1,
                reason: "unreadable text layer".to_string(),
            })
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_headerless_page_contributes_nothing() {
    let layer = MemoryTextLayer::new(vec![to_fragments(&page_one()), to_fragments(&page_two())]);
    let entries = RoutinePipeline::new().extract(&layer).unwrap();

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.day(), "MON");
    assert_eq!(entry.time(), "09:00 - 10:30");
    assert_eq!(entry.value(FieldKey::Room), "A-204");
    assert_eq!(entry.value(FieldKey::Lecturer), "Dr. Thapa");
    assert_eq!(entry.value(FieldKey::Module), "Databases");
}

#[test]
fn test_lopdf_layer_reads_positions() {
    let bytes = build_pdf(&[page_one()]);
    let layer = LopdfTextLayer::from_bytes(&bytes).unwrap();
    assert_eq!(layer.page_count(), 1);

    let fragments = layer.page_fragments(0).unwrap();
    assert_eq!(fragments.len(), page_one().len());
    assert_eq!(fragments[1], TextFragment::new("Day", 40.0, 760.0));
}

#[test]
fn test_pdf_bytes_end_to_end() {
    let bytes = build_pdf(&[page_one(), page_two()]);
    let entries = RoutinePipeline::new().extract_from_bytes(&bytes).unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].day(), "MON");
    assert_eq!(entries[0].value(FieldKey::Module), "Databases");
}

#[test]
fn test_pdf_file_end_to_end() {
    let bytes = build_pdf(&[page_one()]);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file.flush().unwrap();

    let entries = RoutinePipeline::new().extract_from_path(file.path()).unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_entries_serialize_for_storage() {
    let layer = MemoryTextLayer::new(vec![to_fragments(&page_one())]);
    let entries = RoutinePipeline::new().extract(&layer).unwrap();

    let json = serde_json::to_value(&entries).unwrap();
    assert_eq!(json[0]["day"], "MON");
    assert_eq!(json[0]["time"], "09:00 - 10:30");
    assert!(json[0].get("block").is_none());
}

#[test]
fn test_unreadable_page_fails_whole_document() {
    let result = RoutinePipeline::new().extract(&BrokenLayer);
    match result {
        Err(Error::PageContent { page, .. }) => assert_eq!(page, 2),
        other => panic!("expected page error, got {:?}", other),
    }
}

#[test]
fn test_permission_only_encryption_is_opened() {
    let mut doc = build_document(&[page_one()]);
    encrypt_streams(&mut doc, None);
    let bytes = save(&mut doc);

    let entries = RoutinePipeline::new().extract_from_bytes(&bytes).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].day(), "MON");
    assert_eq!(entries[0].value(FieldKey::Module), "Databases");
}

#[test]
fn test_password_protected_document_fails_to_load() {
    let mut doc = build_document(&[page_one()]);
    encrypt_streams(&mut doc, Some(vec![0_u8; 32]));
    let bytes = save(&mut doc);

    let result = RoutinePipeline::new().extract_from_bytes(&bytes);
    assert!(matches!(result, Err(Error::PdfLoad(_))));
}

#[test]
fn test_not_a_pdf() {
    let result = RoutinePipeline::new().extract_from_bytes(b"Day,Time,Room\nMON,09:00,A1\n");
    assert!(matches!(result, Err(Error::PdfLoad(_))));
}

#[test]
fn test_empty_document() {
    let layer = MemoryTextLayer::default();
    assert!(RoutinePipeline::new().extract(&layer).unwrap().is_empty());
}
