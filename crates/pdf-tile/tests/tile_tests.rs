use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use pdf_tile::*;
use std::path::PathBuf;

fn create_test_pdf(page_sizes: &[(i64, i64)]) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for &(width, height) in page_sizes {
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            b"q 0 0 1 rg 0 0 100 100 re f Q".to_vec(),
        ));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(width),
                    Object::Integer(height),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(page_sizes.len() as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

fn replace_content(doc: &mut Document, stream: Stream) {
    let page_id = *doc.get_pages().values().next().unwrap();
    let content_id = doc
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Contents")
        .unwrap()
        .as_reference()
        .unwrap();
    doc.objects.insert(content_id, Object::Stream(stream));
}

fn source_xobject_content(doc: &Document) -> Vec<u8> {
    let page_id = *doc.get_pages().values().next().unwrap();
    let xobject_id = doc
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Resources")
        .unwrap()
        .as_dict()
        .unwrap()
        .get(b"XObject")
        .unwrap()
        .as_dict()
        .unwrap()
        .get(b"Src")
        .unwrap()
        .as_reference()
        .unwrap();
    let xobject = doc.get_object(xobject_id).unwrap().as_stream().unwrap();
    assert!(!xobject.dict.has(b"Filter"));
    xobject.content.clone()
}

fn options(format: &str, border: f32) -> TileOptions {
    TileOptions {
        input: PathBuf::from("input.pdf"),
        output: PathBuf::from("output.pdf"),
        format: format.to_string(),
        border,
    }
}

fn media_box(doc: &Document, page_id: ObjectId) -> Vec<f32> {
    doc.get_dictionary(page_id)
        .unwrap()
        .get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|obj| match obj {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            other => panic!("Unexpected MediaBox entry {:?}", other),
        })
        .collect()
}

fn page_content(doc: &Document, page_id: ObjectId) -> String {
    let content_id = doc
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Contents")
        .unwrap()
        .as_reference()
        .unwrap();
    let stream = doc.get_object(content_id).unwrap().as_stream().unwrap();
    String::from_utf8(stream.content.clone()).unwrap()
}

#[tokio::test]
async fn test_load_pdf() {
    use tempfile::NamedTempFile;

    let mut doc = create_test_pdf(&[(595, 842), (842, 595)]);
    let temp = NamedTempFile::new().unwrap();

    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    std::fs::write(temp.path(), writer).unwrap();

    let loaded = load_pdf(temp.path()).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 2);
}

#[tokio::test]
async fn test_save_pdf() {
    use tempfile::NamedTempFile;

    let doc = create_test_pdf(&[(595, 842)]);
    let temp = NamedTempFile::new().unwrap();

    save_pdf(doc, temp.path()).await.unwrap();

    let loaded = Document::load(temp.path()).unwrap();
    assert_eq!(loaded.get_pages().len(), 1);
}

#[test]
fn test_source_pages() {
    let doc = create_test_pdf(&[(595, 842), (2384, 3371)]);
    let pages = source_pages(&doc).unwrap();
    assert_eq!(
        pages,
        vec![SourcePage::new(595.0, 842.0), SourcePage::new(2384.0, 3371.0)]
    );
}

#[test]
fn test_source_pages_inherited_media_box() {
    let mut doc = create_test_pdf(&[(595, 842)]);

    // Move the MediaBox from the page to the Pages node
    let page_id = *doc.get_pages().values().next().unwrap();
    let pages_id = doc
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Parent")
        .unwrap()
        .as_reference()
        .unwrap();
    doc.get_dictionary_mut(page_id).unwrap().remove(b"MediaBox");
    doc.get_dictionary_mut(pages_id).unwrap().set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(1000),
            Object::Integer(500),
        ]),
    );

    assert_eq!(source_pages(&doc).unwrap(), vec![SourcePage::new(1000.0, 500.0)]);
}

#[test]
fn test_source_pages_default_media_box() {
    let mut doc = create_test_pdf(&[(595, 842)]);
    let page_id = *doc.get_pages().values().next().unwrap();
    doc.get_dictionary_mut(page_id).unwrap().remove(b"MediaBox");

    assert_eq!(source_pages(&doc).unwrap(), vec![SourcePage::new(612.0, 792.0)]);
}

#[tokio::test]
async fn test_tile_no_pages() {
    let doc = create_test_pdf(&[]);

    let result = tile(&doc, &options("A4", 25.0)).await;
    match result {
        Err(TileError::NoPages) => {}
        _ => panic!("Expected NoPages error"),
    }
}

#[tokio::test]
async fn test_tile_border_too_small() {
    let doc = create_test_pdf(&[(595, 842)]);

    let result = tile(&doc, &options("A4", 10.0)).await;
    match result {
        Err(TileError::Config(msg)) => assert!(msg.contains("minimum border")),
        _ => panic!("Expected Config error"),
    }
}

#[tokio::test]
async fn test_tile_unknown_format() {
    let doc = create_test_pdf(&[(595, 842)]);

    let result = tile(&doc, &options("A7", 25.0)).await;
    match result {
        Err(TileError::UnknownFormat(name)) => assert_eq!(name, "A7"),
        _ => panic!("Expected UnknownFormat error"),
    }
}

#[tokio::test]
async fn test_tile_degenerate_geometry() {
    let doc = create_test_pdf(&[(595, 842)]);

    // A5 is 420pt wide, a 250pt border leaves nothing to print
    let result = tile(&doc, &options("A5", 250.0)).await;
    assert!(matches!(result, Err(TileError::DegenerateGeometry { .. })));
}

#[tokio::test]
async fn test_tile_a4_on_a4() {
    let doc = create_test_pdf(&[(595, 842)]);

    let output = tile(&doc, &options("A4", 25.0)).await.unwrap();
    let pages: Vec<ObjectId> = output.get_pages().values().copied().collect();

    // Landscape sheets, one column of two rows
    assert_eq!(pages.len(), 2);
    assert_eq!(media_box(&output, pages[0]), vec![-50.0, -50.0, 792.0, 545.0]);
    assert_eq!(media_box(&output, pages[1]), vec![-50.0, 495.0, 792.0, 1090.0]);
}

#[tokio::test]
async fn test_tile_a0_on_a4() {
    let doc = create_test_pdf(&[(2384, 3371)]);

    let output = tile(&doc, &options("A4", 25.0)).await.unwrap();
    let pages: Vec<ObjectId> = output.get_pages().values().copied().collect();
    assert_eq!(pages.len(), 18);

    // Column outer, row inner: page 6 is column 1, row 0
    assert_eq!(media_box(&output, pages[6]), vec![742.0, -50.0, 1584.0, 545.0]);
    // Last tile is column 2, row 5
    assert_eq!(media_box(&output, pages[17]), vec![1534.0, 2675.0, 2376.0, 3270.0]);
}

#[tokio::test]
async fn test_tile_page_order_across_pages() {
    let doc = create_test_pdf(&[(595, 842), (100, 100), (2384, 3371)]);

    let output = tile(&doc, &options("A4", 25.0)).await.unwrap();
    let pages: Vec<ObjectId> = output.get_pages().values().copied().collect();
    assert_eq!(pages.len(), 2 + 1 + 18);

    // The third output page is the single tile of source page 1
    assert!(page_content(&output, pages[2]).contains("(page 1/column 0/line 0/"));
    assert!(page_content(&output, pages[3]).contains("(page 2/column 0/line 0/"));
}

#[tokio::test]
async fn test_tile_content_has_source_and_marks() {
    let doc = create_test_pdf(&[(595, 842)]);

    let output = tile(&doc, &options("A4", 25.0)).await.unwrap();
    let page_id = *output.get_pages().values().next().unwrap();
    let content = page_content(&output, page_id);

    assert!(content.starts_with("q /Src Do Q\n"));
    assert!(content.contains("(page 0/column 0/line 0/scale 238pt = 84mm) Tj"));
    // Two scale bars and four crosses
    assert_eq!(content.matches(" l S\n").count(), 10);

    let resources = output
        .get_dictionary(page_id)
        .unwrap()
        .get(b"Resources")
        .unwrap()
        .as_dict()
        .unwrap();
    assert!(resources.get(b"XObject").unwrap().as_dict().unwrap().has(b"Src"));
    assert!(resources.get(b"Font").unwrap().as_dict().unwrap().has(b"F1"));
}

#[tokio::test]
async fn test_tiles_share_source_xobject() {
    let doc = create_test_pdf(&[(2384, 3371)]);

    let output = tile(&doc, &options("A4", 25.0)).await.unwrap();
    let xobject_ids: Vec<ObjectId> = output
        .get_pages()
        .values()
        .map(|&page_id| {
            output
                .get_dictionary(page_id)
                .unwrap()
                .get(b"Resources")
                .unwrap()
                .as_dict()
                .unwrap()
                .get(b"XObject")
                .unwrap()
                .as_dict()
                .unwrap()
                .get(b"Src")
                .unwrap()
                .as_reference()
                .unwrap()
        })
        .collect();

    assert_eq!(xobject_ids.len(), 18);
    assert!(xobject_ids.iter().all(|&id| id == xobject_ids[0]));

    let xobject = output.get_object(xobject_ids[0]).unwrap().as_stream().unwrap();
    assert_eq!(xobject.content, b"q 0 0 1 rg 0 0 100 100 re f Q".to_vec());
}

#[tokio::test]
async fn test_tile_output_round_trip() {
    use tempfile::NamedTempFile;

    let doc = create_test_pdf(&[(1190, 1684)]);
    let output = tile(&doc, &options("A4", 25.0)).await.unwrap();

    let temp = NamedTempFile::new().unwrap();
    save_pdf(output, temp.path()).await.unwrap();

    let loaded = load_pdf(temp.path()).await.unwrap();
    let expected = calculate_statistics(&doc, &options("A4", 25.0))
        .unwrap()
        .total_tiles;
    assert_eq!(loaded.get_pages().len(), expected);
}

#[test]
fn test_tile_document_matches_plan() {
    let doc = create_test_pdf(&[(1000, 3000)]);
    let opts = options("Letter", 40.0);

    let output = tile_document(&doc, &opts).unwrap();
    let format = lookup("Letter").unwrap();
    let tile_plan = plan(SourcePage::new(1000.0, 3000.0), &format, 40.0).unwrap();

    let boxes: Vec<Vec<f32>> = output
        .get_pages()
        .values()
        .map(|&id| media_box(&output, id))
        .collect();
    let expected: Vec<Vec<f32>> = cells(&tile_plan, 40.0)
        .map(|c| vec![c.base_x, c.base_y, c.end_x, c.end_y])
        .collect();

    assert_eq!(boxes, expected);
}

#[test]
fn test_compressed_content_is_decoded() {
    let mut doc = create_test_pdf(&[(595, 842)]);
    let plain = b"q 0 0 1 rg 0 0 100 100 re f Q\n".repeat(20);
    let mut stream = Stream::new(Dictionary::new(), plain.clone());
    stream.compress().unwrap();
    assert!(stream.dict.has(b"Filter"));
    replace_content(&mut doc, stream);

    let output = tile_document(&doc, &options("A4", 25.0)).unwrap();
    assert_eq!(source_xobject_content(&output), plain);
}

#[test]
fn test_undecodable_content_fails() {
    let mut doc = create_test_pdf(&[(595, 842)]);
    let mut dict = Dictionary::new();
    dict.set("Filter", Object::Name(b"RunLengthDecode".to_vec()));
    replace_content(&mut doc, Stream::new(dict, vec![0x02, b'a', b'b', b'c', 0x80]));

    let result = tile_document(&doc, &options("A4", 25.0));
    assert!(matches!(result, Err(TileError::Pdf(_))));
}

#[test]
fn test_oversized_page_fails_before_rendering() {
    let mut doc = create_test_pdf(&[(595, 842)]);
    let page_id = *doc.get_pages().values().next().unwrap();
    doc.get_dictionary_mut(page_id).unwrap().set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(1e30),
            Object::Real(1e30),
        ]),
    );

    let result = tile_document(&doc, &options("A4", 25.0));
    assert!(matches!(result, Err(TileError::TooManyTiles { .. })));
    assert!(matches!(
        calculate_statistics(&doc, &options("A4", 25.0)),
        Err(TileError::TooManyTiles { .. })
    ));
}
