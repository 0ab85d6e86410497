use lopdf::{Dictionary, Document, Object, Stream};
use pdf_booklet::*;

fn create_test_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");

    // Create page tree root ID
    let pages_id = doc.new_object_id();

    // Create pages array
    let mut kids = Vec::new();
    for i in 0..num_pages {
        let content = format!("% source page {}\n", i + 1).into_bytes();
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(612),
                    Object::Integer(792),
                ]),
            ),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    // Create pages dict
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(num_pages as i64)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    doc.trailer.set("Root", catalog_id);

    doc
}

fn page_contents(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .values()
        .map(|&id| {
            let content = doc.get_page_content(id).unwrap();
            String::from_utf8_lossy(&content).into_owned()
        })
        .collect()
}

fn source_page_number(content: &str) -> Option<usize> {
    content
        .lines()
        .find_map(|line| line.strip_prefix("% source page "))
        .and_then(|n| n.trim().parse().ok())
}

#[tokio::test]
async fn test_make_booklet_ten_pages_of_four() {
    let doc = create_test_pdf(10);
    let options = BookletOptions {
        signature_size: 4,
        pages_per_sheet: 2,
        ..Default::default()
    };

    let booklet = make_booklet(doc, &options).await.unwrap();
    assert_eq!(
        booklet.report,
        BookletReport {
            original_pages: 10,
            pages_numbered: 0,
            blank_pages_added: 2,
            signatures: 3,
            final_pages: 12,
        }
    );

    let order: Vec<Option<usize>> = page_contents(&booklet.document)
        .iter()
        .map(|c| source_page_number(c))
        .collect();
    assert_eq!(
        order,
        vec![
            Some(4),
            Some(1),
            Some(2),
            Some(3),
            Some(8),
            Some(5),
            Some(6),
            Some(7),
            None,
            Some(9),
            Some(10),
            None,
        ]
    );
}

#[tokio::test]
async fn test_make_booklet_cut_sheets() {
    let doc = create_test_pdf(16);
    let options = BookletOptions {
        signature_size: 16,
        pages_per_sheet: 4,
        ..Default::default()
    };

    let booklet = make_booklet(doc, &options).await.unwrap();
    let order: Vec<usize> = page_contents(&booklet.document)
        .iter()
        .map(|c| source_page_number(c).unwrap() - 1)
        .collect();
    assert_eq!(
        order,
        vec![15, 0, 13, 2, 1, 14, 3, 12, 11, 4, 9, 6, 5, 10, 7, 8]
    );
}

#[tokio::test]
async fn test_make_booklet_numbers_only_original_pages() {
    let doc = create_test_pdf(3);
    let options = BookletOptions {
        signature_size: 4,
        pages_per_sheet: 2,
        stamp_page_numbers: true,
        ..Default::default()
    };

    let booklet = make_booklet(doc, &options).await.unwrap();
    assert_eq!(booklet.report.pages_numbered, 3);
    assert_eq!(booklet.report.blank_pages_added, 1);

    let contents = page_contents(&booklet.document);
    // Output order [4, 1, 2, 3]; page 4 is the blank
    assert!(!contents[0].contains("Tj"));
    assert!(contents[1].contains("(1) Tj"));
    assert!(contents[2].contains("(2) Tj"));
    assert!(contents[3].contains("(3) Tj"));
}

#[tokio::test]
async fn test_make_booklet_unsupported_configuration() {
    let doc = create_test_pdf(8);
    let options = BookletOptions {
        signature_size: 12,
        pages_per_sheet: 2,
        ..Default::default()
    };

    let result = make_booklet(doc, &options).await;
    match result {
        Err(BookletError::UnsupportedConfiguration {
            signature_size,
            pages_per_sheet,
        }) => {
            assert_eq!(signature_size, 12);
            assert_eq!(pages_per_sheet, 2);
        }
        _ => panic!("Expected UnsupportedConfiguration error"),
    }
}

#[tokio::test]
async fn test_make_booklet_no_pages() {
    let doc = create_test_pdf(0);
    let result = make_booklet(doc, &BookletOptions::default()).await;
    assert!(matches!(result, Err(BookletError::NoPages)));
}

#[tokio::test]
async fn test_make_booklet_zero_signature_size() {
    let doc = create_test_pdf(4);
    let options = BookletOptions {
        signature_size: 0,
        ..Default::default()
    };
    let result = make_booklet(doc, &options).await;
    assert!(matches!(result, Err(BookletError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_make_booklet_output_saves_and_reloads() {
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let path = dir.path().join("booklet.pdf");

    let booklet = make_booklet(create_test_pdf(20), &BookletOptions::default())
        .await
        .unwrap();
    assert_eq!(booklet.report.final_pages, 32);
    save_pdf(booklet.document, &path).await.unwrap();

    let loaded = load_pdf(&path).await.unwrap();
    assert_eq!(loaded.get_pages().len(), 32);
}

#[test]
fn test_make_booklet_sync_sixteen_pages() {
    let options = BookletOptions {
        signature_size: 16,
        pages_per_sheet: 2,
        ..Default::default()
    };

    let booklet = make_booklet_sync(create_test_pdf(16), &options).unwrap();
    assert_eq!(booklet.report.blank_pages_added, 0);
    assert_eq!(booklet.report.signatures, 1);

    let order: Vec<usize> = page_contents(&booklet.document)
        .iter()
        .map(|c| source_page_number(c).unwrap() - 1)
        .collect();
    assert_eq!(
        order,
        vec![15, 0, 1, 14, 13, 2, 3, 12, 11, 4, 5, 10, 9, 6, 7, 8]
    );
}
