use std::fs;
use tempfile::tempdir;
use textsearch_core::corpus::load_directory;
use textsearch_core::{intersect, DocId, IndexStore, SearchError};

fn doc(id: &str) -> DocId {
    DocId::from(id)
}

fn two_docs() -> IndexStore {
    IndexStore::build_index([
        (doc("test1.txt"), vec!["File 1 Title", "apple ball carrot"]),
        (doc("test2.txt"), vec!["File 2 Title", "ball carrot dog"]),
    ])
}

fn dedup(list: &[DocId]) -> Vec<DocId> {
    let mut out: Vec<DocId> = Vec::new();
    for id in list {
        if !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}

#[test]
fn two_document_scenario() {
    let store = two_docs();
    let a = doc("test1.txt");
    let b = doc("test2.txt");
    assert_eq!(store.search("apple").unwrap(), vec![a.clone()]);
    assert_eq!(store.search("ball").unwrap(), vec![a.clone(), b.clone()]);
    assert_eq!(store.search("file").unwrap(), vec![a.clone(), b.clone()]);
    assert_eq!(store.search("2").unwrap(), vec![b.clone()]);
    assert_eq!(store.search("dog").unwrap(), vec![b.clone()]);
    assert_eq!(store.search("apple carrot").unwrap(), vec![a.clone()]);
    assert_eq!(store.search("apple ball file").unwrap(), vec![a]);
    assert!(store.search("apple ball dog").unwrap().is_empty());
    assert!(store.search("apple ball nope").unwrap().is_empty());
    assert!(store.search("nope").unwrap().is_empty());
}

#[test]
fn index_contents_match_documents() {
    let store = two_docs();
    let mut terms: Vec<&str> = store.index().terms().collect();
    terms.sort_unstable();
    assert_eq!(terms, vec!["1", "2", "apple", "ball", "carrot", "dog", "file", "title"]);
    assert_eq!(store.postings("title"), &[doc("test1.txt"), doc("test2.txt")]);
    assert_eq!(store.title(&doc("test1.txt")), Some("File 1 Title"));
    assert_eq!(store.title(&doc("test2.txt")), Some("File 2 Title"));
}

#[test]
fn indexing_twice_is_idempotent() {
    let once = two_docs();
    let twice = IndexStore::build_index([
        (doc("test1.txt"), vec!["File 1 Title", "apple ball carrot"]),
        (doc("test2.txt"), vec!["File 2 Title", "ball carrot dog"]),
        (doc("test2.txt"), vec!["File 2 Title", "ball carrot dog"]),
    ]);
    assert_eq!(once, twice);
}

#[test]
fn postings_follow_insertion_order_not_sorted_order() {
    let store = IndexStore::build_index([
        (doc("z"), vec!["Zed", "ball carrot"]),
        (doc("a"), vec!["Ay", "ball"]),
        (doc("m"), vec!["Em", "carrot ball"]),
    ]);
    assert_eq!(store.postings("ball"), &[doc("z"), doc("a"), doc("m")]);
    assert_eq!(store.search("ball").unwrap(), vec![doc("z"), doc("a"), doc("m")]);
    assert_eq!(store.search("ball carrot").unwrap(), vec![doc("z"), doc("m")]);
    assert_eq!(store.search("carrot ball").unwrap(), vec![doc("z"), doc("m")]);
}

#[test]
fn empty_input_leaves_store_unchanged() {
    let mut store = two_docs();
    let before = store.clone();
    store.add_documents(Vec::<(DocId, Vec<String>)>::new());
    assert_eq!(store, before);

    store.add_documents([(doc("test3.txt"), vec!["File 3 Title", "egg"])]);
    assert_ne!(store, before);
    assert_eq!(store.search("file").unwrap(), vec![doc("test1.txt"), doc("test2.txt"), doc("test3.txt")]);

    let empty = IndexStore::build_index(Vec::<(DocId, Vec<String>)>::new());
    assert!(empty.is_empty());
    assert_eq!(empty.num_terms(), 0);
    assert!(empty.search("anything at all").unwrap().is_empty());
}

#[test]
fn single_term_equals_postings_and_pairs_equal_intersection() {
    let store = two_docs();
    for term in ["apple", "ball", "carrot", "dog", "file", "title", "1", "2"] {
        assert_eq!(store.search(term).unwrap(), dedup(store.postings(term)));
    }
    for (t1, t2) in [("ball", "dog"), ("dog", "ball"), ("title", "apple"), ("carrot", "nope")] {
        let expected = intersect(store.postings(t1), store.postings(t2));
        assert_eq!(store.search(&format!("{t1} {t2}")).unwrap(), expected);
    }
}

#[test]
fn intersect_properties() {
    let a = vec![doc("x"), doc("y"), doc("x"), doc("z")];
    let b = vec![doc("z"), doc("w"), doc("x")];
    assert_eq!(intersect(&a, &a), dedup(&a));

    let mut ab = intersect(&a, &b);
    let mut ba = intersect(&b, &a);
    assert_eq!(ab, vec![doc("x"), doc("z")]);
    assert_eq!(ba, vec![doc("z"), doc("x")]);
    ab.sort();
    ba.sort();
    assert_eq!(ab, ba);
}

#[test]
fn blank_query_is_rejected() {
    let store = two_docs();
    assert!(matches!(store.search("   "), Err(SearchError::InvalidQuery)));
}

#[test]
fn loads_a_directory_of_text_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("test1.txt"), "File 1 Title\napple ball carrot\n").unwrap();
    fs::write(dir.path().join("test2.txt"), "File 2 Title.\r\nball carrot dog\n").unwrap();
    fs::write(dir.path().join("skip.csv"), "Skipped\napple\n").unwrap();

    let store = load_directory(dir.path(), "txt").unwrap();
    assert_eq!(store.num_docs(), 2);
    let p1 = DocId::new(dir.path().join("test1.txt").to_string_lossy());
    let p2 = DocId::new(dir.path().join("test2.txt").to_string_lossy());
    assert_eq!(store.title(&p2), Some("File 2 Title"));
    assert_eq!(store.search("ball").unwrap(), vec![p1.clone(), p2]);
    assert_eq!(store.search("apple").unwrap(), vec![p1]);
}
