//! Load a file, chunk it, embed it and query it back

use std::io::Write;

use textpack::document_loaders::TextLoader;
use textpack::embeddings::MockEmbeddings;
use textpack::prelude::*;
use textpack::vectorstores::MemoryVectorStore;
use uuid::Uuid;

fn lecture_notes() -> String {
    let mut notes = String::new();
    for topic in ["Photosynthesis", "Mitochondria", "Osmosis", "Enzymes", "Genetics"] {
        for part in 0..6 {
            notes.push_str(&format!(
                "{} part {} explains how cells manage energy and matter in living systems. \
                 Students should review the diagrams before the next session.\n\n",
                topic, part
            ));
        }
    }
    notes
}

#[tokio::test]
async fn test_file_to_vector_store_pipeline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(lecture_notes().as_bytes()).unwrap();

    let docs = TextLoader::new(file.path()).load().await.unwrap();
    assert_eq!(docs.len(), 1);

    let store = MemoryVectorStore::new();
    let config = ChunkerConfig::new(80, 160, 20).unwrap();
    let ingestor =
        MaterialIngestor::new(MockEmbeddings::new(24), store.clone()).with_config(config);

    let material_id = Uuid::new_v4();
    let pod_id = Uuid::new_v4();
    let report = ingestor
        .process(material_id, pod_id, &docs[0].page_content)
        .await;

    assert_eq!(report.status, IngestStatus::Ready);
    assert!(report.error.is_none());

    let expected = TieredTextSplitter::new(config).chunk(&docs[0].page_content);
    assert_eq!(report.chunk_count, expected.len());

    let stored = store.search(None, Some(material_id), None, usize::MAX).await.unwrap();
    let stored_texts: Vec<&str> = stored.iter().map(|c| c.text.as_str()).collect();
    let expected_texts: Vec<&str> = expected.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(stored_texts, expected_texts);

    let hits = ingestor
        .retrieve(&expected[1].text, None, Some(pod_id), 2)
        .await
        .unwrap();
    assert_eq!(hits[0].chunk_index, 1);

    ingestor.delete(material_id).await.unwrap();
    assert!(store.is_empty().unwrap());
}

#[test]
fn test_split_documents_from_loader_output() {
    let splitter = TieredTextSplitter::new(ChunkerConfig::new(80, 160, 20).unwrap());
    let doc = Document::new(lecture_notes());
    let pieces = splitter.split_documents(vec![doc]).unwrap();

    assert!(pieces.len() > 1);
    for (i, piece) in pieces.iter().enumerate() {
        assert_eq!(piece.metadata["chunk_index"], i);
    }
}
