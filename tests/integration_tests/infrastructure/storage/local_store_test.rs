use std::io;

use bytes::Bytes;
use futures::{StreamExt, stream};

use mathcast::application::ports::{DocumentStore, DocumentStoreError};
use mathcast::domain::StoragePath;
use mathcast::infrastructure::storage::LocalDocumentStore;

fn create_test_store() -> (tempfile::TempDir, LocalDocumentStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalDocumentStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_valid_stream_when_storing_then_file_lands_under_base_dir() {
    let (dir, store) = create_test_store();
    let path = StoragePath::from_raw("20240101_000000_notes.pdf");

    let chunks: Vec<Result<Bytes, io::Error>> =
        vec![Ok(Bytes::from("%PDF-1.4 ")), Ok(Bytes::from("body"))];
    let size = store.store(&path, stream::iter(chunks).boxed()).await.unwrap();

    assert_eq!(size, 13);
    let local = store.local_path(&path).unwrap();
    assert!(local.starts_with(dir.path()));
    assert_eq!(std::fs::read(&local).unwrap(), b"%PDF-1.4 body");
}

#[tokio::test]
async fn given_stream_error_when_storing_then_reports_io_error() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::from_raw("broken.pdf");

    let chunks = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "client went away")),
    ];
    let result = store.store(&path, stream::iter(chunks).boxed()).await;

    assert!(matches!(result, Err(DocumentStoreError::Io(_))));
}
