use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::StoragePath;

/// Uploaded documents on local disk, rooted at the upload directory.
pub struct LocalDocumentStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalDocumentStore {
    pub fn new(base_path: PathBuf) -> Result<Self, DocumentStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| DocumentStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }

    fn location(path: &StoragePath) -> Result<StorePath, DocumentStoreError> {
        StorePath::parse(path.as_str())
            .map_err(|e| DocumentStoreError::InvalidPath(e.to_string()))
    }
}

#[async_trait::async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, DocumentStoreError> {
        let location = Self::location(path)?;
        let mut upload = self
            .inner
            .put_multipart(&location)
            .await
            .map_err(|e| DocumentStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(DocumentStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(DocumentStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| DocumentStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(path = %path, bytes = total_bytes, "Stored document");
        Ok(total_bytes)
    }

    fn local_path(&self, path: &StoragePath) -> Result<PathBuf, DocumentStoreError> {
        let location = Self::location(path)?;
        self.inner
            .path_to_filesystem(&location)
            .map_err(|e| DocumentStoreError::InvalidPath(e.to_string()))
    }
}
