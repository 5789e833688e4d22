//! One-time initialization of shared model handles.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::error::Result;

/// Produces a model capability; may be slow (downloads, warm-up, handshakes).
#[async_trait]
pub trait ModelLoader<M: ?Sized + Send + Sync>: Send + Sync {
    async fn load(&self) -> Result<Arc<M>>;
}

/// A model handle loaded on first use and shared afterwards.
///
/// Concurrent first callers wait on a single load. A failed load leaves the
/// cell empty, so the next caller tries again.
pub struct LazyModel<M: ?Sized + Send + Sync> {
    name: String,
    loader: Box<dyn ModelLoader<M>>,
    cell: OnceCell<Arc<M>>,
}

impl<M: ?Sized + Send + Sync + 'static> LazyModel<M> {
    pub fn new(name: impl Into<String>, loader: impl ModelLoader<M> + 'static) -> Self {
        Self {
            name: name.into(),
            loader: Box::new(loader),
            cell: OnceCell::new(),
        }
    }

    /// Wrap an already-resident model.
    pub fn ready(name: impl Into<String>, model: Arc<M>) -> Self {
        Self {
            name: name.into(),
            loader: Box::new(Resident(model.clone())),
            cell: OnceCell::new_with(Some(model)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    pub async fn get(&self) -> Result<Arc<M>> {
        let model = self
            .cell
            .get_or_try_init(|| async {
                info!(model = %self.name, "loading model");
                let loaded = self.loader.load().await;
                match &loaded {
                    Ok(_) => info!(model = %self.name, "model ready"),
                    Err(err) => warn!(model = %self.name, %err, "model load failed"),
                }
                loaded
            })
            .await?;
        Ok(Arc::clone(model))
    }
}

struct Resident<M: ?Sized>(Arc<M>);

#[async_trait]
impl<M: ?Sized + Send + Sync + 'static> ModelLoader<M> for Resident<M> {
    async fn load(&self) -> Result<Arc<M>> {
        Ok(Arc::clone(&self.0))
    }
}
