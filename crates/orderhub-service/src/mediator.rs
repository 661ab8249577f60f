//! Mediator — validates queries and dispatches them to registered handlers.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, warn};
use validator::Validate;

use orderhub_core::error::AppError;

/// A request object answered by exactly one [`QueryHandler`].
pub trait Query: Validate + Send + Sync + 'static {
    /// Value produced by the handler.
    type Output: Send + 'static;

    /// Name used in logs.
    const NAME: &'static str;
}

/// Handles one query type.
#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync + 'static {
    /// Produce the answer for an already validated query.
    async fn handle(&self, query: Q) -> Result<Q::Output, AppError>;
}

struct Registration {
    name: &'static str,
    /// Holds an `Arc<dyn QueryHandler<Q>>` for the keyed `Q`.
    handler: Box<dyn Any + Send + Sync>,
}

/// Routes queries to handlers, running validation first.
#[derive(Default)]
pub struct Mediator {
    handlers: HashMap<TypeId, Registration>,
}

impl std::fmt::Debug for Mediator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mediator")
            .field("queries", &self.registered_queries())
            .finish()
    }
}

impl Mediator {
    /// Create a mediator with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `Q`, replacing any previous one.
    pub fn register<Q, H>(&mut self, handler: H)
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let handler: Arc<dyn QueryHandler<Q>> = Arc::new(handler);
        debug!(query = Q::NAME, "Registered query handler");
        self.handlers.insert(
            TypeId::of::<Q>(),
            Registration {
                name: Q::NAME,
                handler: Box::new(handler),
            },
        );
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<Q, H>(mut self, handler: H) -> Self
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        self.register::<Q, H>(handler);
        self
    }

    /// Validate `query`, then run its handler.
    ///
    /// Validation failures never reach the handler.
    pub async fn send<Q: Query>(&self, query: Q) -> Result<Q::Output, AppError> {
        if let Err(errors) = query.validate() {
            let err = AppError::from(errors);
            warn!(query = Q::NAME, errors = ?err.errors, "Query failed validation");
            return Err(err);
        }

        let handler = self.handler_for::<Q>()?;

        let started = Instant::now();
        let result = handler.handle(query).await;
        debug!(
            query = Q::NAME,
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Query handled"
        );
        result
    }

    /// Whether a handler is registered for `Q`.
    pub fn has_handler<Q: Query>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<Q>())
    }

    /// Names of every registered query.
    pub fn registered_queries(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.values().map(|r| r.name).collect();
        names.sort_unstable();
        names
    }

    fn handler_for<Q: Query>(&self) -> Result<Arc<dyn QueryHandler<Q>>, AppError> {
        self.handlers
            .get(&TypeId::of::<Q>())
            .and_then(|r| r.handler.downcast_ref::<Arc<dyn QueryHandler<Q>>>())
            .cloned()
            .ok_or_else(|| {
                AppError::internal(format!("No handler registered for query '{}'", Q::NAME))
            })
    }
}
