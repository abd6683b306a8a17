//! HugeClient: entry point bundling the managers of one graph

use std::sync::Arc;
use tracing::info;

use crate::config::ClientConfig;
use crate::driver::session::SessionRegistry;
use crate::driver::{GraphManager, SchemaManager, SessionId, TraverserManager};
use crate::error::{HugeError, HugeResult};
use crate::transport::{RestClient, Transport};

/// Client for one HugeGraph graph.
///
/// Also owns the session registry that vertices use to find their way back
/// to a [`GraphManager`]. Additional graphs on the same server can be
/// opened with [`open_graph`](Self::open_graph).
pub struct HugeClient {
    transport: Arc<dyn Transport>,
    schema: SchemaManager,
    graph: GraphManager,
    traverser: TraverserManager,
    sessions: SessionRegistry,
}

impl HugeClient {
    /// Connect to the server described by `config` over HTTP
    pub fn open(config: &ClientConfig) -> HugeResult<Self> {
        let transport = RestClient::with_config(config)?;
        info!("Opening HugeGraph client for graph '{}' at {}", config.graph, config.url);
        Ok(Self::with_transport(&config.graph, Arc::new(transport)))
    }

    /// Use any [`Transport`], e.g. a [`MockTransport`](crate::transport::MockTransport)
    pub fn with_transport(graph: &str, transport: Arc<dyn Transport>) -> Self {
        let sessions = SessionRegistry::default();
        let manager =
            sessions.get_or_register(graph, || GraphManager::new(Arc::clone(&transport), graph));
        Self {
            schema: SchemaManager::new(Arc::clone(&transport), graph),
            traverser: TraverserManager::new(Arc::clone(&transport), graph),
            graph: manager,
            transport,
            sessions,
        }
    }

    pub fn graph_name(&self) -> &str {
        self.graph.graph()
    }

    pub fn schema(&self) -> &SchemaManager {
        &self.schema
    }

    pub fn graph(&self) -> &GraphManager {
        &self.graph
    }

    pub fn traverser(&self) -> &TraverserManager {
        &self.traverser
    }

    /// Session on `graph` of the same server, opened on first use
    pub fn open_graph(&self, graph: &str) -> GraphManager {
        self.sessions
            .get_or_register(graph, || GraphManager::new(Arc::clone(&self.transport), graph))
    }

    /// Forget a session opened with [`open_graph`](Self::open_graph).
    ///
    /// Vertices still carrying the handle can no longer add edges through
    /// this client. The session of the client's own graph stays open.
    pub fn close_graph(&self, session: SessionId) -> bool {
        if session == self.graph.session() {
            return false;
        }
        let closed = self.sessions.remove(session);
        if let Some(manager) = &closed {
            info!("Closed {} on graph '{}'", session, manager.graph());
        }
        closed.is_some()
    }

    /// Resolve a session handle carried by a vertex
    pub fn session(&self, session: SessionId) -> HugeResult<GraphManager> {
        self.sessions.get(session).ok_or_else(|| {
            HugeError::Client(format!("The {} is not known to this client", session))
        })
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
