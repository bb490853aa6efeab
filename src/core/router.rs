use crate::core::route::{route_for_path, Route};
use crate::domain::ports::Handler;
use crate::utils::error::{FunctionError, Result};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct Router {
    entries: Vec<(Route, Arc<dyn Handler>)>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler at the route its source file deploys to.
    pub fn register(&mut self, source_path: &str, handler: Arc<dyn Handler>) -> Result<Route> {
        let route = route_for_path(source_path)?;

        if self.entries.iter().any(|(existing, _)| existing == &route) {
            return Err(FunctionError::DuplicateRouteError {
                route: route.to_string(),
            });
        }

        tracing::debug!("Registered function '{}' at {}", handler.name(), route);
        self.entries.push((route.clone(), handler));
        Ok(route)
    }

    /// Static routes win over dynamic ones regardless of registration order.
    pub fn resolve(&self, request_path: &str) -> Option<(&Route, Arc<dyn Handler>)> {
        self.entries
            .iter()
            .filter(|(route, _)| !route.is_dynamic())
            .chain(self.entries.iter().filter(|(route, _)| route.is_dynamic()))
            .find(|(route, _)| route.matches(request_path))
            .map(|(route, handler)| (route, Arc::clone(handler)))
    }

    pub fn routes(&self) -> Vec<&Route> {
        self.entries.iter().map(|(route, _)| route).collect()
    }
}
