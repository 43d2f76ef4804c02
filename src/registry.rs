use crate::models::{Environment, EnvironmentResult, Node, NodeResult};
use chef_api::ApiClient;
use failure::Error;
use std::convert::TryFrom;

/// Where environments and nodes come from.
pub trait Registry {
    fn environments(&self) -> Result<Vec<Environment>, Error>;
    fn nodes(&self) -> Result<Vec<Node>, Error>;
}

impl Registry for ApiClient {
    fn environments(&self) -> Result<Vec<Environment>, Error> {
        let found = self.search().search_index("environment").get()?;
        Ok(EnvironmentResult::try_from(found)?.rows)
    }

    fn nodes(&self) -> Result<Vec<Node>, Error> {
        let found = self.search().search_index("node").get()?;
        Ok(NodeResult::try_from(found)?.rows)
    }
}
