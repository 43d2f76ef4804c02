//! Folding Chef environments and nodes into Ansible inventory groups.
//!
//! Every environment `E` becomes a parent group whose children are
//! `E_api`, `E_worker`, `E_db` and `E_queues`. Each child lists the
//! `ipaddress` of the nodes in `E` tagged with the matching `barbican-*`
//! role, in the order the server returned them.

use crate::errors::InventoryError;
use crate::models::{Environment, Node};
use crate::registry::Registry;
use failure::Error;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Api,
    Worker,
    Db,
    Queues,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Api, Role::Worker, Role::Db, Role::Queues];

    /// The role a node must carry in `automatic.roles` to join this group.
    pub fn tag(self) -> &'static str {
        match self {
            Role::Api => "barbican-api",
            Role::Worker => "barbican-worker",
            Role::Db => "barbican-db",
            Role::Queues => "barbican-queue",
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Role::Api => "api",
            Role::Worker => "worker",
            Role::Db => "db",
            Role::Queues => "queues",
        }
    }

    pub fn group_name(self, environment: &str) -> String {
        format!("{}_{}", environment, self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Group {
    Parent { children: Vec<String> },
    Hosts(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    groups: BTreeMap<String, Group>,
}

impl Inventory {
    pub fn get(&self, group: &str) -> Option<&Group> {
        self.groups.get(group)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Query `registry` and group its nodes.
pub fn list<R: Registry + ?Sized>(registry: &R) -> Result<Inventory, Error> {
    let environments = registry.environments()?;
    let nodes = registry.nodes()?;
    info!(
        "Grouping {} nodes across {} environments",
        nodes.len(),
        environments.len()
    );
    build(&environments, &nodes)
}

pub fn build(environments: &[Environment], nodes: &[Node]) -> Result<Inventory, Error> {
    let mut inventory = Inventory::default();
    for env in environments {
        let children = Role::ALL.iter().map(|r| r.group_name(&env.name)).collect();
        inventory
            .groups
            .insert(env.name.clone(), Group::Parent { children });

        for role in Role::ALL.iter() {
            let hosts = hosts_with_role(nodes, &env.name, *role)?;
            debug!("{} holds {} hosts", role.group_name(&env.name), hosts.len());
            inventory
                .groups
                .insert(role.group_name(&env.name), Group::Hosts(hosts));
        }
    }
    Ok(inventory)
}

fn hosts_with_role(nodes: &[Node], environment: &str, role: Role) -> Result<Vec<String>, Error> {
    let mut hosts = Vec::new();
    for node in nodes.iter().filter(|n| n.chef_environment == environment) {
        let automatic = node
            .automatic
            .as_ref()
            .ok_or_else(|| malformed(node, "automatic"))?;
        let tagged = automatic
            .roles
            .as_ref()
            .map_or(false, |roles| roles.iter().any(|r| r == role.tag()));
        if !tagged {
            continue;
        }
        let ip = automatic
            .ipaddress
            .as_ref()
            .ok_or_else(|| malformed(node, "automatic.ipaddress"))?;
        hosts.push(ip.clone());
    }
    Ok(hosts)
}

fn malformed(node: &Node, attribute: &'static str) -> InventoryError {
    InventoryError::MalformedNode {
        node: node.display_name().into(),
        attribute,
    }
}

/// Per-host variables. Nothing is stored per host, so this is always empty.
pub fn host_vars(host: Option<&str>) -> Map<String, Value> {
    debug!("No variables for host {:?}", host);
    Map::new()
}
