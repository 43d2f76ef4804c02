model_use!();

chef_json_type!(NodeJsonClass, "Chef::Node");
chef_json_type!(NodeChefType, "node");

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Node {
    pub name: Option<String>,
    chef_type: NodeChefType,
    json_class: NodeJsonClass,
    pub chef_environment: String,
    pub run_list: Vec<String>,
    pub normal: HashMap<String, Value>,
    pub automatic: Option<AutomaticAttributes>,
    pub default: HashMap<String, Value>,
    #[serde(rename = "override")]
    pub overrides: HashMap<String, Value>,
}

/// The slice of ohai-reported attributes inventory building needs. Anything
/// else under `automatic` is skipped while decoding.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AutomaticAttributes {
    pub roles: Option<Vec<String>>,
    pub ipaddress: Option<String>,
}

impl Node {
    /// The node name for messages, `<unnamed>` when the server omitted it.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

model_impl!(Node);
model_result!(Node, NodeResult);
