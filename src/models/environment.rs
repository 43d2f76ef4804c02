model_use!();

chef_json_type!(EnvironmentJsonClass, "Chef::Environment");
chef_json_type!(EnvironmentChefType, "environment");

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Environment {
    pub name: String,
    chef_type: EnvironmentChefType,
    json_class: EnvironmentJsonClass,
    pub description: String,
    pub cookbook_versions: HashMap<String, String>,
    pub default_attributes: HashMap<String, Value>,
    pub override_attributes: HashMap<String, Value>,
}

model_impl!(Environment);
model_result!(Environment, EnvironmentResult);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_result() {
        let result = EnvironmentResult::try_from(json!({
            "total": 2,
            "start": 0,
            "rows": [
                {
                    "name": "_default",
                    "description": "The default Chef environment",
                    "chef_type": "environment",
                    "json_class": "Chef::Environment",
                    "cookbook_versions": {},
                    "default_attributes": {},
                    "override_attributes": {}
                },
                {
                    "name": "prod",
                    "cookbook_versions": { "barbican": "= 1.2.0" }
                }
            ]
        }))
        .unwrap();

        let names: Vec<String> = result.into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["_default", "prod"]);
    }
}
