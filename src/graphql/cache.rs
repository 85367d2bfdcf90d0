use std::collections::HashMap;

use serde_json::{Map, Value};

type Entities = HashMap<String, Map<String, Value>>;

/// Query results keyed by operation and variables, kept consistent across
/// queries by entity identity (`__typename` + `id`).
///
/// When any response carries an entity, its scalar fields are copied into
/// every cached result that holds the same entity, so a mutation returning
/// `{__typename: "Assignment", id: "a1", status: "COMPLETED"}` updates the
/// cached assignment list without a refetch.
#[derive(Debug, Default)]
pub struct QueryCache {
    results: HashMap<String, Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache key for an operation invocation.
    pub fn key(operation: &str, variables: &Value) -> String {
        format!("{operation}:{variables}")
    }

    pub fn read(&self, key: &str) -> Option<&Value> {
        self.results.get(key)
    }

    /// Store a query result and propagate its entities into other results.
    pub fn write(&mut self, key: String, data: Value) {
        self.merge_entities(&data);
        self.results.insert(key, data);
    }

    /// Propagate the entities in `data` without storing `data` itself.
    pub fn merge_entities(&mut self, data: &Value) {
        let mut entities = Entities::new();
        collect_entities(data, &mut entities);
        if entities.is_empty() {
            return;
        }
        for result in self.results.values_mut() {
            apply_entities(result, &entities);
        }
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.results.len()
    }
}

fn entity_key(object: &Map<String, Value>) -> Option<String> {
    let typename = object.get("__typename")?.as_str()?;
    let id = match object.get("id")? {
        Value::String(id) => id.clone(),
        Value::Number(id) => id.to_string(),
        _ => return None,
    };
    Some(format!("{typename}:{id}"))
}

const fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Object(_) | Value::Array(_))
}

fn collect_entities(value: &Value, out: &mut Entities) {
    match value {
        Value::Object(object) => {
            if let Some(key) = entity_key(object) {
                let fields = out.entry(key).or_default();
                for (name, field) in object {
                    if is_scalar(field) {
                        fields.insert(name.clone(), field.clone());
                    }
                }
            }
            for field in object.values() {
                collect_entities(field, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_entities(item, out);
            }
        }
        _ => {}
    }
}

fn apply_entities(value: &mut Value, entities: &Entities) {
    match value {
        Value::Object(object) => {
            if let Some(fields) = entity_key(object).and_then(|key| entities.get(&key)) {
                // Only fields the cached selection already has; the shape of a
                // cached result never grows.
                for (name, field) in fields {
                    if let Some(slot) = object.get_mut(name) {
                        if is_scalar(slot) {
                            *slot = field.clone();
                        }
                    }
                }
            }
            for field in object.values_mut() {
                apply_entities(field, entities);
            }
        }
        Value::Array(items) => {
            for item in items {
                apply_entities(item, entities);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn assignments() -> Value {
        json!({
            "myAssignments": [
                {
                    "__typename": "Assignment",
                    "id": "a1",
                    "status": "ASSIGNED",
                    "completedAt": null,
                    "quest": {"__typename": "Quest", "id": "q1", "title": "Clean Room", "xp": 50, "gold": 10}
                },
                {
                    "__typename": "Assignment",
                    "id": "a2",
                    "status": "ASSIGNED",
                    "completedAt": null,
                    "quest": {"__typename": "Quest", "id": "q2", "title": "Dishes", "xp": 20, "gold": 5}
                }
            ]
        })
    }

    #[test]
    fn test_key_includes_variables() {
        let a = QueryCache::key("Children", &json!({"parentId": "p1"}));
        let b = QueryCache::key("Children", &json!({"parentId": "p2"}));
        assert_ne!(a, b);
        assert!(a.starts_with("Children:"));
    }

    #[test]
    fn test_write_and_read() {
        let mut cache = QueryCache::new();
        cache.write("k".to_string(), json!({"children": []}));

        assert_eq!(cache.read("k"), Some(&json!({"children": []})));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_mutation_result_updates_cached_entity() {
        let mut cache = QueryCache::new();
        cache.write("MyAssignments".to_string(), assignments());

        cache.merge_entities(&json!({
            "completeAssignment": {
                "__typename": "Assignment",
                "id": "a1",
                "status": "COMPLETED",
                "completedAt": "2025-01-02T10:00:00Z",
                "quest": {"__typename": "Quest", "id": "q1", "title": "Clean Room"}
            }
        }));

        let cached = cache.read("MyAssignments").unwrap();
        assert_eq!(cached["myAssignments"][0]["status"], "COMPLETED");
        assert_eq!(cached["myAssignments"][0]["completedAt"], "2025-01-02T10:00:00Z");
        assert_eq!(cached["myAssignments"][1]["status"], "ASSIGNED");
        // Fields missing from the mutation selection are kept.
        assert_eq!(cached["myAssignments"][0]["quest"]["xp"], 50);
    }

    #[test]
    fn test_merge_does_not_add_fields() {
        let mut cache = QueryCache::new();
        cache.write(
            "Children".to_string(),
            json!({"children": [{"__typename": "Child", "id": "c1", "name": "Ana"}]}),
        );

        cache.merge_entities(&json!({
            "createChild": {"__typename": "Child", "id": "c1", "name": "Ana B", "xp": 5}
        }));

        let child = &cache.read("Children").unwrap()["children"][0];
        assert_eq!(child["name"], "Ana B");
        assert!(child.get("xp").is_none());
    }

    #[test]
    fn test_objects_without_typename_are_not_entities() {
        let mut cache = QueryCache::new();
        cache.write("A".to_string(), json!({"item": {"id": "1", "v": 1}}));
        cache.merge_entities(&json!({"other": {"id": "1", "v": 2}}));

        assert_eq!(cache.read("A").unwrap()["item"]["v"], 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = QueryCache::new();
        cache.write("a".to_string(), json!(1));
        cache.write("b".to_string(), json!(2));

        cache.clear();
        assert!(cache.read("a").is_none());
        assert_eq!(cache.len(), 0);
    }
}
