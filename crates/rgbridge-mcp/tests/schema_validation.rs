use rgbridge_core::ServerConfig;
use rgbridge_mcp::server::RgBridgeServer;
use serde_json::Value;

fn schema_of(name: &str) -> Value {
    let server = RgBridgeServer::new(ServerConfig::default());
    let tool = server
        .tool_router
        .list_all()
        .into_iter()
        .find(|t| t.name == name)
        .unwrap_or_else(|| panic!("{name} not listed"));
    serde_json::to_value(&*tool.input_schema).unwrap()
}

fn required(schema: &Value) -> Vec<String> {
    let mut names: Vec<String> = schema
        .get("required")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[tokio::test]
async fn test_all_tools_have_object_input_schema() {
    let server = RgBridgeServer::new(ServerConfig::default());

    let tools = server.tool_router.list_all();
    let mut failures = Vec::new();

    for tool in &tools {
        let schema_json = serde_json::to_value(&*tool.input_schema).unwrap();
        let schema_type = schema_json.get("type").and_then(|v| v.as_str());

        if schema_type != Some("object") {
            failures.push(format!(
                "{} has invalid inputSchema type: {:?}. Schema: {}",
                tool.name, schema_type, schema_json
            ));
        }
    }

    if !failures.is_empty() {
        panic!("Schema validation failures:\n{}", failures.join("\n"));
    }
}

#[tokio::test]
async fn test_required_fields() {
    assert_eq!(required(&schema_of("search")), ["path", "pattern"]);
    assert_eq!(
        required(&schema_of("search-and-replace")),
        ["path", "pattern", "replacement"]
    );
    assert_eq!(required(&schema_of("search-count")), ["path", "pattern"]);
    assert_eq!(required(&schema_of("search-files")), ["path", "pattern"]);
    assert_eq!(required(&schema_of("list-files")), ["path"]);
    assert!(required(&schema_of("list-file-types")).is_empty());
}

#[tokio::test]
async fn test_properties_are_camel_case() {
    let schema = schema_of("search");
    let properties = schema["properties"].as_object().expect("properties");

    for name in [
        "fixedStrings",
        "caseSensitive",
        "fileTypeNot",
        "maxResults",
        "contextLines",
        "additionalPatterns",
        "jsonOutput",
        "noIgnore",
        "sortBy",
        "maxCharacters",
    ] {
        assert!(properties.contains_key(name), "missing property {name}");
    }
    assert!(!properties.contains_key("fixed_strings"));

    let count = schema_of("search-count");
    assert!(count["properties"].get("countMode").is_some());
    assert!(count["properties"].get("includeZero").is_some());
}

#[tokio::test]
async fn test_field_descriptions_are_published() {
    let schema = schema_of("list-files");
    let path = &schema["properties"]["path"];

    assert!(
        path.get("description").and_then(|v| v.as_str()).is_some(),
        "path has no description: {path}"
    );
}
