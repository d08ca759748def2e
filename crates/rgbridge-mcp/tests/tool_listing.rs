//! Published tool set and its annotations

use rgbridge_core::ServerConfig;
use rgbridge_mcp::server::RgBridgeServer;

const EXPECTED_TOOLS: [&str; 6] = [
    "search",
    "search-and-replace",
    "search-count",
    "search-files",
    "list-files",
    "list-file-types",
];

#[tokio::test]
async fn test_public_tools_match() {
    let server = RgBridgeServer::new(ServerConfig::default());

    let tools = server.tool_router.list_all();
    let mut tool_names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    tool_names.sort_unstable();

    let mut expected = EXPECTED_TOOLS.to_vec();
    expected.sort_unstable();

    assert_eq!(tool_names, expected);
}

#[tokio::test]
async fn test_every_tool_is_read_only() {
    let server = RgBridgeServer::new(ServerConfig::default());

    for tool in server.tool_router.list_all() {
        let annotations = tool
            .annotations
            .as_ref()
            .unwrap_or_else(|| panic!("{} has no annotations", tool.name));
        assert_eq!(annotations.read_only_hint, Some(true), "{}", tool.name);
        assert_eq!(annotations.open_world_hint, Some(false), "{}", tool.name);

        let meta = tool
            .meta
            .as_ref()
            .unwrap_or_else(|| panic!("{} has no meta", tool.name));
        let safety = meta.get("safety").expect("safety meta");
        assert_eq!(safety["writes"], false, "{}", tool.name);
        assert_eq!(safety["reads"], true, "{}", tool.name);
        assert_eq!(safety["network"], false, "{}", tool.name);
    }
}

#[tokio::test]
async fn test_replace_description_says_preview() {
    let server = RgBridgeServer::new(ServerConfig::default());

    let tool = server
        .tool_router
        .list_all()
        .into_iter()
        .find(|t| t.name == "search-and-replace")
        .expect("search-and-replace listed");
    let description = tool.description.expect("description");

    assert!(description.contains("Does NOT modify files"));
}
