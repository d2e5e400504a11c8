use oapp_config::QueryConfig;
use serde::Serialize;

/// Name of the operation sent to the server.
const OPERATION_NAME: &str = "OAppRanking";

/// Builds the GraphQL document. `OAppStats` is always requested sorted by
/// packet count, highest first; `$limit`/`$offset` only page the configs.
pub fn build_query_document(query: &QueryConfig) -> String {
    let mut doc = String::new();
    doc.push_str(&format!(
        "query {OPERATION_NAME}($limit: Int = 1000, $offset: Int = 0) {{\n"
    ));
    doc.push_str("  OAppStats(order_by: { totalPacketsReceived: desc }) {\n");
    doc.push_str("    id\n");
    doc.push_str("    totalPacketsReceived\n");
    doc.push_str("  }\n");
    doc.push_str("  OAppSecurityConfig(\n");
    if query.only_default_configs {
        doc.push_str("    where: { usesDefaultConfig: { _eq: true } }\n");
    }
    doc.push_str("    limit: $limit\n");
    doc.push_str("    offset: $offset\n");
    doc.push_str("  ) {\n");
    doc.push_str("    oappId\n");
    for field in query.config_fields.iter().filter(|f| f.as_str() != "oappId") {
        doc.push_str(&format!("    {field}\n"));
    }
    doc.push_str("  }\n");
    doc.push_str("}\n");
    doc
}

/// Variables for the `OAppSecurityConfig` page.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryVariables {
    pub limit: i32,
    pub offset: i32,
}

/// The JSON body POSTed to the endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: QueryVariables,
}

impl GraphQlRequest {
    pub fn new(query: &QueryConfig) -> Self {
        Self {
            query: build_query_document(query),
            variables: QueryVariables {
                limit: query.limit,
                offset: query.offset,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_orders_stats_descending() {
        let doc = build_query_document(&QueryConfig::default());
        assert!(doc.contains("OAppStats(order_by: { totalPacketsReceived: desc })"));
        assert!(doc.contains("totalPacketsReceived\n"));
    }

    #[test]
    fn test_document_filters_default_configs() {
        let doc = build_query_document(&QueryConfig::default());
        assert!(doc.contains("where: { usesDefaultConfig: { _eq: true } }"));
    }

    #[test]
    fn test_document_without_filter() {
        let query = QueryConfig {
            only_default_configs: false,
            ..Default::default()
        };
        let doc = build_query_document(&query);
        assert!(!doc.contains("usesDefaultConfig"));
        assert!(doc.contains("limit: $limit"));
    }

    #[test]
    fn test_document_selects_extra_fields_once() {
        let query = QueryConfig {
            config_fields: vec!["oappId".to_string(), "requiredDVNs".to_string()],
            ..Default::default()
        };
        let doc = build_query_document(&query);
        assert_eq!(doc.matches("oappId").count(), 1);
        assert!(doc.contains("    requiredDVNs\n"));
    }

    #[test]
    fn test_request_body_shape() {
        let request = GraphQlRequest::new(&QueryConfig::default());
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["variables"]["limit"], 1_000_000_000);
        assert_eq!(body["variables"]["offset"], 0);
        assert!(body["query"].as_str().unwrap().starts_with("query OAppRanking("));
    }
}
