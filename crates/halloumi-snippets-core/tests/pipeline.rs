//! End-to-end run: fetch from a mock server, generate, write, read back.

use halloumi_snippets_core::{
    SchemaFetcher, SnippetGenerator, SnippetSet, builtin_snippets, write_snippets,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SPEC: &str = r#"{
    "ResourceSpecificationVersion": "100.0.0",
    "PropertyTypes": {
        "AWS::Logs::LogGroup.Tag": {"Properties": {}},
        "Tag": {"Properties": {
            "Key": {"PrimitiveType": "String", "Required": true, "UpdateType": "Mutable"},
            "Value": {"PrimitiveType": "String", "Required": true, "UpdateType": "Mutable"}
        }}
    },
    "ResourceTypes": {
        "AWS::Logs::LogGroup": {
            "Documentation": "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-loggroup.html",
            "Properties": {
                "LogGroupName": {"PrimitiveType": "String", "Required": false, "UpdateType": "Immutable"},
                "RetentionInDays": {"PrimitiveType": "Integer", "Required": false, "UpdateType": "Mutable"},
                "Tags": {"Type": "List", "ItemType": "Tag", "Required": false, "DuplicatesAllowed": true, "UpdateType": "Mutable"}
            }
        },
        "AWS::SNS::Topic": {}
    }
}"#;

#[tokio::test]
async fn test_should_generate_snippet_file_from_remote_spec() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/CloudFormationResourceSpecification.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SPEC))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = SchemaFetcher::new(format!(
        "{}/CloudFormationResourceSpecification.json",
        server.uri()
    ))
    .expect("build fetcher");
    let schema = fetcher.fetch().await.expect("fetch spec");
    let snippets = SnippetGenerator::new(&schema).generate();

    let dir = tempfile::tempdir().expect("create temp dir");
    let out = dir.path().join("snippets").join("snippets.json");
    let written = write_snippets(&out, &snippets).expect("write snippets");
    assert_eq!(written, builtin_snippets().len() + 2);

    let parsed: SnippetSet =
        serde_json::from_str(&std::fs::read_to_string(&out).expect("read snippets"))
            .expect("parse snippets");

    let log_group = &parsed["Halloumi_AWS::Logs::LogGroup"];
    assert_eq!(log_group.prefix, "Logs::LogGroup");
    assert_eq!(log_group.description, "The AWS::Logs::LogGroup basic resource");
    assert_eq!(
        log_group.body,
        [
            "# @!attribute [rw] aws_logs_log_groups",
            "# @return [Array<Halloumi::AWS::Logs::LogGroup>] aws_logs_log_groups",
            "# @see: http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-loggroup.html",
            "resource :aws_logs_log_groups,",
            "         type: Halloumi::AWS::Logs::LogGroup,",
            "         amount: -> { amount } do |r|",
            "",
            "\t# Other properties",
            "\tr.property(:log_group_name) { \"<String>\" } # Change triggers replacement",
            "\tr.property(:retention_in_days) { 1 }",
            "\tr.property(:tags) { [",
            "\t\t{",
            "\t\t\tKey: \"<String>\",",
            "\t\t\tValue: \"<String>\",",
            "\t\t},",
            "\t\t...",
            "\t] } # Can have duplicates",
            "end",
        ]
    );

    let topic = &parsed["Halloumi_AWS::SNS::Topic"];
    assert_eq!(topic.prefix, "SNS::Topic");
    assert_eq!(topic.body.last().map(String::as_str), Some("end"));
    assert!(!topic.body.iter().any(|line| line.contains("properties")));
}
