//! Shared fixtures for integration tests

use sarif_order_core::model::{
    ArtifactLocation, FailureLevel, Location, Message, PhysicalLocation, Region, Run, SarifLog,
    SarifResult, Tool, ToolComponent,
};

/// A finding for `rule_id` at `line` of `uri`
#[allow(dead_code)]
pub fn finding(rule_id: &str, uri: &str, line: i64) -> SarifResult {
    SarifResult {
        rule_id: Some(rule_id.to_string()),
        level: FailureLevel::Error,
        message: Message::text(format!("{} violated", rule_id)),
        locations: Some(vec![location(uri, line)]),
        ..SarifResult::default()
    }
}

/// A physical location pointing at a single line
#[allow(dead_code)]
pub fn location(uri: &str, line: i64) -> Location {
    Location {
        physical_location: Some(PhysicalLocation {
            artifact_location: Some(ArtifactLocation::from_uri(uri)),
            region: Some(Region::line(line)),
            ..PhysicalLocation::default()
        }),
        ..Location::default()
    }
}

/// A run of `tool` holding `results`
#[allow(dead_code)]
pub fn run(tool: &str, results: Vec<SarifResult>) -> Run {
    Run {
        tool: Tool {
            driver: ToolComponent::named(tool),
            ..Tool::default()
        },
        results: Some(results),
        ..Run::default()
    }
}

/// A single-run log
#[allow(dead_code)]
pub fn log(tool: &str, results: Vec<SarifResult>) -> SarifLog {
    SarifLog {
        runs: Some(vec![run(tool, results)]),
        ..SarifLog::default()
    }
}

/// A small but realistic ESLint log as SARIF text
#[allow(dead_code)]
pub const ESLINT_LOG: &str = r#"{
  "$schema": "https://json.schemastore.org/sarif-2.1.0.json",
  "version": "2.1.0",
  "runs": [
    {
      "tool": {
        "driver": {
          "name": "ESLint",
          "informationUri": "https://eslint.org",
          "rules": [
            {
              "id": "no-unused-vars",
              "shortDescription": { "text": "Disallow unused variables" },
              "helpUri": "https://eslint.org/docs/rules/no-unused-vars",
              "properties": { "category": "Variables", "tags": ["maintainability"] }
            }
          ]
        }
      },
      "artifacts": [
        { "location": { "uri": "file:///src/app.js" } }
      ],
      "results": [
        {
          "level": "error",
          "message": { "text": "'x' is assigned a value but never used." },
          "locations": [
            {
              "physicalLocation": {
                "artifactLocation": { "uri": "file:///src/app.js", "index": 0 },
                "region": { "startLine": 3, "startColumn": 7 }
              }
            }
          ],
          "ruleId": "no-unused-vars",
          "ruleIndex": 0
        }
      ]
    }
  ]
}"#;
