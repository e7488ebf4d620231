use std::collections::BTreeMap;
use std::path::Path;

/// A named reference snippet used as grounding context for prompts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub identifier: String,
    pub content: String,
}

impl CorpusEntry {
    pub fn new(identifier: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            content: content.into(),
        }
    }

    /// Case-insensitive substring match on identifier or content
    fn matches(&self, needle: &str) -> bool {
        self.identifier.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
    }
}

/// Static reference corpus of code snippets
///
/// # Invariants
/// - Built once at startup and never mutated afterwards
/// - Identifiers are unique (later entries with the same identifier replace
///   earlier ones at construction time)
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: BTreeMap<String, CorpusEntry>,
}

impl Corpus {
    /// Creates a corpus from a list of entries
    pub fn new(entries: impl IntoIterator<Item = CorpusEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.identifier.clone(), entry))
            .collect();

        Self { entries }
    }

    /// The Deluge samples shipped with the service
    pub fn builtin() -> Self {
        Self::new([
            CorpusEntry::new("user_management.dg", USER_MANAGEMENT_DG),
            CorpusEntry::new("rental_processing.dg", RENTAL_PROCESSING_DG),
        ])
    }

    /// Loads every regular file in `dir` as an entry keyed by file name
    ///
    /// Files that are not valid UTF-8 are skipped.
    pub fn from_dir(dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let mut entries = Vec::new();

        for item in std::fs::read_dir(dir.as_ref())? {
            let item = item?;
            if !item.file_type()?.is_file() {
                continue;
            }

            let identifier = item.file_name().to_string_lossy().into_owned();
            match std::fs::read_to_string(item.path()) {
                Ok(content) => entries.push(CorpusEntry::new(identifier, content)),
                Err(e) => {
                    tracing::warn!(file = %identifier, error = %e, "Skipping unreadable corpus file");
                }
            }
        }

        Ok(Self::new(entries))
    }

    /// Returns the entries whose identifier or content contains `query`,
    /// ignoring case
    ///
    /// No ranking is applied. An empty result is not an error.
    pub fn search(&self, query: &str) -> BTreeMap<&str, &str> {
        let needle = query.to_lowercase();

        self.entries
            .values()
            .filter(|entry| entry.matches(&needle))
            .map(|entry| (entry.identifier.as_str(), entry.content.as_str()))
            .collect()
    }

    pub fn get(&self, identifier: &str) -> Option<&CorpusEntry> {
        self.entries.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const USER_MANAGEMENT_DG: &str = r#"
// User Management Module
userList = zoho.creator.getRecords("your_app", "Users", "Status == 'Active'", 1, 100);
for each user in userList {
  // Process each user
  if(user.get("Role") == "Admin") {
    // Admin-specific logic
    sendEmail(user.get("Email"), "Admin Report", "Your weekly admin report is ready");
  }
}
"#;

const RENTAL_PROCESSING_DG: &str = r#"
// Rental Processing Module
function processRental(rentalID) {
  rentalInfo = zoho.creator.getRecordById("rental_app", "Rentals", rentalID);
  if(rentalInfo.get("Status") == "Pending") {
    // Update status
    updateMap = Map();
    updateMap.put("Status", "Approved");
    updateMap.put("ProcessedDate", zoho.currentdate);
    updateResponse = zoho.creator.updateRecord("rental_app", "Rentals", rentalID, updateMap);
    return updateResponse;
  }
  return "Rental already processed";
}
"#;
