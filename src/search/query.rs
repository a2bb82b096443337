//! Query parsing, scope selection and the substring matching rule.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{CustomerRecord, FollowUpRecord, JobFollowUp, JobRecord, WorkerRecord};
use crate::search::error::SearchResult;
use crate::search::highlight;

/// Aggregation scope.
///
/// Quick is the type-ahead mode: small fixed result cap and reduced source
/// scope. Full is the dedicated results-page mode: unbounded, exhaustive
/// per-source scan. Both run through the same aggregation routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    Quick,
    #[default]
    Full,
}

impl SearchScope {
    pub fn is_quick(&self) -> bool {
        matches!(self, SearchScope::Quick)
    }
}

/// A parsed free-text query.
///
/// Records match when the case-folded query is a substring of ANY field in a
/// fixed per-type field list. OR-across-fields, substring (not token),
/// case-insensitive; no fuzzy matching, no relevance score.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    raw: String,
    folded: String,
    pattern: Regex,
}

impl SearchQuery {
    /// Parse a raw query string. Empty or whitespace-only input yields
    /// `None`, which short-circuits the whole aggregation.
    pub fn parse(raw: &str) -> SearchResult<Option<Self>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let pattern = highlight::build_pattern(trimmed)?;

        Ok(Some(Self {
            raw: trimmed.to_string(),
            folded: trimmed.to_lowercase(),
            pattern,
        }))
    }

    /// The trimmed query as the caller typed it.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive substring test against a single field.
    pub fn matches(&self, field: &str) -> bool {
        field.to_lowercase().contains(&self.folded)
    }

    fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        fields.into_iter().any(|field| self.matches(field))
    }

    /// Customer field list: name, code, street, block, zip, city.
    pub fn matches_customer(&self, customer: &CustomerRecord) -> bool {
        self.matches_any([
            customer.name.as_str(),
            customer.code.as_str(),
            customer.street.as_str(),
            customer.block.as_str(),
            customer.zip_code.as_str(),
            customer.city.as_str(),
        ])
    }

    /// Worker field list: full name, email, id.
    pub fn matches_worker(&self, worker: &WorkerRecord) -> bool {
        self.matches_any([
            worker.full_name.as_str(),
            worker.email.as_str(),
            worker.id.as_str(),
        ])
    }

    /// Job field list: name, job number, customer name.
    pub fn matches_job(&self, job: &JobRecord) -> bool {
        self.matches_any([
            job.job_name.as_str(),
            job.job_id.as_str(),
            job.customer_name.as_str(),
        ])
    }

    /// Follow-up field list: title, notes, kind, status.
    pub fn matches_follow_up(&self, follow_up: &FollowUpRecord) -> bool {
        self.matches_any([
            follow_up.title.as_str(),
            follow_up.notes.as_str(),
            follow_up.kind.as_str(),
            follow_up.status.as_str(),
        ])
    }

    /// Same field list as [`matches_follow_up`], for job-nested entries.
    ///
    /// [`matches_follow_up`]: SearchQuery::matches_follow_up
    pub fn matches_job_follow_up(&self, follow_up: &JobFollowUp) -> bool {
        self.matches_any([
            follow_up.title.as_str(),
            follow_up.notes.as_str(),
            follow_up.kind.as_str(),
            follow_up.status.as_str(),
        ])
    }

    /// Wrap matches of this query in `value` with highlight markers.
    pub fn highlight(&self, value: &str) -> String {
        highlight::highlight(value, &self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(raw: &str) -> SearchQuery {
        SearchQuery::parse(raw).unwrap().unwrap()
    }

    #[test]
    fn test_empty_and_whitespace_queries_parse_to_none() {
        assert!(SearchQuery::parse("").unwrap().is_none());
        assert!(SearchQuery::parse("   \t ").unwrap().is_none());
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(query("  acme  ").raw(), "acme");
    }

    #[test]
    fn test_substring_matching_is_case_insensitive() {
        let q = query("ACME");
        assert!(q.matches("Acme Facilities"));
        assert!(!q.matches("Harbor Marine"));
    }

    #[test]
    fn test_customer_matches_across_fields() {
        let q = query("harbor");
        let customer = CustomerRecord {
            code: "C010".to_string(),
            name: "Marine Services".to_string(),
            street: "5 Harbor Rd".to_string(),
            ..Default::default()
        };
        assert!(q.matches_customer(&customer));

        let q = query("c010");
        assert!(q.matches_customer(&customer));

        let q = query("nomatch");
        assert!(!q.matches_customer(&customer));
    }

    #[test]
    fn test_customer_phone_and_email_are_not_match_fields() {
        let customer = CustomerRecord {
            code: "C011".to_string(),
            name: "Acme".to_string(),
            phone: "5551234".to_string(),
            email: "ops@acme.test".to_string(),
            ..Default::default()
        };
        assert!(!query("5551234").matches_customer(&customer));
        assert!(!query("ops@acme.test").matches_customer(&customer));
    }

    #[test]
    fn test_worker_matches_id() {
        let worker = WorkerRecord {
            id: "w-7781".to_string(),
            full_name: "Dana Reyes".to_string(),
            ..Default::default()
        };
        assert!(query("7781").matches_worker(&worker));
    }

    #[test]
    fn test_follow_up_matches_status() {
        let follow_up = FollowUpRecord {
            id: "f-1".to_string(),
            title: "Warranty check".to_string(),
            status: "overdue".to_string(),
            ..Default::default()
        };
        assert!(query("overdue").matches_follow_up(&follow_up));
    }
}
