use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Coarse intent of a user query, used to pick which chunk types to favour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryType {
    LegalObligation,
    LegalRights,
    LegalTermination,
    MedicalDiagnosis,
    MedicalTreatment,
    MedicalResults,
    FinancialRevenue,
    FinancialExpenses,
    AccountingBalance,
    Definition,
    Procedure,
    General,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LegalObligation => "LEGAL_OBLIGATION",
            Self::LegalRights => "LEGAL_RIGHTS",
            Self::LegalTermination => "LEGAL_TERMINATION",
            Self::MedicalDiagnosis => "MEDICAL_DIAGNOSIS",
            Self::MedicalTreatment => "MEDICAL_TREATMENT",
            Self::MedicalResults => "MEDICAL_RESULTS",
            Self::FinancialRevenue => "FINANCIAL_REVENUE",
            Self::FinancialExpenses => "FINANCIAL_EXPENSES",
            Self::AccountingBalance => "ACCOUNTING_BALANCE",
            Self::Definition => "DEFINITION",
            Self::Procedure => "PROCEDURE",
            Self::General => "GENERAL",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single pattern → query type mapping.
pub struct Rule {
    pub pattern: Regex,
    pub query_type: QueryType,
}

/// A domain gate and the rules it guards.
///
/// The gate admits a query when the document-type hint equals `hint` or the
/// lower-cased query matches `keywords`.
pub struct RuleGroup {
    pub hint: &'static str,
    pub keywords: Regex,
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    pub fn admits(&self, query: &str, hint: Option<&str>) -> bool {
        hint.is_some_and(|h| h == self.hint) || self.keywords.is_match(query)
    }

    pub fn first_match(&self, query: &str) -> Option<QueryType> {
        first_match(&self.rules, query)
    }
}

fn rule(pattern: &str, query_type: QueryType) -> Rule {
    Rule {
        pattern: Regex::new(pattern).expect("invalid classifier pattern"),
        query_type,
    }
}

fn group(hint: &'static str, keywords: &str, rules: Vec<Rule>) -> RuleGroup {
    RuleGroup {
        hint,
        keywords: Regex::new(keywords).expect("invalid classifier gate"),
        rules,
    }
}

fn first_match(rules: &[Rule], query: &str) -> Option<QueryType> {
    rules
        .iter()
        .find(|r| r.pattern.is_match(query))
        .map(|r| r.query_type)
}

/// Domain gates in priority order.
pub static DOMAIN_GROUPS: LazyLock<Vec<RuleGroup>> = LazyLock::new(|| {
    vec![
        group(
            "legal",
            r"contract|agreement|lease|clause",
            vec![
                rule(
                    r"obligat|must|shall|required|responsib|dut(y|ies)",
                    QueryType::LegalObligation,
                ),
                rule(r"right|entitle|permit|allowed", QueryType::LegalRights),
                rule(
                    r"terminat|cancel|end (the|this|my)|exit|break",
                    QueryType::LegalTermination,
                ),
            ],
        ),
        group(
            "medical",
            r"patient|medical|health|doctor|diagnos",
            vec![
                rule(r"diagnos|condition|disease|symptom", QueryType::MedicalDiagnosis),
                rule(
                    r"treatment|medication|therap|prescri|dosage|dose",
                    QueryType::MedicalTreatment,
                ),
                rule(r"result|test|lab|finding|level", QueryType::MedicalResults),
            ],
        ),
        group(
            "financial",
            r"financial|finance|portfolio",
            vec![
                rule(r"revenue|income|sales|earning", QueryType::FinancialRevenue),
                rule(r"expense|cost|spending|expenditure", QueryType::FinancialExpenses),
            ],
        ),
        group(
            "accounting",
            r"accounting|balance|ledger",
            vec![rule(r"balance|asset|liabilit|equity", QueryType::AccountingBalance)],
        ),
    ]
});

/// Rules tried after the domain gates, regardless of topic.
pub static GENERIC_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        rule(r"what (is|does|means?)|define|definition|explain", QueryType::Definition),
        rule(r"how (do|to|can)|steps|procedure|process", QueryType::Procedure),
    ]
});

/// Classify a query into a [`QueryType`].
///
/// Only the first domain group whose gate admits the query is consulted. When
/// none of that group's rules match, classification continues with the
/// generic rules and never enters a later domain group. A legal-gated query
/// such as "what is this contract about" therefore ends up as `Definition`.
pub fn classify(query: &str, document_type_hint: Option<&str>) -> QueryType {
    let q = query.to_lowercase();
    let hint = document_type_hint
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty());

    DOMAIN_GROUPS
        .iter()
        .find(|g| g.admits(&q, hint.as_deref()))
        .and_then(|g| g.first_match(&q))
        .or_else(|| first_match(&GENERIC_RULES, &q))
        .unwrap_or(QueryType::General)
}
