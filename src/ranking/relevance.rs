use crate::ranking::classifier::QueryType;

/// Chunk types considered on-topic for each query type.
///
/// `General` maps to the empty set, which disables type boosting.
pub fn relevant_types_for(query_type: QueryType) -> &'static [&'static str] {
    match query_type {
        QueryType::LegalObligation => &[
            "obligations_clause",
            "liability_clause",
            "covenant",
            "duties_section",
            "requirements",
        ],
        QueryType::LegalRights => &[
            "rights_clause",
            "permissions",
            "entitlements",
            "warranty_clause",
        ],
        QueryType::LegalTermination => &[
            "termination_clause",
            "cancellation",
            "notice_period",
            "breach_clause",
        ],
        QueryType::MedicalDiagnosis => &[
            "diagnosis",
            "assessment",
            "clinical_impression",
            "findings",
        ],
        QueryType::MedicalTreatment => &[
            "treatment_plan",
            "medication",
            "prescription",
            "care_instructions",
        ],
        QueryType::MedicalResults => &["lab_results", "test_results", "vitals", "imaging_report"],
        QueryType::FinancialRevenue => &["revenue_section", "income_statement", "sales_figures"],
        QueryType::FinancialExpenses => &[
            "expense_section",
            "cost_breakdown",
            "operating_expenses",
        ],
        QueryType::AccountingBalance => &["balance_sheet", "assets", "liabilities", "equity"],
        QueryType::Definition => &["definition", "glossary", "terminology", "overview"],
        QueryType::Procedure => &["procedure", "instructions", "steps", "workflow"],
        QueryType::General => &[],
    }
}
