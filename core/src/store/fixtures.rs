//! Seed dataset for the prototype. Everything the views show is derived from
//! these records; nothing ever writes back here.

use super::model::{Alert, Report, ReportStatus, Severity};

pub fn seed_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            title: "KSA VAT Rate Increase to 20%".to_string(),
            description: "The Kingdom of Saudi Arabia has announced an increase in VAT rate \
                          from 15% to 20%, effective Q2 2025. All registered businesses must \
                          update their accounting systems and customer-facing price displays \
                          by March 31, 2025."
                .to_string(),
            source: "ZATCA (Zakat, Tax and Customs Authority)".to_string(),
            severity: Severity::High,
            action_required: true,
            created_at: "2025-01-10T14:30:00Z".to_string(),
        },
        Alert {
            id: 2,
            title: "UAE Central Bank Updates AML Guidelines".to_string(),
            description: "The UAE Central Bank has released updated Anti-Money Laundering (AML) \
                          guidelines for FinTech companies. Enhanced customer due diligence \
                          procedures are now mandatory for all digital payment platforms."
                .to_string(),
            source: "UAE Central Bank".to_string(),
            severity: Severity::Medium,
            action_required: true,
            created_at: "2025-01-08T09:15:00Z".to_string(),
        },
        Alert {
            id: 3,
            title: "Bahrain PDPL Amendment Notification".to_string(),
            description: "The Personal Data Protection Law (PDPL) in Bahrain has been amended \
                          to include stricter consent requirements for data processing. \
                          Companies have 90 days to update their privacy policies and consent \
                          mechanisms."
                .to_string(),
            source: "Bahrain Personal Data Protection Authority".to_string(),
            severity: Severity::Medium,
            action_required: true,
            created_at: "2025-01-05T11:00:00Z".to_string(),
        },
        Alert {
            id: 4,
            title: "Qatar Financial Services Licensing Update".to_string(),
            description: "Qatar Financial Centre has updated its licensing requirements for \
                          payment service providers. New applicants must provide enhanced \
                          operational risk assessments."
                .to_string(),
            source: "Qatar Financial Centre Regulatory Authority".to_string(),
            severity: Severity::Low,
            action_required: false,
            created_at: "2025-01-02T16:45:00Z".to_string(),
        },
    ]
}

pub fn seed_reports() -> Vec<Report> {
    vec![
        Report {
            id: 1,
            alert_id: 1,
            title: "KSA VAT Rate Increase Compliance Report".to_string(),
            status: ReportStatus::Pending,
            created_at: "2025-01-11T10:00:00Z".to_string(),
            content_markdown: KSA_VAT_REPORT_MD.to_string(),
        },
        Report {
            id: 2,
            alert_id: 2,
            title: "UAE AML Guidelines Compliance Report".to_string(),
            status: ReportStatus::Approved,
            created_at: "2025-01-09T14:30:00Z".to_string(),
            content_markdown: UAE_AML_REPORT_MD.to_string(),
        },
        Report {
            id: 3,
            alert_id: 3,
            title: "Bahrain PDPL Amendment Compliance Report".to_string(),
            status: ReportStatus::Draft,
            created_at: "2025-01-06T08:20:00Z".to_string(),
            content_markdown: BAHRAIN_PDPL_REPORT_MD.to_string(),
        },
    ]
}

const KSA_VAT_REPORT_MD: &str = r#"# KSA VAT Rate Increase to 20% - Compliance Report

## Executive Summary

The Kingdom of Saudi Arabia has announced a VAT rate increase from 15% to 20%, effective Q2 2025. This report outlines the compliance requirements and recommended actions for your organization.

## Key Changes

### VAT Rate Adjustment
- **Current Rate:** 15%
- **New Rate:** 20%
- **Effective Date:** April 1, 2025
- **Compliance Deadline:** March 31, 2025

## Compliance Requirements

### Immediate Actions Required

1. **System Updates**
   - Update accounting software to reflect 20% VAT rate
   - Modify invoice generation templates
   - Update e-commerce platform tax calculations

2. **Legal & Documentation**
   - Update standard terms and conditions
   - Revise customer contracts for recurring services
   - Prepare customer notification templates

3. **Price Adjustments**
   - Review pricing strategy for all products/services
   - Update price lists, catalogs and point-of-sale displays

### Timeline

- **January 15-31, 2025:** Internal assessment and planning
- **February 1-28, 2025:** System updates and testing
- **March 1-31, 2025:** Full implementation and staff training
- **April 1, 2025:** Go-live date

## Regulatory References

- ZATCA Circular No. 2025/01
- VAT Implementing Regulations Article 15(2)
- Tax Invoice Requirements under VAT Law

## Risk Assessment

- **High Risk:** Failure to update systems by deadline may result in incorrect tax collection
- **Medium Risk:** Delayed customer communication could impact customer relationships
- **Low Risk:** Minor operational disruptions during transition period

---

**Report Generated:** January 11, 2025
**Review Required By:** January 20, 2025
**Compliance Deadline:** March 31, 2025"#;

const UAE_AML_REPORT_MD: &str = r#"# UAE Central Bank AML Guidelines Update - Compliance Report

## Executive Summary

The UAE Central Bank has released updated Anti-Money Laundering guidelines specifically targeting FinTech companies. This report analyzes the new requirements and provides an implementation roadmap.

## New Requirements

### Enhanced Customer Due Diligence (EDD)

The updated guidelines mandate enhanced due diligence for:
- All digital payment platforms
- Peer-to-peer payment services
- Cryptocurrency exchange platforms
- Digital wallet providers

### Key Changes

1. **Identity Verification**
   - Biometric verification now mandatory for transactions over AED 10,000
   - Real-time identity verification for high-risk customers

2. **Transaction Monitoring**
   - 24/7 automated transaction monitoring required
   - Enhanced reporting to Financial Intelligence Unit (FIU)

3. **Record Keeping**
   - Minimum 7-year retention of customer data
   - Audit trail for all EDD procedures

## Implementation Plan

- **Phase 1 (Weeks 1-2):** Assessment and gap analysis
- **Phase 2 (Weeks 3-8):** System upgrades
- **Phase 3 (Weeks 9-10):** Training and certification
- **Phase 4 (Weeks 11-12):** Phased go-live and regulatory reporting

## Regulatory Timeline

- **Compliance Deadline:** June 30, 2025
- **First Audit:** Q3 2025

---

**Report Status:** Approved
**Approved By:** Compliance Officer
**Date:** January 9, 2025"#;

const BAHRAIN_PDPL_REPORT_MD: &str = r#"# Bahrain PDPL Amendment - Compliance Report (DRAFT)

## Overview

The Personal Data Protection Law amendment introduces stricter consent requirements. This draft report outlines preliminary compliance measures.

## Key Amendments

### Consent Requirements
- Explicit consent now required for all data processing
- Granular consent options must be provided
- Easy withdrawal mechanisms mandatory

### Implementation Timeline
- **Day 1-30:** Privacy policy updates
- **Day 31-60:** Consent mechanism implementation
- **Day 61-90:** Full compliance and testing

## Preliminary Recommendations

1. Update privacy notices
2. Implement consent management platform
3. Train customer service teams
4. Conduct data inventory

---

**Status:** Draft - Pending Legal Review"#;
