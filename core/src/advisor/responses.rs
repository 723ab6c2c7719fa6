use rand::seq::SliceRandom;

use crate::error::{CoreError, CoreResult};

use super::model::{Answer, Citation};

/// Question-answering capability behind the advisor view. The two shipped
/// implementations are fixture-backed; a real retrieval pipeline implements
/// the same trait.
pub trait Advisor {
    fn ask(&self, question: &str) -> CoreResult<Answer>;
}

/// Picks uniformly at random from a fixed set of fully cited sample answers,
/// ignoring the question entirely.
pub struct CannedAdvisor;

impl Advisor for CannedAdvisor {
    fn ask(&self, _question: &str) -> CoreResult<Answer> {
        let responses = canned_answers();
        responses
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| CoreError::InvalidInput("canned answer set is empty".to_string()))
    }
}

pub fn canned_answers() -> Vec<Answer> {
    vec![
        Answer {
            text: "Based on UAE Central Bank regulations [1], Buy Now Pay Later (BNPL) \
                   services in the UAE must be licensed as consumer credit providers [2]. \
                   According to the Consumer Protection Regulation [3], BNPL providers must \
                   clearly disclose all fees, interest rates (if any), and payment terms to \
                   consumers before they enter into any agreement."
                .to_string(),
            citations: vec![
                citation(
                    "1",
                    "UAE Central Bank Regulation 43/2022 - Consumer Credit",
                    Some("Article 5, Page 12"),
                ),
                citation(
                    "2",
                    "UAE Financial Services License Requirements",
                    Some("Section 3.4"),
                ),
                citation(
                    "3",
                    "Consumer Protection Regulation 2020",
                    Some("Chapter 2, Article 8"),
                ),
            ],
        },
        Answer {
            text: "For KSA, the Saudi Central Bank (SAMA) requires BNPL providers to obtain a \
                   FinTech license [1]. The service must comply with Sharia principles if \
                   marketing to the Saudi market [2]. Additionally, BNPL providers must \
                   implement robust credit assessment procedures [3] and cannot charge \
                   interest rates exceeding the maximum threshold set by SAMA."
                .to_string(),
            citations: vec![
                citation("1", "SAMA FinTech Licensing Guidelines 2024", Some("Section 4")),
                citation(
                    "2",
                    "Sharia Compliance Requirements for Financial Services",
                    Some("Chapter 7"),
                ),
                citation("3", "Credit Risk Management Framework", Some("Article 12")),
            ],
        },
        Answer {
            text: "According to Qatar Financial Centre regulations [1], BNPL services fall \
                   under the category of consumer lending and require appropriate \
                   authorization. Data protection is critical - you must comply with Qatar's \
                   Data Protection Law [2] when collecting and processing customer \
                   information. Consumer disclosure requirements [3] mandate transparent \
                   communication about payment schedules and any associated costs."
                .to_string(),
            citations: vec![
                citation(
                    "1",
                    "QFC Regulatory Authority - Lending Regulations",
                    Some("Part 3, Section 2"),
                ),
                citation("2", "Qatar Data Protection Law No. 13 of 2016", Some("Article 6")),
                citation(
                    "3",
                    "Consumer Financial Services Disclosure Requirements",
                    Some("Schedule 2"),
                ),
            ],
        },
    ]
}

/// Routes the question through a small keyword-keyed knowledge base: the first
/// key contained in the lowercased question wins. Unmatched questions get a
/// generic fallback rather than an error.
pub struct KeywordAdvisor;

const KNOWLEDGE_BASE: &[(&str, &str, &str)] = &[
    (
        "bnpl",
        "SAMA Circular 123 - BNPL Services",
        "SAMA Circular 123 states that Buy Now, Pay Later (BNPL) services must: \
         1) Clearly disclose all fees and terms before purchase; \
         2) Comply with consumer protection standards; \
         3) Maintain adequate capital reserves; \
         4) Report all transactions to SAMA within 24 hours.",
    ),
    (
        "data residency",
        "CBUAE Rulebook - Data Residency",
        "The CBUAE rulebook requires all Personally Identifiable Information (PII) data to \
         be stored within UAE borders unless explicitly approved by the regulator. Data \
         residency compliance is mandatory for all fintech operators.",
    ),
    (
        "kyc",
        "GCC KYC Requirements",
        "Know Your Customer (KYC) requirements mandate that financial institutions verify \
         customer identity through government-issued ID, biometric data, and address \
         verification. Re-verification is required annually or when significant changes \
         are detected.",
    ),
    (
        "aml",
        "GCC AML Regulations",
        "Anti-Money Laundering (AML) regulations require transaction monitoring, Suspicious \
         Activity Reporting (SAR), and Customer Due Diligence (CDD) at account opening. \
         Threshold: transactions above AED 500,000 require enhanced due diligence.",
    ),
];

impl Advisor for KeywordAdvisor {
    fn ask(&self, question: &str) -> CoreResult<Answer> {
        let lowered = question.to_lowercase();
        for (key, source, context) in KNOWLEDGE_BASE {
            if lowered.contains(key) {
                return Ok(Answer {
                    text: format!("{} [1]", context),
                    citations: vec![citation("1", source, None)],
                });
            }
        }
        Ok(Answer {
            text: "No specific compliance context found for this query. Please refine your \
                   question or contact the compliance team."
                .to_string(),
            citations: Vec::new(),
        })
    }
}

fn citation(id: &str, source: &str, page: Option<&str>) -> Citation {
    Citation {
        id: id.to_string(),
        source: source.to_string(),
        page: page.map(str::to_string),
    }
}
