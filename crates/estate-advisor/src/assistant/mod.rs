//! Keyword-driven property assistant.
//!
//! Queries are lower-cased and matched against topic triggers in a fixed order. When a
//! topic is triggered but none of its subtopics match, matching falls through to the next
//! topic, so "current rates in F-7" reaches the rates answer even though "current"
//! contains "rent".

mod responses;
pub mod router;

pub use router::assistant_router;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Buying,
    Renting,
    Investment,
    Rates,
    Trends,
    General,
}

impl Topic {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Buying => "Buying",
            Self::Renting => "Renting",
            Self::Investment => "Investment",
            Self::Rates => "Rates",
            Self::Trends => "Market Trends",
            Self::General => "General",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantReply {
    pub topic: Topic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtopic: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestedQuery {
    pub id: &'static str,
    pub text: &'static str,
    pub category: Topic,
}

struct Rule {
    topic: Topic,
    triggers: &'static [&'static str],
    answers: &'static [Answer],
}

struct Answer {
    key: &'static str,
    /// Empty matches unconditionally.
    keywords: &'static [&'static str],
    text: &'static str,
}

static RULES: &[Rule] = &[
    Rule {
        topic: Topic::Buying,
        triggers: &["buy", "buying", "purchase"],
        answers: &[
            Answer {
                key: "process",
                keywords: &["process", "how to"],
                text: responses::BUYING_PROCESS,
            },
            Answer {
                key: "tips",
                keywords: &["tips", "check", "verify"],
                text: responses::BUYING_TIPS,
            },
            Answer {
                key: "finance",
                keywords: &["finance", "loan", "mortgage"],
                text: responses::BUYING_FINANCE,
            },
        ],
    },
    Rule {
        topic: Topic::Renting,
        triggers: &["rent", "renting", "lease"],
        answers: &[
            Answer {
                key: "process",
                keywords: &["process", "how to"],
                text: responses::RENTING_PROCESS,
            },
            Answer {
                key: "tips",
                keywords: &["tips", "advice"],
                text: responses::RENTING_TIPS,
            },
            Answer {
                key: "documents",
                keywords: &["document", "paper"],
                text: responses::RENTING_DOCUMENTS,
            },
        ],
    },
    Rule {
        topic: Topic::Investment,
        triggers: &["invest", "return", "profit"],
        answers: &[
            Answer {
                key: "advice",
                keywords: &["advice", "should"],
                text: responses::INVESTMENT_ADVICE,
            },
            Answer {
                key: "returns",
                keywords: &["return", "profit", "yield"],
                text: responses::INVESTMENT_RETURNS,
            },
            Answer {
                key: "hotspots",
                keywords: &["hotspot", "area", "location"],
                text: responses::INVESTMENT_HOTSPOTS,
            },
        ],
    },
    Rule {
        topic: Topic::Rates,
        triggers: &["rate", "price", "cost"],
        answers: &[
            Answer {
                key: "f_sectors",
                keywords: &["f-", "f sector"],
                text: responses::RATES_F_SECTORS,
            },
            Answer {
                key: "e_sectors",
                keywords: &["e-", "e sector"],
                text: responses::RATES_E_SECTORS,
            },
            Answer {
                key: "bahria_town",
                keywords: &["bahria"],
                text: responses::RATES_BAHRIA_TOWN,
            },
            Answer {
                key: "dha",
                keywords: &["dha"],
                text: responses::RATES_DHA,
            },
        ],
    },
    Rule {
        topic: Topic::Trends,
        triggers: &["trend", "market"],
        answers: &[
            Answer {
                key: "future",
                keywords: &["future", "upcoming", "development"],
                text: responses::TRENDS_FUTURE,
            },
            Answer {
                key: "current",
                keywords: &[],
                text: responses::TRENDS_CURRENT,
            },
        ],
    },
];

static SUGGESTED_QUERIES: [SuggestedQuery; 10] = [
    SuggestedQuery {
        id: "q1",
        text: "What is the process of buying a property in Islamabad?",
        category: Topic::Buying,
    },
    SuggestedQuery {
        id: "q2",
        text: "What documents do I need for renting a property?",
        category: Topic::Renting,
    },
    SuggestedQuery {
        id: "q3",
        text: "Which areas in Islamabad are good for investment?",
        category: Topic::Investment,
    },
    SuggestedQuery {
        id: "q4",
        text: "What are the current property rates in F-7?",
        category: Topic::Rates,
    },
    SuggestedQuery {
        id: "q5",
        text: "What are the current market trends in Islamabad?",
        category: Topic::Trends,
    },
    SuggestedQuery {
        id: "q6",
        text: "How can I verify property documents before I buy?",
        category: Topic::Buying,
    },
    SuggestedQuery {
        id: "q7",
        text: "Any tips for renting in Islamabad?",
        category: Topic::Renting,
    },
    SuggestedQuery {
        id: "q8",
        text: "What is the expected return on property investment in DHA?",
        category: Topic::Investment,
    },
    SuggestedQuery {
        id: "q9",
        text: "What are the property rates in Bahria Town?",
        category: Topic::Rates,
    },
    SuggestedQuery {
        id: "q10",
        text: "What upcoming developments will shape the property market?",
        category: Topic::Trends,
    },
];

/// Rule-based assistant answering common buying, renting, and market questions.
pub struct PropertyAssistant;

impl PropertyAssistant {
    pub fn reply(query: &str) -> AssistantReply {
        let query = query.to_lowercase();
        let contains_any = |words: &[&str]| words.iter().any(|word| query.contains(word));

        RULES
            .iter()
            .filter(|rule| contains_any(rule.triggers))
            .find_map(|rule| {
                rule.answers
                    .iter()
                    .find(|answer| answer.keywords.is_empty() || contains_any(answer.keywords))
                    .map(|answer| AssistantReply {
                        topic: rule.topic,
                        subtopic: Some(answer.key),
                        text: answer.text,
                    })
            })
            .unwrap_or(AssistantReply {
                topic: Topic::General,
                subtopic: None,
                text: responses::FALLBACK,
            })
    }

    pub fn suggestions() -> &'static [SuggestedQuery] {
        &SUGGESTED_QUERIES
    }
}
