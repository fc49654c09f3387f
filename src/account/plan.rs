use std::collections::{BTreeSet, HashMap};

use crate::account::{Account, Plan};
use crate::error::AppError;

/// Per-plan limits applied before any provider call. A `None` tone set
/// means every configured tone is allowed.
#[derive(Debug, Clone)]
pub struct PlanRules {
    pub max_text_chars: usize,
    pub allowed_tones: Option<BTreeSet<String>>,
    pub metered: bool,
}

#[derive(Debug, Clone)]
pub struct PlanTable {
    rules: HashMap<Plan, PlanRules>,
}

impl PlanTable {
    pub fn new(rules: HashMap<Plan, PlanRules>) -> Self {
        Self { rules }
    }

    pub fn rules(&self, plan: Plan) -> &PlanRules {
        &self.rules[&plan]
    }

    /// Check a request against the caller's plan. Text length is measured on
    /// the text as submitted, before currency normalization expands it.
    pub fn validate(&self, account: &Account, text: &str, tone: &str) -> Result<(), AppError> {
        let rules = self.rules(account.plan);

        if text.is_empty() {
            return Err(AppError::BadRequest("Text cannot be empty".into()));
        }

        let chars = text.chars().count();
        if chars > rules.max_text_chars {
            return Err(AppError::PlanViolation(format!(
                "Text is {} characters, the {} plan allows {}",
                chars,
                account.plan.as_str(),
                rules.max_text_chars
            )));
        }

        if let Some(allowed) = &rules.allowed_tones {
            if !allowed.contains(tone) {
                return Err(AppError::PlanViolation(format!(
                    "Voice '{}' requires a plan upgrade",
                    tone
                )));
            }
        }

        if rules.metered && account.credits == 0 {
            return Err(AppError::PlanViolation(
                "No credits remaining on this plan".into(),
            ));
        }

        Ok(())
    }
}

impl Default for PlanTable {
    fn default() -> Self {
        let tones = |names: &[&str]| -> Option<BTreeSet<String>> {
            Some(names.iter().map(|s| s.to_string()).collect())
        };

        let mut rules = HashMap::new();
        rules.insert(
            Plan::Free,
            PlanRules {
                max_text_chars: 300,
                allowed_tones: tones(&["neutral"]),
                metered: true,
            },
        );
        rules.insert(
            Plan::Pro,
            PlanRules {
                max_text_chars: 600,
                allowed_tones: tones(&["neutral", "friendly", "serious"]),
                metered: true,
            },
        );
        rules.insert(
            Plan::ProMax,
            PlanRules {
                max_text_chars: 1000,
                allowed_tones: None,
                metered: false,
            },
        );
        Self::new(rules)
    }
}
