//! Question tables.

use serde::Serialize;

/// What a step asks about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Age,
    Type,
    Color,
    Budget,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct StepOption {
    pub id: &'static str,
    pub label_key: &'static str,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct StepSpec {
    pub kind: StepKind,
    pub question_key: &'static str,
    pub options: &'static [StepOption],
}

impl StepSpec {
    pub fn option(&self, id: &str) -> Option<&'static StepOption> {
        self.options.iter().find(|o| o.id == id)
    }
}

const fn opt(id: &'static str, label_key: &'static str) -> StepOption {
    StepOption { id, label_key }
}

pub const STEPS: [StepSpec; 4] = [
    StepSpec {
        kind: StepKind::Age,
        question_key: "gift.questionAge",
        options: &[
            opt("0-6", "age.0-6"),
            opt("6-12", "age.6-12"),
            opt("1-3", "age.1-3"),
            opt("3+", "age.3+"),
        ],
    },
    StepSpec {
        kind: StepKind::Type,
        question_key: "gift.questionType",
        options: &[
            opt("doudous", "productType.doudous"),
            opt("plush", "productType.plush"),
            opt("puppets", "productType.puppets"),
            opt("music-boxes", "productType.musicBoxes"),
        ],
    },
    StepSpec {
        kind: StepKind::Color,
        question_key: "gift.questionColor",
        options: &[
            opt("roz", "color.roz"),
            opt("albastru", "color.albastru"),
            opt("bej", "color.bej"),
            opt("multicolor", "color.multicolor"),
        ],
    },
    StepSpec {
        kind: StepKind::Budget,
        question_key: "gift.questionBudget",
        options: &[
            opt("under-20", "budget.under20"),
            opt("20-40", "budget.20-40"),
            opt("40-60", "budget.40-60"),
            opt("over-60", "budget.over60"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_tables_serialize_with_wire_keys() {
        let json = serde_json::to_value(STEPS[3]).unwrap();
        assert_eq!(json["kind"], "budget");
        assert_eq!(json["question_key"], "gift.questionBudget");
        assert_eq!(json["options"][0]["id"], "under-20");
        assert_eq!(serde_json::to_string(&StepKind::Type).unwrap(), "\"type\"");
    }

    #[test]
    fn steps_are_in_question_order() {
        let kinds: Vec<StepKind> = STEPS.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StepKind::Age, StepKind::Type, StepKind::Color, StepKind::Budget]);
        assert!(STEPS.iter().all(|s| s.options.len() == 4));
    }

    #[test]
    fn option_lookup_is_per_step() {
        assert!(STEPS[0].option("3+").is_some());
        assert!(STEPS[0].option("roz").is_none());
        assert_eq!(
            STEPS[1].option("music-boxes").map(|o| o.label_key),
            Some("productType.musicBoxes")
        );
    }
}
