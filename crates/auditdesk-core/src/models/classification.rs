//! Data classification tags and the rules that apply them to fields.

use serde::{Deserialize, Serialize};

labeled_enum! {
    /// Sensitivity tag. Ordered from least to most sensitive.
    #[derive(PartialOrd, Ord)]
    pub enum DataClassification {
        Public => ("public", "Public"),
        Internal => ("internal", "Internal"),
        Restricted => ("restricted", "Restricted"),
    }
}

labeled_enum! {
    /// How a classified field is presented to roles outside the allow list.
    pub enum MaskingStrategy {
        None => ("none", "None"),
        Partial => ("partial", "Partial"),
        Full => ("full", "Full"),
    }
}

/// Classification applied to one field of one resource kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataClassificationRule {
    pub id: String,
    pub resource: String,
    pub field: String,
    pub classification: DataClassification,
    /// Roles allowed to see the unmasked value. Empty means every role.
    #[serde(default)]
    pub visible_to_roles: Vec<String>,
    pub masking: MaskingStrategy,
    pub description: String,
}

impl DataClassificationRule {
    /// Whether `role_id` may see the field unmasked.
    ///
    /// Public fields are visible to everyone regardless of the allow list.
    pub fn allows_role(&self, role_id: &str) -> bool {
        self.classification == DataClassification::Public
            || self.visible_to_roles.is_empty()
            || self.visible_to_roles.iter().any(|r| r == role_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(classification: DataClassification, roles: &[&str]) -> DataClassificationRule {
        DataClassificationRule {
            id: "DCR-T".into(),
            resource: "inspection".into(),
            field: "inspector_notes".into(),
            classification,
            visible_to_roles: roles.iter().map(|r| r.to_string()).collect(),
            masking: MaskingStrategy::Full,
            description: String::new(),
        }
    }

    #[test]
    fn classification_orders_by_sensitivity() {
        assert!(DataClassification::Public < DataClassification::Internal);
        assert!(DataClassification::Internal < DataClassification::Restricted);
    }

    #[test]
    fn restricted_rule_checks_allow_list() {
        let r = rule(DataClassification::Restricted, &["role-auditor"]);
        assert!(r.allows_role("role-auditor"));
        assert!(!r.allows_role("role-inspector"));
    }

    #[test]
    fn public_rule_ignores_allow_list() {
        let r = rule(DataClassification::Public, &["role-auditor"]);
        assert!(r.allows_role("role-inspector"));
    }

    #[test]
    fn parses_label_and_wire_form() {
        assert_eq!(
            "Restricted".parse::<DataClassification>().unwrap(),
            DataClassification::Restricted
        );
        assert_eq!(
            "internal".parse::<DataClassification>().unwrap(),
            DataClassification::Internal
        );
        assert!("secret".parse::<DataClassification>().is_err());
    }
}
