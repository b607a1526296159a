//! Activated customer group set.
//!
//! Group ids are stored in configuration as a comma separated list
//! (`"2,3"`). The list is parsed once into an [`ActivatedGroups`] set, which
//! always contains [`CustomerGroupId::NOT_LOGGED_IN`].

use std::collections::HashSet;

use super::id::CustomerGroupId;

/// Customer groups the gate treats as activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivatedGroups(HashSet<CustomerGroupId>);

impl ActivatedGroups {
    /// Build the set from explicit ids, adding the not-logged-in group.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = CustomerGroupId>) -> Self {
        let mut set: HashSet<CustomerGroupId> = ids.into_iter().collect();
        set.insert(CustomerGroupId::NOT_LOGGED_IN);
        Self(set)
    }

    /// Whether `group_id` is activated.
    #[must_use]
    pub fn contains(&self, group_id: CustomerGroupId) -> bool {
        self.0.contains(&group_id)
    }

    /// Number of activated groups, the not-logged-in group included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the not-logged-in group is a member.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Activated ids in ascending order.
    #[must_use]
    pub fn sorted(&self) -> Vec<CustomerGroupId> {
        let mut ids: Vec<_> = self.0.iter().copied().collect();
        ids.sort_by_key(CustomerGroupId::as_i32);
        ids
    }
}

impl Default for ActivatedGroups {
    fn default() -> Self {
        Self::from_ids([])
    }
}

/// Result of parsing a configured group list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGroupList {
    /// Activated groups, not-logged-in included.
    pub groups: ActivatedGroups,
    /// Tokens that were not integers. They never match a group.
    pub rejected: Vec<String>,
}

/// Parse a comma separated group id list.
///
/// Blank tokens are skipped, so an empty value yields only the not-logged-in
/// group. Non-numeric tokens are collected in [`ParsedGroupList::rejected`].
#[must_use]
pub fn parse_group_list(raw: &str) -> ParsedGroupList {
    let mut ids = Vec::new();
    let mut rejected = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<CustomerGroupId>() {
            Ok(id) => ids.push(id),
            Err(_) => rejected.push(token.to_string()),
        }
    }

    ParsedGroupList {
        groups: ActivatedGroups::from_ids(ids),
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[i32]) -> Vec<CustomerGroupId> {
        values.iter().copied().map(CustomerGroupId::new).collect()
    }

    #[test]
    fn test_empty_value_yields_only_not_logged_in() {
        let parsed = parse_group_list("");
        assert_eq!(parsed.groups.sorted(), ids(&[0]));
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_list_always_includes_not_logged_in() {
        let parsed = parse_group_list("2,3");
        assert_eq!(parsed.groups.sorted(), ids(&[0, 2, 3]));
        assert!(parsed.groups.contains(CustomerGroupId::NOT_LOGGED_IN));
        assert!(!parsed.groups.contains(CustomerGroupId::new(4)));
    }

    #[test]
    fn test_whitespace_and_blank_tokens() {
        let parsed = parse_group_list(" 2 , ,3,");
        assert_eq!(parsed.groups.sorted(), ids(&[0, 2, 3]));
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_non_numeric_tokens_are_rejected() {
        let parsed = parse_group_list("2, x,3");
        assert_eq!(parsed.groups.sorted(), ids(&[0, 2, 3]));
        assert_eq!(parsed.rejected, vec!["x".to_string()]);
    }

    #[test]
    fn test_explicit_zero_is_not_duplicated() {
        let parsed = parse_group_list("0,1");
        assert_eq!(parsed.groups.len(), 2);
        assert!(!parsed.groups.is_empty());
    }
}
