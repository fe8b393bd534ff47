use std::collections::BTreeMap;

/// Free-form tags: simple key/value pairs with no predefined namespace
pub type FreeformTags = BTreeMap<String, String>;

/// Defined tags, keyed by namespace then tag key
pub type DefinedTags = BTreeMap<String, BTreeMap<String, serde_json::Value>>;

wire_enum! {
    /// Sort direction of list operations
    SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

wire_enum! {
    /// Sort key shared by the project, job, job run and model list operations
    ListSortBy {
        TimeCreated => "timeCreated",
        DisplayName => "displayName",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WireEnum;

    #[test]
    fn test_unknown_value_is_kept_and_round_trips() {
        let order: SortOrder = serde_json::from_str("\"RANDOM\"").unwrap();
        assert_eq!(order, SortOrder::UnknownValue("RANDOM".to_string()));
        assert!(!order.is_known());
        assert_eq!(serde_json::to_string(&order).unwrap(), "\"RANDOM\"");
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("desc".parse::<SortOrder>().is_err());
        assert_eq!(ListSortBy::DisplayName.to_string(), "displayName");
    }
}
