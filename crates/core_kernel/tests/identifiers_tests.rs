//! Unit tests for principals and generated identifiers

use core_kernel::{Principal, RegistryEventId};
use std::collections::HashSet;
use uuid::Uuid;

mod principal_tests {
    use super::*;

    #[test]
    fn test_from_str_and_string_agree() {
        let a = Principal::from("STUSER1");
        let b = Principal::from("STUSER1".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_principal_is_allowed() {
        let principal = Principal::new("");
        assert_eq!(principal.as_str(), "");
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(Principal::from("stuser1"), Principal::from("STUSER1"));
    }

    #[test]
    fn test_hash_set_dedup() {
        let mut set = HashSet::new();
        set.insert(Principal::from("STUSER1"));
        set.insert(Principal::from("STUSER1"));
        set.insert(Principal::from("STUSER2"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Principal::from("STADMIN111")).unwrap();
        assert_eq!(json, "\"STADMIN111\"");

        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back.into_inner(), "STADMIN111");
    }
}

mod event_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(RegistryEventId::new(), RegistryEventId::new());
    }

    #[test]
    fn test_prefix() {
        assert_eq!(RegistryEventId::prefix(), "EVT");
        assert!(RegistryEventId::new().to_string().starts_with("EVT-"));
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: RegistryEventId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("EVT-not-a-uuid".parse::<RegistryEventId>().is_err());
    }

    #[test]
    fn test_v7_ids_are_time_ordered() {
        let first = RegistryEventId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let second = RegistryEventId::new_v7();
        let a: Uuid = first.into();
        let b: Uuid = second.into();
        assert!(a < b);
    }
}
