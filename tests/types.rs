// ABOUTME: Integration tests for validated domain types.
// ABOUTME: Tests service names, versions, and stored image reference parsing.

use rollout::types::*;

mod stored_image_tests {
    use super::*;

    #[test]
    fn stored_reference_yields_middle_label() {
        assert_eq!(stored_container_name(":app.web.2"), "web");
        assert_eq!(stored_container_name(":a.db.1"), "db");
    }

    #[test]
    fn large_push_index_is_accepted() {
        assert_eq!(stored_container_name(":app.web.123456789"), "web");
    }

    #[test]
    fn external_reference_passes_through() {
        assert_eq!(stored_container_name("nginx:latest"), "nginx:latest");
        assert_eq!(
            stored_container_name("ghcr.io/org/repo:v1"),
            "ghcr.io/org/repo:v1"
        );
    }

    #[test]
    fn too_few_labels_pass_through() {
        assert_eq!(stored_container_name(":app.web"), ":app.web");
        assert_eq!(stored_container_name(":app"), ":app");
    }

    #[test]
    fn too_many_labels_pass_through() {
        assert_eq!(stored_container_name(":app.web.2.extra"), ":app.web.2.extra");
    }

    #[test]
    fn uppercase_labels_pass_through() {
        assert_eq!(stored_container_name(":App.web.2"), ":App.web.2");
        assert_eq!(stored_container_name(":app.Web.2"), ":app.Web.2");
    }

    #[test]
    fn digits_in_labels_pass_through() {
        // Only pure lowercase labels mark a stored reference; "web2" does not.
        assert_eq!(stored_container_name(":app.web2.1"), ":app.web2.1");
    }

    #[test]
    fn non_numeric_index_passes_through() {
        assert_eq!(stored_container_name(":app.web.x2"), ":app.web.x2");
        assert_eq!(stored_container_name(":app.web."), ":app.web.");
    }

    #[test]
    fn empty_labels_pass_through() {
        assert_eq!(stored_container_name(":app..2"), ":app..2");
        assert_eq!(stored_container_name(":.web.2"), ":.web.2");
    }

    #[test]
    fn empty_reference_passes_through() {
        assert_eq!(stored_container_name(""), "");
    }
}

mod stored_image_properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any reference in the stored shape yields its middle label.
        #[test]
        fn stored_shape_yields_container_label(
            service in "[a-z]{1,8}",
            container in "[a-z]{1,8}",
            index in 0u64..=999_999,
        ) {
            let reference = format!(":{service}.{container}.{index}");
            prop_assert_eq!(stored_container_name(&reference), container.as_str());
        }

        /// The result is either the input itself or the middle of its three
        /// labels; nothing else ever comes back.
        #[test]
        fn result_is_input_or_middle_label(reference in ".*") {
            let name = stored_container_name(&reference);
            if name != reference {
                let labels: Vec<&str> = reference
                    .strip_prefix(':')
                    .unwrap()
                    .split('.')
                    .collect();
                prop_assert_eq!(labels.len(), 3);
                prop_assert_eq!(name, labels[1]);
            }
        }
    }
}

mod service_name_tests {
    use super::*;

    #[test]
    fn valid_dns_name() {
        let name = ServiceName::new("my-service").unwrap();
        assert_eq!(name.as_str(), "my-service");
    }

    #[test]
    fn valid_with_digits() {
        assert!(ServiceName::new("app2").is_ok());
        assert!(ServiceName::new("my-app-123").is_ok());
    }

    #[test]
    fn empty_returns_error() {
        assert!(ServiceName::new("").is_err());
    }

    #[test]
    fn too_long_returns_error() {
        let long_name = "a".repeat(64);
        assert!(ServiceName::new(&long_name).is_err());
    }

    #[test]
    fn valid_63_chars() {
        let name = "a".repeat(63);
        assert!(ServiceName::new(&name).is_ok());
    }

    #[test]
    fn starts_with_hyphen_returns_error() {
        assert!(ServiceName::new("-service").is_err());
    }

    #[test]
    fn ends_with_hyphen_returns_error() {
        assert!(ServiceName::new("service-").is_err());
    }

    #[test]
    fn uppercase_returns_error() {
        assert!(ServiceName::new("MyService").is_err());
    }

    #[test]
    fn invalid_chars_return_error() {
        assert!(ServiceName::new("my_service").is_err());
        assert!(ServiceName::new("my.service").is_err());
        assert!(ServiceName::new("my service").is_err());
    }
}

mod version_tests {
    use super::*;

    #[test]
    fn versions_order_numerically() {
        assert!(Version::from(2) < Version::from(10));
        assert_eq!(Version::from(7), Version::new(7));
    }

    #[test]
    fn display_is_the_bare_number() {
        assert_eq!(Version::from(42).to_string(), "42");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&Version::from(7)).unwrap();
        assert_eq!(json, "7");

        let version: Version = serde_json::from_str("7").unwrap();
        assert_eq!(version.get(), 7);
    }
}
