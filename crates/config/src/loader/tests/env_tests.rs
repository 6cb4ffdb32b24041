//! Environment variable tests for the credential loader.
//!
//! Responsibilities:
//! - Test reading each recognized variable into the credential set.
//! - Test precedence of builder values over environment values.
//! - Test that empty values are kept as present.

use secrecy::ExposeSecret;

use super::CredentialEnvGuard;
use crate::loader::builder::CredentialLoader;
use crate::types::CredentialName;

#[test]
fn test_from_env_reads_all_recognized_variables() {
    let _env = CredentialEnvGuard::new();

    unsafe {
        for name in CredentialName::ALL {
            std::env::set_var(name.env_key(), format!("value-of-{}", name));
        }
    }

    let set = CredentialLoader::new().from_env().build();

    for name in CredentialName::ALL {
        assert_eq!(
            set.get(name).map(|s| s.expose_secret().to_string()),
            Some(format!("value-of-{}", name))
        );
    }
}

#[test]
fn test_from_env_without_variables_is_all_absent() {
    let _env = CredentialEnvGuard::new();

    let set = CredentialLoader::new().from_env().build();

    assert_eq!(set.present().count(), 0);
}

#[test]
fn test_empty_env_value_is_present() {
    let _env = CredentialEnvGuard::new();

    unsafe {
        std::env::set_var("API_SECRET", "");
    }

    let set = CredentialLoader::new().from_env().build();

    assert_eq!(
        set.get(CredentialName::ApiSecret).map(|s| s.expose_secret()),
        Some("")
    );
}

#[test]
fn test_builder_value_overrides_env_regardless_of_order() {
    let _env = CredentialEnvGuard::new();

    unsafe {
        std::env::set_var("OPENAI_KEY", "from-env");
    }

    let before = CredentialLoader::new()
        .with_credential(CredentialName::OpenaiKey, "from-builder")
        .from_env()
        .build();
    let after = CredentialLoader::new()
        .from_env()
        .with_credential(CredentialName::OpenaiKey, "from-builder")
        .build();

    for set in [before, after] {
        assert_eq!(
            set.openai_key().map(|s| s.expose_secret()),
            Some("from-builder")
        );
    }
}

#[test]
fn test_from_env_snapshot_is_not_refreshed() {
    let _env = CredentialEnvGuard::new();

    unsafe {
        std::env::set_var("API_KEY", "first");
    }
    let set = CredentialLoader::new().from_env().build();

    unsafe {
        std::env::set_var("API_KEY", "second");
    }

    // The built set is immutable; later env changes are not observed
    assert_eq!(set.api_key().map(|s| s.expose_secret()), Some("first"));
}

#[test]
fn test_unrecognized_variables_are_ignored() {
    let _env = CredentialEnvGuard::new();

    temp_env::with_vars(
        [
            ("TWITTER_APP_KEY", Some("unrelated")),
            ("GEMINI_API_KEY", Some("unrelated")),
        ],
        || {
            let set = CredentialLoader::new().from_env().build();
            assert_eq!(set.present().count(), 0);
        },
    );
}
