// Profile sanitizer — turns an internal author record into a public one.
//
// For a minor author:
// 1. Display name is first name plus last initial
// 2. Avatar is an emoji derived from the id
// 3. Age is shown only as "Youth Author"
//
// For an adult the full name and photo are used and the label is "Author".
// Email and date of birth are never copied, whichever branch runs.

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::{AgeCategory, AuthorProfile, SanitizedAuthorProfile};
use crate::sanitize::emoji::{self, AvatarPool};
use crate::sanitize::names;

/// Build the public-safe view of a single author.
pub fn sanitize_profile(profile: &AuthorProfile, pool: &AvatarPool) -> SanitizedAuthorProfile {
    let (display_name, avatar) = if profile.is_minor {
        (
            names::truncate_name(&profile.first_name, &profile.last_name),
            emoji::assign_emoji(&profile.id, pool).to_string(),
        )
    } else {
        let avatar = profile
            .profile_photo
            .as_deref()
            .filter(|photo| !photo.is_empty())
            .unwrap_or(pool.default_avatar.as_str())
            .to_string();
        (
            names::full_name(&profile.first_name, &profile.last_name),
            avatar,
        )
    };

    SanitizedAuthorProfile {
        id: profile.id.clone(),
        display_name,
        avatar,
        age_display: age_category(None, profile.is_minor),
        is_minor: profile.is_minor,
        pen_name: profile.pen_name.clone(),
    }
}

/// Sanitize a batch, one output per input, in input order.
pub fn sanitize_profiles(
    profiles: &[AuthorProfile],
    pool: &AvatarPool,
) -> Vec<SanitizedAuthorProfile> {
    let sanitized: Vec<SanitizedAuthorProfile> = profiles
        .iter()
        .map(|p| sanitize_profile(p, pool))
        .collect();

    debug!(
        total = sanitized.len(),
        minors = sanitized.iter().filter(|p| p.is_minor).count(),
        "Sanitized author profiles"
    );

    sanitized
}

/// Parse either a single profile object or an array of profiles.
pub fn parse_profiles(json: &str) -> Result<Vec<AuthorProfile>> {
    let value: serde_json::Value =
        serde_json::from_str(json).context("Input is not valid JSON")?;
    if value.is_array() {
        serde_json::from_value(value).context("Failed to parse author profile array")
    } else {
        let single: AuthorProfile =
            serde_json::from_value(value).context("Failed to parse author profile")?;
        Ok(vec![single])
    }
}

/// Age label for display. The birth date is accepted so call sites show it
/// was considered, but only `is_minor` decides the label.
pub fn age_category(_date_of_birth: Option<&str>, is_minor: bool) -> AgeCategory {
    if is_minor {
        AgeCategory::YouthAuthor
    } else {
        AgeCategory::Author
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthorId;

    fn minor() -> AuthorProfile {
        AuthorProfile {
            id: AuthorId::Number(12),
            first_name: "Jonathan".to_string(),
            last_name: "Smith".to_string(),
            email: Some("jon@example.com".to_string()),
            date_of_birth: Some("2011-04-02".to_string()),
            is_minor: true,
            pen_name: None,
            profile_photo: Some("photos/jon.jpg".to_string()),
        }
    }

    #[test]
    fn test_minor_is_redacted() {
        let pool = AvatarPool::default();
        let out = sanitize_profile(&minor(), &pool);
        assert_eq!(out.id, AuthorId::Number(12));
        assert_eq!(out.display_name, "Jonathan S.");
        assert_eq!(out.avatar, emoji::assign_emoji(&AuthorId::Number(12), &pool));
        assert_eq!(out.age_display, AgeCategory::YouthAuthor);
        assert!(out.is_minor);
        assert_eq!(out.pen_name, None);
    }

    #[test]
    fn test_minor_never_gets_photo() {
        let out = sanitize_profile(&minor(), &AvatarPool::default());
        assert_ne!(out.avatar, "photos/jon.jpg");
    }

    #[test]
    fn test_adult_keeps_full_name_and_photo() {
        let mut adult = minor();
        adult.is_minor = false;
        adult.pen_name = Some("J. S. Inkwell".to_string());
        let out = sanitize_profile(&adult, &AvatarPool::default());
        assert_eq!(out.display_name, "Jonathan Smith");
        assert_eq!(out.avatar, "photos/jon.jpg");
        assert_eq!(out.age_display, AgeCategory::Author);
        assert_eq!(out.pen_name.as_deref(), Some("J. S. Inkwell"));
    }

    #[test]
    fn test_adult_without_photo_gets_default_avatar() {
        let mut adult = minor();
        adult.is_minor = false;
        adult.profile_photo = Some(String::new());
        let pool = AvatarPool::default();
        let out = sanitize_profile(&adult, &pool);
        assert_eq!(out.avatar, pool.default_avatar);
    }

    #[test]
    fn test_age_category_ignores_birth_date() {
        assert_eq!(age_category(Some("1970-01-01"), true), AgeCategory::YouthAuthor);
        assert_eq!(age_category(Some("2015-01-01"), false), AgeCategory::Author);
        assert_eq!(age_category(None, false), AgeCategory::Author);
    }

    #[test]
    fn test_parse_single_and_array() {
        let one = parse_profiles(r#"{"id": 1, "firstName": "Ada"}"#).unwrap();
        assert_eq!(one.len(), 1);
        let many = parse_profiles(r#"[{"id": 1}, {"id": "b"}]"#).unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many[1].id, AuthorId::Text("b".to_string()));
        assert!(parse_profiles("not json").is_err());
        assert!(parse_profiles(r#"{"firstName": "no id"}"#).is_err());
    }

    #[test]
    fn test_batch_of_nothing() {
        assert!(sanitize_profiles(&[], &AvatarPool::default()).is_empty());
    }
}
