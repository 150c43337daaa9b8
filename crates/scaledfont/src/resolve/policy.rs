//! Platform aliasing of the large title style.

use crate::style::StyleKey;

/// How [`StyleKey::LargeTitle`] is looked up.
///
/// Some platforms have no large title style of their own and render it as
/// a title. The policy is chosen at build time and applied to the key before
/// any table lookup, so both its lookup and its fallback follow `Title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LargeTitlePolicy {
    /// `LargeTitle` is its own style.
    #[default]
    Distinct,
    /// `LargeTitle` is looked up as `Title`.
    AliasToTitle,
}

impl LargeTitlePolicy {
    /// The policy for the build target.
    ///
    /// `AliasToTitle` on tvOS or with the `large-title-alias` feature,
    /// `Distinct` everywhere else.
    pub const PLATFORM: LargeTitlePolicy =
        if cfg!(any(target_os = "tvos", feature = "large-title-alias")) {
            LargeTitlePolicy::AliasToTitle
        } else {
            LargeTitlePolicy::Distinct
        };

    /// Returns the key that should actually be looked up.
    pub fn apply(self, key: StyleKey) -> StyleKey {
        match (self, key) {
            (LargeTitlePolicy::AliasToTitle, StyleKey::LargeTitle) => StyleKey::Title,
            _ => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_is_identity() {
        for key in StyleKey::ALL {
            assert_eq!(LargeTitlePolicy::Distinct.apply(key), key);
        }
    }

    #[test]
    fn test_alias_only_touches_large_title() {
        let policy = LargeTitlePolicy::AliasToTitle;
        assert_eq!(policy.apply(StyleKey::LargeTitle), StyleKey::Title);
        for key in StyleKey::ALL
            .into_iter()
            .filter(|k| *k != StyleKey::LargeTitle)
        {
            assert_eq!(policy.apply(key), key);
        }
    }

    #[test]
    fn test_platform_policy_matches_build_flags() {
        let expected = if cfg!(any(target_os = "tvos", feature = "large-title-alias")) {
            LargeTitlePolicy::AliasToTitle
        } else {
            LargeTitlePolicy::Distinct
        };
        assert_eq!(LargeTitlePolicy::PLATFORM, expected);
    }
}
