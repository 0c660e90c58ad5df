//! Property tests for the matcher algebra and the version comparator.

use audience_match::{evaluate, semver, Condition, MatchType, UserContext};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Well-formed version strings: a 1-3 segment numeric core, optionally a
/// prerelease identifier, optionally build metadata.
fn version_strategy() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec(0u32..1000, 1..=3),
        proptest::option::of("[a-z][a-z0-9]{0,7}"),
        proptest::option::of("[a-z0-9]{1,8}"),
    )
        .prop_map(|(core, pre_release, build)| {
            let mut version = core
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(".");
            if let Some(pre) = pre_release {
                version.push('-');
                version.push_str(&pre);
            }
            if let Some(build) = build {
                version.push('+');
                version.push_str(&build);
            }
            version
        })
}

proptest! {
    // the composite holds its defining identity whenever neither leg errors
    #[test]
    fn ge_is_lt_or_exact(value in -1.0e9f64..1.0e9, attribute in -1.0e9f64..1.0e9) {
        let user = UserContext::new().with_attribute("n", attribute);
        let ge = evaluate(&Condition::new("n", MatchType::Ge, value), &user).unwrap();
        let lt = evaluate(&Condition::new("n", MatchType::Lt, value), &user).unwrap();
        let exact = evaluate(&Condition::new("n", MatchType::Exact, value), &user).unwrap();
        prop_assert_eq!(ge, lt || exact);
    }

    #[test]
    fn le_is_gt_or_exact(value in -1.0e9f64..1.0e9, attribute in -1.0e9f64..1.0e9) {
        let user = UserContext::new().with_attribute("n", attribute);
        let le = evaluate(&Condition::new("n", MatchType::Le, value), &user).unwrap();
        let gt = evaluate(&Condition::new("n", MatchType::Gt, value), &user).unwrap();
        let exact = evaluate(&Condition::new("n", MatchType::Exact, value), &user).unwrap();
        prop_assert_eq!(le, gt || exact);
    }

    // pure predicates: the same inputs always produce the same verdict
    #[test]
    fn evaluation_is_idempotent(value in -1.0e9f64..1.0e9, attribute in -1.0e9f64..1.0e9) {
        let condition = Condition::new("n", MatchType::Ge, value);
        let user = UserContext::new().with_attribute("n", attribute);
        let first = evaluate(&condition, &user);
        let second = evaluate(&condition, &user);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn well_formed_versions_always_split(version in version_strategy()) {
        prop_assert!(semver::VersionParts::parse(&version).is_ok());
    }

    #[test]
    fn comparator_is_reflexive(version in version_strategy()) {
        prop_assert_eq!(semver::compare(&version, &version).unwrap(), Ordering::Equal);
    }

    // the semver wrappers partition the three-way result consistently
    #[test]
    fn semver_verdicts_partition(target in version_strategy(), attribute in version_strategy()) {
        let user = UserContext::new().with_attribute("v", attribute.as_str());
        let of = |mt: MatchType| {
            evaluate(&Condition::new("v", mt, target.as_str()), &user).unwrap()
        };
        let eq = of(MatchType::SemverEq);
        let gt = of(MatchType::SemverGt);
        let lt = of(MatchType::SemverLt);
        // exactly one of lt/eq/gt holds
        prop_assert_eq!(u8::from(eq) + u8::from(gt) + u8::from(lt), 1);
        prop_assert_eq!(of(MatchType::SemverGe), eq || gt);
        prop_assert_eq!(of(MatchType::SemverLe), eq || lt);
    }
}
