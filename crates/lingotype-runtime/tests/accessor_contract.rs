#![forbid(unsafe_code)]

//! Accessor contract tests.
//!
//! 1. Inside a scope initialized with `c`, access yields `c`
//! 2. After `set_lang(c2)`, the next pass yields `c2` whatever the start value
//! 3. Unknown codes raise ValidationError and never mutate
//! 4. Development mode without a scope always raises ConfigurationError
//! 5. Production mode without a scope yields PRIMARY and an inert setter

use lingotype_runtime::{
    BuildMode, ConfigurationError, LanguageCode, LanguageContext, LanguageState, access,
};
use proptest::prelude::*;

fn any_code() -> impl Strategy<Value = LanguageCode> {
    prop::sample::select(LanguageCode::ALL.to_vec())
}

fn any_mode() -> impl Strategy<Value = BuildMode> {
    prop::sample::select(vec![BuildMode::Development, BuildMode::Production])
}

/// Run one render pass of `state` and return what a consumer reads.
fn read_in_pass(cx: &LanguageContext, state: &LanguageState, mode: BuildMode) -> LanguageCode {
    let _scope = cx.provide(state);
    access(cx, mode).expect("scope present").lang
}

proptest! {
    #[test]
    fn initial_value_is_observed(code in any_code(), mode in any_mode()) {
        let cx = LanguageContext::new();
        let state = LanguageState::new(code);
        prop_assert_eq!(read_in_pass(&cx, &state, mode), code);
    }

    #[test]
    fn write_is_observed_next_pass(c1 in any_code(), c2 in any_code(), mode in any_mode()) {
        let cx = LanguageContext::new();
        let state = LanguageState::new(c1);
        {
            let _scope = cx.provide(&state);
            let access = access(&cx, mode).expect("scope present");
            access.set_lang.set(c2);
        }
        prop_assert_eq!(read_in_pass(&cx, &state, mode), c2);
    }

    #[test]
    fn invalid_codes_never_mutate(start in any_code(), raw in "[a-z]{1,3}(-[a-z]{2})?") {
        prop_assume!(raw.parse::<LanguageCode>().is_err());
        let cx = LanguageContext::new();
        let state = LanguageState::new(start);
        let version = state.version();
        {
            let _scope = cx.provide(&state);
            let access = access(&cx, BuildMode::Development).expect("scope present");
            let err = access.set_lang.set_str(&raw).unwrap_err();
            prop_assert_eq!(err.value(), raw.as_str());
        }
        prop_assert_eq!(state.current(), start);
        prop_assert_eq!(state.version(), version);
    }
}

#[test]
fn development_without_scope_always_fails() {
    let cx = LanguageContext::new();
    for _ in 0..3 {
        assert!(matches!(
            access(&cx, BuildMode::Development),
            Err(ConfigurationError::MissingScope { .. })
        ));
    }
}

#[test]
fn production_without_scope_is_inert() {
    let cx = LanguageContext::new();
    for code in LanguageCode::ALL {
        let fallback = access(&cx, BuildMode::Production).expect("fallback");
        assert_eq!(fallback.lang, LanguageCode::PRIMARY);
        fallback.set_lang.set(code);
        assert_eq!(
            access(&cx, BuildMode::Production).expect("fallback").lang,
            LanguageCode::PRIMARY
        );
    }
}

#[test]
fn scope_exit_restores_missing_state() {
    let cx = LanguageContext::new();
    let state = LanguageState::new(LanguageCode::Ja);
    {
        let _scope = cx.provide(&state);
        assert!(access(&cx, BuildMode::Development).is_ok());
    }
    assert!(access(&cx, BuildMode::Development).is_err());
}
