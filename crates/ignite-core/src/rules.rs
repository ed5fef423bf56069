//! Cross-field compatibility rules
//!
//! Two independent defenses keep invalid combinations out:
//! - [`state_choices_for`] narrows what the resolver offers in the first place
//! - [`validate`] rejects anything that still slips through, e.g. a reused
//!   saved configuration

use crate::config::{
    Choice, CssFramework, Framework, FrameworkFamily, ProjectConfiguration, ProjectType,
    StateManagement,
};
use thiserror::Error;

/// A broken compatibility rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error(
        "incompatible state management for Vue: {state} cannot be used with {framework}. Use Pinia or Vuex instead."
    )]
    VueStateManagement {
        framework: Framework,
        state: StateManagement,
    },

    #[error(
        "incompatible state management for React: {state} cannot be used with {framework}. Use Redux or Zustand instead."
    )]
    ReactStateManagement {
        framework: Framework,
        state: StateManagement,
    },

    #[error("CSS framework not applicable to backend: {css} cannot be used with {framework}")]
    BackendCss {
        framework: Framework,
        css: CssFramework,
    },

    #[error("state management not applicable to backend: {state} cannot be used with {framework}")]
    BackendStateManagement {
        framework: Framework,
        state: StateManagement,
    },

    /// A state library outside the set offered for the framework's family
    #[error("{state} is not supported with {framework}")]
    UnsupportedStateManagement {
        framework: Framework,
        state: StateManagement,
    },

    #[error("incompatible state management for the full-stack app: {state}. Use Redux or Zustand instead.")]
    FullstackStateManagement { state: StateManagement },

    #[error("{} is not a {} framework", framework.id(), project_type.id())]
    FrameworkProjectType {
        framework: Framework,
        project_type: ProjectType,
    },
}

/// State libraries offered for a framework in the frontend branch
pub fn state_choices_for(framework: Framework) -> Vec<StateManagement> {
    match framework.family() {
        FrameworkFamily::React => vec![
            StateManagement::None,
            StateManagement::Redux,
            StateManagement::Zustand,
            StateManagement::Mobx,
        ],
        FrameworkFamily::Vue => vec![
            StateManagement::None,
            StateManagement::Pinia,
            StateManagement::Vuex,
        ],
        FrameworkFamily::Backend | FrameworkFamily::Fullstack => vec![StateManagement::None],
    }
}

/// State libraries offered for the fullstack app's React frontend
pub const FULLSTACK_STATE_CHOICES: [StateManagement; 3] = [
    StateManagement::Redux,
    StateManagement::Zustand,
    StateManagement::None,
];

/// Check a configuration against every rule in order; the first violation wins
pub fn validate(config: &ProjectConfiguration) -> Result<(), Violation> {
    let framework = config.framework;
    let state = config.state_management;
    let css = config.css_framework;

    match framework.family() {
        FrameworkFamily::Vue
            if matches!(state, StateManagement::Redux | StateManagement::Zustand) =>
        {
            return Err(Violation::VueStateManagement { framework, state });
        }
        FrameworkFamily::React
            if matches!(state, StateManagement::Pinia | StateManagement::Vuex) =>
        {
            return Err(Violation::ReactStateManagement { framework, state });
        }
        FrameworkFamily::Backend if css != CssFramework::None => {
            return Err(Violation::BackendCss { framework, css });
        }
        _ => {}
    }

    match framework.family() {
        FrameworkFamily::Backend if state != StateManagement::None => {
            return Err(Violation::BackendStateManagement { framework, state });
        }
        FrameworkFamily::Fullstack if !FULLSTACK_STATE_CHOICES.contains(&state) => {
            return Err(Violation::FullstackStateManagement { state });
        }
        FrameworkFamily::React | FrameworkFamily::Vue
            if !state_choices_for(framework).contains(&state) =>
        {
            return Err(Violation::UnsupportedStateManagement { framework, state });
        }
        _ => {}
    }

    if framework.project_type() != config.project_type {
        return Err(Violation::FrameworkProjectType {
            framework,
            project_type: config.project_type,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::config;

    const ALL_STATES: [StateManagement; 6] = [
        StateManagement::None,
        StateManagement::Redux,
        StateManagement::Zustand,
        StateManagement::Mobx,
        StateManagement::Pinia,
        StateManagement::Vuex,
    ];

    const ALL_FRAMEWORKS: [Framework; 7] = [
        Framework::React,
        Framework::NextJs,
        Framework::Vue,
        Framework::Nuxt,
        Framework::Express,
        Framework::Fastify,
        Framework::Fullstack,
    ];

    #[test]
    fn test_react_redux_tailwind_is_valid() {
        let mut cfg = config(Framework::React);
        cfg.css_framework = CssFramework::Tailwind;
        cfg.state_management = StateManagement::Redux;
        cfg.install_router = true;
        assert_eq!(validate(&cfg), Ok(()));
    }

    #[test]
    fn test_vue_with_redux_is_rejected() {
        let mut cfg = config(Framework::Vue);
        cfg.state_management = StateManagement::Redux;
        let err = validate(&cfg).unwrap_err();
        assert!(matches!(err, Violation::VueStateManagement { .. }));
        assert!(err.to_string().contains("incompatible state management for Vue"));
    }

    #[test]
    fn test_nextjs_with_pinia_is_rejected() {
        let mut cfg = config(Framework::NextJs);
        cfg.state_management = StateManagement::Pinia;
        assert!(matches!(
            validate(&cfg),
            Err(Violation::ReactStateManagement { .. })
        ));
    }

    #[test]
    fn test_backend_with_css_is_rejected() {
        let mut cfg = config(Framework::Express);
        cfg.css_framework = CssFramework::Tailwind;
        let err = validate(&cfg).unwrap_err();
        assert!(err.to_string().contains("CSS framework not applicable to backend"));
    }

    #[test]
    fn test_backend_css_reported_before_backend_state() {
        let mut cfg = config(Framework::Fastify);
        cfg.css_framework = CssFramework::Bootstrap;
        cfg.state_management = StateManagement::Redux;
        assert!(matches!(validate(&cfg), Err(Violation::BackendCss { .. })));
    }

    #[test]
    fn test_framework_must_match_project_type() {
        let mut cfg = config(Framework::Express);
        cfg.project_type = ProjectType::Frontend;
        assert!(matches!(
            validate(&cfg),
            Err(Violation::FrameworkProjectType { .. })
        ));
    }

    #[test]
    fn test_fullstack_rejects_mobx() {
        let mut cfg = config(Framework::Fullstack);
        cfg.state_management = StateManagement::Mobx;
        assert!(matches!(
            validate(&cfg),
            Err(Violation::FullstackStateManagement { .. })
        ));
    }

    #[test]
    fn test_vue_family_rejects_mobx() {
        for framework in [Framework::Vue, Framework::Nuxt] {
            let mut cfg = config(framework);
            cfg.state_management = StateManagement::Mobx;
            assert_eq!(
                validate(&cfg),
                Err(Violation::UnsupportedStateManagement {
                    framework,
                    state: StateManagement::Mobx,
                })
            );
        }
    }

    #[test]
    fn test_accepted_frontend_state_is_always_offered() {
        for framework in Framework::FRONTEND {
            for state in ALL_STATES {
                let mut cfg = config(framework);
                cfg.state_management = state;
                assert_eq!(
                    validate(&cfg).is_ok(),
                    state_choices_for(framework).contains(&state),
                    "{framework:?} + {state:?}"
                );
            }
        }
    }

    #[test]
    fn test_offered_choices_always_validate() {
        for framework in Framework::FRONTEND {
            for state in state_choices_for(framework) {
                let mut cfg = config(framework);
                cfg.state_management = state;
                assert_eq!(validate(&cfg), Ok(()), "{framework:?} + {state:?}");
            }
        }
    }

    #[test]
    fn test_react_family_never_offers_vue_stores() {
        for framework in [Framework::React, Framework::NextJs] {
            let choices = state_choices_for(framework);
            assert!(!choices.contains(&StateManagement::Pinia));
            assert!(!choices.contains(&StateManagement::Vuex));
        }
    }

    #[test]
    fn test_vue_family_never_offers_react_stores() {
        for framework in [Framework::Vue, Framework::Nuxt] {
            let choices = state_choices_for(framework);
            for excluded in [
                StateManagement::Redux,
                StateManagement::Zustand,
                StateManagement::Mobx,
            ] {
                assert!(!choices.contains(&excluded));
            }
        }
    }

    #[test]
    fn test_other_frameworks_only_offer_none() {
        for framework in [Framework::Express, Framework::Fastify, Framework::Fullstack] {
            assert_eq!(state_choices_for(framework), vec![StateManagement::None]);
        }
    }

    #[test]
    fn test_validation_is_total_and_idempotent() {
        for framework in ALL_FRAMEWORKS {
            for css in CssFramework::ALL {
                for state in ALL_STATES {
                    let mut cfg = config(framework);
                    cfg.css_framework = css;
                    cfg.state_management = state;
                    let first = validate(&cfg);
                    assert_eq!(first, validate(&cfg));
                }
            }
        }
    }
}
