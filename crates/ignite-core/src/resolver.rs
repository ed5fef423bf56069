//! Configuration resolver: walks the question tree and assembles one valid
//! [`ProjectConfiguration`]

use crate::config::{
    Choice, CssFramework, Framework, Language, PackageManager, ProjectConfiguration, ProjectName,
    ProjectType, StateManagement,
};
use crate::error::{IgniteError, Outcome, Result};
use crate::messages;
use crate::prompt::{ConfirmQuestion, PromptError, Prompter, SelectQuestion};
use crate::rules::{self, Violation, FULLSTACK_STATE_CHOICES};
use crate::store::ConfigStore;
use tracing::{debug, warn};

/// Answer to "use the previous configuration?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reuse {
    Previous,
    Fresh,
}

impl Choice for Reuse {
    fn id(&self) -> &'static str {
        match self {
            Reuse::Previous => "previous",
            Reuse::Fresh => "fresh",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Reuse::Previous => "Use previous configuration",
            Reuse::Fresh => "Start fresh (new setup)",
        }
    }
}

/// Why the question walk stopped early
enum Stop {
    Cancelled,
    Failed(IgniteError),
}

impl From<PromptError> for Stop {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::Cancelled => Stop::Cancelled,
            PromptError::Io(e) => Stop::Failed(IgniteError::Prompt(e)),
        }
    }
}

impl From<std::io::Error> for Stop {
    fn from(err: std::io::Error) -> Self {
        Stop::Failed(IgniteError::Prompt(err))
    }
}

impl From<Violation> for Stop {
    fn from(violation: Violation) -> Self {
        Stop::Failed(IgniteError::Validation(violation))
    }
}

/// Fields decided by the project-type branch
struct BranchAnswers {
    framework: Framework,
    language: Language,
    css_framework: CssFramework,
    state_management: StateManagement,
    install_router: bool,
    install_icons: bool,
    install_axios: bool,
}

/// Fields asked regardless of branch
struct CommonAnswers {
    package_manager: PackageManager,
    git_init: bool,
    install_eslint: bool,
    install_prettier: bool,
}

pub struct ConfigResolver<P, S> {
    prompter: P,
    store: S,
}

impl<P: Prompter, S: ConfigStore> ConfigResolver<P, S> {
    pub fn new(prompter: P, store: S) -> Self {
        Self { prompter, store }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    /// Produce the configuration for `project_name`, or report that the user
    /// cancelled. Nothing is saved unless a fresh resolution succeeds.
    pub fn resolve(&mut self, project_name: ProjectName) -> Result<Outcome<ProjectConfiguration>> {
        match self.walk(project_name) {
            Ok(config) => Ok(Outcome::Completed(config)),
            Err(Stop::Cancelled) => {
                debug!("resolution cancelled by user");
                Ok(Outcome::Cancelled)
            }
            Err(Stop::Failed(err)) => Err(err),
        }
    }

    fn walk(&mut self, project_name: ProjectName) -> std::result::Result<ProjectConfiguration, Stop> {
        if let Some(saved) = self.load_saved()? {
            self.prompter
                .note("Previous configuration found", &messages::saved_summary(&saved))?;

            let reuse = self.prompter.select(&SelectQuestion::new(
                "How would you like to proceed?",
                [Reuse::Previous, Reuse::Fresh],
            ))?;

            if reuse == Reuse::Previous {
                let config = saved.with_project_name(project_name);
                rules::validate(&config)?;
                debug!(framework = config.framework.id(), "reusing saved configuration");
                return Ok(config);
            }
        }

        let project_type = self.prompter.select(&SelectQuestion::new(
            "What type of project do you want to create?",
            ProjectType::ALL,
        ))?;

        let branch = match project_type {
            ProjectType::Frontend => self.frontend()?,
            ProjectType::Backend => self.backend()?,
            ProjectType::Fullstack => self.fullstack()?,
        };
        let common = self.common()?;

        let config = ProjectConfiguration {
            project_name,
            project_type,
            framework: branch.framework,
            language: branch.language,
            css_framework: branch.css_framework,
            state_management: branch.state_management,
            install_router: branch.install_router,
            install_icons: branch.install_icons,
            install_axios: branch.install_axios,
            package_manager: common.package_manager,
            git_init: common.git_init,
            install_eslint: common.install_eslint,
            install_prettier: common.install_prettier,
        };

        rules::validate(&config)?;
        self.persist(&config)?;

        Ok(config)
    }

    /// A broken or unreadable cache counts as "nothing saved"
    fn load_saved(&mut self) -> std::result::Result<Option<ProjectConfiguration>, Stop> {
        match self.store.load() {
            Ok(saved) => Ok(saved),
            Err(err) => {
                warn!(error = %err, "ignoring saved configuration");
                self.prompter
                    .warn("Could not load the previous configuration, starting fresh")?;
                Ok(None)
            }
        }
    }

    fn persist(&mut self, config: &ProjectConfiguration) -> std::result::Result<(), Stop> {
        if let Err(err) = self.store.save(config) {
            warn!(error = %err, "failed to save configuration");
            self.prompter.warn("Could not save configuration")?;
        }
        Ok(())
    }

    fn ask_language(&mut self) -> std::result::Result<Language, Stop> {
        Ok(self
            .prompter
            .select(&SelectQuestion::new("Which language?", Language::ALL))?)
    }

    fn ask_yes_no(&mut self, message: &str) -> std::result::Result<bool, Stop> {
        Ok(self.prompter.confirm(&ConfirmQuestion::new(message, true))?)
    }

    fn frontend(&mut self) -> std::result::Result<BranchAnswers, Stop> {
        let framework = self.prompter.select(&SelectQuestion::new(
            "Which framework do you want to use?",
            Framework::FRONTEND,
        ))?;
        let language = self.ask_language()?;
        let css_framework = self
            .prompter
            .select(&SelectQuestion::new("Which CSS framework?", CssFramework::ALL))?;
        let state_management = self.prompter.select(&SelectQuestion::new(
            "State management library?",
            rules::state_choices_for(framework),
        ))?;
        let install_router = self.ask_yes_no("Install router?")?;
        let install_icons = self.ask_yes_no("Install icon library?")?;
        let install_axios = self.ask_yes_no("Install Axios (HTTP client)?")?;

        Ok(BranchAnswers {
            framework,
            language,
            css_framework,
            state_management,
            install_router,
            install_icons,
            install_axios,
        })
    }

    fn backend(&mut self) -> std::result::Result<BranchAnswers, Stop> {
        let framework = self.prompter.select(&SelectQuestion::new(
            "Which backend framework?",
            Framework::BACKEND,
        ))?;
        let language = self.ask_language()?;

        // Both are always part of the generated server; the answers are informational.
        let cors = self.ask_yes_no("Install CORS middleware?")?;
        let dotenv = self.ask_yes_no("Install dotenv (environment variables)?")?;
        debug!(cors, dotenv, "backend middleware answers");

        Ok(BranchAnswers {
            framework,
            language,
            css_framework: CssFramework::None,
            state_management: StateManagement::None,
            install_router: false,
            install_icons: false,
            install_axios: false,
        })
    }

    fn fullstack(&mut self) -> std::result::Result<BranchAnswers, Stop> {
        let language = self.ask_language()?;
        let css_framework = self.prompter.select(&SelectQuestion::new(
            "Which CSS framework for frontend?",
            CssFramework::FULLSTACK,
        ))?;
        let state_management = self.prompter.select(&SelectQuestion::new(
            "State management for frontend?",
            FULLSTACK_STATE_CHOICES,
        ))?;

        Ok(BranchAnswers {
            framework: Framework::Fullstack,
            language,
            css_framework,
            state_management,
            install_router: true,
            install_icons: true,
            install_axios: true,
        })
    }

    fn common(&mut self) -> std::result::Result<CommonAnswers, Stop> {
        let package_manager = self
            .prompter
            .select(&SelectQuestion::new("Which package manager?", PackageManager::ALL))?;
        let git_init = self.ask_yes_no("Initialize git repository?")?;
        let install_eslint = self.ask_yes_no("Install ESLint?")?;
        let install_prettier = self.ask_yes_no("Install Prettier?")?;

        Ok(CommonAnswers {
            package_manager,
            git_init,
            install_eslint,
            install_prettier,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::config;
    use crate::prompt::scripted::{Scripted::*, ScriptedPrompter};
    use crate::store::MemoryStore;

    fn name(value: &str) -> ProjectName {
        ProjectName::parse(value).unwrap()
    }

    fn resolver(
        answers: Vec<crate::prompt::scripted::Scripted>,
        store: &MemoryStore,
    ) -> ConfigResolver<ScriptedPrompter, &MemoryStore> {
        ConfigResolver::new(ScriptedPrompter::new(answers), store)
    }

    const COMMON: [crate::prompt::scripted::Scripted; 4] = [Pick("pnpm"), Yes, No, Yes];

    #[test]
    fn test_frontend_react_flow() {
        let store = MemoryStore::new();
        let mut answers = vec![
            Pick("frontend"),
            Pick("react"),
            Pick("ts"),
            Pick("tailwind"),
            Pick("redux"),
            Yes,
            No,
            Yes,
        ];
        answers.extend(COMMON);
        let mut resolver = resolver(answers, &store);

        let config = resolver.resolve(name("web")).unwrap().completed().unwrap();

        assert_eq!(config.project_type, ProjectType::Frontend);
        assert_eq!(config.framework, Framework::React);
        assert_eq!(config.css_framework, CssFramework::Tailwind);
        assert_eq!(config.state_management, StateManagement::Redux);
        assert!(config.install_router && !config.install_icons && config.install_axios);
        assert_eq!(config.package_manager, PackageManager::Pnpm);
        assert!(config.git_init && !config.install_eslint && config.install_prettier);
        assert_eq!(store.saved(), Some(config));

        let prompter = resolver.into_prompter();
        assert_eq!(prompter.remaining(), 0);
        assert_eq!(
            prompter.offered("State management"),
            Some(&["none", "redux", "zustand", "mobx"][..])
        );
    }

    #[test]
    fn test_vue_state_choices_are_narrowed() {
        let store = MemoryStore::new();
        let mut answers = vec![
            Pick("frontend"),
            Pick("nuxt"),
            Pick("js"),
            Pick("none"),
            Pick("pinia"),
            No,
            No,
            No,
        ];
        answers.extend(COMMON);
        let mut resolver = resolver(answers, &store);

        let config = resolver.resolve(name("nuxt-site")).unwrap().completed().unwrap();
        assert_eq!(config.state_management, StateManagement::Pinia);
        assert_eq!(
            resolver.prompter().offered("State management"),
            Some(&["none", "pinia", "vuex"][..])
        );
    }

    #[test]
    fn test_backend_branch_forces_defaults() {
        let store = MemoryStore::new();
        let mut answers = vec![Pick("backend"), Pick("fastify"), Pick("js"), Yes, Yes];
        answers.extend(COMMON);
        let mut resolver = resolver(answers, &store);

        let config = resolver.resolve(name("api")).unwrap().completed().unwrap();
        assert_eq!(config.framework, Framework::Fastify);
        assert_eq!(config.css_framework, CssFramework::None);
        assert_eq!(config.state_management, StateManagement::None);
        assert!(!config.install_router && !config.install_icons && !config.install_axios);
        assert!(resolver.prompter().offered("CSS").is_none());
    }

    #[test]
    fn test_fullstack_branch() {
        let store = MemoryStore::new();
        let mut answers = vec![Pick("fullstack"), Pick("ts"), Pick("bootstrap"), Pick("zustand")];
        answers.extend(COMMON);
        let mut resolver = resolver(answers, &store);

        let config = resolver.resolve(name("mono")).unwrap().completed().unwrap();
        assert_eq!(config.framework, Framework::Fullstack);
        assert_eq!(config.state_management, StateManagement::Zustand);
        assert!(config.install_router && config.install_icons && config.install_axios);
        assert_eq!(
            resolver.prompter().offered("CSS framework for frontend"),
            Some(&["tailwind", "bootstrap", "none"][..])
        );
    }

    #[test]
    fn test_cancel_mid_walk_saves_nothing() {
        let store = MemoryStore::new();
        let answers = vec![Pick("frontend"), Pick("vue"), Pick("ts"), Cancel];
        let mut resolver = resolver(answers, &store);

        let outcome = resolver.resolve(name("web")).unwrap();
        assert!(outcome.is_cancelled());
        assert!(store.saved().is_none());
    }

    #[test]
    fn test_cancel_on_common_questions() {
        let store = MemoryStore::new();
        let answers = vec![Pick("backend"), Pick("express"), Pick("ts"), Yes, Yes, Cancel];
        let mut resolver = resolver(answers, &store);
        assert_eq!(resolver.resolve(name("api")).unwrap(), Outcome::Cancelled);
    }

    #[test]
    fn test_reuse_previous_configuration() {
        let mut cached = config(Framework::NextJs);
        cached.css_framework = CssFramework::MaterialUi;
        cached.state_management = StateManagement::Zustand;
        cached.install_eslint = true;
        let store = MemoryStore::with(cached.clone());
        let mut resolver = resolver(vec![Pick("previous")], &store);

        let config = resolver.resolve(name("second-app")).unwrap().completed().unwrap();

        assert_eq!(config.project_name.as_str(), "second-app");
        assert_eq!(config.with_project_name(cached.project_name.clone()), cached);
        // Only the reuse question was asked.
        assert_eq!(resolver.prompter().asked.len(), 1);
        assert_eq!(resolver.prompter().notes.len(), 1);
        // The slot still holds the original record.
        assert_eq!(store.saved(), Some(cached));
    }

    #[test]
    fn test_reused_configuration_is_still_validated() {
        let mut cached = config(Framework::Vue);
        cached.state_management = StateManagement::Redux;
        let store = MemoryStore::with(cached);
        let mut resolver = resolver(vec![Pick("previous")], &store);

        let err = resolver.resolve(name("web")).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Vue"));
    }

    #[test]
    fn test_reused_vue_with_mobx_is_rejected() {
        let mut cached = config(Framework::Vue);
        cached.state_management = StateManagement::Mobx;
        let store = MemoryStore::with(cached.clone());
        let mut resolver = resolver(vec![Pick("previous")], &store);

        let err = resolver.resolve(name("web")).unwrap_err();
        assert!(matches!(
            err,
            IgniteError::Validation(Violation::UnsupportedStateManagement { .. })
        ));
        assert_eq!(store.saved(), Some(cached));
    }

    #[test]
    fn test_start_fresh_ignores_saved() {
        let store = MemoryStore::with(config(Framework::React));
        let mut answers = vec![Pick("fresh"), Pick("backend"), Pick("express"), Pick("ts"), No, No];
        answers.extend(COMMON);
        let mut resolver = resolver(answers, &store);

        let config = resolver.resolve(name("api")).unwrap().completed().unwrap();
        assert_eq!(config.framework, Framework::Express);
        assert_eq!(store.saved().map(|c| c.framework), Some(Framework::Express));
    }

    struct BrokenStore;

    impl ConfigStore for BrokenStore {
        fn load(&self) -> Result<Option<ProjectConfiguration>> {
            Err(IgniteError::CacheRead {
                path: "/nowhere".into(),
                source: std::io::Error::other("disk on fire"),
            })
        }

        fn save(&self, _config: &ProjectConfiguration) -> Result<()> {
            Err(IgniteError::CacheWrite {
                path: "/nowhere".into(),
                source: std::io::Error::other("disk on fire"),
            })
        }
    }

    #[test]
    fn test_store_failures_are_not_fatal() {
        let mut answers = vec![Pick("backend"), Pick("express"), Pick("js"), Yes, Yes];
        answers.extend(COMMON);
        let mut resolver = ConfigResolver::new(ScriptedPrompter::new(answers), BrokenStore);

        let outcome = resolver.resolve(name("api")).unwrap();
        assert!(!outcome.is_cancelled());
        assert_eq!(resolver.prompter().warnings.len(), 2);
    }
}
