//! Dependency selection
//!
//! A resolved configuration maps to two ordered package lists. Each concern
//! is a small pure function; [`select`] applies them in a fixed order and
//! drops repeats, so the output is stable and every rule can be tested alone.

pub mod versions;

pub use versions::pinned_version;

use crate::config::{
    CssFramework, Framework, FrameworkFamily, Language, ProjectConfiguration, StateManagement,
};

/// Packages contributed by one concern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contribution {
    pub dependencies: Vec<&'static str>,
    pub dev_dependencies: Vec<&'static str>,
}

impl Contribution {
    fn deps(dependencies: &[&'static str]) -> Self {
        Self {
            dependencies: dependencies.to_vec(),
            dev_dependencies: Vec::new(),
        }
    }

    fn dev(dev_dependencies: &[&'static str]) -> Self {
        Self {
            dependencies: Vec::new(),
            dev_dependencies: dev_dependencies.to_vec(),
        }
    }

    fn none() -> Self {
        Self::default()
    }
}

/// One selection rule
pub type Concern = fn(&ProjectConfiguration) -> Contribution;

/// Concerns in the order their packages appear in the manifest
pub const CONCERNS: [(&str, Concern); 10] = [
    ("framework", framework),
    ("css", css_framework),
    ("state", state_management),
    ("router", router),
    ("icons", icons),
    ("axios", axios),
    ("typescript", typescript),
    ("linting", linting),
    ("formatting", formatting),
    ("backend", backend_extras),
];

/// Packages to request from the package manager
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManifest {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl DependencyManifest {
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }

    /// Whether `package` is requested in either list
    pub fn contains(&self, package: &str) -> bool {
        self.dependencies.iter().any(|p| p == package)
            || self.dev_dependencies.iter().any(|p| p == package)
    }

    fn push_unique(list: &mut Vec<String>, package: &str) {
        if !list.iter().any(|p| p == package) {
            list.push(package.to_string());
        }
    }

    fn absorb(&mut self, contribution: Contribution) {
        for package in contribution.dependencies {
            Self::push_unique(&mut self.dependencies, package);
        }
        for package in contribution.dev_dependencies {
            Self::push_unique(&mut self.dev_dependencies, package);
        }
    }
}

/// Compute the manifest for a configuration
pub fn select(config: &ProjectConfiguration) -> DependencyManifest {
    let mut manifest = DependencyManifest::default();
    for (_, concern) in CONCERNS {
        manifest.absorb(concern(config));
    }
    manifest
}

/// Backend frameworks are installed as packages; frontend ones come with their generator
pub fn framework(config: &ProjectConfiguration) -> Contribution {
    match config.framework {
        Framework::Express => Contribution::deps(&["express"]),
        Framework::Fastify => Contribution::deps(&["fastify"]),
        _ => Contribution::none(),
    }
}

pub fn css_framework(config: &ProjectConfiguration) -> Contribution {
    // Backend projects never carry styling, whatever the field says.
    if config.is_backend() {
        return Contribution::none();
    }

    let react = config.framework.family() == FrameworkFamily::React;
    match config.css_framework {
        CssFramework::Tailwind => Contribution::dev(&["tailwindcss", "@tailwindcss/vite"]),
        CssFramework::Bootstrap => Contribution::deps(&["bootstrap"]),
        CssFramework::MaterialUi if react => {
            Contribution::deps(&["@mui/material", "@emotion/react", "@emotion/styled"])
        }
        CssFramework::ChakraUi if react => {
            Contribution::deps(&["@chakra-ui/react", "@emotion/react", "@emotion/styled"])
        }
        CssFramework::MaterialUi | CssFramework::ChakraUi | CssFramework::None => {
            Contribution::none()
        }
    }
}

pub fn state_management(config: &ProjectConfiguration) -> Contribution {
    match config.state_management {
        StateManagement::Redux => Contribution::deps(&["@reduxjs/toolkit", "react-redux"]),
        StateManagement::Zustand => Contribution::deps(&["zustand"]),
        StateManagement::Mobx => Contribution::deps(&["mobx", "mobx-react-lite"]),
        StateManagement::Pinia => Contribution::deps(&["pinia"]),
        StateManagement::Vuex => Contribution::deps(&["vuex"]),
        StateManagement::None => Contribution::none(),
    }
}

/// Next.js and Nuxt route from the filesystem, so only Vite apps get a router
pub fn router(config: &ProjectConfiguration) -> Contribution {
    if !config.install_router {
        return Contribution::none();
    }
    match config.framework {
        Framework::React => Contribution::deps(&["react-router-dom"]),
        Framework::Vue => Contribution::deps(&["vue-router"]),
        _ => Contribution::none(),
    }
}

pub fn icons(config: &ProjectConfiguration) -> Contribution {
    if config.install_icons {
        Contribution::deps(&["react-icons"])
    } else {
        Contribution::none()
    }
}

pub fn axios(config: &ProjectConfiguration) -> Contribution {
    if config.install_axios {
        Contribution::deps(&["axios"])
    } else {
        Contribution::none()
    }
}

pub fn typescript(config: &ProjectConfiguration) -> Contribution {
    if config.language != Language::TypeScript {
        return Contribution::none();
    }
    match config.framework {
        Framework::React => Contribution::dev(&["typescript", "@types/react", "@types/react-dom"]),
        Framework::Express => {
            Contribution::dev(&["typescript", "@types/node", "@types/express", "tsx"])
        }
        Framework::Fastify => Contribution::dev(&["typescript", "@types/node", "tsx"]),
        _ => Contribution::dev(&["typescript"]),
    }
}

pub fn linting(config: &ProjectConfiguration) -> Contribution {
    if !config.install_eslint {
        return Contribution::none();
    }
    match config.framework.family() {
        FrameworkFamily::React => {
            Contribution::dev(&["eslint", "eslint-plugin-react", "eslint-plugin-react-hooks"])
        }
        FrameworkFamily::Vue => Contribution::dev(&["eslint", "eslint-plugin-vue"]),
        FrameworkFamily::Backend | FrameworkFamily::Fullstack => Contribution::dev(&["eslint"]),
    }
}

pub fn formatting(config: &ProjectConfiguration) -> Contribution {
    if config.install_prettier {
        Contribution::dev(&["prettier"])
    } else {
        Contribution::none()
    }
}

pub fn backend_extras(config: &ProjectConfiguration) -> Contribution {
    if config.framework.family() != FrameworkFamily::Backend {
        return Contribution::none();
    }
    let mut contribution = Contribution::deps(&["cors", "dotenv"]);
    if config.language == Language::JavaScript {
        contribution.dev_dependencies.push("nodemon");
    }
    contribution
}
