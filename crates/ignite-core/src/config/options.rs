//! Option enums for every configuration question

use serde::{Deserialize, Serialize};
use std::fmt;

/// Common behaviour for values that can be offered in a select prompt
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// Stable identifier, identical to the serialized form
    fn id(&self) -> &'static str;

    /// Human-readable label shown in prompts
    fn label(&self) -> &'static str;

    /// Short description shown next to the label
    fn hint(&self) -> &'static str {
        ""
    }
}

macro_rules! impl_display_via_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.label())
                }
            }
        )*
    };
}

/// What kind of project is generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Frontend,
    Backend,
    Fullstack,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::Frontend,
        ProjectType::Backend,
        ProjectType::Fullstack,
    ];
}

impl Choice for ProjectType {
    fn id(&self) -> &'static str {
        match self {
            ProjectType::Frontend => "frontend",
            ProjectType::Backend => "backend",
            ProjectType::Fullstack => "fullstack",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ProjectType::Frontend => "Frontend (SPA/SSR)",
            ProjectType::Backend => "Backend API",
            ProjectType::Fullstack => "Full-Stack Application",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            ProjectType::Frontend => "React, Vue, Next.js, Nuxt",
            ProjectType::Backend => "Express, Fastify",
            ProjectType::Fullstack => "Complete monorepo with frontend + backend",
        }
    }
}

/// Ecosystem a framework belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameworkFamily {
    React,
    Vue,
    Backend,
    /// React frontend plus Express backend in one monorepo
    Fullstack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    #[serde(rename = "nextjs")]
    NextJs,
    Vue,
    Nuxt,
    Express,
    Fastify,
    Fullstack,
}

impl Framework {
    pub const FRONTEND: [Framework; 4] = [
        Framework::React,
        Framework::NextJs,
        Framework::Vue,
        Framework::Nuxt,
    ];

    pub const BACKEND: [Framework; 2] = [Framework::Express, Framework::Fastify];

    pub fn family(&self) -> FrameworkFamily {
        match self {
            Framework::React | Framework::NextJs => FrameworkFamily::React,
            Framework::Vue | Framework::Nuxt => FrameworkFamily::Vue,
            Framework::Express | Framework::Fastify => FrameworkFamily::Backend,
            Framework::Fullstack => FrameworkFamily::Fullstack,
        }
    }

    /// Project type this framework is offered under
    pub fn project_type(&self) -> ProjectType {
        match self.family() {
            FrameworkFamily::React | FrameworkFamily::Vue => ProjectType::Frontend,
            FrameworkFamily::Backend => ProjectType::Backend,
            FrameworkFamily::Fullstack => ProjectType::Fullstack,
        }
    }

    /// Whether the project is created by a Vite template
    pub fn uses_vite(&self) -> bool {
        matches!(self, Framework::React | Framework::Vue)
    }
}

impl Choice for Framework {
    fn id(&self) -> &'static str {
        match self {
            Framework::React => "react",
            Framework::NextJs => "nextjs",
            Framework::Vue => "vue",
            Framework::Nuxt => "nuxt",
            Framework::Express => "express",
            Framework::Fastify => "fastify",
            Framework::Fullstack => "fullstack",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Framework::React => "React (Vite)",
            Framework::NextJs => "Next.js",
            Framework::Vue => "Vue 3 (Vite)",
            Framework::Nuxt => "Nuxt 3",
            Framework::Express => "Express",
            Framework::Fastify => "Fastify",
            Framework::Fullstack => "Full-Stack (React + Express)",
        }
    }

    fn hint(&self) -> &'static str {
        match self {
            Framework::React => "Fast, modern React with Vite",
            Framework::NextJs => "The React framework for production",
            Framework::Vue => "Progressive JavaScript framework",
            Framework::Nuxt => "The Intuitive Vue framework",
            Framework::Express => "Fast, unopinionated web framework",
            Framework::Fastify => "Fast and low overhead web framework",
            Framework::Fullstack => "Monorepo with apps/frontend and apps/backend",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ts", alias = "typescript")]
    TypeScript,
    #[serde(rename = "js", alias = "javascript")]
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::TypeScript, Language::JavaScript];

    /// Extension for plain source files (`ts` / `js`)
    pub fn ext(&self) -> &'static str {
        match self {
            Language::TypeScript => "ts",
            Language::JavaScript => "js",
        }
    }

    /// Extension for component files (`tsx` / `jsx`)
    pub fn jsx_ext(&self) -> &'static str {
        match self {
            Language::TypeScript => "tsx",
            Language::JavaScript => "jsx",
        }
    }
}

impl Choice for Language {
    fn id(&self) -> &'static str {
        self.ext()
    }

    fn label(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssFramework {
    Tailwind,
    Bootstrap,
    MaterialUi,
    ChakraUi,
    None,
}

impl CssFramework {
    pub const ALL: [CssFramework; 5] = [
        CssFramework::Tailwind,
        CssFramework::Bootstrap,
        CssFramework::MaterialUi,
        CssFramework::ChakraUi,
        CssFramework::None,
    ];

    /// Subset offered for the fullstack frontend
    pub const FULLSTACK: [CssFramework; 3] = [
        CssFramework::Tailwind,
        CssFramework::Bootstrap,
        CssFramework::None,
    ];
}

impl Choice for CssFramework {
    fn id(&self) -> &'static str {
        match self {
            CssFramework::Tailwind => "tailwind",
            CssFramework::Bootstrap => "bootstrap",
            CssFramework::MaterialUi => "material-ui",
            CssFramework::ChakraUi => "chakra-ui",
            CssFramework::None => "none",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            CssFramework::Tailwind => "Tailwind CSS v4",
            CssFramework::Bootstrap => "Bootstrap 5",
            CssFramework::MaterialUi => "Material-UI (MUI)",
            CssFramework::ChakraUi => "Chakra UI",
            CssFramework::None => "None",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateManagement {
    None,
    Redux,
    Zustand,
    Mobx,
    Pinia,
    Vuex,
}

impl Choice for StateManagement {
    fn id(&self) -> &'static str {
        match self {
            StateManagement::None => "none",
            StateManagement::Redux => "redux",
            StateManagement::Zustand => "zustand",
            StateManagement::Mobx => "mobx",
            StateManagement::Pinia => "pinia",
            StateManagement::Vuex => "vuex",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            StateManagement::None => "None",
            StateManagement::Redux => "Redux Toolkit",
            StateManagement::Zustand => "Zustand",
            StateManagement::Mobx => "MobX",
            StateManagement::Pinia => "Pinia (recommended)",
            StateManagement::Vuex => "Vuex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    /// Executable name
    pub fn command(&self) -> &'static str {
        self.id()
    }

    /// Arguments that install everything listed in package.json
    pub fn install_args(&self) -> Vec<&'static str> {
        vec!["install"]
    }

    /// Arguments that add the given packages
    pub fn add_args<'a>(&self, packages: &'a [String], dev: bool) -> Vec<&'a str> {
        let mut args = match self {
            PackageManager::Npm => vec!["install"],
            PackageManager::Yarn | PackageManager::Pnpm => vec!["add"],
        };
        if dev {
            args.push(match self {
                PackageManager::Npm => "--save-dev",
                PackageManager::Yarn | PackageManager::Pnpm => "-D",
            });
        }
        args.extend(packages.iter().map(String::as_str));
        args
    }

    /// Arguments that run a package.json script
    pub fn run_args<'a>(&self, script: &'a str) -> Vec<&'a str> {
        match self {
            PackageManager::Npm => vec!["run", script],
            PackageManager::Yarn | PackageManager::Pnpm => vec![script],
        }
    }

    /// Command line that runs a package.json script, e.g. `npm run dev`
    pub fn run_script(&self, script: &str) -> String {
        format!("{} {}", self.command(), self.run_args(script).join(" "))
    }
}

impl Choice for PackageManager {
    fn id(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    fn label(&self) -> &'static str {
        self.id()
    }
}

impl_display_via_label!(
    ProjectType,
    Framework,
    Language,
    CssFramework,
    StateManagement,
    PackageManager,
);
