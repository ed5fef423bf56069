//! Text shown after a project is created

use crate::config::{
    Choice, CssFramework, Framework, FrameworkFamily, ProjectConfiguration, StateManagement,
};

/// A documentation link for the chosen stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocLink {
    pub name: &'static str,
    pub url: &'static str,
}

const fn link(name: &'static str, url: &'static str) -> DocLink {
    DocLink { name, url }
}

const REACT: DocLink = link("React", "https://react.dev/learn");
const VUE: DocLink = link("Vue", "https://vuejs.org/guide/");
const VITE: DocLink = link("Vite", "https://vitejs.dev/guide/");
const NEXTJS: DocLink = link("Next.js", "https://nextjs.org/docs");
const NUXT: DocLink = link("Nuxt", "https://nuxt.com/docs");
const EXPRESS: DocLink = link("Express", "https://expressjs.com/");
const FASTIFY: DocLink = link("Fastify", "https://fastify.dev/");

/// Short description of a saved configuration, shown before asking to reuse it
pub fn saved_summary(config: &ProjectConfiguration) -> Vec<String> {
    vec![
        format!("Project type: {}", config.project_type.id()),
        format!("Framework: {}", config.framework.id()),
        format!("Language: {}", config.language.label()),
        format!("CSS: {}", config.css_framework.id()),
        format!("State: {}", config.state_management.id()),
        format!("Package manager: {}", config.package_manager.id()),
    ]
}

/// Key facts about the created project
pub fn project_info(config: &ProjectConfiguration) -> Vec<String> {
    vec![
        format!("Name:       {}", config.project_name),
        format!("Framework:  {}", config.framework.label()),
        format!("Language:   {}", config.language.label()),
        format!("CSS:        {}", config.css_framework.id()),
        format!("State Mgmt: {}", config.state_management.id()),
        format!(
            "Git:        {}",
            if config.git_init { "Initialized" } else { "Not initialized" }
        ),
    ]
}

pub fn next_steps(config: &ProjectConfiguration) -> Vec<String> {
    vec![
        format!("1. cd {}", config.project_name),
        format!("2. {}", config.package_manager.run_script("dev")),
    ]
}

/// Scripts available in the generated package.json with what they do
pub fn available_commands(config: &ProjectConfiguration) -> Vec<String> {
    let pm = config.package_manager;
    let last = match config.framework.family() {
        FrameworkFamily::Backend => ("start", "Start the production server"),
        _ => ("preview", "Preview production build"),
    };

    [
        ("dev", "Start development server"),
        ("build", "Build for production"),
        last,
    ]
    .into_iter()
    .filter(|(script, _)| config.framework != Framework::Fullstack || *script != "preview")
    .map(|(script, what)| format!("{:<18} - {}", pm.run_script(script), what))
    .collect()
}

pub fn doc_links(config: &ProjectConfiguration) -> Vec<DocLink> {
    let mut links = match config.framework {
        Framework::React => vec![REACT, VITE],
        Framework::Vue => vec![VUE, VITE],
        Framework::NextJs => vec![NEXTJS],
        Framework::Nuxt => vec![NUXT],
        Framework::Express => vec![EXPRESS],
        Framework::Fastify => vec![FASTIFY],
        Framework::Fullstack => vec![REACT, VITE, EXPRESS],
    };

    links.extend(match config.css_framework {
        CssFramework::Tailwind => Some(link("Tailwind CSS", "https://tailwindcss.com/docs")),
        CssFramework::Bootstrap => Some(link("Bootstrap", "https://getbootstrap.com/docs/")),
        CssFramework::MaterialUi => Some(link("Material-UI", "https://mui.com/")),
        CssFramework::ChakraUi => Some(link("Chakra UI", "https://chakra-ui.com/")),
        CssFramework::None => None,
    });

    links.extend(match config.state_management {
        StateManagement::Redux => Some(link("Redux Toolkit", "https://redux-toolkit.js.org/")),
        StateManagement::Zustand => Some(link("Zustand", "https://zustand.docs.pmnd.rs/")),
        StateManagement::Mobx => Some(link("MobX", "https://mobx.js.org/")),
        StateManagement::Pinia => Some(link("Pinia", "https://pinia.vuejs.org/")),
        StateManagement::Vuex => Some(link("Vuex", "https://vuex.vuejs.org/")),
        StateManagement::None => None,
    });

    if config.install_router {
        links.extend(match config.framework {
            Framework::React => Some(link("React Router", "https://reactrouter.com/")),
            Framework::Vue => Some(link("Vue Router", "https://router.vuejs.org/")),
            _ => None,
        });
    }

    if config.install_axios {
        links.push(link("Axios", "https://axios-http.com/"));
    }

    links
}

pub fn tips(config: &ProjectConfiguration) -> Vec<String> {
    let mut tips = Vec::new();

    match config.framework.family() {
        FrameworkFamily::React | FrameworkFamily::Fullstack => {
            tips.push("Use React DevTools browser extension for debugging".to_string())
        }
        FrameworkFamily::Vue => {
            tips.push("Use Vue DevTools browser extension for debugging".to_string())
        }
        FrameworkFamily::Backend => {
            tips.push("Environment variables live in .env (see .env.example)".to_string())
        }
    }

    if config.css_framework == CssFramework::Tailwind {
        tips.push("Use Tailwind CSS IntelliSense VSCode extension".to_string());
    }
    if config.install_eslint {
        tips.push(format!(
            "Run '{}' to check code quality",
            config.package_manager.run_script("lint")
        ));
    }
    if config.install_prettier {
        tips.push("Configure your editor to format on save".to_string());
    }

    tips.push("Check package.json for all available scripts".to_string());
    tips
}
