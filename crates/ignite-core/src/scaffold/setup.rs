//! Post-install configuration of the scaffolded project
//!
//! File rewrites are pure string functions; [`apply`] reads and writes them.

use super::generator::{render, template, GeneratedFile};
use crate::config::{Choice, CssFramework, Framework, ProjectConfiguration};
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

const TAILWIND_PLUGIN_IMPORT: &str = "import tailwindcss from \"@tailwindcss/vite\";\n";
const TAILWIND_CSS: &str = "@import \"tailwindcss\";\n";
const BOOTSTRAP_IMPORT: &str = "import 'bootstrap/dist/css/bootstrap.min.css';\n";

/// Register the Tailwind plugin in a Vite config.
///
/// Returns `None` when the plugin is already there or no `plugins` array exists.
pub fn patch_vite_config(source: &str) -> Option<String> {
    if source.contains("@tailwindcss/vite") {
        return None;
    }

    let plugins = Regex::new(r"(?s)plugins:\s*\[(.*?)\]").ok()?;
    if !plugins.is_match(source) {
        return None;
    }

    let patched = plugins.replace(source, |caps: &Captures| {
        let existing = caps[1].trim().trim_end_matches(',').trim_end();
        if existing.is_empty() {
            "plugins: [tailwindcss()]".to_string()
        } else {
            format!("plugins: [{}, tailwindcss()]", existing)
        }
    });

    Some(format!("{TAILWIND_PLUGIN_IMPORT}{patched}"))
}

/// Import Bootstrap's stylesheet at the top of an entry module
pub fn prepend_bootstrap_import(source: &str) -> Option<String> {
    if source.contains("bootstrap") {
        None
    } else {
        Some(format!("{BOOTSTRAP_IMPORT}{source}"))
    }
}

/// Directory holding the browser app, if the project has one
pub fn frontend_dir(config: &ProjectConfiguration, root: &Path) -> Option<PathBuf> {
    match config.framework {
        Framework::Fullstack => Some(root.join("apps").join("frontend")),
        Framework::Express | Framework::Fastify => None,
        _ => Some(root.to_path_buf()),
    }
}

/// Module that imports the global stylesheet, relative to the frontend dir
fn entry_module(config: &ProjectConfiguration) -> Option<PathBuf> {
    let language = config.language;
    match config.framework {
        Framework::React | Framework::Fullstack => {
            Some(PathBuf::from(format!("src/main.{}", language.jsx_ext())))
        }
        Framework::Vue => Some(PathBuf::from(format!("src/main.{}", language.ext()))),
        Framework::NextJs => Some(PathBuf::from(format!("src/app/layout.{}", language.jsx_ext()))),
        Framework::Nuxt | Framework::Express | Framework::Fastify => None,
    }
}

/// Global stylesheet, relative to the frontend dir
fn stylesheet(config: &ProjectConfiguration) -> Option<&'static str> {
    match config.framework {
        Framework::React | Framework::Fullstack => Some("src/index.css"),
        Framework::Vue => Some("src/style.css"),
        _ => None,
    }
}

/// Landing component that replaces the Vite demo app
pub fn app_component(config: &ProjectConfiguration) -> Option<GeneratedFile> {
    let name = config.project_name.as_str();
    let css = config.css_framework;

    let (path, source, stack, attributes) = match config.framework {
        Framework::React => (
            format!("src/App.{}", config.language.jsx_ext()),
            template!("app/react.jsx"),
            "React + Vite",
            match css {
                CssFramework::Tailwind => r#"className="min-h-screen flex bg-gradient-to-br from-blue-500 to-purple-600 text-white items-center justify-center text-3xl font-bold""#,
                CssFramework::Bootstrap => r#"className="d-flex bg-dark text-white align-items-center justify-content-center" style={{ height: "100vh", fontSize: "2rem", fontWeight: "bold" }}"#,
                _ => r#"style={{ minHeight: "100vh", display: "flex", justifyContent: "center", alignItems: "center", background: "linear-gradient(to bottom right, #3b82f6, #9333ea)", color: "white", fontSize: "2rem", fontWeight: "bold" }}"#,
            },
        ),
        Framework::Vue => (
            "src/App.vue".to_string(),
            template!("app/vue.vue"),
            "Vue 3 + Vite",
            match css {
                CssFramework::Tailwind => r#"class="min-h-screen flex bg-gradient-to-br from-blue-500 to-purple-600 text-white items-center justify-center text-3xl font-bold""#,
                CssFramework::Bootstrap => r#"class="d-flex bg-dark text-white align-items-center justify-content-center" style="height: 100vh; font-size: 2rem; font-weight: bold""#,
                _ => r#"style="min-height: 100vh; display: flex; justify-content: center; align-items: center; background: linear-gradient(to bottom right, #3b82f6, #9333ea); color: white; font-size: 2rem; font-weight: bold""#,
            },
        ),
        _ => return None,
    };

    let built_with = match css {
        CssFramework::None => stack.to_string(),
        other => format!("{stack} + {}", other.label()),
    };

    Some(GeneratedFile::new(
        path,
        render(
            source,
            &[
                ("attributes", attributes),
                ("built_with", &built_with),
                ("project_name", name),
            ],
        ),
    ))
}

pub fn eslint_config() -> Value {
    json!({
        "env": {
            "browser": true,
            "es2021": true,
            "node": true
        },
        "extends": ["eslint:recommended"],
        "parserOptions": {
            "ecmaVersion": "latest",
            "sourceType": "module"
        },
        "rules": {}
    })
}

pub fn prettier_config() -> Value {
    json!({
        "semi": true,
        "trailingComma": "es5",
        "singleQuote": false,
        "printWidth": 100,
        "tabWidth": 2,
        "useTabs": true
    })
}

fn read(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn write(path: &Path, contents: &str) -> Result<()> {
    debug!(path = %path.display(), "writing");
    std::fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

fn setup_tailwind(config: &ProjectConfiguration, frontend: &Path, notes: &mut Vec<String>) -> Result<()> {
    let Some(css) = stylesheet(config) else {
        notes.push(format!(
            "Tailwind CSS is installed; follow the {} guide to enable it",
            config.framework.label()
        ));
        return Ok(());
    };

    let vite_config = frontend.join(format!("vite.config.{}", config.language.ext()));
    match read(&vite_config)? {
        Some(source) => match patch_vite_config(&source) {
            Some(patched) => write(&vite_config, &patched)?,
            None if source.contains("@tailwindcss/vite") => {}
            None => notes.push("Could not update vite.config. Please add the Tailwind plugin manually.".into()),
        },
        None => notes.push(format!("{} not found. Please add the Tailwind plugin manually.", vite_config.display())),
    }

    write(&frontend.join(css), TAILWIND_CSS)
}

fn setup_bootstrap(config: &ProjectConfiguration, frontend: &Path, notes: &mut Vec<String>) -> Result<()> {
    let Some(entry) = entry_module(config) else {
        notes.push("Bootstrap is installed; import 'bootstrap/dist/css/bootstrap.min.css' in your app".into());
        return Ok(());
    };

    let entry = frontend.join(entry);
    match read(&entry)? {
        Some(source) => {
            if let Some(patched) = prepend_bootstrap_import(&source) {
                write(&entry, &patched)?;
            }
        }
        None => {
            notes.push(format!("{} not found. Please import Bootstrap manually.", entry.display()));
            return Ok(());
        }
    }

    if let Some(css) = stylesheet(config) {
        write(&frontend.join(css), "")?;
    }
    Ok(())
}

/// Configure the scaffolded project; returns manual follow-ups for the user
pub fn apply(config: &ProjectConfiguration, root: &Path) -> Result<Vec<String>> {
    let mut notes = Vec::new();

    if let Some(frontend) = frontend_dir(config, root) {
        match config.css_framework {
            CssFramework::Tailwind => setup_tailwind(config, &frontend, &mut notes)?,
            CssFramework::Bootstrap => setup_bootstrap(config, &frontend, &mut notes)?,
            CssFramework::MaterialUi => {
                notes.push("Material-UI ready to use. Import components as needed.".into())
            }
            CssFramework::ChakraUi => {
                notes.push("Chakra UI ready to use. Wrap your app with ChakraProvider.".into())
            }
            CssFramework::None => {}
        }

        if let Some(app) = app_component(config) {
            write(&root.join(&app.path), &app.contents)?;
        }
    }

    for (enabled, name, value) in [
        (config.install_eslint, ".eslintrc.json", eslint_config()),
        (config.install_prettier, ".prettierrc.json", prettier_config()),
    ] {
        if enabled {
            let file = GeneratedFile::json(name, &value);
            write(&root.join(&file.path), &file.contents)?;
        }
    }

    if config.is_backend() {
        let env = template!("backend/env");
        write(&root.join(".env"), env)?;
        write(&root.join(".env.example"), env)?;
    }

    Ok(notes)
}
