//! Scaffold plans
//!
//! Frontend frameworks are created by their own generators; backends and the
//! full-stack monorepo are written from the templates bundled in this crate.

use crate::config::{Choice, Framework, Language, PackageManager, ProjectConfiguration};
use crate::deps::pinned_version;
use crate::runtime::CommandSpec;
use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};

macro_rules! template {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path))
    };
}

pub(crate) use template;

/// Fill `{{key}}` placeholders; unknown braces are left alone
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{{key}}}}}"), value)
    })
}

/// A file to write, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// Pretty-printed JSON with a trailing newline
    pub fn json(path: impl Into<PathBuf>, value: &Value) -> Self {
        let mut contents = serde_json::to_string_pretty(value).unwrap_or_default();
        contents.push('\n');
        Self::new(path, contents)
    }
}

/// How a project comes into existence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldPlan {
    /// Run an upstream generator in the parent directory
    External(CommandSpec),
    /// Write a file tree under the project directory
    Files {
        directories: Vec<PathBuf>,
        files: Vec<GeneratedFile>,
    },
}

impl ScaffoldPlan {
    pub fn files(&self) -> &[GeneratedFile] {
        match self {
            ScaffoldPlan::External(_) => &[],
            ScaffoldPlan::Files { files, .. } => files,
        }
    }

    /// Find a planned file by its relative path
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&GeneratedFile> {
        self.files().iter().find(|f| f.path == path.as_ref())
    }
}

/// Decide how to create `config`'s project inside `parent`
pub fn plan(config: &ProjectConfiguration, parent: &Path) -> ScaffoldPlan {
    let name = config.project_name.as_str();
    let ts = config.is_typescript();

    match config.framework {
        Framework::React | Framework::Vue => {
            let base = config.framework.id();
            let template = if ts { format!("{base}-ts") } else { base.to_string() };
            ScaffoldPlan::External(
                CommandSpec::new("npm")
                    .args(["create", "vite@latest", name, "--", "--template"])
                    .arg(template)
                    .current_dir(parent),
            )
        }
        Framework::NextJs => ScaffoldPlan::External(
            CommandSpec::new("npx")
                .args(["create-next-app@latest", name, "--no-install"])
                .arg(if ts { "--typescript" } else { "--js" })
                .args(["--eslint", "--app", "--src-dir", "--import-alias", "@/*"])
                .arg(format!("--use-{}", config.package_manager.command()))
                .current_dir(parent),
        ),
        Framework::Nuxt => ScaffoldPlan::External(
            CommandSpec::new("npx")
                .args(["nuxi@latest", "init", name, "--no-install"])
                .arg("--packageManager")
                .arg(config.package_manager.command())
                .current_dir(parent),
        ),
        Framework::Express | Framework::Fastify => backend(config),
        Framework::Fullstack => fullstack(config),
    }
}

/// Create directories and write files under `root`
pub fn write_files(root: &Path, directories: &[PathBuf], files: &[GeneratedFile]) -> Result<()> {
    for dir in directories {
        let path = root.join(dir);
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }

    for file in files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, &file.contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}

fn pinned(packages: &[&str]) -> Value {
    let map: Map<String, Value> = packages
        .iter()
        .map(|p| (p.to_string(), Value::from(pinned_version(p).unwrap_or("latest"))))
        .collect();
    Value::Object(map)
}

fn dev_script(language: Language, entry: &str) -> String {
    match language {
        Language::TypeScript => format!("tsx watch src/{entry}.ts"),
        Language::JavaScript => format!("nodemon src/{entry}.js"),
    }
}

fn backend_tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "ES2022",
            "module": "ESNext",
            "moduleResolution": "bundler",
            "outDir": "./dist",
            "rootDir": "./src",
            "strict": true,
            "esModuleInterop": true,
            "skipLibCheck": true,
            "forceConsistentCasingInFileNames": true,
            "resolveJsonModule": true,
            "allowSyntheticDefaultImports": true
        },
        "include": ["src/**/*"],
        "exclude": ["node_modules", "dist"]
    })
}

fn backend(config: &ProjectConfiguration) -> ScaffoldPlan {
    let name = config.project_name.as_str();
    let language = config.language;
    let ts = config.is_typescript();
    let ext = language.ext();

    let directories = match config.framework {
        Framework::Express => vec!["src/routes", "src/controllers", "src/middleware"],
        _ => vec!["src/routes", "src/plugins"],
    };

    let package = json!({
        "name": name,
        "version": "1.0.0",
        "description": format!("{} API server", config.framework.label()),
        "main": if ts { "dist/index.js" } else { "src/index.js" },
        "type": "module",
        "scripts": {
            "dev": dev_script(language, "index"),
            "build": if ts { "tsc" } else { "echo 'No build step needed'" },
            "start": if ts { "node dist/index.js" } else { "node src/index.js" },
        },
        "keywords": [config.framework.id(), "api", "backend"],
        "author": "",
        "license": "MIT",
        "dependencies": {},
        "devDependencies": {}
    });

    let source = match (config.framework, language) {
        (Framework::Express, Language::TypeScript) => template!("backend/express.ts"),
        (Framework::Express, Language::JavaScript) => template!("backend/express.js"),
        _ => template!("backend/fastify.js"),
    };

    let mut files = vec![
        GeneratedFile::json("package.json", &package),
        GeneratedFile::new(
            format!("src/index.{ext}"),
            render(source, &[("project_name", name)]),
        ),
        GeneratedFile::new(".gitignore", template!("backend/gitignore")),
    ];
    if ts {
        files.push(GeneratedFile::json("tsconfig.json", &backend_tsconfig()));
    }

    ScaffoldPlan::Files {
        directories: directories.into_iter().map(PathBuf::from).collect(),
        files,
    }
}

fn fullstack(config: &ProjectConfiguration) -> ScaffoldPlan {
    let name = config.project_name.as_str();
    let pm: PackageManager = config.package_manager;
    let language = config.language;
    let ts = config.is_typescript();
    let ext = language.ext();
    let jsx = language.jsx_ext();

    let directories = [
        "apps/frontend/src",
        "apps/frontend/public",
        "apps/backend/src/routes",
        "apps/backend/src/controllers",
        "packages/shared",
        "docs",
    ];

    let in_app = |app: &str, script: &str| format!("cd apps/{app} && {}", pm.run_script(script));

    let root_package = json!({
        "name": name,
        "version": "1.0.0",
        "description": "A full-stack React/Express application",
        "private": true,
        "workspaces": ["apps/*", "packages/*"],
        "scripts": {
            "dev": format!(
                "concurrently \"{}\" \"{}\"",
                pm.run_script("dev:frontend"),
                pm.run_script("dev:backend")
            ),
            "dev:frontend": in_app("frontend", "dev"),
            "dev:backend": in_app("backend", "dev"),
            "build": format!(
                "{} && {}",
                pm.run_script("build:frontend"),
                pm.run_script("build:backend")
            ),
            "build:frontend": in_app("frontend", "build"),
            "build:backend": in_app("backend", "build"),
        },
        "devDependencies": pinned(&["concurrently"])
    });

    let mut frontend_dev = vec!["@vitejs/plugin-react", "vite"];
    let mut backend_dev = vec!["nodemon"];
    if ts {
        frontend_dev.extend(["typescript", "@types/react", "@types/react-dom"]);
        backend_dev.extend(["typescript", "tsx", "@types/node", "@types/express", "@types/cors"]);
    }

    let frontend_package = json!({
        "name": format!("@{name}/frontend"),
        "version": "1.0.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "vite build",
            "preview": "vite preview",
            "lint": "eslint . --ext js,jsx,ts,tsx"
        },
        "dependencies": pinned(&["react", "react-dom", "axios"]),
        "devDependencies": pinned(&frontend_dev)
    });

    let backend_package = json!({
        "name": format!("@{name}/backend"),
        "version": "1.0.0",
        "type": "module",
        "scripts": {
            "dev": if ts { "tsx watch src/server.ts".to_string() } else { "nodemon".to_string() },
            "start": if ts {
                "node --import tsx src/server.ts".to_string()
            } else {
                "node src/server.js".to_string()
            },
            "build": if ts { "tsc" } else { "echo 'No build needed for JavaScript'" }
        },
        "dependencies": pinned(&["express", "cors", "dotenv"]),
        "devDependencies": pinned(&backend_dev)
    });

    let nodemon = json!({
        "watch": ["src"],
        "ext": ext,
        "ignore": ["src/**/*.spec.js", "src/**/*.test.js"],
        "exec": if ts { "tsx src/server.ts".to_string() } else { format!("node src/server.{ext}") }
    });

    let main_file = format!("main.{jsx}");
    let install = format!("{} {}", pm.command(), pm.install_args().join(" "));
    let readme = render(
        template!("fullstack/README.md"),
        &[
            ("project_name", name),
            ("install", &install),
            ("dev", &pm.run_script("dev")),
            ("build", &pm.run_script("build")),
        ],
    );

    let mut files = vec![
        GeneratedFile::json("package.json", &root_package),
        GeneratedFile::new("README.md", readme),
        GeneratedFile::new(".gitignore", template!("fullstack/gitignore")),
        GeneratedFile::json("apps/frontend/package.json", &frontend_package),
        GeneratedFile::new(
            format!("apps/frontend/vite.config.{ext}"),
            template!("fullstack/vite.config"),
        ),
        GeneratedFile::new(
            "apps/frontend/index.html",
            render(
                template!("fullstack/index.html"),
                &[("project_name", name), ("main_file", &main_file)],
            ),
        ),
        GeneratedFile::new(
            format!("apps/frontend/src/{main_file}"),
            render(
                template!("fullstack/main.jsx"),
                &[("non_null", if ts { "!" } else { "" })],
            ),
        ),
        GeneratedFile::new(
            format!("apps/frontend/src/App.{jsx}"),
            render(template!("fullstack/App.jsx"), &[("project_name", name)]),
        ),
        GeneratedFile::new("apps/frontend/src/index.css", template!("fullstack/index.css")),
        GeneratedFile::json("apps/backend/package.json", &backend_package),
        GeneratedFile::new(
            format!("apps/backend/src/server.{ext}"),
            render(template!("fullstack/server.js"), &[("project_name", name)]),
        ),
        GeneratedFile::new("apps/backend/.env", template!("fullstack/env")),
        GeneratedFile::json("apps/backend/nodemon.json", &nodemon),
    ];

    if ts {
        files.push(GeneratedFile::json("apps/backend/tsconfig.json", &backend_tsconfig()));
        files.push(GeneratedFile::json(
            "apps/frontend/tsconfig.json",
            &json!({
                "compilerOptions": {
                    "target": "ES2020",
                    "useDefineForClassFields": true,
                    "lib": ["ES2020", "DOM", "DOM.Iterable"],
                    "module": "ESNext",
                    "skipLibCheck": true,
                    "moduleResolution": "bundler",
                    "allowImportingTsExtensions": true,
                    "resolveJsonModule": true,
                    "isolatedModules": true,
                    "noEmit": true,
                    "jsx": "react-jsx",
                    "strict": true,
                    "noUnusedLocals": true,
                    "noUnusedParameters": true,
                    "noFallthroughCasesInSwitch": true
                },
                "include": ["src"],
                "references": [{ "path": "./tsconfig.node.json" }]
            }),
        ));
        files.push(GeneratedFile::json(
            "apps/frontend/tsconfig.node.json",
            &json!({
                "compilerOptions": {
                    "composite": true,
                    "skipLibCheck": true,
                    "module": "ESNext",
                    "moduleResolution": "bundler",
                    "allowSyntheticDefaultImports": true
                },
                "include": ["vite.config.ts"]
            }),
        ));
        files.push(GeneratedFile::new(
            "packages/shared/types.ts",
            template!("fullstack/types.ts"),
        ));
    }

    ScaffoldPlan::Files {
        directories: directories.into_iter().map(PathBuf::from).collect(),
        files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::config;
    use tempfile::TempDir;

    fn external(plan: ScaffoldPlan) -> CommandSpec {
        match plan {
            ScaffoldPlan::External(spec) => spec,
            other => panic!("expected an external generator, got {other:?}"),
        }
    }

    fn package_json(plan: &ScaffoldPlan, path: &str) -> Value {
        let file = plan.file(path).unwrap();
        serde_json::from_str(&file.contents).unwrap()
    }

    #[test]
    fn test_render_only_touches_known_keys() {
        let out = render(
            "<p style={{ opacity: 1 }}>{{name}}</p>",
            &[("name", "demo")],
        );
        assert_eq!(out, "<p style={{ opacity: 1 }}>demo</p>");
    }

    #[test]
    fn test_react_uses_vite_template() {
        let spec = external(plan(&config(Framework::React), Path::new("/work")));
        assert_eq!(
            spec.display(),
            "npm create vite@latest demo-app -- --template react-ts"
        );
        assert_eq!(spec.cwd.as_deref(), Some(Path::new("/work")));
    }

    #[test]
    fn test_vue_javascript_template() {
        let mut cfg = config(Framework::Vue);
        cfg.language = Language::JavaScript;
        let spec = external(plan(&cfg, Path::new(".")));
        assert_eq!(spec.args.last().map(String::as_str), Some("vue"));
    }

    #[test]
    fn test_nextjs_flags() {
        let mut cfg = config(Framework::NextJs);
        cfg.language = Language::JavaScript;
        cfg.package_manager = PackageManager::Yarn;
        let spec = external(plan(&cfg, Path::new(".")));
        assert_eq!(spec.program, "npx");
        assert_eq!(
            spec.display(),
            "npx create-next-app@latest demo-app --no-install --js --eslint --app --src-dir --import-alias @/* --use-yarn"
        );
    }

    #[test]
    fn test_nuxt_init() {
        let spec = external(plan(&config(Framework::Nuxt), Path::new(".")));
        assert!(spec.display().starts_with("npx nuxi@latest init demo-app"));
    }

    #[test]
    fn test_express_typescript_files() {
        let plan = plan(&config(Framework::Express), Path::new("."));
        let package = package_json(&plan, "package.json");

        assert_eq!(package["name"], "demo-app");
        assert_eq!(package["scripts"]["dev"], "tsx watch src/index.ts");
        assert_eq!(package["scripts"]["build"], "tsc");

        let index = plan.file("src/index.ts").unwrap();
        assert!(index.contents.contains("Request, Response"));
        assert!(index.contents.contains("Hello from demo-app!"));
        assert!(plan.file("tsconfig.json").is_some());
        assert!(plan.file(".gitignore").is_some());

        match &plan {
            ScaffoldPlan::Files { directories, .. } => {
                assert!(directories.contains(&PathBuf::from("src/middleware")));
            }
            ScaffoldPlan::External(_) => unreachable!(),
        }
    }

    #[test]
    fn test_fastify_javascript_files() {
        let mut cfg = config(Framework::Fastify);
        cfg.language = Language::JavaScript;
        let plan = plan(&cfg, Path::new("."));
        let package = package_json(&plan, "package.json");

        assert_eq!(package["scripts"]["dev"], "nodemon src/index.js");
        assert_eq!(package["main"], "src/index.js");
        assert!(plan.file("src/index.js").unwrap().contents.contains("Fastify"));
        assert!(plan.file("tsconfig.json").is_none());
    }

    #[test]
    fn test_fullstack_monorepo_layout() {
        let mut cfg = config(Framework::Fullstack);
        cfg.package_manager = PackageManager::Pnpm;
        let plan = plan(&cfg, Path::new("."));

        let root = package_json(&plan, "package.json");
        assert_eq!(root["workspaces"], json!(["apps/*", "packages/*"]));
        assert_eq!(root["scripts"]["dev"], "concurrently \"pnpm dev:frontend\" \"pnpm dev:backend\"");
        assert_eq!(root["devDependencies"]["concurrently"], "^8.2.2");

        let frontend = package_json(&plan, "apps/frontend/package.json");
        assert_eq!(frontend["name"], "@demo-app/frontend");
        assert_eq!(frontend["dependencies"]["react"], "^18.3.1");
        assert_eq!(frontend["devDependencies"]["typescript"], "^5.7.2");

        let backend = package_json(&plan, "apps/backend/package.json");
        assert_eq!(backend["devDependencies"]["@types/cors"], "^2.8.17");

        let main = plan.file("apps/frontend/src/main.tsx").unwrap();
        assert!(main.contents.contains("getElementById('root')!"));
        assert!(plan.file("apps/backend/src/server.ts").is_some());
        assert!(plan.file("packages/shared/types.ts").is_some());
        assert!(plan.file("apps/frontend/vite.config.ts").unwrap().contents.contains("5000"));
        assert!(plan.file("README.md").unwrap().contents.contains("pnpm install"));
    }

    #[test]
    fn test_fullstack_javascript_skips_typescript_files() {
        let mut cfg = config(Framework::Fullstack);
        cfg.language = Language::JavaScript;
        let plan = plan(&cfg, Path::new("."));

        assert!(plan.file("apps/frontend/src/main.jsx").is_some());
        assert!(plan.file("apps/backend/tsconfig.json").is_none());
        assert!(plan.file("packages/shared/types.ts").is_none());

        let backend = package_json(&plan, "apps/backend/package.json");
        assert_eq!(backend["scripts"]["dev"], "nodemon");
        assert!(backend["devDependencies"].get("typescript").is_none());
    }

    #[test]
    fn test_write_files_creates_tree() {
        let dir = TempDir::new().unwrap();
        let plan = plan(&config(Framework::Express), Path::new("."));
        let ScaffoldPlan::Files { directories, files } = &plan else {
            panic!("express is generated from files");
        };

        write_files(dir.path(), directories, files).unwrap();

        assert!(dir.path().join("src/routes").is_dir());
        assert!(dir.path().join("src/index.ts").is_file());
        let written = std::fs::read_to_string(dir.path().join("package.json")).unwrap();
        assert!(written.ends_with('\n'));
    }
}
