//! Pinned versions written into generated package.json files

const VERSIONS: &[(&str, &str)] = &[
    // React ecosystem
    ("react", "^18.3.1"),
    ("react-dom", "^18.3.1"),
    ("react-router-dom", "^6.28.0"),
    ("@reduxjs/toolkit", "^2.5.0"),
    ("react-redux", "^9.2.0"),
    ("zustand", "^5.0.2"),
    // Vue ecosystem
    ("vue", "^3.5.13"),
    ("vue-router", "^4.5.0"),
    ("pinia", "^2.3.0"),
    ("vuex", "^4.1.0"),
    // Build tools
    ("vite", "^6.0.3"),
    ("@vitejs/plugin-react", "^4.3.4"),
    ("@vitejs/plugin-vue", "^5.2.1"),
    // CSS frameworks
    ("tailwindcss", "^4.0.0-beta.14"),
    ("@tailwindcss/vite", "^4.0.0-beta.14"),
    ("bootstrap", "^5.3.3"),
    ("@mui/material", "^6.3.1"),
    ("@emotion/react", "^11.14.0"),
    ("@emotion/styled", "^11.14.0"),
    ("@chakra-ui/react", "^2.10.4"),
    // Backend
    ("express", "^4.21.2"),
    ("fastify", "^5.2.0"),
    ("cors", "^2.8.5"),
    ("dotenv", "^16.4.7"),
    ("nodemon", "^3.1.9"),
    ("concurrently", "^8.2.2"),
    // Utilities
    ("axios", "^1.7.9"),
    ("react-icons", "^5.4.0"),
    // TypeScript
    ("typescript", "^5.7.2"),
    ("tsx", "^4.7.0"),
    ("@types/react", "^18.3.18"),
    ("@types/react-dom", "^18.3.5"),
    ("@types/node", "^22.10.2"),
    ("@types/express", "^5.0.0"),
    ("@types/cors", "^2.8.17"),
];

/// Version range used when a package is written into a generated manifest
pub fn pinned_version(package: &str) -> Option<&'static str> {
    VERSIONS
        .iter()
        .find(|(name, _)| *name == package)
        .map(|(_, version)| *version)
}
