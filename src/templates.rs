//! Canonical file templates used by `CreateFile` actions and the env setup.
//!
//! Each config template is written to satisfy its own content checks, so a
//! freshly generated file audits clean.

/// Canonical Vite configuration (TypeScript variant)
pub const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import path from 'path'

export default defineConfig({
  plugins: [react()],
  resolve: {
    alias: {
      '@': path.resolve(__dirname, './src'),
    },
  },
  build: {
    chunkSizeWarningLimit: 1000,
    rollupOptions: {
      output: {
        manualChunks: (id) => {
          if (id.includes('node_modules')) {
            return 'vendor'
          }
        },
      },
    },
  },
})
"#;

/// Canonical TypeScript configuration
pub const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "module": "ESNext",
    "moduleResolution": "bundler",
    "jsx": "react-jsx",
    "strict": true,
    "esModuleInterop": true,
    "resolveJsonModule": true,
    "allowJs": true,
    "noEmit": true,
    "baseUrl": ".",
    "paths": {
      "@/*": ["./src/*"]
    }
  },
  "include": ["src"]
}
"#;

/// Canonical Tailwind CSS configuration
pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./index.html', './src/**/*.{js,ts,jsx,tsx}'],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

/// Template for a config group, when one exists
pub fn template_for_group(group_key: &str) -> Option<(&'static str, &'static str)> {
    match group_key {
        "vite" => Some(("vite.config.ts", VITE_CONFIG)),
        "tsconfig.json" => Some(("tsconfig.json", TSCONFIG)),
        "tailwind.config.js" => Some(("tailwind.config.js", TAILWIND_CONFIG)),
        _ => None,
    }
}

/// Environment-file templates, in creation order
pub fn env_templates() -> &'static [(&'static str, &'static str)] {
    &[
        (".env.example", ENV_EXAMPLE),
        (".env", ENV_LOCAL),
        (".env.development", ENV_DEVELOPMENT),
        (".env.production", ENV_PRODUCTION),
        (".env.test", ENV_TEST),
    ]
}

/// Block appended to `.gitignore` so local env files stay out of version control
pub const GITIGNORE_ENV_BLOCK: &str = "# Environment variables
.env
.env.local
.env.development.local
.env.test.local
.env.production.local
";

const ENV_EXAMPLE: &str = r#"# API Configuration
VITE_API_URL=http://localhost:8000/api
VITE_API_TIMEOUT=30000

# Authentication
VITE_AUTH_ENABLED=true
VITE_AUTH_DOMAIN=your-auth-domain
VITE_AUTH_CLIENT_ID=your-client-id
VITE_AUTH_AUDIENCE=your-audience

# Feature Flags
VITE_FEATURE_ANALYTICS=false
VITE_FEATURE_NOTIFICATIONS=true
VITE_FEATURE_DARK_MODE=true

# Logging
VITE_LOG_LEVEL=info

# Application Settings
VITE_APP_NAME=my-app
VITE_APP_VERSION=1.0.0
VITE_APP_ENVIRONMENT=development
"#;

const ENV_LOCAL: &str = r#"# Local Development Environment Variables
VITE_API_URL=http://localhost:8000/api
VITE_API_TIMEOUT=30000

# Authentication (disabled for local development)
VITE_AUTH_ENABLED=false

# Feature Flags
VITE_FEATURE_ANALYTICS=false
VITE_FEATURE_NOTIFICATIONS=true
VITE_FEATURE_DARK_MODE=true

# Logging
VITE_LOG_LEVEL=debug

# Application Settings
VITE_APP_NAME=my-app
VITE_APP_VERSION=1.0.0
VITE_APP_ENVIRONMENT=development
"#;

const ENV_DEVELOPMENT: &str = r#"# Development Environment Variables
VITE_API_URL=https://dev-api.example.com/api
VITE_API_TIMEOUT=30000

# Authentication
VITE_AUTH_ENABLED=true

# Feature Flags
VITE_FEATURE_ANALYTICS=true
VITE_FEATURE_NOTIFICATIONS=true
VITE_FEATURE_DARK_MODE=true

# Logging
VITE_LOG_LEVEL=debug

# Application Settings
VITE_APP_ENVIRONMENT=development
"#;

const ENV_PRODUCTION: &str = r#"# Production Environment Variables
VITE_API_URL=https://api.example.com/api
VITE_API_TIMEOUT=30000

# Authentication
VITE_AUTH_ENABLED=true

# Feature Flags
VITE_FEATURE_ANALYTICS=true
VITE_FEATURE_NOTIFICATIONS=true
VITE_FEATURE_DARK_MODE=true

# Logging
VITE_LOG_LEVEL=error

# Application Settings
VITE_APP_ENVIRONMENT=production
"#;

const ENV_TEST: &str = r#"# Test Environment Variables
VITE_API_URL=http://localhost:8000/api
VITE_API_TIMEOUT=5000

# Authentication (disabled for testing)
VITE_AUTH_ENABLED=false

# Feature Flags
VITE_FEATURE_ANALYTICS=false
VITE_FEATURE_NOTIFICATIONS=false
VITE_FEATURE_DARK_MODE=true

# Logging
VITE_LOG_LEVEL=debug

# Application Settings
VITE_APP_ENVIRONMENT=test
"#;
