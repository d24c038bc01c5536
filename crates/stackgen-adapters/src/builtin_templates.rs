//! Built-in templates for the full-stack scaffold.
//!
//! Bodies are compile-time data; [`builtin_registry`] registers one body for
//! every id the planner references. Only `{{PROJECT_NAME}}` and `{{DB_NAME}}`
//! are substituted at render time; `${VAR}` references in the compose file
//! and TypeScript template literals are emitted verbatim for Docker and Node
//! to resolve at their own runtime.

use stackgen_core::domain::{Template, TemplateRegistry, ids};
use stackgen_core::error::StackgenResult;
use tracing::debug;

/// Build the registry of templates that ship with the tool.
///
/// Fails only if the built-in bodies themselves are malformed (a duplicate id
/// or an undeclared placeholder), which is a bug, not a user error.
pub fn builtin_registry() -> StackgenResult<TemplateRegistry> {
    let mut registry = TemplateRegistry::new();

    let templates = [
        Template::new(ids::BACKEND_MANIFEST, "backend/package.json", BACKEND_MANIFEST_BODY),
        Template::new(ids::BACKEND_TSCONFIG, "backend/tsconfig.json", BACKEND_TSCONFIG_BODY),
        Template::new(ids::PRISMA_SCHEMA, "backend/prisma/schema.prisma", PRISMA_SCHEMA_BODY),
        Template::new(ids::BACKEND_ENTRYPOINT, "backend/src/index.ts", BACKEND_ENTRYPOINT_BODY),
        Template::new(ids::BACKEND_DOCKERFILE, "backend/Dockerfile", BACKEND_DOCKERFILE_BODY),
        Template::new(ids::TAILWIND_CONFIG, "frontend/tailwind.config.js", TAILWIND_CONFIG_BODY),
        Template::new(ids::GLOBAL_STYLESHEET, "frontend/styles/globals.css", GLOBAL_STYLESHEET_BODY),
        Template::new(ids::INDEX_PAGE, "frontend/pages/index.tsx", INDEX_PAGE_BODY),
        Template::new(ids::COMPOSE_FILE, "docker-compose.yml", COMPOSE_FILE_BODY),
        Template::new(ids::ENV_EXAMPLE, ".env.example", ENV_EXAMPLE_BODY),
    ];

    for template in templates {
        debug!(id = %template.id, "Registering built-in template");
        registry.register(template)?;
    }

    Ok(registry)
}

const BACKEND_MANIFEST_BODY: &str = r#"{
  "name": "{{PROJECT_NAME}}-backend",
  "version": "0.1.0",
  "private": true,
  "main": "dist/index.js",
  "scripts": {
    "build": "tsc",
    "start": "node dist/index.js",
    "dev": "ts-node src/index.ts",
    "prisma:generate": "prisma generate",
    "prisma:migrate": "prisma migrate dev"
  },
  "dependencies": {
    "@prisma/client": "^5.22.0",
    "express": "^4.21.2"
  },
  "devDependencies": {
    "@types/express": "^4.17.21",
    "@types/node": "^20.17.9",
    "prisma": "^5.22.0",
    "ts-node": "^10.9.2",
    "typescript": "^5.7.2"
  }
}
"#;

const BACKEND_TSCONFIG_BODY: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "module": "commonjs",
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "outDir": "dist",
    "rootDir": "src"
  },
  "include": ["src"]
}
"#;

const PRISMA_SCHEMA_BODY: &str = r#"generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model Post {
  id        Int      @id @default(autoincrement())
  title     String
  createdAt DateTime @default(now())
}
"#;

const BACKEND_ENTRYPOINT_BODY: &str = r#"import express from "express";
import { PrismaClient } from "@prisma/client";

const app = express();
const prisma = new PrismaClient();
const port = process.env.PORT ?? 4000;

app.use(express.json());

app.get("/health", (_req, res) => {
  res.json({ service: "{{PROJECT_NAME}}", status: "ok" });
});

app.get("/posts", async (_req, res) => {
  const posts = await prisma.post.findMany();
  res.json(posts);
});

app.listen(port, () => {
  console.log(`{{PROJECT_NAME}} backend listening on port ${port}`);
});
"#;

const BACKEND_DOCKERFILE_BODY: &str = r#"FROM node:20-alpine

WORKDIR /app

RUN corepack enable

COPY package.json pnpm-lock.yaml* ./
RUN pnpm install

COPY . .
RUN pnpm prisma:generate
RUN pnpm build

EXPOSE 4000
CMD ["pnpm", "start"]
"#;

const TAILWIND_CONFIG_BODY: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  darkMode: "class",
  content: [
    "./pages/**/*.{js,ts,jsx,tsx}",
    "./components/**/*.{js,ts,jsx,tsx}",
    "./app/**/*.{js,ts,jsx,tsx}",
    "./node_modules/@nextui-org/theme/dist/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;

const GLOBAL_STYLESHEET_BODY: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;
"#;

// JSX braces stay single throughout; after substitution the body contains no
// brace pairs the template engine could have touched.
const INDEX_PAGE_BODY: &str = r#"import { Button } from "@nextui-org/react";

export default function Home() {
  return (
    <main className="flex min-h-screen flex-col items-center justify-center gap-4">
      <h1 className="text-4xl font-bold">Welcome to {{PROJECT_NAME}}</h1>
      <Button color="primary">Get Started</Button>
    </main>
  );
}
"#;

const COMPOSE_FILE_BODY: &str = r#"name: {{PROJECT_NAME}}

services:
  db:
    image: postgres:15
    restart: unless-stopped
    environment:
      POSTGRES_USER: ${POSTGRES_USER}
      POSTGRES_PASSWORD: ${POSTGRES_PASSWORD}
      POSTGRES_DB: ${POSTGRES_DB}
    ports:
      - "5432:5432"
    volumes:
      - db_data:/var/lib/postgresql/data

  backend:
    build: ./backend
    restart: unless-stopped
    depends_on:
      - db
    environment:
      DATABASE_URL: postgresql://${POSTGRES_USER}:${POSTGRES_PASSWORD}@db:5432/${POSTGRES_DB}?schema=public
    ports:
      - "4000:4000"
    command: pnpm start

volumes:
  db_data:
"#;

const ENV_EXAMPLE_BODY: &str = "POSTGRES_USER=user\nPOSTGRES_PASSWORD=password\nPOSTGRES_DB={{DB_NAME}}\n";
