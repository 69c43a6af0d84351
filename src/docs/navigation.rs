// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/docs/navigation.rs - 文档侧边栏导航
//
// 本文件根据 Apache 许可证第 2.0 版（以下简称“许可证”）授权使用；
// 除非遵守该许可证条款，否则您不得使用本文件。
// 您可通过以下网址获取许可证副本：
// http://www.apache.org/licenses/LICENSE-2.0
// 除非适用法律要求或书面同意，根据本许可协议分发的软件均按“原样”提供，
// 不附带任何形式的明示或暗示的保证或条件。
// 有关许可权限与限制的具体条款，请参阅本许可协议。
//
// Copyright (C) 2026 Outfit Guru Team <hello@outfitguru.com>

use std::fmt;

pub const DOCS_ROOT: &str = "/docs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
  pub title: &'static str,
  pub href: &'static str,
  pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
  pub title: &'static str,
  pub items: &'static [NavItem],
}

const fn item(title: &'static str, href: &'static str, description: &'static str) -> NavItem {
  NavItem {
    title,
    href,
    description,
  }
}

pub const SIDEBAR_NAV: &[NavSection] = &[
  NavSection {
    title: "Getting Started",
    items: &[
      item("Introduction", "/docs", "Learn about Outfit Guru and its capabilities"),
      item("Installation", "/docs/installation", "How to set up Outfit Guru locally"),
      item("Quick Start", "/docs/quick-start", "Get up and running in minutes"),
      item(
        "Project Structure",
        "/docs/project-structure",
        "Understanding the codebase organization",
      ),
    ],
  },
  NavSection {
    title: "Features",
    items: &[
      item(
        "Outfit Detection",
        "/docs/outfit-detection",
        "AI-powered clothing item detection",
      ),
      item("Style Analysis", "/docs/style-analysis", "Advanced outfit style analysis"),
      item("Recommendations", "/docs/recommendations", "Personalized outfit suggestions"),
      item("Face Blur", "/docs/face-blur", "Privacy protection with face blurring"),
    ],
  },
  NavSection {
    title: "API Reference",
    items: &[
      item("Backend API", "/docs/api/backend", "Complete backend API documentation"),
      item("Endpoints", "/docs/api/endpoints", "Available API endpoints and usage"),
      item("Models", "/docs/api/models", "Data models and schemas"),
    ],
  },
  NavSection {
    title: "Components",
    items: &[
      item("Overview", "/docs/components", "Component library overview"),
      item("Upload", "/docs/components/upload", "Image upload component"),
      item("Detection", "/docs/components/detection", "Outfit detection UI components"),
      item("Results", "/docs/components/results", "Results display components"),
    ],
  },
  NavSection {
    title: "Deployment",
    items: &[
      item("Docker", "/docs/deployment/docker", "Deploy with Docker containers"),
      item("Production", "/docs/deployment/production", "Production deployment guide"),
      item(
        "Environment Variables",
        "/docs/deployment/environment",
        "Configuration and environment setup",
      ),
    ],
  },
  NavSection {
    title: "Contributing",
    items: &[
      item("Guidelines", "/docs/contributing", "How to contribute to Outfit Guru"),
      item(
        "Development Setup",
        "/docs/development-setup",
        "Setting up development environment",
      ),
      item("Code Style", "/docs/code-style", "Code formatting and style guidelines"),
    ],
  },
];

/// 遍历所有导航条目及其所属分组
pub fn nav_items() -> impl Iterator<Item = (&'static NavSection, &'static NavItem)> {
  SIDEBAR_NAV
    .iter()
    .flat_map(|section| section.items.iter().map(move |item| (section, item)))
}

/// `/docs` 只在路径完全相同时高亮，其余条目按前缀匹配
pub fn is_active(href: &str, current_path: &str) -> bool {
  if href == DOCS_ROOT {
    current_path == DOCS_ROOT
  } else {
    current_path.starts_with(href)
  }
}

pub fn is_docs_route(path: &str) -> bool {
  path.starts_with(DOCS_ROOT)
}

pub fn current_doc_route(path: &str) -> &str {
  if is_docs_route(path) { path } else { DOCS_ROOT }
}

/// 侧边栏视图
pub struct Sidebar<'a> {
  pub current_path: &'a str,
}

impl fmt::Display for Sidebar<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for section in SIDEBAR_NAV {
      writeln!(f, "{}", section.title.to_uppercase())?;
      for item in section.items {
        let marker = if is_active(item.href, self.current_path) {
          "▸"
        } else {
          " "
        };
        writeln!(f, "  {} {}", marker, item.title)?;
      }
    }
    Ok(())
  }
}
