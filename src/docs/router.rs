// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/docs/router.rs - 文档路由表
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

use tracing::debug;

use super::pages::{self, Article, DocPage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePage {
  Article(&'static Article),
  Placeholder {
    title: &'static str,
    description: &'static str,
  },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
  pub path: &'static str,
  pub page: RoutePage,
}

const fn article(path: &'static str, article: &'static Article) -> Route {
  Route {
    path,
    page: RoutePage::Article(article),
  }
}

const fn placeholder(path: &'static str, title: &'static str, description: &'static str) -> Route {
  Route {
    path,
    page: RoutePage::Placeholder { title, description },
  }
}

/// 精确匹配的路由表，不支持参数
pub static ROUTES: &[Route] = &[
  article("/docs", &pages::INTRODUCTION),
  article("/docs/", &pages::INTRODUCTION),
  article("/docs/installation", &pages::INSTALLATION),
  article("/docs/quick-start", &pages::QUICK_START),
  article("/docs/outfit-detection", &pages::OUTFIT_DETECTION),
  placeholder(
    "/docs/project-structure",
    "Project Structure",
    "Understanding the codebase organization and architecture",
  ),
  placeholder(
    "/docs/style-analysis",
    "Style Analysis",
    "AI-powered outfit style analysis and fashion insights",
  ),
  placeholder(
    "/docs/recommendations",
    "Recommendations",
    "Personalized outfit suggestions and styling advice",
  ),
  placeholder(
    "/docs/face-blur",
    "Face Blur",
    "Privacy protection with intelligent face blurring technology",
  ),
  placeholder(
    "/docs/api/backend",
    "Backend API",
    "Complete backend API documentation and reference",
  ),
  placeholder(
    "/docs/api/endpoints",
    "API Endpoints",
    "Available API endpoints, parameters, and response formats",
  ),
  placeholder(
    "/docs/api/models",
    "Data Models",
    "API data models, schemas, and type definitions",
  ),
  placeholder(
    "/docs/components",
    "Component Overview",
    "UI component library and design system documentation",
  ),
  placeholder(
    "/docs/components/upload",
    "Upload Component",
    "Image upload component with drag-and-drop functionality",
  ),
  placeholder(
    "/docs/components/detection",
    "Detection Components",
    "Outfit detection UI components and interfaces",
  ),
  placeholder(
    "/docs/components/results",
    "Results Components",
    "Components for displaying detection results and analysis",
  ),
  placeholder(
    "/docs/deployment/docker",
    "Docker Deployment",
    "Deploy Outfit Guru using Docker containers",
  ),
  placeholder(
    "/docs/deployment/production",
    "Production Deployment",
    "Production deployment guide and best practices",
  ),
  placeholder(
    "/docs/deployment/environment",
    "Environment Variables",
    "Configuration and environment setup for different environments",
  ),
  placeholder(
    "/docs/contributing",
    "Contributing Guidelines",
    "How to contribute to the Outfit Guru project",
  ),
  placeholder(
    "/docs/development-setup",
    "Development Setup",
    "Setting up the development environment for contributors",
  ),
  placeholder(
    "/docs/code-style",
    "Code Style Guide",
    "Code formatting, style guidelines, and best practices",
  ),
];

#[derive(Debug, Clone, Copy)]
pub struct DocsRouter {
  routes: &'static [Route],
}

impl Default for DocsRouter {
  fn default() -> Self {
    Self { routes: ROUTES }
  }
}

impl DocsRouter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn routes(&self) -> &'static [Route] {
    self.routes
  }

  pub fn dispatch(&self, path: &str) -> DocPage {
    match self.routes.iter().find(|route| route.path == path) {
      Some(route) => match route.page {
        RoutePage::Article(article) => DocPage::Article(article),
        RoutePage::Placeholder { title, description } => DocPage::Placeholder { title, description },
      },
      None => {
        debug!("未知文档路径: {}", path);
        DocPage::NotFound(path.to_string())
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::docs::navigation::nav_items;

  #[test]
  fn root_paths_map_to_introduction() {
    let router = DocsRouter::new();
    assert_eq!(router.dispatch("/docs").title(), "Welcome to Outfit Guru");
    assert_eq!(router.dispatch("/docs/"), router.dispatch("/docs"));
  }

  #[test]
  fn full_and_placeholder_pages() {
    let router = DocsRouter::new();
    assert!(matches!(router.dispatch("/docs/installation"), DocPage::Article(_)));
    assert_eq!(router.dispatch("/docs/quick-start").title(), "Quick Start Guide");
    let page = router.dispatch("/docs/api/models");
    assert_eq!(page.title(), "Data Models");
    assert_eq!(page.description(), "API data models, schemas, and type definitions");
    let placeholders = ROUTES
      .iter()
      .filter(|r| matches!(r.page, RoutePage::Placeholder { .. }))
      .count();
    assert_eq!(placeholders, 17);
  }

  #[test]
  fn unknown_path_names_itself() {
    let page = DocsRouter::new().dispatch("/docs/api/backend/v2");
    assert_eq!(page, DocPage::NotFound("/docs/api/backend/v2".to_string()));
  }

  #[test]
  fn every_nav_entry_is_routed() {
    let router = DocsRouter::new();
    for (_, item) in nav_items() {
      assert!(
        !matches!(router.dispatch(item.href), DocPage::NotFound(_)),
        "{} is not routed",
        item.href
      );
    }
  }
}
