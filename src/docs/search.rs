// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/docs/search.rs - 文档搜索与键盘导航
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

use tracing::debug;

use super::navigation::nav_items;
use crate::events::{Key, KeyPress};

pub const MAX_RESULTS: usize = 8;
pub const POPULAR_SEARCHES: [&str; 4] = ["installation", "quick start", "detection", "API"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
  pub title: &'static str,
  pub href: &'static str,
  pub description: &'static str,
  pub category: &'static str,
  matches: [String; 3],
}

impl SearchResult {
  fn is_exact(&self, query: &str) -> bool {
    self.matches.iter().any(|m| m == query)
  }

  fn title_matches(&self, query: &str) -> bool {
    self.matches[0].contains(query)
  }
}

/// 空白查询没有结果；先精确匹配，再标题匹配，其余保持导航顺序
pub fn search(query: &str) -> Vec<SearchResult> {
  if query.trim().is_empty() {
    return Vec::new();
  }
  let query = query.to_lowercase();
  let mut results: Vec<SearchResult> = nav_items()
    .map(|(section, item)| SearchResult {
      title: item.title,
      href: item.href,
      description: item.description,
      category: section.title,
      matches: [
        item.title.to_lowercase(),
        item.description.to_lowercase(),
        section.title.to_lowercase(),
      ],
    })
    .filter(|result| result.matches.iter().any(|m| m.contains(&query)))
    .collect();

  // sort_by_key 是稳定排序
  results.sort_by_key(|r| (!r.is_exact(&query), !r.title_matches(&query)));
  results.truncate(MAX_RESULTS);
  debug!("搜索 {:?} 命中 {} 条", query, results.len());
  results
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
  Navigate(&'static str),
  Opened,
  Closed,
}

#[derive(Debug, Default)]
pub struct SearchModal {
  query: String,
  results: Vec<SearchResult>,
  selected: usize,
  open: bool,
}

impl SearchModal {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn open(&mut self) {
    self.open = true;
  }

  pub fn close(&mut self) {
    self.open = false;
  }

  pub fn is_open(&self) -> bool {
    self.open
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn results(&self) -> &[SearchResult] {
    &self.results
  }

  pub fn selected(&self) -> usize {
    self.selected
  }

  pub fn set_query(&mut self, query: &str) {
    self.query = query.to_string();
    self.results = search(query);
    self.selected = 0;
  }

  /// 处理一次按键；未打开时只响应 Ctrl/Cmd+K
  pub fn handle_key(&mut self, press: KeyPress) -> Option<SearchAction> {
    if (press.ctrl || press.meta) && press.key == Key::Char('k') {
      self.open();
      return Some(SearchAction::Opened);
    }
    if !self.open {
      return None;
    }

    let count = self.results.len();
    match press.key {
      Key::ArrowDown if count > 0 => {
        self.selected = (self.selected + 1) % count;
        None
      }
      Key::ArrowUp if count > 0 => {
        self.selected = (self.selected + count - 1) % count;
        None
      }
      Key::Enter => {
        let href = self.results.get(self.selected)?.href;
        self.close();
        Some(SearchAction::Navigate(href))
      }
      Key::Escape => {
        self.close();
        Some(SearchAction::Closed)
      }
      _ => None,
    }
  }
}

impl fmt::Display for SearchModal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !self.open {
      return Ok(());
    }
    let prompt = if self.query.is_empty() {
      "Search documentation..."
    } else {
      self.query.as_str()
    };
    writeln!(f, "🔍 {}", prompt)?;

    if self.query.trim().is_empty() {
      writeln!(f, "  Start typing to search documentation")?;
      writeln!(f, "  Popular: {}", POPULAR_SEARCHES.join(", "))?;
    } else if self.results.is_empty() {
      writeln!(f, "  No results found for \"{}\"", self.query)?;
      writeln!(f, "  Try different keywords or browse the navigation")?;
    } else {
      for (i, result) in self.results.iter().enumerate() {
        let marker = if i == self.selected { ">" } else { " " };
        writeln!(f, "{} {} [{}]", marker, result.title, result.category)?;
        writeln!(f, "    {}", result.description)?;
      }
    }

    let count = self.results.len();
    writeln!(
      f,
      "Use ↑↓ to navigate, Enter to select, Esc to close · {} result{}",
      count,
      if count == 1 { "" } else { "s" }
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(token: &str) -> KeyPress {
    KeyPress::parse(token).unwrap()
  }

  #[test]
  fn blank_query_has_no_results() {
    assert!(search("").is_empty());
    assert!(search("   ").is_empty());
  }

  #[test]
  fn install_ranks_installation_first() {
    let results = search("install");
    assert_eq!(results[0].title, "Installation");
    assert_eq!(results[0].href, "/docs/installation");
  }

  #[test]
  fn exact_matches_come_before_title_matches() {
    // "features" 是分组标题的精确匹配
    let results = search("Features");
    assert!(results.len() >= 4);
    assert!(results[..4].iter().all(|r| r.category == "Features"));
  }

  #[test]
  fn results_are_capped() {
    let results = search("o");
    assert_eq!(results.len(), MAX_RESULTS);
  }

  #[test]
  fn keyboard_navigation_wraps() {
    let mut modal = SearchModal::new();
    modal.handle_key(press("ctrl+k"));
    modal.set_query("docker");
    assert_eq!(modal.results().len(), 1);
    modal.set_query("api");
    let count = modal.results().len();
    assert!(count > 1);

    modal.handle_key(press("up"));
    assert_eq!(modal.selected(), count - 1);
    modal.handle_key(press("down"));
    assert_eq!(modal.selected(), 0);
    modal.handle_key(press("down"));
    assert_eq!(modal.selected(), 1);

    modal.set_query("api");
    assert_eq!(modal.selected(), 0);
  }

  #[test]
  fn arrows_do_nothing_without_results() {
    let mut modal = SearchModal::new();
    modal.open();
    modal.set_query("zzzz");
    assert_eq!(modal.handle_key(press("down")), None);
    assert_eq!(modal.selected(), 0);
    assert_eq!(modal.handle_key(press("enter")), None);
    assert!(modal.is_open());
    assert!(modal.to_string().contains("No results found for \"zzzz\""));
  }

  #[test]
  fn enter_navigates_and_closes() {
    let mut modal = SearchModal::new();
    assert_eq!(modal.handle_key(press("cmd+k")), Some(SearchAction::Opened));
    modal.set_query("quick");
    assert_eq!(
      modal.handle_key(press("enter")),
      Some(SearchAction::Navigate("/docs/quick-start"))
    );
    assert!(!modal.is_open());
  }

  #[test]
  fn closed_modal_ignores_keys() {
    let mut modal = SearchModal::new();
    modal.set_query("install");
    assert_eq!(modal.handle_key(press("enter")), None);
    assert_eq!(modal.to_string(), "");

    modal.open();
    assert_eq!(modal.handle_key(press("esc")), Some(SearchAction::Closed));
    assert!(!modal.is_open());
  }
}
