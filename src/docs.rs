// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/docs.rs - 文档站点
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

use std::{cell::RefCell, fmt, rc::Rc};

use tracing::info;

use crate::events::{EventBus, KeyPress, PageEvent, Subscription};

pub mod navigation;
pub mod pages;
pub mod router;
pub mod search;

pub use self::navigation::{SIDEBAR_NAV, Sidebar, current_doc_route, is_active, is_docs_route};
pub use self::pages::DocPage;
pub use self::router::DocsRouter;
pub use self::search::{SearchAction, SearchModal, search};

#[derive(Debug)]
struct DocsState {
  path: String,
  modal: SearchModal,
}

impl DocsState {
  fn navigate(&mut self, path: &str) {
    let path = current_doc_route(path).to_string();
    info!("打开文档页面: {}", path);
    self.path = path;
  }

  fn key(&mut self, press: KeyPress) {
    if let Some(SearchAction::Navigate(href)) = self.modal.handle_key(press) {
      self.navigate(href);
    }
  }
}

/// 侧边栏、页面与搜索框组成的文档站点
pub struct DocsSite {
  router: DocsRouter,
  state: Rc<RefCell<DocsState>>,
  _subscription: Subscription,
}

impl DocsSite {
  pub fn attach(bus: &EventBus<PageEvent>, path: &str) -> Self {
    let state = Rc::new(RefCell::new(DocsState {
      path: current_doc_route(path).to_string(),
      modal: SearchModal::new(),
    }));
    let handle = state.clone();
    let subscription = bus.subscribe(move |event| match event {
      PageEvent::Navigate(path) => handle.borrow_mut().navigate(path),
      PageEvent::Key(press) => handle.borrow_mut().key(*press),
      PageEvent::Scroll { .. } => {}
    });
    Self {
      router: DocsRouter::new(),
      state,
      _subscription: subscription,
    }
  }

  pub fn path(&self) -> String {
    self.state.borrow().path.clone()
  }

  pub fn page(&self) -> DocPage {
    self.router.dispatch(&self.state.borrow().path)
  }

  pub fn set_query(&self, query: &str) {
    self.state.borrow_mut().modal.set_query(query);
  }

  pub fn is_search_open(&self) -> bool {
    self.state.borrow().modal.is_open()
  }
}

impl fmt::Display for DocsSite {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = self.state.borrow();
    writeln!(f, "OutfitGuru Docs    [Search docs... ⌘K]")?;
    writeln!(f)?;
    write!(
      f,
      "{}",
      Sidebar {
        current_path: &state.path,
      }
    )?;
    writeln!(f)?;
    write!(f, "{}", self.router.dispatch(&state.path))?;
    if state.modal.is_open() {
      writeln!(f)?;
      write!(f, "{}", state.modal)?;
    }
    Ok(())
  }
}
