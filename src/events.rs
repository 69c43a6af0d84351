// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/events.rs - 页面事件订阅
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

use std::{
  cell::RefCell,
  rc::{Rc, Weak},
};

use tracing::{debug, warn};

/// 页面上的环境事件
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
  Scroll {
    scroll_y: f32,
    scroll_height: f32,
    client_height: f32,
  },
  Navigate(String),
  Key(KeyPress),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
  ArrowDown,
  ArrowUp,
  Enter,
  Escape,
  Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
  pub key: Key,
  pub ctrl: bool,
  pub meta: bool,
}

impl KeyPress {
  pub fn plain(key: Key) -> Self {
    Self {
      key,
      ctrl: false,
      meta: false,
    }
  }

  pub fn ctrl(key: Key) -> Self {
    Self {
      key,
      ctrl: true,
      meta: false,
    }
  }

  /// 解析 `down` / `up` / `enter` / `esc` / `ctrl+k` / 单个字符
  pub fn parse(token: &str) -> Option<Self> {
    let token = token.trim().to_lowercase();
    let (ctrl, meta, name) = if let Some(rest) = token.strip_prefix("ctrl+") {
      (true, false, rest.to_string())
    } else if let Some(rest) = token.strip_prefix("cmd+") {
      (false, true, rest.to_string())
    } else {
      (false, false, token)
    };
    let key = match name.as_str() {
      "down" | "arrowdown" => Key::ArrowDown,
      "up" | "arrowup" => Key::ArrowUp,
      "enter" => Key::Enter,
      "esc" | "escape" => Key::Escape,
      other => {
        let mut chars = other.chars();
        match (chars.next(), chars.next()) {
          (Some(c), None) => Key::Char(c),
          _ => return None,
        }
      }
    };
    Some(Self { key, ctrl, meta })
  }
}

type Handler<E> = Rc<RefCell<dyn FnMut(&E)>>;

struct Listeners<E> {
  next_id: u64,
  handlers: Vec<(u64, Handler<E>)>,
}

/// 单线程事件总线，订阅返回的 [`Subscription`] 被丢弃时自动退订
pub struct EventBus<E> {
  listeners: Rc<RefCell<Listeners<E>>>,
}

impl<E> Default for EventBus<E> {
  fn default() -> Self {
    Self {
      listeners: Rc::new(RefCell::new(Listeners {
        next_id: 0,
        handlers: Vec::new(),
      })),
    }
  }
}

impl<E: 'static> EventBus<E> {
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use = "dropping the subscription unsubscribes immediately"]
  pub fn subscribe(&self, handler: impl FnMut(&E) + 'static) -> Subscription {
    let id = {
      let mut listeners = self.listeners.borrow_mut();
      let id = listeners.next_id;
      listeners.next_id += 1;
      let handler: Handler<E> = Rc::new(RefCell::new(handler));
      listeners.handlers.push((id, handler));
      id
    };
    debug!("新增事件订阅 #{}", id);

    let weak: Weak<RefCell<Listeners<E>>> = Rc::downgrade(&self.listeners);
    Subscription {
      unsubscribe: Some(Box::new(move || {
        if let Some(listeners) = weak.upgrade() {
          listeners.borrow_mut().handlers.retain(|(other, _)| *other != id);
          debug!("取消事件订阅 #{}", id);
        }
      })),
    }
  }

  pub fn emit(&self, event: &E) {
    // 先复制一份，回调中可以订阅或退订
    let handlers: Vec<Handler<E>> = self
      .listeners
      .borrow()
      .handlers
      .iter()
      .map(|(_, handler)| handler.clone())
      .collect();
    for handler in handlers {
      match handler.try_borrow_mut() {
        Ok(mut handler) => (&mut *handler)(event),
        Err(_) => warn!("事件回调重入，已跳过"),
      }
    }
  }

  pub fn listener_count(&self) -> usize {
    self.listeners.borrow().handlers.len()
  }
}

pub struct Subscription {
  unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
  /// 显式退订，等同于 drop
  pub fn cancel(mut self) {
    if let Some(unsubscribe) = self.unsubscribe.take() {
      unsubscribe();
    }
  }
}

impl Drop for Subscription {
  fn drop(&mut self) {
    if let Some(unsubscribe) = self.unsubscribe.take() {
      unsubscribe();
    }
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  #[test]
  fn dropping_subscription_unsubscribes() {
    let bus = EventBus::<u32>::new();
    let seen = Rc::new(Cell::new(0));
    let counter = seen.clone();
    let subscription = bus.subscribe(move |value| counter.set(counter.get() + value));

    bus.emit(&2);
    assert_eq!(bus.listener_count(), 1);
    drop(subscription);
    bus.emit(&5);

    assert_eq!(seen.get(), 2);
    assert_eq!(bus.listener_count(), 0);
  }

  #[test]
  fn subscription_outliving_bus_is_harmless() {
    let subscription = {
      let bus = EventBus::<u32>::new();
      bus.subscribe(|_| {})
    };
    subscription.cancel();
  }

  #[test]
  fn each_subscriber_sees_every_event() {
    let bus = EventBus::<PageEvent>::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let first_log = log.clone();
    let second_log = log.clone();
    let _first = bus.subscribe(move |e| first_log.borrow_mut().push(format!("a:{e:?}")));
    let _second = bus.subscribe(move |e| second_log.borrow_mut().push(format!("b:{e:?}")));

    bus.emit(&PageEvent::Navigate("/docs".to_string()));
    assert_eq!(log.borrow().len(), 2);
  }

  #[test]
  fn key_tokens() {
    assert_eq!(KeyPress::parse("down"), Some(KeyPress::plain(Key::ArrowDown)));
    assert_eq!(KeyPress::parse("Ctrl+K"), Some(KeyPress::ctrl(Key::Char('k'))));
    assert_eq!(KeyPress::parse("cmd+k").map(|k| k.meta), Some(true));
    assert_eq!(KeyPress::parse("esc"), Some(KeyPress::plain(Key::Escape)));
    assert_eq!(KeyPress::parse("pagedown"), None);
  }
}
