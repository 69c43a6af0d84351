// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/landing.rs - 首页各区块与滚动跟踪
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

use chrono::{Datelike, Local};

use crate::events::{EventBus, PageEvent, Subscription};

/// 导航顺序
pub const NAV_ITEMS: [(&str, &str); 4] = [
  ("home", "Home"),
  ("features", "Features"),
  ("about", "About"),
  ("contact", "Contact"),
];

/// 判定当前区块时在滚动位置上加的偏移
pub const SCROLL_OFFSET: f32 = 100.0;
/// 超过该位置显示“回到顶部”
pub const SCROLL_TOP_THRESHOLD: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
  pub id: &'static str,
  pub offset: f32,
  pub height: f32,
}

impl SectionBounds {
  fn contains(&self, position: f32) -> bool {
    position >= self.offset && position < self.offset + self.height
  }
}

/// 滚动进度百分比，页面不可滚动时为 0
pub fn progress_percent(scroll_y: f32, scroll_height: f32, client_height: f32) -> f32 {
  let scrollable = scroll_height - client_height;
  if scrollable <= 0.0 {
    return 0.0;
  }
  (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
  sections: Vec<SectionBounds>,
  active: &'static str,
  show_scroll_top: bool,
  progress: f32,
}

impl ScrollTracker {
  pub fn new(sections: Vec<SectionBounds>) -> Self {
    Self {
      sections,
      active: "home",
      show_scroll_top: false,
      progress: 0.0,
    }
  }

  /// 每个区块高度相同的布局，用于命令行演示
  pub fn uniform(section_height: f32) -> Self {
    let sections = NAV_ITEMS
      .iter()
      .enumerate()
      .map(|(i, (id, _))| SectionBounds {
        id: *id,
        offset: i as f32 * section_height,
        height: section_height,
      })
      .collect();
    Self::new(sections)
  }

  /// 第一个包含 `scroll_y + 100` 的区块成为当前区块；都不包含时保持不变
  pub fn active_section(&mut self, scroll_y: f32) -> &'static str {
    let position = scroll_y + SCROLL_OFFSET;
    for (id, _) in NAV_ITEMS {
      if let Some(bounds) = self.sections.iter().find(|b| b.id == id)
        && bounds.contains(position)
      {
        self.active = bounds.id;
        break;
      }
    }
    self.active
  }

  pub fn on_scroll(&mut self, scroll_y: f32, scroll_height: f32, client_height: f32) {
    self.show_scroll_top = scroll_y > SCROLL_TOP_THRESHOLD;
    self.active_section(scroll_y);
    self.progress = progress_percent(scroll_y, scroll_height, client_height);
  }

  pub fn active(&self) -> &'static str {
    self.active
  }

  pub fn show_scroll_top(&self) -> bool {
    self.show_scroll_top
  }

  pub fn progress(&self) -> f32 {
    self.progress
  }
}

/// 订阅滚动事件的导航栏，drop 时退订
pub struct Navbar {
  tracker: Rc<RefCell<ScrollTracker>>,
  _subscription: Subscription,
}

impl Navbar {
  pub fn attach(bus: &EventBus<PageEvent>, tracker: ScrollTracker) -> Self {
    let tracker = Rc::new(RefCell::new(tracker));
    let handle = tracker.clone();
    let subscription = bus.subscribe(move |event| {
      if let PageEvent::Scroll {
        scroll_y,
        scroll_height,
        client_height,
      } = *event
      {
        handle
          .borrow_mut()
          .on_scroll(scroll_y, scroll_height, client_height);
      }
    });
    Self {
      tracker,
      _subscription: subscription,
    }
  }

  pub fn active_section(&self) -> &'static str {
    self.tracker.borrow().active()
  }

  pub fn show_scroll_top(&self) -> bool {
    self.tracker.borrow().show_scroll_top()
  }

  pub fn progress(&self) -> f32 {
    self.tracker.borrow().progress()
  }
}

impl fmt::Display for Navbar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let tracker = self.tracker.borrow();
    let filled = (tracker.progress() / 5.0).round() as usize;
    writeln!(
      f,
      "[{}{}] {:.0}%",
      "█".repeat(filled),
      "░".repeat(20usize.saturating_sub(filled)),
      tracker.progress()
    )?;
    let dots: Vec<String> = NAV_ITEMS
      .iter()
      .map(|(id, label)| {
        let marker = if *id == tracker.active() { "●" } else { "○" };
        format!("{marker} {label}")
      })
      .collect();
    writeln!(f, "{}", dots.join("  "))?;
    if tracker.show_scroll_top() {
      writeln!(f, "[↑ Scroll to top]")?;
    }
    Ok(())
  }
}

struct FeatureCard {
  icon: &'static str,
  title: &'static str,
  body: &'static str,
}

const FEATURES: [FeatureCard; 3] = [
  FeatureCard {
    icon: "🤖",
    title: "AI-Powered Recommendations",
    body: "Get personalized outfit suggestions based on your style preferences and body type.",
  },
  FeatureCard {
    icon: "👗",
    title: "Virtual Wardrobe",
    body: "Organize and manage your clothes digitally with our smart wardrobe system.",
  },
  FeatureCard {
    icon: "📱",
    title: "Mobile Ready",
    body: "Access your style assistant anywhere with our responsive mobile design.",
  },
];

const CONTACT_EMAIL: &str = "hello@outfitguru.com";
const CONTACT_PHONE: &str = "+1 (555) 123-4567";
const CONTACT_LOCATION: &str = "San Francisco, CA";

fn header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
  let labels: Vec<_> = NAV_ITEMS.iter().map(|(_, label)| *label).collect();
  writeln!(f, "OutfitGuru    {}    [Get Started]", labels.join("  "))
}

fn home(f: &mut fmt::Formatter<'_>) -> fmt::Result {
  writeln!(f, "# Welcome to Outfit Guru")?;
  writeln!(f, "Your one-stop solution for outfit inspiration!")
}

fn features(f: &mut fmt::Formatter<'_>) -> fmt::Result {
  writeln!(f, "# Features")?;
  writeln!(
    f,
    "Discover the powerful features that make OutfitGuru your perfect fashion companion"
  )?;
  for card in &FEATURES {
    writeln!(f, "  {} {}", card.icon, card.title)?;
    writeln!(f, "     {}", card.body)?;
  }
  Ok(())
}

fn about(f: &mut fmt::Formatter<'_>) -> fmt::Result {
  writeln!(f, "# About OutfitGuru")?;
  writeln!(f, "Revolutionizing the way you dress with artificial intelligence")?;
  writeln!(f, "## Our Mission")?;
  writeln!(
    f,
    "At OutfitGuru, we believe that everyone deserves to look and feel their best. Our AI-powered \
     platform combines cutting-edge technology with fashion expertise to provide personalized \
     styling solutions that fit your lifestyle, budget, and preferences."
  )?;
  writeln!(
    f,
    "Whether you're preparing for a job interview, planning a weekend getaway, or just looking \
     to refresh your everyday style, OutfitGuru is here to guide you every step of the way."
  )?;
  writeln!(f, "  ✨ Style Made Simple")?;
  writeln!(
    f,
    "     Transform your wardrobe with intelligent recommendations tailored just for you."
  )
}

fn contact(f: &mut fmt::Formatter<'_>) -> fmt::Result {
  writeln!(f, "# Contact")?;
  writeln!(f, "  Email: {}", CONTACT_EMAIL)?;
  writeln!(f, "  Phone: {}", CONTACT_PHONE)?;
  writeln!(f, "  Location: {}", CONTACT_LOCATION)
}

fn footer(f: &mut fmt::Formatter<'_>, year: i32) -> fmt::Result {
  writeln!(f, "OutfitGuru")?;
  writeln!(
    f,
    "Your personal AI-powered fashion assistant. Get outfit recommendations, style advice, and \
     discover your perfect look with cutting-edge technology."
  )?;
  writeln!(f, "Quick Links: Home · Features · About Us · Contact")?;
  writeln!(
    f,
    "Services: AI Style Analysis · Outfit Recommendations · Wardrobe Management · Personal Styling"
  )?;
  writeln!(
    f,
    "Contact Info: {} · {} · {}",
    CONTACT_EMAIL, CONTACT_PHONE, CONTACT_LOCATION
  )?;
  writeln!(f, "Stay Updated: Get the latest fashion tips and updates delivered to your inbox.")?;
  writeln!(
    f,
    "© {} OutfitGuru. All rights reserved.  Privacy Policy · Terms of Service",
    year
  )
}

/// 按固定顺序拼装的首页
pub struct LandingPage<'a> {
  navbar: &'a Navbar,
  year: i32,
}

impl<'a> LandingPage<'a> {
  pub fn new(navbar: &'a Navbar) -> Self {
    Self {
      navbar,
      year: Local::now().year(),
    }
  }
}

impl fmt::Display for LandingPage<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    header(f)?;
    write!(f, "{}", self.navbar)?;
    writeln!(f)?;
    home(f)?;
    writeln!(f)?;
    features(f)?;
    writeln!(f)?;
    about(f)?;
    writeln!(f)?;
    contact(f)?;
    writeln!(f)?;
    footer(f, self.year)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scroll(bus: &EventBus<PageEvent>, scroll_y: f32) {
    bus.emit(&PageEvent::Scroll {
      scroll_y,
      scroll_height: 3200.0,
      client_height: 800.0,
    });
  }

  #[test]
  fn active_section_uses_offset_position() {
    let mut tracker = ScrollTracker::uniform(800.0);
    assert_eq!(tracker.active_section(0.0), "home");
    // 700 + 100 落在 features 的起点
    assert_eq!(tracker.active_section(700.0), "features");
    assert_eq!(tracker.active_section(2500.0), "contact");
  }

  #[test]
  fn active_section_is_kept_outside_all_sections() {
    let mut tracker = ScrollTracker::new(vec![
      SectionBounds {
        id: "home",
        offset: 0.0,
        height: 500.0,
      },
      SectionBounds {
        id: "about",
        offset: 1000.0,
        height: 500.0,
      },
    ]);
    assert_eq!(tracker.active_section(950.0), "about");
    assert_eq!(tracker.active_section(600.0), "about");
    assert_eq!(tracker.active_section(5000.0), "about");
  }

  #[test]
  fn progress_handles_unscrollable_pages() {
    assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
    assert_eq!(progress_percent(1200.0, 3200.0, 800.0), 50.0);
    assert_eq!(progress_percent(9999.0, 3200.0, 800.0), 100.0);
  }

  #[test]
  fn navbar_follows_scroll_until_dropped() {
    let bus = EventBus::new();
    let navbar = Navbar::attach(&bus, ScrollTracker::uniform(800.0));

    scroll(&bus, 450.0);
    assert!(navbar.show_scroll_top());
    assert_eq!(navbar.active_section(), "home");
    scroll(&bus, 1600.0);
    assert_eq!(navbar.active_section(), "about");
    assert!(navbar.to_string().contains("● About"));

    drop(navbar);
    assert_eq!(bus.listener_count(), 0);
  }

  #[test]
  fn landing_sections_render_in_order() {
    let bus = EventBus::new();
    let navbar = Navbar::attach(&bus, ScrollTracker::uniform(800.0));
    let text = LandingPage::new(&navbar).to_string();
    let order = [
      "OutfitGuru    Home",
      "Welcome to Outfit Guru",
      "# Features",
      "# About OutfitGuru",
      "# Contact",
      "All rights reserved.",
    ];
    let positions: Vec<_> = order.iter().map(|s| text.find(s).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
  }
}
