// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/enhance/items.rs - 推荐条目分类
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
  Outerwear,
  Footwear,
  Accessory,
  Bag,
  Headwear,
  Jewelry,
  Eyewear,
  Belt,
  Scarf,
  Gloves,
  Top,
  Bottom,
  Hosiery,
}

impl ItemCategory {
  pub fn name(&self) -> &'static str {
    match self {
      ItemCategory::Outerwear => "Outerwear",
      ItemCategory::Footwear => "Footwear",
      ItemCategory::Accessory => "Accessory",
      ItemCategory::Bag => "Bag",
      ItemCategory::Headwear => "Headwear",
      ItemCategory::Jewelry => "Jewelry",
      ItemCategory::Eyewear => "Eyewear",
      ItemCategory::Belt => "Belt",
      ItemCategory::Scarf => "Scarf",
      ItemCategory::Gloves => "Gloves",
      ItemCategory::Top => "Top",
      ItemCategory::Bottom => "Bottom",
      ItemCategory::Hosiery => "Hosiery",
    }
  }
}

impl fmt::Display for ItemCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemInfo {
  pub category: ItemCategory,
  pub icon: &'static str,
}

pub const FALLBACK_ICON: &str = "✨";

/// 顺序即优先级，第一个命中的关键字决定类别
const ITEM_TABLE: &[(ItemCategory, &str, &[&str])] = &[
  (
    ItemCategory::Outerwear,
    "🧥",
    &["jacket", "coat", "overcoat", "raincoat", "blazer", "cardigan", "hoodie", "parka", "vest"],
  ),
  (
    ItemCategory::Footwear,
    "👟",
    &["shoe", "sneaker", "boot", "heel", "sandal", "loafer", "slipper"],
  ),
  (ItemCategory::Accessory, "⌚", &["watch"]),
  (
    ItemCategory::Bag,
    "👜",
    &["bag", "backpack", "clutch", "purse", "tote", "handbag"],
  ),
  (ItemCategory::Headwear, "🧢", &["hat", "cap", "beanie", "beret"]),
  (
    ItemCategory::Jewelry,
    "💍",
    &["jewelry", "jewellery", "necklace", "earring", "bracelet", "ring"],
  ),
  (
    ItemCategory::Eyewear,
    "🕶️",
    &["glasses", "sunglasses", "eyewear", "goggles"],
  ),
  (ItemCategory::Belt, "🪢", &["belt"]),
  (ItemCategory::Scarf, "🧣", &["scarf", "stole", "shawl"]),
  (ItemCategory::Gloves, "🧤", &["glove", "mitten"]),
  (
    ItemCategory::Top,
    "👕",
    &["shirt", "t-shirt", "tshirt", "sweatshirt", "top", "blouse", "sweater", "tee", "polo", "kurta"],
  ),
  (
    ItemCategory::Bottom,
    "👖",
    &["pants", "jeans", "trousers", "shorts", "skirt", "leggings"],
  ),
  (
    ItemCategory::Hosiery,
    "🧦",
    &["sock", "stocking", "tights", "hosiery"],
  ),
];

/// 关键字必须出现在词首，"chat" 不会命中 "hat"
fn starts_word(label: &str, keyword: &str) -> bool {
  label.match_indices(keyword).any(|(at, _)| {
    label[..at]
      .chars()
      .next_back()
      .is_none_or(|c| !c.is_alphanumeric())
  })
}

pub fn item_info(label: &str) -> ItemInfo {
  let label = label.to_lowercase();
  ITEM_TABLE
    .iter()
    .find(|(_, _, keywords)| keywords.iter().any(|keyword| starts_word(&label, keyword)))
    .map(|&(category, icon, _)| ItemInfo { category, icon })
    .unwrap_or(ItemInfo {
      category: ItemCategory::Accessory,
      icon: FALLBACK_ICON,
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sneakers_are_footwear() {
    assert_eq!(
      item_info("running sneakers"),
      ItemInfo {
        category: ItemCategory::Footwear,
        icon: "👟",
      }
    );
  }

  #[test]
  fn unknown_items_fall_back_to_accessory() {
    let info = item_info("mystery gadget");
    assert_eq!(info.category, ItemCategory::Accessory);
    assert_eq!(info.icon, "✨");
  }

  #[test]
  fn matching_is_case_insensitive_and_ordered() {
    assert_eq!(item_info("Denim JACKET").category, ItemCategory::Outerwear);
    assert_eq!(item_info("Smart Watch").icon, "⌚");
    // 列表中 bag 先于 top
    assert_eq!(item_info("laptop bag").category, ItemCategory::Bag);
    assert_eq!(item_info("statement jewelry").category, ItemCategory::Jewelry);
    assert_eq!(item_info("aviator sunglasses").category, ItemCategory::Eyewear);
    assert_eq!(item_info("wool socks").category, ItemCategory::Hosiery);
    assert_eq!(item_info("pleated skirt").category, ItemCategory::Bottom);
    assert_eq!(item_info("silk scarf").category.to_string(), "Scarf");
  }

  #[test]
  fn keywords_only_match_at_word_start() {
    assert_eq!(item_info("chat bubble").category, ItemCategory::Accessory);
    assert_eq!(item_info("escape key").icon, FALLBACK_ICON);
    assert_eq!(item_info("laptop").icon, FALLBACK_ICON);
    assert_eq!(item_info("string").icon, FALLBACK_ICON);
    assert_eq!(item_info("steel").icon, FALLBACK_ICON);

    assert_eq!(item_info("bucket hat").category, ItemCategory::Headwear);
    assert_eq!(item_info("gold rings").category, ItemCategory::Jewelry);
    assert_eq!(item_info("white t-shirt").category, ItemCategory::Top);
    assert_eq!(item_info("grey sweatshirt").category, ItemCategory::Top);
    assert_eq!(item_info("long raincoat").category, ItemCategory::Outerwear);
  }
}
