// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/occasion.rs - 场合与文案
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

use std::str::FromStr;

use thiserror::Error;

/// 场合，固定集合
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Occasion {
  #[default]
  Casual,
  Party,
  College,
  Ceremony,
}

impl Occasion {
  pub const ALL: [Occasion; 4] = [
    Occasion::Casual,
    Occasion::Party,
    Occasion::College,
    Occasion::Ceremony,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Occasion::Casual => "casual",
      Occasion::Party => "party",
      Occasion::College => "college",
      Occasion::Ceremony => "ceremony",
    }
  }

  /// 未知取值一律回退到 casual
  pub fn parse_or_casual(value: &str) -> Self {
    value.parse().unwrap_or_default()
  }

  /// 只接受规范的小写名称
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|occasion| occasion.as_str() == name)
  }

  pub fn copy(&self) -> &'static OccasionCopy {
    match self {
      Occasion::Casual => &CASUAL,
      Occasion::Party => &PARTY,
      Occasion::College => &COLLEGE,
      Occasion::Ceremony => &CEREMONY,
    }
  }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown occasion: {0}")]
pub struct UnknownOccasion(pub String);

impl FromStr for Occasion {
  type Err = UnknownOccasion;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "casual" => Ok(Occasion::Casual),
      "party" => Ok(Occasion::Party),
      "college" => Ok(Occasion::College),
      "ceremony" => Ok(Occasion::Ceremony),
      _ => Err(UnknownOccasion(s.to_string())),
    }
  }
}

impl std::fmt::Display for Occasion {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// 场合对应的静态文案
#[derive(Debug, PartialEq, Eq)]
pub struct OccasionCopy {
  pub title: &'static str,
  pub description: &'static str,
  pub style_category: &'static str,
  pub suitability_score: &'static str,
  pub recommendations: [&'static str; 2],
}

static CASUAL: OccasionCopy = OccasionCopy {
  title: "Casual Analysis",
  description: "Perfect for everyday activities and relaxed environments",
  style_category: "Casual Chic",
  suitability_score: "Perfect",
  recommendations: [
    "Great color coordination for casual settings",
    "Comfortable and stylish for daily activities",
  ],
};

static PARTY: OccasionCopy = OccasionCopy {
  title: "Party Analysis",
  description: "Analyzed for social gatherings and celebratory events",
  style_category: "Party Ready",
  suitability_score: "Excellent",
  recommendations: [
    "Add some statement accessories for party appeal",
    "Consider bolder colors for evening events",
  ],
};

static COLLEGE: OccasionCopy = OccasionCopy {
  title: "College Analysis",
  description: "Suitable for academic and campus environments",
  style_category: "Smart Casual",
  suitability_score: "Great",
  recommendations: [
    "Professional yet comfortable for academic settings",
    "Perfect balance of style and practicality",
  ],
};

static CEREMONY: OccasionCopy = OccasionCopy {
  title: "Ceremony Analysis",
  description: "Evaluated for formal events and special occasions",
  style_category: "Semi-Formal",
  suitability_score: "Good",
  recommendations: [
    "Consider more formal elements for ceremonial events",
    "Add elegant accessories to elevate the look",
  ],
};

/// 按原始字符串精确查询文案，其余一律使用 casual
pub fn occasion_data(occasion: &str) -> &'static OccasionCopy {
  Occasion::from_name(occasion).unwrap_or_default().copy()
}
