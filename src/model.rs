// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/model.rs - 检测/分析/推荐数据模型
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

use serde::{Deserialize, Serialize};

/// [x_min, y_min, x_max, y_max]，原图像素坐标
pub type BBox = [f32; 4];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
  #[serde(default)]
  pub label: String,
  #[serde(default)]
  pub confidence: f32,
  pub bbox: BBox,
  #[serde(default)]
  pub dominant_color_hex: String,
  #[serde(default)]
  pub source_model: String,
}

impl Detection {
  /// 置信度百分比（四舍五入）
  pub fn confidence_percent(&self) -> u32 {
    (self.confidence * 100.0).round().max(0.0) as u32
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
  pub bbox: BBox,
  #[serde(default)]
  pub dominant_color_hex: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dominant_color_rgb: Option<[u8; 3]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regions {
  pub top: Region,
  pub bottom: Region,
  pub shoes: Region,
}

impl Regions {
  /// 按 top / bottom / shoes 的顺序遍历
  pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Region)> {
    [("top", &self.top), ("bottom", &self.bottom), ("shoes", &self.shoes)].into_iter()
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRegion {
  pub person_bbox: BBox,
  pub regions: Regions,
}

/// `/detect` 响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectResponse {
  #[serde(default)]
  pub detections: Vec<Detection>,
  #[serde(default)]
  pub person_regions: Vec<PersonRegion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
  #[serde(default)]
  pub outfit_description: String,
  #[serde(default)]
  pub positives: Vec<String>,
  #[serde(default)]
  pub negatives: Vec<String>,
  #[serde(default)]
  pub lacking_items: Vec<String>,
  #[serde(default)]
  pub llm_tags: Vec<String>,
  #[serde(default)]
  pub llm_suggested_additions: Vec<String>,
}

/// `/analyze` 响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
  #[serde(default)]
  pub analysis: AnalysisResult,
}

/// 推荐条目来源
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemSource {
  Llm,
  MlRule,
  Rule,
  Ml,
  #[default]
  Unspecified,
  Other(String),
}

impl From<String> for ItemSource {
  fn from(value: String) -> Self {
    match value.as_str() {
      "llm" => ItemSource::Llm,
      "ml+rule" => ItemSource::MlRule,
      "rule" => ItemSource::Rule,
      "ml" => ItemSource::Ml,
      "" => ItemSource::Unspecified,
      _ => ItemSource::Other(value),
    }
  }
}

impl From<ItemSource> for String {
  fn from(value: ItemSource) -> Self {
    value.as_str().to_string()
  }
}

impl ItemSource {
  pub fn as_str(&self) -> &str {
    match self {
      ItemSource::Llm => "llm",
      ItemSource::MlRule => "ml+rule",
      ItemSource::Rule => "rule",
      ItemSource::Ml => "ml",
      ItemSource::Unspecified => "",
      ItemSource::Other(other) => other,
    }
  }

  /// 展示用优先级，仅用于界面
  pub fn priority(&self) -> Priority {
    match self {
      ItemSource::Llm => Priority::High,
      ItemSource::MlRule => Priority::Medium,
      ItemSource::Rule => Priority::Standard,
      _ => Priority::Unknown,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
  High,
  Medium,
  Standard,
  Unknown,
}

impl std::fmt::Display for Priority {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let text = match self {
      Priority::High => "High",
      Priority::Medium => "Medium",
      Priority::Standard => "Standard",
      Priority::Unknown => "Unknown",
    };
    f.write_str(text)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedItem {
  #[serde(default)]
  pub label: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
  #[serde(default)]
  pub source: ItemSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemExplained {
  #[serde(default)]
  pub label: String,
  #[serde(default)]
  pub reason: String,
}

/// 解析完成后的推荐说明，各字段均已回退到可展示的值
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalEnhancement {
  pub final_description: String,
  pub recommendation_style: String,
  pub confidence_level: String,
  pub items_explained: Vec<ItemExplained>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancementResult {
  pub recommended_items: Vec<RecommendedItem>,
  pub final_enhancement: FinalEnhancement,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
  #[serde(default)]
  pub status: String,
}

impl HealthStatus {
  pub fn is_ok(&self) -> bool {
    self.status == "ok"
  }
}

mod dev;
pub use self::dev::{Color, DevDetectResult, DevDetection, DevPersonRegion, DevRegion, DevRegions};
