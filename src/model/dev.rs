// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/model/dev.rs - 开发者页面使用的完整检测结果
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

use super::BBox;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
  #[serde(default)]
  pub rgb: Vec<u8>,
  #[serde(default)]
  pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevDetection {
  #[serde(default)]
  pub source_model: String,
  #[serde(default)]
  pub label: String,
  pub bbox: BBox,
  #[serde(default)]
  pub confidence: f32,
  #[serde(default)]
  pub refined_label: String,
  #[serde(default)]
  pub refined_confidence: f32,
  #[serde(default)]
  pub colors: Vec<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevRegion {
  pub bbox: BBox,
  #[serde(default)]
  pub dominant_color_rgb: Vec<u8>,
  #[serde(default)]
  pub dominant_color_hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevRegions {
  pub top: DevRegion,
  pub bottom: DevRegion,
  pub shoes: DevRegion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevPersonRegion {
  pub person_bbox: BBox,
  pub regions: DevRegions,
}

/// 开发者页面期望的 `/detect` 完整响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevDetectResult {
  #[serde(default)]
  pub width: u32,
  #[serde(default)]
  pub height: u32,
  #[serde(default)]
  pub raw_detections: Vec<DevDetection>,
  #[serde(default)]
  pub filtered_detections: Vec<DevDetection>,
  #[serde(default)]
  pub refined_detections: Vec<DevDetection>,
  #[serde(default)]
  pub person_regions: Vec<DevPersonRegion>,
}
