// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/api.rs - 后端服务接口定义
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

use std::time::Duration;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

use crate::{
  input::ImageUpload,
  model::{AnalysisResponse, DetectResponse, Detection, HealthStatus, PersonRegion},
};

mod http;
pub use self::http::HttpOutfitApi;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Error, Debug)]
pub enum ApiError {
  #[error("HTTP request failed: {0}")]
  Request(#[from] reqwest::Error),
  #[error("HTTP error! status: {0}")]
  Status(u16),
  #[error("request rejected: {0}")]
  Rejected(String),
  #[error("unexpected response body: {0}")]
  Decode(#[from] serde_json::Error),
  #[error("invalid endpoint URL: {0}")]
  InvalidUrl(String),
}

/// 检测接口版本
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetectVersion {
  #[default]
  V1,
  V2,
}

impl DetectVersion {
  pub fn endpoint(&self) -> &'static str {
    match self {
      DetectVersion::V1 => "detect",
      DetectVersion::V2 => "detect-v2",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      DetectVersion::V1 => "Version 1 (Stable)",
      DetectVersion::V2 => "Version 2 (Enhanced)",
    }
  }

  pub fn description(&self) -> &'static str {
    match self {
      DetectVersion::V1 => "Classic detection with proven reliability",
      DetectVersion::V2 => "Advanced detection with enhanced colors",
    }
  }

  /// 切换版本后的提示文字
  pub fn switch_notice(&self) -> &'static str {
    match self {
      DetectVersion::V1 => "Switched to Stable Version 1",
      DetectVersion::V2 => "Switched to Enhanced Version 2",
    }
  }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: Url,
  /// None 表示不设置超时
  pub timeout: Option<Duration>,
  pub version: DetectVersion,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
      timeout: None,
      version: DetectVersion::V1,
    }
  }
}

impl ApiConfig {
  pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
    // join 会替换最后一段路径，先补齐结尾的 '/'
    let mut base = self.base_url.clone();
    if !base.path().ends_with('/') {
      let with_slash = format!("{}/", base.path());
      base.set_path(&with_slash);
    }
    base
      .join(path)
      .map_err(|e| ApiError::InvalidUrl(format!("{}{}: {}", self.base_url, path, e)))
  }

  pub fn detect_endpoint(&self) -> Result<Url, ApiError> {
    self.endpoint(self.version.endpoint())
  }
}

/// 将检测列表转换为 `detection_{index}` 为键的对象
pub fn keyed_detections(detections: &[Detection]) -> Map<String, Value> {
  detections
    .iter()
    .enumerate()
    .map(|(index, detection)| {
      let value = serde_json::to_value(detection).unwrap_or(Value::Null);
      (format!("detection_{index}"), value)
    })
    .collect()
}

fn regions_or_null(regions: &[PersonRegion]) -> Option<Vec<PersonRegion>> {
  if regions.is_empty() {
    None
  } else {
    Some(regions.to_vec())
  }
}

/// `/analyze` 请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
  pub detections: Map<String, Value>,
  pub person_regions: Option<Vec<PersonRegion>>,
  pub occasion: String,
}

impl AnalyzeRequest {
  pub fn new(detections: &[Detection], person_regions: &[PersonRegion], occasion: &str) -> Self {
    Self {
      detections: keyed_detections(detections),
      person_regions: regions_or_null(person_regions),
      occasion: occasion.to_string(),
    }
  }
}

/// `/recommend` 请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
  pub detections: Map<String, Value>,
  pub person_regions: Option<Vec<PersonRegion>>,
  pub occasion: String,
  pub exclude_previous: Vec<String>,
}

impl RecommendRequest {
  pub fn new(detections: &[Detection], person_regions: &[PersonRegion], occasion: &str) -> Self {
    Self {
      detections: keyed_detections(detections),
      person_regions: regions_or_null(person_regions),
      occasion: occasion.to_string(),
      exclude_previous: Vec::new(),
    }
  }
}

/// 外部检测/分析/推荐服务
pub trait OutfitApi {
  /// `/detect` 原始 JSON 响应
  fn detect_raw(&self, upload: &ImageUpload) -> Result<Value, ApiError>;

  fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResponse, ApiError>;

  /// `/recommend` 原始 JSON 响应，结构由 `enhance::normalize_response` 归一化
  fn recommend(&self, request: &RecommendRequest) -> Result<Value, ApiError>;

  fn health(&self) -> Result<HealthStatus, ApiError>;

  /// 用于展示的检测接口地址
  fn detect_endpoint(&self) -> String;

  fn detect(&self, upload: &ImageUpload) -> Result<DetectResponse, ApiError> {
    Ok(serde_json::from_value(self.detect_raw(upload)?)?)
  }
}
