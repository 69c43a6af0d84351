// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/inspector.rs - 开发者检测接口调试页
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

use std::{fmt, time::Instant};

use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::{error, info};

use crate::{
  api::{ApiError, OutfitApi},
  capitalize,
  input::ImageUpload,
  model::DevDetectResult,
};

pub mod debugger;
pub mod tree;

pub use self::debugger::{BoxDebugger, ResultCounts, format_file_size};
pub use self::tree::JsonTree;

/// 一次请求的元信息
#[derive(Debug, Clone, PartialEq)]
pub struct RequestInfo {
  pub endpoint: String,
  pub method: &'static str,
  pub timestamp: DateTime<Local>,
  pub response_time_ms: u128,
  pub file_name: String,
  pub file_size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectStatus {
  Updated,
  Failed,
}

/// 调试页状态；与主流程不同，错误会保存并展示
#[derive(Debug, Default)]
pub struct DevInspector {
  raw: Option<Value>,
  result: Option<DevDetectResult>,
  request: Option<RequestInfo>,
  error: Option<String>,
  loading: bool,
  pub tree: JsonTree,
  pub debugger: BoxDebugger,
}

impl DevInspector {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn result(&self) -> Option<&DevDetectResult> {
    self.result.as_ref()
  }

  pub fn raw(&self) -> Option<&Value> {
    self.raw.as_ref()
  }

  pub fn request(&self) -> Option<&RequestInfo> {
    self.request.as_ref()
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn counts(&self) -> Option<ResultCounts> {
    self.result.as_ref().map(ResultCounts::from)
  }

  fn fetch<A: OutfitApi + ?Sized>(
    api: &A,
    upload: &ImageUpload,
  ) -> Result<(Value, DevDetectResult), ApiError> {
    let raw = api.detect_raw(upload)?;
    let result = serde_json::from_value(raw.clone())?;
    Ok((raw, result))
  }

  pub fn submit<A: OutfitApi + ?Sized>(&mut self, api: &A, upload: &ImageUpload) -> InspectStatus {
    let timestamp = Local::now();
    let now = Instant::now();
    self.loading = true;
    self.error = None;
    info!(
      "调试请求: POST {} ({}, {} 字节)",
      api.detect_endpoint(),
      upload.file_name(),
      upload.size()
    );

    let status = match Self::fetch(api, upload) {
      Ok((raw, result)) => {
        let request = RequestInfo {
          endpoint: api.detect_endpoint(),
          method: "POST",
          timestamp,
          response_time_ms: now.elapsed().as_millis(),
          file_name: upload.file_name().to_string(),
          file_size: upload.size(),
        };
        info!("调试请求完成，耗时: {}ms", request.response_time_ms);
        self.raw = Some(raw);
        self.result = Some(result);
        self.request = Some(request);
        self.tree = JsonTree::new();
        self.debugger = BoxDebugger::new();
        InspectStatus::Updated
      }
      Err(e) => {
        error!("调试请求失败: {}", e);
        self.error = Some(e.to_string());
        self.raw = None;
        self.result = None;
        self.request = None;
        InspectStatus::Failed
      }
    };
    self.loading = false;
    status
  }

  pub fn view(&self) -> InspectorView<'_> {
    InspectorView { inspector: self }
  }
}

pub struct InspectorView<'a> {
  inspector: &'a DevInspector,
}

impl fmt::Display for InspectorView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let inspector = self.inspector;
    writeln!(f, "Developer Testing Page")?;
    if inspector.loading {
      writeln!(f, "[Processing...]")?;
    }
    if let Some(error) = &inspector.error {
      writeln!(f, "Error: {}", error)?;
    }
    let (Some(result), Some(raw)) = (&inspector.result, &inspector.raw) else {
      return Ok(());
    };

    if let Some(request) = &inspector.request {
      writeln!(f)?;
      writeln!(f, "Request Details  {}  {}ms", request.method, request.response_time_ms)?;
      writeln!(f, "  Endpoint: {}", request.endpoint)?;
      writeln!(f, "  Timestamp: {}", request.timestamp.format("%H:%M:%S"))?;
      writeln!(f, "  File: {}", request.file_name)?;
      writeln!(f, "  File Size: {}", format_file_size(request.file_size))?;
    }

    let counts = ResultCounts::from(result);
    writeln!(f)?;
    writeln!(
      f,
      "Dimensions: {} x {}  Raw: {}  Filtered: {}  Persons: {}",
      result.width, result.height, counts.raw_detections, counts.filtered_detections, counts.person_regions
    )?;

    writeln!(f)?;
    writeln!(
      f,
      "JSON Tree View  ({} detections, {} persons)",
      counts.refined_detections, counts.person_regions
    )?;
    writeln!(
      f,
      "  Detections: {}  Unique Labels: {}  Total Colors: {}",
      counts.refined_detections, counts.unique_labels, counts.total_colors
    )?;
    write!(f, "{}", inspector.tree.render(raw))?;

    writeln!(f)?;
    write!(f, "{}", inspector.debugger.view(result))?;

    if !result.person_regions.is_empty() {
      writeln!(f)?;
      writeln!(f, "Person Region Analysis")?;
      for (i, person) in result.person_regions.iter().enumerate() {
        writeln!(f, "  Person {}", i + 1)?;
        for (name, region) in [
          ("top", &person.regions.top),
          ("bottom", &person.regions.bottom),
          ("shoes", &person.regions.shoes),
        ] {
          let bbox: Vec<String> = region.bbox.iter().map(|v| v.to_string()).collect();
          writeln!(
            f,
            "    {}: {} [{}]",
            capitalize(name),
            region.dominant_color_hex,
            bbox.join(", ")
          )?;
        }
      }
    }
    Ok(())
  }
}
