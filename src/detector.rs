// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/detector.rs - 穿搭检测组件
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

use tracing::{error, info};

use crate::{
  api::OutfitApi,
  capitalize,
  input::ImageUpload,
  model::{DetectResponse, Detection, PersonRegion},
};

/// 一次检测操作的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectStatus {
  /// 未选择图片，没有发出请求
  Skipped,
  Updated,
  /// 请求失败，保留之前的状态
  Failed,
}

/// 持有一张上传图片及其检测结果
#[derive(Debug, Default)]
pub struct OutfitDetector {
  image: Option<ImageUpload>,
  detections: Vec<Detection>,
  person_regions: Vec<PersonRegion>,
  loading: bool,
}

impl OutfitDetector {
  pub fn new() -> Self {
    Self::default()
  }

  /// 更换图片时只清空检测列表，人物区域保留到下一次检测
  pub fn select_image(&mut self, upload: ImageUpload) {
    info!("选择图片: {}", upload.file_name());
    self.image = Some(upload);
    self.detections.clear();
  }

  pub fn detect<A: OutfitApi + ?Sized>(&mut self, api: &A) -> DetectStatus {
    let Some(image) = self.image.as_ref() else {
      return DetectStatus::Skipped;
    };

    self.loading = true;
    let now = std::time::Instant::now();
    let status = match api.detect(image) {
      Ok(DetectResponse {
        detections,
        person_regions,
      }) => {
        info!(
          "检测完成，耗时: {:.2?}，{} 个检测项，{} 个人物区域",
          now.elapsed(),
          detections.len(),
          person_regions.len()
        );
        self.detections = detections;
        self.person_regions = person_regions;
        DetectStatus::Updated
      }
      Err(e) => {
        error!("Upload failed: {}", e);
        DetectStatus::Failed
      }
    };
    self.loading = false;
    status
  }

  pub fn image(&self) -> Option<&ImageUpload> {
    self.image.as_ref()
  }

  pub fn detections(&self) -> &[Detection] {
    &self.detections
  }

  pub fn person_regions(&self) -> &[PersonRegion] {
    &self.person_regions
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  /// 当前状态的快照，供输出渲染使用
  pub fn snapshot(&self) -> DetectResponse {
    DetectResponse {
      detections: self.detections.clone(),
      person_regions: self.person_regions.clone(),
    }
  }

  pub fn view(&self) -> DetectorView<'_> {
    DetectorView { detector: self }
  }
}

/// 检测结果的文本视图
pub struct DetectorView<'a> {
  detector: &'a OutfitDetector,
}

impl fmt::Display for DetectorView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let detector = self.detector;
    writeln!(f, "AI Outfit Detection")?;
    writeln!(
      f,
      "Upload your outfit photo and let our AI identify clothing items with precision"
    )?;
    writeln!(f)?;

    match detector.image() {
      Some(image) => writeln!(f, "Image: {} ({})", image.file_name(), image.mime_type())?,
      None => writeln!(f, "Image: (none selected)")?,
    }
    let button = if detector.loading {
      "Analyzing..."
    } else {
      "Detect Outfit Items"
    };
    writeln!(f, "[{}]", button)?;
    writeln!(f)?;

    writeln!(f, "Detected Items")?;
    if detector.detections.is_empty() {
      writeln!(f, "  No detections yet")?;
      writeln!(f, "  Upload an image to see detected clothing items")?;
    } else {
      for detection in &detector.detections {
        writeln!(
          f,
          "  {} - {}% confident",
          capitalize(&detection.label),
          detection.confidence_percent()
        )?;
        writeln!(f, "    Source Model: {}", detection.source_model)?;
        writeln!(f, "    Color: {}", detection.dominant_color_hex)?;
      }
    }

    for (i, person) in detector.person_regions.iter().enumerate() {
      writeln!(f)?;
      writeln!(f, "Person {} Regions", i + 1)?;
      for (part, region) in person.regions.iter() {
        writeln!(f, "  {}: {}", capitalize(part), region.dominant_color_hex)?;
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use serde_json::{Value, json};

  use super::*;
  use crate::{
    api::{AnalyzeRequest, ApiError, RecommendRequest},
    model::{AnalysisResponse, HealthStatus},
  };

  struct StubApi {
    response: Option<Value>,
    calls: Cell<usize>,
  }

  impl OutfitApi for StubApi {
    fn detect_raw(&self, _upload: &ImageUpload) -> Result<Value, ApiError> {
      self.calls.set(self.calls.get() + 1);
      self.response.clone().ok_or(ApiError::Status(500))
    }

    fn analyze(&self, _request: &AnalyzeRequest) -> Result<AnalysisResponse, ApiError> {
      Err(ApiError::Status(500))
    }

    fn recommend(&self, _request: &RecommendRequest) -> Result<Value, ApiError> {
      Err(ApiError::Status(500))
    }

    fn health(&self) -> Result<HealthStatus, ApiError> {
      Err(ApiError::Status(500))
    }

    fn detect_endpoint(&self) -> String {
      "stub://detect".to_string()
    }
  }

  fn upload() -> ImageUpload {
    ImageUpload::from_bytes("look.jpg", vec![1, 2, 3]).unwrap()
  }

  fn response() -> Value {
    json!({
      "detections": [
        {"label": "jacket", "confidence": 0.91, "bbox": [1, 2, 3, 4], "dominant_color_hex": "#112233", "source_model": "yolo"}
      ],
      "person_regions": [{
        "person_bbox": [0, 0, 10, 10],
        "regions": {
          "top": {"bbox": [0, 0, 10, 4], "dominant_color_hex": "#aaaaaa"},
          "bottom": {"bbox": [0, 4, 10, 8], "dominant_color_hex": "#bbbbbb"},
          "shoes": {"bbox": [0, 8, 10, 10], "dominant_color_hex": "#cccccc"}
        }
      }]
    })
  }

  #[test]
  fn new_image_clears_detections_but_keeps_regions() {
    let api = StubApi {
      response: Some(response()),
      calls: Cell::new(0),
    };
    let mut detector = OutfitDetector::new();
    detector.select_image(upload());
    assert_eq!(detector.detect(&api), DetectStatus::Updated);
    assert_eq!(detector.detections().len(), 1);

    detector.select_image(upload());
    assert!(detector.detections().is_empty());
    assert_eq!(detector.person_regions().len(), 1);
  }

  #[test]
  fn failure_keeps_previous_results() {
    let mut detector = OutfitDetector::new();
    detector.select_image(upload());
    detector.detect(&StubApi {
      response: Some(response()),
      calls: Cell::new(0),
    });

    let failing = StubApi {
      response: None,
      calls: Cell::new(0),
    };
    assert_eq!(detector.detect(&failing), DetectStatus::Failed);
    assert_eq!(failing.calls.get(), 1);
    assert_eq!(detector.detections()[0].label, "jacket");
    assert!(!detector.is_loading());
  }

  #[test]
  fn missing_arrays_become_empty() {
    let mut detector = OutfitDetector::new();
    detector.select_image(upload());
    let status = detector.detect(&StubApi {
      response: Some(json!({})),
      calls: Cell::new(0),
    });
    assert_eq!(status, DetectStatus::Updated);
    assert!(detector.detections().is_empty());
    assert!(detector.person_regions().is_empty());
  }

  #[test]
  fn view_lists_items_and_regions() {
    let mut detector = OutfitDetector::new();
    assert!(detector.view().to_string().contains("No detections yet"));

    detector.select_image(upload());
    detector.detect(&StubApi {
      response: Some(response()),
      calls: Cell::new(0),
    });
    let text = detector.view().to_string();
    assert!(text.contains("Jacket - 91% confident"));
    assert!(text.contains("Source Model: yolo"));
    assert!(text.contains("Person 1 Regions"));
    assert!(text.contains("Shoes: #cccccc"));
  }
}
