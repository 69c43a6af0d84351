// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/task.rs - 一次性任务编排
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

use std::time::Instant;

use tracing::{info, warn};

use crate::{
  analyzer::{AnalyzeStatus, OutfitAnalyzer},
  api::OutfitApi,
  detector::{DetectStatus, OutfitDetector},
  enhance::{EnhancementFlow, RecommendStatus},
  input::ImageUpload,
  inspector::{DevInspector, InspectStatus},
  model::{DetectResponse, DevDetectResult},
  output::Render,
};

pub trait Task<I, M, O>: Sized {
  type Output;
  type Error;
  fn run_task(self, input: I, model: M, output: O) -> Result<Self::Output, Self::Error>;
}

/// 上传一张图片并渲染检测结果
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectTask;

impl<'a, A, O, RE> Task<Option<ImageUpload>, &'a A, O> for DetectTask
where
  A: OutfitApi + ?Sized,
  RE: std::error::Error + Sync + Send + 'static,
  O: Render<ImageUpload, DetectResponse, Error = RE>,
{
  type Output = OutfitDetector;
  type Error = anyhow::Error;

  fn run_task(
    self,
    input: Option<ImageUpload>,
    api: &'a A,
    output: O,
  ) -> Result<Self::Output, Self::Error> {
    info!("开始任务...");
    let upload = input.ok_or_else(|| anyhow::anyhow!("没有输入图片"))?;
    info!("输入图片获取成功，开始检测...");

    let mut detector = OutfitDetector::new();
    detector.select_image(upload);
    let now = Instant::now();
    match detector.detect(api) {
      DetectStatus::Updated => {}
      DetectStatus::Skipped => return Err(anyhow::anyhow!("没有输入图片")),
      DetectStatus::Failed => return Err(anyhow::anyhow!("检测请求失败")),
    }
    let elapsed = now.elapsed();
    info!("检测完成，耗时: {:.2?}", elapsed);

    if let Some(image) = detector.image() {
      output.render_result(image, &detector.snapshot())?;
      info!("渲染完成，耗时: {:.2?}", now.elapsed());
    }

    Ok(detector)
  }
}

/// 检测之后请求穿搭分析
#[derive(Debug, Clone)]
pub struct AnalyzeTask {
  pub occasion: String,
}

pub struct AnalyzeOutcome {
  pub detector: OutfitDetector,
  pub analyzer: OutfitAnalyzer,
}

impl<'a, A, O, RE> Task<Option<ImageUpload>, &'a A, O> for AnalyzeTask
where
  A: OutfitApi + ?Sized,
  RE: std::error::Error + Sync + Send + 'static,
  O: Render<ImageUpload, DetectResponse, Error = RE>,
{
  type Output = AnalyzeOutcome;
  type Error = anyhow::Error;

  fn run_task(
    self,
    input: Option<ImageUpload>,
    api: &'a A,
    output: O,
  ) -> Result<Self::Output, Self::Error> {
    let detector = DetectTask.run_task(input, api, output)?;
    let mut analyzer = OutfitAnalyzer::new(self.occasion);
    match analyzer.analyze(api, detector.detections(), detector.person_regions()) {
      AnalyzeStatus::Updated => info!("分析结果已更新"),
      AnalyzeStatus::Skipped => warn!("没有检测项，跳过分析"),
      AnalyzeStatus::Failed => return Err(anyhow::anyhow!("分析请求失败")),
    }
    Ok(AnalyzeOutcome { detector, analyzer })
  }
}

/// 检测之后请求搭配推荐
#[derive(Debug, Clone)]
pub struct RecommendTask {
  pub occasion: String,
}

pub struct RecommendOutcome {
  pub detector: OutfitDetector,
  pub flow: EnhancementFlow,
}

impl<'a, A, O, RE> Task<Option<ImageUpload>, &'a A, O> for RecommendTask
where
  A: OutfitApi + ?Sized,
  RE: std::error::Error + Sync + Send + 'static,
  O: Render<ImageUpload, DetectResponse, Error = RE>,
{
  type Output = RecommendOutcome;
  type Error = anyhow::Error;

  fn run_task(
    self,
    input: Option<ImageUpload>,
    api: &'a A,
    output: O,
  ) -> Result<Self::Output, Self::Error> {
    let detector = DetectTask.run_task(input, api, output)?;
    let mut flow = EnhancementFlow::new();
    match flow.recommend(
      api,
      detector.detections(),
      detector.person_regions(),
      &self.occasion,
    ) {
      RecommendStatus::Updated => info!("推荐结果已更新"),
      RecommendStatus::Skipped => warn!("没有检测项，跳过推荐"),
      RecommendStatus::Failed => return Err(anyhow::anyhow!("推荐请求失败")),
    }
    Ok(RecommendOutcome { detector, flow })
  }
}

/// 开发者调试：原始检测响应、JSON 树与检测框
#[derive(Debug, Clone, Default)]
pub struct InspectTask {
  pub expand: Vec<String>,
  pub expand_all: bool,
  pub select: Option<usize>,
}

impl<'a, A, O, RE> Task<Option<ImageUpload>, &'a A, O> for InspectTask
where
  A: OutfitApi + ?Sized,
  RE: std::error::Error + Sync + Send + 'static,
  O: Render<ImageUpload, DevDetectResult, Error = RE>,
{
  type Output = DevInspector;
  type Error = anyhow::Error;

  fn run_task(
    self,
    input: Option<ImageUpload>,
    api: &'a A,
    output: O,
  ) -> Result<Self::Output, Self::Error> {
    info!("开始任务...");
    let upload = input.ok_or_else(|| anyhow::anyhow!("没有输入图片"))?;

    let mut inspector = DevInspector::new();
    // 失败时错误保存在调试页中展示
    if inspector.submit(api, &upload) == InspectStatus::Failed {
      warn!("调试请求失败，展示错误信息");
      return Ok(inspector);
    }

    if self.expand_all
      && let Some(raw) = inspector.raw().cloned()
    {
      inspector.tree.expand_all(&raw);
    }
    for path in self.expand {
      inspector.tree.expand(path);
    }
    if let Some(index) = self.select {
      inspector.debugger.select(index);
    }

    if let Some(result) = inspector.result() {
      output.render_result(&upload, result)?;
    }
    Ok(inspector)
  }
}

#[cfg(test)]
mod tests {
  use std::cell::{Cell, RefCell};

  use serde_json::{Value, json};

  use super::*;
  use crate::{
    api::{AnalyzeRequest, ApiError, RecommendRequest},
    model::{AnalysisResponse, HealthStatus},
    output::NoOutput,
  };

  struct ScriptedApi {
    detect: Value,
    analyze_fails: bool,
    calls: Cell<usize>,
    occasions: RefCell<Vec<String>>,
  }

  impl ScriptedApi {
    fn new(detect: Value) -> Self {
      Self {
        detect,
        analyze_fails: false,
        calls: Cell::new(0),
        occasions: RefCell::new(Vec::new()),
      }
    }
  }

  impl OutfitApi for ScriptedApi {
    fn detect_raw(&self, _upload: &ImageUpload) -> Result<Value, ApiError> {
      self.calls.set(self.calls.get() + 1);
      Ok(self.detect.clone())
    }

    fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResponse, ApiError> {
      self.calls.set(self.calls.get() + 1);
      self.occasions.borrow_mut().push(request.occasion.clone());
      if self.analyze_fails {
        return Err(ApiError::Status(502));
      }
      Ok(serde_json::from_value(json!({
        "analysis": {"outfit_description": "smart casual", "positives": ["fit"]}
      }))?)
    }

    fn recommend(&self, request: &RecommendRequest) -> Result<Value, ApiError> {
      self.calls.set(self.calls.get() + 1);
      self.occasions.borrow_mut().push(request.occasion.clone());
      Ok(json!({
        "hybrid_recommendations": [{"label": "loafers", "source": "llm"}],
        "enhanced": {"final_description": "Add loafers."}
      }))
    }

    fn health(&self) -> Result<HealthStatus, ApiError> {
      Err(ApiError::Status(500))
    }

    fn detect_endpoint(&self) -> String {
      "http://localhost:8000/detect".to_string()
    }
  }

  fn upload() -> Option<ImageUpload> {
    ImageUpload::from_bytes("look.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0, 0]).ok()
  }

  fn one_shirt() -> Value {
    json!({
      "detections": [{
        "label": "shirt",
        "confidence": 0.9,
        "bbox": [1, 2, 3, 4],
        "dominant_color_hex": "#ffffff",
        "source_model": "yolo"
      }]
    })
  }

  #[test]
  fn detect_without_image_is_an_error() {
    let api = ScriptedApi::new(one_shirt());
    let result = DetectTask.run_task(None, &api, NoOutput);
    assert!(result.is_err());
    assert_eq!(api.calls.get(), 0);
  }

  #[test]
  fn analyze_runs_after_detect() {
    let api = ScriptedApi::new(one_shirt());
    let task = AnalyzeTask {
      occasion: "party".to_string(),
    };
    let outcome = task.run_task(upload(), &api, NoOutput).unwrap();
    assert_eq!(outcome.detector.detections().len(), 1);
    assert_eq!(
      outcome.analyzer.analysis().unwrap().outfit_description,
      "smart casual"
    );
    assert_eq!(api.calls.get(), 2);
    assert_eq!(api.occasions.borrow().as_slice(), ["party"]);
  }

  #[test]
  fn analyze_skips_when_nothing_was_detected() {
    let api = ScriptedApi::new(json!({"detections": []}));
    let task = AnalyzeTask {
      occasion: "casual".to_string(),
    };
    let outcome = task.run_task(upload(), &api, NoOutput).unwrap();
    assert!(outcome.analyzer.analysis().is_none());
    assert_eq!(api.calls.get(), 1);
  }

  #[test]
  fn failed_analysis_is_reported() {
    let mut api = ScriptedApi::new(one_shirt());
    api.analyze_fails = true;
    let task = AnalyzeTask {
      occasion: "college".to_string(),
    };
    assert!(task.run_task(upload(), &api, NoOutput).is_err());
  }

  #[test]
  fn recommend_normalizes_response() {
    let api = ScriptedApi::new(one_shirt());
    let task = RecommendTask {
      occasion: "ceremony".to_string(),
    };
    let outcome = task.run_task(upload(), &api, NoOutput).unwrap();
    let result = outcome.flow.result().unwrap();
    assert_eq!(result.recommended_items[0].label, "loafers");
    assert_eq!(result.final_enhancement.final_description, "Add loafers.");
  }

  #[test]
  fn inspect_failure_is_kept_for_display() {
    let api = ScriptedApi::new(json!({"refined_detections": 3}));
    let task = InspectTask {
      expand_all: true,
      ..InspectTask::default()
    };
    let inspector = task.run_task(upload(), &api, NoOutput).unwrap();
    assert!(inspector.error().is_some());
    assert!(inspector.result().is_none());
  }

  #[test]
  fn inspect_applies_expansion_and_selection() {
    let api = ScriptedApi::new(json!({
      "width": 10,
      "height": 10,
      "refined_detections": [{
        "label": "shirt",
        "bbox": [0, 0, 5, 5],
        "refined_label": "shirt",
        "refined_confidence": 0.5,
        "colors": []
      }]
    }));
    let task = InspectTask {
      expand: vec!["root".to_string()],
      expand_all: false,
      select: Some(0),
    };
    let inspector = task.run_task(upload(), &api, NoOutput).unwrap();
    assert!(inspector.tree.is_expanded("root"));
    assert!(!inspector.tree.is_expanded("root.refined_detections"));
    assert_eq!(inspector.debugger.selected(), Some(0));
  }
}
