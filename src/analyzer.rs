// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/analyzer.rs - 穿搭分析组件
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
  api::{AnalyzeRequest, OutfitApi},
  capitalize,
  model::{AnalysisResult, Detection, PersonRegion},
  occasion::occasion_data,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeStatus {
  /// 没有检测项，未发出请求
  Skipped,
  Updated,
  Failed,
}

#[derive(Debug, Default)]
pub struct OutfitAnalyzer {
  occasion: String,
  analysis: Option<AnalysisResult>,
  loading: bool,
}

impl OutfitAnalyzer {
  pub fn new(occasion: impl Into<String>) -> Self {
    Self {
      occasion: occasion.into(),
      ..Self::default()
    }
  }

  pub fn occasion(&self) -> &str {
    &self.occasion
  }

  pub fn set_occasion(&mut self, occasion: impl Into<String>) {
    self.occasion = occasion.into();
  }

  pub fn analysis(&self) -> Option<&AnalysisResult> {
    self.analysis.as_ref()
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn analyze<A: OutfitApi + ?Sized>(
    &mut self,
    api: &A,
    detections: &[Detection],
    person_regions: &[PersonRegion],
  ) -> AnalyzeStatus {
    if detections.is_empty() {
      return AnalyzeStatus::Skipped;
    }

    self.loading = true;
    let request = AnalyzeRequest::new(detections, person_regions, &self.occasion);
    let now = std::time::Instant::now();
    let status = match api.analyze(&request) {
      Ok(response) => {
        info!("分析完成，耗时: {:.2?}", now.elapsed());
        self.analysis = Some(response.analysis);
        AnalyzeStatus::Updated
      }
      Err(e) => {
        error!("Analysis failed: {}", e);
        AnalyzeStatus::Failed
      }
    };
    self.loading = false;
    status
  }

  pub fn report<'a>(&'a self, detections: &'a [Detection]) -> AnalysisReport<'a> {
    AnalysisReport {
      analyzer: self,
      detections,
    }
  }
}

pub struct AnalysisReport<'a> {
  analyzer: &'a OutfitAnalyzer,
  detections: &'a [Detection],
}

impl AnalysisReport<'_> {
  fn write_analysis(f: &mut fmt::Formatter<'_>, analysis: &AnalysisResult) -> fmt::Result {
    writeln!(f, "Outfit Description")?;
    writeln!(f, "  {}", analysis.outfit_description)?;

    writeln!(f, "What's Working Well")?;
    for positive in &analysis.positives {
      writeln!(f, "  ✓ {}", positive)?;
    }

    writeln!(f, "Areas for Improvement")?;
    if analysis.negatives.is_empty() {
      writeln!(f, "  ✓ No major issues detected!")?;
    }
    for negative in &analysis.negatives {
      writeln!(f, "  ✗ {}", negative)?;
    }

    writeln!(f, "Suggested Additions")?;
    if analysis.lacking_items.is_empty() {
      writeln!(f, "  ✓ Outfit is complete!")?;
    }
    for item in &analysis.lacking_items {
      writeln!(f, "  + {}", capitalize(item))?;
    }

    if !analysis.llm_suggested_additions.is_empty() {
      writeln!(f, "AI Suggested Additions")?;
      for item in &analysis.llm_suggested_additions {
        writeln!(f, "  ✦ {}", capitalize(item))?;
      }
    }

    writeln!(f, "Style Tags")?;
    if !analysis.llm_tags.is_empty() {
      let tags: Vec<_> = analysis.llm_tags.iter().map(|t| capitalize(t)).collect();
      writeln!(f, "  {}", tags.join(" · "))?;
    }
    Ok(())
  }
}

impl fmt::Display for AnalysisReport<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let analyzer = self.analyzer;
    let copy = occasion_data(&analyzer.occasion);

    writeln!(f, "{}", copy.title)?;
    writeln!(f, "{}", copy.description)?;
    writeln!(f, "Selected: {}", capitalize(&analyzer.occasion))?;
    writeln!(f)?;

    writeln!(f, "AI Analysis Report")?;
    if analyzer.loading {
      writeln!(f, "  Generating AI analysis...")?;
      writeln!(f, "  This may take a few moments")?;
    } else if let Some(analysis) = &analyzer.analysis {
      Self::write_analysis(f, analysis)?;
    } else {
      writeln!(f, "  AI analysis will appear here once processing is complete")?;
    }
    writeln!(f)?;

    writeln!(f, "Style Score: 85/100 (Great outfit coordination!)")?;
    writeln!(f, "Color Harmony: Complementary Colors Good, Contrast Level Perfect, Palette Balance Good")?;
    writeln!(
      f,
      "Trend Analysis: Current Trend 92% Match, Season Relevance Excellent, Style Category {}",
      copy.style_category
    )?;
    writeln!(f)?;

    writeln!(f, "Item Analysis")?;
    for detection in self.detections {
      writeln!(
        f,
        "  {} ({}) - Detection Confidence {}%",
        capitalize(&detection.label),
        detection.dominant_color_hex,
        detection.confidence_percent()
      )?;
    }
    writeln!(f)?;

    writeln!(f, "Recommendations")?;
    writeln!(f, "  Style Improvements")?;
    for recommendation in copy.recommendations {
      writeln!(f, "    • {}", recommendation)?;
    }
    writeln!(f, "  Occasion Suitability")?;
    writeln!(
      f,
      "    {} (Selected): {}",
      capitalize(&analyzer.occasion),
      copy.suitability_score
    )?;
    writeln!(f, "    Other Occasions: Varies")?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::cell::RefCell;

  use serde_json::Value;

  use super::*;
  use crate::{
    api::{ApiError, RecommendRequest},
    input::ImageUpload,
    model::{AnalysisResponse, HealthStatus},
  };

  #[derive(Default)]
  struct RecordingApi {
    fail: bool,
    requests: RefCell<Vec<AnalyzeRequest>>,
  }

  impl OutfitApi for RecordingApi {
    fn detect_raw(&self, _upload: &ImageUpload) -> Result<Value, ApiError> {
      Err(ApiError::Status(500))
    }

    fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResponse, ApiError> {
      self.requests.borrow_mut().push(request.clone());
      if self.fail {
        return Err(ApiError::Status(502));
      }
      Ok(AnalysisResponse {
        analysis: AnalysisResult {
          outfit_description: "A relaxed denim look".to_string(),
          positives: vec!["Good fit".to_string()],
          negatives: Vec::new(),
          lacking_items: vec!["belt".to_string()],
          llm_tags: vec!["casual".to_string(), "denim".to_string()],
          llm_suggested_additions: Vec::new(),
        },
      })
    }

    fn recommend(&self, _request: &RecommendRequest) -> Result<Value, ApiError> {
      Err(ApiError::Status(500))
    }

    fn health(&self) -> Result<HealthStatus, ApiError> {
      Err(ApiError::Status(500))
    }

    fn detect_endpoint(&self) -> String {
      String::new()
    }
  }

  fn detection() -> Detection {
    Detection {
      label: "jeans".to_string(),
      confidence: 0.7,
      bbox: [0.0, 0.0, 1.0, 1.0],
      dominant_color_hex: "#1f3a5f".to_string(),
      source_model: "yolo".to_string(),
    }
  }

  #[test]
  fn empty_detections_are_a_no_op() {
    let api = RecordingApi::default();
    let mut analyzer = OutfitAnalyzer::new("party");
    assert_eq!(analyzer.analyze(&api, &[], &[]), AnalyzeStatus::Skipped);
    assert!(api.requests.borrow().is_empty());
  }

  #[test]
  fn stores_analysis_and_sends_occasion() {
    let api = RecordingApi::default();
    let mut analyzer = OutfitAnalyzer::new("college");
    assert_eq!(analyzer.analyze(&api, &[detection()], &[]), AnalyzeStatus::Updated);
    assert_eq!(api.requests.borrow()[0].occasion, "college");
    assert_eq!(
      analyzer.analysis().map(|a| a.outfit_description.as_str()),
      Some("A relaxed denim look")
    );
  }

  #[test]
  fn failure_keeps_previous_analysis() {
    let mut analyzer = OutfitAnalyzer::new("casual");
    analyzer.analyze(&RecordingApi::default(), &[detection()], &[]);
    let failing = RecordingApi {
      fail: true,
      ..RecordingApi::default()
    };
    assert_eq!(analyzer.analyze(&failing, &[detection()], &[]), AnalyzeStatus::Failed);
    assert!(analyzer.analysis().is_some());
    assert!(!analyzer.is_loading());
  }

  #[test]
  fn report_renders_categories_and_fallbacks() {
    let mut analyzer = OutfitAnalyzer::new("party");
    let detections = [detection()];
    let pending = analyzer.report(&detections).to_string();
    assert!(pending.contains("Party Analysis"));
    assert!(pending.contains("Selected: Party"));
    assert!(pending.contains("AI analysis will appear here once processing is complete"));

    analyzer.analyze(&RecordingApi::default(), &detections, &[]);
    let text = analyzer.report(&detections).to_string();
    assert!(text.contains("What's Working Well"));
    assert!(text.contains("No major issues detected!"));
    assert!(text.contains("+ Belt"));
    assert!(text.contains("Casual · Denim"));
    assert!(text.contains("Jeans (#1f3a5f) - Detection Confidence 70%"));
    assert!(text.contains("Party (Selected): Excellent"));
  }

  #[test]
  fn report_lists_ai_suggested_additions() {
    let mut analyzer = OutfitAnalyzer::new("casual");
    analyzer.analysis = Some(AnalysisResult {
      outfit_description: "Clean lines".to_string(),
      lacking_items: vec!["belt".to_string()],
      llm_suggested_additions: vec!["brown loafers".to_string()],
      ..AnalysisResult::default()
    });
    let text = analyzer.report(&[]).to_string();
    let additions = text.find("Suggested Additions").unwrap();
    let suggested = text.find("AI Suggested Additions").unwrap();
    assert!(additions < suggested);
    assert!(text.contains("✦ Brown loafers"));
    assert!(suggested < text.find("Style Tags").unwrap());

    analyzer.analysis = Some(AnalysisResult::default());
    assert!(!analyzer.report(&[]).to_string().contains("AI Suggested Additions"));
  }

  #[test]
  fn unknown_occasion_uses_casual_copy() {
    let analyzer = OutfitAnalyzer::new("wedding");
    let text = analyzer.report(&[]).to_string();
    assert!(text.contains("Casual Analysis"));
    assert!(text.contains("Selected: Wedding"));
  }
}
