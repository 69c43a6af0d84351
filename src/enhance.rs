// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/enhance.rs - 穿搭推荐流程
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

use serde_json::Value;
use tracing::{error, info, warn};

use crate::{
  api::{OutfitApi, RecommendRequest},
  capitalize,
  model::{Detection, EnhancementResult, ItemSource, PersonRegion, RecommendedItem},
};

pub mod description;
pub mod items;

pub use self::description::{DEFAULT_DESCRIPTION, ParsedDescription, extract_description};
pub use self::items::{ItemCategory, ItemInfo, item_info};

fn recommended_items(value: Option<&Value>) -> Vec<RecommendedItem> {
  let Some(items) = value.and_then(Value::as_array) else {
    return Vec::new();
  };
  items
    .iter()
    .filter_map(|item| match item {
      // 只给出名称的条目
      Value::String(label) => Some(RecommendedItem {
        label: label.clone(),
        color: None,
        source: ItemSource::Unspecified,
      }),
      other => serde_json::from_value(other.clone())
        .map_err(|e| warn!("忽略无法识别的推荐条目 {}: {}", other, e))
        .ok(),
    })
    .collect()
}

/// 统一新旧两种 `/recommend` 响应结构，任何输入都不会失败
pub fn normalize_response(response: Value) -> EnhancementResult {
  let object = response.as_object();
  let has = |key: &str| object.is_some_and(|o| o.contains_key(key));
  let field = |key: &str| object.and_then(|o| o.get(key));

  let (items, enhancement) = if has("hybrid_recommendations") || has("enhanced") {
    (field("hybrid_recommendations"), field("enhanced"))
  } else if has("recommended_items") || has("final_enhancement") {
    (field("recommended_items"), field("final_enhancement"))
  } else {
    warn!("无法识别的推荐响应结构，使用默认值");
    (None, None)
  };

  EnhancementResult {
    recommended_items: recommended_items(items),
    final_enhancement: description::resolve_enhancement(enhancement),
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendStatus {
  Skipped,
  Updated,
  Failed,
}

#[derive(Debug, Default)]
pub struct EnhancementFlow {
  result: Option<EnhancementResult>,
  loading: bool,
}

impl EnhancementFlow {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn result(&self) -> Option<&EnhancementResult> {
    self.result.as_ref()
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn recommend<A: OutfitApi + ?Sized>(
    &mut self,
    api: &A,
    detections: &[Detection],
    person_regions: &[PersonRegion],
    occasion: &str,
  ) -> RecommendStatus {
    if detections.is_empty() {
      return RecommendStatus::Skipped;
    }

    self.loading = true;
    let request = RecommendRequest::new(detections, person_regions, occasion);
    let now = std::time::Instant::now();
    let status = match api.recommend(&request) {
      Ok(response) => {
        let result = normalize_response(response);
        info!(
          "推荐完成，耗时: {:.2?}，{} 个推荐条目",
          now.elapsed(),
          result.recommended_items.len()
        );
        self.result = Some(result);
        RecommendStatus::Updated
      }
      Err(e) => {
        error!("Recommendation failed: {}", e);
        RecommendStatus::Failed
      }
    };
    self.loading = false;
    status
  }

  pub fn view(&self) -> EnhancementView<'_> {
    EnhancementView { flow: self }
  }
}

pub struct EnhancementView<'a> {
  flow: &'a EnhancementFlow,
}

impl fmt::Display for EnhancementView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Style Enhancement")?;
    if self.flow.loading {
      return writeln!(f, "  Generating recommendations...");
    }
    let Some(result) = &self.flow.result else {
      return writeln!(f, "  Recommendations will appear here after detection");
    };

    writeln!(f, "Recommended Items")?;
    if result.recommended_items.is_empty() {
      writeln!(f, "  No additional items recommended")?;
    }
    for item in &result.recommended_items {
      let info = item_info(&item.label);
      writeln!(f, "  {} {} ({})", info.icon, capitalize(&item.label), info.category)?;
      if let Some(color) = &item.color {
        writeln!(f, "    Color: {}", color)?;
      }
      let source = match item.source.as_str() {
        "" => "unknown",
        other => other,
      };
      writeln!(f, "    Source: {} | Priority: {}", source, item.source.priority())?;
    }

    let enhancement = &result.final_enhancement;
    writeln!(f)?;
    writeln!(f, "Stylist Notes")?;
    writeln!(f, "  {}", enhancement.final_description)?;
    writeln!(f, "  Style: {}", capitalize(&enhancement.recommendation_style))?;
    writeln!(f, "  Confidence: {}", capitalize(&enhancement.confidence_level))?;
    for explained in &enhancement.items_explained {
      writeln!(f, "  • {}: {}", capitalize(&explained.label), explained.reason)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::model::Priority;

  #[test]
  fn preferred_shape_is_normalized() {
    let result = normalize_response(json!({
      "hybrid_recommendations": [
        {"label": "white sneakers", "source": "rule"},
        {"label": "watch", "color": "silver", "source": "llm"}
      ],
      "enhanced": {
        "final_description": "Clean and casual.",
        "recommendation_style": "minimal",
        "confidence_level": "high",
        "items_explained": [{"label": "watch", "reason": "adds polish"}]
      }
    }));
    assert_eq!(result.recommended_items.len(), 2);
    assert_eq!(result.recommended_items[1].source.priority(), Priority::High);
    assert_eq!(result.final_enhancement.final_description, "Clean and casual.");
    assert_eq!(result.final_enhancement.items_explained[0].reason, "adds polish");
  }

  #[test]
  fn legacy_shape_is_taken_as_is() {
    let result = normalize_response(json!({
      "recommended_items": ["belt"],
      "final_enhancement": {"final_description": "```json\n{\"final_description\": \"Cinch it.\"}\n```"}
    }));
    assert_eq!(result.recommended_items[0].label, "belt");
    assert_eq!(result.final_enhancement.final_description, "Cinch it.");
    assert_eq!(result.final_enhancement.recommendation_style, "personalized style");
  }

  #[test]
  fn unknown_shape_yields_defaults() {
    for value in [json!({"something": 1}), json!(null), json!("text"), json!([1, 2])] {
      let result = normalize_response(value);
      assert!(result.recommended_items.is_empty());
      assert_eq!(result.final_enhancement.final_description, DEFAULT_DESCRIPTION);
      assert_eq!(result.final_enhancement.confidence_level, "medium");
    }
  }

  #[test]
  fn malformed_items_are_skipped() {
    let result = normalize_response(json!({
      "hybrid_recommendations": [{"label": "scarf"}, 42, {"label": 7}],
      "enhanced": null
    }));
    assert_eq!(result.recommended_items.len(), 1);
    assert_eq!(result.recommended_items[0].label, "scarf");
  }

  #[test]
  fn view_shows_items_and_notes() {
    let mut flow = EnhancementFlow::new();
    assert!(flow.view().to_string().contains("Recommendations will appear here"));
    flow.result = Some(normalize_response(json!({
      "hybrid_recommendations": [{"label": "denim jacket", "source": "ml+rule"}],
      "enhanced": {"final_description": "Layer up.", "items_explained": [{"label": "denim jacket", "reason": "texture"}]}
    })));
    let text = flow.view().to_string();
    assert!(text.contains("🧥 Denim jacket (Outerwear)"));
    assert!(text.contains("Source: ml+rule | Priority: Medium"));
    assert!(text.contains("Layer up."));
    assert!(text.contains("Style: Personalized style"));
    assert!(text.contains("• Denim jacket: texture"));
  }
}
