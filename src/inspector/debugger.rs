// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/inspector/debugger.rs - 检测框调试与统计
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

use std::{collections::HashSet, fmt};

use crate::{
  model::{DevDetectResult, DevDetection},
  overlay::{OverlayBox, percent_box},
};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// 以 1024 为进位，保留两位小数并去掉末尾的 0
pub fn format_file_size(bytes: u64) -> String {
  if bytes == 0 {
    return "0 Bytes".to_string();
  }
  let mut unit = 0;
  let mut value = bytes as f64;
  while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
    value /= 1024.0;
    unit += 1;
  }
  let text = format!("{value:.2}");
  let text = text.trim_end_matches('0').trim_end_matches('.');
  format!("{} {}", text, SIZE_UNITS[unit])
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultCounts {
  pub raw_detections: usize,
  pub filtered_detections: usize,
  pub refined_detections: usize,
  pub person_regions: usize,
  pub total_colors: usize,
  pub unique_labels: usize,
}

impl From<&DevDetectResult> for ResultCounts {
  fn from(result: &DevDetectResult) -> Self {
    let labels: HashSet<&str> = result
      .refined_detections
      .iter()
      .map(|d| d.refined_label.as_str())
      .collect();
    Self {
      raw_detections: result.raw_detections.len(),
      filtered_detections: result.filtered_detections.len(),
      refined_detections: result.refined_detections.len(),
      person_regions: result.person_regions.len(),
      total_colors: result.refined_detections.iter().map(|d| d.colors.len()).sum(),
      unique_labels: labels.len(),
    }
  }
}

/// 单个检测框的调试器，坐标一律使用相对原图的百分比
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxDebugger {
  selected: Option<usize>,
}

impl BoxDebugger {
  pub fn new() -> Self {
    Self::default()
  }

  /// 再次选择同一个检测框时取消选择
  pub fn select(&mut self, index: usize) {
    self.selected = if self.selected == Some(index) {
      None
    } else {
      Some(index)
    };
  }

  pub fn selected(&self) -> Option<usize> {
    self.selected
  }

  /// 选中时只返回该检测框，否则返回全部
  pub fn boxes<'a>(&self, result: &'a DevDetectResult) -> Vec<(usize, &'a DevDetection, OverlayBox)> {
    let place = |(i, d): (usize, &'a DevDetection)| (i, d, percent_box(&d.bbox, result.width, result.height));
    match self.selected {
      Some(i) => result
        .refined_detections
        .get(i)
        .map(|d| place((i, d)))
        .into_iter()
        .collect(),
      None => result.refined_detections.iter().enumerate().map(place).collect(),
    }
  }

  pub fn view<'a>(&'a self, result: &'a DevDetectResult) -> BoxDebuggerView<'a> {
    BoxDebuggerView {
      debugger: self,
      result,
    }
  }
}

pub struct BoxDebuggerView<'a> {
  debugger: &'a BoxDebugger,
  result: &'a DevDetectResult,
}

fn join_bbox(bbox: &[f32; 4]) -> String {
  bbox.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

impl fmt::Display for BoxDebuggerView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let result = self.result;
    let selected = self.debugger.selected;
    writeln!(f, "Bounding Box Visualizer")?;
    writeln!(f, "Individual Detection Preview")?;
    for (i, detection) in result.refined_detections.iter().enumerate() {
      let marker = if selected == Some(i) { ">" } else { " " };
      writeln!(f, "{} [{}] {}", marker, i, detection.refined_label)?;
      writeln!(f, "      BBox: [{}]", join_bbox(&detection.bbox))?;
      writeln!(
        f,
        "      Confidence: {}%",
        (detection.refined_confidence * 100.0).round()
      )?;
    }

    let selected_detection = selected.and_then(|i| result.refined_detections.get(i));
    match selected_detection {
      Some(detection) => writeln!(f, "Visual Preview - {}", detection.refined_label)?,
      None => writeln!(f, "Visual Preview")?,
    }
    for (_, detection, placed) in self.debugger.boxes(result) {
      writeln!(
        f,
        "  {} left {:.1}% top {:.1}% width {:.1}% height {:.1}%",
        detection.refined_label, placed.left, placed.top, placed.width, placed.height
      )?;
    }
    match selected_detection {
      Some(_) => writeln!(f, "Showing selected detection")?,
      None => writeln!(
        f,
        "Showing all {} detections",
        result.refined_detections.len()
      )?,
    }

    if let Some(detection) = selected_detection {
      let [x1, y1, x2, y2] = detection.bbox;
      let placed = percent_box(&detection.bbox, result.width, result.height);
      writeln!(f, "Coordinate Details")?;
      writeln!(f, "  Bounding Box")?;
      writeln!(f, "    Top-Left: ({}, {})", x1, y1)?;
      writeln!(f, "    Bottom-Right: ({}, {})", x2, y2)?;
      writeln!(f, "    Width: {}px", x2 - x1)?;
      writeln!(f, "    Height: {}px", y2 - y1)?;
      writeln!(f, "  Relative Position")?;
      writeln!(f, "    Left: {:.1}%", placed.left)?;
      writeln!(f, "    Top: {:.1}%", placed.top)?;
      writeln!(f, "    Width: {:.1}%", placed.width)?;
      writeln!(f, "    Height: {:.1}%", placed.height)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Color;

  fn detection(label: &str, bbox: [f32; 4], colors: usize) -> DevDetection {
    DevDetection {
      source_model: "yolo".to_string(),
      label: label.to_string(),
      bbox,
      confidence: 0.8,
      refined_label: label.to_string(),
      refined_confidence: 0.876,
      colors: vec![
        Color {
          rgb: vec![0, 0, 0],
          hex: "#000000".to_string(),
        };
        colors
      ],
    }
  }

  fn result() -> DevDetectResult {
    DevDetectResult {
      width: 200,
      height: 400,
      raw_detections: vec![detection("shirt", [0.0; 4], 0); 5],
      filtered_detections: vec![detection("shirt", [0.0; 4], 0); 3],
      refined_detections: vec![
        detection("shirt", [20.0, 40.0, 120.0, 240.0], 2),
        detection("jeans", [10.0, 200.0, 110.0, 390.0], 1),
        detection("shirt", [0.0, 0.0, 50.0, 50.0], 3),
      ],
      person_regions: Vec::new(),
    }
  }

  #[test]
  fn file_sizes_trim_trailing_zeros() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(500), "500 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(2_621_440), "2.5 MB");
    assert_eq!(format_file_size(1_234_567), "1.18 MB");
  }

  #[test]
  fn counts_cover_every_list() {
    let counts = ResultCounts::from(&result());
    assert_eq!(
      counts,
      ResultCounts {
        raw_detections: 5,
        filtered_detections: 3,
        refined_detections: 3,
        person_regions: 0,
        total_colors: 6,
        unique_labels: 2,
      }
    );
  }

  #[test]
  fn selecting_twice_clears_selection() {
    let result = result();
    let mut debugger = BoxDebugger::new();
    assert_eq!(debugger.boxes(&result).len(), 3);

    debugger.select(1);
    let boxes = debugger.boxes(&result);
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].0, 1);
    assert_eq!(boxes[0].2.left, 5.0);
    assert_eq!(boxes[0].2.top, 50.0);

    debugger.select(1);
    assert_eq!(debugger.selected(), None);
  }

  #[test]
  fn details_use_one_decimal_percentages() {
    let result = result();
    let mut debugger = BoxDebugger::new();
    assert!(debugger.view(&result).to_string().contains("Showing all 3 detections"));

    debugger.select(0);
    let text = debugger.view(&result).to_string();
    assert!(text.contains("Visual Preview - shirt"));
    assert!(text.contains("Top-Left: (20, 40)"));
    assert!(text.contains("Width: 100px"));
    assert!(text.contains("Left: 10.0%"));
    assert!(text.contains("Height: 50.0%"));
    assert!(text.contains("Confidence: 88%"));
  }
}
