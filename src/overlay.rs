// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/overlay.rs - 检测框叠加坐标
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

use crate::model::BBox;

/// 旧版主视图的固定水平偏移（像素）
pub const LEGACY_LEFT_OFFSET: f32 = 90.0;
/// 旧版主视图的宽度补偿（像素）
pub const LEGACY_WIDTH_PAD: f32 = 10.0;

/// 叠加矩形，单位由模式决定（像素或百分比）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayBox {
  pub left: f32,
  pub top: f32,
  pub width: f32,
  pub height: f32,
}

impl OverlayBox {
  pub fn right(&self) -> f32 {
    self.left + self.width
  }

  pub fn bottom(&self) -> f32 {
    self.top + self.height
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum OverlayMode {
  /// 原始像素坐标加固定偏移，不做缩放
  #[default]
  Legacy,
  /// 按 rendered / source 在两个方向分别缩放
  Scaled {
    rendered: (u32, u32),
    source: (u32, u32),
  },
}

impl OverlayMode {
  pub fn place(&self, bbox: &BBox) -> OverlayBox {
    let [x1, y1, x2, y2] = *bbox;
    match *self {
      OverlayMode::Legacy => OverlayBox {
        left: x1 + LEGACY_LEFT_OFFSET,
        top: y1,
        width: (x2 - x1) + LEGACY_WIDTH_PAD,
        height: y2 - y1,
      },
      OverlayMode::Scaled { rendered, source } => {
        let sx = scale_factor(rendered.0, source.0);
        let sy = scale_factor(rendered.1, source.1);
        OverlayBox {
          left: x1 * sx,
          top: y1 * sy,
          width: (x2 - x1) * sx,
          height: (y2 - y1) * sy,
        }
      }
    }
  }
}

fn scale_factor(rendered: u32, source: u32) -> f32 {
  if source == 0 {
    1.0
  } else {
    rendered as f32 / source as f32
  }
}

/// 命令行中的模式名，scaled 的尺寸由调用方补充
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayKind {
  #[default]
  Legacy,
  Scaled,
}

impl FromStr for OverlayKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "legacy" => Ok(OverlayKind::Legacy),
      "scaled" => Ok(OverlayKind::Scaled),
      other => Err(format!("未知的叠加模式: {other}")),
    }
  }
}

/// 解析 `WxH` 形式的显示尺寸
pub fn parse_display_size(value: &str) -> Result<(u32, u32), String> {
  let (w, h) = value
    .split_once(['x', 'X'])
    .ok_or_else(|| format!("尺寸格式应为 WxH: {value}"))?;
  let w = w.trim().parse::<u32>().map_err(|e| format!("宽度无效 {w}: {e}"))?;
  let h = h.trim().parse::<u32>().map_err(|e| format!("高度无效 {h}: {e}"))?;
  Ok((w, h))
}

/// 相对原图尺寸的百分比矩形，调试页使用
pub fn percent_box(bbox: &BBox, width: u32, height: u32) -> OverlayBox {
  let [x1, y1, x2, y2] = *bbox;
  let (w, h) = (width.max(1) as f32, height.max(1) as f32);
  OverlayBox {
    left: x1 / w * 100.0,
    top: y1 / h * 100.0,
    width: (x2 - x1) / w * 100.0,
    height: (y2 - y1) / h * 100.0,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn legacy_mode_offsets_without_scaling() {
    let placed = OverlayMode::Legacy.place(&[10.0, 20.0, 110.0, 220.0]);
    assert_eq!(
      placed,
      OverlayBox {
        left: 100.0,
        top: 20.0,
        width: 110.0,
        height: 200.0,
      }
    );
  }

  #[test]
  fn scaled_mode_uses_per_axis_factor() {
    let mode = OverlayMode::Scaled {
      rendered: (400, 300),
      source: (800, 1200),
    };
    let placed = mode.place(&[100.0, 400.0, 300.0, 800.0]);
    assert_eq!(placed.left, 50.0);
    assert_eq!(placed.top, 100.0);
    assert_eq!(placed.width, 100.0);
    assert_eq!(placed.height, 100.0);
    assert_eq!(placed.right(), 150.0);
    assert_eq!(placed.bottom(), 200.0);
  }

  #[test]
  fn scaled_mode_with_unknown_source_is_identity() {
    let mode = OverlayMode::Scaled {
      rendered: (400, 300),
      source: (0, 0),
    };
    let placed = mode.place(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!((placed.left, placed.top, placed.width, placed.height), (1.0, 2.0, 2.0, 2.0));
  }

  #[test]
  fn percent_box_is_relative_to_source() {
    let placed = percent_box(&[64.0, 48.0, 320.0, 240.0], 640, 480);
    assert_eq!(placed.left, 10.0);
    assert_eq!(placed.top, 10.0);
    assert_eq!(placed.width, 40.0);
    assert_eq!(placed.height, 40.0);
  }

  #[test]
  fn display_size_parsing() {
    assert_eq!(parse_display_size("800x600"), Ok((800, 600)));
    assert_eq!(parse_display_size("1024X768"), Ok((1024, 768)));
    assert!(parse_display_size("800").is_err());
    assert!(parse_display_size("ax600").is_err());
    assert_eq!("Scaled".parse::<OverlayKind>(), Ok(OverlayKind::Scaled));
  }
}
