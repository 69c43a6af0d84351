// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/output/draw.rs - 检测框与颜色块绘制
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

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::{
  drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size},
  rect::Rect,
};
use tracing::debug;

use crate::{
  model::{Detection, PersonRegion},
  output::OutputError,
  overlay::{OverlayBox, OverlayMode},
};

// 文本渲染常量
const LABEL_FONT_SIZE: f32 = 18.0;
const LABEL_TEXT_VERTICAL_PADDING: i32 = 2;
const LABEL_COLOR: [u8; 3] = [139, 92, 246]; // 紫色，与页面主色一致
const BORDER_THICKNESS: i32 = 2;
const SWATCH_SIZE: u32 = 14;

/// 解析 `#rrggbb` / `#rgb`，前导 '#' 可省略
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
  let digits = hex.trim().trim_start_matches('#');
  let channel = |s: &str| u8::from_str_radix(s, 16).ok();
  match digits.len() {
    6 if digits.is_ascii() => Some([
      channel(&digits[0..2])?,
      channel(&digits[2..4])?,
      channel(&digits[4..6])?,
    ]),
    3 if digits.is_ascii() => {
      let mut rgb = [0u8; 3];
      for (slot, c) in rgb.iter_mut().zip(digits.chars()) {
        let v = c.to_digit(16)? as u8;
        *slot = v * 16 + v;
      }
      Some(rgb)
    }
    _ => None,
  }
}

pub struct Draw {
  font: Option<FontVec>,
  font_size: f32,
  label_color: [u8; 3],
  mode: OverlayMode,
}

impl Default for Draw {
  fn default() -> Self {
    Self {
      font: None,
      font_size: LABEL_FONT_SIZE,
      label_color: LABEL_COLOR,
      mode: OverlayMode::default(),
    }
  }
}

impl Draw {
  /// 标签文字需要字体；未提供字体时只画框和颜色块
  pub fn with_font_file(mut self, path: impl AsRef<Path>) -> Result<Self, OutputError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let font = FontVec::try_from_vec(data)
      .map_err(|e| OutputError::Font(format!("{}: {}", path.display(), e)))?;
    self.font = Some(font);
    Ok(self)
  }

  pub fn with_mode(mut self, mode: OverlayMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn mode(&self) -> OverlayMode {
    self.mode
  }

  pub fn draw_detections(
    &self,
    image: &mut RgbImage,
    detections: &[Detection],
    person_regions: &[PersonRegion],
  ) {
    for person in person_regions {
      for (_, region) in person.regions.iter() {
        let color = parse_hex_color(&region.dominant_color_hex)
          .or(region.dominant_color_rgb)
          .unwrap_or(self.label_color);
        if let Some(rect) = clamp_rect(image, &self.mode.place(&region.bbox)) {
          draw_hollow_rect_mut(image, rect, Rgb(color));
        }
      }
    }

    for detection in detections {
      let placed = self.mode.place(&detection.bbox);
      let Some(rect) = clamp_rect(image, &placed) else {
        debug!("检测框 {} 超出图像范围，跳过", detection.label);
        continue;
      };
      self.draw_border(image, rect);

      if let Some(color) = parse_hex_color(&detection.dominant_color_hex) {
        let swatch = Rect::at(rect.left(), rect.top())
          .of_size(SWATCH_SIZE.min(rect.width()), SWATCH_SIZE.min(rect.height()));
        draw_filled_rect_mut(image, swatch, Rgb(color));
      }

      if let Some(font) = &self.font {
        let label = format!("{} {}%", detection.label, detection.confidence_percent());
        self.draw_label(image, rect, font, &label);
      }
    }
  }

  fn draw_border(&self, image: &mut RgbImage, rect: Rect) {
    // 向内收缩实现加粗边框
    for inset in 0..BORDER_THICKNESS {
      let w = rect.width() as i32 - 2 * inset;
      let h = rect.height() as i32 - 2 * inset;
      if w <= 0 || h <= 0 {
        break;
      }
      let inner = Rect::at(rect.left() + inset, rect.top() + inset).of_size(w as u32, h as u32);
      draw_hollow_rect_mut(image, inner, Rgb(self.label_color));
    }
  }

  fn draw_label(&self, image: &mut RgbImage, rect: Rect, font: &FontVec, label: &str) {
    let scale = PxScale::from(self.font_size);
    let (text_width, text_height) = text_size(scale, font, label);
    let text_height = text_height as i32 + 2 * LABEL_TEXT_VERTICAL_PADDING;

    // 标签放在框的上方，空间不足时贴在图像顶端
    let label_x = rect.left().max(0);
    let label_y = (rect.top() - text_height).max(0);
    let max_width = (image.width() as i32 - label_x).max(0) as u32;
    let label_width = (text_width + 4).min(max_width);
    if label_width == 0 || text_height <= 0 {
      return;
    }

    let background = Rect::at(label_x, label_y).of_size(label_width, text_height as u32);
    draw_filled_rect_mut(image, background, Rgb(self.label_color));
    draw_text_mut(
      image,
      Rgb([255u8, 255, 255]),
      label_x + 2,
      label_y + LABEL_TEXT_VERTICAL_PADDING,
      scale,
      font,
      label,
    );
  }
}

/// 裁剪到图像范围，完全在外或退化时返回 None
fn clamp_rect(image: &RgbImage, placed: &OverlayBox) -> Option<Rect> {
  let (w, h) = (image.width() as i32, image.height() as i32);
  if w == 0 || h == 0 {
    return None;
  }
  let x_min = (placed.left.floor() as i32).clamp(0, w - 1);
  let y_min = (placed.top.floor() as i32).clamp(0, h - 1);
  let x_max = (placed.right().ceil() as i32).clamp(0, w - 1);
  let y_max = (placed.bottom().ceil() as i32).clamp(0, h - 1);
  if x_min >= x_max || y_min >= y_max {
    return None;
  }
  Some(Rect::at(x_min, y_min).of_size((x_max - x_min + 1) as u32, (y_max - y_min + 1) as u32))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn detection(bbox: [f32; 4], hex: &str) -> Detection {
    Detection {
      label: "shirt".to_string(),
      confidence: 0.9,
      bbox,
      dominant_color_hex: hex.to_string(),
      source_model: "yolo".to_string(),
    }
  }

  #[test]
  fn hex_colors() {
    assert_eq!(parse_hex_color("#ff8000"), Some([255, 128, 0]));
    assert_eq!(parse_hex_color("00FF00"), Some([0, 255, 0]));
    assert_eq!(parse_hex_color("#fff"), Some([255, 255, 255]));
    assert_eq!(parse_hex_color("#zzzzzz"), None);
    assert_eq!(parse_hex_color(""), None);
    assert_eq!(parse_hex_color("#é12345"), None);
  }

  #[test]
  fn scaled_boxes_draw_border_and_swatch() {
    let mut image = RgbImage::new(100, 100);
    let draw = Draw::default().with_mode(OverlayMode::Scaled {
      rendered: (100, 100),
      source: (100, 100),
    });
    draw.draw_detections(&mut image, &[detection([20.0, 20.0, 60.0, 60.0], "#00ff00")], &[]);

    // 左上角是颜色块，右下角是边框
    assert_eq!(image.get_pixel(21, 21), &Rgb([0, 255, 0]));
    assert_eq!(image.get_pixel(60, 60), &Rgb(LABEL_COLOR));
    assert_eq!(image.get_pixel(40, 40), &Rgb([0, 0, 0]));
  }

  #[test]
  fn legacy_boxes_are_shifted_right() {
    let mut image = RgbImage::new(200, 100);
    Draw::default().draw_detections(&mut image, &[detection([0.0, 10.0, 20.0, 50.0], "")], &[]);
    assert_eq!(image.get_pixel(90, 30), &Rgb(LABEL_COLOR));
    assert_eq!(image.get_pixel(0, 30), &Rgb([0, 0, 0]));
  }

  #[test]
  fn boxes_outside_image_are_skipped() {
    let mut image = RgbImage::new(50, 50);
    let draw = Draw::default().with_mode(OverlayMode::Scaled {
      rendered: (50, 50),
      source: (50, 50),
    });
    draw.draw_detections(&mut image, &[detection([80.0, 80.0, 120.0, 120.0], "#ffffff")], &[]);
    assert!(image.pixels().all(|p| p == &Rgb([0, 0, 0])));
  }

  #[test]
  fn missing_font_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
      Draw::default().with_font_file(dir.path().join("missing.ttf")),
      Err(OutputError::Io(_))
    ));
    let bogus = dir.path().join("bogus.ttf");
    std::fs::write(&bogus, b"not a font").unwrap();
    assert!(matches!(
      Draw::default().with_font_file(&bogus),
      Err(OutputError::Font(_))
    ));
  }
}
