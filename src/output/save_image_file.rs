// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/output/save_image_file.rs - 保存标注后的图像文件
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

use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;
use url::Url;

use crate::{
  FromUrl, FromUrlWithScheme,
  input::ImageUpload,
  model::DetectResponse,
  output::{OutputError, Render, draw::Draw},
};

pub struct SaveImageFileOutput {
  path: PathBuf,
  draw: Draw,
}

impl FromUrlWithScheme for SaveImageFileOutput {
  const SCHEME: &'static str = "image";
}

impl FromUrl for SaveImageFileOutput {
  type Error = OutputError;

  fn from_url(uri: &Url) -> Result<Self, Self::Error> {
    if uri.scheme() != Self::SCHEME {
      return Err(OutputError::SchemeMismatch(format!(
        "期望保存方式 '{}', 实际保存方式 '{}'",
        Self::SCHEME,
        uri.scheme()
      )));
    }

    Ok(SaveImageFileOutput {
      path: PathBuf::from(uri.path()),
      draw: Draw::default(),
    })
  }
}

impl SaveImageFileOutput {
  pub fn with_draw(mut self, draw: Draw) -> Self {
    self.draw = draw;
    self
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn save_image(&self, image: RgbImage) -> Result<(), OutputError> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      std::fs::create_dir_all(parent)?;
    }

    image.save(&self.path)?;
    info!("保存图像到文件: {}", self.path.display());

    Ok(())
  }
}

impl Render<RgbImage, DetectResponse> for SaveImageFileOutput {
  type Error = OutputError;

  fn render_result(&self, frame: &RgbImage, result: &DetectResponse) -> Result<(), Self::Error> {
    let mut image = frame.clone();
    self
      .draw
      .draw_detections(&mut image, &result.detections, &result.person_regions);
    self.save_image(image)
  }
}

/// 先解码上传的图片，再按 RgbImage 渲染
impl Render<ImageUpload, DetectResponse> for SaveImageFileOutput {
  type Error = OutputError;

  fn render_result(&self, frame: &ImageUpload, result: &DetectResponse) -> Result<(), Self::Error> {
    let image = frame.decode_rgb()?;
    <Self as Render<RgbImage, DetectResponse>>::render_result(self, &image, result)
  }
}
