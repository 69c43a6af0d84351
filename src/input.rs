// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/input.rs - 上传图片输入
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

use thiserror::Error;
use tracing::{debug, error};
use url::Url;

use crate::{FromUrl, FromUrlWithScheme};

#[cfg(feature = "read_image_file")]
mod read_image_file;

#[derive(Error, Debug)]
pub enum UploadError {
  #[error("URI scheme mismatch: expected '{expected}', found '{found}'")]
  SchemeMismatch { expected: &'static str, found: String },
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
  #[cfg(feature = "read_image_file")]
  #[error("Image loading error: {0}")]
  Image(#[from] image::ImageError),
  #[error("Empty file: {0}")]
  Empty(String),
}

/// 用户选择的单个图片文件
#[derive(Debug, Clone)]
pub struct ImageUpload {
  file_name: String,
  bytes: Vec<u8>,
  mime_type: String,
  dimensions: Option<(u32, u32)>,
}

impl FromUrlWithScheme for ImageUpload {
  const SCHEME: &'static str = "image";
}

impl FromUrl for ImageUpload {
  type Error = UploadError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    if url.scheme() != Self::SCHEME {
      error!(
        "URI scheme mismatch: expected '{}', found '{}'",
        Self::SCHEME,
        url.scheme()
      );
      return Err(UploadError::SchemeMismatch {
        expected: Self::SCHEME,
        found: url.scheme().to_string(),
      });
    }

    Self::open(url.path())
  }
}

impl ImageUpload {
  pub fn open(path: impl AsRef<Path>) -> Result<Self, UploadError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let file_name = path
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| path.display().to_string());
    Self::from_bytes(file_name, bytes)
  }

  pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, UploadError> {
    let file_name = file_name.into();
    if bytes.is_empty() {
      return Err(UploadError::Empty(file_name));
    }

    let mime_type = sniff_mime(&file_name, &bytes);

    #[cfg(feature = "read_image_file")]
    let dimensions = read_image_file::probe_dimensions(&bytes)
      .map_err(|e| debug!("无法读取图片尺寸 {}: {}", file_name, e))
      .ok();
    #[cfg(not(feature = "read_image_file"))]
    let dimensions = None;

    debug!(
      "已载入 {} ({}, {} 字节, 尺寸 {:?})",
      file_name,
      mime_type,
      bytes.len(),
      dimensions
    );

    Ok(Self {
      file_name,
      bytes,
      mime_type,
      dimensions,
    })
  }

  pub fn file_name(&self) -> &str {
    &self.file_name
  }

  pub fn bytes(&self) -> &[u8] {
    &self.bytes
  }

  pub fn size(&self) -> u64 {
    self.bytes.len() as u64
  }

  pub fn mime_type(&self) -> &str {
    &self.mime_type
  }

  /// 原图尺寸 (width, height)，无法解析时为 None
  pub fn dimensions(&self) -> Option<(u32, u32)> {
    self.dimensions
  }

  #[cfg(feature = "read_image_file")]
  pub fn decode_rgb(&self) -> Result<image::RgbImage, UploadError> {
    Ok(read_image_file::decode_rgb(&self.bytes)?)
  }
}

/// 优先按文件头识别，其次按扩展名
fn sniff_mime(file_name: &str, bytes: &[u8]) -> String {
  if let Some(kind) = infer::get(bytes) {
    return kind.mime_type().to_string();
  }

  let extension = Path::new(file_name)
    .extension()
    .map(|ext| ext.to_string_lossy().to_lowercase())
    .unwrap_or_default();
  match extension.as_str() {
    "jpg" | "jpeg" => "image/jpeg",
    "png" => "image/png",
    "gif" => "image/gif",
    "webp" => "image/webp",
    "bmp" => "image/bmp",
    _ => "application/octet-stream",
  }
  .to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_is_rejected() {
    let err = ImageUpload::from_bytes("blank.png", Vec::new()).unwrap_err();
    assert!(matches!(err, UploadError::Empty(name) if name == "blank.png"));
  }

  #[test]
  fn mime_falls_back_to_extension() {
    assert_eq!(sniff_mime("look.JPG", b"not really a jpeg"), "image/jpeg");
    assert_eq!(sniff_mime("notes.txt", b"plain text"), "application/octet-stream");
  }

  #[test]
  fn mime_prefers_magic_bytes() {
    let png_magic = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    assert_eq!(sniff_mime("photo.jpg", &png_magic), "image/png");
  }

  #[test]
  fn url_scheme_must_be_image() {
    let url = Url::parse("file:///tmp/look.png").unwrap();
    assert!(matches!(
      ImageUpload::from_url(&url),
      Err(UploadError::SchemeMismatch { .. })
    ));
  }

  #[cfg(feature = "read_image_file")]
  #[test]
  fn open_reads_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("look.png");
    image::RgbImage::new(40, 30).save(&path).unwrap();

    let upload = ImageUpload::open(&path).unwrap();
    assert_eq!(upload.file_name(), "look.png");
    assert_eq!(upload.mime_type(), "image/png");
    assert_eq!(upload.dimensions(), Some((40, 30)));
  }
}
