// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/input/read_image_file.rs - 图像文件解码
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

use std::io::Cursor;

use image::{ImageError, ImageReader, RgbImage};

/// 只读取文件头，不解码像素
pub(super) fn probe_dimensions(bytes: &[u8]) -> Result<(u32, u32), ImageError> {
  ImageReader::new(Cursor::new(bytes))
    .with_guessed_format()?
    .into_dimensions()
}

pub(super) fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, ImageError> {
  let image = ImageReader::new(Cursor::new(bytes))
    .with_guessed_format()?
    .decode()?;
  Ok(image.into_rgb8())
}
