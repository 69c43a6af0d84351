// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/output.rs - 输出定义
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

use thiserror::Error;

pub trait Render<Frame, Output>: Sized {
  type Error;
  fn render_result(&self, frame: &Frame, result: &Output) -> Result<(), Self::Error>;
}

/// 不产生任何输出
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOutput;

impl<Frame, Output> Render<Frame, Output> for NoOutput {
  type Error = std::convert::Infallible;

  fn render_result(&self, _frame: &Frame, _result: &Output) -> Result<(), Self::Error> {
    Ok(())
  }
}

/// 未配置输出时跳过渲染
impl<Frame, Output, R: Render<Frame, Output>> Render<Frame, Output> for Option<R> {
  type Error = R::Error;

  fn render_result(&self, frame: &Frame, result: &Output) -> Result<(), Self::Error> {
    match self {
      Some(render) => render.render_result(frame, result),
      None => Ok(()),
    }
  }
}

#[cfg(feature = "save_image_file")]
pub mod draw;

#[cfg(feature = "save_image_file")]
mod save_image_file;
#[cfg(feature = "save_image_file")]
pub use self::save_image_file::SaveImageFileOutput;

#[derive(Error, Debug)]
pub enum OutputError {
  #[error("I/O 错误: {0}")]
  Io(#[from] std::io::Error),
  #[cfg(feature = "save_image_file")]
  #[error("图像错误: {0}")]
  Image(#[from] image::ImageError),
  #[error("图片读取失败: {0}")]
  Upload(#[from] crate::input::UploadError),
  #[error("URI 方案不匹配: {0}")]
  SchemeMismatch(String),
  #[error("字体加载失败: {0}")]
  Font(String),
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;

  use super::*;

  struct Counting(Cell<usize>);

  impl Render<u8, u8> for Counting {
    type Error = std::convert::Infallible;

    fn render_result(&self, _frame: &u8, _result: &u8) -> Result<(), Self::Error> {
      self.0.set(self.0.get() + 1);
      Ok(())
    }
  }

  #[test]
  fn optional_output_renders_only_when_present() {
    let present = Some(Counting(Cell::new(0)));
    present.render_result(&1u8, &2u8).unwrap();
    assert_eq!(present.as_ref().map(|c| c.0.get()), Some(1));

    let absent: Option<Counting> = None;
    assert!(absent.render_result(&1u8, &2u8).is_ok());
  }
}
