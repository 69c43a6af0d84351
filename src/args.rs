// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/args.rs - 命令行参数
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

use std::time::Duration;

use clap::{Args as ClapArgs, Parser, Subcommand};
use url::Url;

use outfit_guru::{
  api::{ApiConfig, DEFAULT_BASE_URL, DetectVersion},
  events::KeyPress,
  occasion::Occasion,
  overlay::{OverlayKind, parse_display_size},
};

/// Outfit Guru 命令行客户端
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
  /// 后端服务地址
  #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL, global = true)]
  pub api: Url,

  /// 请求超时秒数，不指定时不设超时
  #[arg(long, value_name = "SECONDS", global = true)]
  pub timeout_secs: Option<u64>,

  /// 使用增强版检测接口 (/detect-v2)
  #[arg(long, global = true)]
  pub v2: bool,

  #[command(subcommand)]
  pub command: Command,
}

impl Args {
  pub fn api_config(&self) -> ApiConfig {
    ApiConfig {
      base_url: self.api.clone(),
      timeout: self.timeout_secs.map(Duration::from_secs),
      version: if self.v2 {
        DetectVersion::V2
      } else {
        DetectVersion::V1
      },
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum Command {
  /// 打印落地页，可模拟滚动
  Landing {
    /// 依次触发的滚动位置
    #[arg(long, value_name = "Y", value_delimiter = ',')]
    scroll: Vec<f32>,
    /// 每个区块的高度
    #[arg(long, default_value = "800", value_name = "PX")]
    section_height: f32,
    /// 视口高度
    #[arg(long, default_value = "900", value_name = "PX")]
    viewport_height: f32,
  },
  /// 上传图片并显示检测结果
  Detect(UploadArgs),
  /// 检测后请求穿搭分析
  Analyze {
    #[command(flatten)]
    upload: UploadArgs,
    /// 场合: casual / party / college / ceremony
    #[arg(long, default_value = "casual", value_parser = parse_occasion)]
    occasion: String,
  },
  /// 检测后请求搭配推荐
  Recommend {
    #[command(flatten)]
    upload: UploadArgs,
    #[arg(long, default_value = "casual", value_parser = parse_occasion)]
    occasion: String,
  },
  /// 开发者调试页
  Inspect {
    /// 输入图片，例如 image:///tmp/look.jpg
    #[arg(long, value_name = "SOURCE")]
    image: Option<Url>,
    /// 展开的 JSON 树节点路径，例如 root.refined_detections
    #[arg(long, value_name = "PATH")]
    expand: Vec<String>,
    /// 展开全部节点
    #[arg(long)]
    expand_all: bool,
    /// 选中的检测框序号
    #[arg(long, value_name = "INDEX")]
    select: Option<usize>,
  },
  /// 打印文档页面
  Docs {
    #[arg(default_value = "/docs")]
    path: String,
    /// 依次触发的按键，例如 ctrl+k,down,enter
    #[arg(long, value_delimiter = ',', value_parser = parse_key)]
    keys: Vec<KeyPress>,
  },
  /// 搜索文档
  Search {
    query: String,
    #[arg(long, value_delimiter = ',', value_parser = parse_key)]
    keys: Vec<KeyPress>,
  },
  /// 检查后端服务状态
  Health,
}

#[derive(ClapArgs, Debug)]
pub struct UploadArgs {
  /// 输入图片，例如 image:///tmp/look.jpg
  #[arg(long, value_name = "SOURCE")]
  pub image: Option<Url>,

  /// 标注后的输出图片，例如 image:///tmp/annotated.png
  #[arg(long, value_name = "OUTPUT")]
  pub output: Option<Url>,

  /// 叠加框模式: legacy / scaled
  #[arg(long, default_value = "legacy")]
  pub overlay: OverlayKind,

  /// scaled 模式下的显示尺寸 WxH，默认使用原图尺寸
  #[arg(long, value_name = "WxH", value_parser = parse_display_size)]
  pub display: Option<(u32, u32)>,

  /// 标签字体 (TTF)
  #[arg(long, value_name = "FILE")]
  pub font: Option<String>,
}

fn parse_key(value: &str) -> Result<KeyPress, String> {
  KeyPress::parse(value).ok_or_else(|| format!("无法识别的按键: {value}"))
}

/// 接受任意大小写，输出规范的小写场合名
fn parse_occasion(value: &str) -> Result<String, String> {
  value
    .parse::<Occasion>()
    .map(|occasion| occasion.as_str().to_string())
    .map_err(|e| e.to_string())
}
