// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/main.rs - 命令行入口
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

mod args;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

use outfit_guru::{
  FromUrl,
  api::{ApiConfig, DetectVersion, HttpOutfitApi, OutfitApi},
  docs::DocsSite,
  events::{EventBus, Key, KeyPress, PageEvent},
  input::ImageUpload,
  landing::{LandingPage, NAV_ITEMS, Navbar, ScrollTracker},
  output::{NoOutput, SaveImageFileOutput, draw::Draw},
  overlay::{OverlayKind, OverlayMode},
  task::{AnalyzeTask, DetectTask, InspectTask, RecommendTask, Task},
};

use args::{Args, Command, UploadArgs};

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let args = Args::parse();
  let config = args.api_config();
  info!("后端地址: {}", config.base_url);

  match args.command {
    Command::Landing {
      scroll,
      section_height,
      viewport_height,
    } => {
      let bus = EventBus::new();
      let navbar = Navbar::attach(&bus, ScrollTracker::uniform(section_height));
      let scroll_height = section_height * NAV_ITEMS.len() as f32;
      for scroll_y in scroll {
        bus.emit(&PageEvent::Scroll {
          scroll_y,
          scroll_height,
          client_height: viewport_height,
        });
      }
      println!("{}", LandingPage::new(&navbar));
    }
    Command::Detect(upload) => {
      let api = connect(config)?;
      let (input, output) = prepare(&upload)?;
      let detector = DetectTask.run_task(input, &api, output)?;
      println!("{}", detector.view());
    }
    Command::Analyze { upload, occasion } => {
      let api = connect(config)?;
      let (input, output) = prepare(&upload)?;
      let outcome = AnalyzeTask { occasion }.run_task(input, &api, output)?;
      println!("{}", outcome.detector.view());
      println!("{}", outcome.analyzer.report(outcome.detector.detections()));
    }
    Command::Recommend { upload, occasion } => {
      let api = connect(config)?;
      let (input, output) = prepare(&upload)?;
      let outcome = RecommendTask { occasion }.run_task(input, &api, output)?;
      println!("{}", outcome.detector.view());
      println!("{}", outcome.flow.view());
    }
    Command::Inspect {
      image,
      expand,
      expand_all,
      select,
    } => {
      let api = connect(config)?;
      let input = load_upload(image.as_ref())?;
      let task = InspectTask {
        expand,
        expand_all,
        select,
      };
      let inspector = task.run_task(input, &api, NoOutput)?;
      println!("{}", inspector.view());
    }
    Command::Docs { path, keys } => {
      let bus = EventBus::new();
      let site = DocsSite::attach(&bus, &path);
      for press in keys {
        bus.emit(&PageEvent::Key(press));
      }
      println!("{}", site);
    }
    Command::Search { query, keys } => {
      let bus = EventBus::new();
      let site = DocsSite::attach(&bus, "/docs");
      bus.emit(&PageEvent::Key(KeyPress::ctrl(Key::Char('k'))));
      site.set_query(&query);
      for press in keys {
        bus.emit(&PageEvent::Key(press));
      }
      println!("{}", site);
    }
    Command::Health => {
      let api = connect(config)?;
      let status = api.health()?;
      println!("Backend status: {}", status.status);
      if !status.is_ok() {
        return Err(anyhow::anyhow!("后端状态异常: {}", status.status));
      }
    }
  }

  Ok(())
}

fn connect(config: ApiConfig) -> Result<HttpOutfitApi> {
  let version = config.version;
  let api = HttpOutfitApi::new(config)?;
  if version == DetectVersion::V2 {
    println!("{}", version.switch_notice());
  }
  info!(
    "检测接口: {} ({}, {})",
    api.detect_endpoint(),
    version.label(),
    version.description()
  );
  Ok(api)
}

fn load_upload(image: Option<&Url>) -> Result<Option<ImageUpload>> {
  Ok(image.map(ImageUpload::from_url).transpose()?)
}

fn prepare(args: &UploadArgs) -> Result<(Option<ImageUpload>, Option<SaveImageFileOutput>)> {
  let input = load_upload(args.image.as_ref())?;
  let Some(url) = args.output.as_ref() else {
    return Ok((input, None));
  };

  let mode = match args.overlay {
    OverlayKind::Legacy => OverlayMode::Legacy,
    OverlayKind::Scaled => {
      let source = input
        .as_ref()
        .and_then(ImageUpload::dimensions)
        .ok_or_else(|| anyhow::anyhow!("无法读取原图尺寸，不能使用 scaled 模式"))?;
      OverlayMode::Scaled {
        rendered: args.display.unwrap_or(source),
        source,
      }
    }
  };
  let mut draw = Draw::default().with_mode(mode);
  if let Some(font) = &args.font {
    draw = draw.with_font_file(font)?;
  }
  info!("输出路径: {} ({:?})", url, mode);
  let output = SaveImageFileOutput::from_url(url)?.with_draw(draw);
  Ok((input, Some(output)))
}
