// 该文件是 Outfit Guru （穿搭大师） 项目的一部分。
// src/api/http.rs - 基于 reqwest 的后端客户端
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

use reqwest::{
  StatusCode,
  blocking::{Client, Response, multipart},
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use super::{AnalyzeRequest, ApiConfig, ApiError, OutfitApi, RecommendRequest};
use crate::{
  FromUrl,
  input::ImageUpload,
  model::{AnalysisResponse, HealthStatus},
};

pub struct HttpOutfitApi {
  client: Client,
  config: ApiConfig,
}

impl FromUrl for HttpOutfitApi {
  type Error = ApiError;

  fn from_url(url: &Url) -> Result<Self, Self::Error> {
    match url.scheme() {
      "http" | "https" => Self::new(ApiConfig {
        base_url: url.clone(),
        ..ApiConfig::default()
      }),
      other => Err(ApiError::InvalidUrl(format!(
        "期望 http 或 https 方案, 实际为 '{}'",
        other
      ))),
    }
  }
}

impl HttpOutfitApi {
  pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
    let mut builder = Client::builder();
    // 默认不设超时，与网页端 fetch 行为一致
    builder = match config.timeout {
      Some(timeout) => builder.timeout(timeout),
      None => builder.timeout(None),
    };
    let client = builder.build()?;
    Ok(Self { client, config })
  }

  pub fn config(&self) -> &ApiConfig {
    &self.config
  }

  fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
    let url = self.config.endpoint(path)?;
    info!("POST {}", url);
    let response = self.client.post(url).json(body).send()?;
    read_json(response)
  }
}

/// 成功时解析 JSON；400 且带 `error` 字段时视为后端拒绝
fn read_json(response: Response) -> Result<Value, ApiError> {
  let status = response.status();
  if status.is_success() {
    return Ok(response.json()?);
  }

  let text = response.text()?;
  warn!("后端返回错误状态 {}: {}", status, text);
  if status == StatusCode::BAD_REQUEST
    && let Some(message) = rejection_message(&text)
  {
    return Err(ApiError::Rejected(message));
  }
  Err(ApiError::Status(status.as_u16()))
}

fn rejection_message(body: &str) -> Option<String> {
  let value: Value = serde_json::from_str(body).ok()?;
  value.get("error")?.as_str().map(str::to_string)
}

impl OutfitApi for HttpOutfitApi {
  fn detect_raw(&self, upload: &ImageUpload) -> Result<Value, ApiError> {
    let url = self.config.detect_endpoint()?;
    let part = multipart::Part::bytes(upload.bytes().to_vec())
      .file_name(upload.file_name().to_string())
      .mime_str(upload.mime_type())?;
    let form = multipart::Form::new().part("file", part);

    info!("POST {} ({}, {} 字节)", url, upload.file_name(), upload.size());
    let response = self.client.post(url).multipart(form).send()?;
    read_json(response)
  }

  fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResponse, ApiError> {
    debug!("分析请求包含 {} 个检测项", request.detections.len());
    let value = self.post_json("analyze", request)?;
    Ok(serde_json::from_value(value)?)
  }

  fn recommend(&self, request: &RecommendRequest) -> Result<Value, ApiError> {
    debug!("推荐请求包含 {} 个检测项", request.detections.len());
    self.post_json("recommend", request)
  }

  fn health(&self) -> Result<HealthStatus, ApiError> {
    let url = self.config.endpoint("health")?;
    info!("GET {}", url);
    let response = self.client.get(url).send()?;
    Ok(serde_json::from_value(read_json(response)?)?)
  }

  fn detect_endpoint(&self) -> String {
    self
      .config
      .detect_endpoint()
      .map(String::from)
      .unwrap_or_else(|_| self.config.base_url.to_string())
  }
}
